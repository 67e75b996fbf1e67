// SPDX-License-Identifier: MIT OR Apache-2.0
//! Event records, typed parameters and guard conditions.

use crate::functions::NONE_FUNCTION;
use crate::store::{self, StoreError};
use serde::{Deserialize, Serialize};

/// Type tag for an event parameter payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParamKind {
    /// No payload
    #[default]
    None,
    /// Integer payload
    Int,
    /// Float payload
    Float,
    /// String payload
    String,
    /// Boolean payload
    Bool,
}

impl ParamKind {
    /// Display name used by the parameter-type picker
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Int => "Int32",
            Self::Float => "Float",
            Self::String => "String",
            Self::Bool => "Boolean",
        }
    }

    /// All kinds, in picker order
    pub fn all() -> &'static [ParamKind] {
        &[Self::None, Self::Int, Self::Float, Self::String, Self::Bool]
    }
}

/// Typed payload carried by parameter-bearing trigger functions.
///
/// Every value field is stored and serialized regardless of `kind`; only
/// the field matching `kind` is meaningful at dispatch. The editor zeroes
/// the whole payload whenever a parameter-free function is selected, so
/// stale values never leak into the next authoring pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventParameter {
    /// Which value field is meaningful
    pub kind: ParamKind,
    /// Boolean payload
    pub bool_value: bool,
    /// Float payload
    pub float_value: f32,
    /// Integer payload
    pub int_value: i32,
    /// String payload
    pub string_value: String,
}

impl EventParameter {
    /// True when every field is at its zero default
    pub fn is_zeroed(&self) -> bool {
        self.kind == ParamKind::None
            && !self.bool_value
            && self.float_value == 0.0
            && self.int_value == 0
            && self.string_value.is_empty()
    }
}

/// Runtime-parameter type a guard condition evaluates against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConditionParamKind {
    /// Boolean parameter
    #[default]
    Bool,
    /// Integer parameter
    Int,
    /// Float parameter
    Float,
    /// Trigger parameter, no stored value
    Trigger,
}

impl ConditionParamKind {
    /// Display name used by the condition-type picker
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Boolean",
            Self::Int => "Int32",
            Self::Float => "Float",
            Self::Trigger => "Trigger",
        }
    }

    /// All kinds, in picker order
    pub fn all() -> &'static [ConditionParamKind] {
        &[Self::Bool, Self::Int, Self::Float, Self::Trigger]
    }
}

/// Comparison applied between the named runtime parameter and the stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConditionMode {
    /// Parameter is true, or the trigger fired
    #[default]
    If,
    /// Parameter is false
    IfNot,
    /// Parameter is greater than the stored value
    Greater,
    /// Parameter is less than the stored value
    Less,
    /// Parameter equals the stored value
    Equals,
    /// Parameter differs from the stored value
    NotEquals,
}

impl ConditionMode {
    /// Display name used by the comparison picker
    pub fn name(&self) -> &'static str {
        match self {
            Self::If => "If",
            Self::IfNot => "IfNot",
            Self::Greater => "Greater",
            Self::Less => "Less",
            Self::Equals => "Equals",
            Self::NotEquals => "NotEquals",
        }
    }

    /// All modes, in picker order
    pub fn all() -> &'static [ConditionMode] {
        &[
            Self::If,
            Self::IfNot,
            Self::Greater,
            Self::Less,
            Self::Equals,
            Self::NotEquals,
        ]
    }
}

/// A single guard on an event record.
///
/// Conditions are kept in authored order; the runtime treats that order as
/// significant when it evaluates the guard list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventCondition {
    /// Name of the runtime parameter this guard reads
    pub param_name: String,
    /// Type of that parameter
    pub param_kind: ConditionParamKind,
    /// Comparison mode
    pub compare: ConditionMode,
    /// Compared value for boolean parameters
    pub bool_value: bool,
    /// Compared value for float parameters
    pub float_value: f32,
    /// Compared value for integer parameters
    pub int_value: i32,
}

/// One timed trigger attached to an animation clip.
///
/// Fields are private on purpose: the editing protocol below keeps the
/// parameter and condition invariants intact while the editor mutates a
/// record in place across many UI passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Identifier of the trigger function, `"None"` when unassigned
    function_id: String,
    /// Payload for parameter-bearing functions
    parameter: Option<EventParameter>,
    /// Guard conditions in authored order
    conditions: Vec<EventCondition>,
    /// Trigger position as a fraction of clip length
    normalized_time: f32,
}

impl Default for EventRecord {
    fn default() -> Self {
        Self {
            function_id: NONE_FUNCTION.to_string(),
            parameter: None,
            conditions: Vec::new(),
            normalized_time: 0.0,
        }
    }
}

impl EventRecord {
    /// Create a record for the given function with no payload or guards
    pub fn new(function_id: impl Into<String>) -> Self {
        Self {
            function_id: function_id.into(),
            ..Self::default()
        }
    }

    /// Identifier of the behavior this record triggers
    pub fn function_id(&self) -> &str {
        &self.function_id
    }

    /// Set the trigger function identifier
    pub fn set_function_id(&mut self, function_id: impl Into<String>) {
        self.function_id = function_id.into();
    }

    /// Trigger position as a fraction of clip length, in `[0, 1]`
    pub fn normalized_time(&self) -> f32 {
        self.normalized_time
    }

    /// Stamp the trigger position, clamped into `[0, 1]`
    pub fn set_normalized_time(&mut self, time: f32) {
        self.normalized_time = time.clamp(0.0, 1.0);
    }

    /// Parameter payload, if one has been authored
    pub fn parameter(&self) -> Option<&EventParameter> {
        self.parameter.as_ref()
    }

    /// Get the parameter payload, creating a zeroed one if absent
    pub fn ensure_parameter(&mut self) -> &mut EventParameter {
        self.parameter.get_or_insert_with(EventParameter::default)
    }

    /// Reset the parameter payload to its zeroed state.
    ///
    /// A reset, not a delete: the payload slot is kept (created when it
    /// never existed) so a record reads back identically whether its
    /// function dropped the parameter or never had one.
    pub fn reset_parameter(&mut self) {
        *self.ensure_parameter() = EventParameter::default();
    }

    /// Guard conditions, in authored order
    pub fn conditions(&self) -> &[EventCondition] {
        &self.conditions
    }

    /// Get the condition at `index`, growing the list to cover it
    pub fn condition_at(&mut self, index: i64) -> Result<&mut EventCondition, StoreError> {
        store::get_or_create(&mut self.conditions, index)
    }

    /// Drop all guard conditions.
    ///
    /// Runs every editing pass while condition editing is toggled off; the
    /// toggle is authoritative over whatever was stored before.
    pub fn clear_conditions(&mut self) {
        self.conditions.clear();
    }
}
