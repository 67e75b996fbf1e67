// SPDX-License-Identifier: MIT OR Apache-2.0
//! Event data model for CuePoint Editor.
//!
//! This crate provides the authoring-side model for timed animation events:
//! - Event records with optional typed parameters
//! - Ordered guard conditions
//! - Per-state collections inside a root event data asset
//! - A static classification table of trigger functions
//!
//! ## Architecture
//!
//! Everything is addressed by plain integer indices supplied by the editor
//! UI. Missing slots are created on first access through the sparse store
//! in [`store`] and are never destroyed by this crate; only explicit
//! protocol calls (parameter reset, condition clear) discard data.

pub mod collection;
pub mod functions;
pub mod record;
pub mod store;

pub use collection::{CommitError, EventCollection, StateEventData};
pub use functions::{FunctionSpec, FUNCTIONS, NONE_FUNCTION};
pub use record::{
    ConditionMode, ConditionParamKind, EventCondition, EventParameter, EventRecord, ParamKind,
};
pub use store::{get_or_create, StoreError};
