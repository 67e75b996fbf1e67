// SPDX-License-Identifier: MIT OR Apache-2.0
//! Static classification table for event trigger functions.

/// Sentinel identifier for "no function assigned".
pub const NONE_FUNCTION: &str = "None";

/// One row of the trigger-function table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSpec {
    /// Identifier stored in event records
    pub name: &'static str,
    /// Whether the function carries a typed parameter payload
    pub has_parameter: bool,
}

/// Trigger functions known to the authoring tool.
///
/// This is the authoring-time list; the runtime owns the authoritative
/// registry and resolves names at dispatch. Index 0 is the [`NONE_FUNCTION`]
/// sentinel so a fresh picker selection commits as a no-op record.
pub const FUNCTIONS: &[FunctionSpec] = &[
    FunctionSpec { name: NONE_FUNCTION, has_parameter: false },
    FunctionSpec { name: "Sound", has_parameter: true },
    FunctionSpec { name: "ThirdAction", has_parameter: true },
    FunctionSpec { name: "UseProp", has_parameter: true },
    FunctionSpec { name: "AddAmmoInChamber", has_parameter: false },
    FunctionSpec { name: "AddAmmoInMag", has_parameter: false },
    FunctionSpec { name: "Arm", has_parameter: false },
    FunctionSpec { name: "Cook", has_parameter: false },
    FunctionSpec { name: "DelAmmoChamber", has_parameter: false },
    FunctionSpec { name: "DelAmmoFromMag", has_parameter: false },
    FunctionSpec { name: "Disarm", has_parameter: false },
    FunctionSpec { name: "FireEnd", has_parameter: false },
    FunctionSpec { name: "FiringBullet", has_parameter: false },
    FunctionSpec { name: "FoldOff", has_parameter: false },
    FunctionSpec { name: "FoldOn", has_parameter: false },
    FunctionSpec { name: "IdleStart", has_parameter: false },
    FunctionSpec { name: "LauncherAppeared", has_parameter: false },
    FunctionSpec { name: "LauncherDisappeared", has_parameter: false },
    FunctionSpec { name: "MagHide", has_parameter: false },
    FunctionSpec { name: "MagIn", has_parameter: false },
    FunctionSpec { name: "MagOut", has_parameter: false },
    FunctionSpec { name: "MagShow", has_parameter: false },
    FunctionSpec { name: "MalfunctionOff", has_parameter: false },
    FunctionSpec { name: "ModChanged", has_parameter: false },
    FunctionSpec { name: "OffBoltCatch", has_parameter: false },
    FunctionSpec { name: "OnBoltCatch", has_parameter: false },
    FunctionSpec { name: "RemoveShell", has_parameter: false },
    FunctionSpec { name: "ShellEject", has_parameter: false },
    FunctionSpec { name: "WeapIn", has_parameter: false },
    FunctionSpec { name: "WeapOut", has_parameter: false },
    FunctionSpec { name: "OnBackpackDrop", has_parameter: false },
];

/// Whether `name` carries a typed parameter payload.
///
/// Names outside the table classify as parameter-free; records for them
/// keep a zeroed payload slot like any other non-parameter function.
pub fn has_parameter(name: &str) -> bool {
    FUNCTIONS.iter().any(|f| f.name == name && f.has_parameter)
}

/// Table row at `index`, if the index is in range.
pub fn spec_at(index: usize) -> Option<&'static FunctionSpec> {
    FUNCTIONS.get(index)
}

/// Position of `name` in the table.
pub fn position_of(name: &str) -> Option<usize> {
    FUNCTIONS.iter().position(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_sentinel_is_first() {
        assert_eq!(FUNCTIONS[0].name, NONE_FUNCTION);
        assert!(!FUNCTIONS[0].has_parameter);
    }

    #[test]
    fn test_exactly_three_functions_take_parameters() {
        let with_parameter: Vec<&str> = FUNCTIONS
            .iter()
            .filter(|f| f.has_parameter)
            .map(|f| f.name)
            .collect();
        assert_eq!(with_parameter, vec!["Sound", "ThirdAction", "UseProp"]);
    }

    #[test]
    fn test_classification_by_name() {
        assert!(has_parameter("Sound"));
        assert!(!has_parameter("ShellEject"));
        assert!(!has_parameter("NoSuchFunction"));
    }

    #[test]
    fn test_position_round_trips() {
        for (index, spec) in FUNCTIONS.iter().enumerate() {
            assert_eq!(position_of(spec.name), Some(index));
        }
        assert_eq!(position_of("NoSuchFunction"), None);
    }
}
