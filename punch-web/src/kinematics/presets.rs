//! Punch presets - fixed rotation patterns per punch type

use super::params::Parameters;

/// Punch type labels (button order)
pub const PUNCH_TYPES: [&str; 4] = ["jab", "cross", "hook", "uppercut"];

/// Punch type enum for type-safe handling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PunchType {
    Jab,
    Cross,
    Hook,
    Uppercut,
}

/// The four rotation parameters a preset overwrites
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationPreset {
    pub hip_rotation: f32,
    pub spine_spring: f32,
    pub shoulder_rotation: f32,
    pub elbow_rotation: f32,
}

impl PunchType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "jab" => Some(PunchType::Jab),
            "cross" => Some(PunchType::Cross),
            "hook" => Some(PunchType::Hook),
            "uppercut" => Some(PunchType::Uppercut),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PunchType::Jab => "jab",
            PunchType::Cross => "cross",
            PunchType::Hook => "hook",
            PunchType::Uppercut => "uppercut",
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            PunchType::Jab => "Jab",
            PunchType::Cross => "Cross",
            PunchType::Hook => "Hook",
            PunchType::Uppercut => "Uppercut",
        }
    }

    pub fn preset(&self) -> RotationPreset {
        let (hip_rotation, spine_spring, shoulder_rotation, elbow_rotation) = match self {
            PunchType::Jab => (20.0, 30.0, 150.0, 200.0),
            PunchType::Cross => (40.0, 50.0, 200.0, 300.0),
            PunchType::Hook => (60.0, 80.0, 180.0, 150.0),
            PunchType::Uppercut => (50.0, 70.0, 220.0, 280.0),
        };
        RotationPreset { hip_rotation, spine_spring, shoulder_rotation, elbow_rotation }
    }
}

impl RotationPreset {
    /// Overwrite the rotation parameters, leaving angles and lengths alone
    pub fn apply(&self, params: Parameters) -> Parameters {
        Parameters {
            hip_rotation: self.hip_rotation,
            spine_spring: self.spine_spring,
            shoulder_rotation: self.shoulder_rotation,
            elbow_rotation: self.elbow_rotation,
            ..params
        }
    }
}
