//! Parameter set - rotation speeds, initial angles and segment lengths
//!
//! Values arrive pre-clamped to the slider ranges below. The kinematic
//! model itself never rejects or clamps anything.

/// Inclusive slider range for one parameter
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamRange {
    const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Pull a value into the range
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Every user-adjustable parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamId {
    HipRotation,
    SpineSpring,
    ShoulderRotation,
    ElbowRotation,
    HipInitialAngle,
    ShoulderInitialAngle,
    ElbowInitialAngle,
    HipLength,
    CollarLength,
    UpperArmLength,
    ForearmLength,
}

/// All parameters in slider order
pub const PARAM_IDS: [ParamId; 11] = [
    ParamId::HipRotation,
    ParamId::SpineSpring,
    ParamId::ShoulderRotation,
    ParamId::ElbowRotation,
    ParamId::HipInitialAngle,
    ParamId::ShoulderInitialAngle,
    ParamId::ElbowInitialAngle,
    ParamId::HipLength,
    ParamId::CollarLength,
    ParamId::UpperArmLength,
    ParamId::ForearmLength,
];

impl ParamId {
    /// Look up a parameter by the key the JS side uses
    pub fn from_name(name: &str) -> Option<Self> {
        PARAM_IDS.iter().copied().find(|id| id.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ParamId::HipRotation => "hipRotation",
            ParamId::SpineSpring => "spineSpring",
            ParamId::ShoulderRotation => "shoulderRotation",
            ParamId::ElbowRotation => "elbowRotation",
            ParamId::HipInitialAngle => "hipInitialAngle",
            ParamId::ShoulderInitialAngle => "shoulderInitialAngle",
            ParamId::ElbowInitialAngle => "elbowInitialAngle",
            ParamId::HipLength => "hipLength",
            ParamId::CollarLength => "collarLength",
            ParamId::UpperArmLength => "upperArmLength",
            ParamId::ForearmLength => "forearmLength",
        }
    }

    /// UI range constraint
    pub fn range(&self) -> ParamRange {
        match self {
            ParamId::HipRotation => ParamRange::new(0.0, 180.0, 5.0),
            ParamId::SpineSpring => ParamRange::new(0.0, 180.0, 5.0),
            ParamId::ShoulderRotation => ParamRange::new(0.0, 360.0, 10.0),
            ParamId::ElbowRotation => ParamRange::new(0.0, 540.0, 10.0),
            ParamId::HipInitialAngle => ParamRange::new(-45.0, 45.0, 1.0),
            ParamId::ShoulderInitialAngle => ParamRange::new(-90.0, 90.0, 1.0),
            ParamId::ElbowInitialAngle => ParamRange::new(-150.0, 30.0, 1.0),
            ParamId::HipLength => ParamRange::new(10.0, 40.0, 1.0),
            ParamId::CollarLength => ParamRange::new(10.0, 40.0, 1.0),
            ParamId::UpperArmLength => ParamRange::new(20.0, 60.0, 1.0),
            ParamId::ForearmLength => ParamRange::new(20.0, 50.0, 1.0),
        }
    }

    /// Display unit (for log lines)
    pub fn unit(&self) -> &'static str {
        match self {
            ParamId::HipRotation | ParamId::ShoulderRotation | ParamId::ElbowRotation => "°/s",
            ParamId::HipInitialAngle | ParamId::ShoulderInitialAngle | ParamId::ElbowInitialAngle => "°",
            ParamId::HipLength | ParamId::CollarLength | ParamId::UpperArmLength | ParamId::ForearmLength => "cm",
            ParamId::SpineSpring => "",
        }
    }
}

/// Full parameter set for the kinetic chain
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    /// Hip angular speed (°/s) - starts the chain
    pub hip_rotation: f32,
    /// Spine spring constant k (only feeds the unused response time)
    pub spine_spring: f32,
    /// Shoulder angular speed (°/s)
    pub shoulder_rotation: f32,
    /// Elbow angular speed (°/s), relative to the shoulder while playing
    pub elbow_rotation: f32,

    pub hip_initial_angle: f32,
    pub shoulder_initial_angle: f32,
    pub elbow_initial_angle: f32,

    /// Segment lengths in centimeters
    pub hip_length: f32,
    pub collar_length: f32,
    pub upper_arm_length: f32,
    pub forearm_length: f32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            hip_rotation: 45.0,
            spine_spring: 45.0,
            shoulder_rotation: 180.0,
            elbow_rotation: 270.0,
            hip_initial_angle: 0.0,
            shoulder_initial_angle: 0.0,
            elbow_initial_angle: 0.0,
            hip_length: 20.0,
            collar_length: 20.0,
            upper_arm_length: 35.0,
            forearm_length: 30.0,
        }
    }
}

impl Parameters {
    pub fn get(&self, id: ParamId) -> f32 {
        match id {
            ParamId::HipRotation => self.hip_rotation,
            ParamId::SpineSpring => self.spine_spring,
            ParamId::ShoulderRotation => self.shoulder_rotation,
            ParamId::ElbowRotation => self.elbow_rotation,
            ParamId::HipInitialAngle => self.hip_initial_angle,
            ParamId::ShoulderInitialAngle => self.shoulder_initial_angle,
            ParamId::ElbowInitialAngle => self.elbow_initial_angle,
            ParamId::HipLength => self.hip_length,
            ParamId::CollarLength => self.collar_length,
            ParamId::UpperArmLength => self.upper_arm_length,
            ParamId::ForearmLength => self.forearm_length,
        }
    }

    /// Copy with one parameter replaced (stored as given)
    #[must_use]
    pub fn with(mut self, id: ParamId, value: f32) -> Self {
        let slot = match id {
            ParamId::HipRotation => &mut self.hip_rotation,
            ParamId::SpineSpring => &mut self.spine_spring,
            ParamId::ShoulderRotation => &mut self.shoulder_rotation,
            ParamId::ElbowRotation => &mut self.elbow_rotation,
            ParamId::HipInitialAngle => &mut self.hip_initial_angle,
            ParamId::ShoulderInitialAngle => &mut self.shoulder_initial_angle,
            ParamId::ElbowInitialAngle => &mut self.elbow_initial_angle,
            ParamId::HipLength => &mut self.hip_length,
            ParamId::CollarLength => &mut self.collar_length,
            ParamId::UpperArmLength => &mut self.upper_arm_length,
            ParamId::ForearmLength => &mut self.forearm_length,
        };
        *slot = value;
        self
    }

    /// Flat values in `PARAM_IDS` order (for slider re-sync on the JS side)
    pub fn as_flat(&self) -> Vec<f32> {
        PARAM_IDS.iter().map(|id| self.get(*id)).collect()
    }
}
