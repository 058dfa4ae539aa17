//! Scene - the immutable per-frame record of parameters and animation state
//!
//! UI events arrive as [`Command`]s. `Scene::apply` returns the next scene;
//! the pose is computed from a scene on demand and never stored.

use super::state::AnimationState;
use crate::kinematics::{compute_pose, Joint, ParamId, Parameters, Pose, PunchType};

/// Everything that can change a scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    SetParameter(ParamId, f32),
    ApplyPreset(PunchType),
    Play,
    Pause,
    Reset,
    /// Advance animation time by this many seconds
    Advance(f64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Scene {
    pub parameters: Parameters,
    pub animation: AnimationState,
}

impl Scene {
    pub fn new(parameters: Parameters) -> Self {
        Self { parameters, animation: AnimationState::new() }
    }

    #[must_use]
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::SetParameter(id, value) => self.set_parameter(id, value),
            Command::ApplyPreset(punch) => Self {
                parameters: punch.preset().apply(self.parameters),
                ..self
            },
            Command::Play => Self { animation: self.animation.play(), ..self },
            Command::Pause => Self { animation: self.animation.pause(), ..self },
            Command::Reset => Self { animation: self.animation.reset(), ..self },
            Command::Advance(dt) => Self { animation: self.animation.advance(dt), ..self },
        }
    }

    pub fn pose(&self) -> Pose {
        compute_pose(&self.parameters, &self.animation)
    }

    fn set_parameter(self, id: ParamId, value: f32) -> Self {
        let parameters = self.parameters.with(id, value);
        let elapsed = self.animation.elapsed();

        // Speed sliders snap the stopped angle to where that speed would be
        // now (absolute, elbow included); initial-angle sliders set it directly.
        let animation = match id {
            ParamId::HipRotation => self.animation.with_instantaneous_angle(Joint::Hip, speed_angle(elapsed, value)),
            ParamId::ShoulderRotation => self.animation.with_instantaneous_angle(Joint::Shoulder, speed_angle(elapsed, value)),
            ParamId::ElbowRotation => self.animation.with_instantaneous_angle(Joint::Elbow, speed_angle(elapsed, value)),
            ParamId::HipInitialAngle => self.animation.with_instantaneous_angle(Joint::Hip, value),
            ParamId::ShoulderInitialAngle => self.animation.with_instantaneous_angle(Joint::Shoulder, value),
            ParamId::ElbowInitialAngle => self.animation.with_instantaneous_angle(Joint::Elbow, value),
            ParamId::SpineSpring
            | ParamId::HipLength
            | ParamId::CollarLength
            | ParamId::UpperArmLength
            | ParamId::ForearmLength => self.animation,
        };

        Self { parameters, animation }
    }
}

/// `(elapsed * speed) mod 360`, truncated toward zero like the slider handlers
fn speed_angle(elapsed: f64, deg_per_sec: f32) -> f32 {
    ((elapsed * f64::from(deg_per_sec)) % 360.0) as f32
}
