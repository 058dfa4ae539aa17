//! Animation state - play flag, elapsed time and instantaneous angles
//!
//! Transitions consume the state and return the next one; nothing is
//! mutated in place.

use crate::kinematics::Joint;

/// Play state of the animation plus the angles used while stopped
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    playing: bool,
    /// Seconds of animation time (only advances while playing)
    elapsed: f64,
    hip_angle_deg: f32,
    shoulder_angle_deg: f32,
    elbow_angle_deg: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Stored angle (degrees) used while stopped
    pub fn instantaneous_angle(&self, joint: Joint) -> f32 {
        match joint {
            Joint::Hip => self.hip_angle_deg,
            Joint::Shoulder => self.shoulder_angle_deg,
            Joint::Elbow => self.elbow_angle_deg,
        }
    }

    #[must_use]
    pub fn with_instantaneous_angle(mut self, joint: Joint, deg: f32) -> Self {
        match joint {
            Joint::Hip => self.hip_angle_deg = deg,
            Joint::Shoulder => self.shoulder_angle_deg = deg,
            Joint::Elbow => self.elbow_angle_deg = deg,
        }
        self
    }

    #[must_use]
    pub fn play(mut self) -> Self {
        self.playing = true;
        self
    }

    /// Stop, keeping elapsed time
    #[must_use]
    pub fn pause(mut self) -> Self {
        self.playing = false;
        self
    }

    /// Stop and rewind to zero. Instantaneous angles are kept.
    #[must_use]
    pub fn reset(mut self) -> Self {
        self.playing = false;
        self.elapsed = 0.0;
        self
    }

    /// Advance animation time by `dt` seconds; no-op while stopped
    #[must_use]
    pub fn advance(mut self, dt: f64) -> Self {
        if self.playing && dt > 0.0 {
            self.elapsed += dt;
        }
        self
    }
}
