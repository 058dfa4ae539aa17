//! Pose computation - forward kinematics of the punch chain
//!
//! Positions are centimeters relative to the scene center, x right and
//! y down (canvas convention), so the target sits at negative y.

use super::angles::{interior_angle, resolve_joint_angles, JointAngles};
use super::params::Parameters;
use crate::animation::AnimationState;

/// 2D point in centimeters
pub type Point = (f32, f32);

/// Target distance above the scene center (cm)
pub const TARGET_OFFSET_CM: f32 = 50.0;

/// Target radius (cm) - 10 cm bullseye
pub const TARGET_RADIUS_CM: f32 = 5.0;

/// Number of points in [`Pose::as_flat`]
pub const POSE_POINT_COUNT: usize = 8;

/// Rigid rod between two points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Segment of `length` centered on `center`, pointing along `angle`
    pub fn centered(center: Point, angle: f32, length: f32) -> Self {
        let half = length / 2.0;
        let (sin, cos) = angle.sin_cos();
        Self {
            start: (center.0 - cos * half, center.1 - sin * half),
            end: (center.0 + cos * half, center.1 + sin * half),
        }
    }

    pub fn midpoint(&self) -> Point {
        ((self.start.0 + self.end.0) / 2.0, (self.start.1 + self.end.1) / 2.0)
    }

    pub fn length(&self) -> f32 {
        distance(self.start, self.end)
    }
}

/// Full set of joint positions for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub angles: JointAngles,
    /// Shared pivot of the hip and collar segments
    pub center: Point,
    pub hip: Segment,
    pub collar: Segment,
    pub shoulder: Point,
    pub elbow: Point,
    pub fist: Point,
    pub target: Point,
}

/// Derived readout for the debug overlay
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseMetrics {
    pub hip_deg: f32,
    pub shoulder_deg: f32,
    pub elbow_deg: f32,
    /// Interior angle at the elbow (180° = straight arm)
    pub elbow_flexion_deg: f32,
    /// Shoulder to fist distance
    pub reach_cm: f32,
    /// Fist to target center distance
    pub target_distance_cm: f32,
}

/// Compute the pose from parameters and animation state
pub fn compute_pose(params: &Parameters, animation: &AnimationState) -> Pose {
    let angles = resolve_joint_angles(params, animation);
    let center = (0.0, 0.0);

    let hip = Segment::centered(center, angles.hip, params.hip_length);
    let collar = Segment::centered(center, angles.collar, params.collar_length);

    // Right end of the collar bone is the shoulder
    let shoulder = collar.end;
    let elbow = extend(shoulder, angles.shoulder, params.upper_arm_length);
    let fist = extend(elbow, angles.elbow, params.forearm_length);

    Pose {
        angles,
        center,
        hip,
        collar,
        shoulder,
        elbow,
        fist,
        target: (center.0, center.1 - TARGET_OFFSET_CM),
    }
}

/// Distal joint = proximal + length * (cos θ, sin θ)
fn extend(from: Point, angle: f32, length: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    (from.0 + cos * length, from.1 + sin * length)
}

fn distance(a: Point, b: Point) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

impl Pose {
    /// Flat `[x, y]` pairs: hip start/end, collar start/end, shoulder,
    /// elbow, fist, target
    pub fn as_flat(&self) -> Vec<f32> {
        let points: [Point; POSE_POINT_COUNT] = [
            self.hip.start,
            self.hip.end,
            self.collar.start,
            self.collar.end,
            self.shoulder,
            self.elbow,
            self.fist,
            self.target,
        ];
        points.iter().flat_map(|p| [p.0, p.1]).collect()
    }

    pub fn metrics(&self) -> PoseMetrics {
        PoseMetrics {
            hip_deg: self.angles.hip.to_degrees(),
            shoulder_deg: self.angles.shoulder.to_degrees(),
            elbow_deg: self.angles.elbow.to_degrees(),
            elbow_flexion_deg: interior_angle(self.shoulder, self.elbow, self.fist),
            reach_cm: distance(self.shoulder, self.fist),
            target_distance_cm: distance(self.fist, self.target),
        }
    }
}
