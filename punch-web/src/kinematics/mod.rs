//! Kinematics module - joint angles and forward kinematics of the punch chain
//!
//! Re-exports only. All logic in submodules.

mod params;
mod angles;
mod pose;
mod presets;

pub use params::{ParamId, ParamRange, Parameters, PARAM_IDS};
pub use angles::{
    interior_angle, resolve_joint_angles, spine_response_time, wrap_degrees,
    AngleSource, Joint, JointAngles,
};
pub use pose::{
    compute_pose, Point, Pose, PoseMetrics, Segment,
    POSE_POINT_COUNT, TARGET_OFFSET_CM, TARGET_RADIUS_CM,
};
pub use presets::{PunchType, RotationPreset, PUNCH_TYPES};
