//! Joint angle resolution
//!
//! Each driven joint reads its angle from an [`AngleSource`]: a rotation
//! speed while the animation plays, the stored instantaneous angle while it
//! is stopped. The elbow is relative to the shoulder only in the playing
//! case; a stopped elbow angle is absolute.

use super::params::Parameters;
use crate::animation::AnimationState;

/// Joints with their own angle source. The collar is rigidly coupled to the hip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Joint {
    Hip,
    Shoulder,
    Elbow,
}

/// Where a joint angle comes from on this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AngleSource {
    /// Angular speed in degrees per second, integrated over elapsed time
    Speed(f32),
    /// Fixed angle in degrees
    Fixed(f32),
}

impl AngleSource {
    /// Pick the source for `joint` given the play state
    pub fn for_joint(joint: Joint, params: &Parameters, animation: &AnimationState) -> Self {
        if animation.is_playing() {
            AngleSource::Speed(match joint {
                Joint::Hip => params.hip_rotation,
                Joint::Shoulder => params.shoulder_rotation,
                Joint::Elbow => params.elbow_rotation,
            })
        } else {
            AngleSource::Fixed(animation.instantaneous_angle(joint))
        }
    }

    /// Angle in degrees after `elapsed` seconds. Speeds wrap into [0, 360).
    pub fn resolve_deg(&self, elapsed: f64) -> f32 {
        match *self {
            AngleSource::Speed(deg_per_sec) => wrap_degrees(elapsed * f64::from(deg_per_sec)),
            AngleSource::Fixed(deg) => deg,
        }
    }
}

/// Wrap an angle in degrees into [0, 360)
pub fn wrap_degrees(deg: f64) -> f32 {
    // narrowing can round 359.99999.. up to 360.0
    (deg.rem_euclid(360.0) as f32).rem_euclid(360.0)
}

/// Resolved angles of the chain, in radians
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JointAngles {
    pub hip: f32,
    pub collar: f32,
    pub shoulder: f32,
    pub elbow: f32,
}

/// Resolve every joint angle for the current frame
pub fn resolve_joint_angles(params: &Parameters, animation: &AnimationState) -> JointAngles {
    let t = animation.elapsed();

    let hip = AngleSource::for_joint(Joint::Hip, params, animation).resolve_deg(t);
    let shoulder = AngleSource::for_joint(Joint::Shoulder, params, animation).resolve_deg(t);
    let elbow = match AngleSource::for_joint(Joint::Elbow, params, animation) {
        source @ AngleSource::Speed(_) => shoulder + source.resolve_deg(t),
        AngleSource::Fixed(deg) => deg,
    };

    let hip = hip.to_radians();
    JointAngles {
        hip,
        // Rigid coupling: the spine spring does not lag the collar
        collar: hip,
        shoulder: shoulder.to_radians(),
        elbow: elbow.to_radians(),
    }
}

/// Spine response time constant (seconds) for spring constant `k`.
///
/// Higher k gives a faster response. Reported in the debug overlay only;
/// the collar angle does not consume it.
pub fn spine_response_time(k: f32) -> f32 {
    let k = k.max(0.0001);
    0.2 + (100.0 - k.min(100.0)) / 100.0 * 0.8
}

/// Angle at `vertex` between the rays to `a` and `b`, in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
/// - 180° = straight
/// - 90° = right angle
pub fn interior_angle(a: (f32, f32), vertex: (f32, f32), b: (f32, f32)) -> f32 {
    let v1 = (a.0 - vertex.0, a.1 - vertex.1);
    let v2 = (b.0 - vertex.0, b.1 - vertex.1);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    // Degenerate segment: call it straight
    if mag1 < 0.0001 || mag2 < 0.0001 {
        return 180.0;
    }

    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn playing_at(t: f64) -> AnimationState {
        AnimationState::default().play().advance(t)
    }

    #[test]
    fn test_hip_angle_example() {
        let params = Parameters { hip_rotation: 20.0, ..Parameters::default() };
        let angles = resolve_joint_angles(&params, &playing_at(9.0));
        assert!((angles.hip - PI).abs() < 1e-4);
    }

    #[test]
    fn test_hip_angle_periodic() {
        let params = Parameters { hip_rotation: 20.0, ..Parameters::default() };
        let period = 360.0 / 20.0;
        for t in [0.5, 3.3, 7.25, 11.0] {
            let a = resolve_joint_angles(&params, &playing_at(t)).hip;
            let b = resolve_joint_angles(&params, &playing_at(t + period)).hip;
            assert!((a - b).abs() < 1e-3, "t={t}: {a} vs {b}");
        }
    }

    #[test]
    fn test_collar_follows_hip() {
        let cases = [
            (Parameters::default(), playing_at(2.7)),
            (Parameters { spine_spring: 0.0, ..Parameters::default() }, playing_at(0.4)),
            (Parameters { spine_spring: 180.0, hip_rotation: 95.0, ..Parameters::default() }, playing_at(13.1)),
            (Parameters::default(), AnimationState::default().with_instantaneous_angle(Joint::Hip, -30.0)),
        ];
        for (params, animation) in cases {
            let angles = resolve_joint_angles(&params, &animation);
            assert_eq!(angles.collar, angles.hip);
        }
    }

    #[test]
    fn test_elbow_relative_while_playing() {
        let params = Parameters {
            shoulder_rotation: 100.0,
            elbow_rotation: 50.0,
            ..Parameters::default()
        };
        let angles = resolve_joint_angles(&params, &playing_at(1.0));
        assert!((angles.shoulder.to_degrees() - 100.0).abs() < 1e-3);
        assert!((angles.elbow.to_degrees() - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_elbow_absolute_while_stopped() {
        let animation = AnimationState::default()
            .with_instantaneous_angle(Joint::Shoulder, 40.0)
            .with_instantaneous_angle(Joint::Elbow, -20.0);
        let angles = resolve_joint_angles(&Parameters::default(), &animation);
        assert!((angles.shoulder.to_degrees() - 40.0).abs() < 1e-4);
        assert!((angles.elbow.to_degrees() + 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_stopped_ignores_speeds() {
        let animation = AnimationState::default().with_instantaneous_angle(Joint::Hip, 10.0);
        let slow = Parameters { hip_rotation: 5.0, ..Parameters::default() };
        let fast = Parameters { hip_rotation: 175.0, ..Parameters::default() };
        assert_eq!(
            resolve_joint_angles(&slow, &animation),
            resolve_joint_angles(&fast, &animation)
        );
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(0.0), 0.0);
    }

    #[test]
    fn test_wrap_degrees_stays_below_360_after_narrowing() {
        assert_eq!(wrap_degrees(-1e-9), 0.0);
        assert_eq!(wrap_degrees(720.0 - 1e-10), 0.0);
        assert!(wrap_degrees(359.5) < 360.0);
    }

    #[test]
    fn test_spine_response_time() {
        assert!((spine_response_time(100.0) - 0.2).abs() < 1e-6);
        assert!((spine_response_time(180.0) - 0.2).abs() < 1e-6);
        assert!((spine_response_time(50.0) - 0.6).abs() < 1e-6);
        // k is floored just above zero
        assert!((spine_response_time(0.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_interior_angle() {
        assert!((interior_angle((0.0, 0.0), (0.5, 0.0), (1.0, 0.0)) - 180.0).abs() < 0.01);
        assert!((interior_angle((0.0, 0.0), (0.5, 0.0), (0.5, 0.5)) - 90.0).abs() < 0.01);
        assert_eq!(interior_angle((1.0, 1.0), (1.0, 1.0), (2.0, 0.0)), 180.0);
    }
}
