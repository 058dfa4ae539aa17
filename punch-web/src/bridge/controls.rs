//! UI controls - parameter sliders, presets and play/pause/reset
//!
//! Called from JavaScript. Every call runs to completion and re-renders;
//! the JS side pulls state back out, nothing is pushed to it.

use wasm_bindgen::prelude::*;
use super::store;
use crate::animation::Command;
use crate::kinematics::{ParamId, PunchType};

/// Set one parameter by its JS key. Values are clamped to the slider range.
/// Returns false (and changes nothing) for unknown keys or non-finite values.
#[wasm_bindgen]
pub fn set_parameter(name: &str, value: f32) -> bool {
    let Some(id) = ParamId::from_name(name) else {
        log::warn!("Unknown parameter: {}", name);
        return false;
    };
    if !value.is_finite() {
        log::warn!("Ignoring non-finite value for {}: {}", name, value);
        return false;
    }

    let value = id.range().clamp(value);
    store::dispatch(Command::SetParameter(id, value));
    log::debug!("{}: {}{}", id.name(), value, id.unit());
    true
}

/// Current value of one parameter (undefined for unknown keys)
#[wasm_bindgen]
pub fn get_parameter(name: &str) -> Option<f32> {
    let id = ParamId::from_name(name)?;
    let (scene, _) = store::snapshot();
    Some(scene.parameters.get(id))
}

/// `[min, max, step]` for one parameter's slider (empty for unknown keys)
#[wasm_bindgen]
pub fn get_parameter_range(name: &str) -> Vec<f32> {
    ParamId::from_name(name)
        .map(|id| {
            let range = id.range();
            vec![range.min, range.max, range.step]
        })
        .unwrap_or_default()
}

/// All parameter values in slider order (for re-syncing the UI)
#[wasm_bindgen]
pub fn get_parameters() -> Vec<f32> {
    let (scene, _) = store::snapshot();
    scene.parameters.as_flat()
}

/// Apply a punch preset ("jab", "cross", "hook", "uppercut")
#[wasm_bindgen]
pub fn apply_preset(name: &str) -> bool {
    let Some(punch) = PunchType::from_name(name) else {
        log::warn!("Unknown punch preset: {}", name);
        return false;
    };

    store::dispatch(Command::ApplyPreset(punch));
    log::info!("🥊 Applied {} preset: {:?}", punch.label(), punch.preset());
    true
}

#[wasm_bindgen]
pub fn play() {
    store::dispatch(Command::Play);
    log::info!("▶ Animation started");
}

#[wasm_bindgen]
pub fn pause() {
    store::dispatch(Command::Pause);
    log::info!("⏸ Animation paused");
}

#[wasm_bindgen]
pub fn reset() {
    store::dispatch(Command::Reset);
    log::info!("⏹ Animation reset");
}

#[wasm_bindgen]
pub fn is_playing() -> bool {
    store::snapshot().0.animation.is_playing()
}

/// Animation time in seconds
#[wasm_bindgen]
pub fn elapsed_time() -> f64 {
    store::snapshot().0.animation.elapsed()
}

/// Current pose as flat `[x, y]` pairs in centimeters:
/// hip start/end, collar start/end, shoulder, elbow, fist, target
#[wasm_bindgen]
pub fn get_pose() -> Vec<f32> {
    store::snapshot().0.pose().as_flat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FRAME_STEP;
    use crate::kinematics::POSE_POINT_COUNT;

    #[test]
    fn test_set_parameter_clamps_to_range() {
        assert!(set_parameter("hipRotation", 500.0));
        assert_eq!(get_parameter("hipRotation"), Some(180.0));

        assert!(set_parameter("forearmLength", 5.0));
        assert_eq!(get_parameter("forearmLength"), Some(20.0));
    }

    #[test]
    fn test_rejects_unknown_and_non_finite() {
        assert!(!set_parameter("neckRotation", 10.0));
        assert!(!set_parameter("hipRotation", f32::NAN));
        assert_eq!(get_parameter("hipRotation"), Some(45.0));
        assert_eq!(get_parameter("neckRotation"), None);
        assert!(!apply_preset("haymaker"));
    }

    #[test]
    fn test_parameter_range_for_sliders() {
        assert_eq!(get_parameter_range("elbowInitialAngle"), vec![-150.0, 30.0, 1.0]);
        assert!(get_parameter_range("neckRotation").is_empty());
    }

    #[test]
    fn test_preset_visible_to_ui() {
        assert!(apply_preset("cross"));
        let values = get_parameters();
        assert_eq!(&values[..4], &[40.0, 50.0, 200.0, 300.0]);
    }

    #[test]
    fn test_play_pause_reset_cycle() {
        play();
        assert!(is_playing());
        assert!((elapsed_time() - FRAME_STEP).abs() < 1e-12);

        store::on_animation_frame();
        store::on_animation_frame();
        assert!((elapsed_time() - 3.0 * FRAME_STEP).abs() < 1e-9);

        pause();
        assert!(!is_playing());
        store::on_animation_frame();
        assert!((elapsed_time() - 3.0 * FRAME_STEP).abs() < 1e-9);

        play();
        reset();
        assert!(!is_playing());
        assert_eq!(elapsed_time(), 0.0);
    }

    #[test]
    fn test_pose_pull() {
        assert!(set_parameter("upperArmLength", 35.0));
        assert!(set_parameter("forearmLength", 30.0));
        let pose = get_pose();
        assert_eq!(pose.len(), POSE_POINT_COUNT * 2);
        // shoulder (10, 0) -> fist (75, 0) with all angles at zero
        assert!((pose[8] - 10.0).abs() < 1e-4);
        assert!((pose[12] - 75.0).abs() < 1e-4);
        assert!(pose[13].abs() < 1e-4);
    }
}
