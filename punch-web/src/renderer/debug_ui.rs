//! Debug overlay - frame timing and a readout of the current pose

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::kinematics::PoseMetrics;
use super::viewport::PIXELS_PER_CM;

/// Metrics storage
struct Metrics {
    fps: f32,
    frame_time_ms: f32,

    playing: bool,
    elapsed: f64,
    pose: PoseMetrics,
    /// Spine response time; reported, not applied to the collar
    spine_tau: f32,
    zoom: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time_ms: 0.0,
            playing: false,
            elapsed: 0.0,
            pose: PoseMetrics::default(),
            spine_tau: 0.0,
            zoom: 1.0,
        }
    }
}

thread_local! {
    static METRICS: RefCell<Metrics> = RefCell::new(Metrics::default());
}

/// Set frame timing (called from JS each frame)
#[wasm_bindgen]
pub fn set_frame_metrics(fps: f32, frame_time_ms: f32) {
    // Ignore invalid times (tab backgrounded or first frame)
    if !(1.0..=200.0).contains(&frame_time_ms) {
        return;
    }

    METRICS.with(|m| {
        let mut metrics = m.borrow_mut();
        // Exponential moving average for smooth display
        metrics.fps = metrics.fps * 0.9 + fps * 0.1;
        metrics.frame_time_ms = metrics.frame_time_ms * 0.9 + frame_time_ms * 0.1;
    });
}

/// Update the pose readout (pushed by the bridge after every state change)
pub fn update_pose_metrics(playing: bool, elapsed: f64, pose: PoseMetrics, spine_tau: f32) {
    METRICS.with(|m| {
        let mut metrics = m.borrow_mut();
        metrics.playing = playing;
        metrics.elapsed = elapsed;
        metrics.pose = pose;
        metrics.spine_tau = spine_tau;
    });
}

/// Update the zoom readout
pub fn update_view_metrics(zoom: f32) {
    METRICS.with(|m| m.borrow_mut().zoom = zoom);
}

/// Get formatted overlay text (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_debug_overlay_text() -> String {
    METRICS.with(|m| {
        let metrics = m.borrow();
        format!(
            "FPS: {:.0} | Frame: {:.1}ms\n\
             {} t={:.2}s\n\
             Hip: {:.0}° Shoulder: {:.0}° Elbow: {:.0}°\n\
             Elbow flex: {:.0}° | Reach: {:.1}cm\n\
             Target: {:.1}cm | Spine τ: {:.2}s (unused)\n\
             Zoom: {:.0}% | Scale: {}px = 1cm",
            metrics.fps, metrics.frame_time_ms,
            if metrics.playing { "▶" } else { "⏸" },
            metrics.elapsed,
            metrics.pose.hip_deg,
            metrics.pose.shoulder_deg,
            metrics.pose.elbow_deg,
            metrics.pose.elbow_flexion_deg,
            metrics.pose.reach_cm,
            metrics.pose.target_distance_cm,
            metrics.spine_tau,
            metrics.zoom * 100.0,
            PIXELS_PER_CM,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_metrics_ignore_outliers() {
        set_frame_metrics(60.0, 500.0);
        set_frame_metrics(60.0, 0.5);
        assert!(get_debug_overlay_text().starts_with("FPS: 0 | Frame: 0.0ms"));

        set_frame_metrics(60.0, 16.0);
        assert!(get_debug_overlay_text().starts_with("FPS: 6 | Frame: 1.6ms"));
    }

    #[test]
    fn test_pose_readout() {
        let pose = PoseMetrics {
            hip_deg: 90.0,
            reach_cm: 65.0,
            ..PoseMetrics::default()
        };
        update_pose_metrics(true, 1.5, pose, 0.76);
        let text = get_debug_overlay_text();
        assert!(text.contains("▶ t=1.50s"));
        assert!(text.contains("Hip: 90°"));
        assert!(text.contains("Reach: 65.0cm"));
        assert!(text.contains("Spine τ: 0.76s"));
    }

    #[test]
    fn test_zoom_readout() {
        assert!(get_debug_overlay_text().ends_with("Zoom: 100% | Scale: 4px = 1cm"));
        update_view_metrics(2.5);
        assert!(get_debug_overlay_text().ends_with("Zoom: 250% | Scale: 4px = 1cm"));
    }
}
