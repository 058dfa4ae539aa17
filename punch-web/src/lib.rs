//! Punch Web - kinematic punch visualizer
//!
//! Animates a hip → collar → shoulder → elbow → fist chain from rotation
//! speeds, initial angles and segment lengths, rendered with WebGPU.
//!
//! Entry point for the WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod kinematics;
pub mod animation;
mod bridge;
mod renderer;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    apply_preset, elapsed_time, get_parameter, get_parameter_range, get_parameters, get_pose, is_playing,
    pause, play, reset, reset_zoom, set_parameter, set_zoom, zoom_in, zoom_out, zoom_wheel,
};
pub use renderer::{get_debug_overlay_text, set_frame_metrics};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // Logger already installed (module re-initialized)
        return;
    }
    log::info!("🥊 Punch visualizer loaded");
}

/// Initialize WebGPU and draw the first frame - must be called before render_frame
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init() -> Result<(), JsValue> {
    renderer::initialize_gpu().await?;
    bridge::render_current();
    log::info!("✅ WebGPU initialized with pose rendering");
    Ok(())
}

/// Render one frame of the current pose
#[wasm_bindgen]
pub fn render_frame() {
    if !renderer::is_initialized() {
        log::warn!("render_frame called before init");
        return;
    }
    bridge::render_current();
}
