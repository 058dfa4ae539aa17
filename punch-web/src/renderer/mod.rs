//! Renderer module - WebGPU rendering of the pose, grid and target
//!
//! Re-exports only. All logic in submodules.

mod state;
mod skeleton;
mod shapes;
mod viewport;
mod debug_ui;

#[cfg(target_arch = "wasm32")]
pub use state::initialize_gpu;
pub use state::is_initialized;
pub use skeleton::render_pose;
pub use viewport::Viewport;
pub use debug_ui::{get_debug_overlay_text, set_frame_metrics, update_pose_metrics, update_view_metrics};
