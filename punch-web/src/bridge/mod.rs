//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points for the UI live here.
//! Re-exports only in mod.rs, logic in submodules.

mod store;
mod controls;
mod view;

pub use controls::{
    set_parameter,
    get_parameter,
    get_parameter_range,
    get_parameters,
    apply_preset,
    play,
    pause,
    reset,
    is_playing,
    elapsed_time,
    get_pose,
};

pub use view::{set_zoom, zoom_in, zoom_out, zoom_wheel, reset_zoom};

pub(crate) use store::render_current;
