//! View controls - zoom about the canvas center

use wasm_bindgen::prelude::*;
use super::store;

/// Set zoom (clamped); returns the zoom actually applied
#[wasm_bindgen]
pub fn set_zoom(zoom: f32) -> f32 {
    store::update(|app| {
        app.viewport = app.viewport.with_zoom(zoom);
        app.viewport.zoom()
    })
}

/// +/- buttons step by 0.2
#[wasm_bindgen]
pub fn zoom_in() -> f32 {
    store::update(|app| {
        app.viewport = app.viewport.zoom_in();
        app.viewport.zoom()
    })
}

#[wasm_bindgen]
pub fn zoom_out() -> f32 {
    store::update(|app| {
        app.viewport = app.viewport.zoom_out();
        app.viewport.zoom()
    })
}

/// Mouse wheel: one 0.1 step per event, direction from `delta_y`
#[wasm_bindgen]
pub fn zoom_wheel(delta_y: f32) -> f32 {
    store::update(|app| {
        app.viewport = app.viewport.zoom_wheel(delta_y);
        app.viewport.zoom()
    })
}

/// Back to 1:1
#[wasm_bindgen]
pub fn reset_zoom() -> f32 {
    set_zoom(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_controls() {
        assert_eq!(set_zoom(9.0), 5.0);
        assert!((zoom_out() - 4.8).abs() < 1e-6);
        assert_eq!(set_zoom(-1.0), 0.2);
        assert_eq!(reset_zoom(), 1.0);
        assert!((zoom_in() - 1.2).abs() < 1e-6);
        assert!((zoom_wheel(53.0) - 1.1).abs() < 1e-6);
        assert!(crate::renderer::get_debug_overlay_text().contains("Zoom: 110% | Scale: 4px = 1cm"));
    }
}
