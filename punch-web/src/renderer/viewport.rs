//! Viewport - centimeters to canvas pixels to clip space, with zoom
//!
//! Zoom scales about the canvas center, like a 2D context
//! translate/scale/translate.

use crate::kinematics::Point;

/// Id of the canvas element the visualizer draws into
pub const CANVAS_ID: &str = "punch-canvas";
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

/// Display scale before zoom
pub const PIXELS_PER_CM: f32 = 4.0;

pub const MIN_ZOOM: f32 = 0.2;
pub const MAX_ZOOM: f32 = 5.0;
/// Zoom change per +/- button press
pub const BUTTON_ZOOM_STEP: f32 = 0.2;
/// Zoom change per wheel notch
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Grid square size (cm)
pub const GRID_CM: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32)
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, zoom: 1.0 }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Clamped into [MIN_ZOOM, MAX_ZOOM]; non-finite input is ignored
    #[must_use]
    pub fn with_zoom(self, zoom: f32) -> Self {
        if !zoom.is_finite() {
            return self;
        }
        Self { zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM), ..self }
    }

    #[must_use]
    pub fn zoom_by(self, delta: f32) -> Self {
        self.with_zoom(self.zoom + delta)
    }

    #[must_use]
    pub fn zoom_in(self) -> Self {
        self.zoom_by(BUTTON_ZOOM_STEP)
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        self.zoom_by(-BUTTON_ZOOM_STEP)
    }

    /// One wheel notch; scrolling down (positive delta) zooms out
    #[must_use]
    pub fn zoom_wheel(self, delta_y: f32) -> Self {
        if delta_y > 0.0 {
            self.zoom_by(-WHEEL_ZOOM_STEP)
        } else {
            self.zoom_by(WHEEL_ZOOM_STEP)
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Unzoomed canvas pixel -> zoomed canvas pixel
    pub fn zoom_pixel(&self, p: (f32, f32)) -> (f32, f32) {
        let (cx, cy) = self.center();
        (cx + (p.0 - cx) * self.zoom, cy + (p.1 - cy) * self.zoom)
    }

    /// Scene point (cm from center) -> zoomed canvas pixel
    pub fn cm_to_pixel(&self, p: Point) -> (f32, f32) {
        let (cx, cy) = self.center();
        self.zoom_pixel((cx + p.0 * PIXELS_PER_CM, cy + p.1 * PIXELS_PER_CM))
    }

    /// Unzoomed pixel length -> zoomed pixel length
    pub fn scale(&self, px: f32) -> f32 {
        px * self.zoom
    }

    /// Canvas pixel -> clip space (-1 to 1), flip Y
    pub fn pixel_to_clip(&self, p: [f32; 2]) -> [f32; 2] {
        [p[0] / self.width * 2.0 - 1.0, -(p[1] / self.height * 2.0 - 1.0)]
    }
}
