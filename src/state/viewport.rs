use serde::{Deserialize, Serialize};

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.2;
pub const ZOOM_DEFAULT: f64 = 1.0;

// Zoom/fullscreen/focus for one mounted map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub zoom: f64,
    pub fullscreen: bool,
    /// Keyboard input is only honored while the map holds focus.
    pub focused: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: ZOOM_DEFAULT,
            fullscreen: false,
            focused: false,
        }
    }
}

/// Clamp into [ZOOM_MIN, ZOOM_MAX] and snap to tenths so repeated steps
/// land on the same f64 values as their decimal literals.
pub fn clamp_zoom(z: f64) -> f64 {
    if z.is_nan() {
        return ZOOM_DEFAULT;
    }
    let snapped = (z * 10.0).round() / 10.0;
    snapped.clamp(ZOOM_MIN, ZOOM_MAX)
}

impl Viewport {
    pub fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(self.zoom - ZOOM_STEP);
    }

    #[cfg(test)]
    pub fn set_zoom(&mut self, z: f64) {
        self.zoom = clamp_zoom(z);
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < ZOOM_MAX
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > ZOOM_MIN
    }

    pub fn zoom_percent(&self) -> String {
        format!("{:.0}%", self.zoom * 100.0)
    }

    /// Transform applied to the rendered map only; geometry is untouched.
    pub fn transform_css(&self) -> String {
        format!(
            "transform: scale({}); transform-origin: center;",
            self.zoom
        )
    }

    /// Fullscreen lifts the map above everything else as a fixed overlay.
    pub fn container_css(&self) -> &'static str {
        if self.fullscreen {
            "position:fixed; inset:16px; z-index:50; background:#fff; border-radius:12px; overflow:hidden; outline:none; box-shadow:0 1px 3px rgba(0,0,0,0.12);"
        } else {
            "position:relative; background:#fff; border-radius:12px; overflow:hidden; outline:none; box-shadow:0 1px 3px rgba(0,0,0,0.12);"
        }
    }
}
