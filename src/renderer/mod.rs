//! Rendering module
//!
//! Particles draw through the [`Surface`] trait, a thin immediate-mode API
//! shaped like the Canvas 2D context. On the web it is backed by
//! [`CanvasSurface`]; tests and the native demo use [`RecordingSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawOp, RecordingSurface};

use serde::{Deserialize, Serialize};

/// 24-bit RGB color, `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    /// CSS hex notation, e.g. `#ff6b9d`
    pub fn to_css(&self) -> String {
        format!("#{:06x}", self.0 & 0xff_ffff)
    }
}

/// Immediate-mode 2D drawing target.
///
/// Transform, alpha, fill, font and glow are part of the current state, which
/// `save`/`restore` push and pop.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Erase the whole surface
    fn clear(&mut self);

    fn save(&mut self);
    fn restore(&mut self);

    fn set_alpha(&mut self, alpha: f32);
    fn translate(&mut self, x: f32, y: f32);
    /// Rotate by `radians` around the current origin
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, factor: f32);

    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32);

    /// Bold monospace font at `px`, top-left anchored
    fn set_font(&mut self, px: f32);
    /// Shadow glow behind subsequent fills
    fn set_glow(&mut self, blur: f32, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}
