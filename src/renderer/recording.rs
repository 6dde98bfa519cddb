//! Surface that records draw calls instead of rasterizing them
//!
//! Used by the native demo and by tests to observe what was drawn.

use super::{Color, Surface};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Save,
    Restore,
    Alpha(f32),
    Translate(f32, f32),
    Rotate(f32),
    Scale(f32),
    Fill(Color),
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Circle { x: f32, y: f32, radius: f32 },
    Font(f32),
    Glow { blur: f32, color: Color },
    Text { text: String, x: f32, y: f32 },
}

/// Recording surface with a fixed size
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<DrawOp>,
    depth: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            depth: 0,
        }
    }

    /// Current save/restore nesting depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of filled shapes (rects, circles and text lines)
    pub fn fill_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    DrawOp::Rect { .. } | DrawOp::Circle { .. } | DrawOp::Text { .. }
                )
            })
            .count()
    }

    /// Ops recorded since the last clear
    pub fn last_frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .unwrap_or(0);
        &self.ops[start..]
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        // Only one frame is kept
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn save(&mut self) {
        self.depth += 1;
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.ops.push(DrawOp::Restore);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ops.push(DrawOp::Alpha(alpha));
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.ops.push(DrawOp::Translate(x, y));
    }

    fn rotate(&mut self, radians: f32) {
        self.ops.push(DrawOp::Rotate(radians));
    }

    fn scale(&mut self, factor: f32) {
        self.ops.push(DrawOp::Scale(factor));
    }

    fn set_fill(&mut self, color: Color) {
        self.ops.push(DrawOp::Fill(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(DrawOp::Rect { x, y, w, h });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.ops.push(DrawOp::Circle { x, y, radius });
    }

    fn set_font(&mut self, px: f32) {
        self.ops.push(DrawOp::Font(px));
    }

    fn set_glow(&mut self, blur: f32, color: Color) {
        self.ops.push(DrawOp::Glow { blur, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut surface = RecordingSurface::new(100.0, 50.0);
        surface.fill_rect(0.0, 0.0, 1.0, 1.0);
        surface.clear();
        surface.fill_circle(1.0, 1.0, 2.0);
        assert_eq!(surface.last_frame().len(), 2);
        assert_eq!(surface.fill_count(), 1);
    }

    #[test]
    fn test_save_restore_depth() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.save();
        surface.save();
        assert_eq!(surface.depth(), 2);
        surface.restore();
        surface.restore();
        surface.restore();
        assert_eq!(surface.depth(), 0);
    }
}
