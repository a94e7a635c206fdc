//! 2D rendering module
//!
//! Draws the game through the [`Surface`] trait, a small subset of the
//! canvas 2D context. The draw pass keeps no state between frames.

pub mod recorder;
pub mod shapes;

pub use recorder::{DrawCommand, RecordingSurface};
pub use shapes::{render, render_game_over};

/// Font used for text draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub size_px: u32,
    pub family: &'static str,
}

impl Font {
    pub const fn new(size_px: u32, family: &'static str) -> Self {
        Self { size_px, family }
    }

    /// CSS font shorthand, e.g. `60px Arial`
    pub fn css(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

/// Score digits and the win headline
pub const LARGE_FONT: Font = Font::new(60, "Arial");
/// Second line of the win message
pub const MEDIUM_FONT: Font = Font::new(40, "Arial");

/// A 2D drawing target with a fixed size
///
/// Colors are CSS color strings.
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &Font, color: &str);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        (**self).clear_rect(x, y, w, h)
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        (**self).fill_rect(x, y, w, h, color)
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        (**self).fill_circle(x, y, radius, color)
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &Font, color: &str) {
        (**self).fill_text(text, x, y, font, color)
    }
}
