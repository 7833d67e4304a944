use sigil_backend::Vec2;

use crate::context::Context;

/// A horizontal progress bar.
///
/// `fraction` is passed through as-is; the backend clamps. A width of `-1`
/// stretches the bar to the region edge in Dear ImGui-style backends.
pub struct ProgressBar {
    fraction: f32,
    size: Vec2,
    overlay: Option<String>,
}

impl ProgressBar {
    pub fn new(fraction: f32) -> Self {
        Self { fraction, size: Vec2::zero(), overlay: None }
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Vec2::new(width, height);
        self
    }

    /// Text drawn over the bar instead of the default percentage.
    pub fn overlay(mut self, text: impl Into<String>) -> Self {
        self.overlay = Some(text.into());
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        ctx.backend().progress_bar(self.fraction, self.size, self.overlay.as_deref());
    }
}
