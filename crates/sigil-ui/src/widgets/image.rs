use sigil_backend::{TextureId, Vec2};

use crate::context::Context;

/// Draws a backend texture.
///
/// A size component of exactly `-1` fills the available content region on
/// that axis, resolved when the widget is built. A missing or null texture
/// draws nothing.
pub struct Image {
    texture: Option<TextureId>,
    size: Vec2,
}

impl Image {
    pub fn new(texture: Option<TextureId>, width: f32, height: f32) -> Self {
        Self { texture, size: Vec2::new(width, height) }
    }

    /// Fills the available region on both axes.
    pub fn fill(texture: Option<TextureId>) -> Self {
        Self::new(texture, -1.0, -1.0)
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let Some(texture) = self.texture.filter(|t| !t.is_null()) else {
            return;
        };
        let size = if self.size.wants_fill() {
            self.size.fill_from(ctx.content_region_avail())
        } else {
            self.size
        };
        ctx.backend().image(texture, size);
    }
}
