use sigil_backend::Vec2;

use crate::context::Context;

/// Horizontal rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Separator;

impl Separator {
    pub fn build(self, ctx: &mut Context<'_>) {
        ctx.backend().separator();
    }
}

/// Vertical breathing room.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spacing;

impl Spacing {
    pub fn build(self, ctx: &mut Context<'_>) {
        ctx.backend().spacing();
    }
}

/// Invisible placeholder of a fixed size.
#[derive(Debug, Clone, Copy)]
pub struct Dummy {
    size: Vec2,
}

impl Dummy {
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: Vec2::new(width, height) }
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        ctx.backend().dummy(self.size);
    }
}
