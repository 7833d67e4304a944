use crate::context::Context;
use crate::widget::Layout;

/// Builds its layout only when `cond` holds.
///
/// A false condition is indistinguishable from an empty layout: no backend
/// call is issued at all.
pub struct Condition<'a> {
    cond: bool,
    layout: Layout<'a>,
}

impl<'a> Condition<'a> {
    pub fn new(cond: bool, layout: Layout<'a>) -> Self {
        Self { cond, layout }
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        if self.cond {
            self.layout.build(ctx);
        }
    }
}

/// Hands the frame context to an arbitrary builder.
///
/// Used for widgets this crate does not know about; the builder talks to
/// [`Context::backend`] directly.
pub struct Custom<'a> {
    builder: Box<dyn FnOnce(&mut Context<'_>) + 'a>,
}

impl<'a> Custom<'a> {
    pub fn new(builder: impl FnOnce(&mut Context<'_>) + 'a) -> Self {
        Self { builder: Box::new(builder) }
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        (self.builder)(ctx);
    }
}
