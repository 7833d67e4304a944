use sigil_backend::Vec2;
use sigil_backend::flags::ChildFlags;

use crate::context::Context;
use crate::widget::Layout;

/// Locks its children into one unit, so e.g. a [`Line`](super::line::Line)
/// treats a whole column of widgets as a single item.
///
/// The group region has no open/closed state: it is always begun and ended.
pub struct Group<'a> {
    layout: Layout<'a>,
}

impl<'a> Group<'a> {
    pub fn new(layout: Layout<'a>) -> Self {
        Self { layout }
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        ctx.backend().begin_group();
        self.layout.build(ctx);
        ctx.backend().end_group();
    }
}

/// A scrollable sub-region with its own clipping.
///
/// # Example
/// ```rust,ignore
/// Child::new("log", layout![Label::new(line)]).size(0.0, 200.0).border(true)
/// ```
pub struct Child<'a> {
    id: String,
    size: Vec2,
    border: bool,
    flags: ChildFlags,
    layout: Layout<'a>,
}

impl<'a> Child<'a> {
    pub fn new(id: impl Into<String>, layout: Layout<'a>) -> Self {
        Self { id: id.into(), size: Vec2::zero(), border: false, flags: ChildFlags::empty(), layout }
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Vec2::new(width, height);
        self
    }

    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn flags(mut self, flags: ChildFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let open = ctx.backend().begin_child(&self.id, self.size, self.border, self.flags);
        ctx.region("child", open, self.layout, |b| b.end_child());
    }
}

#[cfg(test)]
mod tests {
    use sigil_backend::trace::{Call, Script, TraceBackend};

    use super::*;
    use crate::layout;
    use crate::widgets::label::Label;

    #[test]
    fn group_always_pairs() {
        let mut b = TraceBackend::with_script(Script::new().all_closed());
        Group::new(layout![Label::new("in")]).build(&mut Context::new(&mut b));
        assert_eq!(
            b.calls(),
            &[Call::BeginGroup, Call::Text("in".into()), Call::EndGroup]
        );
    }

    #[test]
    fn clipped_child_skips_content_and_end() {
        let mut b = TraceBackend::with_script(Script::new().close("pane"));
        Child::new("pane", layout![Label::new("hidden")]).build(&mut Context::new(&mut b));
        assert_eq!(b.calls().len(), 1);
        assert!(matches!(b.calls()[0], Call::BeginChild { .. }));
    }

    #[test]
    fn open_child_builds_and_ends() {
        let mut b = TraceBackend::new();
        Child::new("pane", layout![Label::new("shown")])
            .size(0.0, 120.0)
            .border(true)
            .build(&mut Context::new(&mut b));
        assert_eq!(
            b.calls(),
            &[
                Call::BeginChild {
                    id: "pane".into(),
                    size: Vec2::new(0.0, 120.0),
                    border: true,
                    flags: ChildFlags::empty(),
                },
                Call::Text("shown".into()),
                Call::EndChild,
            ]
        );
    }
}
