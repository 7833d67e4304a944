use crate::context::Context;
use crate::widget::Layout;

/// Lays its children out horizontally.
///
/// Issues `same_line` before every child except the first. Children that are
/// not [inline](crate::widget::Widget::is_inline) (tooltips, context menus,
/// popups, tab items) get no `same_line`, so they attach to the item before
/// them instead of starting a new slot.
pub struct Line<'a> {
    layout: Layout<'a>,
}

impl<'a> Line<'a> {
    pub fn new(layout: Layout<'a>) -> Self {
        Self { layout }
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        for (i, w) in self.layout.into_iter().enumerate() {
            if i > 0 && w.is_inline() {
                ctx.backend().same_line();
            }
            w.build(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use sigil_backend::trace::{Call, TraceBackend};

    use super::*;
    use crate::layout;
    use crate::widgets::button::Button;
    use crate::widgets::label::Label;
    use crate::widgets::tooltip::Tooltip;

    #[test]
    fn same_line_between_children() {
        let mut b = TraceBackend::new();
        Line::new(layout![Label::new("a"), Label::new("b"), Label::new("c")])
            .build(&mut Context::new(&mut b));
        assert_eq!(
            b.calls(),
            &[
                Call::Text("a".into()),
                Call::SameLine,
                Call::Text("b".into()),
                Call::SameLine,
                Call::Text("c".into()),
            ]
        );
    }

    #[test]
    fn tooltip_does_not_join_line() {
        let mut b = TraceBackend::new();
        Line::new(layout![Button::new("Hover"), Tooltip::new("tip")])
            .build(&mut Context::new(&mut b));
        assert_eq!(b.count(Call::is_same_line), 0);
    }

    #[test]
    fn single_child_has_no_directive() {
        let mut b = TraceBackend::new();
        Line::new(layout![Label::new("only")]).build(&mut Context::new(&mut b));
        assert_eq!(b.calls(), &[Call::Text("only".into())]);
    }
}
