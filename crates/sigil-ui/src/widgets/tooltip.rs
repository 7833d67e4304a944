use crate::context::Context;

/// Hover text for the item built just before it.
///
/// Not part of the inline flow: inside a [`Line`](super::line::Line) no
/// same-line join is emitted before it.
pub struct Tooltip {
    text: String,
}

impl Tooltip {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let b = ctx.backend();
        if b.is_item_hovered() {
            b.set_tooltip(&self.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use sigil_backend::trace::{Call, Script, TraceBackend};

    use super::*;
    use crate::widgets::button::Button;

    #[test]
    fn shows_only_over_hovered_item() {
        let mut b = TraceBackend::with_script(Script::new().hover("A"));
        {
            let mut ctx = Context::new(&mut b);
            Button::new("A").build(&mut ctx);
            Tooltip::new("tip A").build(&mut ctx);
            Button::new("B").build(&mut ctx);
            Tooltip::new("tip B").build(&mut ctx);
        }
        assert_eq!(b.count(|c| matches!(c, Call::SetTooltip(_))), 1);
        assert!(b.calls().contains(&Call::SetTooltip("tip A".into())));
    }
}
