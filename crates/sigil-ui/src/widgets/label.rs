use sigil_backend::{Color, FontId};

use crate::context::Context;

/// A line of static text, optionally colored and in a specific font.
///
/// # Example
/// ```rust,ignore
/// Label::new("Warning").color(Color::from_rgba8(255, 180, 0, 255))
/// ```
pub struct Label {
    text: String,
    color: Option<Color>,
    font: Option<FontId>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), color: None, font: None }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font(mut self, font: FontId) -> Self {
        self.font = Some(font);
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let b = ctx.backend();
        if let Some(color) = self.color {
            b.push_text_color(color);
        }
        if let Some(font) = self.font {
            b.push_font(font);
        }

        b.text(&self.text);

        // Pop in reverse push order.
        if self.font.is_some() {
            b.pop_font();
        }
        if self.color.is_some() {
            b.pop_style_color();
        }
    }
}

#[cfg(test)]
mod tests {
    use sigil_backend::trace::{Call, TraceBackend};

    use super::*;

    #[test]
    fn plain_label_is_one_call() {
        let mut b = TraceBackend::new();
        Label::new("hello").build(&mut Context::new(&mut b));
        assert_eq!(b.calls(), &[Call::Text("hello".into())]);
    }

    #[test]
    fn styled_label_pops_in_reverse_order() {
        let mut b = TraceBackend::new();
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        Label::new("x").color(red).font(FontId(2)).build(&mut Context::new(&mut b));
        assert_eq!(
            b.calls(),
            &[
                Call::PushTextColor(red),
                Call::PushFont(FontId(2)),
                Call::Text("x".into()),
                Call::PopFont,
                Call::PopStyleColor,
            ]
        );
    }
}
