use sigil_backend::flags::InputTextFlags;
use sigil_backend::{EditAction, EditHook, TextEdit, Vec2};

use crate::context::Context;
use crate::widget::Callback;

/// Low-level edit hook owned by a text input descriptor.
pub type EditFn<'a> = Box<dyn FnMut(&mut TextEdit<'_>) -> EditAction + 'a>;

/// A single-line text field bound to a caller-owned `String`.
///
/// Two independent notifications are available: the edit hook is called by
/// the backend while it processes input (filtering, completion, history),
/// and `on_change` runs once after the draw if the text changed. Both may
/// fire during the same build.
///
/// # Example
/// ```rust,ignore
/// InputText::new("##name", &mut name)
///     .width(160.0)
///     .flags(InputTextFlags::CALLBACK_CHAR_FILTER)
///     .on_edit(|e| if e.ch == Some(' ') { EditAction::Discard } else { EditAction::Keep })
///     .on_change(|| dirty.set(true))
/// ```
pub struct InputText<'a> {
    label: String,
    value: &'a mut String,
    width: f32,
    flags: InputTextFlags,
    on_edit: Option<EditFn<'a>>,
    on_change: Option<Callback<'a>>,
}

impl<'a> InputText<'a> {
    pub fn new(label: impl Into<String>, value: &'a mut String) -> Self {
        Self {
            label: label.into(),
            value,
            width: 0.0,
            flags: InputTextFlags::empty(),
            on_edit: None,
            on_change: None,
        }
    }

    /// Item width; `0` keeps the backend's current width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn flags(mut self, flags: InputTextFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn on_edit(mut self, f: impl FnMut(&mut TextEdit<'_>) -> EditAction + 'a) -> Self {
        self.on_edit = Some(Box::new(f));
        self
    }

    pub fn on_change(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn build(mut self, ctx: &mut Context<'_>) {
        let b = ctx.backend();
        let sized = self.width != 0.0;
        if sized {
            b.push_item_width(self.width);
        }

        let hook = self.on_edit.as_deref_mut().map(|h| h as EditHook<'_>);
        let changed = b.input_text(&self.label, self.value, self.flags, hook);

        if sized {
            b.pop_item_width();
        }
        if changed {
            if let Some(mut f) = self.on_change {
                f();
            }
        }
    }
}

/// A multi-line text area bound to a caller-owned `String`.
pub struct InputTextMultiline<'a> {
    label: String,
    value: &'a mut String,
    size: Vec2,
    flags: InputTextFlags,
    on_edit: Option<EditFn<'a>>,
    on_change: Option<Callback<'a>>,
}

impl<'a> InputTextMultiline<'a> {
    pub fn new(label: impl Into<String>, value: &'a mut String) -> Self {
        Self {
            label: label.into(),
            value,
            size: Vec2::zero(),
            flags: InputTextFlags::empty(),
            on_edit: None,
            on_change: None,
        }
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Vec2::new(width, height);
        self
    }

    pub fn flags(mut self, flags: InputTextFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn on_edit(mut self, f: impl FnMut(&mut TextEdit<'_>) -> EditAction + 'a) -> Self {
        self.on_edit = Some(Box::new(f));
        self
    }

    pub fn on_change(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn build(mut self, ctx: &mut Context<'_>) {
        let hook = self.on_edit.as_deref_mut().map(|h| h as EditHook<'_>);
        let changed =
            ctx.backend().input_text_multiline(&self.label, self.value, self.size, self.flags, hook);
        if changed {
            if let Some(mut f) = self.on_change {
                f();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use sigil_backend::TextEditEvent;
    use sigil_backend::trace::{Call, Script, TraceBackend};

    use super::*;

    #[test]
    fn width_is_pushed_and_popped_around_field() {
        let mut name = String::new();
        let mut b = TraceBackend::new();
        InputText::new("##name", &mut name).width(120.0).build(&mut Context::new(&mut b));
        assert_eq!(
            b.calls(),
            &[
                Call::PushItemWidth(120.0),
                Call::InputText { label: "##name".into(), flags: InputTextFlags::empty() },
                Call::PopItemWidth,
            ]
        );
    }

    #[test]
    fn zero_width_leaves_item_width_alone() {
        let mut name = String::new();
        let mut b = TraceBackend::new();
        InputText::new("##name", &mut name).build(&mut Context::new(&mut b));
        assert_eq!(b.calls().len(), 1);
    }

    #[test]
    fn edit_hook_and_change_both_fire() {
        let mut text = String::from("ab");
        let edits = Cell::new(0);
        let changes = Cell::new(0);
        let mut b = TraceBackend::with_script(Script::new().type_text("t", "c d"));
        InputText::new("t", &mut text)
            .flags(InputTextFlags::CALLBACK_CHAR_FILTER | InputTextFlags::CALLBACK_EDIT)
            .on_edit(|e| {
                edits.set(edits.get() + 1);
                match (e.event, e.ch) {
                    (TextEditEvent::CharFilter, Some(' ')) => EditAction::Discard,
                    _ => EditAction::Keep,
                }
            })
            .on_change(|| changes.set(changes.get() + 1))
            .build(&mut Context::new(&mut b));
        assert_eq!(text, "abcd");
        // Three filter calls plus one edit notification.
        assert_eq!(edits.get(), 4);
        assert_eq!(changes.get(), 1);
    }

    #[test]
    fn unchanged_text_does_not_notify() {
        let mut text = String::from("same");
        let changes = Cell::new(0);
        let mut b = TraceBackend::new();
        InputText::new("t", &mut text)
            .on_change(|| changes.set(changes.get() + 1))
            .build(&mut Context::new(&mut b));
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn multiline_passes_size() {
        let mut text = String::new();
        let changed = Cell::new(false);
        let mut b = TraceBackend::with_script(Script::new().type_text("##ml", "line\nline"));
        InputTextMultiline::new("##ml", &mut text)
            .size(300.0, 100.0)
            .on_change(|| changed.set(true))
            .build(&mut Context::new(&mut b));
        assert!(changed.get());
        assert_eq!(text, "line\nline");
        assert_eq!(
            b.calls(),
            &[Call::InputTextMultiline {
                label: "##ml".into(),
                size: Vec2::new(300.0, 100.0),
                flags: InputTextFlags::empty(),
            }]
        );
    }
}
