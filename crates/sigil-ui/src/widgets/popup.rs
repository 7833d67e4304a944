use sigil_backend::MouseButton;
use sigil_backend::flags::WindowFlags;

use crate::context::Context;
use crate::widget::Layout;

/// A modal popup, shown once [`Context::open_popup`] (or a button's
/// `opens_popup`) has been called with its name.
///
/// The optional `open` binding adds a close button; the backend writes
/// `false` through it when that button is pressed.
pub struct Popup<'a> {
    name: String,
    open: Option<&'a mut bool>,
    flags: WindowFlags,
    layout: Layout<'a>,
}

impl<'a> Popup<'a> {
    pub fn new(name: impl Into<String>, layout: Layout<'a>) -> Self {
        Self { name: name.into(), open: None, flags: WindowFlags::empty(), layout }
    }

    pub fn open(mut self, open: &'a mut bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn flags(mut self, flags: WindowFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn build(mut self, ctx: &mut Context<'_>) {
        let open = ctx.backend().begin_popup_modal(&self.name, self.open.as_deref_mut(), self.flags);
        ctx.region("popup", open, self.layout, |b| b.end_popup());
    }
}

/// A popup attached to the previous item, opened by clicking it with
/// `mouse_button` (right by default).
pub struct ContextMenu<'a> {
    id: String,
    mouse_button: MouseButton,
    layout: Layout<'a>,
}

impl<'a> ContextMenu<'a> {
    pub fn new(layout: Layout<'a>) -> Self {
        Self { id: String::new(), mouse_button: MouseButton::Right, layout }
    }

    /// Explicit popup id. Empty (the default) ties the menu to the previous item.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn mouse_button(mut self, button: MouseButton) -> Self {
        self.mouse_button = button;
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let open = ctx.backend().begin_popup_context_item(&self.id, self.mouse_button);
        ctx.region("context menu", open, self.layout, |b| b.end_popup());
    }
}

#[cfg(test)]
mod tests {
    use sigil_backend::Backend;
    use sigil_backend::trace::{Call, Script, TraceBackend};

    use super::*;
    use crate::layout;
    use crate::widgets::button::Button;
    use crate::widgets::label::Label;
    use crate::widgets::menu::MenuItem;

    #[test]
    fn modal_stays_hidden_until_opened() {
        let mut b = TraceBackend::new();
        Popup::new("Confirm", layout![Label::new("sure?")]).build(&mut Context::new(&mut b));
        assert_eq!(
            b.calls(),
            &[Call::BeginPopupModal { name: "Confirm".into(), flags: WindowFlags::empty() }]
        );
    }

    #[test]
    fn button_opens_modal_in_same_frame() {
        let mut b = TraceBackend::with_script(Script::new().click("Delete"));
        layout![
            Button::new("Delete").opens_popup("Confirm"),
            Popup::new("Confirm", layout![Label::new("sure?")]),
        ]
        .build(&mut Context::new(&mut b));
        assert_eq!(
            &b.calls()[1..],
            &[
                Call::OpenPopup("Confirm".into()),
                Call::BeginPopupModal { name: "Confirm".into(), flags: WindowFlags::empty() },
                Call::Text("sure?".into()),
                Call::EndPopup,
            ]
        );
    }

    #[test]
    fn close_button_writes_binding() {
        let mut b = TraceBackend::with_script(Script::new().click("Confirm"));
        b.open_popup("Confirm");
        let mut open = true;
        Popup::new("Confirm", layout![Label::new("x")])
            .open(&mut open)
            .build(&mut Context::new(&mut b));
        assert!(!open);
        assert_eq!(b.count(Call::is_end), 0);
    }

    #[test]
    fn context_menu_follows_right_click() {
        let mut b = TraceBackend::with_script(Script::new().right_click("file.txt"));
        layout![
            Label::new("file.txt"),
            ContextMenu::new(layout![MenuItem::new("Rename")]),
            Label::new("other.txt"),
            ContextMenu::new(layout![MenuItem::new("Rename")]),
        ]
        .build(&mut Context::new(&mut b));
        assert_eq!(b.count(|c| matches!(c, Call::MenuItem { .. })), 1);
        assert_eq!(b.count(|c| *c == Call::EndPopup), 1);
        assert!(matches!(
            &b.calls()[1],
            Call::BeginPopupContextItem { id, button: MouseButton::Right } if id.is_empty()
        ));
    }
}
