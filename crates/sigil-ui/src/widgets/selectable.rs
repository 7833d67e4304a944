use sigil_backend::Vec2;
use sigil_backend::flags::SelectableFlags;

use crate::context::Context;
use crate::widget::Callback;

/// A selectable row, typically inside a list, popup or combo.
pub struct Selectable<'a> {
    label: String,
    selected: bool,
    flags: SelectableFlags,
    size: Vec2,
    on_click: Option<Callback<'a>>,
}

impl<'a> Selectable<'a> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selected: false,
            flags: SelectableFlags::NONE,
            size: Vec2::zero(),
            on_click: None,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn flags(mut self, flags: SelectableFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Vec2::new(width, height);
        self
    }

    pub fn on_click(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        if ctx.backend().selectable(&self.label, self.selected, self.flags, self.size) {
            if let Some(mut f) = self.on_click {
                f();
            }
        }
    }
}
