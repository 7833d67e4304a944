use sigil_backend::flags::{TabBarFlags, TabItemFlags};

use crate::context::Context;
use crate::widget::Layout;

pub struct TabBar<'a> {
    id: String,
    flags: TabBarFlags,
    layout: Layout<'a>,
}

impl<'a> TabBar<'a> {
    /// `layout` is expected to hold [`TabItem`]s.
    pub fn new(id: impl Into<String>, layout: Layout<'a>) -> Self {
        Self { id: id.into(), flags: TabBarFlags::empty(), layout }
    }

    pub fn flags(mut self, flags: TabBarFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let open = ctx.backend().begin_tab_bar(&self.id, self.flags);
        ctx.region("tab bar", open, self.layout, |b| b.end_tab_bar());
    }
}

/// One tab. Its layout is built only while the tab is selected.
///
/// With an `open` binding the tab gets a close button, and a `false` binding
/// hides the tab entirely.
pub struct TabItem<'a> {
    label: String,
    open: Option<&'a mut bool>,
    flags: TabItemFlags,
    layout: Layout<'a>,
}

impl<'a> TabItem<'a> {
    pub fn new(label: impl Into<String>, layout: Layout<'a>) -> Self {
        Self { label: label.into(), open: None, flags: TabItemFlags::empty(), layout }
    }

    pub fn open(mut self, open: &'a mut bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn flags(mut self, flags: TabItemFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn build(mut self, ctx: &mut Context<'_>) {
        let open = ctx.backend().begin_tab_item(&self.label, self.open.as_deref_mut(), self.flags);
        ctx.region("tab item", open, self.layout, |b| b.end_tab_item());
    }
}
