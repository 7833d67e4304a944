use crate::context::Context;
use crate::widget::{Callback, Layout};

/// The application-wide menu bar along the top of the display.
pub struct MainMenuBar<'a> {
    layout: Layout<'a>,
}

impl<'a> MainMenuBar<'a> {
    pub fn new(layout: Layout<'a>) -> Self {
        Self { layout }
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let open = ctx.backend().begin_main_menu_bar();
        ctx.region("main menu bar", open, self.layout, |b| b.end_main_menu_bar());
    }
}

/// A menu bar inside the current window. The window needs
/// [`WindowFlags::MENU_BAR`](sigil_backend::flags::WindowFlags::MENU_BAR).
pub struct MenuBar<'a> {
    layout: Layout<'a>,
}

impl<'a> MenuBar<'a> {
    pub fn new(layout: Layout<'a>) -> Self {
        Self { layout }
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let open = ctx.backend().begin_menu_bar();
        ctx.region("menu bar", open, self.layout, |b| b.end_menu_bar());
    }
}

/// A drop-down menu; its layout is usually [`MenuItem`]s and nested menus.
pub struct Menu<'a> {
    label: String,
    enabled: bool,
    layout: Layout<'a>,
}

impl<'a> Menu<'a> {
    pub fn new(label: impl Into<String>, layout: Layout<'a>) -> Self {
        Self { label: label.into(), enabled: true, layout }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let open = ctx.backend().begin_menu(&self.label, self.enabled);
        ctx.region("menu", open, self.layout, |b| b.end_menu());
    }
}

/// One entry in a menu.
///
/// `selected` only draws a check mark; toggling it is up to `on_click`.
pub struct MenuItem<'a> {
    label: String,
    shortcut: Option<String>,
    selected: bool,
    enabled: bool,
    on_click: Option<Callback<'a>>,
}

impl<'a> MenuItem<'a> {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), shortcut: None, selected: false, enabled: true, on_click: None }
    }

    /// Shortcut text shown right-aligned. Display only.
    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn on_click(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let clicked = ctx.backend().menu_item(
            &self.label,
            self.shortcut.as_deref(),
            self.selected,
            self.enabled,
        );
        if clicked {
            if let Some(mut f) = self.on_click {
                f();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use sigil_backend::trace::{Call, Script, TraceBackend};

    use super::*;
    use crate::layout;

    #[test]
    fn menu_tree_pairs_up() {
        let mut b = TraceBackend::new();
        MainMenuBar::new(layout![Menu::new("File", layout![MenuItem::new("Open")])])
            .build(&mut Context::new(&mut b));
        assert_eq!(
            b.calls(),
            &[
                Call::BeginMainMenuBar,
                Call::BeginMenu { label: "File".into(), enabled: true },
                Call::MenuItem {
                    label: "Open".into(),
                    shortcut: None,
                    selected: false,
                    enabled: true,
                },
                Call::EndMenu,
                Call::EndMainMenuBar,
            ]
        );
    }

    #[test]
    fn closed_menu_skips_items_and_end() {
        let mut b = TraceBackend::with_script(Script::new().close("Edit"));
        MenuBar::new(layout![Menu::new("Edit", layout![MenuItem::new("Undo")])])
            .build(&mut Context::new(&mut b));
        assert_eq!(
            b.calls(),
            &[
                Call::BeginMenuBar,
                Call::BeginMenu { label: "Edit".into(), enabled: true },
                Call::EndMenuBar,
            ]
        );
    }

    #[test]
    fn disabled_menu_never_opens() {
        let mut b = TraceBackend::new();
        Menu::new("Tools", layout![MenuItem::new("x")])
            .enabled(false)
            .build(&mut Context::new(&mut b));
        assert_eq!(b.count(Call::is_end), 0);
    }

    #[test]
    fn item_click_fires_callback() {
        let hits = Cell::new(0);
        let mut b = TraceBackend::with_script(Script::new().click("Save"));
        layout![
            MenuItem::new("Save").shortcut("Ctrl+S").on_click(|| hits.set(hits.get() + 1)),
            MenuItem::new("Quit").on_click(|| hits.set(hits.get() + 10)),
        ]
        .build(&mut Context::new(&mut b));
        assert_eq!(hits.get(), 1);
        assert!(matches!(
            &b.calls()[0],
            Call::MenuItem { shortcut: Some(s), .. } if s == "Ctrl+S"
        ));
    }
}
