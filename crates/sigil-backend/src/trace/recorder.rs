use std::collections::HashSet;

use crate::backend::{
    Backend,
    EditAction,
    EditHook,
    FontId,
    MouseButton,
    MouseCursor,
    TextEdit,
    TextEditEvent,
    TextureId,
};
use crate::coords::{Color, Vec2};
use crate::flags::{
    ChildFlags,
    ComboFlags,
    InputTextFlags,
    SelectableFlags,
    TabBarFlags,
    TabItemFlags,
    TreeNodeFlags,
    WindowFlags,
};

use crate::logging::TRACE_TARGET;

use super::call::Call;
use super::script::Script;

/// Id the trace backend uses for the main menu bar region.
pub const MAIN_MENU_BAR_ID: &str = "##MainMenuBar";
/// Id the trace backend uses for a window's menu bar region.
pub const MENU_BAR_ID: &str = "##MenuBar";

/// Recording [`Backend`] driven by a [`Script`].
///
/// Popup state is the one piece of state it keeps across frames, mirroring
/// how a real immediate-mode library remembers which popups are open.
#[derive(Debug, Default)]
pub struct TraceBackend {
    pub script: Script,
    calls: Vec<Call>,
    frame: u64,
    last_item: Option<String>,
    cursor: Option<MouseCursor>,
    popups_open: HashSet<String>,
    popup_stack: Vec<String>,
}

impl TraceBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(script: Script) -> Self {
        Self { script, ..Self::default() }
    }

    /// Calls recorded since construction or the last [`take_calls`](Self::take_calls).
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    /// Frames started so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Cursor requested during the current frame, if any.
    pub fn cursor(&self) -> Option<MouseCursor> {
        self.cursor
    }

    pub fn is_popup_open(&self, name: &str) -> bool {
        self.popups_open.contains(name)
    }

    fn record(&mut self, call: Call) {
        log::trace!(target: TRACE_TARGET, "frame {}: {call:?}", self.frame);
        self.calls.push(call);
    }

    fn item(&mut self, label: &str) {
        self.last_item = Some(label.to_string());
    }

    fn clicked(&self, label: &str) -> bool {
        self.script.clicked.contains(label)
    }

    fn edit_text(
        &mut self,
        label: &str,
        buf: &mut String,
        flags: InputTextFlags,
        mut hook: Option<EditHook<'_>>,
    ) -> bool {
        let mut changed = false;

        if let Some(text) = self.script.typed.get(label) {
            for c in text.chars() {
                let mut ch = Some(c);
                if flags.contains(InputTextFlags::CALLBACK_CHAR_FILTER) {
                    if let Some(h) = hook.as_deref_mut() {
                        let cursor = buf.len();
                        let mut edit = TextEdit {
                            event: TextEditEvent::CharFilter,
                            buffer: &mut *buf,
                            cursor,
                            ch,
                        };
                        if h(&mut edit) == EditAction::Discard {
                            continue;
                        }
                        ch = edit.ch;
                    }
                }
                if let Some(c) = ch {
                    buf.push(c);
                    changed = true;
                }
            }
        }

        let mut notify = |event: TextEditEvent, buf: &mut String| {
            if let Some(h) = hook.as_deref_mut() {
                let cursor = buf.len();
                let mut edit = TextEdit { event, buffer: buf, cursor, ch: None };
                let _ = h(&mut edit);
            }
        };
        if flags.contains(InputTextFlags::CALLBACK_ALWAYS) {
            notify(TextEditEvent::Always, buf);
        }
        if changed && flags.contains(InputTextFlags::CALLBACK_EDIT) {
            notify(TextEditEvent::Edit, buf);
        }

        self.item(label);
        changed
    }
}

impl Backend for TraceBackend {
    fn new_frame(&mut self) {
        self.frame += 1;
        self.last_item = None;
        self.cursor = None;
        self.popup_stack.clear();
        self.record(Call::NewFrame);
    }

    fn render(&mut self) {
        self.record(Call::Render);
    }

    fn display_size(&self) -> Vec2 {
        self.script.display_size
    }

    fn content_region_avail(&self) -> Vec2 {
        self.script.content_avail
    }

    fn is_item_hovered(&self) -> bool {
        self.last_item.as_ref().is_some_and(|l| self.script.hovered.contains(l))
    }

    fn is_item_active(&self) -> bool {
        self.last_item.as_ref().is_some_and(|l| self.script.active.contains(l))
    }

    fn mouse_delta(&self) -> Vec2 {
        self.script.mouse_delta
    }

    fn set_mouse_cursor(&mut self, cursor: MouseCursor) {
        self.cursor = Some(cursor);
        self.record(Call::SetMouseCursor(cursor));
    }

    // ── windows ───────────────────────────────────────────────────────────

    fn set_next_window_pos(&mut self, pos: Vec2) {
        self.record(Call::SetNextWindowPos(pos));
    }

    fn set_next_window_size(&mut self, size: Vec2) {
        self.record(Call::SetNextWindowSize(size));
    }

    fn begin_window(&mut self, title: &str, open: Option<&mut bool>, flags: WindowFlags) -> bool {
        let closable = open.is_some();
        if let Some(open) = open {
            // Clicking the title "close" button writes through the binding.
            if self.clicked(title) {
                *open = false;
            }
        }
        self.record(Call::BeginWindow { title: title.to_string(), flags, closable });
        self.last_item = None;
        self.script.is_open(title)
    }

    fn end_window(&mut self) {
        self.record(Call::EndWindow);
    }

    fn begin_child(&mut self, id: &str, size: Vec2, border: bool, flags: ChildFlags) -> bool {
        self.record(Call::BeginChild { id: id.to_string(), size, border, flags });
        let open = self.script.is_open(id);
        if !open {
            // The library needs its end call regardless; close it here.
            log::trace!(target: TRACE_TARGET, "child {id:?} clipped, closed by backend");
        }
        open
    }

    fn end_child(&mut self) {
        self.record(Call::EndChild);
    }

    fn begin_group(&mut self) {
        self.record(Call::BeginGroup);
    }

    fn end_group(&mut self) {
        self.record(Call::EndGroup);
    }

    // ── popups ────────────────────────────────────────────────────────────

    fn open_popup(&mut self, name: &str) {
        self.popups_open.insert(name.to_string());
        self.record(Call::OpenPopup(name.to_string()));
    }

    fn close_current_popup(&mut self) {
        if let Some(top) = self.popup_stack.last() {
            self.popups_open.remove(top);
        }
        self.record(Call::CloseCurrentPopup);
    }

    fn begin_popup_context_item(&mut self, id: &str, button: MouseButton) -> bool {
        self.record(Call::BeginPopupContextItem { id: id.to_string(), button });
        // An empty id attaches the popup to the previous item.
        let key = if id.is_empty() {
            self.last_item.clone().unwrap_or_default()
        } else {
            id.to_string()
        };
        let triggered = self.last_item.as_ref().is_some_and(|l| self.script.right_clicked.contains(l));
        if triggered {
            self.popups_open.insert(key.clone());
        }
        let open = self.popups_open.contains(&key) && !self.script.closed.contains(&key);
        if open {
            self.popup_stack.push(key);
        }
        open
    }

    fn begin_popup_modal(&mut self, name: &str, open: Option<&mut bool>, flags: WindowFlags) -> bool {
        self.record(Call::BeginPopupModal { name: name.to_string(), flags });
        let mut visible = self.popups_open.contains(name) && !self.script.closed.contains(name);
        if let Some(open) = open {
            if visible && self.clicked(name) {
                // Close button on the modal's title bar.
                *open = false;
                self.popups_open.remove(name);
                visible = false;
            }
        }
        if visible {
            self.popup_stack.push(name.to_string());
        }
        visible
    }

    fn end_popup(&mut self) {
        self.popup_stack.pop();
        self.record(Call::EndPopup);
    }

    // ── menus ─────────────────────────────────────────────────────────────

    fn begin_main_menu_bar(&mut self) -> bool {
        self.record(Call::BeginMainMenuBar);
        self.script.is_open(MAIN_MENU_BAR_ID)
    }

    fn end_main_menu_bar(&mut self) {
        self.record(Call::EndMainMenuBar);
    }

    fn begin_menu_bar(&mut self) -> bool {
        self.record(Call::BeginMenuBar);
        self.script.is_open(MENU_BAR_ID)
    }

    fn end_menu_bar(&mut self) {
        self.record(Call::EndMenuBar);
    }

    fn begin_menu(&mut self, label: &str, enabled: bool) -> bool {
        self.record(Call::BeginMenu { label: label.to_string(), enabled });
        self.item(label);
        enabled && self.script.is_open(label)
    }

    fn end_menu(&mut self) {
        self.record(Call::EndMenu);
    }

    fn menu_item(&mut self, label: &str, shortcut: Option<&str>, selected: bool, enabled: bool) -> bool {
        self.record(Call::MenuItem {
            label: label.to_string(),
            shortcut: shortcut.map(str::to_string),
            selected,
            enabled,
        });
        self.item(label);
        enabled && self.clicked(label)
    }

    // ── combo / tabs / trees ──────────────────────────────────────────────

    fn begin_combo(&mut self, label: &str, preview: &str, flags: ComboFlags) -> bool {
        self.record(Call::BeginCombo { label: label.to_string(), preview: preview.to_string(), flags });
        self.item(label);
        self.script.is_open(label)
    }

    fn end_combo(&mut self) {
        self.record(Call::EndCombo);
    }

    fn begin_tab_bar(&mut self, id: &str, flags: TabBarFlags) -> bool {
        self.record(Call::BeginTabBar { id: id.to_string(), flags });
        self.script.is_open(id)
    }

    fn end_tab_bar(&mut self) {
        self.record(Call::EndTabBar);
    }

    fn begin_tab_item(&mut self, label: &str, open: Option<&mut bool>, flags: TabItemFlags) -> bool {
        self.record(Call::BeginTabItem { label: label.to_string(), flags });
        self.item(label);
        if let Some(open) = open {
            if !*open {
                return false;
            }
        }
        self.script.is_open(label)
    }

    fn end_tab_item(&mut self) {
        self.record(Call::EndTabItem);
    }

    fn tree_node(&mut self, label: &str, flags: TreeNodeFlags) -> bool {
        self.record(Call::TreeNode { label: label.to_string(), flags });
        self.item(label);
        self.script.is_open(label)
    }

    fn tree_pop(&mut self) {
        self.record(Call::TreePop);
    }

    // ── layout directives ─────────────────────────────────────────────────

    fn same_line(&mut self) {
        self.record(Call::SameLine);
    }

    fn columns(&mut self, count: usize, id: &str, border: bool) {
        self.record(Call::Columns { count, id: id.to_string(), border });
    }

    fn next_column(&mut self) {
        self.record(Call::NextColumn);
    }

    fn separator(&mut self) {
        self.record(Call::Separator);
    }

    fn spacing(&mut self) {
        self.record(Call::Spacing);
    }

    fn dummy(&mut self, size: Vec2) {
        self.record(Call::Dummy(size));
    }

    // ── style stack ───────────────────────────────────────────────────────

    fn push_text_color(&mut self, color: Color) {
        self.record(Call::PushTextColor(color));
    }

    fn pop_style_color(&mut self) {
        self.record(Call::PopStyleColor);
    }

    fn push_font(&mut self, font: FontId) {
        self.record(Call::PushFont(font));
    }

    fn pop_font(&mut self) {
        self.record(Call::PopFont);
    }

    fn push_item_width(&mut self, width: f32) {
        self.record(Call::PushItemWidth(width));
    }

    fn pop_item_width(&mut self) {
        self.record(Call::PopItemWidth);
    }

    // ── primitives ────────────────────────────────────────────────────────

    fn text(&mut self, text: &str) {
        self.record(Call::Text(text.to_string()));
        self.item(text);
    }

    fn set_tooltip(&mut self, text: &str) {
        self.record(Call::SetTooltip(text.to_string()));
    }

    fn button(&mut self, label: &str, size: Vec2) -> bool {
        self.record(Call::Button { label: label.to_string(), size });
        self.item(label);
        self.clicked(label)
    }

    fn invisible_button(&mut self, id: &str, size: Vec2) -> bool {
        self.record(Call::InvisibleButton { id: id.to_string(), size });
        self.item(id);
        self.clicked(id)
    }

    fn image_button(&mut self, texture: TextureId, size: Vec2) -> bool {
        let label = format!("##image{}", texture.0);
        self.record(Call::ImageButton { texture, size });
        self.item(&label);
        self.clicked(&label)
    }

    fn image(&mut self, texture: TextureId, size: Vec2) {
        self.record(Call::Image { texture, size });
        self.last_item = None;
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        let toggled = self.clicked(label);
        if toggled {
            *value = !*value;
        }
        self.record(Call::Checkbox { label: label.to_string(), value: *value });
        self.item(label);
        toggled
    }

    fn radio_button(&mut self, label: &str, active: bool) -> bool {
        self.record(Call::RadioButton { label: label.to_string(), active });
        self.item(label);
        self.clicked(label)
    }

    fn selectable(&mut self, label: &str, selected: bool, flags: SelectableFlags, size: Vec2) -> bool {
        self.record(Call::Selectable { label: label.to_string(), selected, flags, size });
        self.item(label);
        !flags.contains(SelectableFlags::DISABLED) && self.clicked(label)
    }

    fn progress_bar(&mut self, fraction: f32, size: Vec2, overlay: Option<&str>) {
        self.record(Call::ProgressBar { fraction, size, overlay: overlay.map(str::to_string) });
        self.last_item = None;
    }

    fn drag_int(&mut self, label: &str, value: &mut i32, _speed: f32, min: i32, max: i32, _format: &str) -> bool {
        let changed = match self.script.ints.get(label) {
            Some(&v) => {
                // min >= max means unbounded, as in Dear ImGui.
                *value = if min < max { v.clamp(min, max) } else { v };
                true
            }
            None => false,
        };
        self.record(Call::DragInt { label: label.to_string(), value: *value });
        self.item(label);
        changed
    }

    fn slider_int(&mut self, label: &str, value: &mut i32, min: i32, max: i32, _format: &str) -> bool {
        let changed = match self.script.ints.get(label) {
            Some(&v) => {
                *value = v.clamp(min.min(max), max.max(min));
                true
            }
            None => false,
        };
        self.record(Call::SliderInt { label: label.to_string(), value: *value, min, max });
        self.item(label);
        changed
    }

    fn slider_float(&mut self, label: &str, value: &mut f32, min: f32, max: f32, _format: &str) -> bool {
        let changed = match self.script.floats.get(label) {
            Some(&v) => {
                *value = v.clamp(min.min(max), max.max(min));
                true
            }
            None => false,
        };
        self.record(Call::SliderFloat { label: label.to_string(), value: *value, min, max });
        self.item(label);
        changed
    }

    fn input_text(
        &mut self,
        label: &str,
        buf: &mut String,
        flags: InputTextFlags,
        hook: Option<EditHook<'_>>,
    ) -> bool {
        self.record(Call::InputText { label: label.to_string(), flags });
        self.edit_text(label, buf, flags, hook)
    }

    fn input_text_multiline(
        &mut self,
        label: &str,
        buf: &mut String,
        size: Vec2,
        flags: InputTextFlags,
        hook: Option<EditHook<'_>>,
    ) -> bool {
        self.record(Call::InputTextMultiline { label: label.to_string(), size, flags });
        self.edit_text(label, buf, flags, hook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_toggles_only_when_clicked() {
        let mut b = TraceBackend::with_script(Script::new().click("on"));
        let mut on = false;
        let mut off = false;
        assert!(b.checkbox("on", &mut on));
        assert!(!b.checkbox("off", &mut off));
        assert!(on);
        assert!(!off);
    }

    #[test]
    fn hover_follows_last_item() {
        let mut b = TraceBackend::with_script(Script::new().hover("a"));
        b.button("a", Vec2::zero());
        assert!(b.is_item_hovered());
        b.button("b", Vec2::zero());
        assert!(!b.is_item_hovered());
    }

    #[test]
    fn modal_needs_open_request() {
        let mut b = TraceBackend::new();
        assert!(!b.begin_popup_modal("Confirm", None, WindowFlags::empty()));
        b.open_popup("Confirm");
        assert!(b.begin_popup_modal("Confirm", None, WindowFlags::empty()));
        b.close_current_popup();
        b.end_popup();
        assert!(!b.is_popup_open("Confirm"));
    }

    #[test]
    fn context_item_opens_on_right_click_of_previous_item() {
        let mut b = TraceBackend::with_script(Script::new().right_click("target"));
        b.text("other");
        assert!(!b.begin_popup_context_item("", MouseButton::Right));
        b.text("target");
        assert!(b.begin_popup_context_item("", MouseButton::Right));
        b.end_popup();
    }

    #[test]
    fn char_filter_can_discard_and_replace() {
        let mut b = TraceBackend::with_script(Script::new().type_text("name", "a1b"));
        let mut buf = String::new();
        let mut hook = |e: &mut TextEdit<'_>| match e.ch {
            Some(c) if c.is_ascii_digit() => EditAction::Discard,
            Some(c) => {
                e.ch = Some(c.to_ascii_uppercase());
                EditAction::Keep
            }
            None => EditAction::Keep,
        };
        let changed = b.input_text("name", &mut buf, InputTextFlags::CALLBACK_CHAR_FILTER, Some(&mut hook));
        assert!(changed);
        assert_eq!(buf, "AB");
    }

    #[test]
    fn new_frame_counts_and_records() {
        let mut b = TraceBackend::new();
        b.new_frame();
        b.render();
        b.new_frame();
        assert_eq!(b.frame_count(), 2);
        assert_eq!(b.count(|c| *c == Call::NewFrame), 2);
        assert_eq!(b.take_calls().len(), 3);
        assert!(b.calls().is_empty());
    }

    #[test]
    fn slider_clamps_scripted_value() {
        let mut b = TraceBackend::with_script(Script::new().set_int("s", 500));
        let mut v = 3;
        assert!(b.slider_int("s", &mut v, 0, 100, "%d"));
        assert_eq!(v, 100);
    }
}
