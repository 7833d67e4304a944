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

// ── Handles ───────────────────────────────────────────────────────────────

/// Opaque identifier of a texture owned by the backend.
///
/// Upload and destruction happen outside the widget layer. Id `0` is the
/// null texture and is never drawn.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

impl TextureId {
    pub const NULL: TextureId = TextureId(0);

    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// Opaque handle to a font already loaded by the backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FontId(pub usize);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Cursor shapes a widget may request for the current frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseCursor {
    Arrow,
    TextInput,
    ResizeAll,
    /// Vertical resize (north/south).
    ResizeNS,
    /// Horizontal resize (east/west).
    ResizeEW,
    ResizeNESW,
    ResizeNWSE,
    Hand,
}

// ── Text edit hook ────────────────────────────────────────────────────────

/// Why the backend is calling a text input's edit hook.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextEditEvent {
    /// Tab pressed (`CALLBACK_COMPLETION`).
    Completion,
    /// Up/down pressed (`CALLBACK_HISTORY`).
    History { up: bool },
    /// Every frame while active (`CALLBACK_ALWAYS`).
    Always,
    /// A character is about to be inserted (`CALLBACK_CHAR_FILTER`).
    CharFilter,
    /// The buffer was modified this frame.
    Edit,
}

/// Mutable view handed to a text input's edit hook.
#[derive(Debug)]
pub struct TextEdit<'a> {
    pub event: TextEditEvent,
    pub buffer: &'a mut String,
    /// Byte offset of the cursor inside `buffer`.
    pub cursor: usize,
    /// Character being filtered; only set for [`TextEditEvent::CharFilter`].
    /// The hook may replace it.
    pub ch: Option<char>,
}

/// Result of an edit hook. Only meaningful for character filtering.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum EditAction {
    #[default]
    Keep,
    Discard,
}

/// Low-level edit hook as the backend receives it.
pub type EditHook<'h> = &'h mut dyn FnMut(&mut TextEdit<'_>) -> EditAction;

// ── Backend ───────────────────────────────────────────────────────────────

/// The immediate-mode rendering library as seen by the widget layer.
///
/// Every call is issued on the thread driving the frame, between
/// [`new_frame`](Backend::new_frame) and [`render`](Backend::render), and must
/// not block.
///
/// # Begin/end contract
///
/// Each `begin_*` returning `bool` reports whether the region is open. The
/// widget layer issues the matching `end_*` exactly once if and only if the
/// begin returned `true`. Adapters over a library that needs an
/// unconditional end (child regions in Dear ImGui, for instance) must close
/// the region themselves before returning `false`.
///
/// Two regions are not conditional: [`begin_window`](Backend::begin_window)
/// is always followed by [`end_window`](Backend::end_window), and
/// [`begin_group`](Backend::begin_group) by [`end_group`](Backend::end_group).
///
/// Interaction results (`button`, `checkbox`, …) are `true` only on the
/// frame the interaction happened.
pub trait Backend {
    // ── frame ─────────────────────────────────────────────────────────────

    fn new_frame(&mut self);
    fn render(&mut self);

    // ── platform / input queries ──────────────────────────────────────────

    /// Size of the platform display (the OS window the UI lives in).
    fn display_size(&self) -> Vec2;
    /// Space left in the current region from the cursor position.
    fn content_region_avail(&self) -> Vec2;
    /// Whether the last submitted item is under the mouse.
    fn is_item_hovered(&self) -> bool;
    /// Whether the last submitted item is being held (pressed or dragged).
    fn is_item_active(&self) -> bool;
    /// Mouse movement since the previous frame.
    fn mouse_delta(&self) -> Vec2;
    fn set_mouse_cursor(&mut self, cursor: MouseCursor);

    // ── windows ───────────────────────────────────────────────────────────

    fn set_next_window_pos(&mut self, pos: Vec2);
    fn set_next_window_size(&mut self, size: Vec2);
    /// `open` is `None` for windows without a close button. When the user
    /// closes the window the backend writes `false` through it.
    fn begin_window(&mut self, title: &str, open: Option<&mut bool>, flags: WindowFlags) -> bool;
    fn end_window(&mut self);

    fn begin_child(&mut self, id: &str, size: Vec2, border: bool, flags: ChildFlags) -> bool;
    fn end_child(&mut self);

    fn begin_group(&mut self);
    fn end_group(&mut self);

    // ── popups ────────────────────────────────────────────────────────────

    /// Marks the popup `name` open; it shows from the next `begin_popup_*`.
    fn open_popup(&mut self, name: &str);
    fn close_current_popup(&mut self);
    /// Popup attached to the previous item, opened by `button` click.
    fn begin_popup_context_item(&mut self, id: &str, button: MouseButton) -> bool;
    fn begin_popup_modal(&mut self, name: &str, open: Option<&mut bool>, flags: WindowFlags) -> bool;
    fn end_popup(&mut self);

    // ── menus ─────────────────────────────────────────────────────────────

    fn begin_main_menu_bar(&mut self) -> bool;
    fn end_main_menu_bar(&mut self);
    fn begin_menu_bar(&mut self) -> bool;
    fn end_menu_bar(&mut self);
    fn begin_menu(&mut self, label: &str, enabled: bool) -> bool;
    fn end_menu(&mut self);
    fn menu_item(&mut self, label: &str, shortcut: Option<&str>, selected: bool, enabled: bool) -> bool;

    // ── combo / tabs / trees ──────────────────────────────────────────────

    fn begin_combo(&mut self, label: &str, preview: &str, flags: ComboFlags) -> bool;
    fn end_combo(&mut self);

    fn begin_tab_bar(&mut self, id: &str, flags: TabBarFlags) -> bool;
    fn end_tab_bar(&mut self);
    fn begin_tab_item(&mut self, label: &str, open: Option<&mut bool>, flags: TabItemFlags) -> bool;
    fn end_tab_item(&mut self);

    /// Returns `true` when the node is expanded. Unless `flags` contains
    /// [`TreeNodeFlags::NO_TREE_PUSH_ON_OPEN`], an expanded node pushed the
    /// tree stack and needs [`tree_pop`](Backend::tree_pop).
    fn tree_node(&mut self, label: &str, flags: TreeNodeFlags) -> bool;
    fn tree_pop(&mut self);

    // ── layout directives ─────────────────────────────────────────────────

    /// Places the next item on the same line as the previous one.
    fn same_line(&mut self);
    /// Starts a column set. `count == 1` ends any active column set.
    fn columns(&mut self, count: usize, id: &str, border: bool);
    fn next_column(&mut self);
    fn separator(&mut self);
    fn spacing(&mut self);
    fn dummy(&mut self, size: Vec2);

    // ── style stack ───────────────────────────────────────────────────────

    fn push_text_color(&mut self, color: Color);
    fn pop_style_color(&mut self);
    fn push_font(&mut self, font: FontId);
    fn pop_font(&mut self);
    fn push_item_width(&mut self, width: f32);
    fn pop_item_width(&mut self);

    // ── primitives ────────────────────────────────────────────────────────

    fn text(&mut self, text: &str);
    fn set_tooltip(&mut self, text: &str);
    fn button(&mut self, label: &str, size: Vec2) -> bool;
    fn invisible_button(&mut self, id: &str, size: Vec2) -> bool;
    fn image_button(&mut self, texture: TextureId, size: Vec2) -> bool;
    fn image(&mut self, texture: TextureId, size: Vec2);
    /// Toggles `value` when clicked and reports the change.
    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool;
    fn radio_button(&mut self, label: &str, active: bool) -> bool;
    fn selectable(&mut self, label: &str, selected: bool, flags: SelectableFlags, size: Vec2) -> bool;
    fn progress_bar(&mut self, fraction: f32, size: Vec2, overlay: Option<&str>);
    fn drag_int(&mut self, label: &str, value: &mut i32, speed: f32, min: i32, max: i32, format: &str) -> bool;
    fn slider_int(&mut self, label: &str, value: &mut i32, min: i32, max: i32, format: &str) -> bool;
    fn slider_float(&mut self, label: &str, value: &mut f32, min: f32, max: f32, format: &str) -> bool;
    /// Single-line text field. Returns `true` when `buf` was edited (or, with
    /// `ENTER_RETURNS_TRUE`, when Enter was pressed).
    fn input_text(
        &mut self,
        label: &str,
        buf: &mut String,
        flags: InputTextFlags,
        hook: Option<EditHook<'_>>,
    ) -> bool;
    fn input_text_multiline(
        &mut self,
        label: &str,
        buf: &mut String,
        size: Vec2,
        flags: InputTextFlags,
        hook: Option<EditHook<'_>>,
    ) -> bool;
}
