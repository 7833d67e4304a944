use crate::backend::{FontId, MouseButton, MouseCursor, TextureId};
use crate::coords::{Color, Vec2};
use crate::flags::{
    ComboFlags,
    InputTextFlags,
    SelectableFlags,
    TabBarFlags,
    TabItemFlags,
    TreeNodeFlags,
    WindowFlags,
};

/// One backend call as observed by [`TraceBackend`](super::TraceBackend).
///
/// Queries (`is_item_hovered`, `display_size`, …) are not recorded; only
/// calls that change backend state or emit geometry are.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    NewFrame,
    Render,

    SetMouseCursor(MouseCursor),
    SetNextWindowPos(Vec2),
    SetNextWindowSize(Vec2),
    BeginWindow { title: String, flags: WindowFlags, closable: bool },
    EndWindow,
    BeginChild { id: String, size: Vec2, border: bool, flags: WindowFlags },
    EndChild,
    BeginGroup,
    EndGroup,

    OpenPopup(String),
    CloseCurrentPopup,
    BeginPopupContextItem { id: String, button: MouseButton },
    BeginPopupModal { name: String, flags: WindowFlags },
    EndPopup,

    BeginMainMenuBar,
    EndMainMenuBar,
    BeginMenuBar,
    EndMenuBar,
    BeginMenu { label: String, enabled: bool },
    EndMenu,
    MenuItem { label: String, shortcut: Option<String>, selected: bool, enabled: bool },

    BeginCombo { label: String, preview: String, flags: ComboFlags },
    EndCombo,
    BeginTabBar { id: String, flags: TabBarFlags },
    EndTabBar,
    BeginTabItem { label: String, flags: TabItemFlags },
    EndTabItem,
    TreeNode { label: String, flags: TreeNodeFlags },
    TreePop,

    SameLine,
    Columns { count: usize, id: String, border: bool },
    NextColumn,
    Separator,
    Spacing,
    Dummy(Vec2),

    PushTextColor(Color),
    PopStyleColor,
    PushFont(FontId),
    PopFont,
    PushItemWidth(f32),
    PopItemWidth,

    Text(String),
    SetTooltip(String),
    Button { label: String, size: Vec2 },
    InvisibleButton { id: String, size: Vec2 },
    ImageButton { texture: TextureId, size: Vec2 },
    Image { texture: TextureId, size: Vec2 },
    Checkbox { label: String, value: bool },
    RadioButton { label: String, active: bool },
    Selectable { label: String, selected: bool, flags: SelectableFlags, size: Vec2 },
    ProgressBar { fraction: f32, size: Vec2, overlay: Option<String> },
    DragInt { label: String, value: i32 },
    SliderInt { label: String, value: i32, min: i32, max: i32 },
    SliderFloat { label: String, value: f32, min: f32, max: f32 },
    InputText { label: String, flags: InputTextFlags },
    InputTextMultiline { label: String, size: Vec2, flags: InputTextFlags },
}

impl Call {
    /// `true` for the layout directive emitted between inline siblings.
    #[inline]
    pub fn is_same_line(&self) -> bool {
        matches!(self, Call::SameLine)
    }

    /// `true` for the directive that advances to the next table column.
    #[inline]
    pub fn is_next_column(&self) -> bool {
        matches!(self, Call::NextColumn)
    }

    /// `true` for calls that open a region (`Begin*`, `TreeNode`).
    pub fn is_begin(&self) -> bool {
        matches!(
            self,
            Call::BeginWindow { .. }
                | Call::BeginChild { .. }
                | Call::BeginGroup
                | Call::BeginPopupContextItem { .. }
                | Call::BeginPopupModal { .. }
                | Call::BeginMainMenuBar
                | Call::BeginMenuBar
                | Call::BeginMenu { .. }
                | Call::BeginCombo { .. }
                | Call::BeginTabBar { .. }
                | Call::BeginTabItem { .. }
                | Call::TreeNode { .. }
        )
    }

    /// `true` for calls that close a region.
    pub fn is_end(&self) -> bool {
        matches!(
            self,
            Call::EndWindow
                | Call::EndChild
                | Call::EndGroup
                | Call::EndPopup
                | Call::EndMainMenuBar
                | Call::EndMenuBar
                | Call::EndMenu
                | Call::EndCombo
                | Call::EndTabBar
                | Call::EndTabItem
                | Call::TreePop
        )
    }
}
