//! Flag sets forwarded to the backend.
//!
//! Bit positions follow Dear ImGui so an adapter can pass `.bits()` straight
//! through. The widget layer never inspects these, with one exception:
//! [`TreeNodeFlags::NO_TREE_PUSH_ON_OPEN`] decides whether a tree node pops.

use bitflags::bitflags;

bitflags! {
    /// Window and child-region behaviour.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u32 {
        const NO_TITLE_BAR                 = 1 << 0;
        const NO_RESIZE                    = 1 << 1;
        const NO_MOVE                      = 1 << 2;
        const NO_SCROLLBAR                 = 1 << 3;
        const NO_SCROLL_WITH_MOUSE         = 1 << 4;
        const NO_COLLAPSE                  = 1 << 5;
        const ALWAYS_AUTO_RESIZE           = 1 << 6;
        const NO_BACKGROUND                = 1 << 7;
        const NO_SAVED_SETTINGS            = 1 << 8;
        const NO_MOUSE_INPUTS              = 1 << 9;
        const MENU_BAR                     = 1 << 10;
        const HORIZONTAL_SCROLLBAR         = 1 << 11;
        const NO_FOCUS_ON_APPEARING        = 1 << 12;
        const NO_BRING_TO_FRONT_ON_FOCUS   = 1 << 13;
        const ALWAYS_VERTICAL_SCROLLBAR    = 1 << 14;
        const ALWAYS_HORIZONTAL_SCROLLBAR  = 1 << 15;
        const ALWAYS_USE_WINDOW_PADDING    = 1 << 16;
        const NO_NAV_INPUTS                = 1 << 18;
        const NO_NAV_FOCUS                 = 1 << 19;
        const UNSAVED_DOCUMENT             = 1 << 20;

        const NO_DECORATION = Self::NO_TITLE_BAR.bits()
            | Self::NO_RESIZE.bits()
            | Self::NO_SCROLLBAR.bits()
            | Self::NO_COLLAPSE.bits();
    }
}

/// Child regions take the same flag set as windows.
pub type ChildFlags = WindowFlags;

bitflags! {
    /// Selectable behaviour.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SelectableFlags: u32 {
        /// Clicking does not close the parent popup.
        const DONT_CLOSE_POPUPS  = 1 << 0;
        /// Frame spans every column; text still fits the current one.
        const SPAN_ALL_COLUMNS   = 1 << 1;
        /// Double clicks also count as presses.
        const ALLOW_DOUBLE_CLICK = 1 << 2;
        /// Not selectable, drawn greyed out.
        const DISABLED           = 1 << 3;
    }
}

impl SelectableFlags {
    pub const NONE: Self = Self::empty();
}

bitflags! {
    /// Text input behaviour.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputTextFlags: u32 {
        const CHARS_DECIMAL          = 1 << 0;
        const CHARS_HEXADECIMAL      = 1 << 1;
        const CHARS_UPPERCASE        = 1 << 2;
        const CHARS_NO_BLANK         = 1 << 3;
        const AUTO_SELECT_ALL        = 1 << 4;
        const ENTER_RETURNS_TRUE     = 1 << 5;
        const CALLBACK_COMPLETION    = 1 << 6;
        const CALLBACK_HISTORY       = 1 << 7;
        const CALLBACK_ALWAYS        = 1 << 8;
        const CALLBACK_CHAR_FILTER   = 1 << 9;
        const ALLOW_TAB_INPUT        = 1 << 10;
        const CTRL_ENTER_FOR_NEW_LINE = 1 << 11;
        const NO_HORIZONTAL_SCROLL   = 1 << 12;
        const ALWAYS_INSERT_MODE     = 1 << 13;
        const READ_ONLY              = 1 << 14;
        const PASSWORD               = 1 << 15;
        const NO_UNDO_REDO           = 1 << 16;
        const CHARS_SCIENTIFIC       = 1 << 17;
        const CALLBACK_RESIZE        = 1 << 18;
        const CALLBACK_EDIT          = 1 << 19;
    }
}

bitflags! {
    /// Tree node behaviour.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TreeNodeFlags: u32 {
        const SELECTED              = 1 << 0;
        const FRAMED                = 1 << 1;
        const ALLOW_ITEM_OVERLAP    = 1 << 2;
        /// An open node does not push onto the tree stack, so no pop follows.
        const NO_TREE_PUSH_ON_OPEN  = 1 << 3;
        const NO_AUTO_OPEN_ON_LOG   = 1 << 4;
        const DEFAULT_OPEN          = 1 << 5;
        const OPEN_ON_DOUBLE_CLICK  = 1 << 6;
        const OPEN_ON_ARROW         = 1 << 7;
        const LEAF                  = 1 << 8;
        const BULLET                = 1 << 9;
        const FRAME_PADDING         = 1 << 10;
        const SPAN_AVAIL_WIDTH      = 1 << 11;
        const SPAN_FULL_WIDTH       = 1 << 12;
        const NAV_LEFT_JUMPS_BACK_HERE = 1 << 13;

        const COLLAPSING_HEADER = Self::FRAMED.bits()
            | Self::NO_TREE_PUSH_ON_OPEN.bits()
            | Self::NO_AUTO_OPEN_ON_LOG.bits();
    }
}

bitflags! {
    /// Tab bar behaviour.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TabBarFlags: u32 {
        const REORDERABLE                      = 1 << 0;
        const AUTO_SELECT_NEW_TABS             = 1 << 1;
        const TAB_LIST_POPUP_BUTTON            = 1 << 2;
        const NO_CLOSE_WITH_MIDDLE_MOUSE_BUTTON = 1 << 3;
        const NO_TAB_LIST_SCROLLING_BUTTONS    = 1 << 4;
        const NO_TOOLTIP                       = 1 << 5;
        const FITTING_POLICY_RESIZE_DOWN       = 1 << 6;
        const FITTING_POLICY_SCROLL            = 1 << 7;
    }
}

bitflags! {
    /// Tab item behaviour.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TabItemFlags: u32 {
        const UNSAVED_DOCUMENT                  = 1 << 0;
        const SET_SELECTED                      = 1 << 1;
        const NO_CLOSE_WITH_MIDDLE_MOUSE_BUTTON = 1 << 2;
        const NO_PUSH_ID                        = 1 << 3;
    }
}

bitflags! {
    /// Combo box behaviour.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ComboFlags: u32 {
        const POPUP_ALIGN_LEFT = 1 << 0;
        const HEIGHT_SMALL     = 1 << 1;
        const HEIGHT_REGULAR   = 1 << 2;
        const HEIGHT_LARGE     = 1 << 3;
        const HEIGHT_LARGEST   = 1 << 4;
        const NO_ARROW_BUTTON  = 1 << 5;
        const NO_PREVIEW       = 1 << 6;
    }
}
