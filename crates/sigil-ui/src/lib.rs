//! Sigil UI: declarative widget trees played against an immediate-mode backend.
//!
//! Every frame the caller describes its UI as a fresh tree of widget
//! descriptors and builds it against a [`Context`]. Widgets hold no state of
//! their own; anything that must survive a frame lives in the caller and is
//! lent to widgets as `&mut` for the duration of the build.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sigil_ui::prelude::*;
//!
//! let mut name = String::new();
//! let mut checked = false;
//!
//! Context::frame(&mut backend, |ctx| {
//!     Window::new("Overview").size(800.0, 600.0).build(ctx, layout![
//!         Label::new("One line label"),
//!         Line::new(layout![
//!             InputText::new("##name", &mut name),
//!             Button::new("Click Me").on_click(|| log::info!("clicked")),
//!             Tooltip::new("I'm a tooltip"),
//!         ]),
//!         Checkbox::new("Checkbox", &mut checked),
//!     ]);
//! });
//! ```
//!
//! # Custom widgets
//!
//! Wrap any builder in [`Custom`](widgets::condition::Custom) and talk to the
//! backend through [`Context::backend`].

pub mod context;
pub mod widget;
pub mod widgets;
pub mod window;

pub use context::Context;
pub use widget::{Callback, Layout, Widget};
pub use window::Window;

/// Everything needed to describe a UI; import this in view code.
pub mod prelude {
    pub use crate::context::Context;
    pub use crate::layout;
    pub use crate::widget::{Callback, Layout, Widget};
    pub use crate::widgets::{
        button::{Button, ImageButton, InvisibleButton},
        checkbox::{Checkbox, RadioButton},
        combo::Combo,
        condition::{Condition, Custom},
        container::{Child, Group},
        image::Image,
        input::{EditFn, InputText, InputTextMultiline},
        label::Label,
        line::Line,
        menu::{MainMenuBar, Menu, MenuBar, MenuItem},
        popup::{ContextMenu, Popup},
        progress::ProgressBar,
        selectable::Selectable,
        slider::{DragInt, SliderFloat, SliderInt},
        spacing::{Dummy, Separator, Spacing},
        splitter::{SplitAxis, Splitter},
        tab::{TabBar, TabItem},
        table::{Row, Table},
        tooltip::Tooltip,
        tree::TreeNode,
    };
    pub use crate::window::Window;

    pub use sigil_backend::flags::{
        ChildFlags,
        ComboFlags,
        InputTextFlags,
        SelectableFlags,
        TabBarFlags,
        TabItemFlags,
        TreeNodeFlags,
        WindowFlags,
    };
    pub use sigil_backend::{
        Backend,
        Color,
        EditAction,
        FontId,
        MouseButton,
        MouseCursor,
        TextEdit,
        TextEditEvent,
        TextureId,
        Vec2,
    };
}
