//! Sigil backend crate.
//!
//! Owns the contract between the widget layer and the immediate-mode
//! rendering library it drives, plus the small value types both sides share.
//! Nothing in here draws; implementors of [`Backend`] do.

pub mod backend;
pub mod coords;
pub mod flags;
pub mod logging;
pub mod trace;

pub use backend::{
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
pub use coords::{Color, Vec2};
