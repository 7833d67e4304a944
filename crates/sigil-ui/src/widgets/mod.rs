//! Built-in widgets.
//!
//! Primitives wrap one backend draw call, containers wrap a begin/end pair,
//! and the layout composites (`line`, `table`) emit directives between
//! their children.

pub mod button;
pub mod checkbox;
pub mod combo;
pub mod condition;
pub mod container;
pub mod image;
pub mod input;
pub mod label;
pub mod line;
pub mod menu;
pub mod popup;
pub mod progress;
pub mod selectable;
pub mod slider;
pub mod spacing;
pub mod splitter;
pub mod tab;
pub mod table;
pub mod tooltip;
pub mod tree;
