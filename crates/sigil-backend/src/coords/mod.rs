//! Geometry and color values passed across the backend boundary.
//!
//! Coordinates are logical pixels, origin top-left, +Y down, matching what
//! immediate-mode libraries expect for window positions and item sizes.

mod color;
mod vec2;

pub use color::Color;
pub use vec2::Vec2;
