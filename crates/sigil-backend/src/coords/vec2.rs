/// 2D vector in logical pixels.
///
/// Also used for item sizes, where a component of `0.0` lets the backend pick
/// a natural size and a negative component is backend-defined (typically
/// "align to the right edge").
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Returns `self` with every component equal to `-1.0` replaced by the
    /// matching component of `avail`.
    #[inline]
    #[must_use]
    pub fn fill_from(self, avail: Vec2) -> Vec2 {
        Vec2::new(
            if self.x == -1.0 { avail.x } else { self.x },
            if self.y == -1.0 { avail.y } else { self.y },
        )
    }

    /// `true` if either component asks to fill the available region.
    #[inline]
    pub fn wants_fill(self) -> bool {
        self.x == -1.0 || self.y == -1.0
    }
}
