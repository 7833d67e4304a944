/// Straight-alpha RGBA color with components in `[0, 1]`.
///
/// Immediate-mode libraries take style colors un-premultiplied, so unlike a
/// compositor color this type is never premultiplied.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Creates a color from 8-bit RGBA channels (`0`–`255`).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Packs the color into `0xAABBGGRR`, the layout Dear ImGui uses for `ImU32`.
    pub fn to_abgr_u32(self) -> u32 {
        let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
        (ch(self.a) << 24) | (ch(self.b) << 16) | (ch(self.g) << 8) | ch(self.r)
    }
}
