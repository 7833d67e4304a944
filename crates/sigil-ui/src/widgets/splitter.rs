use sigil_backend::{MouseCursor, Vec2};

use crate::context::Context;

/// Which way a [`Splitter`] divides space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// A horizontal bar, dragged up and down. Reports the Y delta.
    Horizontal,
    /// A vertical bar, dragged left and right. Reports the X delta.
    Vertical,
}

/// A draggable divider with no state of its own.
///
/// Each frame it places an invisible handle, then writes this frame's mouse
/// movement along its axis into `delta` while the handle is held, and `0`
/// otherwise. The caller applies the delta to whatever sizes it owns.
///
/// # Example
/// ```rust,ignore
/// Splitter::vertical("##split", 4.0, 300.0, &mut drag),
/// // after the frame:
/// left_width += drag;
/// ```
pub struct Splitter<'a> {
    id: String,
    axis: SplitAxis,
    size: Vec2,
    delta: &'a mut f32,
}

impl<'a> Splitter<'a> {
    pub fn horizontal(id: impl Into<String>, width: f32, height: f32, delta: &'a mut f32) -> Self {
        Self { id: id.into(), axis: SplitAxis::Horizontal, size: Vec2::new(width, height), delta }
    }

    pub fn vertical(id: impl Into<String>, width: f32, height: f32, delta: &'a mut f32) -> Self {
        Self { id: id.into(), axis: SplitAxis::Vertical, size: Vec2::new(width, height), delta }
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let b = ctx.backend();
        b.invisible_button(&self.id, self.size);

        *self.delta = if b.is_item_active() {
            let d = b.mouse_delta();
            match self.axis {
                SplitAxis::Horizontal => d.y,
                SplitAxis::Vertical => d.x,
            }
        } else {
            0.0
        };

        if b.is_item_hovered() {
            b.set_mouse_cursor(match self.axis {
                SplitAxis::Horizontal => MouseCursor::ResizeNS,
                SplitAxis::Vertical => MouseCursor::ResizeEW,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use sigil_backend::trace::{Script, TraceBackend};

    use super::*;

    #[test]
    fn held_horizontal_splitter_reports_y() {
        let mut delta = 99.0;
        let script = Script::new().hold("##h").hover("##h").mouse_delta(Vec2::new(3.0, -7.0));
        let mut b = TraceBackend::with_script(script);
        Splitter::horizontal("##h", 200.0, 4.0, &mut delta).build(&mut Context::new(&mut b));
        assert_eq!(delta, -7.0);
        assert_eq!(b.cursor(), Some(MouseCursor::ResizeNS));
    }

    #[test]
    fn held_vertical_splitter_reports_x() {
        let mut delta = 0.0;
        let script = Script::new().hold("##v").mouse_delta(Vec2::new(5.0, 1.0));
        let mut b = TraceBackend::with_script(script);
        Splitter::vertical("##v", 4.0, 200.0, &mut delta).build(&mut Context::new(&mut b));
        assert_eq!(delta, 5.0);
        assert_eq!(b.cursor(), None);
    }

    #[test]
    fn idle_splitter_resets_delta() {
        let mut delta = 12.5;
        let script = Script::new().hover("##v").mouse_delta(Vec2::new(5.0, 1.0));
        let mut b = TraceBackend::with_script(script);
        Splitter::vertical("##v", 4.0, 200.0, &mut delta).build(&mut Context::new(&mut b));
        assert_eq!(delta, 0.0);
        assert_eq!(b.cursor(), Some(MouseCursor::ResizeEW));
    }
}
