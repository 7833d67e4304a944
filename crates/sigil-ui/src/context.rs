use sigil_backend::{Backend, Vec2};

use crate::widget::Layout;

/// Per-frame build context handed to every widget.
///
/// Wraps the backend for the duration of one frame. Widgets reach the
/// renderer only through this value; nothing in the widget layer is global.
pub struct Context<'a> {
    backend: &'a mut dyn Backend,
}

impl<'a> Context<'a> {
    pub fn new(backend: &'a mut dyn Backend) -> Self {
        Self { backend }
    }

    /// Runs one complete frame: `new_frame`, `build`, `render`.
    ///
    /// The build always runs to completion; there is no partial frame.
    pub fn frame<R>(backend: &'a mut dyn Backend, build: impl FnOnce(&mut Context<'a>) -> R) -> R {
        let mut ctx = Context::new(backend);
        ctx.backend.new_frame();
        log::debug!("frame begin");
        let out = build(&mut ctx);
        ctx.backend.render();
        log::debug!("frame end");
        out
    }

    /// Direct access to the backend, for [`Custom`](crate::widgets::condition::Custom)
    /// builders and widgets outside this crate.
    #[inline]
    pub fn backend(&mut self) -> &mut dyn Backend {
        &mut *self.backend
    }

    #[inline]
    pub fn display_size(&self) -> Vec2 {
        self.backend.display_size()
    }

    #[inline]
    pub fn content_region_avail(&self) -> Vec2 {
        self.backend.content_region_avail()
    }

    /// Requests that the popup `name` shows from its next `begin`.
    pub fn open_popup(&mut self, name: &str) {
        log::trace!("open popup {name:?}");
        self.backend.open_popup(name);
    }

    pub fn close_current_popup(&mut self) {
        self.backend.close_current_popup();
    }

    /// Builds `layout` inside a region whose begin reported `open`, then
    /// issues `end`. Closed regions get neither the layout nor the end call.
    pub(crate) fn region(
        &mut self,
        kind: &str,
        open: bool,
        layout: Layout<'_>,
        end: fn(&mut dyn Backend),
    ) {
        if !open {
            log::trace!("{kind} closed, skipping {} children", layout.len());
            return;
        }
        layout.build(self);
        end(&mut *self.backend);
    }
}

#[cfg(test)]
mod tests {
    use sigil_backend::trace::{Call, TraceBackend};

    use super::*;
    use crate::widgets::label::Label;
    use crate::layout;

    #[test]
    fn frame_brackets_build() {
        let mut b = TraceBackend::new();
        Context::frame(&mut b, |ctx| {
            ctx.backend().text("inside");
        });
        assert_eq!(
            b.calls(),
            &[Call::NewFrame, Call::Text("inside".into()), Call::Render]
        );
    }

    #[test]
    fn region_skips_layout_and_end_when_closed() {
        let mut b = TraceBackend::new();
        let mut ctx = Context::new(&mut b);
        ctx.region("test", false, layout![Label::new("x")], |b| b.end_group());
        assert!(b.calls().is_empty());
    }

    #[test]
    fn region_builds_then_ends_when_open() {
        let mut b = TraceBackend::new();
        let mut ctx = Context::new(&mut b);
        ctx.region("test", true, layout![Label::new("x")], |b| b.end_group());
        assert_eq!(b.calls(), &[Call::Text("x".into()), Call::EndGroup]);
    }

    #[test]
    fn display_size_comes_from_backend() {
        let mut b = TraceBackend::new();
        b.script.display_size = Vec2::new(800.0, 600.0);
        let ctx = Context::new(&mut b);
        assert_eq!(ctx.display_size(), Vec2::new(800.0, 600.0));
    }
}
