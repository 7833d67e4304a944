use sigil_backend::Vec2;
use sigil_backend::flags::WindowFlags;

use crate::context::Context;
use crate::widget::Layout;

/// A top-level window region.
///
/// Position and size are applied every frame, so the window cannot drift
/// from what the caller describes. Without an [`open`](Window::open) binding
/// the user has no way to close it.
///
/// # Example
/// ```rust,ignore
/// Context::frame(&mut backend, |ctx| {
///     Window::new("Overview")
///         .position(0.0, 20.0)
///         .size(800.0, 580.0)
///         .build(ctx, layout![Label::new("One line label")]);
/// });
/// ```
pub struct Window<'a> {
    title: String,
    position: Vec2,
    size: Vec2,
    open: Option<&'a mut bool>,
    flags: WindowFlags,
}

impl<'a> Window<'a> {
    /// Default flags: no collapse, no move, no resize.
    pub const DEFAULT_FLAGS: WindowFlags = WindowFlags::NO_COLLAPSE
        .union(WindowFlags::NO_MOVE)
        .union(WindowFlags::NO_RESIZE);

    /// Flags of a [`single`](Window::single) window.
    pub const SINGLE_FLAGS: WindowFlags = WindowFlags::NO_TITLE_BAR
        .union(WindowFlags::NO_BACKGROUND)
        .union(WindowFlags::NO_COLLAPSE)
        .union(WindowFlags::NO_SCROLLBAR)
        .union(WindowFlags::NO_MOVE)
        .union(WindowFlags::NO_RESIZE);

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            position: Vec2::zero(),
            size: Vec2::zero(),
            open: None,
            flags: Self::DEFAULT_FLAGS,
        }
    }

    /// A decorationless window covering the whole display.
    ///
    /// The display size is read when the window is built, so it tracks
    /// platform resizes.
    pub fn single(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            position: Vec2::zero(),
            size: Vec2::new(-1.0, -1.0),
            open: None,
            flags: Self::SINGLE_FLAGS,
        }
    }

    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// A component of `-1` takes the display size on that axis.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Vec2::new(width, height);
        self
    }

    /// Adds a close button writing `false` through `open`.
    pub fn open(mut self, open: &'a mut bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn flags(mut self, flags: WindowFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Begins the window, builds `layout` and ends the window.
    ///
    /// The end call is issued even when the begin reports the window
    /// collapsed or clipped; the layout is still built in that case and the
    /// backend discards its output.
    pub fn build(mut self, ctx: &mut Context<'_>, layout: Layout<'_>) {
        let size = self.size.fill_from(ctx.display_size());
        let b = ctx.backend();
        b.set_next_window_pos(self.position);
        b.set_next_window_size(size);
        let visible = b.begin_window(&self.title, self.open.as_deref_mut(), self.flags);
        log::trace!("window {:?} visible={visible}", self.title);
        layout.build(ctx);
        ctx.backend().end_window();
    }
}
