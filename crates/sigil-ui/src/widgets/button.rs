use sigil_backend::{TextureId, Vec2};

use crate::context::Context;
use crate::widget::Callback;

/// Popup request a button issues when clicked, before its callback runs.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupRequest {
    Open(String),
    CloseCurrent,
}

/// A push button.
///
/// A zero size lets the backend fit the label.
///
/// # Example
/// ```rust,ignore
/// Button::new("Delete")
///     .opens_popup("Confirm")
///     .on_click(|| log::info!("asking for confirmation"))
/// ```
pub struct Button<'a> {
    label: String,
    size: Vec2,
    popup: Option<PopupRequest>,
    on_click: Option<Callback<'a>>,
}

impl<'a> Button<'a> {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), size: Vec2::zero(), popup: None, on_click: None }
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Vec2::new(width, height);
        self
    }

    /// Callback invoked on the frame the button is clicked.
    pub fn on_click(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Marks the popup `name` open when clicked.
    pub fn opens_popup(mut self, name: impl Into<String>) -> Self {
        self.popup = Some(PopupRequest::Open(name.into()));
        self
    }

    /// Closes the enclosing popup when clicked.
    pub fn closes_popup(mut self) -> Self {
        self.popup = Some(PopupRequest::CloseCurrent);
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        if !ctx.backend().button(&self.label, self.size) {
            return;
        }
        match &self.popup {
            Some(PopupRequest::Open(name)) => ctx.open_popup(name),
            Some(PopupRequest::CloseCurrent) => ctx.close_current_popup(),
            None => {}
        }
        if let Some(mut f) = self.on_click {
            f();
        }
    }
}

/// A clickable area with no visuals.
pub struct InvisibleButton<'a> {
    id: String,
    size: Vec2,
    on_click: Option<Callback<'a>>,
}

impl<'a> InvisibleButton<'a> {
    pub fn new(id: impl Into<String>, width: f32, height: f32) -> Self {
        Self { id: id.into(), size: Vec2::new(width, height), on_click: None }
    }

    pub fn on_click(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        if ctx.backend().invisible_button(&self.id, self.size) {
            if let Some(mut f) = self.on_click {
                f();
            }
        }
    }
}

/// A button showing a texture.
///
/// A missing or null texture draws nothing.
pub struct ImageButton<'a> {
    texture: Option<TextureId>,
    size: Vec2,
    on_click: Option<Callback<'a>>,
}

impl<'a> ImageButton<'a> {
    pub fn new(texture: Option<TextureId>, width: f32, height: f32) -> Self {
        Self { texture, size: Vec2::new(width, height), on_click: None }
    }

    pub fn on_click(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let Some(texture) = self.texture.filter(|t| !t.is_null()) else {
            return;
        };
        if ctx.backend().image_button(texture, self.size) {
            if let Some(mut f) = self.on_click {
                f();
            }
        }
    }
}
