use crate::context::Context;
use crate::widget::Callback;

/// Integer field edited by dragging.
///
/// With `min >= max` the value is unbounded.
pub struct DragInt<'a> {
    label: String,
    value: &'a mut i32,
    speed: f32,
    min: i32,
    max: i32,
    format: String,
    on_change: Option<Callback<'a>>,
}

impl<'a> DragInt<'a> {
    pub fn new(label: impl Into<String>, value: &'a mut i32) -> Self {
        Self {
            label: label.into(),
            value,
            speed: 1.0,
            min: 0,
            max: 0,
            format: "%d".to_string(),
            on_change: None,
        }
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn on_change(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let changed = ctx.backend().drag_int(
            &self.label,
            self.value,
            self.speed,
            self.min,
            self.max,
            &self.format,
        );
        if changed {
            if let Some(mut f) = self.on_change {
                f();
            }
        }
    }
}

/// Integer slider over `[min, max]`.
pub struct SliderInt<'a> {
    label: String,
    value: &'a mut i32,
    min: i32,
    max: i32,
    format: String,
    on_change: Option<Callback<'a>>,
}

impl<'a> SliderInt<'a> {
    pub fn new(label: impl Into<String>, value: &'a mut i32, min: i32, max: i32) -> Self {
        Self { label: label.into(), value, min, max, format: "%d".to_string(), on_change: None }
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn on_change(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        if ctx.backend().slider_int(&self.label, self.value, self.min, self.max, &self.format) {
            if let Some(mut f) = self.on_change {
                f();
            }
        }
    }
}

/// Float slider over `[min, max]`.
pub struct SliderFloat<'a> {
    label: String,
    value: &'a mut f32,
    min: f32,
    max: f32,
    format: String,
    on_change: Option<Callback<'a>>,
}

impl<'a> SliderFloat<'a> {
    pub fn new(label: impl Into<String>, value: &'a mut f32, min: f32, max: f32) -> Self {
        Self { label: label.into(), value, min, max, format: "%.3f".to_string(), on_change: None }
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn on_change(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        if ctx.backend().slider_float(&self.label, self.value, self.min, self.max, &self.format) {
            if let Some(mut f) = self.on_change {
                f();
            }
        }
    }
}
