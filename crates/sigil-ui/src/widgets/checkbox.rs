use crate::context::Context;
use crate::widget::Callback;

/// A checkbox bound to a caller-owned `bool`.
///
/// The backend flips the bound value on click; `on_change` runs afterwards,
/// so it sees the new value through whatever the caller shares with it.
///
/// # Example
/// ```rust,ignore
/// Checkbox::new("Enable shadows", &mut settings.shadows)
///     .on_change(|| log::info!("shadows toggled"))
/// ```
pub struct Checkbox<'a> {
    label: String,
    value: &'a mut bool,
    on_change: Option<Callback<'a>>,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: impl Into<String>, value: &'a mut bool) -> Self {
        Self { label: label.into(), value, on_change: None }
    }

    pub fn on_change(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        if ctx.backend().checkbox(&self.label, self.value) {
            if let Some(mut f) = self.on_change {
                f();
            }
        }
    }
}

/// One option of a radio group.
///
/// `active` is computed by the caller (e.g. `choice == 2`); selecting the
/// option is reported through `on_change`, which is where the caller
/// updates its choice.
pub struct RadioButton<'a> {
    label: String,
    active: bool,
    on_change: Option<Callback<'a>>,
}

impl<'a> RadioButton<'a> {
    pub fn new(label: impl Into<String>, active: bool) -> Self {
        Self { label: label.into(), active, on_change: None }
    }

    pub fn on_change(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        if ctx.backend().radio_button(&self.label, self.active) {
            if let Some(mut f) = self.on_change {
                f();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use sigil_backend::trace::{Call, Script, TraceBackend};

    use super::*;
    use crate::layout;
    use crate::widgets::line::Line;

    #[test]
    fn toggle_writes_through_binding() {
        let mut checked = false;
        let fired = Cell::new(0);
        let mut b = TraceBackend::with_script(Script::new().click("Check"));
        Checkbox::new("Check", &mut checked)
            .on_change(|| fired.set(fired.get() + 1))
            .build(&mut Context::new(&mut b));
        assert!(checked);
        assert_eq!(fired.get(), 1);
        assert_eq!(b.calls(), &[Call::Checkbox { label: "Check".into(), value: true }]);
    }

    #[test]
    fn untouched_checkbox_keeps_value_and_stays_silent() {
        let mut checked = true;
        let fired = Cell::new(false);
        let mut b = TraceBackend::new();
        Checkbox::new("Check", &mut checked)
            .on_change(|| fired.set(true))
            .build(&mut Context::new(&mut b));
        assert!(checked);
        assert!(!fired.get());
    }

    #[test]
    fn radio_group_updates_choice() {
        let choice = Cell::new(0);
        let mut b = TraceBackend::with_script(Script::new().click("Radio 3"));
        Line::new(layout![
            RadioButton::new("Radio 1", choice.get() == 0).on_change(|| choice.set(0)),
            RadioButton::new("Radio 2", choice.get() == 1).on_change(|| choice.set(1)),
            RadioButton::new("Radio 3", choice.get() == 2).on_change(|| choice.set(2)),
        ])
        .build(&mut Context::new(&mut b));
        assert_eq!(choice.get(), 2);
        assert_eq!(b.count(Call::is_same_line), 2);
    }
}
