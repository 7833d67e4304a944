use sigil_backend::Vec2;
use sigil_backend::flags::{ComboFlags, SelectableFlags};

use crate::context::Context;
use crate::widget::Callback;

/// A drop-down list bound to a caller-owned index.
///
/// While open, each item is drawn as a selectable; picking one writes its
/// index into `selected` and fires `on_change`. The preview defaults to the
/// currently selected item's text.
pub struct Combo<'a> {
    label: String,
    preview: Option<String>,
    items: Vec<String>,
    selected: &'a mut i32,
    flags: ComboFlags,
    on_change: Option<Callback<'a>>,
}

impl<'a> Combo<'a> {
    pub fn new<I, S>(label: impl Into<String>, items: I, selected: &'a mut i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            preview: None,
            items: items.into_iter().map(Into::into).collect(),
            selected,
            flags: ComboFlags::empty(),
            on_change: None,
        }
    }

    pub fn preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }

    pub fn flags(mut self, flags: ComboFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn on_change(mut self, f: impl FnMut() + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn build(mut self, ctx: &mut Context<'_>) {
        let preview = match self.preview.take() {
            Some(p) => p,
            None => usize::try_from(*self.selected)
                .ok()
                .and_then(|i| self.items.get(i))
                .cloned()
                .unwrap_or_default(),
        };

        let b = ctx.backend();
        if !b.begin_combo(&self.label, &preview, self.flags) {
            return;
        }
        for (i, item) in self.items.iter().enumerate() {
            let is_selected = usize::try_from(*self.selected).is_ok_and(|s| s == i);
            if !b.selectable(item, is_selected, SelectableFlags::NONE, Vec2::zero()) {
                continue;
            }
            let Some(index) = selection_index(i) else {
                log::debug!("combo {:?}: item {i} has no i32 index, ignored", self.label);
                continue;
            };
            *self.selected = index;
            if let Some(f) = self.on_change.as_mut() {
                f();
            }
        }
        b.end_combo();
    }
}

/// Item position as the caller's `i32` index, if it fits.
fn selection_index(i: usize) -> Option<i32> {
    i32::try_from(i).ok()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use sigil_backend::trace::{Call, Script, TraceBackend};

    use super::*;

    fn items() -> Vec<String> {
        (0..3).map(|i| format!("Item {i}")).collect()
    }

    #[test]
    fn picking_an_item_updates_index() {
        let mut selected = 0;
        let fired = Cell::new(0);
        let mut b = TraceBackend::with_script(Script::new().click("Item 2"));
        Combo::new("Combo", items(), &mut selected)
            .on_change(|| fired.set(fired.get() + 1))
            .build(&mut Context::new(&mut b));
        assert_eq!(selected, 2);
        assert_eq!(fired.get(), 1);
        assert_eq!(b.calls().last(), Some(&Call::EndCombo));
    }

    #[test]
    fn preview_defaults_to_selection() {
        let mut selected = 1;
        let mut b = TraceBackend::with_script(Script::new().all_closed());
        Combo::new("Combo", items(), &mut selected).build(&mut Context::new(&mut b));
        assert_eq!(
            b.calls(),
            &[Call::BeginCombo {
                label: "Combo".into(),
                preview: "Item 1".into(),
                flags: ComboFlags::empty(),
            }]
        );
    }

    #[test]
    fn out_of_range_selection_previews_empty() {
        let mut selected = -1;
        let mut b = TraceBackend::with_script(Script::new().all_closed());
        Combo::new("Combo", items(), &mut selected).build(&mut Context::new(&mut b));
        assert!(matches!(&b.calls()[0], Call::BeginCombo { preview, .. } if preview.is_empty()));
    }

    #[test]
    fn unrepresentable_index_is_not_written() {
        assert_eq!(selection_index(7), Some(7));
        assert_eq!(selection_index(i32::MAX as usize), Some(i32::MAX));
        assert_eq!(selection_index(i32::MAX as usize + 1), None);
        assert_eq!(selection_index(usize::MAX), None);
    }

    #[test]
    fn open_combo_marks_current_item() {
        let mut selected = 1;
        let mut b = TraceBackend::new();
        Combo::new("Combo", items(), &mut selected).build(&mut Context::new(&mut b));
        let marked: Vec<bool> = b
            .calls()
            .iter()
            .filter_map(|c| match c {
                Call::Selectable { selected, .. } => Some(*selected),
                _ => None,
            })
            .collect();
        assert_eq!(marked, vec![false, true, false]);
    }
}
