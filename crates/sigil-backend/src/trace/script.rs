use std::collections::{HashMap, HashSet};

use crate::coords::Vec2;

/// Scripted answers for [`TraceBackend`](super::TraceBackend).
///
/// Labels are matched exactly (including any `##id` suffix). Interactions are
/// one-shot per frame only in the sense that the script is read every frame;
/// clear an entry to stop reporting it.
#[derive(Debug, Clone)]
pub struct Script {
    /// Result of a `begin_*` whose id is in neither `opened` nor `closed`.
    pub open_by_default: bool,
    /// Ids whose `begin_*` always reports open.
    pub opened: HashSet<String>,
    /// Ids whose `begin_*` always reports closed.
    pub closed: HashSet<String>,

    /// Item labels that report a click / toggle this frame.
    pub clicked: HashSet<String>,
    /// Item labels that report hover while they are the last item.
    pub hovered: HashSet<String>,
    /// Item labels that report "held" while they are the last item.
    pub active: HashSet<String>,
    /// Items whose right-click opens their context popup.
    pub right_clicked: HashSet<String>,

    /// Characters typed into a text input, keyed by label.
    pub typed: HashMap<String, String>,
    /// New value for an int drag/slider, keyed by label.
    pub ints: HashMap<String, i32>,
    /// New value for a float slider, keyed by label.
    pub floats: HashMap<String, f32>,

    pub mouse_delta: Vec2,
    pub display_size: Vec2,
    pub content_avail: Vec2,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            open_by_default: true,
            opened: HashSet::new(),
            closed: HashSet::new(),
            clicked: HashSet::new(),
            hovered: HashSet::new(),
            active: HashSet::new(),
            right_clicked: HashSet::new(),
            typed: HashMap::new(),
            ints: HashMap::new(),
            floats: HashMap::new(),
            mouse_delta: Vec2::zero(),
            display_size: Vec2::new(1280.0, 720.0),
            content_avail: Vec2::new(640.0, 480.0),
        }
    }
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every region stays closed unless listed in `opened`.
    pub fn all_closed(mut self) -> Self {
        self.open_by_default = false;
        self
    }

    pub fn open(mut self, id: impl Into<String>) -> Self {
        self.opened.insert(id.into());
        self
    }

    pub fn close(mut self, id: impl Into<String>) -> Self {
        self.closed.insert(id.into());
        self
    }

    pub fn click(mut self, label: impl Into<String>) -> Self {
        self.clicked.insert(label.into());
        self
    }

    pub fn hover(mut self, label: impl Into<String>) -> Self {
        self.hovered.insert(label.into());
        self
    }

    pub fn hold(mut self, label: impl Into<String>) -> Self {
        self.active.insert(label.into());
        self
    }

    pub fn right_click(mut self, label: impl Into<String>) -> Self {
        self.right_clicked.insert(label.into());
        self
    }

    pub fn type_text(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.typed.insert(label.into(), text.into());
        self
    }

    pub fn set_int(mut self, label: impl Into<String>, v: i32) -> Self {
        self.ints.insert(label.into(), v);
        self
    }

    pub fn set_float(mut self, label: impl Into<String>, v: f32) -> Self {
        self.floats.insert(label.into(), v);
        self
    }

    pub fn mouse_delta(mut self, delta: Vec2) -> Self {
        self.mouse_delta = delta;
        self
    }

    pub fn display_size(mut self, size: Vec2) -> Self {
        self.display_size = size;
        self
    }

    pub fn content_avail(mut self, avail: Vec2) -> Self {
        self.content_avail = avail;
        self
    }

    /// Result of a `begin_*` call for `id`.
    pub fn is_open(&self, id: &str) -> bool {
        if self.closed.contains(id) {
            false
        } else if self.opened.contains(id) {
            true
        } else {
            self.open_by_default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_wins_over_opened() {
        let s = Script::new().open("a").close("a");
        assert!(!s.is_open("a"));
    }

    #[test]
    fn default_decides_unlisted_ids() {
        assert!(Script::new().is_open("x"));
        assert!(!Script::new().all_closed().is_open("x"));
        assert!(Script::new().all_closed().open("x").is_open("x"));
    }
}
