//! Whole-tree build behaviour checked against the recorded backend calls.

use std::cell::Cell;

use sigil_backend::trace::{Call, Script, TraceBackend};
use sigil_ui::prelude::*;

fn build_with(script: Script, f: impl FnOnce(&mut Context<'_>)) -> Vec<Call> {
    let mut backend = TraceBackend::with_script(script);
    f(&mut Context::new(&mut backend));
    backend.take_calls()
}

fn text(s: &str) -> Call {
    Call::Text(s.to_string())
}

#[test]
fn bordered_table_scenario() {
    let calls = build_with(Script::new(), |ctx| {
        Table::new("T")
            .border(true)
            .row(Row::new(layout![Label::new("A"), Label::new("B")]))
            .row(Row::new(layout![Label::new("C"), Label::new("D")]))
            .build(ctx);
    });

    assert_eq!(
        calls,
        vec![
            Call::Columns { count: 2, id: "T".into(), border: true },
            Call::Separator,
            text("A"),
            Call::NextColumn,
            text("B"),
            Call::Separator,
            Call::NextColumn,
            text("C"),
            Call::NextColumn,
            text("D"),
            Call::Columns { count: 1, id: String::new(), border: false },
            Call::Separator,
        ]
    );

    let separators_before_rows = calls
        .iter()
        .take_while(|c| **c != text("D"))
        .filter(|c| **c == Call::Separator)
        .count();
    assert_eq!(separators_before_rows, 2);
    // One separator above each row plus the trailing one.
    assert_eq!(calls.iter().filter(|c| **c == Call::Separator).count(), 3);
    assert_eq!(calls.last(), Some(&Call::Separator));
}

#[test]
fn line_never_joins_floating_widgets() {
    let calls = build_with(Script::new(), |ctx| {
        Line::new(layout![Button::new("Click"), Tooltip::new("hi")]).build(ctx);
    });
    assert!(calls.iter().all(|c| !c.is_same_line()));

    let calls = build_with(Script::new(), |ctx| {
        Line::new(layout![
            Label::new("a"),
            ContextMenu::new(layout![]),
            Popup::new("p", layout![]),
            TabItem::new("t", layout![]),
            Label::new("b"),
        ])
        .build(ctx);
    });
    assert_eq!(calls.iter().filter(|c| c.is_same_line()).count(), 1);
    let b = calls.iter().position(|c| *c == text("b")).unwrap();
    assert_eq!(calls[b - 1], Call::SameLine);
}

#[test]
fn false_condition_is_silent() {
    let calls = build_with(Script::new(), |ctx| {
        Condition::new(
            false,
            layout![
                Label::new("hidden"),
                Child::new("pane", layout![Button::new("x")]),
                Table::new("t").row(Row::new(layout![Label::new("cell")])),
            ],
        )
        .build(ctx);
    });
    assert!(calls.is_empty());
}

#[test]
fn every_begin_has_one_end_when_open() {
    let mut checked = false;
    let mut sel = 0;
    let calls = build_with(Script::new(), |ctx| {
        layout![
            MainMenuBar::new(layout![Menu::new("File", layout![MenuItem::new("Open")])]),
            Group::new(layout![Label::new("g")]),
            Child::new("c", layout![Checkbox::new("x", &mut checked)]),
            Combo::new("combo", ["a", "b"], &mut sel),
            TabBar::new("tabs", layout![TabItem::new("one", layout![Label::new("1")])]),
            TreeNode::new("node", layout![Label::new("leaf")]),
        ]
        .build(ctx);
    });
    let begins = calls.iter().filter(|c| c.is_begin()).count();
    let ends = calls.iter().filter(|c| c.is_end()).count();
    assert_eq!(begins, 8);
    assert_eq!(begins, ends);
}

#[test]
fn closed_containers_issue_no_end() {
    let calls = build_with(Script::new().all_closed(), |ctx| {
        layout![
            MainMenuBar::new(layout![Label::new("x")]),
            Child::new("c", layout![Label::new("x")]),
            TabBar::new("tabs", layout![Label::new("x")]),
            TreeNode::new("node", layout![Label::new("x")]),
            Popup::new("modal", layout![Label::new("x")]),
        ]
        .build(ctx);
    });
    assert_eq!(calls.len(), 5);
    assert!(calls.iter().all(Call::is_begin));
}

#[test]
fn collapsing_header_skips_pop() {
    let calls = build_with(Script::new(), |ctx| {
        TreeNode::new("TreeNode1", layout![Label::new("body")])
            .flags(TreeNodeFlags::COLLAPSING_HEADER | TreeNodeFlags::DEFAULT_OPEN)
            .build(ctx);
    });
    assert!(calls.contains(&text("body")));
    assert!(!calls.contains(&Call::TreePop));
}

#[test]
fn callbacks_fire_once_per_reported_interaction() {
    let clicks = Cell::new(0);
    let script = Script::new().click("hit");
    for _ in 0..3 {
        build_with(script.clone(), |ctx| {
            layout![
                Button::new("hit").on_click(|| clicks.set(clicks.get() + 1)),
                Button::new("miss").on_click(|| clicks.set(clicks.get() + 100)),
            ]
            .build(ctx);
        });
    }
    assert_eq!(clicks.get(), 3);
}

#[test]
fn frame_wraps_window_tree() {
    let mut backend = TraceBackend::new();
    let mut name = String::from("sigil");
    Context::frame(&mut backend, |ctx| {
        Window::new("Overview").build(ctx, layout![InputText::new("##name", &mut name)]);
    });
    let calls = backend.calls();
    assert_eq!(calls.first(), Some(&Call::NewFrame));
    assert_eq!(calls.last(), Some(&Call::Render));
    assert_eq!(calls[calls.len() - 2], Call::EndWindow);
}
