use std::cell::Cell;

use sigil_ui::prelude::*;

/// Everything the overview UI keeps between frames.
pub struct Overview {
    pub name: String,
    pub items: Vec<String>,
    pub item_selected: i32,
    pub checked: bool,
    pub checked2: bool,
    pub table_checked: bool,
    pub drag_int: i32,
    pub slider: i32,
    pub multiline: String,
    pub radio: Cell<usize>,
    pub clicks: Cell<u32>,
}

impl Default for Overview {
    fn default() -> Self {
        Self {
            name: String::new(),
            items: (0..100).map(|i| format!("Item {i}")).collect(),
            item_selected: 0,
            checked: false,
            checked2: false,
            table_checked: false,
            drag_int: 0,
            slider: 0,
            multiline: String::new(),
            radio: Cell::new(0),
            clicks: Cell::new(0),
        }
    }
}

impl Overview {
    pub fn selected_item(&self) -> Option<&str> {
        usize::try_from(self.item_selected).ok().and_then(|i| self.items.get(i)).map(String::as_str)
    }

    /// Describes and builds one frame of the overview.
    pub fn build(&mut self, ctx: &mut Context<'_>) {
        main_menu().build(ctx);

        let display = ctx.display_size();
        let radio = &self.radio;
        let clicks = &self.clicks;

        Window::new("Overview")
            .position(0.0, 20.0)
            .size(display.x, display.y)
            .build(ctx, layout![
                Label::new("One line label"),
                Line::new(layout![
                    InputText::new("##name", &mut self.name),
                    Button::new("Click Me").on_click(|| {
                        clicks.set(clicks.get() + 1);
                        log::info!("Click me is clicked");
                    }),
                    Tooltip::new("I'm a tooltip"),
                ]),
                Line::new(layout![
                    Checkbox::new("Checkbox", &mut self.checked).on_change(|| log::info!("Checkbox toggled")),
                    Checkbox::new("Checkbox 2", &mut self.checked2).on_change(|| log::info!("Checkbox 2 toggled")),
                    Dummy::new(30.0, 0.0),
                    radio_button("Radio 1", 0, radio),
                    radio_button("Radio 2", 1, radio),
                    radio_button("Radio 3", 2, radio),
                ]),
                ProgressBar::new(0.8).size(-1.0, 0.0).overlay("Progress"),
                DragInt::new("DragInt", &mut self.drag_int),
                SliderInt::new("Slider", &mut self.slider, 0, 100),
                Combo::new("Combo", self.items.iter().cloned(), &mut self.item_selected)
                    .on_change(|| log::info!("combo selection changed")),
                Line::new(layout![
                    Button::new("Popup Modal").opens_popup("Confirm"),
                    Popup::new("Confirm", layout![
                        Label::new("Confirm to close me?"),
                        Line::new(layout![Button::new("Yes").closes_popup(), Button::new("No")]),
                    ]),
                    Label::new("Right click me to see the context menu"),
                    ContextMenu::new(layout![
                        Selectable::new("Context menu 1").on_click(|| log::info!("Context menu 1 is clicked")),
                        Selectable::new("Context menu 2").on_click(|| log::info!("Context menu 2 is clicked")),
                    ]),
                ]),
                TabBar::new("Tabbar Input", layout![
                    TabItem::new("Multiline Input", layout![
                        Label::new("This is first tab with a multiline input text field"),
                        InputTextMultiline::new("##multiline", &mut self.multiline),
                    ]),
                    TabItem::new("Tree", layout![
                        TreeNode::new("TreeNode1", tree_body("Tree node 1"))
                            .flags(TreeNodeFlags::COLLAPSING_HEADER | TreeNodeFlags::DEFAULT_OPEN),
                        TreeNode::new("TreeNode2", tree_body("Tree node 2")),
                    ]),
                    TabItem::new("Table", layout![
                        Table::new("Table")
                            .border(true)
                            .row(Row::new(layout![Label::new("Name"), Label::new("Age"), Label::new("Location")]))
                            .row(Row::new(layout![Label::new("Allen"), Label::new("33"), Label::new("Shanghai/China")]))
                            .row(Row::new(layout![
                                Checkbox::new("check me", &mut self.table_checked),
                                Button::new("click me"),
                                Label::new("Anything"),
                            ])),
                    ]),
                    TabItem::new("Group", layout![Line::new(layout![
                        Group::new(layout![Label::new("I'm inside group 1")]),
                        Group::new(layout![Label::new("I'm inside group 2")]),
                    ])]),
                ]),
            ]);
    }
}

fn main_menu<'a>() -> MainMenuBar<'a> {
    MainMenuBar::new(layout![Menu::new("File", layout![
        MenuItem::new("Open"),
        MenuItem::new("Save"),
        Menu::new("Save as ...", layout![
            MenuItem::new("Excel file"),
            MenuItem::new("CSV file"),
            Button::new("Button inside menu"),
        ]),
    ])])
}

fn radio_button<'a>(label: &str, option: usize, radio: &'a Cell<usize>) -> RadioButton<'a> {
    RadioButton::new(label, radio.get() == option).on_change(move || radio.set(option))
}

fn tree_body<'a>(text: &str) -> Layout<'a> {
    layout![
        Label::new(text),
        Label::new(text),
        Label::new(text),
        Button::new("Button inside tree"),
    ]
}
