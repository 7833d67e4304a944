use crate::context::Context;
use crate::widgets::{
    button::{Button, ImageButton, InvisibleButton},
    checkbox::{Checkbox, RadioButton},
    combo::Combo,
    condition::{Condition, Custom},
    container::{Child, Group},
    image::Image,
    input::{InputText, InputTextMultiline},
    label::Label,
    line::Line,
    menu::{MainMenuBar, Menu, MenuBar, MenuItem},
    popup::{ContextMenu, Popup},
    progress::ProgressBar,
    selectable::Selectable,
    slider::{DragInt, SliderFloat, SliderInt},
    spacing::{Dummy, Separator, Spacing},
    splitter::Splitter,
    tab::{TabBar, TabItem},
    table::{Row, Table},
    tooltip::Tooltip,
    tree::TreeNode,
};

// ── Callback ──────────────────────────────────────────────────────────────

/// Notification fired synchronously when a widget reports an interaction.
///
/// Runs inside the frame build, at most once per widget per frame.
pub type Callback<'a> = Box<dyn FnMut() + 'a>;

// ── Widget ────────────────────────────────────────────────────────────────

/// One node of a frame's UI tree.
///
/// Descriptors are plain data built fresh every frame and consumed by
/// [`build`](Widget::build). They borrow caller state (`&'a mut bool`, …) for
/// that one frame and own nothing else.
///
/// Every widget struct converts into `Widget` via `From`, so any of them can
/// go straight into [`layout!`](crate::layout).
pub enum Widget<'a> {
    // primitives
    Label(Label),
    Button(Button<'a>),
    InvisibleButton(InvisibleButton<'a>),
    ImageButton(ImageButton<'a>),
    Checkbox(Checkbox<'a>),
    RadioButton(RadioButton<'a>),
    Selectable(Selectable<'a>),
    MenuItem(MenuItem<'a>),
    ProgressBar(ProgressBar),
    DragInt(DragInt<'a>),
    SliderInt(SliderInt<'a>),
    SliderFloat(SliderFloat<'a>),
    InputText(InputText<'a>),
    InputTextMultiline(InputTextMultiline<'a>),
    Image(Image),
    Separator(Separator),
    Spacing(Spacing),
    Dummy(Dummy),
    Tooltip(Tooltip),
    Splitter(Splitter<'a>),

    // containers
    Group(Group<'a>),
    Child(Child<'a>),
    Combo(Combo<'a>),
    Menu(Menu<'a>),
    MainMenuBar(MainMenuBar<'a>),
    MenuBar(MenuBar<'a>),
    Popup(Popup<'a>),
    ContextMenu(ContextMenu<'a>),
    TabBar(TabBar<'a>),
    TabItem(TabItem<'a>),
    TreeNode(TreeNode<'a>),

    // layout composites
    Line(Line<'a>),
    Row(Row<'a>),
    Table(Table<'a>),

    // escape hatches
    Condition(Condition<'a>),
    Custom(Custom<'a>),
}

impl<'a> Widget<'a> {
    /// Whether this widget takes a place in the inline flow.
    ///
    /// Tooltips and context menus attach to the previous item, popups and tab
    /// items float on their own, so a [`Line`] must not join them onto the
    /// current line. The set is closed.
    #[inline]
    pub fn is_inline(&self) -> bool {
        !matches!(
            self,
            Widget::Tooltip(_) | Widget::ContextMenu(_) | Widget::Popup(_) | Widget::TabItem(_)
        )
    }

    /// Short name of the variant, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Label(_) => "Label",
            Widget::Button(_) => "Button",
            Widget::InvisibleButton(_) => "InvisibleButton",
            Widget::ImageButton(_) => "ImageButton",
            Widget::Checkbox(_) => "Checkbox",
            Widget::RadioButton(_) => "RadioButton",
            Widget::Selectable(_) => "Selectable",
            Widget::MenuItem(_) => "MenuItem",
            Widget::ProgressBar(_) => "ProgressBar",
            Widget::DragInt(_) => "DragInt",
            Widget::SliderInt(_) => "SliderInt",
            Widget::SliderFloat(_) => "SliderFloat",
            Widget::InputText(_) => "InputText",
            Widget::InputTextMultiline(_) => "InputTextMultiline",
            Widget::Image(_) => "Image",
            Widget::Separator(_) => "Separator",
            Widget::Spacing(_) => "Spacing",
            Widget::Dummy(_) => "Dummy",
            Widget::Tooltip(_) => "Tooltip",
            Widget::Splitter(_) => "Splitter",
            Widget::Group(_) => "Group",
            Widget::Child(_) => "Child",
            Widget::Combo(_) => "Combo",
            Widget::Menu(_) => "Menu",
            Widget::MainMenuBar(_) => "MainMenuBar",
            Widget::MenuBar(_) => "MenuBar",
            Widget::Popup(_) => "Popup",
            Widget::ContextMenu(_) => "ContextMenu",
            Widget::TabBar(_) => "TabBar",
            Widget::TabItem(_) => "TabItem",
            Widget::TreeNode(_) => "TreeNode",
            Widget::Line(_) => "Line",
            Widget::Row(_) => "Row",
            Widget::Table(_) => "Table",
            Widget::Condition(_) => "Condition",
            Widget::Custom(_) => "Custom",
        }
    }

    /// Plays this node, and any children, against the backend.
    pub fn build(self, ctx: &mut Context<'_>) {
        match self {
            Widget::Label(w) => w.build(ctx),
            Widget::Button(w) => w.build(ctx),
            Widget::InvisibleButton(w) => w.build(ctx),
            Widget::ImageButton(w) => w.build(ctx),
            Widget::Checkbox(w) => w.build(ctx),
            Widget::RadioButton(w) => w.build(ctx),
            Widget::Selectable(w) => w.build(ctx),
            Widget::MenuItem(w) => w.build(ctx),
            Widget::ProgressBar(w) => w.build(ctx),
            Widget::DragInt(w) => w.build(ctx),
            Widget::SliderInt(w) => w.build(ctx),
            Widget::SliderFloat(w) => w.build(ctx),
            Widget::InputText(w) => w.build(ctx),
            Widget::InputTextMultiline(w) => w.build(ctx),
            Widget::Image(w) => w.build(ctx),
            Widget::Separator(w) => w.build(ctx),
            Widget::Spacing(w) => w.build(ctx),
            Widget::Dummy(w) => w.build(ctx),
            Widget::Tooltip(w) => w.build(ctx),
            Widget::Splitter(w) => w.build(ctx),
            Widget::Group(w) => w.build(ctx),
            Widget::Child(w) => w.build(ctx),
            Widget::Combo(w) => w.build(ctx),
            Widget::Menu(w) => w.build(ctx),
            Widget::MainMenuBar(w) => w.build(ctx),
            Widget::MenuBar(w) => w.build(ctx),
            Widget::Popup(w) => w.build(ctx),
            Widget::ContextMenu(w) => w.build(ctx),
            Widget::TabBar(w) => w.build(ctx),
            Widget::TabItem(w) => w.build(ctx),
            Widget::TreeNode(w) => w.build(ctx),
            Widget::Line(w) => w.build(ctx),
            Widget::Row(w) => w.build(ctx),
            Widget::Table(w) => w.build(ctx),
            Widget::Condition(w) => w.build(ctx),
            Widget::Custom(w) => w.build(ctx),
        }
    }
}

macro_rules! impl_from_widget {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl<'a> From<$ty> for Widget<'a> {
                #[inline]
                fn from(w: $ty) -> Self {
                    Widget::$variant(w)
                }
            }
        )+
    };
}

impl_from_widget! {
    Label => Label,
    Button => Button<'a>,
    InvisibleButton => InvisibleButton<'a>,
    ImageButton => ImageButton<'a>,
    Checkbox => Checkbox<'a>,
    RadioButton => RadioButton<'a>,
    Selectable => Selectable<'a>,
    MenuItem => MenuItem<'a>,
    ProgressBar => ProgressBar,
    DragInt => DragInt<'a>,
    SliderInt => SliderInt<'a>,
    SliderFloat => SliderFloat<'a>,
    InputText => InputText<'a>,
    InputTextMultiline => InputTextMultiline<'a>,
    Image => Image,
    Separator => Separator,
    Spacing => Spacing,
    Dummy => Dummy,
    Tooltip => Tooltip,
    Splitter => Splitter<'a>,
    Group => Group<'a>,
    Child => Child<'a>,
    Combo => Combo<'a>,
    Menu => Menu<'a>,
    MainMenuBar => MainMenuBar<'a>,
    MenuBar => MenuBar<'a>,
    Popup => Popup<'a>,
    ContextMenu => ContextMenu<'a>,
    TabBar => TabBar<'a>,
    TabItem => TabItem<'a>,
    TreeNode => TreeNode<'a>,
    Line => Line<'a>,
    Row => Row<'a>,
    Table => Table<'a>,
    Condition => Condition<'a>,
    Custom => Custom<'a>,
}

// ── Layout ────────────────────────────────────────────────────────────────

/// An ordered list of widgets: one nesting level of the tree.
///
/// Order is build order, and for [`Line`] / [`Row`] also spatial order.
/// An empty layout builds nothing.
#[derive(Default)]
pub struct Layout<'a> {
    widgets: Vec<Widget<'a>>,
}

impl<'a> Layout<'a> {
    pub fn new() -> Self {
        Self { widgets: Vec::new() }
    }

    /// Appends a widget (builder form).
    pub fn with(mut self, widget: impl Into<Widget<'a>>) -> Self {
        self.widgets.push(widget.into());
        self
    }

    pub fn push(&mut self, widget: impl Into<Widget<'a>>) {
        self.widgets.push(widget.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Widget<'a>> {
        self.widgets.iter()
    }

    /// Builds every widget in order.
    pub fn build(self, ctx: &mut Context<'_>) {
        for w in self.widgets {
            w.build(ctx);
        }
    }
}

impl<'a> From<Vec<Widget<'a>>> for Layout<'a> {
    fn from(widgets: Vec<Widget<'a>>) -> Self {
        Self { widgets }
    }
}

impl<'a, W: Into<Widget<'a>>> FromIterator<W> for Layout<'a> {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        Self { widgets: iter.into_iter().map(Into::into).collect() }
    }
}

impl<'a> IntoIterator for Layout<'a> {
    type Item = Widget<'a>;
    type IntoIter = std::vec::IntoIter<Widget<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.widgets.into_iter()
    }
}

/// Builds a [`Layout`] from widgets of any kind.
///
/// ```rust,ignore
/// let l = layout![
///     Label::new("Name"),
///     Button::new("Save").on_click(|| save()),
/// ];
/// ```
#[macro_export]
macro_rules! layout {
    () => {
        $crate::widget::Layout::new()
    };
    ($($w:expr),+ $(,)?) => {
        $crate::widget::Layout::from(vec![$($crate::widget::Widget::from($w)),+])
    };
}
