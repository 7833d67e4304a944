use crate::context::Context;
use crate::widget::Layout;

/// One table row: its children go into consecutive columns.
pub struct Row<'a> {
    layout: Layout<'a>,
}

impl<'a> Row<'a> {
    pub fn new(layout: Layout<'a>) -> Self {
        Self { layout }
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        for (i, w) in self.layout.into_iter().enumerate() {
            if i > 0 {
                ctx.backend().next_column();
            }
            w.build(ctx);
        }
    }
}

/// A grid built from [`Row`]s using the backend's column layout.
///
/// The column count comes from the first row. Later rows with a different
/// cell count are built as given and simply wrap or leave gaps; they are
/// reported at `debug` level but never rejected.
///
/// # Example
/// ```rust,ignore
/// Table::new("people")
///     .border(true)
///     .row(Row::new(layout![Label::new("Name"), Label::new("Age")]))
///     .rows(people.iter().map(|p| Row::new(layout![Label::new(&p.name), Label::new(p.age.to_string())])))
/// ```
pub struct Table<'a> {
    label: String,
    border: bool,
    rows: Vec<Row<'a>>,
}

impl<'a> Table<'a> {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), border: false, rows: Vec::new() }
    }

    /// Draws column borders and a separator above each row and below the last.
    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn row(mut self, row: Row<'a>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Row<'a>>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Column count the table opens with, `0` for a table that builds nothing.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Row::len)
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let columns = self.column_count();
        if columns == 0 {
            log::trace!("table {:?} empty, skipping", self.label);
            return;
        }

        for (i, row) in self.rows.iter().enumerate().skip(1) {
            if row.len() != columns {
                log::debug!(
                    "table {:?}: row {i} has {} cells, expected {columns}",
                    self.label,
                    row.len()
                );
            }
        }
        log::trace!("table {:?}: {} rows x {columns} columns", self.label, self.rows.len());

        ctx.backend().columns(columns, &self.label, self.border);
        for (i, row) in self.rows.into_iter().enumerate() {
            if self.border {
                ctx.backend().separator();
            }
            if i > 0 {
                ctx.backend().next_column();
            }
            row.build(ctx);
        }
        ctx.backend().columns(1, "", false);
        if self.border {
            ctx.backend().separator();
        }
    }
}
