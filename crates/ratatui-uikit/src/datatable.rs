use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui_uikit_core::input::InputEvent;
use ratatui_uikit_core::input::KeyCode;
use ratatui_uikit_core::input::KeyEvent;
use ratatui_uikit_core::render;
use ratatui_uikit_core::theme::Theme;
use ratatui_uikit_core::viewport::ViewportState;
use std::cmp::Ordering;

/// Row identifier used for selection membership. Compared by value, not by
/// reference, so the host may rebuild its record sequence between frames.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl From<i64> for RecordId {
    fn from(v: i64) -> Self {
        RecordId::Int(v)
    }
}

impl From<&str> for RecordId {
    fn from(v: &str) -> Self {
        RecordId::Text(v.to_string())
    }
}

impl From<String> for RecordId {
    fn from(v: String) -> Self {
        RecordId::Text(v)
    }
}

/// A field value as the table understands it. `Option<CellValue>` models
/// null/missing fields.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    pub fn display(&self) -> String {
        match self {
            CellValue::Int(v) => v.to_string(),
            CellValue::Float(v) => v.to_string(),
            CellValue::Text(v) => v.clone(),
        }
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

// Numeric variants compare numerically, text lexicographically, numbers order
// before text.
fn cmp_values(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
        (CellValue::Float(a), CellValue::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (CellValue::Int(a), CellValue::Float(b)) => {
            (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (CellValue::Float(a), CellValue::Int(b)) => {
            a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal)
        }
        (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
        (CellValue::Int(_) | CellValue::Float(_), CellValue::Text(_)) => Ordering::Less,
        (CellValue::Text(_), CellValue::Int(_) | CellValue::Float(_)) => Ordering::Greater,
    }
}

/// Host records implement this to expose an identity and field access by
/// column field-selector. Unknown keys return `None` and render as `-`.
pub trait TableRecord {
    fn id(&self) -> RecordId;
    fn field(&self, key: &str) -> Option<CellValue>;
}

/// Column configuration for [`DataTable`]. Column order is render order.
#[derive(Clone, Debug)]
pub struct TableColumn {
    pub key: String,
    pub title: String,
    pub field: String,
    pub width: u16,
    pub sortable: bool,
}

impl TableColumn {
    /// The field-selector defaults to `key`; override with [`TableColumn::field`].
    pub fn new(key: impl Into<String>, title: impl Into<String>, width: u16) -> Self {
        let key = key.into();
        Self {
            field: key.clone(),
            key,
            title: title.into(),
            width,
            sortable: false,
        }
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

/// Row selection policy.
///
/// `Multiple` toggles rows in and out of the set. `Single` replaces the whole
/// set with the toggled row (toggling the selected row clears it). `Disabled`
/// hides the toggle column and ignores the toggle key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionMode {
    #[default]
    Disabled,
    Single,
    Multiple,
}

#[derive(Clone, Debug)]
pub struct DataTableOptions {
    pub show_header: bool,
    pub show_scrollbar: bool,
    pub selection: SelectionMode,
    pub col_gap: u16,
    pub loading_text: String,
    pub empty_text: String,
    pub style: Style,
    pub header_style: Style,
    pub cursor_style: Style,
    pub selected_style: Style,
    pub scrollbar_style: Style,
}

impl Default for DataTableOptions {
    fn default() -> Self {
        Self {
            show_header: true,
            show_scrollbar: true,
            selection: SelectionMode::default(),
            col_gap: 1,
            loading_text: "Loading...".to_string(),
            empty_text: "No data available.".to_string(),
            style: Style::default(),
            header_style: Style::default().add_modifier(Modifier::BOLD),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            selected_style: Style::default().add_modifier(Modifier::BOLD),
            scrollbar_style: Style::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataTableAction {
    None,
    Redraw,
    /// The selection sequence changed; read it back via [`DataTable::selection`]
    /// or [`DataTable::selected_rows`].
    SelectionChanged,
    Activated(RecordId),
}

const SELECTED_MARK: &str = "[x]";
const UNSELECTED_MARK: &str = "[ ]";
const MARK_W: u16 = 3;

/// Records as header + body rows with column-driven sorting and id-keyed row
/// selection.
///
/// The widget never owns the records: the host passes them to `handle_event`
/// and `render` each frame. Sort state, selection ids, cursor and scroll are
/// the only state kept here.
///
/// Keys: `↑`/`↓`/`j`/`k` move the row cursor, `←`/`→`/`h`/`l` pick the active
/// column, `s` sorts by it, Space toggles selection, Enter activates the row.
pub struct DataTable {
    pub state: ViewportState,
    options: DataTableOptions,
    columns: Vec<TableColumn>,
    sort: Option<SortState>,
    selection: Vec<RecordId>,
    cursor: Option<usize>,
    active_col: usize,
    loading: bool,
}

impl Default for DataTable {
    fn default() -> Self {
        Self {
            state: ViewportState::default(),
            options: DataTableOptions::default(),
            columns: Vec::new(),
            sort: None,
            selection: Vec::new(),
            cursor: None,
            active_col: 0,
            loading: false,
        }
    }
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DataTableOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &DataTableOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: DataTableOptions) {
        self.options = options;
        if self.options.selection == SelectionMode::Disabled {
            self.selection.clear();
        }
    }

    pub fn set_columns(&mut self, columns: Vec<TableColumn>) {
        self.columns = columns;
        self.active_col = self.active_col.min(self.columns.len().saturating_sub(1));
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Option<usize>) {
        self.cursor = cursor;
        if let Some(c) = self.cursor {
            self.state.ensure_visible(c as u32);
        }
    }

    pub fn active_column(&self) -> usize {
        self.active_col
    }

    /// The current selection, in toggle order.
    pub fn selection(&self) -> &[RecordId] {
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Resolves the selection ids against `rows`, in selection order. Ids with
    /// no matching record are skipped.
    pub fn selected_rows<'a, R: TableRecord>(&self, rows: &'a [R]) -> Vec<&'a R> {
        self.selection
            .iter()
            .filter_map(|id| rows.iter().find(|r| r.id() == *id))
            .collect()
    }

    /// Display order of `rows` under the current sort state.
    ///
    /// Stable sort by the sort column's field value. Missing values order after
    /// all present values in both directions; direction applies only to
    /// present/present pairs.
    pub fn sorted_indices<R: TableRecord>(&self, rows: &[R]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..rows.len()).collect();
        let Some(sort) = &self.sort else {
            return order;
        };
        order.sort_by(|&a, &b| {
            match (rows[a].field(&sort.field), rows[b].field(&sort.field)) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(av), Some(bv)) => {
                    let ord = cmp_values(&av, &bv);
                    match sort.direction {
                        SortDirection::Ascending => ord,
                        SortDirection::Descending => ord.reverse(),
                    }
                }
            }
        });
        order
    }

    /// Activating the active sort field flips direction; any other field
    /// becomes the sort field, ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        match &mut self.sort {
            Some(s) if s.field == field => s.direction = s.direction.flipped(),
            _ => {
                self.sort = Some(SortState {
                    field: field.to_string(),
                    direction: SortDirection::Ascending,
                });
            }
        }
    }

    /// Applies the selection policy to `row`. Returns `false` when selection is
    /// disabled.
    pub fn toggle_row<R: TableRecord>(&mut self, row: &R) -> bool {
        let id = row.id();
        let was_selected = self.selection.contains(&id);
        match self.options.selection {
            SelectionMode::Disabled => false,
            SelectionMode::Single => {
                if was_selected {
                    self.selection.clear();
                } else {
                    self.selection = vec![id];
                }
                true
            }
            SelectionMode::Multiple => {
                if was_selected {
                    self.selection.retain(|s| *s != id);
                } else {
                    self.selection.push(id);
                }
                true
            }
        }
    }

    pub fn handle_event<R: TableRecord>(
        &mut self,
        event: InputEvent,
        rows: &[R],
    ) -> DataTableAction {
        match event {
            InputEvent::Paste(_) => DataTableAction::None,
            InputEvent::Key(key) => self.handle_key(key, rows),
        }
    }

    fn handle_key<R: TableRecord>(&mut self, key: KeyEvent, rows: &[R]) -> DataTableAction {
        if self.loading {
            return DataTableAction::None;
        }
        if rows.is_empty() || self.columns.is_empty() {
            self.cursor = None;
            self.state.to_top();
            return DataTableAction::None;
        }
        self.cursor = clamp_cursor(self.cursor, rows.len());

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.move_cursor_by(1, rows.len()) {
                    DataTableAction::Redraw
                } else {
                    DataTableAction::None
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.move_cursor_by(-1, rows.len()) {
                    DataTableAction::Redraw
                } else {
                    DataTableAction::None
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let next = (self.active_col + 1).min(self.columns.len() - 1);
                if next == self.active_col {
                    DataTableAction::None
                } else {
                    self.active_col = next;
                    DataTableAction::Redraw
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if self.active_col == 0 {
                    DataTableAction::None
                } else {
                    self.active_col -= 1;
                    DataTableAction::Redraw
                }
            }
            KeyCode::PageDown => {
                let step = self.state.viewport_h.saturating_sub(1).max(1) as i32;
                self.move_cursor_by(step, rows.len());
                DataTableAction::Redraw
            }
            KeyCode::PageUp => {
                let step = self.state.viewport_h.saturating_sub(1).max(1) as i32;
                self.move_cursor_by(-step, rows.len());
                DataTableAction::Redraw
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.set_cursor(Some(0));
                DataTableAction::Redraw
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.set_cursor(Some(rows.len() - 1));
                DataTableAction::Redraw
            }
            KeyCode::Char('s') => {
                let col = &self.columns[self.active_col];
                if !col.sortable {
                    return DataTableAction::None;
                }
                let field = col.field.clone();
                self.toggle_sort(&field);
                DataTableAction::Redraw
            }
            KeyCode::Char(' ') => {
                if self.options.selection == SelectionMode::Disabled {
                    return DataTableAction::None;
                }
                let Some(cursor) = self.cursor else {
                    return DataTableAction::None;
                };
                let order = self.sorted_indices(rows);
                let record = &rows[order[cursor]];
                if self.toggle_row(record) {
                    DataTableAction::SelectionChanged
                } else {
                    DataTableAction::None
                }
            }
            KeyCode::Enter => {
                let Some(cursor) = self.cursor else {
                    return DataTableAction::None;
                };
                let order = self.sorted_indices(rows);
                DataTableAction::Activated(rows[order[cursor]].id())
            }
            _ => DataTableAction::None,
        }
    }

    fn move_cursor_by(&mut self, delta: i32, len: usize) -> bool {
        let next = match self.cursor {
            Some(c) => (c as i64 + delta as i64).clamp(0, len.saturating_sub(1) as i64) as usize,
            None if delta >= 0 => 0,
            None => len.saturating_sub(1),
        };
        if Some(next) == self.cursor {
            return false;
        }
        self.cursor = Some(next);
        self.state.ensure_visible(next as u32);
        true
    }

    pub fn render<R: TableRecord>(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        rows: &[R],
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let base_style = if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        };
        buf.set_style(area, base_style);

        if self.loading {
            render::draw_clipped(
                area.x,
                area.y,
                0,
                area.width,
                buf,
                &self.options.loading_text,
                theme.text_muted,
            );
            return;
        }
        if rows.is_empty() {
            render::draw_clipped(
                area.x,
                area.y,
                0,
                area.width,
                buf,
                &self.options.empty_text,
                theme.text_muted,
            );
            return;
        }

        self.cursor = clamp_cursor(self.cursor, rows.len());

        let header_style = self.options.header_style.patch(theme.accent);
        let cursor_style = self.options.cursor_style.patch(theme.accent);
        let selected_style = self.options.selected_style.patch(theme.accent);

        let header_h = if self.options.show_header { 1u16 } else { 0u16 };
        let header_h = header_h.min(area.height);

        let (content_area, scrollbar_x) = if self.options.show_scrollbar && area.width >= 2 {
            (
                Rect::new(area.x, area.y, area.width - 1, area.height),
                Some(area.x + area.width - 1),
            )
        } else {
            (area, None)
        };

        let header_area = Rect::new(content_area.x, content_area.y, content_area.width, header_h);
        let body_area = Rect::new(
            content_area.x,
            content_area.y + header_h,
            content_area.width,
            content_area.height.saturating_sub(header_h),
        );

        self.state.set_viewport(body_area.height);
        self.state.set_content(rows.len() as u32);
        if let Some(c) = self.cursor {
            self.state.ensure_visible(c as u32);
        }

        let mark_w = if self.options.selection == SelectionMode::Disabled {
            0
        } else {
            MARK_W + self.options.col_gap
        };

        if header_area.height > 0 {
            self.render_header(header_area, buf, header_style, mark_w);
        }
        self.render_body(
            body_area,
            buf,
            BodyStyles {
                base: base_style,
                cursor: cursor_style,
                selected: selected_style,
            },
            mark_w,
            rows,
        );

        if let Some(sb_x) = scrollbar_x {
            render::draw_scrollbar(
                Rect::new(sb_x, body_area.y, 1, body_area.height),
                buf,
                &self.state,
                self.options.scrollbar_style,
            );
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, style: Style, mark_w: u16) {
        buf.set_style(area, style);
        let mut x = area.x.saturating_add(mark_w);
        for (i, col) in self.columns.iter().enumerate() {
            if x >= area.right() {
                break;
            }
            let avail = (area.right() - x).min(col.width);
            let col_style = if i == self.active_col {
                style.add_modifier(Modifier::UNDERLINED)
            } else {
                style
            };
            let title = match &self.sort {
                Some(s) if s.field == col.field => {
                    let marker = match s.direction {
                        SortDirection::Ascending => "↑",
                        SortDirection::Descending => "↓",
                    };
                    format!("{} {}", col.title, marker)
                }
                _ => col.title.clone(),
            };
            render::draw_clipped(x, area.y, 0, avail, buf, &title, col_style);
            x = x
                .saturating_add(col.width)
                .saturating_add(self.options.col_gap);
        }
    }

    fn render_body<R: TableRecord>(
        &self,
        area: Rect,
        buf: &mut Buffer,
        styles: BodyStyles,
        mark_w: u16,
        rows: &[R],
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let order = self.sorted_indices(rows);

        for vis in 0..area.height {
            let disp = self.state.offset as usize + vis as usize;
            if disp >= order.len() {
                break;
            }
            let record = &rows[order[disp]];
            let y = area.y + vis;
            let is_cursor = self.cursor == Some(disp);
            let is_selected = self.selection.contains(&record.id());
            let row_style = if is_cursor {
                styles.cursor
            } else if is_selected {
                styles.selected
            } else {
                styles.base
            };
            buf.set_style(Rect::new(area.x, y, area.width, 1), row_style);

            let mut x = area.x;
            if mark_w > 0 {
                let mark = if is_selected {
                    SELECTED_MARK
                } else {
                    UNSELECTED_MARK
                };
                render::draw_clipped(x, y, 0, area.width.min(MARK_W), buf, mark, row_style);
                x = x.saturating_add(mark_w);
            }
            for col in &self.columns {
                if x >= area.right() {
                    break;
                }
                let avail = (area.right() - x).min(col.width);
                let text = match record.field(&col.field) {
                    Some(v) => v.display(),
                    None => "-".to_string(),
                };
                render::draw_clipped(x, y, 0, avail, buf, &text, row_style);
                x = x
                    .saturating_add(col.width)
                    .saturating_add(self.options.col_gap);
            }
        }
    }
}

#[derive(Clone, Copy)]
struct BodyStyles {
    base: Style,
    cursor: Style,
    selected: Style,
}

fn clamp_cursor(cursor: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    cursor.map(|c| c.min(len - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct User {
        id: i64,
        name: &'static str,
        email: Option<&'static str>,
        age: Option<i64>,
    }

    impl TableRecord for User {
        fn id(&self) -> RecordId {
            RecordId::Int(self.id)
        }

        fn field(&self, key: &str) -> Option<CellValue> {
            match key {
                "name" => Some(self.name.into()),
                "email" => self.email.map(CellValue::from),
                "age" => self.age.map(CellValue::from),
                _ => None,
            }
        }
    }

    fn users() -> Vec<User> {
        vec![
            User {
                id: 1,
                name: "Sandeep",
                email: Some("sandeep@example.com"),
                age: Some(22),
            },
            User {
                id: 2,
                name: "Diksha",
                email: Some("diksha@example.com"),
                age: Some(23),
            },
            User {
                id: 3,
                name: "Aman",
                email: None,
                age: Some(25),
            },
        ]
    }

    fn columns() -> Vec<TableColumn> {
        vec![
            TableColumn::new("name", "Name", 10).sortable(),
            TableColumn::new("email", "Email", 20).sortable(),
            TableColumn::new("age", "Age", 5).sortable(),
        ]
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code))
    }

    fn names_in_order(t: &DataTable, rows: &[User]) -> Vec<&'static str> {
        t.sorted_indices(rows).iter().map(|&i| rows[i].name).collect()
    }

    fn row_string(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (0..area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn sorts_ascending_then_flips() {
        let mut t = DataTable::new();
        t.set_columns(columns());
        let rows = users();

        t.handle_event(key(KeyCode::Char('s')), &rows);
        assert_eq!(names_in_order(&t, &rows), vec!["Aman", "Diksha", "Sandeep"]);

        t.handle_event(key(KeyCode::Char('s')), &rows);
        assert_eq!(names_in_order(&t, &rows), vec!["Sandeep", "Diksha", "Aman"]);
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        let mut t = DataTable::new();
        t.set_columns(columns());
        let rows = users();

        t.toggle_sort("email");
        assert_eq!(names_in_order(&t, &rows), vec!["Diksha", "Sandeep", "Aman"]);

        t.toggle_sort("email");
        assert_eq!(names_in_order(&t, &rows), vec!["Sandeep", "Diksha", "Aman"]);
    }

    #[test]
    fn switching_column_resets_to_ascending() {
        let mut t = DataTable::new();
        t.set_columns(columns());

        t.toggle_sort("name");
        t.toggle_sort("name");
        assert_eq!(
            t.sort().map(|s| s.direction),
            Some(SortDirection::Descending)
        );

        t.toggle_sort("age");
        let sort = t.sort().unwrap();
        assert_eq!(sort.field, "age");
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn non_sortable_column_ignores_sort_key() {
        let mut t = DataTable::new();
        t.set_columns(vec![TableColumn::new("name", "Name", 10)]);
        let rows = users();

        let action = t.handle_event(key(KeyCode::Char('s')), &rows);
        assert_eq!(action, DataTableAction::None);
        assert!(t.sort().is_none());
    }

    #[test]
    fn multiple_mode_toggles_exactly_one_id() {
        let mut t = DataTable::with_options(DataTableOptions {
            selection: SelectionMode::Multiple,
            ..Default::default()
        });
        t.set_columns(columns());
        let rows = users();
        t.set_cursor(Some(1));

        let action = t.handle_event(key(KeyCode::Char(' ')), &rows);
        assert_eq!(action, DataTableAction::SelectionChanged);
        assert_eq!(t.selection(), &[RecordId::Int(2)]);

        t.set_cursor(Some(0));
        t.handle_event(key(KeyCode::Char(' ')), &rows);
        assert_eq!(t.selection(), &[RecordId::Int(2), RecordId::Int(1)]);

        t.set_cursor(Some(1));
        t.handle_event(key(KeyCode::Char(' ')), &rows);
        assert_eq!(t.selection(), &[RecordId::Int(1)]);
    }

    #[test]
    fn single_mode_replaces_the_whole_set() {
        let mut t = DataTable::with_options(DataTableOptions {
            selection: SelectionMode::Single,
            ..Default::default()
        });
        t.set_columns(columns());
        let rows = users();

        t.set_cursor(Some(0));
        t.handle_event(key(KeyCode::Char(' ')), &rows);
        t.set_cursor(Some(2));
        t.handle_event(key(KeyCode::Char(' ')), &rows);
        assert_eq!(t.selection(), &[RecordId::Int(3)]);

        t.handle_event(key(KeyCode::Char(' ')), &rows);
        assert!(t.selection().is_empty());
    }

    #[test]
    fn disabled_mode_ignores_toggle() {
        let mut t = DataTable::new();
        t.set_columns(columns());
        let rows = users();
        t.set_cursor(Some(0));

        let action = t.handle_event(key(KeyCode::Char(' ')), &rows);
        assert_eq!(action, DataTableAction::None);
        assert!(t.selection().is_empty());
    }

    #[test]
    fn selected_rows_resolve_in_toggle_order() {
        let mut t = DataTable::with_options(DataTableOptions {
            selection: SelectionMode::Multiple,
            ..Default::default()
        });
        t.set_columns(columns());
        let rows = users();

        t.toggle_row(&rows[2]);
        t.toggle_row(&rows[0]);
        let selected = t.selected_rows(&rows);
        assert_eq!(
            selected.iter().map(|u| u.name).collect::<Vec<_>>(),
            vec!["Aman", "Sandeep"]
        );
    }

    #[test]
    fn loading_renders_indicator_before_empty_check() {
        let mut t = DataTable::new();
        t.set_columns(columns());
        t.set_loading(true);
        let rows: Vec<User> = Vec::new();

        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 4));
        t.render(Rect::new(0, 0, 30, 4), &mut buf, &Theme::default(), &rows);
        assert!(row_string(&buf, 0).contains("Loading..."));
        assert!(!row_string(&buf, 0).contains("No data"));
    }

    #[test]
    fn empty_rows_render_placeholder_and_no_table() {
        let mut t = DataTable::new();
        t.set_columns(columns());
        let rows: Vec<User> = Vec::new();

        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 4));
        t.render(Rect::new(0, 0, 30, 4), &mut buf, &Theme::default(), &rows);
        assert!(row_string(&buf, 0).contains("No data available."));
        assert!(!row_string(&buf, 0).contains("Name"));
    }

    #[test]
    fn missing_cell_renders_dash() {
        let mut t = DataTable::new();
        t.set_columns(columns());
        let rows = users();

        let mut buf = Buffer::empty(Rect::new(0, 0, 45, 5));
        t.render(Rect::new(0, 0, 45, 5), &mut buf, &Theme::default(), &rows);
        // Aman has no email; his row shows the dash placeholder.
        let aman_row = row_string(&buf, 3);
        assert!(aman_row.contains("Aman"));
        assert!(aman_row.contains(" - "));
    }

    #[test]
    fn header_carries_direction_marker() {
        let mut t = DataTable::new();
        t.set_columns(columns());
        let rows = users();
        t.toggle_sort("name");

        let mut buf = Buffer::empty(Rect::new(0, 0, 45, 5));
        t.render(Rect::new(0, 0, 45, 5), &mut buf, &Theme::default(), &rows);
        assert!(row_string(&buf, 0).contains("Name ↑"));

        t.toggle_sort("name");
        let mut buf = Buffer::empty(Rect::new(0, 0, 45, 5));
        t.render(Rect::new(0, 0, 45, 5), &mut buf, &Theme::default(), &rows);
        assert!(row_string(&buf, 0).contains("Name ↓"));
    }

    #[test]
    fn render_order_is_sort_order_independent_of_selection() {
        let mut t = DataTable::with_options(DataTableOptions {
            selection: SelectionMode::Multiple,
            ..Default::default()
        });
        t.set_columns(columns());
        let rows = users();
        t.toggle_sort("name");
        t.toggle_row(&rows[0]);

        let mut buf = Buffer::empty(Rect::new(0, 0, 45, 5));
        t.render(Rect::new(0, 0, 45, 5), &mut buf, &Theme::default(), &rows);
        let first_body_row = row_string(&buf, 1);
        assert!(first_body_row.contains("Aman"));
        assert!(first_body_row.contains(UNSELECTED_MARK));
    }

    #[test]
    fn cursor_scrolls_viewport() {
        let mut t = DataTable::new();
        t.set_columns(columns());
        let rows = users();
        t.state.set_viewport(2);
        t.state.set_content(rows.len() as u32);

        t.handle_event(key(KeyCode::Down), &rows);
        t.handle_event(key(KeyCode::Down), &rows);
        t.handle_event(key(KeyCode::Down), &rows);
        assert_eq!(t.cursor(), Some(2));
        assert_eq!(t.state.offset, 1);
    }

    #[test]
    fn activation_reports_record_id() {
        let mut t = DataTable::new();
        t.set_columns(columns());
        let rows = users();
        t.toggle_sort("name");
        t.set_cursor(Some(0));

        let action = t.handle_event(key(KeyCode::Enter), &rows);
        assert_eq!(action, DataTableAction::Activated(RecordId::Int(3)));
    }
}
