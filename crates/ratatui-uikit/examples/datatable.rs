use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui_uikit::crossterm_input::input_event_from_crossterm;
use ratatui_uikit::datatable::CellValue;
use ratatui_uikit::datatable::DataTable;
use ratatui_uikit::datatable::DataTableAction;
use ratatui_uikit::datatable::DataTableOptions;
use ratatui_uikit::datatable::RecordId;
use ratatui_uikit::datatable::SelectionMode;
use ratatui_uikit::datatable::TableColumn;
use ratatui_uikit::datatable::TableRecord;
use ratatui_uikit::input::InputEvent;
use ratatui_uikit::input::KeyCode;
use ratatui_uikit::theme::Theme;
use std::io;
use std::time::Duration;

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

fn sample_users() -> Vec<User> {
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
            email: Some("aman@example.com"),
            age: Some(25),
        },
        User {
            id: 4,
            name: "Priya",
            email: None,
            age: Some(24),
        },
        User {
            id: 5,
            name: "Ravi",
            email: Some("ravi@example.com"),
            age: None,
        },
    ]
}

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::default();
    let users = sample_users();

    let mut table = DataTable::with_options(DataTableOptions {
        selection: SelectionMode::Multiple,
        ..Default::default()
    });
    table.set_columns(vec![
        TableColumn::new("name", "Name", 10).sortable(),
        TableColumn::new("email", "Email", 22).sortable(),
        TableColumn::new("age", "Age", 5).sortable(),
    ]);

    let res = run(&mut terminal, &theme, &mut table, &users);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    theme: &Theme,
    table: &mut DataTable,
    users: &[User],
) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let block = Block::default()
                .title("DataTable (↑↓/jk rows, ←→/hl column, s sort, Space select, L loading, q)")
                .borders(Borders::ALL);
            let inner = block.inner(area);
            f.render_widget(block, area);

            let buf = f.buffer_mut();
            let table_area = Rect::new(
                inner.x,
                inner.y,
                inner.width,
                inner.height.saturating_sub(1),
            );
            let status_area = Rect::new(inner.x, inner.y + table_area.height, inner.width, 1);

            table.render(table_area, buf, theme, users);
            render_status(status_area, buf, theme, table);
        })?;

        if crossterm::event::poll(Duration::from_millis(50))? {
            let ev = crossterm::event::read()?;
            let Some(ev) = input_event_from_crossterm(ev) else {
                continue;
            };
            if let InputEvent::Key(key) = &ev {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('L') => {
                        table.set_loading(!table.is_loading());
                        continue;
                    }
                    _ => {}
                }
            }
            match table.handle_event(ev, users) {
                DataTableAction::Activated(id) => {
                    let _ = id;
                }
                DataTableAction::SelectionChanged
                | DataTableAction::Redraw
                | DataTableAction::None => {}
            }
        }
    }
}

fn render_status(
    area: Rect,
    buf: &mut ratatui::buffer::Buffer,
    theme: &Theme,
    table: &DataTable,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let cursor = table
        .cursor()
        .map(|c| c.to_string())
        .unwrap_or("-".to_string());
    let sort = table
        .sort()
        .map(|s| format!("{} {:?}", s.field, s.direction))
        .unwrap_or("-".to_string());
    let pct = table.state.percent().unwrap_or(100);
    let s = format!(
        "cursor={cursor}  sort={sort}  selected={}  scroll={pct}%",
        table.selection().len()
    );
    let span = Span::styled(s, theme.text_muted);
    buf.set_span(area.x, area.y, &span, area.width);
}
