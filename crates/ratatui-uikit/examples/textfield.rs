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
use ratatui_uikit::input::InputEvent;
use ratatui_uikit::input::KeyCode;
use ratatui_uikit::textfield::TextField;
use ratatui_uikit::textfield::TextFieldAction;
use ratatui_uikit::textfield::TextFieldKind;
use ratatui_uikit::textfield::TextFieldOptions;
use ratatui_uikit::textfield::TextFieldSize;
use ratatui_uikit::textfield::TextFieldVariant;
use ratatui_uikit::theme::Theme;
use std::io;
use std::time::Duration;

fn make_fields() -> Vec<TextField> {
    vec![
        TextField::with_options(TextFieldOptions {
            label: Some("Username".to_string()),
            placeholder: Some("Enter your username".to_string()),
            helper_text: Some("This will be public".to_string()),
            variant: TextFieldVariant::Outlined,
            size: TextFieldSize::Medium,
            clearable: true,
            ..Default::default()
        }),
        TextField::with_options(TextFieldOptions {
            label: Some("Email".to_string()),
            placeholder: Some("name@example.com".to_string()),
            error_message: Some("Please enter a valid email".to_string()),
            variant: TextFieldVariant::Filled,
            size: TextFieldSize::Small,
            clearable: true,
            ..Default::default()
        }),
        TextField::with_options(TextFieldOptions {
            label: Some("Password".to_string()),
            placeholder: Some("At least 8 characters".to_string()),
            helper_text: Some("Ctrl+R toggles visibility".to_string()),
            variant: TextFieldVariant::Ghost,
            size: TextFieldSize::Large,
            kind: TextFieldKind::Password,
            password_toggle: true,
            ..Default::default()
        }),
    ]
}

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::default();
    let mut fields = make_fields();
    let mut values = vec![String::new(), String::new(), String::new()];
    let mut focused = 0usize;

    let res = run(&mut terminal, &theme, &mut fields, &mut values, &mut focused);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    theme: &Theme,
    fields: &mut [TextField],
    values: &mut [String],
    focused: &mut usize,
) -> io::Result<()> {
    loop {
        // The email field validates live; invalid is a host decision.
        let email = &values[1];
        let mut opts = fields[1].options().clone();
        opts.invalid = !email.is_empty() && !email.contains('@');
        fields[1].set_options(opts);

        terminal.draw(|f| {
            let area = f.area();
            let block = Block::default()
                .title("TextField (Tab next field, Ctrl+U clear, Ctrl+L loading, Esc quit)")
                .borders(Borders::ALL);
            let inner = block.inner(area);
            f.render_widget(block, area);

            let mut cursor = None;
            let mut y = inner.y;
            let buf = f.buffer_mut();
            for (i, field) in fields.iter_mut().enumerate() {
                let h = field.preferred_height().min(inner.height.saturating_sub(y - inner.y));
                if h == 0 {
                    break;
                }
                let field_area = Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), h);
                field.render(field_area, buf, theme, &values[i]);
                if i == *focused {
                    cursor = field.cursor_pos(field_area, &values[i]);
                }
                y += h + 1;
            }

            if y < inner.bottom() {
                let focus_line = format!("focus: {}", ["username", "email", "password"][*focused]);
                let span = Span::styled(focus_line, theme.text_muted);
                buf.set_span(inner.x + 1, inner.bottom() - 1, &span, inner.width);
            }
            if let Some((cx, cy)) = cursor {
                f.set_cursor_position((cx, cy));
            }
        })?;

        if crossterm::event::poll(Duration::from_millis(50))? {
            let ev = crossterm::event::read()?;
            let Some(ev) = input_event_from_crossterm(ev) else {
                continue;
            };
            if let InputEvent::Key(key) = &ev {
                match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Tab => {
                        *focused = (*focused + 1) % fields.len();
                        continue;
                    }
                    KeyCode::Char('l') if key.modifiers.ctrl => {
                        let mut opts = fields[*focused].options().clone();
                        opts.loading = !opts.loading;
                        fields[*focused].set_options(opts);
                        continue;
                    }
                    _ => {}
                }
            }
            let field = &mut fields[*focused];
            match field.handle_event(ev, &values[*focused]) {
                TextFieldAction::Changed(next) => values[*focused] = next,
                TextFieldAction::Submitted(_)
                | TextFieldAction::Redraw
                | TextFieldAction::None => {}
            }
        } else {
            for field in fields.iter_mut() {
                field.tick();
            }
        }
    }
}
