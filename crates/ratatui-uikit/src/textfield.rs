use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Widget;
use ratatui_uikit_core::input::InputEvent;
use ratatui_uikit_core::input::KeyCode;
use ratatui_uikit_core::input::KeyEvent;
use ratatui_uikit_core::keymap;
use ratatui_uikit_core::render;
use ratatui_uikit_core::theme::Theme;
use unicode_width::UnicodeWidthChar;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextFieldVariant {
    #[default]
    Outlined,
    Filled,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextFieldSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextFieldKind {
    #[default]
    Text,
    Password,
}

/// Key bindings for the field actions that have no single obvious key.
///
/// Defaults: Ctrl+U clears the value, Ctrl+R toggles password visibility.
#[derive(Clone, Debug)]
pub struct TextFieldBindings {
    pub clear: Vec<KeyEvent>,
    pub reveal: Vec<KeyEvent>,
}

impl Default for TextFieldBindings {
    fn default() -> Self {
        Self {
            clear: vec![keymap::key_ctrl('u')],
            reveal: vec![keymap::key_ctrl('r')],
        }
    }
}

impl TextFieldBindings {
    pub fn is_clear(&self, key: &KeyEvent) -> bool {
        self.clear.iter().any(|p| keymap::key_event_matches(p, key))
    }

    pub fn is_reveal(&self, key: &KeyEvent) -> bool {
        self.reveal.iter().any(|p| keymap::key_event_matches(p, key))
    }
}

#[derive(Clone, Debug)]
pub struct TextFieldOptions {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub variant: TextFieldVariant,
    pub size: TextFieldSize,
    pub kind: TextFieldKind,
    pub disabled: bool,
    pub invalid: bool,
    pub loading: bool,
    pub clearable: bool,
    pub password_toggle: bool,
    pub style: Style,
    pub bindings: TextFieldBindings,
}

impl Default for TextFieldOptions {
    fn default() -> Self {
        Self {
            label: None,
            placeholder: None,
            helper_text: None,
            error_message: None,
            variant: TextFieldVariant::default(),
            size: TextFieldSize::default(),
            kind: TextFieldKind::default(),
            disabled: false,
            invalid: false,
            loading: false,
            clearable: false,
            password_toggle: false,
            style: Style::default(),
            bindings: TextFieldBindings::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextFieldAction {
    None,
    Redraw,
    /// The host should adopt this as the new value.
    Changed(String),
    Submitted(String),
}

const MASK: char = '•';
const CLEAR_MARK: char = '×';
const EYE_OPEN: char = '○';
const EYE_SHUT: char = '●';
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Adornment {
    Spinner,
    Clear,
    Visibility,
}

struct FieldLayout {
    label_y: Option<u16>,
    field: Rect,
    inner: Rect,
    text: Rect,
    caption_y: Option<u16>,
}

/// A labeled single-line input rendered as a controlled view over a host-owned
/// string.
///
/// `handle_event` folds a key into the host value and returns
/// [`TextFieldAction::Changed`] with the complete new string; the widget never
/// stores the value. The password-visibility flag is the only authoritative
/// state owned here; caret, scroll and spinner frame are ephemeral.
pub struct TextField {
    options: TextFieldOptions,
    // Clamped against the host value on every call. Starts past any value so
    // the caret begins at the end of whatever value first arrives.
    cursor: usize,
    scroll_col: u16,
    show_password: bool,
    spinner_frame: usize,
}

impl Default for TextField {
    fn default() -> Self {
        Self {
            options: TextFieldOptions::default(),
            cursor: usize::MAX,
            scroll_col: 0,
            show_password: false,
            spinner_frame: 0,
        }
    }
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TextFieldOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &TextFieldOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TextFieldOptions) {
        self.options = options;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub fn password_visible(&self) -> bool {
        self.show_password
    }

    /// Advances the loading spinner one frame. The widget owns no clock; the
    /// host calls this from its own tick.
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn is_masked(&self) -> bool {
        self.options.kind == TextFieldKind::Password
            && !(self.options.password_toggle && self.show_password)
    }

    pub fn can_clear(&self, value: &str) -> bool {
        self.options.clearable
            && !self.options.disabled
            && !self.options.loading
            && !value.is_empty()
    }

    /// Total height this field wants: label line, field box, caption line.
    pub fn preferred_height(&self) -> u16 {
        let label_h = if self.options.label.is_some() { 1 } else { 0 };
        let caption_h = if self.caption().is_some() { 1 } else { 0 };
        label_h + self.field_height() + caption_h
    }

    pub fn handle_event(&mut self, event: InputEvent, value: &str) -> TextFieldAction {
        if self.options.disabled || self.options.loading {
            return TextFieldAction::None;
        }
        self.clamp_cursor(value);
        match event {
            InputEvent::Paste(s) => {
                // Single line: control characters in the paste are dropped.
                let s: String = s.chars().filter(|c| !c.is_control()).collect();
                if s.is_empty() {
                    TextFieldAction::None
                } else {
                    TextFieldAction::Changed(self.insert_str(value, &s))
                }
            }
            InputEvent::Key(key) => self.handle_key(key, value),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, value: &str) -> TextFieldAction {
        if self.options.bindings.is_clear(&key) {
            if !self.can_clear(value) {
                return TextFieldAction::None;
            }
            self.cursor = 0;
            self.scroll_col = 0;
            return TextFieldAction::Changed(String::new());
        }
        if self.options.bindings.is_reveal(&key) {
            if self.options.kind != TextFieldKind::Password || !self.options.password_toggle {
                return TextFieldAction::None;
            }
            self.show_password = !self.show_password;
            return TextFieldAction::Redraw;
        }

        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.ctrl || key.modifiers.alt {
                    return TextFieldAction::None;
                }
                let mut tmp = [0u8; 4];
                TextFieldAction::Changed(self.insert_str(value, c.encode_utf8(&mut tmp)))
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return TextFieldAction::None;
                }
                let start = byte_index(value, self.cursor - 1);
                let end = byte_index(value, self.cursor);
                self.cursor -= 1;
                TextFieldAction::Changed(splice(value, start, end))
            }
            KeyCode::Delete => {
                if self.cursor >= value.chars().count() {
                    return TextFieldAction::None;
                }
                let start = byte_index(value, self.cursor);
                let end = byte_index(value, self.cursor + 1);
                TextFieldAction::Changed(splice(value, start, end))
            }
            KeyCode::Left => {
                if self.cursor == 0 {
                    return TextFieldAction::None;
                }
                self.cursor -= 1;
                TextFieldAction::Redraw
            }
            KeyCode::Right => {
                if self.cursor >= value.chars().count() {
                    return TextFieldAction::None;
                }
                self.cursor += 1;
                TextFieldAction::Redraw
            }
            KeyCode::Home => {
                if self.cursor == 0 {
                    return TextFieldAction::None;
                }
                self.cursor = 0;
                TextFieldAction::Redraw
            }
            KeyCode::End => {
                let end = value.chars().count();
                if self.cursor == end {
                    return TextFieldAction::None;
                }
                self.cursor = end;
                TextFieldAction::Redraw
            }
            KeyCode::Enter => TextFieldAction::Submitted(value.to_string()),
            _ => TextFieldAction::None,
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, value: &str) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.clamp_cursor(value);
        let layout = self.layout(area, value);

        let dimmed = self.options.disabled || self.options.loading;
        let mut text_style = if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        };
        if dimmed {
            text_style = text_style.add_modifier(Modifier::DIM);
        }
        let chrome_style = if self.options.invalid {
            theme.danger
        } else {
            theme.text_muted
        };

        if let Some(y) = layout.label_y
            && let Some(label) = &self.options.label
        {
            render::draw_clipped(
                area.x,
                y,
                0,
                area.width,
                buf,
                label,
                theme.text_primary.add_modifier(Modifier::BOLD),
            );
        }

        match self.options.variant {
            TextFieldVariant::Outlined => {
                if layout.field.width >= 2 && layout.field.height >= 3 {
                    let block = Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(chrome_style);
                    block.render(layout.field, buf);
                }
            }
            TextFieldVariant::Filled => {
                buf.set_style(layout.field, theme.field_bg);
            }
            TextFieldVariant::Ghost => {
                if layout.field.height >= 2 {
                    let y = layout.field.y + layout.field.height - 1;
                    for dx in 0..layout.field.width {
                        if let Some(cell) = buf.cell_mut((layout.field.x + dx, y)) {
                            cell.set_style(chrome_style);
                            cell.set_symbol("─");
                        }
                    }
                }
            }
        }

        if layout.text.width > 0 && layout.text.height > 0 {
            if value.is_empty() {
                self.scroll_col = 0;
                if let Some(placeholder) = &self.options.placeholder {
                    render::draw_clipped(
                        layout.text.x,
                        layout.text.y,
                        0,
                        layout.text.width,
                        buf,
                        placeholder,
                        theme.placeholder,
                    );
                }
            } else {
                let caret = self.caret_col(value);
                if caret < self.scroll_col {
                    self.scroll_col = caret;
                } else if caret >= self.scroll_col + layout.text.width {
                    self.scroll_col = caret + 1 - layout.text.width;
                }
                let display = self.display_value(value);
                render::draw_clipped(
                    layout.text.x,
                    layout.text.y,
                    self.scroll_col,
                    layout.text.width,
                    buf,
                    &display,
                    text_style,
                );
            }
        }

        let adornments = self.adornments(value);
        if !adornments.is_empty() && layout.inner.width > 0 {
            let n = adornments.len() as u16;
            for (i, adornment) in adornments.iter().enumerate() {
                let slot = n - i as u16;
                let Some(x) = layout
                    .inner
                    .right()
                    .checked_sub(slot * 2 - 1)
                    .filter(|x| *x >= layout.inner.x)
                else {
                    continue;
                };
                let (ch, style) = match adornment {
                    Adornment::Spinner => (SPINNER[self.spinner_frame % SPINNER.len()], theme.accent),
                    Adornment::Clear => (CLEAR_MARK, theme.text_muted),
                    Adornment::Visibility => {
                        if self.show_password {
                            (EYE_OPEN, theme.accent)
                        } else {
                            (EYE_SHUT, theme.text_muted)
                        }
                    }
                };
                let mut tmp = [0u8; 4];
                if let Some(cell) = buf.cell_mut((x, layout.text.y)) {
                    cell.set_style(style);
                    cell.set_symbol(ch.encode_utf8(&mut tmp));
                }
            }
        }

        if let Some(y) = layout.caption_y
            && let Some((caption, is_error)) = self.caption()
        {
            let style = if is_error { theme.danger } else { theme.text_muted };
            render::draw_clipped(area.x, y, 0, area.width, buf, caption, style);
        }
    }

    /// Screen cell for the terminal caret, or `None` when it is scrolled out of
    /// view or the field has no text row.
    pub fn cursor_pos(&self, area: Rect, value: &str) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let layout = self.layout(area, value);
        if layout.text.width == 0 || layout.text.height == 0 {
            return None;
        }
        let caret = self.caret_col(value);
        let rel = caret.checked_sub(self.scroll_col)?;
        if rel >= layout.text.width {
            return None;
        }
        Some((layout.text.x + rel, layout.text.y))
    }

    fn layout(&self, area: Rect, value: &str) -> FieldLayout {
        let mut y = area.y;
        let mut rem = area.height;

        let label_y = if self.options.label.is_some() && rem > 0 {
            let label_y = y;
            y += 1;
            rem -= 1;
            Some(label_y)
        } else {
            None
        };

        let field_h = self.field_height().min(rem);
        let field = Rect::new(area.x, y, area.width, field_h);
        y += field_h;
        rem -= field_h;

        let caption_y = if self.caption().is_some() && rem > 0 {
            Some(y)
        } else {
            None
        };

        let mut inner = match self.options.variant {
            TextFieldVariant::Outlined if field.width >= 2 && field.height >= 3 => {
                Rect::new(field.x + 1, field.y + 1, field.width - 2, 1)
            }
            _ => Rect::new(field.x, field.y, field.width, field.height.min(1)),
        };
        let pad = self.pad();
        if inner.width > pad * 2 {
            inner.x += pad;
            inner.width -= pad * 2;
        } else {
            inner.width = 0;
        }

        let mut text = inner;
        let n = self.adornments(value).len() as u16;
        text.width = text.width.saturating_sub(n * 2);

        FieldLayout {
            label_y,
            field,
            inner,
            text,
            caption_y,
        }
    }

    fn field_height(&self) -> u16 {
        match self.options.variant {
            TextFieldVariant::Outlined => 3,
            TextFieldVariant::Ghost => 2,
            TextFieldVariant::Filled => 1,
        }
    }

    fn pad(&self) -> u16 {
        match self.options.size {
            TextFieldSize::Small => 1,
            TextFieldSize::Medium => 2,
            TextFieldSize::Large => 3,
        }
    }

    fn caption(&self) -> Option<(&str, bool)> {
        if self.options.invalid
            && let Some(error) = &self.options.error_message
            && !error.is_empty()
        {
            return Some((error, true));
        }
        self.options.helper_text.as_deref().map(|h| (h, false))
    }

    fn adornments(&self, value: &str) -> Vec<Adornment> {
        let mut out = Vec::new();
        if self.options.loading {
            out.push(Adornment::Spinner);
        }
        if self.can_clear(value) {
            out.push(Adornment::Clear);
        }
        if self.options.kind == TextFieldKind::Password && self.options.password_toggle {
            out.push(Adornment::Visibility);
        }
        out
    }

    fn display_value(&self, value: &str) -> String {
        if self.is_masked() {
            std::iter::repeat(MASK).take(value.chars().count()).collect()
        } else {
            value.to_string()
        }
    }

    fn caret_col(&self, value: &str) -> u16 {
        if self.is_masked() {
            return self.cursor.min(u16::MAX as usize) as u16;
        }
        let cols: usize = value
            .chars()
            .take(self.cursor)
            .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
            .sum();
        cols.min(u16::MAX as usize) as u16
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.chars().count());
    }

    fn insert_str(&mut self, value: &str, s: &str) -> String {
        let at = byte_index(value, self.cursor);
        let mut out = String::with_capacity(value.len() + s.len());
        out.push_str(&value[..at]);
        out.push_str(s);
        out.push_str(&value[at..]);
        self.cursor += s.chars().count();
        out
    }
}

fn byte_index(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

fn splice(value: &str, start: usize, end: usize) -> String {
    let mut out = String::with_capacity(value.len() - (end - start));
    out.push_str(&value[..start]);
    out.push_str(&value[end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code))
    }

    fn ctrl(c: char) -> InputEvent {
        InputEvent::Key(keymap::key_ctrl(c))
    }

    fn row_string(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (0..area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    fn filled_small(options: TextFieldOptions) -> TextField {
        TextField::with_options(TextFieldOptions {
            variant: TextFieldVariant::Filled,
            size: TextFieldSize::Small,
            ..options
        })
    }

    #[test]
    fn typing_appends_at_the_caret() {
        let mut f = TextField::new();
        assert_eq!(
            f.handle_event(key(KeyCode::Char('x')), "ab"),
            TextFieldAction::Changed("abx".to_string())
        );
    }

    #[test]
    fn caret_moves_and_inserts_mid_value() {
        let mut f = TextField::new();
        f.handle_event(key(KeyCode::Left), "ac");
        assert_eq!(
            f.handle_event(key(KeyCode::Char('b')), "ac"),
            TextFieldAction::Changed("abc".to_string())
        );
    }

    #[test]
    fn backspace_and_delete_remove_around_the_caret() {
        let mut f = TextField::new();
        assert_eq!(
            f.handle_event(key(KeyCode::Backspace), "abc"),
            TextFieldAction::Changed("ab".to_string())
        );

        let mut f = TextField::new();
        f.handle_event(key(KeyCode::Home), "abc");
        assert_eq!(
            f.handle_event(key(KeyCode::Delete), "abc"),
            TextFieldAction::Changed("bc".to_string())
        );
    }

    #[test]
    fn enter_submits_the_host_value() {
        let mut f = TextField::new();
        assert_eq!(
            f.handle_event(key(KeyCode::Enter), "hello"),
            TextFieldAction::Submitted("hello".to_string())
        );
    }

    #[test]
    fn clear_emits_an_empty_change() {
        let mut f = TextField::with_options(TextFieldOptions {
            clearable: true,
            ..Default::default()
        });
        assert_eq!(
            f.handle_event(ctrl('u'), "hello"),
            TextFieldAction::Changed(String::new())
        );
    }

    #[test]
    fn clear_requires_a_value_and_an_idle_field() {
        let mut f = TextField::with_options(TextFieldOptions {
            clearable: true,
            ..Default::default()
        });
        assert_eq!(f.handle_event(ctrl('u'), ""), TextFieldAction::None);

        let mut f = TextField::with_options(TextFieldOptions {
            clearable: true,
            loading: true,
            ..Default::default()
        });
        assert_eq!(f.handle_event(ctrl('u'), "hello"), TextFieldAction::None);
    }

    #[test]
    fn disabled_and_loading_suppress_editing() {
        let mut f = TextField::with_options(TextFieldOptions {
            disabled: true,
            ..Default::default()
        });
        assert_eq!(f.handle_event(key(KeyCode::Char('x')), "ab"), TextFieldAction::None);

        let mut f = TextField::with_options(TextFieldOptions {
            loading: true,
            ..Default::default()
        });
        assert_eq!(f.handle_event(key(KeyCode::Char('x')), "ab"), TextFieldAction::None);
    }

    #[test]
    fn password_toggle_round_trips_to_masked() {
        let mut f = TextField::with_options(TextFieldOptions {
            kind: TextFieldKind::Password,
            password_toggle: true,
            ..Default::default()
        });
        assert!(f.is_masked());

        assert_eq!(f.handle_event(ctrl('r'), "secret"), TextFieldAction::Redraw);
        assert!(!f.is_masked());

        f.handle_event(ctrl('r'), "secret");
        assert!(f.is_masked());
    }

    #[test]
    fn password_without_toggle_stays_masked() {
        let mut f = TextField::with_options(TextFieldOptions {
            kind: TextFieldKind::Password,
            ..Default::default()
        });
        assert_eq!(f.handle_event(ctrl('r'), "secret"), TextFieldAction::None);
        assert!(f.is_masked());
    }

    #[test]
    fn masked_rendering_shows_bullets() {
        let mut f = filled_small(TextFieldOptions {
            kind: TextFieldKind::Password,
            password_toggle: true,
            ..Default::default()
        });
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 1));
        f.render(Rect::new(0, 0, 30, 1), &mut buf, &Theme::default(), "secret");
        let row = row_string(&buf, 0);
        assert!(row.contains("••••••"));
        assert!(!row.contains("secret"));

        f.handle_event(ctrl('r'), "secret");
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 1));
        f.render(Rect::new(0, 0, 30, 1), &mut buf, &Theme::default(), "secret");
        assert!(row_string(&buf, 0).contains("secret"));
    }

    #[test]
    fn error_takes_precedence_over_helper() {
        let mut f = filled_small(TextFieldOptions {
            helper_text: Some("This will be public".to_string()),
            error_message: Some("Please enter a valid email".to_string()),
            invalid: true,
            ..Default::default()
        });
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 2));
        f.render(Rect::new(0, 0, 40, 2), &mut buf, &Theme::default(), "nope");
        let caption = row_string(&buf, 1);
        assert!(caption.contains("Please enter a valid email"));
        assert!(!caption.contains("This will be public"));
    }

    #[test]
    fn helper_shows_when_valid() {
        let mut f = filled_small(TextFieldOptions {
            helper_text: Some("This will be public".to_string()),
            error_message: Some("Please enter a valid email".to_string()),
            invalid: false,
            ..Default::default()
        });
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 2));
        f.render(Rect::new(0, 0, 40, 2), &mut buf, &Theme::default(), "ok");
        assert!(row_string(&buf, 1).contains("This will be public"));
    }

    #[test]
    fn placeholder_renders_when_value_is_empty() {
        let mut f = filled_small(TextFieldOptions {
            placeholder: Some("Enter your username".to_string()),
            ..Default::default()
        });
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 1));
        f.render(Rect::new(0, 0, 40, 1), &mut buf, &Theme::default(), "");
        assert!(row_string(&buf, 0).contains("Enter your username"));
    }

    #[test]
    fn loading_shows_spinner_and_suppresses_clear_mark() {
        let mut f = filled_small(TextFieldOptions {
            clearable: true,
            loading: true,
            ..Default::default()
        });
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 1));
        f.render(Rect::new(0, 0, 30, 1), &mut buf, &Theme::default(), "hello");
        let row = row_string(&buf, 0);
        assert!(row.contains(SPINNER[0]));
        assert!(!row.contains(CLEAR_MARK));
    }

    #[test]
    fn clear_mark_appears_only_with_a_value() {
        let mut f = filled_small(TextFieldOptions {
            clearable: true,
            ..Default::default()
        });
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 1));
        f.render(Rect::new(0, 0, 30, 1), &mut buf, &Theme::default(), "hello");
        assert!(row_string(&buf, 0).contains(CLEAR_MARK));

        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 1));
        f.render(Rect::new(0, 0, 30, 1), &mut buf, &Theme::default(), "");
        assert!(!row_string(&buf, 0).contains(CLEAR_MARK));
    }

    #[test]
    fn label_line_renders_above_the_field() {
        let mut f = filled_small(TextFieldOptions {
            label: Some("Username".to_string()),
            ..Default::default()
        });
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 2));
        f.render(Rect::new(0, 0, 30, 2), &mut buf, &Theme::default(), "abc");
        assert!(row_string(&buf, 0).contains("Username"));
        assert!(row_string(&buf, 1).contains("abc"));
    }

    #[test]
    fn cursor_pos_tracks_the_caret() {
        let mut f = filled_small(TextFieldOptions::default());
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        f.render(area, &mut buf, &Theme::default(), "hi");
        assert_eq!(f.cursor_pos(area, "hi"), Some((3, 0)));
    }

    #[test]
    fn long_values_scroll_to_keep_the_caret_visible() {
        let mut f = filled_small(TextFieldOptions::default());
        let area = Rect::new(0, 0, 10, 1);
        let value = "abcdefghijklmnop";
        let mut buf = Buffer::empty(area);
        f.render(area, &mut buf, &Theme::default(), value);
        let row = row_string(&buf, 0);
        assert!(row.contains('p'));
        assert!(!row.contains('a'));
    }
}
