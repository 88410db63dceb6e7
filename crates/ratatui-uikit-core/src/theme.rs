use ratatui::style::Style;

/// Flat style palette consumed by the widgets.
///
/// Widget options carry `Style` fields that default to `Style::default()`; at render
/// time those are resolved against this palette, so a host can restyle everything in
/// one place without touching per-widget options.
#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub accent: Style,
    pub danger: Style,
    pub field_bg: Style,
    pub placeholder: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            accent: Style::default().cyan(),
            danger: Style::default().red(),
            field_bg: Style::default().on_dark_gray(),
            placeholder: Style::default().dark_gray().italic(),
        }
    }
}
