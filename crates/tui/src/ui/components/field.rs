use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

/// One form row: `label: value` with a bar cursor on the focused field.
pub fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let value_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let line = Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(theme.dim)),
        Span::styled(format!("{value}{cursor}"), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Form feedback; failures from the server read `Error: ...`.
pub fn render_message(frame: &mut Frame<'_>, area: Rect, message: Option<&str>, theme: &Theme) {
    let Some(message) = message else {
        return;
    };
    let color = if message.starts_with("Error:") {
        theme.error
    } else {
        theme.dim
    };
    frame.render_widget(
        Paragraph::new(Span::styled(message.to_string(), Style::default().fg(color))),
        area,
    );
}
