pub mod components;
pub mod format;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Screen};
use theme::Theme;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Screen
            Constraint::Length(1), // Bottom bar
        ])
        .split(frame.area());

    render_info_bar(frame, layout[0], state, &theme);

    let content = layout[1];
    match state.screen {
        Screen::Join => screens::join::render(frame, content, state),
        Screen::Outings => screens::outings::render(frame, content, state),
        Screen::Details => screens::details::render(frame, content, state),
        Screen::Results => screens::results::render(frame, content, state),
    }

    render_bottom_bar(frame, layout[2], state, &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let user = state.session.user_name().unwrap_or("-");
    let outing = state
        .session
        .outing_id()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    let (status, color) = match state.server_ok {
        Some(true) => ("OK", theme.positive),
        Some(false) => ("ERR", theme.error),
        None => ("…", theme.dim),
    };

    let line = Line::from(vec![
        Span::styled(state.screen.label(), Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("User", Style::default().fg(theme.dim)),
        Span::raw(format!(": {user}  ")),
        Span::styled("Outing", Style::default().fg(theme.dim)),
        Span::raw(format!(": {outing}  ")),
        Span::styled("Server", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.base_url)),
        Span::styled(status, Style::default().fg(color)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::hints::hints_to_spans(&components::hints::screen_hints(state), theme);
    parts.push(components::hints::hint_separator(theme));
    parts.extend(components::hints::hints_to_spans(
        &components::hints::global_hints(),
        theme,
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
