pub mod details;
pub mod join;
pub mod outings;
pub mod results;

use engine::Remote;
use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::ui::theme::Theme;

/// `Error: ...` in place of a view whose data could not be fetched.
pub(crate) fn render_error(frame: &mut Frame<'_>, area: Rect, message: &str, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(format!("Error: {message}")).style(Style::default().fg(theme.error)),
        area,
    );
}

pub(crate) fn render_loading(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new("Loading...").style(Style::default().fg(theme.dim)),
        area,
    );
}

/// Placeholder text for a list that has not arrived or failed.
pub(crate) fn pending_text<T>(remote: &Remote<T>) -> Option<String> {
    if remote.is_pending() {
        return Some("Loading...".to_string());
    }
    remote.error().map(|message| format!("Error: {message}"))
}
