use engine::Group;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::AppState,
    ui::{
        components::{card::Card, outing_header},
        screens::{render_error, render_loading},
        theme::Theme,
    },
};

/// Rows for one group card: its lines (at least the placeholder) plus borders.
fn group_height(transfers: usize) -> u16 {
    u16::try_from(transfers.max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let results = &state.results;

    if let Some(message) = results.error() {
        render_error(frame, area, message, &theme);
        return;
    }
    let viewer = state.session.user_name().unwrap_or_default();
    let (Some(outing), Some(settlement)) = (results.outing.ready(), results.settlement(viewer))
    else {
        render_loading(frame, area, &theme);
        return;
    };

    let mut constraints = vec![Constraint::Length(outing_header::HEIGHT)];
    constraints.extend(
        Group::ALL
            .iter()
            .map(|group| Constraint::Length(group_height(settlement.group(*group).len()))),
    );
    constraints.push(Constraint::Min(0));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    outing_header::render(frame, layout[0], outing, &results.balance, &theme);

    for (idx, group) in Group::ALL.into_iter().enumerate() {
        let empty = settlement.group(group).is_empty();
        let style = match group {
            _ if empty => Style::default().fg(theme.dim),
            Group::OwedByViewer => Style::default().fg(theme.negative),
            Group::OwedToViewer => Style::default().fg(theme.positive),
            Group::Unrelated => Style::default().fg(theme.text),
        };
        let lines: Vec<Line> = settlement
            .lines(group)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, style)))
            .collect();

        let title = group.title().trim_end_matches(':');
        Card::new(title, &theme).render_with(frame, layout[idx + 1], Paragraph::new(lines));
    }
}
