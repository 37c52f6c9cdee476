use api_types::outing::{Balance, OutingDetails};
use engine::{Money, Remote};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::{components::card::Card, theme::Theme};

/// Rows taken by the header, borders included.
pub const HEIGHT: u16 = 4;

pub fn balance_line(balance: &Remote<Balance>) -> String {
    match balance.ready() {
        Some(balance) => format!(
            "{} spent on this outing so far",
            Money::from_major(balance.total)
        ),
        None => "Loading balance...".to_string(),
    }
}

pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    outing: &OutingDetails,
    balance: &Remote<Balance>,
    theme: &Theme,
) {
    let people = if outing.people.is_empty() {
        "-".to_string()
    } else {
        outing.people.join(", ")
    };

    let lines = vec![
        Line::from(Span::styled(
            balance_line(balance),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Join code", Style::default().fg(theme.dim)),
            Span::raw(format!(": {}   ", outing.outing_id)),
            Span::styled("People", Style::default().fg(theme.dim)),
            Span::raw(format!(": {people}")),
        ]),
    ];

    Card::new(&outing.name, theme).render_with(frame, area, Paragraph::new(lines));
}
