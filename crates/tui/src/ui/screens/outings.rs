use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::AppState,
    ui::{components::card::Card, format::short_date, screens::pending_text, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let card = Card::new("outings", &theme);

    if let Some(text) = pending_text(&state.outings.items) {
        card.render_with(frame, area, Paragraph::new(text));
        return;
    }

    let outings = state.outings.items.ready().map(Vec::as_slice).unwrap_or_default();
    if outings.is_empty() {
        card.render_with(
            frame,
            area,
            Paragraph::new("No outings made yet").style(Style::default().fg(theme.dim)),
        );
        return;
    }

    let items: Vec<ListItem> = outings
        .iter()
        .map(|outing| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    short_date(outing.created_at, state.timezone),
                    Style::default().fg(theme.dim),
                )),
                Line::from(vec![
                    Span::raw(outing.name.clone()),
                    Span::styled(
                        format!("  ({})", outing.outing_id),
                        Style::default().fg(theme.dim),
                    ),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(card.block())
        .highlight_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(state.outings.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
