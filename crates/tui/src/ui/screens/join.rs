use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, JoinField},
    ui::{
        components::{
            card::Card,
            field::{render_input, render_message},
        },
        screens::pending_text,
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_form(frame, columns[0], state, &theme);
    render_people(frame, columns[1], state, &theme);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let join = &state.join;
    let card = Card::new("join an outing", theme).focused(true);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1),
            Constraint::Length(1), // Join code
            Constraint::Length(1),
            Constraint::Length(1), // "or"
            Constraint::Length(1),
            Constraint::Length(1), // New outing
            Constraint::Length(1),
            Constraint::Min(1), // Message
        ])
        .margin(1)
        .split(inner);

    render_input(
        frame,
        rows[0],
        "Your name",
        &join.name,
        join.focus == JoinField::Name,
        theme,
    );
    render_input(
        frame,
        rows[2],
        "Join code",
        &join.join_code,
        join.focus == JoinField::JoinCode,
        theme,
    );
    frame.render_widget(
        Paragraph::new("or start a new one").style(Style::default().fg(theme.dim)),
        rows[4],
    );
    render_input(
        frame,
        rows[6],
        "Outing name",
        &join.outing_name,
        join.focus == JoinField::OutingName,
        theme,
    );
    render_message(frame, rows[8], join.message.as_deref(), theme);
}

fn render_people(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("known people", theme);

    if let Some(text) = pending_text(&state.join.people) {
        card.render_with(
            frame,
            area,
            Paragraph::new(text).style(Style::default().fg(theme.dim)),
        );
        return;
    }

    let people = state.join.people.ready().map(Vec::as_slice).unwrap_or_default();
    if people.is_empty() {
        card.render_with(
            frame,
            area,
            Paragraph::new("Not here? Add yourself!").style(Style::default().fg(theme.dim)),
        );
        return;
    }

    let items: Vec<ListItem> = people
        .iter()
        .map(|person| ListItem::new(person.name.clone()))
        .collect();
    let list = List::new(items)
        .block(card.block())
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(state.join.selected_person);
    frame.render_stateful_widget(list, area, &mut list_state);
}
