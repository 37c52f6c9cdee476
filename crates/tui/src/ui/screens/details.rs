use api_types::expense::Expense;
use chrono_tz::Tz;
use engine::Money;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{List, ListItem, Paragraph},
};

use crate::{
    app::{AppState, ExpenseField},
    ui::{
        components::{
            card::Card,
            field::{render_input, render_message},
            outing_header,
        },
        format::full_datetime,
        screens::{pending_text, render_error, render_loading},
        theme::Theme,
    },
};

/// `$12.50 by Ann @ February 11, 2023 at 6:31 PM UTC for hot cocoa`
pub fn expense_line(expense: &Expense, tz: Tz) -> String {
    let mut line = format!(
        "{} by {} @ {}",
        Money::from_major(expense.amount),
        expense.person_name,
        full_datetime(expense.created_at, tz)
    );
    if let Some(description) = expense.description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(" for ");
        line.push_str(description);
    }
    line
}

/// Card title for the expense list, counting what was added from here.
pub fn expenses_title(refresh: u32) -> String {
    match refresh {
        0 => "expenses".to_string(),
        n => format!("expenses ({n} added here)"),
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let details = &state.details;

    if let Some(message) = details.error() {
        render_error(frame, area, message, &theme);
        return;
    }
    let Some(outing) = details.outing.ready() else {
        render_loading(frame, area, &theme);
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(outing_header::HEIGHT),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    outing_header::render(frame, layout[0], outing, &details.balance, &theme);
    render_form(frame, layout[1], state, &theme);
    render_expenses(frame, layout[2], state, &theme);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let details = &state.details;
    let card = Card::new("add an expense", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_input(
        frame,
        rows[0],
        "Description (optional)",
        &details.draft.description,
        details.focus == ExpenseField::Description,
        theme,
    );
    render_input(
        frame,
        rows[1],
        "Amount",
        &details.draft.amount,
        details.focus == ExpenseField::Amount,
        theme,
    );
    let payer = state.session.user_name().unwrap_or("?");
    frame.render_widget(
        Paragraph::new(format!("Paid by {payer}")).style(Style::default().fg(theme.dim)),
        rows[2],
    );
    render_message(frame, rows[3], details.message.as_deref(), theme);
}

fn render_expenses(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let title = expenses_title(state.details.refresh);
    let card = Card::new(&title, theme);

    if let Some(text) = pending_text(&state.details.expenses) {
        card.render_with(frame, area, Paragraph::new(text));
        return;
    }

    let expenses = state.details.expenses.ready().map(Vec::as_slice).unwrap_or_default();
    if expenses.is_empty() {
        card.render_with(
            frame,
            area,
            Paragraph::new("No expenses yet").style(Style::default().fg(theme.dim)),
        );
        return;
    }

    let items: Vec<ListItem> = expenses
        .iter()
        .map(|expense| ListItem::new(expense_line(expense, state.timezone)))
        .collect();
    frame.render_widget(List::new(items).block(card.block()), area);
}
