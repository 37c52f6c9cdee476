use ratatui::{style::Style, text::Span};

use crate::{
    app::{AppState, ExpenseField, JoinField, Screen},
    ui::theme::Theme,
};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

/// Hints for whatever the focused screen and field accept.
pub fn screen_hints(state: &AppState) -> Vec<KeyHint> {
    match state.screen {
        Screen::Join => {
            let mut hints = vec![KeyHint::new("Tab", "next field")];
            hints.push(match state.join.focus {
                JoinField::Name => KeyHint::new("↑↓", "known people"),
                JoinField::JoinCode => KeyHint::new("Enter", "join"),
                JoinField::OutingName => KeyHint::new("Enter", "create"),
            });
            hints.push(KeyHint::new("Ctrl+A", "add yourself"));
            hints.push(KeyHint::new("Ctrl+O", "browse outings"));
            hints
        }
        Screen::Outings => vec![
            KeyHint::new("↑↓", "select"),
            KeyHint::new("Enter", "use code"),
            KeyHint::new("Esc", "back"),
        ],
        Screen::Details => {
            let submit = match state.details.focus {
                ExpenseField::Description => KeyHint::new("Enter", "to amount"),
                ExpenseField::Amount => KeyHint::new("Enter", "add expense"),
            };
            vec![
                KeyHint::new("Tab", "next field"),
                submit,
                KeyHint::new("Ctrl+F", "finish"),
                KeyHint::new("Ctrl+R", "refresh"),
                KeyHint::new("Ctrl+X", "exit outing"),
            ]
        }
        Screen::Results => vec![
            KeyHint::new("Esc", "back"),
            KeyHint::new("Ctrl+R", "refresh"),
            KeyHint::new("Ctrl+X", "exit outing"),
        ],
    }
}

pub fn global_hints() -> Vec<KeyHint> {
    vec![KeyHint::new("Ctrl+C", "quit")]
}
