use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Form fields take every printable key, so screen commands live on `Ctrl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Back,
    NextField,
    PrevField,
    Submit,
    Backspace,
    Up,
    Down,
    BrowseOutings,
    AddPerson,
    Finish,
    Refresh,
    ExitOuting,
    Input(char),
    None,
}

pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char('o') => AppAction::BrowseOutings,
            KeyCode::Char('a') => AppAction::AddPerson,
            KeyCode::Char('f') => AppAction::Finish,
            KeyCode::Char('r') => AppAction::Refresh,
            KeyCode::Char('x') => AppAction::ExitOuting,
            _ => AppAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => AppAction::Back,
        KeyCode::Tab => AppAction::NextField,
        KeyCode::BackTab => AppAction::PrevField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Up => AppAction::Up,
        KeyCode::Down => AppAction::Down,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}
