use api_types::{
    expense::Expense,
    outing::{Balance, Outing, OutingDetails},
    person::Person,
    settlement::SettlementTransfer,
};
use engine::{ExpenseDraft, Remote, Session, Settlement, first_error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Join,
    Outings,
    Details,
    Results,
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Self::Join => "Join",
            Self::Outings => "Outings",
            Self::Details => "Outing",
            Self::Results => "Results",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinField {
    Name,
    JoinCode,
    OutingName,
}

impl JoinField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::JoinCode,
            Self::JoinCode => Self::OutingName,
            Self::OutingName => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::OutingName,
            Self::JoinCode => Self::Name,
            Self::OutingName => Self::JoinCode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Description,
    Amount,
}

impl ExpenseField {
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Description,
        }
    }

    /// Two fields, so backwards lands on the same one as forwards.
    pub fn prev(self) -> Self {
        self.next()
    }
}

#[derive(Debug)]
pub struct JoinState {
    pub name: String,
    pub join_code: String,
    pub outing_name: String,
    pub focus: JoinField,
    pub people: Remote<Vec<Person>>,
    pub selected_person: Option<usize>,
    pub message: Option<String>,
}

impl JoinState {
    pub fn new(name: String) -> Self {
        Self {
            name,
            join_code: String::new(),
            outing_name: String::new(),
            focus: JoinField::Name,
            people: Remote::Idle,
            selected_person: None,
            message: None,
        }
    }

    pub fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            JoinField::Name => &mut self.name,
            JoinField::JoinCode => &mut self.join_code,
            JoinField::OutingName => &mut self.outing_name,
        }
    }

    /// Moves the people selection and copies the picked name into the form.
    pub fn pick_person(&mut self, forward: bool) {
        let Some(people) = self.people.ready().filter(|people| !people.is_empty()) else {
            return;
        };
        let last = people.len() - 1;
        let next = match (self.selected_person, forward) {
            (None, true) => 0,
            (None, false) => last,
            (Some(idx), true) => (idx + 1).min(last),
            (Some(idx), false) => idx.saturating_sub(1),
        };
        self.name = people[next].name.clone();
        self.selected_person = Some(next);
    }
}

#[derive(Debug, Default)]
pub struct OutingsState {
    pub items: Remote<Vec<Outing>>,
    pub selected: usize,
}

impl OutingsState {
    pub fn select_next(&mut self) {
        let len = self.items.ready().map_or(0, Vec::len);
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_outing(&self) -> Option<&Outing> {
        self.items.ready().and_then(|items| items.get(self.selected))
    }
}

#[derive(Debug)]
pub struct DetailsState {
    pub outing: Remote<OutingDetails>,
    pub balance: Remote<Balance>,
    pub expenses: Remote<Vec<Expense>>,
    pub draft: ExpenseDraft,
    pub focus: ExpenseField,
    pub message: Option<String>,
    /// Expenses added from this screen since the outing was opened; each one
    /// re-fetches the balance and the expense list.
    pub refresh: u32,
}

impl Default for DetailsState {
    fn default() -> Self {
        Self {
            outing: Remote::Idle,
            balance: Remote::Idle,
            expenses: Remote::Idle,
            draft: ExpenseDraft::default(),
            focus: ExpenseField::Amount,
            message: None,
            refresh: 0,
        }
    }
}

impl DetailsState {
    pub fn error(&self) -> Option<&str> {
        first_error([self.outing.error(), self.balance.error(), self.expenses.error()])
    }

    pub fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            ExpenseField::Description => &mut self.draft.description,
            ExpenseField::Amount => &mut self.draft.amount,
        }
    }
}

#[derive(Debug, Default)]
pub struct ResultsState {
    pub outing: Remote<OutingDetails>,
    pub balance: Remote<Balance>,
    pub transfers: Remote<Vec<SettlementTransfer>>,
}

impl ResultsState {
    pub fn error(&self) -> Option<&str> {
        first_error([self.outing.error(), self.balance.error(), self.transfers.error()])
    }

    /// Transfers grouped for `viewer`, once they have arrived.
    pub fn settlement(&self, viewer: &str) -> Option<Settlement> {
        self.transfers
            .ready()
            .map(|transfers| Settlement::classify(transfers.iter().cloned(), &viewer.to_string()))
    }
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub session: Session,
    pub join: JoinState,
    pub outings: OutingsState,
    pub details: DetailsState,
    pub results: ResultsState,
    /// Result of the startup ping; `None` until it ran.
    pub server_ok: Option<bool>,
    pub timezone: chrono_tz::Tz,
    pub base_url: String,
}
