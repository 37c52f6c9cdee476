mod state;

use std::time::Duration;

use api_types::outing::OutingId;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{Remote, SessionStore};

use crate::{
    client::Client,
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub use state::{
    AppState, DetailsState, ExpenseField, JoinField, JoinState, OutingsState, ResultsState, Screen,
};

pub struct App {
    client: Client,
    store: SessionStore,
    pub state: AppState,
    /// Set while `run` owns the screen; tests drive the app without one.
    terminal: Option<ui::Terminal>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        let timezone = config.timezone()?;
        let store = SessionStore::new(&config.session_path);
        if config.fresh {
            store.clear()?;
        }
        let session = store.load();
        tracing::debug!("session from {}: {session:?}", store.path().display());

        let name = session
            .user_name()
            .map(str::to_string)
            .unwrap_or_else(|| config.user_name.trim().to_string());

        let state = AppState {
            screen: Screen::Join,
            session,
            join: JoinState::new(name),
            outings: OutingsState::default(),
            details: DetailsState::default(),
            results: ResultsState::default(),
            server_ok: None,
            timezone,
            base_url: config.base_url.clone(),
        };

        Ok(Self {
            client,
            store,
            state,
            terminal: None,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        self.terminal = Some(ui::setup_terminal()?);
        self.start().await;
        let result = self.event_loop().await;
        if let Some(mut terminal) = self.terminal.take() {
            ui::restore_terminal(&mut terminal)?;
        }
        result
    }

    /// Checks the server and routes to wherever the stored session points.
    pub async fn start(&mut self) {
        match self.client.ping().await {
            Ok(()) => self.state.server_ok = Some(true),
            Err(err) => {
                tracing::warn!("birdie server unavailable at {}: {err}", self.state.base_url);
                self.state.server_ok = Some(false);
            }
        }
        self.route().await;
    }

    async fn event_loop(&mut self) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit() {
            if let Some(terminal) = self.terminal.as_mut() {
                terminal
                    .draw(|frame| ui::render(frame, &self.state))
                    .map_err(|err| AppError::Terminal(err.to_string()))?;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key).await
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Shows `Loading...` states before a request holds up the loop.
    fn redraw(&mut self) {
        let Some(terminal) = self.terminal.as_mut() else {
            return;
        };
        if let Err(err) = terminal.draw(|frame| ui::render(frame, &self.state)) {
            tracing::warn!("redraw failed: {err}");
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        match map_key(key) {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::Back => self.back().await,
            AppAction::NextField => match self.state.screen {
                Screen::Join => self.state.join.focus = self.state.join.focus.next(),
                Screen::Details => self.state.details.focus = self.state.details.focus.next(),
                Screen::Outings | Screen::Results => {}
            },
            AppAction::PrevField => match self.state.screen {
                Screen::Join => self.state.join.focus = self.state.join.focus.prev(),
                Screen::Details => self.state.details.focus = self.state.details.focus.prev(),
                Screen::Outings | Screen::Results => {}
            },
            AppAction::Submit => match self.state.screen {
                Screen::Join => self.submit_join().await,
                Screen::Outings => self.pick_outing(),
                Screen::Details => self.submit_expense().await,
                Screen::Results => {}
            },
            AppAction::Backspace => {
                if let Some(field) = self.active_field_mut() {
                    field.pop();
                }
            }
            action @ (AppAction::Up | AppAction::Down) => {
                let forward = action == AppAction::Down;
                match self.state.screen {
                    Screen::Join if self.state.join.focus == JoinField::Name => {
                        self.state.join.pick_person(forward);
                    }
                    Screen::Outings if forward => self.state.outings.select_next(),
                    Screen::Outings => self.state.outings.select_prev(),
                    _ => {}
                }
            }
            AppAction::BrowseOutings => {
                if self.state.screen == Screen::Join {
                    self.state.screen = Screen::Outings;
                    self.load_outings().await;
                }
            }
            AppAction::AddPerson => {
                if self.state.screen == Screen::Join {
                    self.add_person().await;
                }
            }
            AppAction::Finish => {
                if self.state.screen == Screen::Details {
                    self.state.screen = Screen::Results;
                    self.load_results().await;
                }
            }
            AppAction::Refresh => match self.state.screen {
                Screen::Join => self.load_people().await,
                Screen::Outings => self.load_outings().await,
                Screen::Details => self.load_details().await,
                Screen::Results => self.load_results().await,
            },
            AppAction::ExitOuting => {
                if matches!(self.state.screen, Screen::Details | Screen::Results) {
                    self.exit_outing().await;
                }
            }
            AppAction::Input(ch) => {
                if let Some(field) = self.active_field_mut() {
                    field.push(ch);
                }
            }
            AppAction::None => {}
        }
    }

    fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.state.screen {
            Screen::Join => Some(self.state.join.active_field_mut()),
            Screen::Details => Some(self.state.details.active_field_mut()),
            Screen::Outings | Screen::Results => None,
        }
    }

    async fn back(&mut self) {
        match self.state.screen {
            Screen::Outings => self.state.screen = Screen::Join,
            Screen::Results => {
                self.state.screen = Screen::Details;
                self.load_details().await;
            }
            Screen::Join => self.state.join.message = None,
            Screen::Details => self.state.details.message = None,
        }
    }

    /// Shows the outing when the session has one, the join form otherwise.
    async fn route(&mut self) {
        if self.state.session.outing_id().is_some() {
            self.state.screen = Screen::Details;
            self.state.details = DetailsState::default();
            self.load_details().await;
        } else {
            self.state.screen = Screen::Join;
            if self.state.join.name.is_empty() {
                if let Some(name) = self.state.session.user_name() {
                    self.state.join.name = name.to_string();
                }
            }
            self.load_people().await;
        }
    }

    async fn submit_join(&mut self) {
        match self.state.join.focus {
            JoinField::Name => self.state.join.focus = JoinField::JoinCode,
            JoinField::JoinCode => self.join_outing().await,
            JoinField::OutingName => self.create_outing().await,
        }
    }

    async fn join_outing(&mut self) {
        let join = &mut self.state.join;
        let name = join.name.trim().to_string();
        if join.join_code.trim().is_empty() {
            join.message = Some("Enter a join code first.".to_string());
            return;
        }
        if name.is_empty() {
            join.message = Some("Tell us your name first.".to_string());
            return;
        }
        let outing_id = match OutingId::parse(&join.join_code) {
            Ok(outing_id) => outing_id,
            Err(err) => {
                join.message = Some(err.to_string());
                return;
            }
        };

        match self.client.join_outing(&outing_id, &name).await {
            Ok(()) => {
                tracing::info!("{name} joined outing {outing_id}");
                self.enter_outing(&name, outing_id).await;
            }
            Err(err) => self.state.join.message = Some(format!("Error: {err}")),
        }
    }

    async fn create_outing(&mut self) {
        let join = &mut self.state.join;
        let name = join.name.trim().to_string();
        let outing_name = join.outing_name.trim().to_string();
        if outing_name.is_empty() || name.is_empty() {
            join.message = Some("A new outing needs both your name and its name.".to_string());
            return;
        }

        match self.client.create_outing(&outing_name, &name).await {
            Ok(outing) => {
                tracing::info!("{name} created outing {}", outing.outing_id);
                self.enter_outing(&name, outing.outing_id).await;
            }
            Err(err) => self.state.join.message = Some(format!("Error: {err}")),
        }
    }

    async fn enter_outing(&mut self, name: &str, outing_id: OutingId) {
        self.state.session.enter_outing(name, outing_id);

        let join = &mut self.state.join;
        join.message = None;
        join.join_code.clear();
        join.outing_name.clear();
        join.focus = JoinField::Name;

        self.route().await;
        self.persist_session();
    }

    async fn exit_outing(&mut self) {
        if let Some(outing_id) = self.state.session.outing_id() {
            tracing::info!("leaving outing {outing_id}");
        }
        self.state.session.exit_outing();
        self.state.details = DetailsState::default();
        self.state.results = ResultsState::default();
        self.route().await;
        self.persist_session();
    }

    /// Writes the session file. The in-memory session keeps driving the
    /// client when the write fails; the failure shows on the current screen.
    fn persist_session(&mut self) {
        let Err(err) = self.store.save(&self.state.session) else {
            return;
        };
        tracing::warn!(
            "could not write session file {}: {err}",
            self.store.path().display()
        );
        let message = Some(format!("Error: {err}"));
        match self.state.screen {
            Screen::Join | Screen::Outings => self.state.join.message = message,
            Screen::Details | Screen::Results => self.state.details.message = message,
        }
    }

    async fn add_person(&mut self) {
        let name = self.state.join.name.trim().to_string();
        if name.is_empty() {
            self.state.join.message = Some("Type your name, then add yourself.".to_string());
            return;
        }

        match self.client.create_person(&name).await {
            Ok(person) => {
                let join = &mut self.state.join;
                join.message = Some(format!("Added {}.", person.name));
                match &mut join.people {
                    Remote::Ready(people) => {
                        people.push(person);
                        join.selected_person = Some(people.len() - 1);
                    }
                    other => {
                        *other = Remote::Ready(vec![person]);
                        join.selected_person = Some(0);
                    }
                }
            }
            Err(err) => self.state.join.message = Some(format!("Error: {err}")),
        }
    }

    async fn load_people(&mut self) {
        self.state.join.people = Remote::Loading;
        self.redraw();
        self.state.join.people = Remote::from_result(self.client.people().await);
        self.state.join.selected_person = None;
    }

    async fn load_outings(&mut self) {
        self.state.outings.items = Remote::Loading;
        self.redraw();
        self.state.outings.items = Remote::from_result(self.client.outings().await);
        self.state.outings.selected = 0;
    }

    fn pick_outing(&mut self) {
        let Some(outing) = self.state.outings.selected_outing() else {
            return;
        };
        self.state.join.join_code = outing.outing_id.to_string();
        self.state.join.focus = JoinField::JoinCode;
        self.state.join.message = Some(format!("Press Enter to join \"{}\".", outing.name));
        self.state.screen = Screen::Join;
    }

    async fn load_details(&mut self) {
        let Some(outing_id) = self.state.session.outing_id().cloned() else {
            return;
        };
        self.state.details.outing = Remote::Loading;
        self.redraw();
        self.state.details.outing = Remote::from_result(self.client.outing(&outing_id).await);
        self.load_activity(&outing_id).await;
    }

    /// Balance and expenses; the parts of the outing that change as people
    /// log expenses.
    async fn load_activity(&mut self, outing_id: &OutingId) {
        self.state.details.balance = Remote::Loading;
        self.state.details.expenses = Remote::Loading;
        self.redraw();
        let details = &mut self.state.details;
        details.balance = Remote::from_result(self.client.outing_balance(outing_id).await);
        details.expenses = Remote::from_result(self.client.outing_expenses(outing_id).await);
    }

    async fn submit_expense(&mut self) {
        if self.state.details.focus == ExpenseField::Description {
            self.state.details.focus = ExpenseField::Amount;
            return;
        }
        let Some(outing_id) = self.state.session.outing_id().cloned() else {
            return;
        };
        let viewer = self.state.session.user_name().unwrap_or_default().to_string();

        let payload = match self.state.details.draft.to_request(&outing_id, &viewer) {
            Ok(payload) => payload,
            Err(err) => {
                self.state.details.message = Some(err.to_string());
                return;
            }
        };

        match self.client.create_expense(&payload).await {
            Ok(expense) => {
                tracing::info!("expense {} added to {outing_id}", expense.expense_id);
                let details = &mut self.state.details;
                details.draft.clear();
                details.message = None;
                details.refresh += 1;
                self.load_activity(&outing_id).await;
            }
            Err(err) => self.state.details.message = Some(format!("Error: {err}")),
        }
    }

    async fn load_results(&mut self) {
        let Some(outing_id) = self.state.session.outing_id().cloned() else {
            return;
        };
        let results = &mut self.state.results;
        results.outing = Remote::Loading;
        results.balance = Remote::Loading;
        results.transfers = Remote::Loading;
        self.redraw();
        let results = &mut self.state.results;
        results.outing = Remote::from_result(self.client.outing(&outing_id).await);
        results.balance = Remote::from_result(self.client.outing_balance(&outing_id).await);
        results.transfers = Remote::from_result(self.client.finish_outing(&outing_id).await);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path},
    };

    use super::*;

    fn config_for(server: &MockServer, dir: &tempfile::TempDir) -> AppConfig {
        AppConfig {
            base_url: format!("{}/api", server.uri()),
            session_path: dir.path().join("session.json").display().to_string(),
            ..AppConfig::default()
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    async fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(key(KeyCode::Char(ch))).await;
        }
    }

    async fn mount_get(server: &MockServer, route: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    async fn mount_outing(server: &MockServer) {
        mount_get(
            server,
            "/api/outings/k3m9",
            json!({
                "outing_id": "k3m9",
                "created_at": "2023-02-11T18:30:00Z",
                "name": "Ski trip",
                "people": ["Ann", "Bob"],
            }),
        )
        .await;
        mount_get(server, "/api/outings/k3m9/balance", json!({ "total": 68.72 })).await;
        mount_get(
            server,
            "/api/outings/k3m9/expenses",
            json!([{
                "expense_id": 1,
                "created_at": "2023-02-11T18:31:00Z",
                "outing_id": "k3m9",
                "person_name": "Ann",
                "amount": 24.65,
                "description": "fizzbuzz",
            }]),
        )
        .await;
    }

    #[tokio::test]
    async fn fresh_start_lands_on_join() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_get(&server, "/api/people", json!([{ "person_id": 1, "name": "Ann" }])).await;

        let mut app = App::new(config_for(&server, &dir)).unwrap();
        app.start().await;

        assert_eq!(app.state.screen, Screen::Join);
        assert_eq!(app.state.server_ok, Some(false));
        assert_eq!(app.state.join.people.ready().map(Vec::len), Some(1));

        app.handle_key(key(KeyCode::Down)).await;
        assert_eq!(app.state.join.name, "Ann");
    }

    #[tokio::test]
    async fn joining_stores_identity_and_shows_outing() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_get(&server, "/api/people", json!([])).await;
        mount_outing(&server).await;
        Mock::given(method("PUT"))
            .and(path("/api/outings/k3m9/join"))
            .and(body_json(json!({ "name": "Bob" })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server, &dir);
        let mut app = App::new(config.clone()).unwrap();
        app.start().await;

        type_text(&mut app, "Bob").await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "K3M9").await;
        app.handle_key(key(KeyCode::Enter)).await;

        assert_eq!(app.state.screen, Screen::Details);
        assert_eq!(app.state.session.user_name(), Some("Bob"));
        assert!(app.state.details.error().is_none());
        assert_eq!(app.state.details.outing.ready().map(|o| o.name.as_str()), Some("Ski trip"));
        assert_eq!(app.state.details.expenses.ready().map(Vec::len), Some(1));

        let stored = SessionStore::new(&config.session_path).load();
        assert_eq!(stored, app.state.session);
    }

    #[tokio::test]
    async fn unwritable_session_file_keeps_the_client_running() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_get(&server, "/api/people", json!([])).await;
        mount_outing(&server).await;
        Mock::given(method("PUT"))
            .and(path("/api/outings/k3m9/join"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        // A regular file where the session directory should be.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let config = AppConfig {
            session_path: blocker.join("session.json").display().to_string(),
            ..config_for(&server, &dir)
        };

        let mut app = App::new(config).unwrap();
        app.start().await;
        type_text(&mut app, "Bob").await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "k3m9").await;
        app.handle_key(key(KeyCode::Enter)).await;

        assert!(!app.should_quit());
        assert_eq!(app.state.screen, Screen::Details);
        assert_eq!(app.state.session.user_name(), Some("Bob"));
        assert_eq!(app.state.session.outing_id().map(OutingId::as_str), Some("k3m9"));
        let message = app.state.details.message.as_deref().unwrap_or_default();
        assert!(message.starts_with("Error: Session storage failed"), "{message}");
        assert_eq!(app.state.details.outing.ready().map(|o| o.name.as_str()), Some("Ski trip"));

        app.handle_key(ctrl('x')).await;
        assert_eq!(app.state.screen, Screen::Join);
        assert_eq!(app.state.session.outing_id(), None);
        let message = app.state.join.message.as_deref().unwrap_or_default();
        assert!(message.starts_with("Error: Session storage failed"), "{message}");
    }

    #[tokio::test]
    async fn shift_tab_moves_focus_back() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        let mut app = App::new(config_for(&server, &dir)).unwrap();
        assert_eq!(app.state.join.focus, JoinField::Name);
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)).await;
        assert_eq!(app.state.join.focus, JoinField::OutingName);
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)).await;
        assert_eq!(app.state.join.focus, JoinField::JoinCode);
    }

    #[tokio::test]
    async fn join_without_code_only_hints() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_get(&server, "/api/people", json!([])).await;

        let mut app = App::new(config_for(&server, &dir)).unwrap();
        app.start().await;
        type_text(&mut app, "Bob").await;
        app.handle_key(key(KeyCode::Tab)).await;
        app.handle_key(key(KeyCode::Enter)).await;

        assert_eq!(app.state.screen, Screen::Join);
        assert_eq!(app.state.join.message.as_deref(), Some("Enter a join code first."));
        assert_eq!(app.state.session.outing_id(), None);
    }

    #[tokio::test]
    async fn stored_session_resumes_outing_and_adds_expense() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_outing(&server).await;
        Mock::given(method("POST"))
            .and(path("/api/expenses"))
            .and(body_json(json!({
                "outing_id": "k3m9",
                "person_name": "Ann",
                "amount": 12.5,
                "description": "hot cocoa",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "expense_id": 2,
                "created_at": "2023-02-11T19:00:00Z",
                "outing_id": "k3m9",
                "person_name": "Ann",
                "amount": 12.5,
                "description": "hot cocoa",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server, &dir);
        let mut session = engine::Session::default();
        session.enter_outing("Ann", OutingId::parse("k3m9").unwrap());
        SessionStore::new(&config.session_path).save(&session).unwrap();

        let mut app = App::new(config).unwrap();
        app.start().await;
        assert_eq!(app.state.screen, Screen::Details);

        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "hot   cocoa ").await;
        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(app.state.details.focus, ExpenseField::Amount);
        type_text(&mut app, "12.50").await;
        app.handle_key(key(KeyCode::Enter)).await;

        assert_eq!(app.state.details.refresh, 1);
        assert_eq!(app.state.details.message, None);
        assert!(app.state.details.draft.amount.is_empty());
    }

    #[tokio::test]
    async fn invalid_amount_is_not_sent() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_outing(&server).await;

        let config = config_for(&server, &dir);
        let mut session = engine::Session::default();
        session.enter_outing("Ann", OutingId::parse("k3m9").unwrap());
        SessionStore::new(&config.session_path).save(&session).unwrap();

        let mut app = App::new(config).unwrap();
        app.start().await;
        type_text(&mut app, "abc").await;
        app.handle_key(key(KeyCode::Enter)).await;

        assert_eq!(app.state.details.refresh, 0);
        assert!(app.state.details.message.is_some());
    }

    #[tokio::test]
    async fn finishing_classifies_for_the_viewer() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_outing(&server).await;
        mount_get(
            &server,
            "/api/outings/k3m9/finish",
            json!([
                { "from": "Bob", "to": "Cat", "amount": 3.8867 },
                { "from": "Cat", "to": "Ann", "amount": 1.7434 },
            ]),
        )
        .await;

        let config = config_for(&server, &dir);
        let mut session = engine::Session::default();
        session.enter_outing("Cat", OutingId::parse("k3m9").unwrap());
        SessionStore::new(&config.session_path).save(&session).unwrap();

        let mut app = App::new(config).unwrap();
        app.start().await;
        app.handle_key(ctrl('f')).await;

        assert_eq!(app.state.screen, Screen::Results);
        assert!(app.state.results.error().is_none());
        let settlement = app.state.results.settlement("Cat").unwrap();
        assert_eq!(settlement.owed_by_viewer.len(), 1);
        assert_eq!(settlement.owed_to_viewer.len(), 1);
        assert!(settlement.unrelated.is_empty());

        app.handle_key(key(KeyCode::Esc)).await;
        assert_eq!(app.state.screen, Screen::Details);
    }

    #[tokio::test]
    async fn finish_failure_short_circuits() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_outing(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/outings/k3m9/finish"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let config = config_for(&server, &dir);
        let mut session = engine::Session::default();
        session.enter_outing("Ann", OutingId::parse("k3m9").unwrap());
        SessionStore::new(&config.session_path).save(&session).unwrap();

        let mut app = App::new(config).unwrap();
        app.start().await;
        app.handle_key(ctrl('f')).await;

        assert_eq!(
            app.state.results.error(),
            Some("server error (500 Internal Server Error): boom")
        );
        assert!(app.state.results.settlement("Ann").is_none());
    }

    #[tokio::test]
    async fn exit_returns_to_join_and_keeps_name() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_outing(&server).await;
        mount_get(&server, "/api/people", json!([])).await;

        let config = config_for(&server, &dir);
        let mut session = engine::Session::default();
        session.enter_outing("Ann", OutingId::parse("k3m9").unwrap());
        SessionStore::new(&config.session_path).save(&session).unwrap();

        let mut app = App::new(config.clone()).unwrap();
        app.start().await;
        app.handle_key(ctrl('x')).await;

        assert_eq!(app.state.screen, Screen::Join);
        assert_eq!(app.state.join.name, "Ann");
        let stored = SessionStore::new(&config.session_path).load();
        assert_eq!(stored.outing_id(), None);
        assert_eq!(stored.user_name(), Some("Ann"));
    }

    #[tokio::test]
    async fn outing_browser_fills_join_code() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_get(&server, "/api/people", json!([])).await;
        mount_get(
            &server,
            "/api/outings",
            json!([
                { "outing_id": "aaaa", "created_at": "2023-02-10T10:00:00Z", "name": "Bar" },
                { "outing_id": "k3m9", "created_at": "2023-02-11T18:30:00Z", "name": "Ski trip" },
            ]),
        )
        .await;

        let mut app = App::new(config_for(&server, &dir)).unwrap();
        app.start().await;
        app.handle_key(ctrl('o')).await;
        assert_eq!(app.state.screen, Screen::Outings);

        app.handle_key(key(KeyCode::Down)).await;
        app.handle_key(key(KeyCode::Enter)).await;

        assert_eq!(app.state.screen, Screen::Join);
        assert_eq!(app.state.join.join_code, "k3m9");
        assert_eq!(app.state.join.focus, JoinField::JoinCode);
    }

    #[tokio::test]
    async fn quit_chord_stops_the_loop() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        let mut app = App::new(config_for(&server, &dir)).unwrap();
        type_text(&mut app, "q").await;
        assert!(!app.should_quit());
        app.handle_key(ctrl('c')).await;
        assert!(app.should_quit());
    }
}
