use crate::state::app_settings::AppSettings;
use crate::state::fixture::{FixtureStore, MatchQuery, Side};
use crate::state::form::{FormMode, MatchForm};
use crate::state::messages::NetworkRequest;
use chrono::{Days, Local, NaiveDate};
use futnorte_api::{Match, Player, Team, Tournament};
use log::debug;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Board,
    Help,
}

/// Which status column holds the selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusPanel {
    #[default]
    Scheduled,
    Finalized,
    Postponed,
}

impl StatusPanel {
    pub fn next(self) -> StatusPanel {
        match self {
            StatusPanel::Scheduled => StatusPanel::Finalized,
            StatusPanel::Finalized => StatusPanel::Postponed,
            StatusPanel::Postponed => StatusPanel::Scheduled,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StatusPanel::Scheduled => "Programados",
            StatusPanel::Finalized => "Finalizados",
            StatusPanel::Postponed => "Aplazados",
        }
    }
}

#[derive(Debug, Default)]
pub enum Modal {
    #[default]
    None,
    Form(MatchForm),
    ConfirmDelete { match_id: u32, label: String },
}

pub struct App {
    pub settings: AppSettings,
    pub tournament_id: u32,
    pub store: FixtureStore,
    pub modal: Modal,
    pub active_tab: MenuItem,
    pub panel: StatusPanel,
    pub selected: usize,
    pub show_logs: bool,
    pub last_error: Option<String>,
}

impl App {
    pub fn new(tournament_id: u32) -> Self {
        let settings = AppSettings::load();

        if let Some(level) = settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        Self {
            settings,
            tournament_id,
            store: FixtureStore::new(),
            modal: Modal::None,
            active_tab: MenuItem::Board,
            panel: StatusPanel::Scheduled,
            selected: 0,
            show_logs: false,
            last_error: None,
        }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from the main loop
    // -----------------------------------------------------------------------

    pub fn on_board_loaded(&mut self, tournament: Tournament, teams: Vec<Team>) {
        self.last_error = None;
        debug!("board loaded: {} teams", teams.len());
        self.store.apply_board(tournament, teams);
    }

    pub fn on_matches_loaded(&mut self, epoch: u64, tournament_id: u32, matches: Vec<Match>) {
        if self.store.apply_matches(epoch, tournament_id, matches) {
            self.last_error = None;
            self.clamp_selection();
        }
    }

    pub fn on_match_created(&mut self, created: Match) {
        self.last_error = None;
        self.store.apply_created(created);
        if matches!(&self.modal, Modal::Form(form) if form.mode == FormMode::Create) {
            self.modal = Modal::None;
        }
    }

    pub fn on_match_updated(&mut self, updated: Match) {
        self.last_error = None;
        let id = updated.id;
        self.store.apply_updated(updated);
        if matches!(&self.modal, Modal::Form(form) if form.mode == (FormMode::Edit { match_id: id }))
        {
            self.modal = Modal::None;
            self.store.clear_rosters();
        }
        self.clamp_selection();
    }

    pub fn on_match_deleted(&mut self, match_id: u32) {
        self.last_error = None;
        self.store.apply_removed(match_id);
        if matches!(&self.modal, Modal::ConfirmDelete { match_id: id, .. } if *id == match_id) {
            self.modal = Modal::None;
        }
        self.clamp_selection();
    }

    pub fn on_roster_loaded(&mut self, side: Side, players: Vec<Player>) {
        self.store.apply_roster(side, players);
    }

    /// A failed operation: surface the message, unstick every pending flag,
    /// keep any open modal so the operator can correct and retry.
    pub fn on_error(&mut self, message: String) {
        self.last_error = Some(message);
        self.store.clear_pending();
    }

    // -----------------------------------------------------------------------
    // Board selection
    // -----------------------------------------------------------------------

    pub fn visible(&self) -> Vec<&Match> {
        match self.panel {
            StatusPanel::Scheduled => self.store.scheduled(),
            StatusPanel::Finalized => self.store.finalized(),
            StatusPanel::Postponed => self.store.postponed(),
        }
    }

    pub fn selected_match(&self) -> Option<&Match> {
        self.visible().get(self.selected).copied()
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn cycle_panel(&mut self) {
        self.panel = self.panel.next();
        self.selected = 0;
    }

    pub fn select_down(&mut self) {
        let max = self.visible().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    // -----------------------------------------------------------------------
    // Intents — return the request(s) the caller should dispatch
    // -----------------------------------------------------------------------

    /// Startup: board data plus the default current-weekend window, which
    /// falls back to the full fixture when the windowed fetch fails.
    pub fn start_initial_load(&mut self) -> Vec<NetworkRequest> {
        self.store.loading = true;
        let query = self.store.initial_window(self.tournament_id, Self::today());
        vec![
            NetworkRequest::LoadBoard { tournament_id: self.tournament_id },
            NetworkRequest::FetchWindow { query, fall_back_to_all: true },
        ]
    }

    /// Re-issue the active view's fetch (manual or periodic refresh).
    pub fn start_refresh(&mut self) -> NetworkRequest {
        self.store.loading = true;
        match self.store.refresh_query(self.tournament_id) {
            MatchQuery::Window(query) => {
                NetworkRequest::FetchWindow { query, fall_back_to_all: false }
            }
            MatchQuery::All { tournament_id, epoch } => {
                NetworkRequest::FetchAll { tournament_id, epoch }
            }
        }
    }

    pub fn set_week_shortcut(&mut self) {
        self.store.set_week_shortcut(Self::today());
    }

    pub fn set_month_shortcut(&mut self) {
        self.store.set_month_shortcut(Self::today());
    }

    pub fn adjust_window_start(&mut self, days: i64) {
        self.adjust_window(days, 0);
    }

    pub fn adjust_window_end(&mut self, days: i64) {
        self.adjust_window(0, days);
    }

    fn adjust_window(&mut self, start_days: i64, end_days: i64) {
        if self.store.window_start.is_none() || self.store.window_end.is_none() {
            self.set_week_shortcut();
        }
        let (Some(start), Some(end)) = (self.store.window_start, self.store.window_end) else {
            return;
        };
        let shifted = |date: NaiveDate, days: i64| {
            if days >= 0 {
                date.checked_add_days(Days::new(days.unsigned_abs()))
            } else {
                date.checked_sub_days(Days::new(days.unsigned_abs()))
            }
            .unwrap_or(date)
        };
        if let Err(e) = self.store.set_window(shifted(start, start_days), shifted(end, end_days)) {
            self.last_error = Some(e.to_string());
        } else {
            self.last_error = None;
        }
    }

    pub fn apply_filter(&mut self) -> Option<NetworkRequest> {
        match self.store.window_query(self.tournament_id) {
            Ok(query) => {
                self.store.filtering = true;
                self.last_error = None;
                Some(NetworkRequest::FetchWindow { query, fall_back_to_all: false })
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                None
            }
        }
    }

    pub fn clear_filter(&mut self) -> NetworkRequest {
        self.store.loading = true;
        match self.store.clear_filter(self.tournament_id) {
            MatchQuery::All { tournament_id, epoch } => {
                NetworkRequest::FetchAll { tournament_id, epoch }
            }
            // clear_filter always drops the bounds.
            MatchQuery::Window(query) => NetworkRequest::FetchWindow { query, fall_back_to_all: false },
        }
    }

    pub fn open_create_form(&mut self) {
        if self.store.teams.is_empty() {
            self.last_error = Some("the team list has not loaded yet".into());
            return;
        }
        self.modal = Modal::Form(MatchForm::create());
    }

    /// Open the edit form for the selected match and kick off both roster
    /// fetches so the scorer pickers fill in as they arrive.
    pub fn open_edit_form(&mut self) -> Option<NetworkRequest> {
        let m = self.selected_match()?.clone();
        self.store.clear_rosters();
        self.modal = Modal::Form(MatchForm::edit(&m));
        Some(NetworkRequest::LoadRosters {
            home_team_id: m.home_team_id,
            away_team_id: m.away_team_id,
        })
    }

    pub fn open_delete_confirm(&mut self) {
        if let Some(m) = self.selected_match() {
            self.modal = Modal::ConfirmDelete {
                match_id: m.id,
                label: format!("{} vs {}", m.home_team, m.away_team),
            };
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
        self.store.clear_rosters();
    }

    /// Validate the open form; a clean form becomes a request and flips the
    /// matching pending flag, a dirty one keeps its errors for display.
    pub fn submit_form(&mut self) -> Option<NetworkRequest> {
        if self.store.busy() {
            return None; // one mutation in flight at a time
        }
        let tournament_id = self.tournament_id;
        let Modal::Form(form) = &mut self.modal else {
            return None;
        };
        match form.mode {
            FormMode::Create => match form.validate_create(tournament_id) {
                Ok(request) => {
                    form.errors.clear();
                    self.store.creating = true;
                    Some(NetworkRequest::CreateMatch { request })
                }
                Err(errors) => {
                    form.errors = errors;
                    None
                }
            },
            FormMode::Edit { match_id } => match form.validate_update() {
                Ok(request) => {
                    form.errors.clear();
                    self.store.updating = true;
                    Some(NetworkRequest::UpdateMatch { match_id, request })
                }
                Err(errors) => {
                    form.errors = errors;
                    None
                }
            },
        }
    }

    pub fn confirm_delete(&mut self) -> Option<NetworkRequest> {
        if self.store.busy() {
            return None;
        }
        let Modal::ConfirmDelete { match_id, .. } = &self.modal else {
            return None;
        };
        let match_id = *match_id;
        self.store.deleting = true;
        Some(NetworkRequest::DeleteMatch { match_id })
    }

    /// Dump the whole fixture, venue by venue, into the log pane — the
    /// closest thing a terminal gets to the printed field schedule.
    pub fn export_fixture(&mut self) {
        for m in self.store.all_ordered() {
            log::info!(
                "{} | {} | {} {} {}",
                m.venue,
                m.kickoff.format("%d/%m/%Y %H:%M"),
                m.home_team,
                m.score_label(),
                m.away_team,
            );
        }
        self.show_logs = true;
    }

    // -----------------------------------------------------------------------
    // Tabs and toggles
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        self.active_tab = next;
    }

    pub fn exit_help(&mut self) {
        if self.active_tab == MenuItem::Help {
            self.active_tab = MenuItem::Board;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }
}
