use crate::state::fixture::{Side, WindowQuery};
use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use futnorte_api::{CreateMatchRequest, Match, Player, Team, Tournament, UpdateMatchRequest};

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    /// Periodic re-fetch of whatever view is active.
    RefreshTick,
}

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    /// Tournament header + team list, fetched together on startup.
    LoadBoard { tournament_id: u32 },
    /// Windowed fetch; optionally falls back to the full tournament fixture
    /// when the windowed endpoint fails (initial load behavior).
    FetchWindow { query: WindowQuery, fall_back_to_all: bool },
    FetchAll { tournament_id: u32, epoch: u64 },
    CreateMatch { request: CreateMatchRequest },
    UpdateMatch { match_id: u32, request: UpdateMatchRequest },
    DeleteMatch { match_id: u32 },
    /// Both rosters for the match open in the edit form; each side is
    /// best-effort and independent.
    LoadRosters { home_team_id: u32, away_team_id: u32 },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    BoardLoaded { tournament: Tournament, teams: Vec<Team> },
    /// A working-set replacement; the store drops it if the epoch is stale.
    MatchesLoaded { epoch: u64, tournament_id: u32, matches: Vec<Match> },
    MatchCreated { created: Match },
    MatchUpdated { updated: Match },
    MatchDeleted { match_id: u32 },
    RosterLoaded { side: Side, players: Vec<Player> },
    Error { message: String },
}
