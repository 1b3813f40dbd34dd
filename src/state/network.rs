use crate::state::messages::{NetworkRequest, NetworkResponse};
use crate::state::fixture::Side;
use futnorte_api::client::LeagueApi;
use log::{debug, error};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Owns the API client and executes network requests one at a time, in
/// arrival order. Results (or contextual error messages) flow back to the
/// main loop as responses; the worker never touches app state itself.
pub struct NetworkWorker {
    client: LeagueApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    is_loading: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client: LeagueApi::new(),
            requests,
            responses,
            is_loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            self.start_loading_animation().await;

            let result = self.handle(request).await;

            debug!("network request complete");
            self.stop_loading_animation(result.is_ok()).await;

            let batch = result.unwrap_or_else(|message| vec![NetworkResponse::Error { message }]);
            for response in batch {
                if let Err(e) = self.responses.send(response).await {
                    error!("Failed to send network response: {e}");
                    return;
                }
            }
        }
    }

    async fn handle(&self, request: NetworkRequest) -> Result<Vec<NetworkResponse>, String> {
        match request {
            NetworkRequest::LoadBoard { tournament_id } => {
                debug!("loading board data for tournament {tournament_id}");
                let (tournament, teams) = tokio::join!(
                    self.client.fetch_tournament(tournament_id),
                    self.client.teams_by_tournament(tournament_id),
                );
                let tournament =
                    tournament.map_err(|e| format!("could not load the tournament: {e}"))?;
                let teams = teams.map_err(|e| format!("could not load the team list: {e}"))?;
                Ok(vec![NetworkResponse::BoardLoaded { tournament, teams }])
            }

            NetworkRequest::FetchWindow { query, fall_back_to_all } => {
                debug!("fetching matches between {} and {}", query.start, query.end);
                match self.client.matches_between(query.start, query.end).await {
                    Ok(matches) => Ok(vec![NetworkResponse::MatchesLoaded {
                        epoch: query.epoch,
                        tournament_id: query.tournament_id,
                        matches,
                    }]),
                    Err(e) if fall_back_to_all => {
                        debug!("windowed fetch failed ({e}); falling back to the full fixture");
                        let matches = self
                            .client
                            .matches_by_tournament(query.tournament_id)
                            .await
                            .map_err(|e| format!("could not load the fixture: {e}"))?;
                        Ok(vec![NetworkResponse::MatchesLoaded {
                            epoch: query.epoch,
                            tournament_id: query.tournament_id,
                            matches,
                        }])
                    }
                    Err(e) => Err(format!("could not filter matches by date: {e}")),
                }
            }

            NetworkRequest::FetchAll { tournament_id, epoch } => {
                debug!("fetching the full fixture for tournament {tournament_id}");
                let matches = self
                    .client
                    .matches_by_tournament(tournament_id)
                    .await
                    .map_err(|e| format!("could not load the fixture: {e}"))?;
                Ok(vec![NetworkResponse::MatchesLoaded { epoch, tournament_id, matches }])
            }

            NetworkRequest::CreateMatch { request } => {
                let created = self
                    .client
                    .create_match(&request)
                    .await
                    .map_err(|e| format!("could not create the match: {e}"))?;
                Ok(vec![NetworkResponse::MatchCreated { created }])
            }

            NetworkRequest::UpdateMatch { match_id, request } => {
                let updated = self
                    .client
                    .update_match(match_id, &request)
                    .await
                    .map_err(|e| format!("could not update the match: {e}"))?;
                Ok(vec![NetworkResponse::MatchUpdated { updated }])
            }

            NetworkRequest::DeleteMatch { match_id } => {
                self.client
                    .delete_match(match_id)
                    .await
                    .map_err(|e| format!("could not delete the match: {e}"))?;
                Ok(vec![NetworkResponse::MatchDeleted { match_id }])
            }

            NetworkRequest::LoadRosters { home_team_id, away_team_id } => {
                debug!("loading rosters for teams {home_team_id} and {away_team_id}");
                let (home, away) = tokio::join!(
                    self.client.players_by_team(home_team_id),
                    self.client.players_by_team(away_team_id),
                );
                // Best-effort per side; a failed roster leaves its picker
                // empty without blocking the other one.
                let mut batch = Vec::new();
                match home {
                    Ok(players) => {
                        batch.push(NetworkResponse::RosterLoaded { side: Side::Home, players })
                    }
                    Err(e) => error!("could not load the home roster: {e}"),
                }
                match away {
                    Ok(players) => {
                        batch.push(NetworkResponse::RosterLoaded { side: Side::Away, players })
                    }
                    Err(e) => error!("could not load the away roster: {e}"),
                }
                Ok(batch)
            }
        }
    }

    async fn start_loading_animation(&self) {
        self.is_loading.store(true, Ordering::Relaxed);

        let mut loading_state = LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let is_loading = self.is_loading.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if !is_loading.load(Ordering::Relaxed) {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }

    async fn stop_loading_animation(&self, is_ok: bool) {
        self.is_loading.store(false, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged {
                loading_state: LoadingState { is_loading: false, spinner_char },
            })
            .await;
    }
}
