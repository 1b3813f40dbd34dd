use crate::wire::{
    ActualizarEnfrentamientoBody, CrearEnfrentamientoBody, EnfrentamientoWire, EquipoWire,
    GolJugadorBody, GolJugadorWire, JugadorWire, TorneoWire,
};
use crate::{
    CreateMatchRequest, Match, MatchStatus, Player, ScorerLine, Team, Tournament,
    UpdateMatchRequest,
};
use chrono::NaiveDateTime;
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
/// `fechaHora` wire format; the backend speaks naive local instants.
const WIRE_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";
/// Read operations are retried on connectivity/5xx failures; mutations never are.
const READ_ATTEMPTS: u32 = 3;

/// FutNorte league API client.
#[derive(Debug, Clone)]
pub struct LeagueApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for LeagueApi {
    fn default() -> Self {
        let base_url = std::env::var("FUTNORTE_API_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self {
            client: Client::builder()
                .user_agent("futnorte/0.1 (terminal fixture console)")
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    NotFound(String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl LeagueApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client against an explicit base URL; used by tests and non-default
    /// deployments.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            ..Self::default()
        }
    }

    // -----------------------------------------------------------------------
    // Enfrentamientos
    // -----------------------------------------------------------------------

    pub async fn create_match(&self, request: &CreateMatchRequest) -> ApiResult<Match> {
        let url = format!("{}/enfrentamientos", self.base_url);
        let body = to_create_body(request);
        let builder = self.client.post(&url).json(&body);
        let raw: EnfrentamientoWire = self.send_once(builder, &url).await?;
        map_match(raw, &url)
    }

    pub async fn fetch_match(&self, id: u32) -> ApiResult<Match> {
        let url = format!("{}/enfrentamientos/{id}", self.base_url);
        let raw: EnfrentamientoWire = self.get(&url).await?;
        map_match(raw, &url)
    }

    pub async fn update_match(&self, id: u32, request: &UpdateMatchRequest) -> ApiResult<Match> {
        let url = format!("{}/enfrentamientos/{id}", self.base_url);
        let body = to_update_body(request);
        let builder = self.client.put(&url).json(&body);
        let raw: EnfrentamientoWire = self.send_once(builder, &url).await?;
        map_match(raw, &url)
    }

    pub async fn delete_match(&self, id: u32) -> ApiResult<()> {
        let url = format!("{}/enfrentamientos/{id}", self.base_url);
        let response = self
            .client
            .delete(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.clone()))?;
        response
            .error_for_status()
            .map(|_| ())
            .map_err(|e| status_error(e, &url))
    }

    pub async fn matches_by_tournament(&self, tournament_id: u32) -> ApiResult<Vec<Match>> {
        let url = format!("{}/enfrentamientos/torneo/{tournament_id}", self.base_url);
        let raw: Vec<EnfrentamientoWire> = self.get(&url).await?;
        raw.into_iter().map(|e| map_match(e, &url)).collect()
    }

    pub async fn matches_by_team(&self, team_id: u32) -> ApiResult<Vec<Match>> {
        let url = format!("{}/enfrentamientos/equipo/{team_id}", self.base_url);
        let raw: Vec<EnfrentamientoWire> = self.get(&url).await?;
        raw.into_iter().map(|e| map_match(e, &url)).collect()
    }

    /// Matches with `start <= kickoff < end`; the end bound is exclusive on
    /// the wire. Callers with inclusive day semantics expand it first.
    pub async fn matches_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> ApiResult<Vec<Match>> {
        let url = format!(
            "{}/enfrentamientos/fecha?fechaInicio={}&fechaFin={}",
            self.base_url,
            fmt_wire_datetime(start),
            fmt_wire_datetime(end),
        );
        let raw: Vec<EnfrentamientoWire> = self.get(&url).await?;
        raw.into_iter().map(|e| map_match(e, &url)).collect()
    }

    // -----------------------------------------------------------------------
    // Rosters and picker lookups
    // -----------------------------------------------------------------------

    pub async fn players_by_team(&self, team_id: u32) -> ApiResult<Vec<Player>> {
        let url = format!("{}/jugadores/equipo/{team_id}", self.base_url);
        let raw: Vec<JugadorWire> = self.get(&url).await?;
        Ok(raw.into_iter().map(map_player).collect())
    }

    pub async fn teams_by_tournament(&self, tournament_id: u32) -> ApiResult<Vec<Team>> {
        let url = format!("{}/equipos/torneo/{tournament_id}", self.base_url);
        let raw: Vec<EquipoWire> = self.get(&url).await?;
        Ok(raw.into_iter().map(map_team).collect())
    }

    pub async fn fetch_tournament(&self, id: u32) -> ApiResult<Tournament> {
        let url = format!("{}/torneos/{id}", self.base_url);
        let raw: TorneoWire = self.get(&url).await?;
        Ok(Tournament { id: raw.id.unwrap_or(id), name: raw.nombre.unwrap_or_default() })
    }

    // -----------------------------------------------------------------------
    // Transport helpers
    // -----------------------------------------------------------------------

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let mut last_error = None;
        for attempt in 1..=READ_ATTEMPTS {
            match self.get_once(url).await {
                Ok(value) => return Ok(value),
                Err(e) if retryable(&e) && attempt < READ_ATTEMPTS => last_error = Some(e),
                Err(e) => return Err(e),
            }
        }
        Err(last_error.unwrap_or_else(|| ApiError::Other(format!("no attempts made for {url}"))))
    }

    async fn get_once<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let builder = self.client.get(url);
        self.send_once(builder, url).await
    }

    async fn send_once<T: serde::de::DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        url: &str,
    ) -> ApiResult<T> {
        let response = builder
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => Err(status_error(e, url)),
        }
    }
}

fn status_error(e: reqwest::Error, url: &str) -> ApiError {
    if e.status() == Some(StatusCode::NOT_FOUND) {
        ApiError::NotFound(url.to_owned())
    } else {
        ApiError::Api(e, url.to_owned())
    }
}

fn retryable(e: &ApiError) -> bool {
    match e {
        ApiError::Network(..) => true,
        ApiError::Api(e, _) => e.status().map(|s| s.is_server_error()).unwrap_or(false),
        ApiError::Parsing(..) | ApiError::NotFound(..) | ApiError::Other(..) => false,
    }
}

// ---------------------------------------------------------------------------
// Mapping: league wire types → clean domain types
// ---------------------------------------------------------------------------

pub(crate) fn fmt_wire_datetime(dt: NaiveDateTime) -> String {
    dt.format(WIRE_DATETIME).to_string()
}

/// The backend emits second precision; the console's datetime inputs emit
/// minute precision. Accept both.
pub fn parse_wire_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, WIRE_DATETIME)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Map one match response. Score fields of non-finalized matches are forced
/// empty: they carry no meaning outside the Finalized state, whatever the
/// payload says.
fn map_match(raw: EnfrentamientoWire, url: &str) -> ApiResult<Match> {
    let kickoff_raw = raw
        .fecha_hora
        .ok_or_else(|| ApiError::Other(format!("match response from {url} missing fechaHora")))?;
    let kickoff = parse_wire_datetime(&kickoff_raw)
        .ok_or_else(|| ApiError::Other(format!("invalid fechaHora '{kickoff_raw}' from {url}")))?;

    let status = raw
        .estado
        .as_deref()
        .and_then(MatchStatus::from_wire)
        .unwrap_or_default();

    let mut m = Match {
        id: raw.id.unwrap_or_default(),
        tournament_id: raw.torneo_id.unwrap_or_default(),
        home_team_id: raw.equipo_local_id.unwrap_or_default(),
        away_team_id: raw.equipo_visitante_id.unwrap_or_default(),
        home_team: raw.equipo_local.unwrap_or_default(),
        away_team: raw.equipo_visitante.unwrap_or_default(),
        kickoff,
        venue: raw.cancha.unwrap_or_default(),
        status,
        home_score: raw.goles_local,
        away_score: raw.goles_visitante,
        home_scorers: raw.goles_jugadores_local.into_iter().map(map_scorer).collect(),
        away_scorers: raw.goles_jugadores_visitante.into_iter().map(map_scorer).collect(),
    };

    if m.status != MatchStatus::Finalized {
        m.home_score = None;
        m.away_score = None;
        m.home_scorers.clear();
        m.away_scorers.clear();
    }

    Ok(m)
}

fn map_scorer(raw: GolJugadorWire) -> ScorerLine {
    ScorerLine {
        player_id: raw.jugador_id.unwrap_or_default(),
        name: raw.nombre_jugador.unwrap_or_default(),
        surname: raw.apellido_jugador.unwrap_or_default(),
        goals: raw.cantidad_goles.unwrap_or_default(),
    }
}

fn map_player(raw: JugadorWire) -> Player {
    Player {
        id: raw.id.unwrap_or_default(),
        name: raw.nombre.unwrap_or_default(),
        surname: raw.apellido.unwrap_or_default(),
        identification: raw.identificacion.unwrap_or_default(),
        nationality: raw.nacionalidad.unwrap_or_default(),
        team_id: raw.equipo_id.unwrap_or_default(),
    }
}

fn map_team(raw: EquipoWire) -> Team {
    Team { id: raw.id.unwrap_or_default(), name: raw.nombre.unwrap_or_default() }
}

fn to_create_body(request: &CreateMatchRequest) -> CrearEnfrentamientoBody {
    CrearEnfrentamientoBody {
        torneo_id: request.tournament_id,
        equipo_local_id: request.home_team_id,
        equipo_visitante_id: request.away_team_id,
        fecha_hora: fmt_wire_datetime(request.kickoff),
        cancha: request.venue.clone(),
    }
}

fn to_update_body(request: &UpdateMatchRequest) -> ActualizarEnfrentamientoBody {
    let to_rows = |entries: &Vec<crate::ScorerEntry>| {
        entries
            .iter()
            .map(|e| GolJugadorBody { jugador_id: e.player_id, cantidad_goles: e.goals })
            .collect::<Vec<_>>()
    };
    ActualizarEnfrentamientoBody {
        fecha_hora: request.kickoff.map(fmt_wire_datetime),
        cancha: request.venue.clone(),
        estado: request.status.map(|s| s.as_wire().to_owned()),
        goles_local: request.home_score,
        goles_visitante: request.away_score,
        goles_jugadores_local: request.home_scorers.as_ref().map(to_rows),
        goles_jugadores_visitante: request.away_scorers.as_ref().map(to_rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScorerEntry;
    use chrono::NaiveDate;
    use mockito::Matcher;
    use serde_json::json;

    fn kickoff(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, 0).unwrap()
    }

    fn finalized_json() -> serde_json::Value {
        json!({
            "id": 41,
            "torneoId": 7,
            "equipoLocalId": 1,
            "equipoVisitanteId": 2,
            "equipoLocal": "Atlético Norte",
            "equipoVisitante": "Deportivo Sur",
            "fechaHora": "2026-03-07T15:00:00",
            "cancha": "Cancha Principal",
            "estado": "FINALIZADO",
            "golesLocal": 3,
            "golesVisitante": 1,
            "golesJugadoresLocal": [
                { "jugadorId": 10, "nombreJugador": "Luis", "apellidoJugador": "Rojas", "cantidadGoles": 2 },
                { "jugadorId": 11, "nombreJugador": "Iván", "apellidoJugador": "Mera", "cantidadGoles": 1 }
            ],
            "golesJugadoresVisitante": [
                { "jugadorId": 20, "nombreJugador": "Joel", "apellidoJugador": "Paz", "cantidadGoles": 1 }
            ]
        })
    }

    #[test]
    fn wire_datetime_round_trips_and_accepts_minute_precision() {
        let dt = kickoff(2026, 3, 7, 15, 0);
        assert_eq!(fmt_wire_datetime(dt), "2026-03-07T15:00:00");
        assert_eq!(parse_wire_datetime("2026-03-07T15:00:00"), Some(dt));
        assert_eq!(parse_wire_datetime("2026-03-07T15:00"), Some(dt));
        assert_eq!(parse_wire_datetime("07/03/2026"), None);
    }

    #[test]
    fn map_match_keeps_score_data_for_finalized() {
        let raw: EnfrentamientoWire = serde_json::from_value(finalized_json()).unwrap();
        let m = map_match(raw, "test").unwrap();
        assert_eq!(m.status, MatchStatus::Finalized);
        assert_eq!(m.home_score, Some(3));
        assert_eq!(m.away_score, Some(1));
        assert_eq!(crate::scorer_goal_total(&m.home_scorers), 3);
        assert_eq!(crate::scorer_goal_total(&m.away_scorers), 1);
        assert_eq!(m.home_team_id, 1);
        assert_eq!(m.away_team_id, 2);
    }

    #[test]
    fn map_match_clears_score_data_for_non_finalized() {
        // A postponed match whose payload still drags old score data along.
        let mut value = finalized_json();
        value["estado"] = json!("APLAZADO");
        let raw: EnfrentamientoWire = serde_json::from_value(value).unwrap();
        let m = map_match(raw, "test").unwrap();
        assert_eq!(m.status, MatchStatus::Postponed);
        assert_eq!(m.home_score, None);
        assert_eq!(m.away_score, None);
        assert!(m.home_scorers.is_empty());
        assert!(m.away_scorers.is_empty());
    }

    #[test]
    fn map_match_rejects_missing_or_garbled_kickoff() {
        let mut value = finalized_json();
        value["fechaHora"] = json!("whenever");
        let raw: EnfrentamientoWire = serde_json::from_value(value).unwrap();
        assert!(map_match(raw, "test").is_err());

        let raw = EnfrentamientoWire { id: Some(1), ..Default::default() };
        assert!(map_match(raw, "test").is_err());
    }

    #[tokio::test]
    async fn create_then_list_round_trips_the_match() {
        let mut server = mockito::Server::new_async().await;
        let api = LeagueApi::with_base_url(server.url());

        let created = json!({
            "id": 55,
            "torneoId": 7,
            "equipoLocalId": 1,
            "equipoVisitanteId": 2,
            "equipoLocal": "Atlético Norte",
            "equipoVisitante": "Deportivo Sur",
            "fechaHora": "2026-03-08T15:00:00",
            "cancha": "Cancha 1",
            "estado": "PROGRAMADO"
        });

        let create_mock = server
            .mock("POST", "/enfrentamientos")
            .match_body(Matcher::Json(json!({
                "torneoId": 7,
                "equipoLocalId": 1,
                "equipoVisitanteId": 2,
                "fechaHora": "2026-03-08T15:00:00",
                "cancha": "Cancha 1"
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(created.to_string())
            .create_async()
            .await;

        let list_mock = server
            .mock("GET", "/enfrentamientos/torneo/7")
            .with_header("content-type", "application/json")
            .with_body(json!([created]).to_string())
            .create_async()
            .await;

        let request = CreateMatchRequest {
            tournament_id: 7,
            home_team_id: 1,
            away_team_id: 2,
            kickoff: kickoff(2026, 3, 8, 15, 0),
            venue: "Cancha 1".to_owned(),
        };
        let m = api.create_match(&request).await.unwrap();
        assert_eq!(m.id, 55);
        assert_eq!(m.venue, "Cancha 1");
        assert_eq!(m.status, MatchStatus::Scheduled);

        let listed = api.matches_by_tournament(7).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, m.id);
        assert_eq!(listed[0].kickoff, m.kickoff);
        assert_eq!(listed[0].home_team, m.home_team);

        create_mock.assert_async().await;
        list_mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_body_omits_score_fields_for_non_finalized_target() {
        let mut server = mockito::Server::new_async().await;
        let api = LeagueApi::with_base_url(server.url());

        // Exact-body matcher: serialization must not leak null score fields.
        let mock = server
            .mock("PUT", "/enfrentamientos/41")
            .match_body(Matcher::Json(json!({
                "fechaHora": "2026-03-14T16:30:00",
                "cancha": "Cancha Norte",
                "estado": "APLAZADO"
            })))
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": 41,
                    "torneoId": 7,
                    "equipoLocalId": 1,
                    "equipoVisitanteId": 2,
                    "fechaHora": "2026-03-14T16:30:00",
                    "cancha": "Cancha Norte",
                    "estado": "APLAZADO"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let request = UpdateMatchRequest {
            kickoff: Some(kickoff(2026, 3, 14, 16, 30)),
            venue: Some("Cancha Norte".to_owned()),
            status: Some(MatchStatus::Postponed),
            ..Default::default()
        };
        let m = api.update_match(41, &request).await.unwrap();
        assert_eq!(m.status, MatchStatus::Postponed);
        assert_eq!(m.home_score, None);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_body_carries_scorer_breakdown_for_finalized_target() {
        let mut server = mockito::Server::new_async().await;
        let api = LeagueApi::with_base_url(server.url());

        let mock = server
            .mock("PUT", "/enfrentamientos/41")
            .match_body(Matcher::Json(json!({
                "fechaHora": "2026-03-07T15:00:00",
                "cancha": "Cancha Principal",
                "estado": "FINALIZADO",
                "golesLocal": 3,
                "golesVisitante": 1,
                "golesJugadoresLocal": [
                    { "jugadorId": 10, "cantidadGoles": 2 },
                    { "jugadorId": 11, "cantidadGoles": 1 }
                ],
                "golesJugadoresVisitante": [
                    { "jugadorId": 20, "cantidadGoles": 1 }
                ]
            })))
            .with_header("content-type", "application/json")
            .with_body(finalized_json().to_string())
            .create_async()
            .await;

        let request = UpdateMatchRequest {
            kickoff: Some(kickoff(2026, 3, 7, 15, 0)),
            venue: Some("Cancha Principal".to_owned()),
            status: Some(MatchStatus::Finalized),
            home_score: Some(3),
            away_score: Some(1),
            home_scorers: Some(vec![
                ScorerEntry { player_id: 10, goals: 2 },
                ScorerEntry { player_id: 11, goals: 1 },
            ]),
            away_scorers: Some(vec![ScorerEntry { player_id: 20, goals: 1 }]),
        };
        let m = api.update_match(41, &request).await.unwrap();
        assert_eq!(m.home_score, Some(3));
        assert_eq!(m.home_scorers.len(), 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn date_window_query_uses_wire_parameter_names() {
        let mut server = mockito::Server::new_async().await;
        let api = LeagueApi::with_base_url(server.url());

        let mock = server
            .mock("GET", "/enfrentamientos/fecha")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("fechaInicio".into(), "2026-03-07T00:00:00".into()),
                Matcher::UrlEncoded("fechaFin".into(), "2026-03-10T00:00:00".into()),
            ]))
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let start = kickoff(2026, 3, 7, 0, 0);
        let end = kickoff(2026, 3, 10, 0, 0);
        let matches = api.matches_between(start, end).await.unwrap();
        assert!(matches.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn team_listing_hits_the_equipo_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let api = LeagueApi::with_base_url(server.url());

        let mock = server
            .mock("GET", "/enfrentamientos/equipo/2")
            .with_header("content-type", "application/json")
            .with_body(json!([finalized_json()]).to_string())
            .create_async()
            .await;

        let matches = api.matches_by_team(2).await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].away_team_id, 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_match_maps_to_not_found() {
        let mut server = mockito::Server::new_async().await;
        let api = LeagueApi::with_base_url(server.url());

        let _mock = server
            .mock("GET", "/enfrentamientos/999")
            .with_status(404)
            .create_async()
            .await;

        match api.fetch_match(999).await {
            Err(ApiError::NotFound(_)) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn reads_retry_on_server_errors_then_give_up() {
        let mut server = mockito::Server::new_async().await;
        let api = LeagueApi::with_base_url(server.url());

        let mock = server
            .mock("GET", "/enfrentamientos/torneo/7")
            .with_status(500)
            .expect(READ_ATTEMPTS as usize)
            .create_async()
            .await;

        match api.matches_by_tournament(7).await {
            Err(ApiError::Api(..)) => {}
            other => panic!("expected Api error, got {other:?}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn mutations_are_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let api = LeagueApi::with_base_url(server.url());

        let mock = server
            .mock("DELETE", "/enfrentamientos/41")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        assert!(api.delete_match(41).await.is_err());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn roster_lookup_maps_players() {
        let mut server = mockito::Server::new_async().await;
        let api = LeagueApi::with_base_url(server.url());

        let _mock = server
            .mock("GET", "/jugadores/equipo/1")
            .with_header("content-type", "application/json")
            .with_body(
                json!([{
                    "id": 10,
                    "nombre": "Luis",
                    "apellido": "Rojas",
                    "identificacion": "CC-1002",
                    "nacionalidad": "Colombia",
                    "equipoId": 1,
                    "numeroGoles": 9
                }])
                .to_string(),
            )
            .create_async()
            .await;

        let players = api.players_by_team(1).await.unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].full_name(), "Luis Rojas");
        assert_eq!(players[0].team_id, 1);
    }
}
