use crate::state::fixture::Side;
use chrono::NaiveDateTime;
use futnorte_api::{
    CreateMatchRequest, Match, MatchStatus, Player, ScorerEntry, Team, UpdateMatchRequest,
};
use std::fmt;

pub const MAX_VENUE_LEN: usize = 100;
pub const MAX_GOALS_PER_PLAYER: u32 = 10;

/// Known league fields; the last entry is the free-text escape hatch.
pub const VENUES: &[&str] = &[
    "Cancha Principal",
    "Cancha Norte",
    "Cancha Sur",
    "Cancha 1",
    "Cancha 2",
    "Polideportivo Municipal",
    "Otra",
];
const OTHER_VENUE: usize = VENUES.len() - 1;

/// Kickoff text format the operator types into the form.
const INPUT_DATETIME: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { match_id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    HomeTeam,
    AwayTeam,
    Kickoff,
    Venue,
    CustomVenue,
    Status,
    HomeScore,
    AwayScore,
    HomeScorers,
    AwayScorers,
}

/// One row of the scorer breakdown being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorerRow {
    pub player_id: Option<u32>,
    pub goals: u32,
}

impl Default for ScorerRow {
    fn default() -> Self {
        Self { player_id: None, goals: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    HomeTeamRequired,
    AwayTeamRequired,
    TeamsMustDiffer,
    KickoffRequired,
    KickoffInvalid,
    VenueRequired,
    VenueTooLong,
    ScorerPlayerRequired { side: Side, row: usize },
    ScorerGoalsOutOfRange { side: Side, row: usize },
    ScorerSumMismatch { side: Side, expected: u32, actual: u32 },
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Home => "home",
        Side::Away => "away",
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::HomeTeamRequired => write!(f, "pick the home team"),
            FormError::AwayTeamRequired => write!(f, "pick the away team"),
            FormError::TeamsMustDiffer => write!(f, "home and away must be different teams"),
            FormError::KickoffRequired => write!(f, "kickoff date/time is required"),
            FormError::KickoffInvalid => write!(f, "kickoff must look like 2026-03-07 15:00"),
            FormError::VenueRequired => write!(f, "venue is required"),
            FormError::VenueTooLong => {
                write!(f, "venue exceeds {MAX_VENUE_LEN} characters")
            }
            FormError::ScorerPlayerRequired { side, row } => {
                write!(f, "{} scorer row {} needs a player", side_label(*side), row + 1)
            }
            FormError::ScorerGoalsOutOfRange { side, row } => write!(
                f,
                "{} scorer row {}: goals must be between 1 and {MAX_GOALS_PER_PLAYER}",
                side_label(*side),
                row + 1
            ),
            FormError::ScorerSumMismatch { side, expected, actual } => write!(
                f,
                "{} scorers add up to {actual} but the score says {expected}",
                side_label(*side)
            ),
        }
    }
}

/// Field state for the match create/edit form. Validation is pure: it is
/// re-run on every change the operator makes, and a request is only built
/// once no error remains.
#[derive(Debug, Clone)]
pub struct MatchForm {
    pub mode: FormMode,
    pub home_team: Option<u32>,
    pub away_team: Option<u32>,
    pub kickoff_input: String,
    pub venue_choice: usize,
    pub custom_venue: String,
    pub status: MatchStatus,
    pub home_score: u32,
    pub away_score: u32,
    pub home_scorers: Vec<ScorerRow>,
    pub away_scorers: Vec<ScorerRow>,
    pub focus: FormField,
    /// Row index the cursor sits on within the focused scorer list.
    pub scorer_cursor: usize,
    /// Errors from the last submit attempt, kept for display.
    pub errors: Vec<FormError>,
}

impl MatchForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            home_team: None,
            away_team: None,
            kickoff_input: String::new(),
            venue_choice: 0,
            custom_venue: String::new(),
            status: MatchStatus::Scheduled,
            home_score: 0,
            away_score: 0,
            home_scorers: Vec::new(),
            away_scorers: Vec::new(),
            focus: FormField::HomeTeam,
            scorer_cursor: 0,
            errors: Vec::new(),
        }
    }

    /// Seed the edit form from a match snapshot. Scorer rows are prefilled
    /// only when the match is already finalized.
    pub fn edit(m: &Match) -> Self {
        let venue_choice = VENUES
            .iter()
            .position(|v| *v == m.venue)
            .filter(|&i| i != OTHER_VENUE)
            .unwrap_or(OTHER_VENUE);
        let custom_venue = if venue_choice == OTHER_VENUE { m.venue.clone() } else { String::new() };

        let rows = |lines: &[futnorte_api::ScorerLine]| {
            if !m.is_finalized() {
                return Vec::new();
            }
            lines
                .iter()
                .map(|l| ScorerRow { player_id: Some(l.player_id), goals: l.goals })
                .collect::<Vec<_>>()
        };

        Self {
            mode: FormMode::Edit { match_id: m.id },
            home_team: Some(m.home_team_id),
            away_team: Some(m.away_team_id),
            kickoff_input: m.kickoff.format(INPUT_DATETIME).to_string(),
            venue_choice,
            custom_venue,
            status: m.status,
            home_score: m.home_score.unwrap_or(0),
            away_score: m.away_score.unwrap_or(0),
            home_scorers: rows(&m.home_scorers),
            away_scorers: rows(&m.away_scorers),
            focus: FormField::Kickoff,
            scorer_cursor: 0,
            errors: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Field access
    // -----------------------------------------------------------------------

    pub fn venue_text(&self) -> &str {
        if self.venue_choice == OTHER_VENUE {
            self.custom_venue.trim()
        } else {
            VENUES[self.venue_choice]
        }
    }

    pub fn parsed_kickoff(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.kickoff_input.trim(), INPUT_DATETIME).ok()
    }

    pub fn scorer_rows(&self, side: Side) -> &[ScorerRow] {
        match side {
            Side::Home => &self.home_scorers,
            Side::Away => &self.away_scorers,
        }
    }

    fn scorer_rows_mut(&mut self, side: Side) -> &mut Vec<ScorerRow> {
        match side {
            Side::Home => &mut self.home_scorers,
            Side::Away => &mut self.away_scorers,
        }
    }

    pub fn scorer_sum(&self, side: Side) -> u32 {
        self.scorer_rows(side).iter().map(|r| r.goals).sum()
    }

    /// Live consistency check shown next to the scorer lists: for a
    /// finalized target, each side's breakdown must add up to its score.
    pub fn sums_consistent(&self) -> bool {
        self.status != MatchStatus::Finalized
            || (self.scorer_sum(Side::Home) == self.home_score
                && self.scorer_sum(Side::Away) == self.away_score)
    }

    // -----------------------------------------------------------------------
    // Mutations driven by key handling
    // -----------------------------------------------------------------------

    /// Change the target status. Leaving Finalized discards the scorer rows
    /// and zeroes the scores: they carry no meaning for the new state, and
    /// coming back does not restore them.
    pub fn set_status(&mut self, status: MatchStatus) {
        self.status = status;
        if status != MatchStatus::Finalized {
            self.home_scorers.clear();
            self.away_scorers.clear();
            self.home_score = 0;
            self.away_score = 0;
        }
    }

    pub fn cycle_status(&mut self, forward: bool) {
        let next = if forward { self.status.next() } else { self.status.prev() };
        self.set_status(next);
    }

    pub fn cycle_venue(&mut self, forward: bool) {
        let len = VENUES.len();
        self.venue_choice = if forward {
            (self.venue_choice + 1) % len
        } else {
            (self.venue_choice + len - 1) % len
        };
    }

    /// Cycle a team picker through the tournament's teams, skipping the team
    /// already picked on the other side.
    pub fn cycle_team(&mut self, side: Side, teams: &[Team], forward: bool) {
        if teams.is_empty() {
            return;
        }
        let (slot, other) = match side {
            Side::Home => (self.home_team, self.away_team),
            Side::Away => (self.away_team, self.home_team),
        };
        let len = teams.len();
        let current = slot.and_then(|id| teams.iter().position(|t| t.id == id));
        let mut index = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        for _ in 0..len {
            if Some(teams[index].id) != other {
                let picked = teams[index].id;
                match side {
                    Side::Home => self.home_team = Some(picked),
                    Side::Away => self.away_team = Some(picked),
                }
                return;
            }
            index = if forward { (index + 1) % len } else { (index + len - 1) % len };
        }
    }

    pub fn add_scorer(&mut self, side: Side) {
        self.scorer_rows_mut(side).push(ScorerRow::default());
        self.scorer_cursor = self.scorer_rows(side).len() - 1;
    }

    pub fn remove_scorer(&mut self, side: Side, row: usize) {
        let rows = self.scorer_rows_mut(side);
        if row < rows.len() {
            rows.remove(row);
        }
        self.scorer_cursor = self.scorer_cursor.min(self.scorer_rows(side).len().saturating_sub(1));
    }

    pub fn adjust_goals(&mut self, side: Side, row: usize, delta: i32) {
        if let Some(r) = self.scorer_rows_mut(side).get_mut(row) {
            let next = r.goals.saturating_add_signed(delta);
            r.goals = next.clamp(1, MAX_GOALS_PER_PLAYER);
        }
    }

    pub fn cycle_scorer_player(&mut self, side: Side, row: usize, roster: &[Player], forward: bool) {
        if roster.is_empty() {
            return;
        }
        let len = roster.len();
        if let Some(r) = self.scorer_rows_mut(side).get_mut(row) {
            let current = r.player_id.and_then(|id| roster.iter().position(|p| p.id == id));
            let index = match (current, forward) {
                (Some(i), true) => (i + 1) % len,
                (Some(i), false) => (i + len - 1) % len,
                (None, true) => 0,
                (None, false) => len - 1,
            };
            r.player_id = Some(roster[index].id);
        }
    }

    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormField::Kickoff => {
                if (c.is_ascii_digit() || c == '-' || c == ':' || c == ' ')
                    && self.kickoff_input.len() < 16
                {
                    self.kickoff_input.push(c);
                }
            }
            FormField::CustomVenue => {
                if self.custom_venue.chars().count() < MAX_VENUE_LEN + 1 {
                    self.custom_venue.push(c);
                }
            }
            FormField::HomeScore | FormField::AwayScore => {
                if let Some(d) = c.to_digit(10) {
                    let slot = if self.focus == FormField::HomeScore {
                        &mut self.home_score
                    } else {
                        &mut self.away_score
                    };
                    *slot = (*slot * 10 + d).min(99);
                }
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Kickoff => {
                self.kickoff_input.pop();
            }
            FormField::CustomVenue => {
                self.custom_venue.pop();
            }
            FormField::HomeScore => self.home_score /= 10,
            FormField::AwayScore => self.away_score /= 10,
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Focus cycling
    // -----------------------------------------------------------------------

    fn field_sequence(&self) -> Vec<FormField> {
        let mut fields = Vec::new();
        if self.mode == FormMode::Create {
            fields.push(FormField::HomeTeam);
            fields.push(FormField::AwayTeam);
        }
        fields.push(FormField::Kickoff);
        fields.push(FormField::Venue);
        if self.venue_choice == OTHER_VENUE {
            fields.push(FormField::CustomVenue);
        }
        if matches!(self.mode, FormMode::Edit { .. }) {
            fields.push(FormField::Status);
            if self.status == MatchStatus::Finalized {
                fields.push(FormField::HomeScore);
                fields.push(FormField::AwayScore);
                fields.push(FormField::HomeScorers);
                fields.push(FormField::AwayScorers);
            }
        }
        fields
    }

    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        let fields = self.field_sequence();
        let len = fields.len();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.focus = fields[next];
        self.scorer_cursor = 0;
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate_create(&self, tournament_id: u32) -> Result<CreateMatchRequest, Vec<FormError>> {
        let mut errors = Vec::new();

        if self.home_team.is_none() {
            errors.push(FormError::HomeTeamRequired);
        }
        if self.away_team.is_none() {
            errors.push(FormError::AwayTeamRequired);
        }
        if let (Some(home), Some(away)) = (self.home_team, self.away_team)
            && home == away
        {
            errors.push(FormError::TeamsMustDiffer);
        }

        let kickoff = self.checked_kickoff(&mut errors);
        self.check_venue(&mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreateMatchRequest {
            tournament_id,
            // Both present: a missing team was pushed as an error above.
            home_team_id: self.home_team.unwrap_or_default(),
            away_team_id: self.away_team.unwrap_or_default(),
            kickoff: kickoff.unwrap_or_default(),
            venue: self.venue_text().to_owned(),
        })
    }

    pub fn validate_update(&self) -> Result<UpdateMatchRequest, Vec<FormError>> {
        let mut errors = Vec::new();

        let kickoff = self.checked_kickoff(&mut errors);
        self.check_venue(&mut errors);

        if self.status == MatchStatus::Finalized {
            self.check_scorers(Side::Home, self.home_score, &mut errors);
            self.check_scorers(Side::Away, self.away_score, &mut errors);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let entries = |rows: &[ScorerRow]| {
            rows.iter()
                .map(|r| ScorerEntry { player_id: r.player_id.unwrap_or_default(), goals: r.goals })
                .collect::<Vec<_>>()
        };
        let finalized = self.status == MatchStatus::Finalized;
        Ok(UpdateMatchRequest {
            kickoff,
            venue: Some(self.venue_text().to_owned()),
            status: Some(self.status),
            home_score: finalized.then_some(self.home_score),
            away_score: finalized.then_some(self.away_score),
            home_scorers: finalized.then(|| entries(&self.home_scorers)),
            away_scorers: finalized.then(|| entries(&self.away_scorers)),
        })
    }

    fn checked_kickoff(&self, errors: &mut Vec<FormError>) -> Option<NaiveDateTime> {
        if self.kickoff_input.trim().is_empty() {
            errors.push(FormError::KickoffRequired);
            return None;
        }
        match self.parsed_kickoff() {
            Some(dt) => Some(dt),
            None => {
                errors.push(FormError::KickoffInvalid);
                None
            }
        }
    }

    fn check_venue(&self, errors: &mut Vec<FormError>) {
        let venue = self.venue_text();
        if venue.is_empty() {
            errors.push(FormError::VenueRequired);
        } else if venue.chars().count() > MAX_VENUE_LEN {
            errors.push(FormError::VenueTooLong);
        }
    }

    fn check_scorers(&self, side: Side, expected: u32, errors: &mut Vec<FormError>) {
        for (row, r) in self.scorer_rows(side).iter().enumerate() {
            if r.player_id.is_none() {
                errors.push(FormError::ScorerPlayerRequired { side, row });
            }
            if r.goals < 1 || r.goals > MAX_GOALS_PER_PLAYER {
                errors.push(FormError::ScorerGoalsOutOfRange { side, row });
            }
        }
        let actual = self.scorer_sum(side);
        if actual != expected {
            errors.push(FormError::ScorerSumMismatch { side, expected, actual });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futnorte_api::ScorerLine;

    fn teams() -> Vec<Team> {
        vec![
            Team { id: 1, name: "Atlético Norte".into() },
            Team { id: 2, name: "Deportivo Sur".into() },
            Team { id: 3, name: "Real Frontera".into() },
        ]
    }

    fn filled_create_form() -> MatchForm {
        let mut form = MatchForm::create();
        form.home_team = Some(1);
        form.away_team = Some(2);
        form.kickoff_input = "2026-03-07 15:00".into();
        form.venue_choice = 3; // "Cancha 1"
        form
    }

    fn finalized_match() -> Match {
        Match {
            id: 41,
            tournament_id: 7,
            home_team_id: 1,
            away_team_id: 2,
            home_team: "Atlético Norte".into(),
            away_team: "Deportivo Sur".into(),
            kickoff: NaiveDate::from_ymd_opt(2026, 3, 7).unwrap().and_hms_opt(15, 0, 0).unwrap(),
            venue: "Cancha Principal".into(),
            status: MatchStatus::Finalized,
            home_score: Some(3),
            away_score: Some(1),
            home_scorers: vec![
                ScorerLine { player_id: 10, name: "Luis".into(), surname: "Rojas".into(), goals: 2 },
                ScorerLine { player_id: 11, name: "Iván".into(), surname: "Mera".into(), goals: 1 },
            ],
            away_scorers: vec![ScorerLine {
                player_id: 20,
                name: "Joel".into(),
                surname: "Paz".into(),
                goals: 1,
            }],
        }
    }

    // --- create validation ---

    #[test]
    fn empty_create_form_reports_every_missing_field() {
        let form = MatchForm::create();
        let errors = form.validate_create(7).unwrap_err();
        assert!(errors.contains(&FormError::HomeTeamRequired));
        assert!(errors.contains(&FormError::AwayTeamRequired));
        assert!(errors.contains(&FormError::KickoffRequired));
    }

    #[test]
    fn create_rejects_a_team_playing_itself() {
        let mut form = filled_create_form();
        form.away_team = Some(1);
        let errors = form.validate_create(7).unwrap_err();
        assert_eq!(errors, vec![FormError::TeamsMustDiffer]);
    }

    #[test]
    fn create_builds_the_request_when_valid() {
        let form = filled_create_form();
        let request = form.validate_create(7).unwrap();
        assert_eq!(request.tournament_id, 7);
        assert_eq!(request.home_team_id, 1);
        assert_eq!(request.away_team_id, 2);
        assert_eq!(request.venue, "Cancha 1");
        assert_eq!(
            request.kickoff,
            NaiveDate::from_ymd_opt(2026, 3, 7).unwrap().and_hms_opt(15, 0, 0).unwrap()
        );
    }

    #[test]
    fn create_accepts_a_custom_venue_and_rejects_a_blank_one() {
        let mut form = filled_create_form();
        form.venue_choice = VENUES.len() - 1;
        assert_eq!(form.validate_create(7).unwrap_err(), vec![FormError::VenueRequired]);

        form.custom_venue = "Cancha del barrio La Esperanza".into();
        assert_eq!(form.validate_create(7).unwrap().venue, "Cancha del barrio La Esperanza");
    }

    #[test]
    fn create_rejects_an_overlong_custom_venue() {
        let mut form = filled_create_form();
        form.venue_choice = VENUES.len() - 1;
        form.custom_venue = "x".repeat(MAX_VENUE_LEN + 1);
        assert_eq!(form.validate_create(7).unwrap_err(), vec![FormError::VenueTooLong]);
    }

    #[test]
    fn create_rejects_a_garbled_kickoff() {
        let mut form = filled_create_form();
        form.kickoff_input = "next saturday".into();
        assert_eq!(form.validate_create(7).unwrap_err(), vec![FormError::KickoffInvalid]);
    }

    // --- update validation ---

    #[test]
    fn finalize_with_matching_breakdown_passes() {
        let form = MatchForm::edit(&finalized_match());
        let request = form.validate_update().unwrap();
        assert_eq!(request.status, Some(MatchStatus::Finalized));
        assert_eq!(request.home_score, Some(3));
        assert_eq!(request.away_score, Some(1));
        assert_eq!(
            request.home_scorers.unwrap(),
            vec![
                ScorerEntry { player_id: 10, goals: 2 },
                ScorerEntry { player_id: 11, goals: 1 },
            ]
        );
        assert_eq!(request.away_scorers.unwrap(), vec![ScorerEntry { player_id: 20, goals: 1 }]);
    }

    #[test]
    fn finalize_with_short_breakdown_is_rejected_until_fixed() {
        let mut form = MatchForm::edit(&finalized_match());
        form.home_scorers[0].goals = 1; // sum now 2, score says 3
        let errors = form.validate_update().unwrap_err();
        assert!(errors.contains(&FormError::ScorerSumMismatch {
            side: Side::Home,
            expected: 3,
            actual: 2
        }));
        assert!(!form.sums_consistent());

        // The check re-runs on the next change: restore the row and the same
        // form validates clean.
        form.home_scorers[0].goals = 2;
        assert!(form.sums_consistent());
        assert!(form.validate_update().is_ok());
    }

    #[test]
    fn finalize_requires_a_player_on_every_row() {
        let mut form = MatchForm::edit(&finalized_match());
        form.home_scorers[1].player_id = None;
        let errors = form.validate_update().unwrap_err();
        assert!(errors.contains(&FormError::ScorerPlayerRequired { side: Side::Home, row: 1 }));
    }

    #[test]
    fn finalize_rejects_goal_counts_outside_one_to_ten() {
        let mut form = MatchForm::edit(&finalized_match());
        form.home_score = 12;
        form.home_scorers[0].goals = 11;
        let errors = form.validate_update().unwrap_err();
        assert!(errors.contains(&FormError::ScorerGoalsOutOfRange { side: Side::Home, row: 0 }));
    }

    #[test]
    fn zero_zero_finalization_needs_no_scorer_rows() {
        let mut form = MatchForm::edit(&finalized_match());
        form.home_scorers.clear();
        form.away_scorers.clear();
        form.home_score = 0;
        form.away_score = 0;
        let request = form.validate_update().unwrap();
        assert_eq!(request.home_scorers.unwrap(), Vec::new());
    }

    #[test]
    fn non_finalized_update_sends_no_score_fields() {
        let mut form = MatchForm::edit(&finalized_match());
        form.set_status(MatchStatus::Scheduled);
        let request = form.validate_update().unwrap();
        assert_eq!(request.status, Some(MatchStatus::Scheduled));
        assert_eq!(request.home_score, None);
        assert_eq!(request.away_score, None);
        assert!(request.home_scorers.is_none());
        assert!(request.away_scorers.is_none());
    }

    // --- status switching policy ---

    #[test]
    fn leaving_finalized_discards_rows_and_coming_back_starts_empty() {
        let mut form = MatchForm::edit(&finalized_match());
        assert_eq!(form.home_scorers.len(), 2);

        form.set_status(MatchStatus::Postponed);
        assert!(form.home_scorers.is_empty());
        assert!(form.away_scorers.is_empty());
        assert_eq!(form.home_score, 0);

        form.set_status(MatchStatus::Finalized);
        assert!(form.home_scorers.is_empty(), "rows must not reappear");
    }

    #[test]
    fn edit_form_seeds_rows_only_for_finalized_matches() {
        let mut m = finalized_match();
        let seeded = MatchForm::edit(&m);
        assert_eq!(seeded.home_scorers.len(), 2);
        assert_eq!(seeded.kickoff_input, "2026-03-07 15:00");

        m.status = MatchStatus::Scheduled;
        m.home_score = None;
        m.away_score = None;
        m.home_scorers.clear();
        m.away_scorers.clear();
        let plain = MatchForm::edit(&m);
        assert!(plain.home_scorers.is_empty());
        assert_eq!(plain.home_score, 0);
    }

    #[test]
    fn edit_form_maps_an_unknown_venue_to_the_custom_entry() {
        let mut m = finalized_match();
        m.venue = "Cancha del barrio".into();
        let form = MatchForm::edit(&m);
        assert_eq!(form.venue_text(), "Cancha del barrio");
        assert_eq!(form.venue_choice, VENUES.len() - 1);
    }

    // --- pickers and focus ---

    #[test]
    fn team_picker_skips_the_other_sides_pick() {
        let mut form = MatchForm::create();
        let teams = teams();
        form.home_team = Some(2);
        form.cycle_team(Side::Away, &teams, true);
        assert_eq!(form.away_team, Some(1));
        form.cycle_team(Side::Away, &teams, true);
        // Skips team 2 (already home) and lands on 3.
        assert_eq!(form.away_team, Some(3));
    }

    #[test]
    fn focus_sequence_tracks_mode_venue_and_status() {
        let mut create = MatchForm::create();
        assert_eq!(create.focus, FormField::HomeTeam);
        create.focus = FormField::Venue;
        create.focus_next();
        // Not on "Otra": the custom field is skipped and focus wraps around.
        assert_eq!(create.focus, FormField::HomeTeam);

        create.venue_choice = VENUES.len() - 1;
        create.focus = FormField::Venue;
        create.focus_next();
        assert_eq!(create.focus, FormField::CustomVenue);

        let mut edit = MatchForm::edit(&finalized_match());
        edit.focus = FormField::Status;
        edit.focus_next();
        assert_eq!(edit.focus, FormField::HomeScore);

        edit.set_status(MatchStatus::Postponed);
        edit.focus = FormField::Status;
        edit.focus_next();
        // Score fields disappear for non-finalized targets.
        assert_eq!(edit.focus, FormField::Kickoff);
    }

    #[test]
    fn goal_adjustment_clamps_to_the_per_player_cap() {
        let mut form = MatchForm::edit(&finalized_match());
        form.adjust_goals(Side::Home, 0, 100);
        assert_eq!(form.home_scorers[0].goals, MAX_GOALS_PER_PLAYER);
        form.adjust_goals(Side::Home, 0, -100);
        assert_eq!(form.home_scorers[0].goals, 1);
    }

    #[test]
    fn scorer_player_cycling_walks_the_roster() {
        let roster = vec![
            Player { id: 10, name: "Luis".into(), surname: "Rojas".into(), team_id: 1, ..Default::default() },
            Player { id: 11, name: "Iván".into(), surname: "Mera".into(), team_id: 1, ..Default::default() },
        ];
        let mut form = MatchForm::edit(&finalized_match());
        form.add_scorer(Side::Home);
        let row = form.home_scorers.len() - 1;
        form.cycle_scorer_player(Side::Home, row, &roster, true);
        assert_eq!(form.home_scorers[row].player_id, Some(10));
        form.cycle_scorer_player(Side::Home, row, &roster, true);
        assert_eq!(form.home_scorers[row].player_id, Some(11));
    }
}
