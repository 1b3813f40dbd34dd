pub mod client;
pub mod wire;

use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the league REST wire format
// ---------------------------------------------------------------------------

/// A tournament, referenced by the fixture as its scope. The console never
/// mutates tournaments; this is the header record only.
#[derive(Debug, Clone, Default)]
pub struct Tournament {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct Team {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub surname: String,
    pub identification: String,
    pub nationality: String,
    pub team_id: u32,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// A scheduled or played game between two teams within one tournament.
#[derive(Debug, Clone, Default)]
pub struct Match {
    pub id: u32,
    pub tournament_id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_team: String, // display names from the response
    pub away_team: String,
    pub kickoff: NaiveDateTime,
    pub venue: String,
    pub status: MatchStatus,
    /// Team totals, present only when status is Finalized.
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    /// Per-player goal breakdown, non-empty only when status is Finalized.
    pub home_scorers: Vec<ScorerLine>,
    pub away_scorers: Vec<ScorerLine>,
}

impl Match {
    pub fn is_finalized(&self) -> bool {
        self.status == MatchStatus::Finalized
    }

    /// "2 - 1" for finalized matches, "vs" otherwise.
    pub fn score_label(&self) -> String {
        match (self.home_score, self.away_score) {
            (Some(h), Some(a)) => format!("{h} - {a}"),
            _ => "vs".to_owned(),
        }
    }
}

/// One entry of a team's goal breakdown as returned by the backend.
#[derive(Debug, Clone, Default)]
pub struct ScorerLine {
    pub player_id: u32,
    pub name: String,
    pub surname: String,
    pub goals: u32,
}

/// Sum of a scorer breakdown. Finalized matches must satisfy
/// `scorer_goal_total(&m.home_scorers) == m.home_score` (and the away
/// equivalent); the edit form enforces this before any request goes out.
pub fn scorer_goal_total(lines: &[ScorerLine]) -> u32 {
    lines.iter().map(|l| l.goals).sum()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Finalized,
    Postponed,
}

impl MatchStatus {
    pub const ALL: [MatchStatus; 3] =
        [MatchStatus::Scheduled, MatchStatus::Finalized, MatchStatus::Postponed];

    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Programado",
            MatchStatus::Finalized => "Finalizado",
            MatchStatus::Postponed => "Aplazado",
        }
    }

    /// Literal sent over the wire.
    pub fn as_wire(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "PROGRAMADO",
            MatchStatus::Finalized => "FINALIZADO",
            MatchStatus::Postponed => "APLAZADO",
        }
    }

    pub fn from_wire(s: &str) -> Option<MatchStatus> {
        match s {
            "PROGRAMADO" => Some(MatchStatus::Scheduled),
            "FINALIZADO" => Some(MatchStatus::Finalized),
            "APLAZADO" => Some(MatchStatus::Postponed),
            _ => None,
        }
    }

    /// Cycle order for the status selector in the edit form.
    pub fn next(self) -> MatchStatus {
        match self {
            MatchStatus::Scheduled => MatchStatus::Finalized,
            MatchStatus::Finalized => MatchStatus::Postponed,
            MatchStatus::Postponed => MatchStatus::Scheduled,
        }
    }

    pub fn prev(self) -> MatchStatus {
        match self {
            MatchStatus::Scheduled => MatchStatus::Postponed,
            MatchStatus::Finalized => MatchStatus::Scheduled,
            MatchStatus::Postponed => MatchStatus::Finalized,
        }
    }
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CreateMatchRequest {
    pub tournament_id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub kickoff: NaiveDateTime,
    pub venue: String,
}

/// Partial update; `None` fields are left untouched by the backend.
#[derive(Debug, Clone, Default)]
pub struct UpdateMatchRequest {
    pub kickoff: Option<NaiveDateTime>,
    pub venue: Option<String>,
    pub status: Option<MatchStatus>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub home_scorers: Option<Vec<ScorerEntry>>,
    pub away_scorers: Option<Vec<ScorerEntry>>,
}

/// One scorer row of an update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorerEntry {
    pub player_id: u32,
    pub goals: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_literals_round_trip() {
        for status in MatchStatus::ALL {
            assert_eq!(MatchStatus::from_wire(status.as_wire()), Some(status));
        }
        assert_eq!(MatchStatus::from_wire("CANCELADO"), None);
    }

    #[test]
    fn status_cycle_covers_all_three() {
        let mut status = MatchStatus::Scheduled;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(status);
            status = status.next();
        }
        assert_eq!(status, MatchStatus::Scheduled);
        for s in MatchStatus::ALL {
            assert!(seen.contains(&s));
            assert_eq!(s.next().prev(), s);
        }
    }

    #[test]
    fn scorer_total_sums_goals() {
        let lines = vec![
            ScorerLine { player_id: 10, goals: 2, ..Default::default() },
            ScorerLine { player_id: 11, goals: 1, ..Default::default() },
        ];
        assert_eq!(scorer_goal_total(&lines), 3);
        assert_eq!(scorer_goal_total(&[]), 0);
    }
}
