use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use futnorte_api::{Match, MatchStatus, Player, Team, Tournament};
use log::debug;
use std::cmp::Ordering;
use std::fmt;

// ---------------------------------------------------------------------------
// Queries — built by the store, executed by the network worker
// ---------------------------------------------------------------------------

/// Which roster a batch of players belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// A windowed fetch. `start` is inclusive, `end` exclusive (wire semantics).
/// The epoch pins the query to the filter state it was built under.
#[derive(Debug, Clone)]
pub struct WindowQuery {
    pub tournament_id: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub epoch: u64,
}

#[derive(Debug, Clone)]
pub enum MatchQuery {
    Window(WindowQuery),
    All { tournament_id: u32, epoch: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    MissingBounds,
    StartAfterEnd,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::MissingBounds => write!(f, "select both filter dates"),
            FilterError::StartAfterEnd => {
                write!(f, "the start date must not be after the end date")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Fixture store
// ---------------------------------------------------------------------------

/// Working set of matches for one tournament-viewing session, plus the
/// active date window and pending-operation flags. Sole writer of the match
/// collection; every mutation lands here after server confirmation, and the
/// status views are recomputed from scratch on each read.
#[derive(Debug, Default)]
pub struct FixtureStore {
    pub tournament: Option<Tournament>,
    pub teams: Vec<Team>,
    matches: Vec<Match>,
    /// Rosters for the match currently open in the edit form.
    pub home_roster: Vec<Player>,
    pub away_roster: Vec<Player>,
    /// Active date filter, inclusive on both ends as the operator sees it.
    pub window_start: Option<NaiveDate>,
    pub window_end: Option<NaiveDate>,
    pub loading: bool,
    pub filtering: bool,
    pub creating: bool,
    pub updating: bool,
    pub deleting: bool,
    /// Bumped whenever a working-set-replacing fetch is issued; responses
    /// carrying an older epoch are discarded instead of applied.
    epoch: u64,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Date windows
    // -----------------------------------------------------------------------

    /// Default view on load: the current weekend (Saturday through Monday).
    /// Records the bounds and yields the windowed fetch; the worker falls
    /// back to a fetch-all when this query fails.
    pub fn initial_window(&mut self, tournament_id: u32, today: NaiveDate) -> WindowQuery {
        let (saturday, monday) = weekend_window(today);
        self.window_start = Some(saturday);
        self.window_end = Some(monday);
        self.next_epoch();
        WindowQuery {
            tournament_id,
            start: day_start(saturday),
            end: day_start(next_day(monday)),
            epoch: self.epoch,
        }
    }

    /// Set the weekend bounds without fetching; the operator decides
    /// whether to apply the filter.
    pub fn set_week_shortcut(&mut self, today: NaiveDate) {
        let (saturday, monday) = weekend_window(today);
        self.window_start = Some(saturday);
        self.window_end = Some(monday);
    }

    /// Set the current calendar month bounds without fetching.
    pub fn set_month_shortcut(&mut self, today: NaiveDate) {
        let (first, last) = month_window(today);
        self.window_start = Some(first);
        self.window_end = Some(last);
    }

    pub fn set_window(&mut self, start: NaiveDate, end: NaiveDate) -> Result<(), FilterError> {
        if start > end {
            return Err(FilterError::StartAfterEnd);
        }
        self.window_start = Some(start);
        self.window_end = Some(end);
        Ok(())
    }

    /// Build the windowed fetch for the current bounds. The end bound is
    /// expanded one day: inclusive for the operator, exclusive on the wire.
    pub fn window_query(&mut self, tournament_id: u32) -> Result<WindowQuery, FilterError> {
        let (Some(start), Some(end)) = (self.window_start, self.window_end) else {
            return Err(FilterError::MissingBounds);
        };
        if start > end {
            return Err(FilterError::StartAfterEnd);
        }
        self.next_epoch();
        Ok(WindowQuery {
            tournament_id,
            start: day_start(start),
            end: day_start(next_day(end)),
            epoch: self.epoch,
        })
    }

    /// Drop the date filter and reload the full tournament fixture.
    pub fn clear_filter(&mut self, tournament_id: u32) -> MatchQuery {
        self.window_start = None;
        self.window_end = None;
        self.next_epoch();
        MatchQuery::All { tournament_id, epoch: self.epoch }
    }

    /// Re-issue the current view's fetch (periodic refresh, manual reload).
    pub fn refresh_query(&mut self, tournament_id: u32) -> MatchQuery {
        match self.window_query(tournament_id) {
            Ok(query) => MatchQuery::Window(query),
            Err(_) => {
                self.next_epoch();
                MatchQuery::All { tournament_id, epoch: self.epoch }
            }
        }
    }

    fn next_epoch(&mut self) {
        self.epoch += 1;
    }

    // -----------------------------------------------------------------------
    // Appliers — called when network responses arrive
    // -----------------------------------------------------------------------

    /// Replace the working set with a fetched batch, restricted to the
    /// tournament. A batch from a superseded query (stale epoch) is
    /// discarded; returns whether the batch was applied.
    pub fn apply_matches(&mut self, epoch: u64, tournament_id: u32, matches: Vec<Match>) -> bool {
        self.loading = false;
        self.filtering = false;
        if epoch != self.epoch {
            debug!("discarding stale match batch (epoch {epoch}, current {})", self.epoch);
            return false;
        }
        self.matches = matches
            .into_iter()
            .filter(|m| m.tournament_id == tournament_id)
            .collect();
        true
    }

    pub fn apply_board(&mut self, tournament: Tournament, teams: Vec<Team>) {
        self.tournament = Some(tournament);
        self.teams = teams;
    }

    pub fn apply_created(&mut self, created: Match) {
        self.creating = false;
        self.matches.push(created);
    }

    /// Replace the entry wholesale; matches are immutable snapshots.
    pub fn apply_updated(&mut self, updated: Match) {
        self.updating = false;
        if let Some(slot) = self.matches.iter_mut().find(|m| m.id == updated.id) {
            *slot = updated;
        }
    }

    pub fn apply_removed(&mut self, match_id: u32) {
        self.deleting = false;
        self.matches.retain(|m| m.id != match_id);
    }

    pub fn apply_roster(&mut self, side: Side, players: Vec<Player>) {
        match side {
            Side::Home => self.home_roster = players,
            Side::Away => self.away_roster = players,
        }
    }

    pub fn clear_rosters(&mut self) {
        self.home_roster.clear();
        self.away_roster.clear();
    }

    /// Drop every pending flag so a failed operation never leaves the view
    /// stuck; the working set keeps its last known-good contents.
    pub fn clear_pending(&mut self) {
        self.loading = false;
        self.filtering = false;
        self.creating = false;
        self.updating = false;
        self.deleting = false;
    }

    pub fn busy(&self) -> bool {
        self.loading || self.filtering || self.creating || self.updating || self.deleting
    }

    // -----------------------------------------------------------------------
    // Derived views — recomputed per read; the set is small
    // -----------------------------------------------------------------------

    pub fn scheduled(&self) -> Vec<&Match> {
        self.by_status(MatchStatus::Scheduled)
    }

    pub fn finalized(&self) -> Vec<&Match> {
        self.by_status(MatchStatus::Finalized)
    }

    pub fn postponed(&self) -> Vec<&Match> {
        self.by_status(MatchStatus::Postponed)
    }

    fn by_status(&self, status: MatchStatus) -> Vec<&Match> {
        sorted(self.matches.iter().filter(|m| m.status == status).collect())
    }

    /// The full working set under the same ordering, for fixture exports.
    pub fn all_ordered(&self) -> Vec<&Match> {
        sorted(self.matches.iter().collect())
    }

    pub fn get(&self, match_id: u32) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    #[cfg(test)]
    pub(crate) fn current_epoch(&self) -> u64 {
        self.epoch
    }
}

/// Venue first, then kickoff: the league reads its fixture as per-field
/// schedules rather than one chronological list.
pub fn venue_then_kickoff(a: &Match, b: &Match) -> Ordering {
    a.venue.cmp(&b.venue).then_with(|| a.kickoff.cmp(&b.kickoff))
}

fn sorted(mut list: Vec<&Match>) -> Vec<&Match> {
    list.sort_by(|a, b| venue_then_kickoff(a, b));
    list
}

// ---------------------------------------------------------------------------
// Window math
// ---------------------------------------------------------------------------

/// Current-weekend bounds, Saturday through Monday, both inclusive.
/// Sunday belongs to the weekend that started yesterday; Saturday starts its
/// own; any other weekday looks ahead to the next Saturday.
pub fn weekend_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let saturday = match today.weekday() {
        Weekday::Sun => today.checked_sub_days(Days::new(1)).unwrap_or(today),
        Weekday::Sat => today,
        wd => {
            let ahead = 6 - u64::from(wd.num_days_from_sunday());
            today.checked_add_days(Days::new(ahead)).unwrap_or(today)
        }
    };
    let monday = saturday.checked_add_days(Days::new(2)).unwrap_or(saturday);
    (saturday, monday)
}

/// First and last day of `today`'s calendar month.
pub fn month_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).unwrap_or(today);
    let first_of_next = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    };
    let last = first_of_next
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .unwrap_or(first);
    (first, last)
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
