//! MatchState and MatchError.

use crate::models::history::{ActionRecord, HistoryEntry};
use crate::models::sequence::{SequenceStep, TeamSide, SERVE_SEQUENCE};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default team names, substituted whenever input is empty.
pub const DEFAULT_HOME_NAME: &str = "Home Team";
pub const DEFAULT_AWAY_NAME: &str = "Away Team";

/// Default display colors (home blue, away green).
pub const DEFAULT_HOME_COLOR: &str = "#007bff";
pub const DEFAULT_AWAY_COLOR: &str = "#28a745";

/// Notices returned when an operation is refused. The state is guaranteed
/// unchanged on every variant; callers surface the message and move on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchError {
    /// The set is over; scoring and time-outs are closed until the next set.
    SetOver,
    /// The side has no time-outs left this set.
    NoTimeoutsRemaining,
    /// The action stack is empty.
    NothingToUndo,
    /// Next set requested while the current set is still being played.
    SetStillRunning,
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::SetOver => write!(f, "Set is over; start the next set to continue"),
            MatchError::NoTimeoutsRemaining => write!(f, "No time-outs remaining this set"),
            MatchError::NothingToUndo => write!(f, "No actions to undo"),
            MatchError::SetStillRunning => write!(f, "Current set is still in progress"),
        }
    }
}

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Full match state: names, scores, sets, time-outs, rotation, history.
///
/// Restored snapshots default any missing field (`serde(default)`) and
/// ignore unknown ones; there is no version tag and no migration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchState {
    pub id: MatchId,
    pub home_team: String,
    pub away_team: String,
    /// Display-only; opaque to the match rules.
    pub home_color: String,
    pub away_color: String,
    pub home_score: u32,
    pub away_score: u32,
    pub home_sets_won: u32,
    pub away_sets_won: u32,
    /// 1-based set counter.
    pub current_set: u32,
    /// True from the set-clinching point until the next-set transition.
    pub is_set_over: bool,
    /// Side that won the current (just-finished) set.
    pub winning_team: Option<TeamSide>,
    /// Index into [`SERVE_SEQUENCE`], always in `[0, 6)`.
    pub sequence_index: usize,
    /// 1-based counter of points within the current set.
    pub point_number: u32,
    pub home_timeouts_used: u32,
    pub away_timeouts_used: u32,
    /// Audit trail, append-only (undo pops).
    pub sequence_history: Vec<HistoryEntry>,
    /// Undo stack; cleared on every set transition and reset.
    pub action_history: Vec<ActionRecord>,
}

impl MatchState {
    /// Time-outs each side may take per set.
    pub const MAX_TIMEOUTS_PER_SET: u32 = 2;

    /// Fresh match: default names and colors, set 1, empty history.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            home_team: DEFAULT_HOME_NAME.to_string(),
            away_team: DEFAULT_AWAY_NAME.to_string(),
            home_color: DEFAULT_HOME_COLOR.to_string(),
            away_color: DEFAULT_AWAY_COLOR.to_string(),
            home_score: 0,
            away_score: 0,
            home_sets_won: 0,
            away_sets_won: 0,
            current_set: 1,
            is_set_over: false,
            winning_team: None,
            sequence_index: 0,
            point_number: 1,
            home_timeouts_used: 0,
            away_timeouts_used: 0,
            sequence_history: Vec::new(),
            action_history: Vec::new(),
        }
    }

    /// Replace both team names. Empty or whitespace-only input falls back to
    /// the default name; nothing else is touched.
    pub fn set_team_names(&mut self, home: &str, away: &str) {
        self.home_team = non_empty_or(home, DEFAULT_HOME_NAME);
        self.away_team = non_empty_or(away, DEFAULT_AWAY_NAME);
    }

    /// Replace both display colors, with the same empty-input fallback.
    pub fn set_team_colors(&mut self, home: &str, away: &str) {
        self.home_color = non_empty_or(home, DEFAULT_HOME_COLOR);
        self.away_color = non_empty_or(away, DEFAULT_AWAY_COLOR);
    }

    /// Discard everything and start a fresh match (new id).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether the undo stack has anything to pop.
    pub fn can_undo(&self) -> bool {
        !self.action_history.is_empty()
    }

    /// The rotation step the next rally starts with.
    pub fn current_step(&self) -> SequenceStep {
        SERVE_SEQUENCE[self.sequence_index % SERVE_SEQUENCE.len()]
    }

    /// Display name for a side.
    pub fn team_name(&self, side: TeamSide) -> &str {
        match side {
            TeamSide::Home => &self.home_team,
            TeamSide::Away => &self.away_team,
        }
    }

    /// Display color for a side.
    pub fn team_color(&self, side: TeamSide) -> &str {
        match side {
            TeamSide::Home => &self.home_color,
            TeamSide::Away => &self.away_color,
        }
    }

    /// Score of a side.
    pub fn score(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Home => self.home_score,
            TeamSide::Away => self.away_score,
        }
    }

    /// Time-outs a side has left this set.
    pub fn timeouts_remaining(&self, side: TeamSide) -> u32 {
        let used = match side {
            TeamSide::Home => self.home_timeouts_used,
            TeamSide::Away => self.away_timeouts_used,
        };
        Self::MAX_TIMEOUTS_PER_SET.saturating_sub(used)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_or(input: &str, fallback: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
