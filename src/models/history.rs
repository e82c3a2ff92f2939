//! Audit-trail rows and the reversible action records consumed by undo.

use crate::models::sequence::{SequenceStep, TeamSide};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome recorded in a history row. Display text is rendered at the
/// presentation boundary with the actual team names.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum HistoryResult {
    /// A rally ended with this side scoring.
    PointScored { side: TeamSide },
    /// This side reached the set-win condition.
    SetWon { side: TeamSide },
    /// This side took its `number`-th time-out of the set.
    TimeoutTaken { side: TeamSide, number: u32 },
}

impl HistoryResult {
    /// Render this outcome with real team names.
    pub fn describe(&self, home_name: &str, away_name: &str, max_timeouts: u32) -> String {
        let name = |side: TeamSide| match side {
            TeamSide::Home => home_name,
            TeamSide::Away => away_name,
        };
        match self {
            HistoryResult::PointScored { side } => format!("{} scored", name(*side)),
            HistoryResult::SetWon { side } => format!("{} wins the set!", name(*side)),
            HistoryResult::TimeoutTaken { side, number } => {
                format!("{} takes time-out ({}/{})", name(*side), number, max_timeouts)
            }
        }
    }
}

/// One row of the match history table.
///
/// Rows are append-only; undo pops them, nothing ever edits one in place.
/// Set-win and time-out rows carry no point number and no sequence step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub set_number: u32,
    pub point_number: Option<u32>,
    /// The rotation step the rally started with (points only).
    pub sequence_start: Option<SequenceStep>,
    pub result: HistoryResult,
    /// Home score after this row's event.
    pub home_score: u32,
    /// Away score after this row's event.
    pub away_score: u32,
    pub recorded_at: DateTime<Utc>,
}

/// Reversible record of one mutation, pushed by scoring/time-out operations
/// and popped (LIFO) by undo.
///
/// Score records carry the pre-call values outright rather than deltas to
/// recompute: undoing a set-clinching point has side effects (sets won,
/// winning team, a second history row) that are not arithmetic inverses.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ActionRecord {
    Score {
        side: TeamSide,
        /// Points added (always 1).
        value: u32,
        /// Rotation index before the point.
        sequence_index: usize,
        /// Point counter before the increment.
        point_number: u32,
        /// Whether the set was already over before the call (always false
        /// for a record that got pushed; kept so undo restores it blindly).
        was_set_over: bool,
        /// Whether this point met the set-win condition.
        set_won: bool,
    },
    Timeout {
        side: TeamSide,
        /// The side's per-set time-out count after the increment.
        number: u32,
    },
}
