//! Time-outs: per-set quota and history bookkeeping.

use crate::models::{ActionRecord, HistoryEntry, HistoryResult, MatchError, MatchState, TeamSide};
use chrono::Utc;

/// Take one time-out for `side`.
///
/// Refused untouched when the set is over or the side has exhausted its
/// quota; the UI pre-disables the control, but the quota is enforced here
/// as well.
pub fn take_timeout(state: &mut MatchState, side: TeamSide) -> Result<(), MatchError> {
    if state.is_set_over {
        return Err(MatchError::SetOver);
    }
    if state.timeouts_remaining(side) == 0 {
        return Err(MatchError::NoTimeoutsRemaining);
    }

    let number = match side {
        TeamSide::Home => {
            state.home_timeouts_used += 1;
            state.home_timeouts_used
        }
        TeamSide::Away => {
            state.away_timeouts_used += 1;
            state.away_timeouts_used
        }
    };

    state.sequence_history.push(HistoryEntry {
        set_number: state.current_set,
        point_number: None,
        sequence_start: None,
        result: HistoryResult::TimeoutTaken { side, number },
        home_score: state.home_score,
        away_score: state.away_score,
        recorded_at: Utc::now(),
    });

    state.action_history.push(ActionRecord::Timeout { side, number });

    Ok(())
}
