//! Undo: exact inversion of the most recent score or time-out.

use crate::models::{ActionRecord, MatchError, MatchState, TeamSide};

/// Pop and invert the most recent action.
///
/// Score records restore every captured value (score, rotation index, point
/// counter, set-over flag); a set-clinching point additionally pops the
/// set-win history row and takes the set back from the winner. Time-out
/// records pop their row and return the time-out to the side's quota.
///
/// The stack is cleared on every set transition, so undo never rewinds
/// across a set boundary.
pub fn undo_last_action(state: &mut MatchState) -> Result<(), MatchError> {
    let last = state.action_history.pop().ok_or(MatchError::NothingToUndo)?;

    match last {
        ActionRecord::Score {
            side,
            value,
            sequence_index,
            point_number,
            was_set_over,
            set_won,
        } => {
            state.is_set_over = was_set_over;
            match side {
                TeamSide::Home => state.home_score -= value,
                TeamSide::Away => state.away_score -= value,
            }
            state.sequence_index = sequence_index;
            state.sequence_history.pop();
            if set_won {
                // Second row is the set-win announcement.
                state.sequence_history.pop();
                match state.winning_team {
                    Some(TeamSide::Home) => state.home_sets_won -= 1,
                    Some(TeamSide::Away) => state.away_sets_won -= 1,
                    None => {}
                }
                state.winning_team = None;
                state.is_set_over = false;
            }
            state.point_number = point_number;
        }
        ActionRecord::Timeout { side, .. } => {
            state.sequence_history.pop();
            match side {
                TeamSide::Home => state.home_timeouts_used -= 1,
                TeamSide::Away => state.away_timeouts_used -= 1,
            }
        }
    }

    Ok(())
}
