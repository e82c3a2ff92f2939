//! Scoring: point handling and the set-win rule.

use crate::models::{
    next_index, ActionRecord, HistoryEntry, HistoryResult, MatchError, MatchState, TeamSide,
};
use chrono::Utc;

/// Points needed to win a set (with a two-point margin).
const SET_WIN_POINTS: u32 = 25;
const SET_WIN_MARGIN: u32 = 2;

/// Score one point for `side`.
///
/// Appends the point's history row (plus a set-win row when this point
/// clinches the set), pushes the matching undo record, and advances the
/// rotation unless the set just ended. Refused untouched once the set is
/// over.
pub fn score_point(state: &mut MatchState, side: TeamSide) -> Result<(), MatchError> {
    if state.is_set_over {
        return Err(MatchError::SetOver);
    }

    let sequence_start = state.current_step();
    let sequence_index = state.sequence_index;
    let point_number = state.point_number;

    match side {
        TeamSide::Home => state.home_score += 1,
        TeamSide::Away => state.away_score += 1,
    }

    let set_won = check_set_win(state);

    state.sequence_history.push(HistoryEntry {
        set_number: state.current_set,
        point_number: Some(point_number),
        sequence_start: Some(sequence_start),
        result: HistoryResult::PointScored { side },
        home_score: state.home_score,
        away_score: state.away_score,
        recorded_at: Utc::now(),
    });

    if set_won {
        // The winner is always the side that just scored.
        state.sequence_history.push(HistoryEntry {
            set_number: state.current_set,
            point_number: None,
            sequence_start: None,
            result: HistoryResult::SetWon { side },
            home_score: state.home_score,
            away_score: state.away_score,
            recorded_at: Utc::now(),
        });
    }

    state.action_history.push(ActionRecord::Score {
        side,
        value: 1,
        sequence_index,
        point_number,
        was_set_over: false,
        set_won,
    });

    state.point_number += 1;

    if set_won {
        log::debug!(
            "set {} won by {} at {}-{}",
            state.current_set,
            state.team_name(side),
            state.home_score,
            state.away_score
        );
    } else {
        state.sequence_index = next_index(state.sequence_index);
    }

    Ok(())
}

/// Apply the set-win condition: 25+ points with a margin of at least 2.
/// On a win, marks the set over and credits the leading side.
fn check_set_win(state: &mut MatchState) -> bool {
    let (home, away) = (state.home_score, state.away_score);
    if home.max(away) < SET_WIN_POINTS || home.abs_diff(away) < SET_WIN_MARGIN {
        return false;
    }
    state.is_set_over = true;
    if home > away {
        state.home_sets_won += 1;
        state.winning_team = Some(TeamSide::Home);
    } else {
        state.away_sets_won += 1;
        state.winning_team = Some(TeamSide::Away);
    }
    true
}
