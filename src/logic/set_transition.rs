//! Set transitions: reset the per-set counters and pick the opening server.

use crate::models::{first_serve_index, MatchError, MatchState, TeamSide};

/// Move to the next set. Only valid once the current set is over.
///
/// Zeroes scores and time-outs, clears the undo stack, and points the
/// rotation at the new set's opening server: set 2 starts with the away
/// serve, set 3 starts with the externally chosen side (`None` falls back
/// to home, the same default a dismissed serve prompt applies), and every
/// later set starts with the home serve.
pub fn start_next_set(
    state: &mut MatchState,
    serve_choice: Option<TeamSide>,
) -> Result<(), MatchError> {
    if !state.is_set_over {
        return Err(MatchError::SetStillRunning);
    }

    state.current_set += 1;
    state.home_score = 0;
    state.away_score = 0;
    state.is_set_over = false;
    state.point_number = 1;
    state.winning_team = None;
    state.action_history.clear();
    state.home_timeouts_used = 0;
    state.away_timeouts_used = 0;

    let opening_server = match state.current_set {
        2 => TeamSide::Away,
        3 => serve_choice.unwrap_or(TeamSide::Home),
        _ => TeamSide::Home,
    };
    state.sequence_index = first_serve_index(opening_server);

    log::debug!(
        "set {} started, {} serves first",
        state.current_set,
        state.team_name(opening_server)
    );

    Ok(())
}
