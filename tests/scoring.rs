//! Integration tests for scoring: set-win rule, time-out quota, rotation.

use volley_scoreboard::models::next_index;
use volley_scoreboard::{
    score_point, take_timeout, HistoryResult, MatchError, MatchState, TeamSide,
};

/// Bring a fresh state to the given score, alternating sides so no set ends
/// on the way (callers pick targets that are not win states themselves).
fn state_at(home: u32, away: u32) -> MatchState {
    let mut state = MatchState::new();
    for _ in 0..home.min(away) {
        score_point(&mut state, TeamSide::Home).unwrap();
        score_point(&mut state, TeamSide::Away).unwrap();
    }
    for _ in 0..home.saturating_sub(away) {
        score_point(&mut state, TeamSide::Home).unwrap();
    }
    for _ in 0..away.saturating_sub(home) {
        score_point(&mut state, TeamSide::Away).unwrap();
    }
    assert_eq!((state.home_score, state.away_score), (home, away));
    state
}

#[test]
fn fresh_state_defaults() {
    let state = MatchState::new();
    assert_eq!(state.home_team, "Home Team");
    assert_eq!(state.away_team, "Away Team");
    assert_eq!(state.current_set, 1);
    assert_eq!(state.point_number, 1);
    assert_eq!(state.sequence_index, 0);
    assert!(!state.is_set_over);
    assert!(state.winning_team.is_none());
    assert!(!state.can_undo());
}

#[test]
fn empty_team_name_falls_back_to_default() {
    let mut state = MatchState::new();
    state.set_team_names("Reds", "   ");
    assert_eq!(state.home_team, "Reds");
    assert_eq!(state.away_team, "Away Team");

    state.set_team_colors("", "#112233");
    assert_eq!(state.home_color, "#007bff");
    assert_eq!(state.away_color, "#112233");
}

#[test]
fn point_appends_history_and_advances_rotation() {
    let mut state = MatchState::new();
    score_point(&mut state, TeamSide::Away).unwrap();

    assert_eq!(state.away_score, 1);
    assert_eq!(state.point_number, 2);
    assert_eq!(state.sequence_index, 1);
    assert_eq!(state.sequence_history.len(), 1);

    let entry = &state.sequence_history[0];
    assert_eq!(entry.set_number, 1);
    assert_eq!(entry.point_number, Some(1));
    assert_eq!(entry.sequence_start, Some(volley_scoreboard::SERVE_SEQUENCE[0]));
    assert_eq!(entry.result, HistoryResult::PointScored { side: TeamSide::Away });
    assert_eq!((entry.home_score, entry.away_score), (0, 1));
}

#[test]
fn rotation_cycles_through_six_distinct_steps() {
    let mut state = MatchState::new();
    let mut seen = vec![state.sequence_index];
    for _ in 0..6 {
        score_point(&mut state, TeamSide::Home).unwrap();
        seen.push(state.sequence_index);
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4, 5, 0]);

    // The pure helper wraps the same way from any start.
    for start in 0..6 {
        let mut index = start;
        let mut intermediate = Vec::new();
        for _ in 0..6 {
            index = next_index(index);
            intermediate.push(index);
        }
        assert_eq!(index, start);
        intermediate.pop();
        intermediate.sort_unstable();
        intermediate.dedup();
        assert_eq!(intermediate.len(), 5);
    }
}

#[test]
fn set_won_at_25_with_two_point_margin() {
    let mut state = state_at(24, 10);
    score_point(&mut state, TeamSide::Home).unwrap();

    assert!(state.is_set_over);
    assert_eq!(state.home_sets_won, 1);
    assert_eq!(state.winning_team, Some(TeamSide::Home));
    // Point row plus the set-win announcement row.
    let last = state.sequence_history.last().unwrap();
    assert_eq!(last.result, HistoryResult::SetWon { side: TeamSide::Home });
    assert_eq!(last.point_number, None);
    assert_eq!(last.sequence_start, None);
}

#[test]
fn no_win_below_25() {
    let state = state_at(24, 0);
    assert!(!state.is_set_over);
    assert_eq!(state.home_sets_won, 0);
}

#[test]
fn deuce_needs_two_point_margin() {
    let mut state = state_at(24, 24);
    score_point(&mut state, TeamSide::Home).unwrap();
    assert_eq!((state.home_score, state.away_score), (25, 24));
    assert!(!state.is_set_over);

    score_point(&mut state, TeamSide::Home).unwrap();
    assert_eq!((state.home_score, state.away_score), (26, 24));
    assert!(state.is_set_over);
    assert_eq!(state.winning_team, Some(TeamSide::Home));
}

#[test]
fn sweep_to_25_0_leaves_26_history_rows() {
    let mut state = MatchState::new();
    for _ in 0..25 {
        score_point(&mut state, TeamSide::Home).unwrap();
    }
    assert!(state.is_set_over);
    assert_eq!(state.home_sets_won, 1);
    assert_eq!(state.winning_team, Some(TeamSide::Home));
    assert_eq!(state.sequence_history.len(), 26);
}

#[test]
fn scoring_refused_once_set_is_over() {
    let mut state = state_at(24, 0);
    score_point(&mut state, TeamSide::Home).unwrap();
    assert!(state.is_set_over);

    let before = state.clone();
    assert!(matches!(
        score_point(&mut state, TeamSide::Away),
        Err(MatchError::SetOver)
    ));
    assert!(matches!(
        take_timeout(&mut state, TeamSide::Away),
        Err(MatchError::SetOver)
    ));
    assert_eq!(state, before);
}

#[test]
fn timeout_records_count_and_history_row() {
    let mut state = state_at(3, 2);
    take_timeout(&mut state, TeamSide::Away).unwrap();

    assert_eq!(state.away_timeouts_used, 1);
    assert_eq!(state.timeouts_remaining(TeamSide::Away), 1);
    let entry = state.sequence_history.last().unwrap();
    assert_eq!(
        entry.result,
        HistoryResult::TimeoutTaken { side: TeamSide::Away, number: 1 }
    );
    assert_eq!(entry.point_number, None);
    assert_eq!((entry.home_score, entry.away_score), (3, 2));
}

#[test]
fn third_timeout_in_a_set_is_refused() {
    let mut state = MatchState::new();
    take_timeout(&mut state, TeamSide::Home).unwrap();
    take_timeout(&mut state, TeamSide::Home).unwrap();

    let before = state.clone();
    assert!(matches!(
        take_timeout(&mut state, TeamSide::Home),
        Err(MatchError::NoTimeoutsRemaining)
    ));
    assert_eq!(state, before);
    assert_eq!(state.home_timeouts_used, 2);
    // The other side's quota is untouched.
    take_timeout(&mut state, TeamSide::Away).unwrap();
    assert_eq!(state.away_timeouts_used, 1);
}
