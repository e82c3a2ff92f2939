//! Data structures for the scoreboard: rotation steps, history rows, match state.

mod history;
mod match_state;
mod sequence;

pub use history::{ActionRecord, HistoryEntry, HistoryResult};
pub use match_state::{
    MatchError, MatchId, MatchState, DEFAULT_AWAY_COLOR, DEFAULT_AWAY_NAME, DEFAULT_HOME_COLOR,
    DEFAULT_HOME_NAME,
};
pub use sequence::{
    first_serve_index, next_index, SequenceAction, SequenceStep, TeamSide, SERVE_SEQUENCE,
};
