//! Volleyball scoreboard: library with models and match logic.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{score_point, start_next_set, take_timeout, undo_last_action, write_history_csv};
pub use models::{
    ActionRecord, HistoryEntry, HistoryResult, MatchError, MatchId, MatchState, SequenceAction,
    SequenceStep, TeamSide, SERVE_SEQUENCE,
};
