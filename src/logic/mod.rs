//! Match business logic: scoring, time-outs, undo, set transitions, export.

mod export;
mod scoring;
mod set_transition;
mod timeout;
mod undo;

pub use export::write_history_csv;
pub use scoring::score_point;
pub use set_transition::start_next_set;
pub use timeout::take_timeout;
pub use undo::undo_last_action;
