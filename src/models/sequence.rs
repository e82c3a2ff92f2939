//! Serve/toss rotation: the fixed 6-step sequence ring.

use serde::{Deserialize, Serialize};

/// Which side of the court an action belongs to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    #[default]
    Home,
    Away,
}

impl TeamSide {
    /// The opposite side.
    pub fn other(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

/// What the side does at this step of the rotation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceAction {
    Serve,
    Toss,
}

/// One step of the rotation: which side serves or tosses next.
///
/// Steps are tagged values; the display text ("Reds Serve") is rendered at
/// the presentation boundary with the actual team names, so names containing
/// the words "Home Team" or "Away Team" cannot corrupt the output.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SequenceStep {
    pub side: TeamSide,
    pub action: SequenceAction,
}

impl SequenceStep {
    /// Render this step with real team names.
    pub fn label(&self, home_name: &str, away_name: &str) -> String {
        let name = match self.side {
            TeamSide::Home => home_name,
            TeamSide::Away => away_name,
        };
        match self.action {
            SequenceAction::Serve => format!("{name} Serves"),
            SequenceAction::Toss => format!("{name} Tosses"),
        }
    }
}

const fn step(side: TeamSide, action: SequenceAction) -> SequenceStep {
    SequenceStep { side, action }
}

/// The fixed rotation. Never mutated; a restored snapshot cannot change it.
pub const SERVE_SEQUENCE: [SequenceStep; 6] = [
    step(TeamSide::Home, SequenceAction::Serve),
    step(TeamSide::Away, SequenceAction::Toss),
    step(TeamSide::Home, SequenceAction::Toss),
    step(TeamSide::Away, SequenceAction::Serve),
    step(TeamSide::Home, SequenceAction::Toss),
    step(TeamSide::Away, SequenceAction::Toss),
];

/// Advance one step around the ring.
pub fn next_index(index: usize) -> usize {
    (index + 1) % SERVE_SEQUENCE.len()
}

/// Index of the step where the given side serves (each side serves exactly
/// once per rotation). Used when a new set picks its opening server.
pub fn first_serve_index(side: TeamSide) -> usize {
    SERVE_SEQUENCE
        .iter()
        .position(|s| s.side == side && s.action == SequenceAction::Serve)
        .unwrap_or(0)
}
