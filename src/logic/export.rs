//! CSV export of the match history table.

use crate::models::MatchState;
use std::io::Write;

/// Write the history table as CSV, newest row first (the order the
/// scoreboard displays it).
pub fn write_history_csv<W: Write>(state: &MatchState, writer: W) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record([
        "set",
        "point",
        "sequence_start",
        "result",
        "home_score",
        "away_score",
        "recorded_at",
    ])?;

    for entry in state.sequence_history.iter().rev() {
        let point = entry
            .point_number
            .map(|n| n.to_string())
            .unwrap_or_default();
        let start = entry
            .sequence_start
            .map(|s| s.label(&state.home_team, &state.away_team))
            .unwrap_or_default();
        out.write_record([
            entry.set_number.to_string(),
            point,
            start,
            entry.result.describe(
                &state.home_team,
                &state.away_team,
                MatchState::MAX_TIMEOUTS_PER_SET,
            ),
            entry.home_score.to_string(),
            entry.away_score.to_string(),
            entry.recorded_at.to_rfc3339(),
        ])?;
    }

    out.flush()?;
    Ok(())
}
