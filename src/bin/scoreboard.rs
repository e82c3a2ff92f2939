//! Single binary terminal scoreboard: commands from stdin, state to stdout.
//! Run with: cargo run --bin scoreboard
//! The match snapshot is loaded at startup and saved on quit.
//! Override the snapshot path with env: SCOREBOARD_FILE (e.g. match.json).

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use volley_scoreboard::{
    score_point, start_next_set, storage, take_timeout, undo_last_action, write_history_csv,
    MatchState, TeamSide,
};

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("scoreboard.json")
}

fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let path = std::env::var_os("SCOREBOARD_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(default_snapshot_path);
    log::info!("snapshot file: {}", path.display());

    let mut state = storage::load_or_default(&path);
    render(&state);
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "h" | "home" => apply(&mut state, |s| score_point(s, TeamSide::Home)),
            "a" | "away" => apply(&mut state, |s| score_point(s, TeamSide::Away)),
            "th" => apply(&mut state, |s| take_timeout(s, TeamSide::Home)),
            "ta" => apply(&mut state, |s| take_timeout(s, TeamSide::Away)),
            "u" | "undo" => apply(&mut state, undo_last_action),
            "n" | "next" => {
                // Entering the third set requires a serve choice; an empty or
                // unrecognized answer falls back to the home side.
                let choice = if state.is_set_over && state.current_set == 2 {
                    prompt_serve_choice(&state, &mut lines)?
                } else {
                    None
                };
                apply(&mut state, |s| start_next_set(s, choice));
            }
            "teams" => match rest.split_once(',') {
                Some((home, away)) => {
                    state.set_team_names(home, away);
                    render(&state);
                }
                None => println!("usage: teams <home name>,<away name>"),
            },
            "colors" => match rest.split_once(',') {
                Some((home, away)) => {
                    state.set_team_colors(home, away);
                    render(&state);
                }
                None => println!("usage: colors <home color>,<away color>"),
            },
            "history" => print_history(&state),
            "export" => {
                if rest.is_empty() {
                    println!("usage: export <file.csv>");
                } else {
                    match File::create(rest).map_err(csv::Error::from).and_then(|f| {
                        write_history_csv(&state, f)
                    }) {
                        Ok(()) => println!("history written to {rest}"),
                        Err(err) => log::error!("export failed: {err}"),
                    }
                }
            }
            "reset" => {
                print!("Reset the whole match? (y/N) ");
                io::stdout().flush()?;
                let answer = lines.next().transpose()?.unwrap_or_default();
                if answer.trim().eq_ignore_ascii_case("y") {
                    state.reset();
                    storage::discard(&path);
                    render(&state);
                }
            }
            "help" => print_help(),
            "q" | "quit" => break,
            other => println!("unknown command '{other}' (try 'help')"),
        }
    }

    if let Err(err) = storage::save(&path, &state) {
        log::error!("could not save snapshot {}: {}", path.display(), err);
    }
    Ok(())
}

/// Run one mutating operation, surface a refused one as a notice, and
/// re-render the scoreboard from the full state.
fn apply<F>(state: &mut MatchState, op: F)
where
    F: FnOnce(&mut MatchState) -> Result<(), volley_scoreboard::MatchError>,
{
    match op(state) {
        Ok(()) => render(state),
        Err(notice) => println!("{notice}"),
    }
}

fn prompt_serve_choice<B: BufRead>(
    state: &MatchState,
    lines: &mut io::Lines<B>,
) -> io::Result<Option<TeamSide>> {
    print!(
        "Who serves first in set 3? [h]{} / [a]{}: ",
        state.home_team, state.away_team
    );
    io::stdout().flush()?;
    let answer = lines.next().transpose()?.unwrap_or_default();
    Ok(match answer.trim() {
        "h" => Some(TeamSide::Home),
        "a" => Some(TeamSide::Away),
        _ => None,
    })
}

fn render(state: &MatchState) {
    println!(
        "\nSet {} | {} {} : {} {} | Sets won {} - {}",
        state.current_set,
        state.home_team,
        state.home_score,
        state.away_score,
        state.away_team,
        state.home_sets_won,
        state.away_sets_won
    );
    if state.is_set_over {
        let winner = state
            .winning_team
            .map(|side| state.team_name(side))
            .unwrap_or("?");
        println!("{} wins set {}! ('next' to continue)", winner, state.current_set);
    } else {
        println!(
            "Next: {}",
            state.current_step().label(&state.home_team, &state.away_team)
        );
    }
    println!(
        "Time-outs left | {}: {} | {}: {}{}",
        state.home_team,
        state.timeouts_remaining(TeamSide::Home),
        state.away_team,
        state.timeouts_remaining(TeamSide::Away),
        if state.can_undo() { " | undo available" } else { "" }
    );
}

fn print_history(state: &MatchState) {
    if state.sequence_history.is_empty() {
        println!("no history yet");
        return;
    }
    println!("set  pt   sequence start            result                          score");
    for entry in state.sequence_history.iter().rev() {
        let point = entry
            .point_number
            .map(|n| n.to_string())
            .unwrap_or_default();
        let start = entry
            .sequence_start
            .map(|s| s.label(&state.home_team, &state.away_team))
            .unwrap_or_default();
        println!(
            "{:<4} {:<4} {:<25} {:<31} {}-{}",
            entry.set_number,
            point,
            start,
            entry.result.describe(
                &state.home_team,
                &state.away_team,
                MatchState::MAX_TIMEOUTS_PER_SET
            ),
            entry.home_score,
            entry.away_score
        );
    }
}

fn print_help() {
    println!(
        "commands: h/a score | th/ta time-out | u undo | n next set | \
         teams <h>,<a> | colors <h>,<a> | history | export <file> | reset | quit"
    );
}
