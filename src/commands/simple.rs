//! Simple interactive CLI mode
//!
//! Text-based human-in-the-loop solver without TUI. The player holds the
//! secret and types the verdict for each suggested guess.

use crate::core::{Code, Verdict};
use crate::game::{Game, GameOutcome, GameState};
use crate::output::formatters::{coloured_code, coloured_pegs};
use crate::solver::Strategy;
use crate::solver::minimax::calculate_metrics;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidate lists at or below this size are printed in full
const SHOW_CANDIDATES: usize = 10;

/// What the player asked for at the verdict prompt
enum Command {
    Quit,
    New,
    Undo,
    Play(Code),
    Verdict(Verdict),
}

/// Run the simple interactive CLI mode
///
/// Reads commands from `input` and writes the session to `output`. Ends on
/// `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<S, R, W>(mut game: Game<S>, mut input: R, mut output: W) -> io::Result<()>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    let config = *game.state().config();
    let out = &mut output;

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║             Mastermind Solver - Interactive Mode             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Think of a secret of {} symbols from {} ({}).",
        config.length,
        colour_range(config.colours),
        if config.repeats { "repeats allowed" } else { "no repeats" }
    )?;
    writeln!(out, "After each guess, enter the verdict:\n")?;
    writeln!(out, "  - Counts: '2 1' for 2 black and 1 white")?;
    writeln!(out, "  - Pegs:   B for black, W for white, - for empty (e.g. 'BBW-')")?;
    writeln!(out, "  - Or type 'win' if the guess was right!\n")?;
    writeln!(
        out,
        "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last verdict,"
    )?;
    writeln!(out, "          'play <CODE>' to play your own guess instead\n")?;

    let initial = game.state().clone();
    let mut snapshots: Vec<GameState> = Vec::new();

    loop {
        if let Some(outcome) = game.state().outcome() {
            print_outcome(out, game.state(), &outcome)?;

            let answer = prompt(&mut input, out, "Play again? (yes/no/undo)")?;
            match answer.as_deref().map(str::to_lowercase).as_deref() {
                Some("yes" | "y") => {
                    game.restore(initial.clone());
                    snapshots.clear();
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                Some("undo" | "u") if !snapshots.is_empty() => {
                    undo(&mut game, &mut snapshots, out)?;
                }
                _ => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
            continue;
        }

        let Some(suggestion) = game.propose() else {
            continue;
        };

        let candidates = game.state().space();
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(
            out,
            "Turn {}: {} candidates remaining",
            game.state().turn() + 1,
            candidates.len()
        )?;
        writeln!(out, "────────────────────────────────────────────────────────────")?;

        let metrics = calculate_metrics(&suggestion, candidates.codes());
        writeln!(out, "\n📊 Suggested guess: {}", coloured_code(&suggestion))?;
        writeln!(out, "   Worst case:       {} candidates", metrics.max_partition)?;
        writeln!(
            out,
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        )?;
        writeln!(out, "   Entropy:          {:.3} bits\n", metrics.entropy)?;

        if candidates.len() <= SHOW_CANDIDATES {
            writeln!(out, "Remaining candidates:")?;
            for candidate in candidates {
                writeln!(out, "  • {}", coloured_code(candidate))?;
            }
            writeln!(out)?;
        }

        let mut guess = suggestion;
        loop {
            let Some(line) = prompt(&mut input, out, "Enter verdict (e.g. '1 2', 'win', or command)")?
            else {
                return Ok(());
            };

            match parse_command(&line, &game) {
                Ok(Command::Quit) => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                Ok(Command::New) => {
                    game.restore(initial.clone());
                    snapshots.clear();
                    writeln!(out, "\n🔄 New game started!\n")?;
                    break;
                }
                Ok(Command::Undo) => {
                    if undo(&mut game, &mut snapshots, out)? {
                        break;
                    }
                }
                Ok(Command::Play(code)) => {
                    if game.state().history().contains_guess(&code) {
                        writeln!(out, "⚠ {code} was already played and tells you nothing new")?;
                    }
                    writeln!(out, "Playing {} instead\n", coloured_code(&code))?;
                    guess = code;
                }
                Ok(Command::Verdict(verdict)) => {
                    snapshots.push(game.state().clone());
                    match game.apply_verdict(guess.clone(), verdict) {
                        Ok(report) => {
                            writeln!(
                                out,
                                "✓ {} {}  ({} → {} candidates)\n",
                                coloured_code(&report.record.guess),
                                coloured_pegs(verdict, config.length),
                                report.candidates_before,
                                report.candidates_after
                            )?;
                            break;
                        }
                        Err(e) => {
                            snapshots.pop();
                            writeln!(out, "❌ {e}\n")?;
                        }
                    }
                }
                Err(message) => writeln!(out, "❌ {message}\n")?,
            }
        }
    }
}

fn parse_command<S: Strategy>(line: &str, game: &Game<S>) -> Result<Command, String> {
    let config = game.state().config();
    let lower = line.to_lowercase();

    match lower.as_str() {
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "new" | "n" => Ok(Command::New),
        "undo" | "u" => Ok(Command::Undo),
        "win" | "correct" | "solved" => Ok(Command::Verdict(Verdict::winning(config.length))),
        _ => {
            if let Some(code) = lower.strip_prefix("play ") {
                return config
                    .parse_code(code)
                    .map(Command::Play)
                    .map_err(|e| e.to_string());
            }
            Verdict::parse(line, config.length)
                .map(Command::Verdict)
                .map_err(|e| e.to_string())
        }
    }
}

/// Restore the most recent snapshot; returns whether anything was undone
fn undo<S: Strategy, W: Write>(
    game: &mut Game<S>,
    snapshots: &mut Vec<GameState>,
    out: &mut W,
) -> io::Result<bool> {
    if let Some(previous) = snapshots.pop() {
        game.restore(previous);
        writeln!(out, "✓ Undone! Back to turn {}\n", game.state().turn() + 1)?;
        Ok(true)
    } else {
        writeln!(out, "Nothing to undo!\n")?;
        Ok(false)
    }
}

fn print_outcome<W: Write>(out: &mut W, state: &GameState, outcome: &GameOutcome) -> io::Result<()> {
    let length = state.config().length;

    match outcome {
        GameOutcome::Won { turn, secret } => {
            writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
            writeln!(
                out,
                "{}",
                "          🎉  M A S T E R M I N D   S O L V E D !  🎉          "
                    .bright_green()
                    .bold()
            )?;
            writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
            writeln!(
                out,
                "\n  Secret {} found in {} {}",
                coloured_code(secret),
                turn.to_string().bright_cyan().bold(),
                if *turn == 1 { "turn" } else { "turns" }
            )?;
        }
        GameOutcome::Exhausted { turns, reason } => {
            writeln!(
                out,
                "\n{}",
                format!("❌ Game over after {turns} turns: {reason}").red().bold()
            )?;
        }
    }

    writeln!(out, "\n  Guess history:")?;
    for record in state.history() {
        writeln!(
            out,
            "    {}. {} {}",
            record.turn.to_string().bright_black(),
            coloured_code(&record.guess),
            coloured_pegs(record.verdict, length)
        )?;
    }
    writeln!(out)
}

fn colour_range(colours: usize) -> String {
    let last = crate::core::ALPHABET[colours.saturating_sub(1)] as char;
    format!("A-{last}")
}

/// Prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
