//! TUI application state and logic

use crate::core::{Code, Verdict};
use crate::game::{ExhaustionReason, Game, GameState, TurnPhase};
use crate::solver::StrategyType;
use crate::solver::minimax::{GuessMetrics, calculate_metrics};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeMap;
use std::io;

/// State snapshot for undo functionality
#[derive(Clone)]
pub struct StateSnapshot {
    pub state: GameState,
    pub history: Vec<HistoryEntry>,
}

/// Application state
pub struct App {
    pub game: Game<StrategyType>,
    initial: GameState,
    pub history: Vec<HistoryEntry>,
    pub current_guess: Option<GuessInfo>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_code: String,
    pub undo_stack: Vec<StateSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualCode,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Code,
    pub verdict: Verdict,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub code: Code,
    pub metrics: GuessMetrics,
}

impl GuessInfo {
    fn new(code: Code, candidates: &[Code]) -> Self {
        let metrics = calculate_metrics(&code, candidates);
        Self { code, metrics }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub turn_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(game: Game<StrategyType>) -> Self {
        let config = game.state().config();
        let welcome = format!(
            "Think of a secret: {} symbols, colours A-{}, {}.",
            config.length,
            crate::core::ALPHABET[config.colours.saturating_sub(1)] as char,
            if config.repeats { "repeats allowed" } else { "no repeats" }
        );

        Self {
            initial: game.state().clone(),
            game,
            history: Vec::new(),
            current_guess: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: welcome,
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter the verdict as '2 1' (black white) or pegs 'BBW-'".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_code: String::new(),
            undo_stack: Vec::new(),
        }
    }

    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.game.state().config().length
    }

    pub fn compute_suggestion(&mut self) {
        let guess = self.game.propose();
        self.current_guess =
            guess.map(|code| GuessInfo::new(code, self.game.state().space().codes()));

        if self.current_guess.is_none() && !matches!(self.input_mode, InputMode::GameOver) {
            self.add_message("No valid guesses remaining!", MessageStyle::Error);
        }
    }

    pub fn handle_feedback(&mut self, feedback: &str) {
        let length = self.code_length();
        let verdict = match feedback.trim().to_lowercase().as_str() {
            "win" => Ok(Verdict::winning(length)),
            _ => Verdict::parse(feedback, length),
        };

        let verdict = match verdict {
            Ok(v) => v,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let Some(guess_info) = self.current_guess.take() else {
            self.add_message("No guess to score!", MessageStyle::Error);
            return;
        };

        let snapshot = StateSnapshot {
            state: self.game.state().clone(),
            history: self.history.clone(),
        };

        let report = match self.game.apply_verdict(guess_info.code.clone(), verdict) {
            Ok(report) => report,
            Err(e) => {
                self.current_guess = Some(guess_info);
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        self.undo_stack.push(snapshot);
        self.input_buffer.clear();
        self.history.push(HistoryEntry {
            guess: report.record.guess,
            verdict,
            candidates_before: report.candidates_before,
            candidates_after: report.candidates_after,
        });

        match report.phase {
            TurnPhase::Won => {
                let turns = self.history.len();
                self.record_game(Some(turns));

                let celebration = match turns {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two turns! 🔥",
                    3 => "✨ SPLENDID! Three turns! ✨",
                    4 => "👏 GREAT JOB! Four turns! 👏",
                    5 => "🎉 NICE WORK! Five turns! 🎉",
                    _ => "🎊 SOLVED! 🎊",
                };

                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            TurnPhase::Exhausted(ExhaustionReason::PoolExhausted) => {
                self.add_message(
                    "No candidates remain - a verdict may be wrong. Press 'u' to undo.",
                    MessageStyle::Error,
                );
            }
            TurnPhase::Exhausted(ExhaustionReason::TurnLimitReached) => {
                self.record_game(None);
                self.add_message(
                    &format!(
                        "Turn limit reached with {} candidates left.",
                        report.candidates_after
                    ),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            // A returned report is never in a transient phase
            _ => {
                self.compute_suggestion();
                self.add_message(
                    &format!("{} candidates remaining", report.candidates_after),
                    MessageStyle::Info,
                );
            }
        }
    }

    fn record_game(&mut self, won_in: Option<usize>) {
        self.stats.total_games += 1;
        if let Some(turns) = won_in {
            self.stats.games_won += 1;
            *self.stats.turn_distribution.entry(turns).or_insert(0) += 1;
        }
        self.input_mode = InputMode::GameOver;
    }

    pub fn new_game(&mut self) {
        self.game.restore(self.initial.clone());
        self.history.clear();
        self.undo_stack.clear();
        self.current_guess = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started! Think of a new secret.", MessageStyle::Info);
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if let Some(snapshot) = self.undo_stack.pop() {
            self.game.restore(snapshot.state);
            self.history = snapshot.history;
            self.input_buffer.clear();
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn get_candidates_count(&self) -> usize {
        self.game.state().space().len()
    }

    pub fn use_manual_code(&mut self) {
        let parsed = self.game.state().config().parse_code(&self.manual_code);

        let code = match parsed {
            Ok(code) => code,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        if self.game.state().history().contains_guess(&code) {
            self.add_message(
                &format!("Note: {code} was already played"),
                MessageStyle::Info,
            );
        }

        let info = GuessInfo::new(code, self.game.state().space().codes());

        // Compare with suggested code if available
        if let Some(ref suggested) = self.current_guess
            && info.metrics.max_partition > suggested.metrics.max_partition
        {
            self.add_message(
                &format!(
                    "Note: Suggested code leaves at most {} ({} fewer)",
                    suggested.metrics.max_partition,
                    info.metrics.max_partition - suggested.metrics.max_partition
                ),
                MessageStyle::Info,
            );
        }

        self.add_message(
            &format!(
                "Using: {} (worst case {} candidates)",
                info.code, info.metrics.max_partition
            ),
            MessageStyle::Success,
        );

        self.current_guess = Some(info);
        self.input_mode = InputMode::Feedback;
        self.manual_code.clear();
    }

    /// Apply one key press to the current input mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') => {
                    self.new_game();
                }
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                // Command letters only act on an empty buffer so 'win' can be typed
                KeyCode::Char('q') if self.input_buffer.is_empty() => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') if self.input_buffer.is_empty() => {
                    self.new_game();
                }
                KeyCode::Char('u') if self.input_buffer.is_empty() => {
                    self.undo_last();
                }
                KeyCode::Tab => {
                    if self.get_candidates_count() > 0 && !self.game.state().is_over() {
                        self.input_mode = InputMode::ManualCode;
                        let length = self.code_length();
                        self.add_message(
                            &format!("Enter your own code ({length} symbols)"),
                            MessageStyle::Info,
                        );
                    }
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = self.input_buffer.clone();
                    self.handle_feedback(&input);
                }
                _ => {}
            },
            InputMode::ManualCode => match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_code.clear();
                    self.add_message("Cancelled manual code entry", MessageStyle::Info);
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_code.clear();
                }
                KeyCode::Char(c) => {
                    if self.manual_code.len() < self.code_length() && c.is_ascii_alphabetic() {
                        self.manual_code.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.manual_code.pop();
                }
                KeyCode::Enter => {
                    self.use_manual_code();
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    crate::logging::silence();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Compute initial suggestion
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, PlayConfig};

    fn app() -> App {
        let config = PlayConfig::new(GameConfig::new(6, 4, true));
        let game = Game::new(&config, StrategyType::default()).unwrap();
        let mut app = App::new(game);
        app.compute_suggestion();
        app
    }

    #[test]
    fn first_suggestion_is_first_code() {
        let app = app();
        assert_eq!(app.current_guess.as_ref().unwrap().code.to_string(), "AAAA");
        assert_eq!(app.get_candidates_count(), 1296);
    }

    #[test]
    fn feedback_narrows_and_suggests_again() {
        let mut app = app();
        app.handle_feedback("0 0");

        assert_eq!(app.get_candidates_count(), 625);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.current_guess.as_ref().unwrap().code.to_string(), "BBBB");
    }

    #[test]
    fn invalid_feedback_keeps_state() {
        let mut app = app();
        app.handle_feedback("3 1");
        app.handle_feedback("xyz");

        assert!(app.history.is_empty());
        assert!(app.current_guess.is_some());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn win_records_statistics() {
        let mut app = app();
        app.handle_feedback("0 0");
        app.handle_feedback("win");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.turn_distribution.get(&2), Some(&1));
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn undo_restores_snapshot() {
        let mut app = app();
        app.handle_feedback("0 0");
        app.undo_last();

        assert!(app.history.is_empty());
        assert_eq!(app.get_candidates_count(), 1296);
        assert_eq!(app.game.state().turn(), 0);

        app.undo_last();
        assert_eq!(app.messages.last().unwrap().text, "Nothing to undo!");
    }

    #[test]
    fn manual_code_replaces_suggestion() {
        let mut app = app();
        app.manual_code = "EEFF".to_string();
        app.use_manual_code();
        assert_eq!(app.current_guess.as_ref().unwrap().code.to_string(), "EEFF");

        app.handle_feedback("0 0");
        assert_eq!(app.get_candidates_count(), 256);
    }

    #[test]
    fn manual_code_notes_repeated_guess() {
        let mut app = app();
        app.handle_feedback("0 0");
        app.manual_code = "AAAA".to_string();
        app.use_manual_code();

        assert!(app.messages.iter().any(|m| m.text == "Note: AAAA was already played"));
        assert_eq!(app.current_guess.as_ref().unwrap().code.to_string(), "AAAA");
    }

    #[test]
    fn manual_code_must_be_legal() {
        let mut app = app();
        app.manual_code = "ZZZZ".to_string();
        app.use_manual_code();

        assert_eq!(app.current_guess.as_ref().unwrap().code.to_string(), "AAAA");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn new_game_resets_board_but_keeps_stats() {
        let mut app = app();
        app.handle_feedback("win");
        app.new_game();

        assert_eq!(app.input_mode, InputMode::Feedback);
        assert!(app.history.is_empty());
        assert_eq!(app.get_candidates_count(), 1296);
        assert_eq!(app.stats.total_games, 1);
    }

    fn type_keys(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_win_is_not_taken_as_commands() {
        let mut app = app();
        type_keys(&mut app, "win");
        assert_eq!(app.input_buffer, "win");

        app.handle_key(KeyEvent::from(KeyCode::Enter));

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.history.len(), 1);
        assert!(!app.should_quit);
    }

    #[test]
    fn command_keys_act_on_empty_buffer() {
        let mut app = app();
        type_keys(&mut app, "0 0");
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.history.len(), 1);

        type_keys(&mut app, "u");
        assert!(app.history.is_empty());
        assert!(app.input_buffer.is_empty());

        type_keys(&mut app, "q");
        assert!(app.should_quit);
    }
}
