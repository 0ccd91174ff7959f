//! TUI rendering with ratatui
//!
//! A Mastermind board on the left (one row per allowed turn) and the
//! solver's view on the right: suggestion, candidates, progress, messages.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{ALPHABET, Code, Verdict};
use crate::game::TurnPhase;
use crate::solver::Strategy;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let [header, body, input, status] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(f.area());

    render_header(f, app, header);

    // Board width follows the code: "NN │ " + two cells per symbol + pegs
    let board_width = u16::try_from(app.code_length() * 3 + 12).unwrap_or(u16::MAX);
    let [board, side] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width.max(24)), Constraint::Min(30)])
        .areas(body);

    render_board(f, app, board);
    render_side_panel(f, app, side);
    render_input(f, app, input);
    render_status(f, app, status);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let config = app.game.state().config();

    let mut spans = vec![
        Span::styled(
            " MASTERMIND ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  colours "),
    ];
    for (index, &letter) in ALPHABET.iter().take(config.colours).enumerate() {
        spans.push(Span::styled(
            (letter as char).to_string(),
            Style::default()
                .fg(symbol_colour(index))
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(
        format!(
            "  length {}  {}  strategy {}",
            config.length,
            if config.repeats { "repeats" } else { "no repeats" },
            app.game.strategy().name()
        ),
        Style::default().fg(Color::Gray),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

/// One row per turn up to the limit; the pending row shows the suggestion
fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let length = app.code_length();
    let max_turns = app.game.max_turns();
    let awaiting = app.game.state().phase() == TurnPhase::AwaitingGuess;
    let blank = "· ".repeat(length);

    // Scroll so the pending turn stays visible on short terminals
    let rows_fit = usize::from(area.height.saturating_sub(2));
    let first = (app.history.len() + 2).saturating_sub(rows_fit).max(1);
    let last = (first + rows_fit).saturating_sub(1).min(max_turns);

    let mut rows: Vec<ListItem> = Vec::with_capacity(rows_fit);
    for turn in first..=last {
        let mut spans = vec![Span::styled(
            format!("{turn:>2} │ "),
            Style::default().fg(Color::DarkGray),
        )];

        if let Some(entry) = app.history.get(turn - 1) {
            spans.extend(code_spans(&entry.guess));
            spans.push(peg_span(entry.verdict, length));
        } else if turn == app.history.len() + 1
            && awaiting
            && let Some(ref guess) = app.current_guess
        {
            spans.extend(
                code_spans(&guess.code)
                    .into_iter()
                    .map(|s| s.patch_style(Style::default().add_modifier(Modifier::DIM))),
            );
            spans.push(Span::styled(" ◀", Style::default().fg(Color::Yellow)));
        } else {
            spans.push(Span::styled(blank.clone(), Style::default().fg(Color::DarkGray)));
        }

        rows.push(ListItem::new(Line::from(spans)));
    }

    let board = List::new(rows).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Thick),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let [guess, candidates, progress, messages] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(7),
        ])
        .areas(area);

    render_current_guess(f, app, guess);
    render_candidates(f, app, candidates);
    render_search_progress(f, app, progress);
    render_messages(f, app, messages);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if let Some(ref guess) = app.current_guess {
        let metrics = &guess.metrics;
        // Entropy bar scaled to the most informative split the space allows
        let max_bits = (app.get_candidates_count().max(2) as f64).log2();
        let entropy_bar_len = ((metrics.entropy / max_bits) * 18.0).clamp(0.0, 18.0) as usize;
        let entropy_bar =
            "█".repeat(entropy_bar_len) + &"░".repeat(18_usize.saturating_sub(entropy_bar_len));

        let mut suggested = vec![Span::raw("Suggested: ")];
        suggested.extend(code_spans(&guess.code));

        let content = vec![
            Line::from(suggested),
            Line::from(format!("Worst:     {} candidates", metrics.max_partition)),
            Line::from(format!(
                "Expected:  {:.1} candidates remain",
                metrics.expected_remaining
            )),
            Line::from(format!(
                "Entropy:   [{}] {:.3} bits",
                entropy_bar, metrics.entropy
            )),
            Line::from(format!("Verdicts:  {} possible", metrics.partitions)),
        ];

        let paragraph = Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    } else {
        let paragraph = Paragraph::new("No suggestion available").block(block);
        f.render_widget(paragraph, area);
    }
}

/// Colour for the symbol at `index`, cycling through a fixed palette
const fn symbol_colour(index: usize) -> Color {
    const PALETTE: [Color; 8] = [
        Color::LightRed,
        Color::LightGreen,
        Color::LightBlue,
        Color::LightYellow,
        Color::LightMagenta,
        Color::LightCyan,
        Color::White,
        Color::Red,
    ];
    PALETTE[index % PALETTE.len()]
}

fn code_spans(code: &Code) -> Vec<Span<'static>> {
    code.symbols()
        .iter()
        .map(|s| {
            Span::styled(
                format!("{} ", s.letter()),
                Style::default()
                    .fg(symbol_colour(s.index()))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn peg_span(verdict: Verdict, length: usize) -> Span<'static> {
    Span::styled(
        format!(" {}", verdict.to_pegs(length)),
        Style::default().fg(Color::White),
    )
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let space = app.game.state().space();
    let candidates_count = space.len();

    let content = if candidates_count == 0 {
        vec![Line::from("No candidates remain")]
    } else if candidates_count <= 12 {
        let mut lines = vec![Line::from("Remaining (worst case if guessed):")];

        for candidate in space {
            let worst = crate::solver::minimax::calculate_max_remaining(candidate, space.codes());

            let mut spans = vec![Span::raw("  ")];
            spans.extend(code_spans(candidate));
            spans.push(Span::styled(
                format!(" ≤{worst}"),
                Style::default().fg(Color::Cyan),
            ));
            lines.push(Line::from(spans));
        }
        lines
    } else {
        vec![
            Line::from(format!("{candidates_count} candidates remaining")),
            Line::from(format!(
                "Information needed: {:.2} bits",
                (candidates_count as f64).log2()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.history.first().map_or_else(
        || app.get_candidates_count(),
        |first| first.candidates_before,
    );
    let total_bits = (total.max(1) as f64).log2();
    let current_candidates = app.get_candidates_count();
    let remaining_bits = (current_candidates.max(1) as f64).log2();
    let bits_gained = total_bits - remaining_bits;
    let progress_pct = if total_bits > 0.0 {
        ((bits_gained / total_bits * 100.0).clamp(0.0, 100.0)) as u16
    } else {
        100
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Information Gained ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{bits_gained:.1}/{total_bits:.1} bits"));

    f.render_widget(gauge, area);
}

/// Messages oldest first, so the latest sits just above the input bar
fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .map(|msg| {
            let (marker, colour) = match msg.style {
                MessageStyle::Info => ("›", Color::Gray),
                MessageStyle::Success => ("✓", Color::Green),
                MessageStyle::Error => ("✗", Color::Red),
            };
            Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(colour)),
                Span::styled(msg.text.clone(), Style::default().fg(colour)),
            ])
        })
        .collect();

    let messages = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Log ").borders(Borders::TOP));

    f.render_widget(messages, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver if app.game.state().phase() == TurnPhase::Won => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Red,
        ),
        InputMode::Feedback => (
            " Enter Verdict ('2 1' or B=Black W=White -=Empty, 'win') | TAB for manual code ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualCode => (
            " Enter Code to Try | ESC to cancel ",
            app.manual_code.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

/// Single unbordered line: turn, stats, candidates, key help
fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let max_turns = app.game.max_turns();
    let help = match app.input_mode {
        InputMode::GameOver => "q quit · n new",
        InputMode::ManualCode => "Enter play · Esc cancel",
        InputMode::Feedback if app.get_candidates_count() == 0 => "q quit · n new · u undo",
        InputMode::Feedback => "q quit · n new · u undo · Tab manual",
    };
    let dim = Style::default().fg(Color::DarkGray);

    let status = Line::from(vec![
        Span::styled(
            format!(
                " Turn {}/{max_turns} ",
                (app.game.state().turn() + 1).min(max_turns)
            ),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
        Span::styled(
            format!(
                "  {} won of {} ({:.0}%)",
                app.stats.games_won,
                app.stats.total_games,
                app.stats.win_rate()
            ),
            dim,
        ),
        Span::styled(format!("  {} candidates  ", app.get_candidates_count()), dim),
        Span::styled(help, dim),
    ]);

    f.render_widget(Paragraph::new(status).alignment(Alignment::Left), area);
}
