//! Formatting utilities for terminal output

use crate::core::{Code, Verdict};
use colored::{Color, Colorize};

/// Terminal colours cycled through for code symbols
const PALETTE: [Color; 8] = [
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightBlue,
    Color::BrightYellow,
    Color::BrightMagenta,
    Color::BrightCyan,
    Color::White,
    Color::Red,
];

/// Terminal colour for the symbol at `index`
#[must_use]
pub const fn symbol_colour(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Format a code with each symbol in its own colour
#[must_use]
pub fn coloured_code(code: &Code) -> String {
    code.symbols()
        .iter()
        .map(|s| {
            s.letter()
                .to_string()
                .color(symbol_colour(s.index()))
                .bold()
                .to_string()
        })
        .collect()
}

/// Format a verdict as coloured pegs for a `length`-symbol code
#[must_use]
pub fn coloured_pegs(verdict: Verdict, length: usize) -> String {
    verdict
        .to_pegs(length)
        .chars()
        .map(|peg| match peg {
            '●' => peg.to_string().bright_white().bold().to_string(),
            '○' => peg.to_string().white().to_string(),
            _ => peg.to_string().bright_black().to_string(),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
