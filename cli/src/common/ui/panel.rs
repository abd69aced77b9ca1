//! # Status Panels (`common::ui::panel`)
//!
//! File: cli/src/common/ui/panel.rs
//!
//! Renders a message inside a rounded box:
//!
//! ```text
//! ╭───────────────────────────────────╮
//! │ Created TAR archive: backup.tar   │
//! ╰───────────────────────────────────╯
//! ```
//!
//! Success panels are green, error panels red. Colours are dropped when
//! stdout is not a terminal unless the configuration forces them. Long lines
//! wrap at the terminal width; redirected output is not wrapped.
//!
use super::{Reporter, Tone};
use crate::core::config::ColorMode;
use console::{measure_text_width, Style, Term};
use tracing::warn;

/// Border plus one space of padding on each side.
const FRAME_WIDTH: usize = 4;

/// Writes status panels to stdout.
pub struct ConsoleReporter {
    term: Term,
    success_style: Style,
    error_style: Style,
}

impl ConsoleReporter {
    pub fn new(color: ColorMode) -> Self {
        let (success_style, error_style) = (Style::new().green(), Style::new().red());
        let (success_style, error_style) = match color {
            ColorMode::Auto => (success_style, error_style),
            ColorMode::Always => (
                success_style.force_styling(true),
                error_style.force_styling(true),
            ),
            ColorMode::Never => (
                success_style.force_styling(false),
                error_style.force_styling(false),
            ),
        };
        Self {
            term: Term::stdout(),
            success_style,
            error_style,
        }
    }

    /// Terminal width, or unlimited when stdout is redirected so piped
    /// output is never wrapped mid-word.
    fn max_width(&self) -> usize {
        self.term
            .size_checked()
            .map(|(_rows, cols)| cols as usize)
            .unwrap_or(usize::MAX)
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, tone: Tone, message: &str) {
        let style = match tone {
            Tone::Success => &self.success_style,
            Tone::Error => &self.error_style,
        };
        for line in render_panel(message, self.max_width()) {
            if let Err(e) = self.term.write_line(&style.apply_to(line).to_string()) {
                warn!("Failed to write status panel: {}", e);
                return;
            }
        }
    }
}

/// Lays out `message` in a box no wider than `max_width` columns.
///
/// Lines that do not fit are wrapped at character boundaries.
pub fn render_panel(message: &str, max_width: usize) -> Vec<String> {
    let max_inner = max_width.saturating_sub(FRAME_WIDTH).max(1);
    let body: Vec<String> = message
        .lines()
        .flat_map(|line| wrap(line, max_inner))
        .collect();
    let body = if body.is_empty() { vec![String::new()] } else { body };
    let inner = body.iter().map(|l| measure_text_width(l)).max().unwrap_or(0);

    let horizontal = "─".repeat(inner + 2);
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format!("╭{}╮", horizontal));
    for line in body {
        let pad = inner - measure_text_width(&line);
        lines.push(format!("│ {}{} │", line, " ".repeat(pad)));
    }
    lines.push(format!("╰{}╯", horizontal));
    lines
}

fn wrap(line: &str, width: usize) -> Vec<String> {
    if measure_text_width(line) <= width {
        return vec![line.to_string()];
    }
    let mut chunks = Vec::new();
    let mut current = String::new();
    for ch in line.chars() {
        current.push(ch);
        if measure_text_width(&current) >= width {
            chunks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
