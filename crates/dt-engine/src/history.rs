//! Roll history kept for the game master.

use crate::dice::RollOutcome;

/// Sink receiving one summary line per completed roll.
pub trait HistoryLog {
    /// Append a line (including its trailing newline).
    fn append(&mut self, line: &str);
}

/// Summary line of a roll, e.g. `3×d20 → 4 + 11 + 9 + 2 = 26\n`.
pub fn history_line(outcome: &RollOutcome) -> String {
    let faces: Vec<String> = outcome.results().iter().map(u32::to_string).collect();
    let modifier = match outcome.modifier() {
        0 => String::new(),
        m if m > 0 => format!(" + {m}"),
        m => format!(" - {}", m.unsigned_abs()),
    };
    format!(
        "{}×{} → {}{} = {}\n",
        outcome.quantity(),
        outcome.die(),
        faces.join(" + "),
        modifier,
        outcome.total()
    )
}

/// In-memory history for the running session.
#[derive(Debug, Clone, Default)]
pub struct RollHistory {
    lines: Vec<String>,
}

impl RollHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome.
    pub fn record(&mut self, outcome: &RollOutcome) {
        self.append(&history_line(outcome));
    }

    /// All lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of recorded rolls.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been rolled yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The whole history as one text block.
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

impl HistoryLog for RollHistory {
    fn append(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
