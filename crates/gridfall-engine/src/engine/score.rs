/// Points awarded per cleared line.
pub const POINTS_PER_LINE: usize = 100;

/// Accumulated score and line count for one game.
///
/// Scoring is flat: every cleared line is worth [`POINTS_PER_LINE`] points,
/// with no combo or multi-line bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTracker {
    score: usize,
    lines: usize,
}

impl ScoreTracker {
    /// Credits `lines` freshly cleared lines.
    pub fn record_clear(&mut self, lines: usize) {
        self.lines += lines;
        self.score += lines * POINTS_PER_LINE;
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn lines_cleared(&self) -> usize {
        self.lines
    }
}
