//! Deduction-based scorecard shared by the facet analyzers.
//!
//! Every analyzer starts at 100, flags issues with fixed penalties, and
//! clamps the final score at 0. Modeling the accumulator here keeps each
//! analyzer a flat list of `(condition, penalty, message)` rules.

/// Accumulates penalties and issue messages for one analysis facet.
#[derive(Debug, Default)]
pub struct Scorecard {
    deducted: u32,
    issues: Vec<String>,
}

impl Scorecard {
    /// Start a fresh scorecard at the full score of 100.
    pub const fn new() -> Self {
        Self {
            deducted: 0,
            issues: Vec::new(),
        }
    }

    /// Record an issue and deduct `penalty` points.
    pub fn flag(&mut self, penalty: u32, message: impl Into<String>) {
        self.deducted += penalty;
        self.issues.push(message.into());
    }

    /// The current score, clamped to `[0, 100]`.
    pub fn score(&self) -> u8 {
        100u32.saturating_sub(self.deducted) as u8
    }

    /// Consume the scorecard, yielding the clamped score and the issues
    /// in the order they were flagged.
    pub fn into_parts(self) -> (u8, Vec<String>) {
        let score = self.score();
        (score, self.issues)
    }
}
