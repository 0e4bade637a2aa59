//! Opportunity records shown on the results screen.

use crate::OpportunityId;

/// Engagement metrics attached to an opportunity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub upvotes: u32,
    pub comments: u32,
    /// Relevance score in `[0, 1]`.
    pub relevance: f32,
}

impl Metrics {
    /// Relevance rendered as a whole percentage.
    #[must_use]
    pub fn relevance_percent(&self) -> u32 {
        (self.relevance.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

/// A problem paired with a proposed solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Opportunity {
    pub id: OpportunityId,
    pub problem: String,
    pub solution: String,
    pub tags: Vec<String>,
    pub metrics: Metrics,
}

impl Opportunity {
    /// Text placed on the clipboard by the copy action: problem, blank line, solution.
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        format!("{}\n\n{}", self.problem, self.solution)
    }
}
