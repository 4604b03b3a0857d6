pub mod extractors;
pub mod gates;
pub mod patterns;
pub mod rules;
mod text;

pub use text::DocumentText;

use shared_types::{NdaDocument, ReviewReport, ReviewStatus};

/// Which evaluation strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStrategy {
    /// Run every clause rule and collect all findings.
    #[default]
    Accumulating,
    /// Run the ordered gate checks, stopping at the first failure.
    Gating,
}

/// ReviewEngine entry point
pub struct ReviewEngine {
    strategy: ReviewStrategy,
}

impl ReviewEngine {
    pub fn new(strategy: ReviewStrategy) -> Self {
        Self { strategy }
    }

    pub fn accumulating() -> Self {
        Self::new(ReviewStrategy::Accumulating)
    }

    pub fn gating() -> Self {
        Self::new(ReviewStrategy::Gating)
    }

    pub fn review(&self, document: &NdaDocument) -> ReviewReport {
        self.review_text(&document.id, &document.text)
    }

    /// Review raw text. Never fails; empty text simply triggers every
    /// missing-clause rule (accumulating) or the first gate (gating).
    pub fn review_text(&self, document_id: &str, text: &str) -> ReviewReport {
        let text = DocumentText::new(text);

        let (status, findings) = match self.strategy {
            ReviewStrategy::Accumulating => {
                let findings = rules::evaluate(&text);
                let status = if findings.is_empty() {
                    ReviewStatus::Approved
                } else {
                    ReviewStatus::ApprovedWithSuggestions
                };
                (status, findings)
            }
            ReviewStrategy::Gating => match gates::evaluate(&text) {
                None => (ReviewStatus::Approved, Vec::new()),
                Some(finding) => (ReviewStatus::RequiresInternalReview, vec![finding]),
            },
        };

        ReviewReport {
            document_id: document_id.to_string(),
            status,
            findings,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

impl Default for ReviewEngine {
    fn default() -> Self {
        Self::accumulating()
    }
}
