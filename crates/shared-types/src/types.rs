#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NdaDocument {
    pub id: String,
    pub filename: String,
    pub mime_type: String,
    pub text: String, // Extracted plain text, reading order
    pub created_at: u64,
}

/// One flagged issue produced by a triggered rule. All findings are
/// uniform; there is no severity ranking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    pub rule_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ReviewStatus {
    #[serde(rename = "Approved")]
    Approved,
    #[serde(rename = "Approved with Suggestions")]
    ApprovedWithSuggestions,
    #[serde(rename = "Requires Internal Review")]
    RequiresInternalReview,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Approved",
            ReviewStatus::ApprovedWithSuggestions => "Approved with Suggestions",
            ReviewStatus::RequiresInternalReview => "Requires Internal Review",
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReviewReport {
    pub document_id: String,
    pub status: ReviewStatus,
    pub findings: Vec<Finding>,
    pub checked_at: u64,
}

impl ReviewReport {
    /// Finding messages in evaluation order.
    pub fn suggestions(&self) -> Vec<String> {
        self.findings.iter().map(|f| f.message.clone()).collect()
    }

    /// Single-line verdict. For gate rejections the first finding names
    /// the failing gate.
    pub fn summary(&self) -> String {
        match self.status {
            ReviewStatus::Approved => {
                "Approved: NDA meets the company's requirements.".to_string()
            }
            ReviewStatus::ApprovedWithSuggestions => format!(
                "Approved with suggestions: {} item(s) flagged for review.",
                self.findings.len()
            ),
            ReviewStatus::RequiresInternalReview => {
                let reason = self
                    .findings
                    .first()
                    .map(|f| f.message.as_str())
                    .unwrap_or("see findings");
                format!("Requires internal review: {}.", reason)
            }
        }
    }
}
