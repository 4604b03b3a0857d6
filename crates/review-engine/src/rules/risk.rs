//! Present-but-risky triggers
//!
//! These predicates fire when wording that warrants a closer look is
//! present, rather than when a clause is missing.

use crate::patterns::BREADTH_KEYWORDS;
use crate::DocumentText;

pub fn non_compete_present(text: &DocumentText) -> bool {
    text.contains("non-compete")
}

/// Confidentiality wording alongside public-domain wording often signals
/// clauses that contradict each other.
pub fn public_domain_conflict(text: &DocumentText) -> bool {
    text.contains("confidential") && text.contains("public")
}

/// A definition of Confidential Information with no non-exhaustive
/// language tends to cover less than intended.
pub fn narrow_definition(text: &DocumentText) -> bool {
    text.contains("confidential information") && !text.contains_any(BREADTH_KEYWORDS)
}

pub fn non_solicitation_present(text: &DocumentText) -> bool {
    text.contains("non-solicit")
}

pub fn indemnification_present(text: &DocumentText) -> bool {
    text.contains("indemnif")
}
