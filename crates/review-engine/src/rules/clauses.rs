//! Missing-clause triggers
//!
//! Each predicate fires when an expected clause cannot be found in the
//! document text. Absence checks run on the lowered text only.

use crate::patterns::{
    DURATION_KEYWORDS, EXCLUSION_KEYWORDS, RETURN_KEYWORDS, TERMINATION_KEYWORDS,
};
use crate::DocumentText;

/// Confidentiality obligations exist but no duration is stated.
pub fn missing_duration(text: &DocumentText) -> bool {
    text.contains("confidential") && !text.contains_any(DURATION_KEYWORDS)
}

pub fn missing_governing_law(text: &DocumentText) -> bool {
    !text.contains("governing law")
}

pub fn missing_termination(text: &DocumentText) -> bool {
    !text.contains_any(TERMINATION_KEYWORDS)
}

pub fn missing_mutuality(text: &DocumentText) -> bool {
    !text.contains("mutual")
}

pub fn missing_dispute_resolution(text: &DocumentText) -> bool {
    !text.contains("dispute resolution")
}

pub fn missing_return_of_materials(text: &DocumentText) -> bool {
    !text.contains_any(RETURN_KEYWORDS)
}

/// Confidentiality obligations exist but none of the standard carve-outs
/// (public knowledge, prior possession, independent development) appear.
pub fn missing_exclusions(text: &DocumentText) -> bool {
    text.contains("confidential") && !text.contains_any(EXCLUSION_KEYWORDS)
}
