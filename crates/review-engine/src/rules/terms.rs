//! Term-length and jurisdiction triggers
//!
//! Both checks involve exact-case matching against [`STANDARD_TERM`] and
//! [`APPROVED_JURISDICTIONS`]; see patterns.rs for why the casing is not
//! normalized.

use crate::extractors::numeric;
use crate::patterns::{APPROVED_JURISDICTIONS, STANDARD_TERM};
use crate::DocumentText;

/// A stated term longer than the preferred 3 years ceiling.
pub fn term_exceeds_ceiling(text: &DocumentText) -> bool {
    if text.contains_exact(STANDARD_TERM) {
        return false;
    }
    numeric::stated_term_years(text.lowered()).is_some_and(|years| years > 3)
}

/// A governing law clause naming a jurisdiction outside the allow-list.
pub fn jurisdiction_not_approved(text: &DocumentText) -> bool {
    text.contains("governing law") && !text.contains_any_exact(APPROVED_JURISDICTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(s: &str) -> DocumentText {
        DocumentText::new(s)
    }

    #[test]
    fn test_term_over_ceiling_is_flagged() {
        assert!(term_exceeds_ceiling(&doc("a confidentiality term of 5 years")));
        assert!(!term_exceeds_ceiling(&doc("a confidentiality term of 2 years")));
        assert!(!term_exceeds_ceiling(&doc("a confidentiality term of 3 years")));
    }

    #[test]
    fn test_unstated_term_is_not_flagged_here() {
        // Left to the missing-duration rule
        assert!(!term_exceeds_ceiling(&doc("confidential until further notice")));
    }

    #[test]
    fn test_jurisdiction_allow_list_is_case_sensitive() {
        assert!(!jurisdiction_not_approved(&doc(
            "Governing Law: the State of Delaware"
        )));
        assert!(!jurisdiction_not_approved(&doc(
            "Governing Law: the State of Minnesota"
        )));
        assert!(jurisdiction_not_approved(&doc(
            "Governing Law: the State of California"
        )));
        // Lowercase proper noun does not match the allow-list
        assert!(jurisdiction_not_approved(&doc(
            "governing law: the state of delaware"
        )));
    }

    #[test]
    fn test_no_governing_law_clause_is_not_flagged_here() {
        // Left to the missing-governing-law rule
        assert!(!jurisdiction_not_approved(&doc("no law clause at all")));
    }
}
