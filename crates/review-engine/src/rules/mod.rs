//! Clause rule table for accumulating review
//!
//! Each rule is a data record: an id, a fixed suggestion message, and a
//! pure trigger predicate over the document text. Rules are independent
//! and evaluate in declaration order; findings are reported in the same
//! order with no severity ranking and no deduplication.

pub mod clauses;
pub mod risk;
pub mod terms;

use crate::DocumentText;
use shared_types::Finding;

pub struct ClauseRule {
    pub id: &'static str,
    pub message: &'static str,
    pub trigger: fn(&DocumentText) -> bool,
}

impl ClauseRule {
    pub fn check(&self, text: &DocumentText) -> Option<Finding> {
        if (self.trigger)(text) {
            Some(Finding {
                rule_id: self.id.to_string(),
                message: self.message.to_string(),
            })
        } else {
            None
        }
    }
}

static RULES: [ClauseRule; 14] = [
    ClauseRule {
        id: "missing-duration",
        message: "Missing clear duration for confidentiality clause.",
        trigger: clauses::missing_duration,
    },
    ClauseRule {
        id: "missing-governing-law",
        message: "No governing law clause found. This is typically required.",
        trigger: clauses::missing_governing_law,
    },
    ClauseRule {
        id: "missing-termination",
        message: "No termination clause found. It is important to define how the NDA can be terminated.",
        trigger: clauses::missing_termination,
    },
    ClauseRule {
        id: "non-compete-present",
        message: "Non-compete clause found. Ensure it aligns with local laws.",
        trigger: risk::non_compete_present,
    },
    ClauseRule {
        id: "public-domain-conflict",
        message: "The document contains potential conflicts between confidentiality and public domain clauses.",
        trigger: risk::public_domain_conflict,
    },
    ClauseRule {
        id: "missing-mutuality",
        message: "No mutual confidentiality clause found. This could be one-sided.",
        trigger: clauses::missing_mutuality,
    },
    ClauseRule {
        id: "missing-dispute-resolution",
        message: "No dispute resolution process defined. It is important to specify how disputes will be handled.",
        trigger: clauses::missing_dispute_resolution,
    },
    ClauseRule {
        id: "narrow-definition",
        message: "Definition of Confidential Information may be too narrow. Consider a non-exhaustive list of covered materials.",
        trigger: risk::narrow_definition,
    },
    ClauseRule {
        id: "term-exceeds-ceiling",
        message: "Stated confidentiality term exceeds the preferred ceiling of 3 years.",
        trigger: terms::term_exceeds_ceiling,
    },
    ClauseRule {
        id: "jurisdiction-not-approved",
        message: "Governing law is outside the approved jurisdictions (Delaware or Minnesota).",
        trigger: terms::jurisdiction_not_approved,
    },
    ClauseRule {
        id: "missing-return-of-materials",
        message: "No return or destruction of materials clause found. Specify what happens to confidential materials when the agreement ends.",
        trigger: clauses::missing_return_of_materials,
    },
    ClauseRule {
        id: "missing-exclusions",
        message: "No standard exclusions from confidentiality found (e.g., information that becomes known through no fault of the recipient).",
        trigger: clauses::missing_exclusions,
    },
    ClauseRule {
        id: "non-solicitation-present",
        message: "Non-solicitation clause found. Confirm its scope and duration are reasonable.",
        trigger: risk::non_solicitation_present,
    },
    ClauseRule {
        id: "indemnification-present",
        message: "Indemnification clause found. Indemnities are unusual in an NDA and should be reviewed by counsel.",
        trigger: risk::indemnification_present,
    },
];

/// The fixed, ordered rule table.
pub fn rule_table() -> &'static [ClauseRule] {
    &RULES
}

/// Run every rule against the text, collecting findings in table order.
/// Never short-circuits and never fails, even on empty text.
pub fn evaluate(text: &DocumentText) -> Vec<Finding> {
    RULES.iter().filter_map(|rule| rule.check(text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_ids_are_unique() {
        for (i, rule) in RULES.iter().enumerate() {
            for other in &RULES[i + 1..] {
                assert_ne!(rule.id, other.id);
            }
        }
    }

    #[test]
    fn test_empty_text_triggers_only_missing_clause_rules() {
        let findings = evaluate(&DocumentText::new(""));
        let ids: Vec<&str> = findings.iter().map(|f| f.rule_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "missing-governing-law",
                "missing-termination",
                "missing-mutuality",
                "missing-dispute-resolution",
                "missing-return-of-materials",
            ]
        );
    }

    #[test]
    fn test_findings_carry_fixed_messages() {
        let findings = evaluate(&DocumentText::new(""));
        let law = findings
            .iter()
            .find(|f| f.rule_id == "missing-governing-law")
            .unwrap();
        assert_eq!(
            law.message,
            "No governing law clause found. This is typically required."
        );
    }
}
