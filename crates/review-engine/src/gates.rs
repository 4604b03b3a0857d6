//! Gate checks for strict (gating) review
//!
//! Gates run in declaration order and the first failing gate ends the
//! review with its rejection message; later gates are not evaluated. Only
//! if every gate passes is the document approved.

use crate::patterns::{ACCEPTABLE_SUBJECT_KEYWORDS, APPROVED_JURISDICTIONS};
use crate::DocumentText;
use shared_types::Finding;

pub struct Gate {
    pub id: &'static str,
    pub rejection: &'static str,
    pub passes: fn(&DocumentText) -> bool,
}

static GATES: [Gate; 3] = [
    Gate {
        id: "acceptable-terms",
        rejection: "Terms are too broad; the agreement must be limited to trade secrets or confidentiality obligations",
        passes: has_acceptable_subject,
    },
    Gate {
        id: "approved-jurisdiction",
        rejection: "Jurisdiction must be Delaware or Minnesota",
        passes: has_approved_jurisdiction,
    },
    Gate {
        id: "definition-breadth",
        rejection: "Definition of confidential information is too narrow; it must cover both confidential and proprietary information",
        passes: has_broad_definition,
    },
];

/// The fixed, ordered gate table.
pub fn gate_table() -> &'static [Gate] {
    &GATES
}

/// Evaluate gates in order. Returns the first failing gate's finding, or
/// `None` when every gate passes.
pub fn evaluate(text: &DocumentText) -> Option<Finding> {
    GATES.iter().find(|gate| !(gate.passes)(text)).map(|gate| Finding {
        rule_id: gate.id.to_string(),
        message: gate.rejection.to_string(),
    })
}

fn has_acceptable_subject(text: &DocumentText) -> bool {
    text.contains_any(ACCEPTABLE_SUBJECT_KEYWORDS)
}

// Exact case, same allow-list as the accumulating jurisdiction rule
fn has_approved_jurisdiction(text: &DocumentText) -> bool {
    text.contains_any_exact(APPROVED_JURISDICTIONS)
}

fn has_broad_definition(text: &DocumentText) -> bool {
    text.contains("confidential") && text.contains("proprietary")
}
