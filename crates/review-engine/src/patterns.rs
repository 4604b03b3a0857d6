//! Keyword tables for clause detection
//!
//! All keywords except [`APPROVED_JURISDICTIONS`] and [`STANDARD_TERM`] are
//! matched case-insensitively against the lowered document text, so they
//! are written in lowercase.

/// Keywords indicating the confidentiality obligation has a stated length.
pub const DURATION_KEYWORDS: &[&str] = &["years", "duration"];

/// Keywords indicating an agreement term or termination clause.
pub const TERMINATION_KEYWORDS: &[&str] = &["termination", "term"];

/// Keywords indicating a return/destruction-of-materials clause.
pub const RETURN_KEYWORDS: &[&str] = &["return", "destroy", "destruction"];

/// Keywords indicating the standard exclusions from confidentiality.
pub const EXCLUSION_KEYWORDS: &[&str] = &["publicly available", "does not include", "excluded"];

/// Keywords indicating a non-exhaustive definition of confidential
/// information.
pub const BREADTH_KEYWORDS: &[&str] = &["including", "not limited to"];

/// Subject matter an acceptable NDA must be limited to (gating mode).
pub const ACCEPTABLE_SUBJECT_KEYWORDS: &[&str] = &["trade secrets", "confidentiality"];

/// Jurisdictions the company accepts for governing law.
///
/// Matched with original casing, exact substring. The rest of the rule set
/// is case-insensitive; this asymmetry is inherited behavior and kept as is.
pub const APPROVED_JURISDICTIONS: &[&str] = &["Delaware", "Minnesota"];

/// Preferred confidentiality term. Exact match, including case.
pub const STANDARD_TERM: &str = "3 years";
