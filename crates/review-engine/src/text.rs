/// Document text with a cached lowercase copy for case-insensitive checks.
///
/// Most triggers are case-insensitive substring containment; a few match
/// proper nouns and exact phrases with their original casing and go
/// through [`DocumentText::contains_exact`].
#[derive(Debug, Clone)]
pub struct DocumentText {
    raw: String,
    lowered: String,
}

impl DocumentText {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lowered = raw.to_lowercase();
        Self { raw, lowered }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Case-insensitive containment. Needles must be lowercase.
    pub fn contains(&self, needle: &str) -> bool {
        self.lowered.contains(needle)
    }

    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.lowered.contains(n))
    }

    /// Case-sensitive containment, original casing.
    pub fn contains_exact(&self, needle: &str) -> bool {
        self.raw.contains(needle)
    }

    pub fn contains_any_exact(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.raw.contains(n))
    }
}
