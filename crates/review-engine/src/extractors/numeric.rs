// Numeric extraction utilities for term-length checks
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YEARS_RE: Regex = Regex::new(r"(\d+)\s+years?").unwrap();
}

/// Extracts the longest stated term in years, if any appears near term or
/// confidentiality wording. Expects lowered text.
pub fn stated_term_years(text: &str) -> Option<u32> {
    let mut longest: Option<u32> = None;

    for cap in YEARS_RE.captures_iter(text) {
        let Ok(years) = cap[1].parse::<u32>() else {
            continue;
        };

        // Only count mentions in term/confidentiality context, not e.g.
        // "10 years of experience" boilerplate elsewhere in the document
        let start = cap.get(0).map(|m| m.start()).unwrap_or(0);
        let context = surrounding_window(text, start, 60);
        if context.contains("term") || context.contains("confidential") {
            longest = Some(longest.map_or(years, |l| l.max(years)));
        }
    }

    longest
}

fn surrounding_window(text: &str, at: usize, radius: usize) -> &str {
    let mut lo = at.saturating_sub(radius);
    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = (at + radius).min(text.len());
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }
    &text[lo..hi]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_years_in_term_context() {
        assert_eq!(
            stated_term_years("the term of this agreement is 5 years"),
            Some(5)
        );
        assert_eq!(
            stated_term_years("confidentiality obligations survive for 10 years"),
            Some(10)
        );
    }

    #[test]
    fn test_ignores_years_outside_term_context() {
        assert_eq!(
            stated_term_years("the consultant has 20 years of industry experience"),
            None
        );
    }

    #[test]
    fn test_picks_longest_stated_term() {
        let text = "an initial term of 2 years, confidentiality surviving for 7 years";
        assert_eq!(stated_term_years(text), Some(7));
    }

    #[test]
    fn test_no_numbers_yields_none() {
        assert_eq!(stated_term_years("the term continues indefinitely"), None);
    }
}
