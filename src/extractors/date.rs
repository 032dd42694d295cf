// src/extractors/date.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// Label followed by a positional `NN/NN/NNNN` date; not validated as a calendar date
pub const EFFECTIVE_DATE_PATTERN: &str = r"Initial\s+Effective\s+Date:\s*(\d{2}/\d{2}/\d{4})";

static EFFECTIVE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EFFECTIVE_DATE_PATTERN).expect("Failed to compile EFFECTIVE_DATE_RE")
});

/// Returns the date following the first `Initial Effective Date:` label, if any.
pub fn extract_effective_date(text: &str) -> Option<String> {
    EFFECTIVE_DATE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
