// src/extractors/rows.rs
//
// Row grammar for the rate tables. Fields on a line are separated by either
//   - whitespace followed by `$` and optional whitespace (`I  $ 12.34`, `I $12.34`), or
//   - two or more whitespace characters.
// A single space never separates fields, so labels like `5 - Rates I and III **`
// stay in one token. A well-formed line has exactly three fields.

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of raw fields on a table line: SC, NYC, Westchester
pub const FIELDS_PER_LINE: usize = 3;

static FIELD_DELIMITER_RE: Lazy<Regex> = Lazy::new(|| {
    // Alternation order matters: prefer swallowing the `$` over a bare whitespace run
    Regex::new(r"\s+\$\s*|\s{2,}").expect("Failed to compile FIELD_DELIMITER_RE")
});

/// A well-formed table line before the effective date is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub sc: String,
    pub nyc: String,
    pub westchester: String,
}

/// A line that did not split into exactly three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    pub line_index: usize, // 0-based, within the trimmed region
    pub line: String,
    pub tokens: Vec<String>,
}

/// Tokenizer output for one region, both lists in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedRegion {
    pub rows: Vec<RawRow>,
    pub malformed: Vec<MalformedLine>,
}

impl TokenizedRegion {
    pub fn line_count(&self) -> usize {
        self.rows.len() + self.malformed.len()
    }
}

/// Splits a single (already trimmed) line into fields. An empty line has no fields.
pub fn tokenize_line(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    FIELD_DELIMITER_RE.split(line).collect()
}

/// Tokenizes every line of a raw region.
pub fn tokenize_region(region: &str) -> TokenizedRegion {
    let mut tokenized = TokenizedRegion::default();

    let trimmed = region.trim();
    if trimmed.is_empty() {
        return tokenized;
    }

    for (line_index, raw_line) in trimmed.split('\n').enumerate() {
        let line = raw_line.trim();
        let tokens = tokenize_line(line);

        match tokens.as_slice() {
            [sc, nyc, westchester] => tokenized.rows.push(RawRow {
                sc: sc.to_string(),
                nyc: nyc.to_string(),
                westchester: westchester.to_string(),
            }),
            _ => {
                tracing::debug!("Line {} has {} field(s), expected {}: {:?}", line_index, tokens.len(), FIELDS_PER_LINE, line);
                tokenized.malformed.push(MalformedLine {
                    line_index,
                    line: line.to_string(),
                    tokens: tokens.iter().map(|t| t.to_string()).collect(),
                });
            }
        }
    }

    tokenized
}
