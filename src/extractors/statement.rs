// src/extractors/statement.rs
use crate::extractors::date::{extract_effective_date, EFFECTIVE_DATE_PATTERN};
use crate::extractors::region::{split_region, RegionAnchors, TABLE1_ANCHORS, TABLE2_ANCHORS};
use crate::extractors::rows::{tokenize_region, TokenizedRegion};
use crate::utils::error::ExtractError;

/// Everything parsed out of one statement's text.
#[derive(Debug)]
pub struct ExtractedStatement {
    pub effective_date: Option<String>,
    pub table1: Result<TokenizedRegion, ExtractError>,
    pub table2: Result<TokenizedRegion, ExtractError>,
}

/// Parses MSC CAP statement text into the effective date and the two rate tables.
pub struct StatementExtractor {
    table1: RegionAnchors,
    table2: RegionAnchors,
}

impl StatementExtractor {
    pub fn new() -> Self {
        Self { table1: TABLE1_ANCHORS, table2: TABLE2_ANCHORS }
    }

    pub fn extract(&self, text: &str) -> ExtractedStatement {
        let effective_date = extract_effective_date(text);
        if effective_date.is_none() {
            tracing::warn!("No Initial Effective Date found; date column will be empty");
        }

        ExtractedStatement {
            effective_date,
            table1: self.extract_table(text, &self.table1),
            table2: self.extract_table(text, &self.table2),
        }
    }

    fn extract_table(&self, text: &str, anchors: &RegionAnchors) -> Result<TokenizedRegion, ExtractError> {
        let region = split_region(text, anchors)?;
        let tokenized = tokenize_region(region);
        tracing::debug!(
            "{}: {} line(s), {} row(s), {} malformed",
            anchors.table,
            tokenized.line_count(),
            tokenized.rows.len(),
            tokenized.malformed.len()
        );
        Ok(tokenized)
    }

    /// Regex patterns (with labels) marking the anchors and date, for debug annotation.
    pub fn debug_patterns(&self) -> Vec<(String, &'static str)> {
        vec![
            (EFFECTIVE_DATE_PATTERN.to_string(), "date"),
            (regex::escape(self.table1.start), "start1"),
            (regex::escape(self.table1.end), "end1"),
            (regex::escape(self.table2.start), "start2"),
            (regex::escape(self.table2.end), "end2"),
        ]
    }
}

impl Default for StatementExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::TableId;

    #[test]
    fn test_full_statement() {
        let text = "Statement of Market Supply Charge\n\
            Initial Effective Date: 05/01/2023\n\
            1 - Rate I $ 12.34 $ 10.00\n\
            2 - Rate II $ 8.00 $ 7.50\n\
            Charges assessed in dollars per kilowatt:\n\
            5 - Rates I and III $ 1.11 $ 2.22\n\
            Charges assessed to Rider M customers based on ICAP tag per kilowatt:\n\
            page 2";

        let extracted = StatementExtractor::new().extract(text);

        assert_eq!(extracted.effective_date.as_deref(), Some("05/01/2023"));
        let table1 = extracted.table1.unwrap();
        assert_eq!(table1.rows.len(), 2);
        assert_eq!(table1.rows[1].sc, "2 - Rate II");
        let table2 = extracted.table2.unwrap();
        assert_eq!(table2.rows.len(), 1);
        assert_eq!(table2.rows[0].westchester, "2.22");
    }

    #[test]
    fn test_tables_fail_independently() {
        let text = "1 - Rate I $ 1 $ 2\nCharges assessed in dollars per kilowatt:\n";

        let extracted = StatementExtractor::new().extract(text);

        assert!(extracted.effective_date.is_none());
        assert!(extracted.table1.is_ok());
        assert!(matches!(
            extracted.table2,
            Err(ExtractError::AnchorNotFound { table: TableId::Table2, .. })
        ));
    }

    #[test]
    fn test_debug_patterns_compile() {
        for (pattern, label) in StatementExtractor::new().debug_patterns() {
            assert!(regex::Regex::new(&pattern).is_ok(), "pattern for {} does not compile", label);
        }
    }
}
