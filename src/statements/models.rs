// src/statements/models.rs
use crate::utils::error::SourceError;

/// Published location of the MSC CAP statement archive
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://lite.coned.com/_external/cerates/documents/elecPSC10/StatMSCCAP-{id}.pdf";

/// Placeholder substituted with the statement number
pub const ID_PLACEHOLDER: &str = "{id}";

/// A single statement we want to process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementInfo {
    pub id: u32,
    pub url: String,
}

impl StatementInfo {
    /// Builds the statement entry for `id` from a URL template containing `{id}`.
    pub fn from_template(template: &str, id: u32) -> Result<Self, SourceError> {
        if !template.contains(ID_PLACEHOLDER) {
            return Err(SourceError::InvalidTemplate(format!(
                "'{}' has no {} placeholder",
                template, ID_PLACEHOLDER
            )));
        }

        Ok(Self {
            id,
            url: template.replace(ID_PLACEHOLDER, &id.to_string()),
        })
    }
}

/// Lists the statements to fetch, in increasing id order (`first..=last`).
pub fn statement_range(template: &str, first: u32, last: u32) -> Result<Vec<StatementInfo>, SourceError> {
    (first..=last)
        .map(|id| StatementInfo::from_template(template, id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_uses_plain_decimal_id() {
        let info = StatementInfo::from_template(DEFAULT_URL_TEMPLATE, 7).unwrap();
        assert_eq!(
            info.url,
            "https://lite.coned.com/_external/cerates/documents/elecPSC10/StatMSCCAP-7.pdf"
        );
    }

    #[test]
    fn test_template_without_placeholder_is_rejected() {
        let result = StatementInfo::from_template("https://example.com/fixed.pdf", 1);
        assert!(matches!(result, Err(SourceError::InvalidTemplate(_))));
    }

    #[test]
    fn test_range_is_inclusive_and_ordered() {
        let range = statement_range(DEFAULT_URL_TEMPLATE, 1, 98).unwrap();
        assert_eq!(range.len(), 98);
        assert_eq!(range.first().map(|s| s.id), Some(1));
        assert_eq!(range.last().map(|s| s.id), Some(98));
        assert!(range.windows(2).all(|w| w[0].id < w[1].id));
    }
}
