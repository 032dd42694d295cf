// src/extractors/region.rs
use crate::tables::TableId;
use crate::utils::error::ExtractError;

/// Literal start/end markers bounding one table inside the statement text.
/// The start marker is included in the region, the end marker is not.
#[derive(Debug, Clone, Copy)]
pub struct RegionAnchors {
    pub table: TableId,
    pub start: &'static str,
    pub end: &'static str,
}

pub const TABLE1_ANCHORS: RegionAnchors = RegionAnchors {
    table: TableId::Table1,
    start: "1 - Rate I",
    end: "Charges assessed in dollars per kilowatt:",
};

pub const TABLE2_ANCHORS: RegionAnchors = RegionAnchors {
    table: TableId::Table2,
    start: "5 - Rates I and III",
    end: "Charges assessed to Rider M customers based on ICAP tag per kilowatt:",
};

/// Slices the region between the first occurrences of the start and end anchors.
///
/// A found-but-empty region is `Ok("")`; missing or misordered anchors are errors.
pub fn split_region<'a>(text: &'a str, anchors: &RegionAnchors) -> Result<&'a str, ExtractError> {
    let start = text.find(anchors.start).ok_or(ExtractError::AnchorNotFound {
        table: anchors.table,
        anchor: anchors.start,
    })?;
    let end = text.find(anchors.end).ok_or(ExtractError::AnchorNotFound {
        table: anchors.table,
        anchor: anchors.end,
    })?;

    if end < start {
        return Err(ExtractError::AnchorsOutOfOrder { table: anchors.table, start, end });
    }

    tracing::trace!("{} region spans bytes {}..{}", anchors.table, start, end);
    Ok(&text[start..end])
}
