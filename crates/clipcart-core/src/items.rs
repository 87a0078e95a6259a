//! Normalization of raw grocery-list text into search terms.

/// Splits a raw comma-separated grocery list into individual items.
///
/// Each segment is trimmed of surrounding whitespace; segments that are
/// empty after trimming are dropped. Order of first appearance is
/// preserved and duplicates are kept as typed. Any input yields a list,
/// possibly empty.
#[must_use]
pub fn parse_items(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "items_test.rs"]
mod tests;
