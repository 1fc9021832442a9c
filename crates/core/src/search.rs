//! Keyword search helpers.
//!
//! A keyword becomes an `ILIKE` pattern with a wildcard on both sides. The
//! keyword itself is NOT escaped: `%` and `_` typed by the user keep their SQL
//! wildcard meaning. Intentional but risky; keep it unless the search contract
//! changes.

/// Normalize an optional keyword. `None` and the empty string both mean
/// "no filter".
pub fn normalize_keyword(keyword: Option<&str>) -> Option<&str> {
    keyword.filter(|k| !k.is_empty())
}

/// Build the `ILIKE` pattern for a keyword, or `None` for an unfiltered list.
pub fn keyword_pattern(keyword: Option<&str>) -> Option<String> {
    normalize_keyword(keyword).map(|k| format!("%{k}%"))
}
