//! Free-text matching.

/// Case-insensitive substring match: true if ANY field contains `needle`.
///
/// An empty needle matches everything. Whitespace is matched literally, so a
/// needle of spaces keeps only fields that contain them.
pub fn matches_search(fields: &[&str], needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let needle = needle.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
