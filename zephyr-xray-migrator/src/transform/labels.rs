//! Label merging.

/// Returns the original labels followed by the extra ones, without duplicates.
///
/// Order is preserved: first occurrence wins.
#[must_use]
pub fn merge_labels(original: &[String], extra: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(original.len() + extra.len());
    for label in original.iter().chain(extra) {
        if !merged.contains(label) {
            merged.push(label.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn contains_both_sides_once() {
        let merged = merge_labels(
            &labels(&["regression", "ui", "regression"]),
            &labels(&["migrated", "ui"]),
        );

        assert_eq!(merged, labels(&["regression", "ui", "migrated"]));
    }

    #[test]
    fn handles_empty_sides() {
        assert!(merge_labels(&[], &[]).is_empty());
        assert_eq!(merge_labels(&[], &labels(&["x"])), labels(&["x"]));
        assert_eq!(merge_labels(&labels(&["y"]), &[]), labels(&["y"]));
    }
}
