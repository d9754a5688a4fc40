//! The closed set of location labels a request may name.

use crate::map::{GridPoint, ROWS};

/// Cities recognized by default, one per grid row.
pub const CITY_LABELS: [&str; ROWS] = [
    "mumbai",
    "delhi",
    "bangalore",
    "hyderabad",
    "chennai",
    "kolkata",
    "pune",
    "ahmedabad",
    "jaipur",
    "lucknow",
];

/// A fixed set of `ROWS` labels. The label at index `i` is placed on the
/// diagonal cell `(i, i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    labels: [String; ROWS],
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::new(CITY_LABELS)
    }
}

impl LabelSet {
    /// Creates a label set. Labels are stored lowercased.
    pub fn new(labels: [&str; ROWS]) -> Self {
        LabelSet {
            labels: labels.map(|label| label.trim().to_lowercase()),
        }
    }

    /// Index of `label`, ignoring surrounding whitespace and case.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        let wanted = label.trim().to_lowercase();
        self.labels.iter().position(|known| *known == wanted)
    }

    /// Grid cell a label is placed on.
    pub fn point_of(&self, label: &str) -> Option<GridPoint> {
        self.index_of(label).map(GridPoint::diagonal)
    }

    /// The labels in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// Splits a whitespace-separated label list such as `"delhi  pune"`.
pub fn split_labels(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_normalizes_input() {
        let labels = LabelSet::default();
        assert_eq!(labels.index_of("mumbai"), Some(0));
        assert_eq!(labels.index_of("  Lucknow "), Some(9));
        assert_eq!(labels.index_of("CHENNAI"), Some(4));
        assert_eq!(labels.index_of("gotham"), None);
        assert_eq!(labels.index_of(""), None);
    }

    #[test]
    fn test_labels_map_to_diagonal() {
        let labels = LabelSet::default();
        assert_eq!(labels.point_of("hyderabad"), Some(GridPoint::new(3, 3)));
        assert_eq!(labels.point_of("jaipur"), Some(GridPoint::new(8, 8)));
        assert_eq!(labels.point_of("atlantis"), None);
        assert_eq!(labels.iter().count(), ROWS);
    }

    #[test]
    fn test_custom_label_set() {
        let labels = LabelSet::new(["A", "b", "c", "d", "e", "f", "g", "h", "i", "J "]);
        assert_eq!(labels.index_of("a"), Some(0));
        assert_eq!(labels.point_of("j"), Some(GridPoint::diagonal(9)));
    }

    #[test]
    fn test_split_labels() {
        assert_eq!(split_labels(" delhi  pune\tjaipur "), vec!["delhi", "pune", "jaipur"]);
        assert!(split_labels("   ").is_empty());
    }
}
