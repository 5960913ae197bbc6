//! Dense integer codes for categorical fields.

use std::collections::BTreeSet;

use serde::Serialize;

/// Vocabulary for one categorical field, built from a single batch.
///
/// Codes follow the sorted order of the distinct values seen in the batch,
/// so the same value can receive a different code in a different batch.
/// Instances are request-scoped and never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEncoder {
    field: &'static str,
    vocabulary: Vec<String>,
}

impl CategoryEncoder {
    /// Fit a vocabulary over the given values.
    pub fn fit<'a, I>(field: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: BTreeSet<&str> = values.into_iter().collect();
        Self {
            field,
            vocabulary: distinct.into_iter().map(str::to_string).collect(),
        }
    }

    /// Name of the field this encoder was fitted on.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Code for a value, or `None` if it was not in the fitted batch.
    pub fn code(&self, value: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|probe| probe.as_str().cmp(value))
            .ok()
    }

    /// Value for a code.
    pub fn value(&self, code: usize) -> Option<&str> {
        self.vocabulary.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_sorted_order() {
        let encoder = CategoryEncoder::fit("sex", ["Male", "Female", "Male", "Unknown"]);
        assert_eq!(encoder.len(), 3);
        assert_eq!(encoder.code("Female"), Some(0));
        assert_eq!(encoder.code("Male"), Some(1));
        assert_eq!(encoder.code("Unknown"), Some(2));
        assert_eq!(encoder.code("Other"), None);
        assert_eq!(encoder.value(1), Some("Male"));
    }

    #[test]
    fn test_codes_depend_on_batch() {
        let first = CategoryEncoder::fit("work_status", ["Employed", "Unemployed"]);
        let second = CategoryEncoder::fit("work_status", ["Unemployed", "Self-Employed"]);
        assert_eq!(first.code("Unemployed"), Some(1));
        assert_eq!(second.code("Unemployed"), Some(1));
        assert_eq!(second.code("Self-Employed"), Some(0));
        assert_eq!(first.code("Self-Employed"), None);
    }

    #[test]
    fn test_empty_batch() {
        let encoder = CategoryEncoder::fit("region", std::iter::empty());
        assert!(encoder.is_empty());
        assert_eq!(encoder.field(), "region");
    }
}
