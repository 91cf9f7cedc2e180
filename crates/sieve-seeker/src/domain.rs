//! Value domains for categorical predicates.
//!
//! A value domain is the ordered set of comparand values the predicate
//! editor offers for a column. Tag columns draw it from a fixed table,
//! campaign columns from the distinct values in the current dataset.

use std::collections::{BTreeSet, HashMap};

use crate::value::{Dataset, Value};

/// Source of the legal values for a column.
pub trait ValueDomain: std::fmt::Debug + Send + Sync {
    /// Values offered for `column`, in offering order, without duplicates.
    fn values(&self, column: &str, dataset: &Dataset) -> Vec<String>;
}

/// Fixed per-column vocabularies, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticVocabulary {
    table: HashMap<String, Vec<String>>,
}

impl StaticVocabulary {
    pub(crate) fn insert(&mut self, column: String, values: Vec<String>) {
        self.table.insert(column, values);
    }

    /// The vocabulary for a column, if one is declared.
    pub fn get(&self, column: &str) -> Option<&[String]> {
        self.table.get(column).map(Vec::as_slice)
    }
}

impl ValueDomain for StaticVocabulary {
    fn values(&self, column: &str, _dataset: &Dataset) -> Vec<String> {
        self.get(column).map(<[String]>::to_vec).unwrap_or_default()
    }
}

/// Distinct non-empty text values of a column, ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistinctValues;

impl ValueDomain for DistinctValues {
    fn values(&self, column: &str, dataset: &Dataset) -> Vec<String> {
        let distinct: BTreeSet<&str> = dataset
            .records()
            .iter()
            .filter_map(|record| match record.get(column) {
                Some(Value::Text(s)) if !s.is_empty() => Some(s.as_str()),
                _ => None,
            })
            .collect();
        distinct.into_iter().map(str::to_string).collect()
    }
}

/// Narrows a domain to the values containing `query`, ignoring case.
///
/// An empty query keeps every value.
pub fn narrow_domain<'a>(values: &'a [String], query: &str) -> Vec<&'a str> {
    let query = query.to_lowercase();
    values
        .iter()
        .filter(|v| query.is_empty() || v.to_lowercase().contains(&query))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;

    fn dataset() -> Dataset {
        Dataset::new(
            vec!["campaign".into(), "clicks".into()],
            vec![
                Record::new().with("campaign", "summer").with("clicks", 1.0),
                Record::new().with("campaign", "autumn").with("clicks", 2.0),
                Record::new().with("campaign", "").with("clicks", 3.0),
                Record::new().with("campaign", "summer").with("clicks", 4.0),
                Record::new().with("clicks", 5.0),
            ],
        )
    }

    #[test]
    fn distinct_values_sorted_deduplicated_non_empty() {
        assert_eq!(
            DistinctValues.values("campaign", &dataset()),
            vec!["autumn", "summer"]
        );
    }

    #[test]
    fn distinct_values_skip_numbers() {
        assert!(DistinctValues.values("clicks", &dataset()).is_empty());
    }

    #[test]
    fn static_vocabulary_keeps_declared_order() {
        let mut vocab = StaticVocabulary::default();
        vocab.insert("Background".into(), vec!["Urban".into(), "Nature".into()]);
        assert_eq!(
            vocab.values("Background", &Dataset::default()),
            vec!["Urban", "Nature"]
        );
        assert!(vocab.values("Other", &Dataset::default()).is_empty());
    }

    #[test]
    fn narrow_domain_filters_case_insensitively() {
        let values = vec!["Top Left".to_string(), "Bottom Right".into(), "Center".into()];
        assert_eq!(narrow_domain(&values, "t"), vec!["Top Left", "Bottom Right", "Center"]);
        assert_eq!(narrow_domain(&values, "RIGHT"), vec!["Bottom Right"]);
        assert_eq!(narrow_domain(&values, "").len(), 3);
    }
}
