//! Predicate-menu classification of columns.
//!
//! Every column offered by the filter menu belongs to exactly one
//! [`Bucket`]. The bucket fixes the predicate's [`ValueKind`] and, through
//! it, the operator vocabulary and the source of the value domain.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{DistinctValues, StaticVocabulary, ValueDomain};
use crate::error::{Result, SeekerError};
use crate::schema::{ValueKind, METRIC_COLUMNS};
use crate::value::Dataset;

/// Menu group a column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// Free-text columns.
    Dimensions,
    /// Columns with a fixed, hardcoded vocabulary.
    Tags,
    /// Numeric columns.
    Metrics,
    /// Text columns whose values are drawn from the loaded dataset.
    Campaign,
}

impl Bucket {
    /// All buckets in menu order.
    pub const ALL: [Bucket; 4] = [Bucket::Dimensions, Bucket::Tags, Bucket::Metrics, Bucket::Campaign];

    pub fn value_kind(self) -> ValueKind {
        match self {
            Bucket::Dimensions => ValueKind::FreeText,
            Bucket::Tags => ValueKind::Tag,
            Bucket::Metrics => ValueKind::Numeric,
            Bucket::Campaign => ValueKind::Category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::Dimensions => "Dimensions",
            Bucket::Tags => "Tags",
            Bucket::Metrics => "Metrics",
            Bucket::Campaign => "Campaign",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const DIMENSION_COLUMNS: &[&str] = &["Width", "Height", "Depth"];

const CAMPAIGN_COLUMNS: &[&str] = &["campaign", "ad_group", "creative_name", "country", "ad_network", "os"];

const TAG_VOCABULARIES: &[(&str, &[&str])] = &[
    ("Character", &["Hero", "Villain", "Sidekick"]),
    ("Background", &["Urban", "Nature", "Abstract"]),
    ("Elements", &["Fire", "Water", "Earth"]),
    ("CTA Position", &["Top Left", "Bottom Right", "Center"]),
    ("CTA Text", &["Buy Now", "Learn More", "Subscribe"]),
];

static DISTINCT: DistinctValues = DistinctValues;

/// Registry of the columns a predicate can target.
///
/// # Example
///
/// ```
/// use sieve_seeker::{Bucket, ColumnRegistry, ValueKind};
///
/// let registry = ColumnRegistry::default();
/// assert_eq!(registry.bucket_of("ctr"), Some(Bucket::Metrics));
/// assert_eq!(registry.value_kind("country").unwrap(), ValueKind::Category);
/// assert_eq!(registry.columns_matching(Bucket::Tags, "cta"), vec!["CTA Position", "CTA Text"]);
/// ```
#[derive(Debug, Clone)]
pub struct ColumnRegistry {
    columns: HashMap<Bucket, Vec<String>>,
    vocabulary: StaticVocabulary,
}

impl ColumnRegistry {
    /// A registry with no columns.
    pub fn empty() -> Self {
        ColumnRegistry {
            columns: HashMap::new(),
            vocabulary: StaticVocabulary::default(),
        }
    }

    /// Adds a column to a bucket.
    ///
    /// A column already registered elsewhere is moved, keeping the
    /// one-bucket-per-column invariant.
    pub fn with_column(mut self, bucket: Bucket, column: impl Into<String>) -> Self {
        let column = column.into();
        for list in self.columns.values_mut() {
            list.retain(|c| *c != column);
        }
        self.columns.entry(bucket).or_default().push(column);
        self
    }

    /// Adds a tag column together with its fixed vocabulary.
    pub fn with_vocabulary<I, S>(self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let column = column.into();
        let mut registry = self.with_column(Bucket::Tags, column.clone());
        registry.vocabulary.insert(column, values.into_iter().map(Into::into).collect());
        registry
    }

    /// Bucket of a column, if registered.
    pub fn bucket_of(&self, column: &str) -> Option<Bucket> {
        Bucket::ALL
            .into_iter()
            .find(|bucket| self.columns(*bucket).iter().any(|c| c == column))
    }

    /// Predicate value kind for a column.
    pub fn value_kind(&self, column: &str) -> Result<ValueKind> {
        self.bucket_of(column)
            .map(Bucket::value_kind)
            .ok_or_else(|| SeekerError::UnknownColumn(column.to_string()))
    }

    /// Buckets in menu order.
    pub fn buckets(&self) -> [Bucket; 4] {
        Bucket::ALL
    }

    /// Columns of a bucket, in registration order.
    pub fn columns(&self, bucket: Bucket) -> &[String] {
        self.columns.get(&bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Columns of a bucket whose name contains `query`, ignoring case.
    pub fn columns_matching(&self, bucket: Bucket, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        self.columns(bucket)
            .iter()
            .filter(|c| c.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }

    /// The value-domain source for a column.
    ///
    /// Tag columns use their fixed vocabulary, campaign columns the distinct
    /// values of the dataset. Free-text and metric columns have none.
    pub fn domain_for(&self, column: &str) -> Option<&dyn ValueDomain> {
        match self.bucket_of(column)? {
            Bucket::Tags => Some(&self.vocabulary),
            Bucket::Campaign => Some(&DISTINCT),
            Bucket::Dimensions | Bucket::Metrics => None,
        }
    }

    /// Legal comparand values for a column, in offering order.
    pub fn value_domain(&self, column: &str, dataset: &Dataset) -> Vec<String> {
        self.domain_for(column)
            .map(|domain| domain.values(column, dataset))
            .unwrap_or_default()
    }
}

impl Default for ColumnRegistry {
    /// The built-in creative-performance registry.
    fn default() -> Self {
        let mut registry = ColumnRegistry::empty();
        for column in DIMENSION_COLUMNS {
            registry = registry.with_column(Bucket::Dimensions, *column);
        }
        for (column, values) in TAG_VOCABULARIES {
            registry = registry.with_vocabulary(*column, values.iter().copied());
        }
        for column in METRIC_COLUMNS {
            registry = registry.with_column(Bucket::Metrics, *column);
        }
        for column in CAMPAIGN_COLUMNS {
            registry = registry.with_column(Bucket::Campaign, *column);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;

    #[test]
    fn builtin_buckets() {
        let registry = ColumnRegistry::default();
        assert_eq!(registry.bucket_of("Width"), Some(Bucket::Dimensions));
        assert_eq!(registry.bucket_of("CTA Text"), Some(Bucket::Tags));
        assert_eq!(registry.bucket_of("installs"), Some(Bucket::Metrics));
        assert_eq!(registry.bucket_of("os"), Some(Bucket::Campaign));
        assert_eq!(registry.bucket_of("creative_id"), None);
    }

    #[test]
    fn value_kinds_follow_bucket() {
        let registry = ColumnRegistry::default();
        assert_eq!(registry.value_kind("Depth"), Ok(ValueKind::FreeText));
        assert_eq!(registry.value_kind("Character"), Ok(ValueKind::Tag));
        assert_eq!(registry.value_kind("cpm"), Ok(ValueKind::Numeric));
        assert_eq!(registry.value_kind("ad_group"), Ok(ValueKind::Category));
        assert_eq!(
            registry.value_kind("nope"),
            Err(SeekerError::UnknownColumn("nope".into()))
        );
    }

    #[test]
    fn columns_keep_registration_order() {
        let registry = ColumnRegistry::default();
        assert_eq!(registry.columns(Bucket::Dimensions), ["Width", "Height", "Depth"]);
        assert_eq!(registry.columns(Bucket::Metrics).len(), METRIC_COLUMNS.len());
    }

    #[test]
    fn column_search_is_case_insensitive() {
        let registry = ColumnRegistry::default();
        assert_eq!(
            registry.columns_matching(Bucket::Metrics, "COST"),
            vec!["cost_per_click", "cost_per_install"]
        );
        assert_eq!(registry.columns_matching(Bucket::Campaign, "").len(), 6);
        assert!(registry.columns_matching(Bucket::Tags, "zzz").is_empty());
    }

    #[test]
    fn re_registering_moves_column() {
        let registry = ColumnRegistry::empty()
            .with_column(Bucket::Dimensions, "country")
            .with_column(Bucket::Campaign, "country");
        assert_eq!(registry.bucket_of("country"), Some(Bucket::Campaign));
        assert!(registry.columns(Bucket::Dimensions).is_empty());
    }

    #[test]
    fn value_domain_by_bucket() {
        let registry = ColumnRegistry::default();
        let ds = Dataset::new(
            vec!["country".into()],
            vec![
                Record::new().with("country", "US"),
                Record::new().with("country", "IN"),
            ],
        );
        assert_eq!(registry.value_domain("country", &ds), vec!["IN", "US"]);
        assert_eq!(
            registry.value_domain("Elements", &ds),
            vec!["Fire", "Water", "Earth"]
        );
        assert!(registry.value_domain("ctr", &ds).is_empty());
        assert!(registry.value_domain("Width", &ds).is_empty());
        assert!(registry.value_domain("unknown", &ds).is_empty());
    }
}
