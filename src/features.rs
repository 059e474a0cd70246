//! Typed feature schemas for tabular examples.
//!
//! A schema is declared once at builder-construction time and is immutable
//! afterwards. Every record a builder emits must carry exactly the declared
//! keys; values are either members of a bounded class-label set or 32-bit
//! float scalars (with `NaN` as the missing-value encoding).

use indexmap::IndexMap;
use serde::Serialize;

use crate::errors::CatalogError;
use crate::types::{DatasetName, FieldName, LabelName};

/// Ordered, finite set of label strings for a categorical field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassLabel {
    names: Vec<LabelName>,
}

impl ClassLabel {
    /// Create a class label from an ordered list of label names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LabelName>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Declared label names in declaration order.
    pub fn names(&self) -> &[LabelName] {
        &self.names
    }

    /// Number of declared labels.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no labels are declared.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True when `value` is a declared label.
    pub fn contains(&self, value: &str) -> bool {
        self.index_of(value).is_some()
    }

    /// Position of `value` within the declared label order.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.names.iter().position(|name| name == value)
    }
}

/// Semantic type of one schema field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum FeatureType {
    /// Bounded categorical field; values must be a declared label.
    ClassLabel(ClassLabel),
    /// 32-bit floating point scalar; `NaN` encodes missing values.
    Float32,
}

/// Typed value produced by encoding a cleaned string against a `FeatureType`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum FeatureValue {
    /// Validated class label with its position in the declared order.
    Label {
        /// Position within the declared label order.
        index: usize,
        /// The label string itself.
        name: LabelName,
    },
    /// Parsed float scalar (possibly `NaN` for missing values).
    Float(f32),
}

/// Insertion-ordered mapping from field name to feature type.
///
/// Field order mirrors the declaration order but carries no semantic
/// meaning; key checks compare sets, not sequences.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureSchema {
    dataset: DatasetName,
    fields: IndexMap<FieldName, FeatureType>,
}

impl FeatureSchema {
    /// Create an empty schema owned by `dataset`.
    pub fn new(dataset: impl Into<DatasetName>) -> Self {
        Self {
            dataset: dataset.into(),
            fields: IndexMap::new(),
        }
    }

    /// Declare a bounded categorical field.
    pub fn with_class_label<I, S>(mut self, field: impl Into<FieldName>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LabelName>,
    {
        self.fields
            .insert(field.into(), FeatureType::ClassLabel(ClassLabel::new(names)));
        self
    }

    /// Declare a 32-bit float scalar field.
    pub fn with_float32(mut self, field: impl Into<FieldName>) -> Self {
        self.fields.insert(field.into(), FeatureType::Float32);
        self
    }

    /// Owning dataset name, used in error context.
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// Declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.keys()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Feature type declared for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&FeatureType> {
        self.fields.get(field)
    }

    /// Verify that `record` carries exactly the declared keys.
    ///
    /// Comparison is order-insensitive; missing and unexpected keys are both
    /// reported in the error details.
    pub fn check_keys(&self, record: &IndexMap<FieldName, String>) -> Result<(), CatalogError> {
        let missing: Vec<&str> = self
            .fields
            .keys()
            .filter(|field| !record.contains_key(*field))
            .map(String::as_str)
            .collect();
        let unexpected: Vec<&str> = record
            .keys()
            .filter(|field| !self.fields.contains_key(*field))
            .map(String::as_str)
            .collect();
        if missing.is_empty() && unexpected.is_empty() {
            return Ok(());
        }
        Err(CatalogError::SchemaMismatch {
            dataset: self.dataset.clone(),
            details: format!("missing keys {missing:?}, unexpected keys {unexpected:?}"),
        })
    }

    /// Encode a cleaned record into typed feature values, in schema order.
    ///
    /// Class-label fields reject values outside the declared label set;
    /// float fields accept any parsable `f32`, including `NaN`.
    pub fn encode(
        &self,
        record: &IndexMap<FieldName, String>,
    ) -> Result<IndexMap<FieldName, FeatureValue>, CatalogError> {
        self.check_keys(record)?;

        let mut encoded = IndexMap::with_capacity(self.fields.len());
        for (field, feature) in &self.fields {
            let raw = record
                .get(field)
                .expect("check_keys guarantees field presence");
            let value = match feature {
                FeatureType::ClassLabel(labels) => {
                    let index =
                        labels
                            .index_of(raw)
                            .ok_or_else(|| CatalogError::UnknownLabel {
                                dataset: self.dataset.clone(),
                                field: field.clone(),
                                value: raw.clone(),
                            })?;
                    FeatureValue::Label {
                        index,
                        name: raw.clone(),
                    }
                }
                FeatureType::Float32 => {
                    let parsed =
                        raw.parse::<f32>()
                            .map_err(|_| CatalogError::MalformedValue {
                                field: field.clone(),
                                value: raw.clone(),
                            })?;
                    FeatureValue::Float(parsed)
                }
            };
            encoded.insert(field.clone(), value);
        }
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> IndexMap<FieldName, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn schema() -> FeatureSchema {
        FeatureSchema::new("fixture")
            .with_class_label("color", ["red", "green", "blue"])
            .with_float32("weight")
    }

    #[test]
    fn class_label_membership_and_order() {
        let labels = ClassLabel::new(["FEMALE", "MALE", "NA"]);
        assert_eq!(labels.len(), 3);
        assert!(labels.contains("NA"));
        assert_eq!(labels.index_of("MALE"), Some(1));
        assert_eq!(labels.index_of("male"), None);
    }

    #[test]
    fn check_keys_accepts_reordered_records() {
        let schema = schema();
        let reordered = record(&[("weight", "1.5"), ("color", "red")]);
        schema.check_keys(&reordered).unwrap();
    }

    #[test]
    fn check_keys_reports_missing_and_unexpected() {
        let schema = schema();
        let bad = record(&[("color", "red"), ("height", "2.0")]);
        let err = schema.check_keys(&bad).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::SchemaMismatch { details, .. }
                if details.contains("weight") && details.contains("height")
        ));
    }

    #[test]
    fn encode_produces_label_indices_and_floats() {
        let schema = schema();
        let encoded = schema
            .encode(&record(&[("color", "blue"), ("weight", "3.25")]))
            .unwrap();
        assert_eq!(
            encoded.get("color"),
            Some(&FeatureValue::Label {
                index: 2,
                name: "blue".to_string()
            })
        );
        assert_eq!(encoded.get("weight"), Some(&FeatureValue::Float(3.25)));
    }

    #[test]
    fn encode_accepts_nan_as_missing_float() {
        let schema = schema();
        let encoded = schema
            .encode(&record(&[("color", "red"), ("weight", "NaN")]))
            .unwrap();
        match encoded.get("weight") {
            Some(FeatureValue::Float(value)) => assert!(value.is_nan()),
            other => panic!("expected float NaN, got {other:?}"),
        }
    }

    #[test]
    fn encode_rejects_unknown_label() {
        let schema = schema();
        let err = schema
            .encode(&record(&[("color", "mauve"), ("weight", "1.0")]))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownLabel { field, value, .. }
                if field == "color" && value == "mauve"
        ));
    }

    #[test]
    fn encode_rejects_non_numeric_float() {
        let schema = schema();
        let err = schema
            .encode(&record(&[("color", "red"), ("weight", "heavy")]))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MalformedValue { field, .. } if field == "weight"
        ));
    }
}
