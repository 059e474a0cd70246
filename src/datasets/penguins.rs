//! Palmer penguins measurements dataset.
//!
//! Declarative metadata plus a small per-row CSV cleanup: malformed `sex`
//! values collapse to the `NA` fallback label, and the `NA` missing-value
//! sentinel in every other column is rewritten to `NaN` so the values parse
//! as floats downstream.

use std::fs::File;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::builder::{CleanedRecord, DatasetBuilder, ExampleIter, RawRecord};
use crate::constants::features::{
    MISSING_REPLACEMENT, MISSING_TOKEN, NOT_APPLICABLE, SEX_FEMALE, SEX_MALE,
};
use crate::constants::penguins::{
    DATASET_NAME, FIELD_BODY_MASS, FIELD_CULMEN_DEPTH, FIELD_CULMEN_LENGTH, FIELD_FLIPPER_LENGTH,
    FIELD_ISLAND, FIELD_SEX, FIELD_SPECIES, HOMEPAGE, ISLAND_LABELS, PENGUINS_CSV, SEX_LABELS,
    SPECIES_LABELS, TRAIN_SPLIT,
};
use crate::download::DownloadManager;
use crate::errors::CatalogError;
use crate::features::FeatureSchema;
use crate::info::{DatasetInfo, Version};
use crate::types::{FieldName, SplitName};

const DESCRIPTION: &str = "\
Measurements for three penguin species observed in the Palmer Archipelago, Antarctica.

These data were collected from 2007 - 2009 by Dr. Kristen Gorman with the Palmer
Station Long Term Ecological Research Program, part of the US Long Term
Ecological Research Network. The data were originally imported from the
Environmental Data Initiative (EDI) Data Portal, and are available for use by
CC0 license (\"No Rights Reserved\") in accordance with the Palmer Station Data
Policy.

The curated dataset contains 7 variables (n = 344 penguins): species, island,
culmen_length_mm, culmen_depth_mm, flipper_length_mm, body_mass_g, sex.";

const CITATION: &str = "\
@Manual{,
  title = {palmerpenguins: Palmer Archipelago (Antarctica) penguin data},
  author = {Allison Marie Horst and Alison Presmanes Hill and Kristen B Gorman},
  year = {2020},
  note = {R package version 0.1.0},
  doi = {10.5281/zenodo.3960218},
  url = {https://allisonhorst.github.io/palmerpenguins/},
}";

/// Builder for the curated penguins size CSV.
#[derive(Clone, Copy, Debug, Default)]
pub struct Penguins;

impl Penguins {
    /// Create the penguins builder.
    pub fn new() -> Self {
        Self
    }
}

impl DatasetBuilder for Penguins {
    fn info(&self) -> DatasetInfo {
        let features = FeatureSchema::new(DATASET_NAME)
            .with_class_label(FIELD_SPECIES, SPECIES_LABELS)
            .with_class_label(FIELD_ISLAND, ISLAND_LABELS)
            .with_float32(FIELD_CULMEN_LENGTH)
            .with_float32(FIELD_CULMEN_DEPTH)
            .with_float32(FIELD_FLIPPER_LENGTH)
            .with_float32(FIELD_BODY_MASS)
            .with_class_label(FIELD_SEX, SEX_LABELS);
        DatasetInfo::new(DATASET_NAME, Version::new(1, 0, 0), features)
            .with_release_note(Version::new(1, 0, 0), "Initial release.")
            .with_description(DESCRIPTION)
            .with_homepage(HOMEPAGE)
            .with_citation(CITATION)
    }

    fn split_generators(
        &self,
        downloads: &dyn DownloadManager,
    ) -> Result<IndexMap<SplitName, ExampleIter>, CatalogError> {
        let path = downloads.download(PENGUINS_CSV)?;
        let mut generators: IndexMap<SplitName, ExampleIter> = IndexMap::new();
        generators.insert(TRAIN_SPLIT.to_string(), generate_examples(&path)?);
        Ok(generators)
    }
}

/// Resolve a raw `sex` value to one of the declared labels.
///
/// Anything other than the exact `MALE`/`FEMALE` tokens (empty strings,
/// `.` placeholders, casing variants) collapses to the `NA` fallback. The
/// coercion is lossy and silent toward callers; suppressed values are
/// logged at debug level.
pub fn normalize_sex(raw: &str) -> &str {
    if raw == SEX_MALE || raw == SEX_FEMALE {
        raw
    } else {
        debug!(suppressed = raw, "coerced malformed sex value to fallback label");
        NOT_APPLICABLE
    }
}

/// Rewrite the `NA` missing-value sentinel to `NaN` in a raw field value.
///
/// This is a substring replace over the whole value, not a whole-value
/// match: an `NA` inside a longer token is rewritten too. Kept
/// byte-for-byte compatible with the upstream cleanup; see the crate tests
/// that pin this behavior.
pub fn replace_missing_tokens(raw: &str) -> String {
    raw.replace(MISSING_TOKEN, MISSING_REPLACEMENT)
}

/// Clean one raw CSV row.
///
/// Pure, stateless, single pass; key order is preserved and no value ever
/// causes a failure.
pub fn clean_row(raw: RawRecord) -> CleanedRecord {
    raw.into_iter()
        .map(|(field, value)| {
            let cleaned = if field == FIELD_SEX {
                normalize_sex(&value).to_string()
            } else {
                replace_missing_tokens(&value)
            };
            (field, cleaned)
        })
        .collect()
}

/// Lazily yield `(row ordinal, cleaned record)` examples from a penguins CSV.
///
/// Ordinals are zero-based and follow file order exactly.
pub fn generate_examples(path: &Path) -> Result<ExampleIter, CatalogError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let headers: Vec<FieldName> = reader.headers()?.iter().map(str::to_string).collect();

    let examples = reader.into_records().enumerate().map(move |(ordinal, row)| {
        let row = row?;
        let raw: RawRecord = headers
            .iter()
            .cloned()
            .zip(row.iter().map(str::to_string))
            .collect();
        Ok((ordinal as u64, clean_row(raw)))
    });
    Ok(Box::new(examples))
}
