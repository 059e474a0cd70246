//! Dataset builder contract.
//!
//! A builder declares its metadata once and turns a downloaded resource into
//! lazy per-split example streams. Builders own no download or persistence
//! logic; the `DownloadManager` hands them materialized local paths.

use indexmap::IndexMap;

use crate::download::DownloadManager;
use crate::errors::CatalogError;
use crate::info::DatasetInfo;
use crate::types::{FieldName, SplitName};

/// Raw field values for one source row, in file order. Ephemeral.
pub type RawRecord = IndexMap<FieldName, String>;

/// Cleaned field values for one source row; same keys as the raw record.
pub type CleanedRecord = IndexMap<FieldName, String>;

/// One emitted example: zero-based row ordinal plus its cleaned record.
pub type Example = (u64, CleanedRecord);

/// Lazy, finite stream of examples for one split.
///
/// Produced once per generation pass; restartable only by asking the builder
/// for fresh generators.
pub type ExampleIter = Box<dyn Iterator<Item = Result<Example, CatalogError>> + Send>;

/// A dataset declaration paired with its example generation.
pub trait DatasetBuilder {
    /// Static dataset metadata (schema, version, provenance).
    fn info(&self) -> DatasetInfo;

    /// Fetch source resources through `downloads` and return one example
    /// stream per split, in declaration order.
    fn split_generators(
        &self,
        downloads: &dyn DownloadManager,
    ) -> Result<IndexMap<SplitName, ExampleIter>, CatalogError>;
}

/// Materialize one split of `builder`, validating every emitted record
/// against the declared feature schema keys.
pub fn load_split(
    builder: &dyn DatasetBuilder,
    downloads: &dyn DownloadManager,
    split: &str,
) -> Result<Vec<Example>, CatalogError> {
    let info = builder.info();
    let mut generators = builder.split_generators(downloads)?;
    let examples = generators.shift_remove(split).ok_or_else(|| {
        CatalogError::Configuration(format!(
            "dataset '{}' declares no split named '{split}'",
            info.name()
        ))
    })?;

    let mut collected = Vec::new();
    for example in examples {
        let (ordinal, record) = example?;
        info.features().check_keys(&record)?;
        collected.push((ordinal, record));
    }
    Ok(collected)
}
