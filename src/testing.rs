//! Declarative builder test harness.
//!
//! A test declares expected split sizes and expected downloaded artifact
//! names for a builder; the harness performs the generation pass against
//! local fixture files and checks the declarations, plus the schema
//! invariants every builder must uphold.

use std::collections::BTreeSet;
use std::path::Path;

use indexmap::IndexMap;

use crate::builder::{DatasetBuilder, load_split};
use crate::download::FixtureDownloader;
use crate::errors::CatalogError;
use crate::types::{ArtifactName, SplitName};

/// Mapping from split name to expected example count.
pub type SplitExpectation = IndexMap<SplitName, u64>;

/// Declarative expectation table for one dataset builder.
///
/// ```no_run
/// use datacat::datasets::Penguins;
/// use datacat::testing::BuilderTestCase;
///
/// BuilderTestCase::new(Penguins::new())
///     .expect_split("train", 344)
///     .expect_artifact("penguins_size.csv")
///     .run("tests/fixtures/penguins")
///     .unwrap();
/// ```
pub struct BuilderTestCase<B: DatasetBuilder> {
    builder: B,
    splits: SplitExpectation,
    artifacts: Vec<ArtifactName>,
}

impl<B: DatasetBuilder> BuilderTestCase<B> {
    /// Start an expectation table for `builder`.
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            splits: SplitExpectation::new(),
            artifacts: Vec::new(),
        }
    }

    /// Declare the expected example count for one split.
    pub fn expect_split(mut self, split: impl Into<SplitName>, count: u64) -> Self {
        self.splits.insert(split.into(), count);
        self
    }

    /// Declare an artifact name the builder is expected to download.
    pub fn expect_artifact(mut self, artifact: impl Into<ArtifactName>) -> Self {
        self.artifacts.push(artifact.into());
        self
    }

    /// Run the generation pass against fixtures under `fixture_dir` and
    /// check every declaration.
    ///
    /// Beyond the declared expectations, every emitted example is encoded
    /// against the builder's feature schema, so key mismatches, unknown
    /// class labels, and malformed numeric values fail the case.
    pub fn run(&self, fixture_dir: impl AsRef<Path>) -> Result<(), CatalogError> {
        if self.splits.is_empty() {
            return Err(CatalogError::Configuration(
                "declare at least one split expectation before running".to_string(),
            ));
        }

        let downloads = FixtureDownloader::new(fixture_dir.as_ref());
        let info = self.builder.info();
        let schema = info.features();

        for (split, expected) in &self.splits {
            let examples = load_split(&self.builder, &downloads, split)?;
            if examples.len() as u64 != *expected {
                return Err(CatalogError::ExpectationFailed(format!(
                    "dataset '{}' split '{split}': expected {expected} examples, generated {}",
                    info.name(),
                    examples.len()
                )));
            }
            for (position, (ordinal, record)) in examples.iter().enumerate() {
                if *ordinal != position as u64 {
                    return Err(CatalogError::ExpectationFailed(format!(
                        "dataset '{}' split '{split}': ordinal {ordinal} at position {position}",
                        info.name()
                    )));
                }
                schema.encode(record)?;
            }
        }

        if !self.artifacts.is_empty() {
            let seen: BTreeSet<ArtifactName> = downloads.artifacts().into_iter().collect();
            let declared: BTreeSet<ArtifactName> = self.artifacts.iter().cloned().collect();
            if seen != declared {
                return Err(CatalogError::ExpectationFailed(format!(
                    "dataset '{}': expected downloaded artifacts {declared:?}, observed {seen:?}",
                    info.name()
                )));
            }
        }

        Ok(())
    }
}
