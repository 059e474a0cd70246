#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Dataset builder contract and split materialization helpers.
pub mod builder;
/// Centralized constants used across features, builders, and downloads.
pub mod constants;
/// Built-in dataset builders.
pub mod datasets;
/// Download manager trait and filesystem-backed implementations.
pub mod download;
/// Feature schema, class labels, and example encoding.
pub mod features;
/// Dataset metadata declarations (version, citation, release notes).
pub mod info;
/// Builder test harness: split expectations and artifact checks.
pub mod testing;
/// Shared type aliases.
pub mod types;

mod errors;

pub use builder::{CleanedRecord, DatasetBuilder, Example, ExampleIter, RawRecord, load_split};
pub use download::{CacheDownloader, DownloadManager, DownloadRecord, FixtureDownloader};
pub use errors::CatalogError;
pub use features::{ClassLabel, FeatureSchema, FeatureType, FeatureValue};
pub use info::{DatasetInfo, Version};
pub use testing::{BuilderTestCase, SplitExpectation};
pub use types::{ArtifactName, DatasetName, FieldName, LabelName, ResourceUrl, SplitName};
