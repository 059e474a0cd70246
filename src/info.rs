//! Static dataset metadata declarations.
//!
//! `DatasetInfo` is a read-only description consumed by builders and the
//! test harness. Nothing here is computed; it is declared once and then
//! only read or serialized.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::errors::CatalogError;
use crate::features::FeatureSchema;
use crate::types::{DatasetName, FieldName, ResourceUrl};

/// Semantic dataset version (`major.minor.patch`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    /// Create a version from its components.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a `major.minor.patch` string.
    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        let mut parts = value.split('.');
        let mut next = |name: &str| -> Result<u32, CatalogError> {
            parts
                .next()
                .and_then(|part| part.parse::<u32>().ok())
                .ok_or_else(|| {
                    CatalogError::Configuration(format!(
                        "invalid version '{value}': missing or non-numeric {name} component"
                    ))
                })
        };
        let major = next("major")?;
        let minor = next("minor")?;
        let patch = next("patch")?;
        if parts.next().is_some() {
            return Err(CatalogError::Configuration(format!(
                "invalid version '{value}': expected exactly three components"
            )));
        }
        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Immutable dataset metadata: identity, provenance, and feature schema.
#[derive(Clone, Debug, Serialize)]
pub struct DatasetInfo {
    name: DatasetName,
    description: String,
    version: Version,
    release_notes: IndexMap<Version, String>,
    homepage: Option<ResourceUrl>,
    citation: Option<String>,
    features: FeatureSchema,
    supervised_keys: Option<(FieldName, FieldName)>,
}

impl DatasetInfo {
    /// Create metadata for `name` at `version` with the declared schema.
    pub fn new(
        name: impl Into<DatasetName>,
        version: Version,
        features: FeatureSchema,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            version,
            release_notes: IndexMap::new(),
            homepage: None,
            citation: None,
            features,
            supervised_keys: None,
        }
    }

    /// Attach a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a release note for one version.
    pub fn with_release_note(mut self, version: Version, note: impl Into<String>) -> Self {
        self.release_notes.insert(version, note.into());
        self
    }

    /// Attach the dataset homepage.
    pub fn with_homepage(mut self, homepage: impl Into<ResourceUrl>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }

    /// Attach a citation string.
    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citation = Some(citation.into());
        self
    }

    /// Declare the (input, target) field pair for supervised consumers.
    pub fn with_supervised_keys(
        mut self,
        input: impl Into<FieldName>,
        target: impl Into<FieldName>,
    ) -> Self {
        self.supervised_keys = Some((input.into(), target.into()));
        self
    }

    /// Dataset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Per-version release notes, in declaration order.
    pub fn release_notes(&self) -> &IndexMap<Version, String> {
        &self.release_notes
    }

    /// Dataset homepage, if declared.
    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    /// Citation string, if declared.
    pub fn citation(&self) -> Option<&str> {
        self.citation.as_deref()
    }

    /// Declared feature schema.
    pub fn features(&self) -> &FeatureSchema {
        &self.features
    }

    /// Supervised (input, target) pair, if declared.
    pub fn supervised_keys(&self) -> Option<(&str, &str)> {
        self.supervised_keys
            .as_ref()
            .map(|(input, target)| (input.as_str(), target.as_str()))
    }

    /// Serialize the full declaration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
