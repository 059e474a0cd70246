//! Download manager implementations.
//!
//! Builders never touch the network or the filesystem layout themselves;
//! they ask a `DownloadManager` for an openable local path. The crate ships
//! two managers: a caching filesystem materializer for real runs against
//! locally available resources, and a fixture resolver for tests.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::constants::download::{DEFAULT_CACHE_DIR, FILE_SCHEME};
use crate::errors::CatalogError;
use crate::types::{ArtifactName, ResourceUrl};

/// Collaborator contract for fetching dataset resources.
///
/// Implementations return a path that supports open-for-read; callers treat
/// the result as an already-materialized resource.
pub trait DownloadManager: Send + Sync {
    /// Resolve `url` to a local, openable file path.
    fn download(&self, url: &str) -> Result<PathBuf, CatalogError>;
}

/// One resolved download, as recorded by `CacheDownloader`.
#[derive(Clone, Debug)]
pub struct DownloadRecord {
    /// Requested resource URL.
    pub url: ResourceUrl,
    /// Materialized local path inside the cache directory.
    pub path: PathBuf,
    /// When the request was resolved.
    pub fetched_at: DateTime<Utc>,
}

/// Filesystem-backed manager that materializes resources into a cache dir.
///
/// `file://` URLs and plain local paths are supported; network schemes are
/// rejected, since fetching over the wire is a concern of the embedding
/// pipeline, not of dataset declarations.
pub struct CacheDownloader {
    cache_dir: PathBuf,
    manifest: Mutex<Vec<DownloadRecord>>,
}

impl CacheDownloader {
    /// Create a downloader caching into `cache_dir` (created if missing).
    pub fn new(cache_dir: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let cache_dir = cache_dir.into();
        fs::create_dir_all(&cache_dir)?;
        Ok(Self {
            cache_dir,
            manifest: Mutex::new(Vec::new()),
        })
    }

    /// Create a downloader using the default cache directory.
    pub fn with_default_dir() -> Result<Self, CatalogError> {
        Self::new(DEFAULT_CACHE_DIR)
    }

    /// Snapshot of every download resolved so far, in request order.
    pub fn manifest(&self) -> Vec<DownloadRecord> {
        self.manifest
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn resolve_source(url: &str) -> Result<PathBuf, CatalogError> {
        let path = if let Some(local) = url.strip_prefix(FILE_SCHEME) {
            PathBuf::from(local)
        } else if url.contains("://") {
            return Err(CatalogError::DownloadFailed {
                url: url.to_string(),
                reason: "network schemes are not supported; materialize the resource locally and pass a file:// URL".to_string(),
            });
        } else {
            PathBuf::from(url)
        };
        if !path.is_file() {
            return Err(CatalogError::DownloadFailed {
                url: url.to_string(),
                reason: format!("local resource not found at {}", path.display()),
            });
        }
        Ok(path)
    }

    fn cached_target(&self, url: &str, source: &Path) -> PathBuf {
        let file_name = source
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("resource");
        self.cache_dir
            .join(format!("{:016x}-{file_name}", stable_url_key(url)))
    }

    fn record(&self, url: &str, path: &Path) -> Result<(), CatalogError> {
        let mut guard = self
            .manifest
            .lock()
            .map_err(|_| CatalogError::DownloadFailed {
                url: url.to_string(),
                reason: "download manifest lock poisoned".to_string(),
            })?;
        guard.push(DownloadRecord {
            url: url.to_string(),
            path: path.to_path_buf(),
            fetched_at: Utc::now(),
        });
        Ok(())
    }
}

impl DownloadManager for CacheDownloader {
    fn download(&self, url: &str) -> Result<PathBuf, CatalogError> {
        let source = Self::resolve_source(url)?;
        let target = self.cached_target(url, &source);

        let source_len = fs::metadata(&source)?.len();
        let cached_len = fs::metadata(&target).map(|meta| meta.len()).ok();
        if cached_len == Some(source_len) {
            debug!(url, path = %target.display(), "download cache hit");
        } else {
            fs::copy(&source, &target)?;
            info!(url, path = %target.display(), "materialized resource into cache");
        }

        self.record(url, &target)?;
        Ok(target)
    }
}

/// Stable cache key for a URL.
///
/// Only needs to be stable within one machine/toolchain; cache entries are
/// re-validated by size on every request.
fn stable_url_key(url: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    url.hash(&mut hasher);
    hasher.finish()
}

/// Test-oriented manager that resolves any URL to a fixture file.
///
/// The final path segment of the URL is looked up under the fixture root,
/// and every request is recorded so a test can assert which artifact names
/// a builder actually asked for.
pub struct FixtureDownloader {
    root: PathBuf,
    requested: Mutex<Vec<(ResourceUrl, ArtifactName)>>,
}

impl FixtureDownloader {
    /// Create a fixture resolver rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Artifact names requested so far, deduplicated, in request order.
    pub fn artifacts(&self) -> Vec<ArtifactName> {
        let mut seen = Vec::new();
        if let Ok(guard) = self.requested.lock() {
            for (_, artifact) in guard.iter() {
                if !seen.contains(artifact) {
                    seen.push(artifact.clone());
                }
            }
        }
        seen
    }

    fn artifact_for(url: &str) -> Result<ArtifactName, CatalogError> {
        url.split('/')
            .next_back()
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .ok_or_else(|| CatalogError::DownloadFailed {
                url: url.to_string(),
                reason: "URL has no final path segment to resolve a fixture from".to_string(),
            })
    }
}

impl DownloadManager for FixtureDownloader {
    fn download(&self, url: &str) -> Result<PathBuf, CatalogError> {
        let artifact = Self::artifact_for(url)?;
        let path = self.root.join(&artifact);
        if !path.is_file() {
            return Err(CatalogError::DownloadFailed {
                url: url.to_string(),
                reason: format!("fixture '{artifact}' not found under {}", self.root.display()),
            });
        }

        let mut guard = self
            .requested
            .lock()
            .map_err(|_| CatalogError::DownloadFailed {
                url: url.to_string(),
                reason: "fixture request log lock poisoned".to_string(),
            })?;
        guard.push((url.to_string(), artifact));
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cache_downloader_materializes_and_reuses_local_files() {
        let source_dir = tempdir().unwrap();
        let cache_dir = tempdir().unwrap();
        let source = source_dir.path().join("data.csv");
        fs::write(&source, "a,b\n1,2\n").unwrap();

        let downloads = CacheDownloader::new(cache_dir.path()).unwrap();
        let url = format!("file://{}", source.display());

        let first = downloads.download(&url).unwrap();
        assert!(first.is_file());
        assert!(first.starts_with(cache_dir.path()));

        let second = downloads.download(&url).unwrap();
        assert_eq!(first, second);
        assert_eq!(downloads.manifest().len(), 2);
    }

    #[test]
    fn cache_downloader_accepts_plain_local_paths() {
        let source_dir = tempdir().unwrap();
        let cache_dir = tempdir().unwrap();
        let source = source_dir.path().join("plain.csv");
        fs::write(&source, "x\n1\n").unwrap();

        let downloads = CacheDownloader::new(cache_dir.path()).unwrap();
        let resolved = downloads
            .download(source.to_str().unwrap())
            .unwrap();
        assert_eq!(fs::read_to_string(resolved).unwrap(), "x\n1\n");
    }

    #[test]
    fn cache_downloader_rejects_network_schemes() {
        let cache_dir = tempdir().unwrap();
        let downloads = CacheDownloader::new(cache_dir.path()).unwrap();
        let err = downloads.download("https://example.com/data.csv").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DownloadFailed { reason, .. } if reason.contains("network")
        ));
    }

    #[test]
    fn cache_downloader_reports_missing_local_resource() {
        let cache_dir = tempdir().unwrap();
        let downloads = CacheDownloader::new(cache_dir.path()).unwrap();
        let err = downloads.download("file:///nonexistent/data.csv").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DownloadFailed { reason, .. } if reason.contains("not found")
        ));
    }

    #[test]
    fn fixture_downloader_resolves_by_final_segment_and_records_artifacts() {
        let fixtures = tempdir().unwrap();
        fs::write(fixtures.path().join("rows.csv"), "a\n1\n").unwrap();

        let downloads = FixtureDownloader::new(fixtures.path());
        let path = downloads
            .download("https://example.com/deep/path/rows.csv")
            .unwrap();
        assert!(path.ends_with("rows.csv"));

        downloads
            .download("https://example.com/deep/path/rows.csv")
            .unwrap();
        assert_eq!(downloads.artifacts(), vec!["rows.csv".to_string()]);
    }

    #[test]
    fn fixture_downloader_reports_missing_fixture() {
        let fixtures = tempdir().unwrap();
        let downloads = FixtureDownloader::new(fixtures.path());
        let err = downloads.download("https://example.com/absent.csv").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DownloadFailed { reason, .. } if reason.contains("absent.csv")
        ));
    }
}
