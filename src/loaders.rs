//! Fetching and unpacking of the raw dataset archive.
//!
//! ## Main Types
//!
//! - [`DatasetSource`] - Anything that can turn a URL into archive bytes
//! - [`HttpSource`] - Blocking HTTP(S) source backed by `reqwest`
//! - [`ArchiveLoader`] - Persists the archive and extracts it into the data directory
//!
//! There is no retry logic: a failed request surfaces immediately as
//! [`PrepareError::Download`].

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use tracing::debug;
use zip::ZipArchive;

use crate::core::{PrepareError, Result};

/// Source of the zipped dataset.
pub trait DatasetSource {
    /// Returns the full response body for `url`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Downloads over HTTP(S) with the client's default timeouts.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl DatasetSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let download_error = |reason: String| PrepareError::Download {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| download_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(download_error(format!("HTTP status {status}")));
        }

        let body = response
            .bytes()
            .map_err(|e| download_error(e.to_string()))?;
        debug!(url, bytes = body.len(), "received archive");

        Ok(body.to_vec())
    }
}

impl<S: DatasetSource + ?Sized> DatasetSource for &S {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        (**self).fetch(url)
    }
}

/// Writes a downloaded archive to disk and unpacks every entry next to it.
#[derive(Debug, Clone)]
pub struct ArchiveLoader {
    pub archive_path: PathBuf,
    pub target_dir: PathBuf,
}

impl ArchiveLoader {
    pub fn new(archive_path: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            archive_path: archive_path.into(),
            target_dir: target_dir.into(),
        }
    }

    /// Persists `bytes` at `archive_path`, then extracts the archive into `target_dir`.
    pub fn store_and_extract(&self, bytes: &[u8]) -> Result<()> {
        fs::write(&self.archive_path, bytes)
            .map_err(|e| PrepareError::io(&self.archive_path, e))?;
        self.extract()
    }

    /// Extracts all entries of the archive at `archive_path` into `target_dir`.
    ///
    /// Entries whose names would land outside `target_dir` are rejected by the zip
    /// reader and reported as an extraction failure.
    pub fn extract(&self) -> Result<()> {
        let file =
            File::open(&self.archive_path).map_err(|e| PrepareError::io(&self.archive_path, e))?;
        let mut archive = ZipArchive::new(file).map_err(|e| self.extraction_error(e))?;
        debug!(
            archive = %self.archive_path.display(),
            entries = archive.len(),
            "extracting archive"
        );
        archive
            .extract(&self.target_dir)
            .map_err(|e| self.extraction_error(e))
    }

    fn extraction_error(&self, err: zip::result::ZipError) -> PrepareError {
        PrepareError::Extraction {
            path: self.archive_path.clone(),
            reason: err.to_string(),
        }
    }
}

/// Fails with [`PrepareError::Extraction`] when `expected` is missing after unpacking `archive`.
pub fn ensure_extracted(archive: &Path, expected: &Path) -> Result<()> {
    if expected.is_file() {
        return Ok(());
    }
    Err(PrepareError::Extraction {
        path: archive.to_path_buf(),
        reason: format!("archive does not contain {}", expected.display()),
    })
}
