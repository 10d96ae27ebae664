use std::fs;

use tracing::info;

use super::table::TweetTable;
use crate::core::{DatasetConfig, PrepareError, Result};
use crate::loaders::{ensure_extracted, ArchiveLoader, DatasetSource};

/// Downloads, caches and parses the Sentiment140 CSV.
pub struct DatasetPreparer<S: DatasetSource> {
    pub(crate) url: String,
    pub(crate) config: DatasetConfig,
    pub(crate) source: S,
}

impl<S: DatasetSource> DatasetPreparer<S> {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// True when the extracted CSV is already on disk and no download is needed.
    pub fn is_cached(&self) -> bool {
        self.config.csv_path().is_file()
    }

    /// Runs the pipeline and returns the projected, remapped table.
    ///
    /// The archive is only fetched when the extracted CSV is absent from the data
    /// directory; an existing file is trusted as-is.
    pub fn prepare(&self) -> Result<TweetTable> {
        let data_dir = self.config.data_dir();
        fs::create_dir_all(data_dir).map_err(|e| PrepareError::io(data_dir, e))?;

        let csv_path = self.config.csv_path();
        if self.is_cached() {
            info!(path = %csv_path.display(), "using cached dataset");
        } else {
            info!(url = %self.url, "downloading dataset");
            let bytes = self.source.fetch(&self.url)?;

            let archive_path = self.config.archive_path();
            ArchiveLoader::new(&archive_path, data_dir).store_and_extract(&bytes)?;
            ensure_extracted(&archive_path, &csv_path)?;
            info!("download and extraction finished");
        }

        let table = TweetTable::from_raw_csv(&csv_path)?;
        info!(rows = table.len(), "dataset preparation finished");
        Ok(table)
    }
}
