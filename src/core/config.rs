use std::path::{Path, PathBuf};

/// Public location of the Sentiment140 training/test archive.
pub const SENTIMENT140_URL: &str = "http://cs.stanford.edu/people/alecmgo/trainingandtestdata.zip";

/// Number of rows the driver keeps from the full dataset.
pub const DEFAULT_SAMPLE_SIZE: usize = 50_000;

/// Seed used by the driver so repeated runs pick the same rows.
pub const DEFAULT_SEED: u64 = 42;

/// On-disk layout of the dataset cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    pub data_dir: PathBuf,
    pub archive_name: String,
    pub csv_name: String,
    pub output_name: String,
}

impl DatasetConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn archive_name(mut self, name: impl Into<String>) -> Self {
        self.archive_name = name.into();
        self
    }

    pub fn csv_name(mut self, name: impl Into<String>) -> Self {
        self.csv_name = name.into();
        self
    }

    pub fn output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Where the downloaded archive is kept.
    pub fn archive_path(&self) -> PathBuf {
        self.data_dir.join(&self.archive_name)
    }

    /// Where the extracted raw CSV is expected. Its presence marks a cache hit.
    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join(&self.csv_name)
    }

    /// Where the sampled two-column CSV is written.
    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_name)
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            archive_name: "sentiment140.zip".to_string(),
            csv_name: "training.1600000.processed.noemoticon.csv".to_string(),
            output_name: "raw_tweets.csv".to_string(),
        }
    }
}
