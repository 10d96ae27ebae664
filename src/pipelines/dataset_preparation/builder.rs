use std::path::PathBuf;

use super::pipeline::DatasetPreparer;
use crate::core::{DatasetConfig, SENTIMENT140_URL};
use crate::loaders::{DatasetSource, HttpSource};

pub struct DatasetPreparerBuilder<S: DatasetSource> {
    url: String,
    config: DatasetConfig,
    source: S,
}

impl DatasetPreparerBuilder<HttpSource> {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            config: DatasetConfig::default(),
            source: HttpSource::new(),
        }
    }

    /// Builder pointed at the public Sentiment140 archive.
    pub fn sentiment140() -> Self {
        Self::new(SENTIMENT140_URL)
    }
}

impl<S: DatasetSource> DatasetPreparerBuilder<S> {
    pub fn data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = data_dir.into();
        self
    }

    pub fn config(mut self, config: DatasetConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace where the archive bytes come from.
    pub fn source<T: DatasetSource>(self, source: T) -> DatasetPreparerBuilder<T> {
        DatasetPreparerBuilder {
            url: self.url,
            config: self.config,
            source,
        }
    }

    pub fn build(self) -> DatasetPreparer<S> {
        DatasetPreparer {
            url: self.url,
            config: self.config,
            source: self.source,
        }
    }
}
