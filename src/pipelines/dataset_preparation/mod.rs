//! Preparation of the Sentiment140 tweet dataset.
//!
//! The pipeline makes sure the data directory exists, downloads and extracts the
//! archive unless the raw CSV is already cached there, then parses the header-less
//! CSV into a two-column [`TweetTable`] with polarity codes remapped to 0/1.
//!
//! ## Main Types
//!
//! - [`DatasetPreparer`] - Runs the download/extract/parse pipeline
//! - [`DatasetPreparerBuilder`] - Builder for URL, data directory and source
//! - [`TweetTable`] - The resulting `sentiment`, `text` table
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use sentiment140_prep::pipelines::dataset_preparation::*;
//!
//! let preparer = DatasetPreparerBuilder::sentiment140()
//!     .data_dir("data")
//!     .build();
//!
//! let table = preparer.prepare()?;
//! println!("{} tweets, columns {:?}", table.len(), table.columns());
//! # anyhow::Ok(())
//! ```

pub mod builder;
pub mod pipeline;
pub mod table;

use std::path::PathBuf;

pub use builder::DatasetPreparerBuilder;
pub use pipeline::DatasetPreparer;
pub use table::TweetTable;

pub use crate::core::Result;

/// Prepares the dataset at `url` inside `data_dir` using the HTTP source.
pub fn prepare(url: &str, data_dir: impl Into<PathBuf>) -> Result<TweetTable> {
    DatasetPreparerBuilder::new(url)
        .data_dir(data_dir)
        .build()
        .prepare()
}
