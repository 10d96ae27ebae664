pub mod config;
pub mod error;
pub mod record;

pub use config::{DatasetConfig, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED, SENTIMENT140_URL};
pub use error::{PrepareError, Result};
pub use record::{remap_sentiment, TweetRecord, OUTPUT_COLUMNS, RAW_COLUMNS};
