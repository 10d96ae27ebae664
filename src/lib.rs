pub mod core;
pub mod loaders;
pub mod pipelines;
pub mod sampling;

// Re-export core types
pub use crate::core::{DatasetConfig, PrepareError, TweetRecord};

pub use pipelines::dataset_preparation::{
    prepare, DatasetPreparer, DatasetPreparerBuilder, TweetTable,
};
pub use sampling::sample_and_save;
