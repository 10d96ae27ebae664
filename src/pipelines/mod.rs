// Pipeline modules organized by functionality
pub mod dataset_preparation;

pub use dataset_preparation::*;
