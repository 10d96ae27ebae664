use serde::{Deserialize, Serialize};

/// Column names of the raw Sentiment140 CSV, in file order. The file has no header row.
pub const RAW_COLUMNS: [&str; 6] = ["sentiment", "id", "date", "query", "user", "text"];

/// Columns kept after projection, in output order.
pub const OUTPUT_COLUMNS: [&str; 2] = ["sentiment", "text"];

/// Raw polarity code Sentiment140 uses for positive tweets.
pub const RAW_POSITIVE: i64 = 4;

/// A single labelled tweet after projection.
///
/// `sentiment` is 0 for negative and 1 for positive once remapped. Codes outside the
/// raw {0, 4} encoding are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TweetRecord {
    pub sentiment: i64,
    pub text: String,
}

impl TweetRecord {
    pub fn new(sentiment: i64, text: impl Into<String>) -> Self {
        Self {
            sentiment,
            text: text.into(),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.sentiment == 1
    }
}

/// Maps the raw positive code 4 to 1; every other value is returned unchanged.
pub fn remap_sentiment(raw: i64) -> i64 {
    if raw == RAW_POSITIVE {
        1
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_only_touches_positive_code() {
        assert_eq!(remap_sentiment(4), 1);
        assert_eq!(remap_sentiment(0), 0);
        for v in [-3, 1, 2, 3, 5, 42] {
            assert_eq!(remap_sentiment(v), v);
        }
    }

    #[test]
    fn output_columns_are_a_subset_of_raw_columns() {
        for col in OUTPUT_COLUMNS {
            assert!(RAW_COLUMNS.contains(&col));
        }
    }
}
