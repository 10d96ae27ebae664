use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};

use crate::core::{remap_sentiment, PrepareError, Result, TweetRecord, OUTPUT_COLUMNS, RAW_COLUMNS};

/// Two-column table of labelled tweets, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TweetTable {
    records: Vec<TweetRecord>,
}

impl TweetTable {
    pub fn new(records: Vec<TweetRecord>) -> Self {
        Self { records }
    }

    /// Column names, always `sentiment` then `text`.
    pub fn columns(&self) -> [&'static str; 2] {
        OUTPUT_COLUMNS
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TweetRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&TweetRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TweetRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<TweetRecord> {
        self.records
    }

    /// Reads a header-less raw Sentiment140 CSV, keeping `sentiment` and `text`.
    ///
    /// Fields are decoded as Latin-1 and the sentiment code is remapped on the way in.
    pub fn from_raw_csv(path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| csv_error(path, e))?;

        let sentiment_idx = column_index("sentiment");
        let text_idx = column_index("text");

        let mut records = Vec::new();
        let mut row = ByteRecord::new();
        loop {
            let more = reader
                .read_byte_record(&mut row)
                .map_err(|e| csv_error(path, e))?;
            if !more {
                break;
            }
            let line = row.position().map_or(0, |p| p.line());
            let parse_error = |reason: String| PrepareError::Parse {
                path: path.to_path_buf(),
                line,
                reason,
            };

            if row.len() != RAW_COLUMNS.len() {
                return Err(parse_error(format!(
                    "expected {} fields, found {}",
                    RAW_COLUMNS.len(),
                    row.len()
                )));
            }

            let raw_sentiment = decode_latin1(&row[sentiment_idx]);
            let sentiment: i64 = raw_sentiment
                .trim()
                .parse()
                .map_err(|_| parse_error(format!("invalid sentiment code {raw_sentiment:?}")))?;

            records.push(TweetRecord {
                sentiment: remap_sentiment(sentiment),
                text: decode_latin1(&row[text_idx]),
            });
        }

        Ok(Self { records })
    }
}

impl IntoIterator for TweetTable {
    type Item = TweetRecord;
    type IntoIter = std::vec::IntoIter<TweetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a TweetTable {
    type Item = &'a TweetRecord;
    type IntoIter = std::slice::Iter<'a, TweetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<TweetRecord> for TweetTable {
    fn from_iter<I: IntoIterator<Item = TweetRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn column_index(name: &str) -> usize {
    RAW_COLUMNS
        .iter()
        .position(|c| *c == name)
        .unwrap_or_else(|| unreachable!("{name} is a raw column"))
}

/// Latin-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn csv_error(path: &Path, err: csv::Error) -> PrepareError {
    let line = err.position().map_or(0, |p| p.line());
    PrepareError::Parse {
        path: path.to_path_buf(),
        line,
        reason: err.to_string(),
    }
}
