//! Seeded sampling of a prepared table and CSV persistence of the result.

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::core::{PrepareError, Result};
use crate::pipelines::dataset_preparation::TweetTable;

/// Draws `n` distinct rows uniformly at random.
///
/// The same table, `n` and `seed` always yield the same rows in the same order.
pub fn sample(table: &TweetTable, n: usize, seed: u64) -> Result<TweetTable> {
    if n > table.len() {
        return Err(PrepareError::Sampling {
            requested: n,
            available: table.len(),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let indices = rand::seq::index::sample(&mut rng, table.len(), n);
    Ok(indices
        .into_iter()
        .map(|i| table.records()[i].clone())
        .collect())
}

/// Writes `table` as UTF-8 CSV with a `sentiment,text` header and no index column.
pub fn write_csv(table: &TweetTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PrepareError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| PrepareError::io(path, e))?;
    let mut writer = Writer::from_writer(file);
    if table.is_empty() {
        writer
            .write_record(table.columns())
            .map_err(|e| write_error(path, e))?;
    }
    for record in table {
        writer.serialize(record).map_err(|e| write_error(path, e))?;
    }
    writer.flush().map_err(|e| PrepareError::io(path, e))?;
    Ok(())
}

/// Samples `n` rows with `seed` and writes them to `output_path`.
pub fn sample_and_save(
    table: &TweetTable,
    n: usize,
    seed: u64,
    output_path: &Path,
) -> Result<TweetTable> {
    let sampled = sample(table, n, seed)?;
    write_csv(&sampled, output_path)?;
    info!(rows = sampled.len(), path = %output_path.display(), "sample saved");
    Ok(sampled)
}

fn write_error(path: &Path, err: csv::Error) -> PrepareError {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => PrepareError::io(path, source),
        other => PrepareError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, format!("{other:?}")),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TweetRecord;

    fn table(n: usize) -> TweetTable {
        (0..n)
            .map(|i| TweetRecord::new((i % 2) as i64, format!("tweet {i}")))
            .collect()
    }

    #[test]
    fn sample_is_deterministic() -> anyhow::Result<()> {
        let t = table(1_000);
        let a = sample(&t, 100, 42)?;
        let b = sample(&t, 100, 42)?;
        assert_eq!(a, b);
        assert_eq!(a.len(), 100);
        Ok(())
    }

    #[test]
    fn sample_rows_are_distinct() -> anyhow::Result<()> {
        let t = table(50);
        let s = sample(&t, 50, 7)?;
        let unique: std::collections::HashSet<_> = s.iter().collect();
        assert_eq!(unique.len(), 50);
        Ok(())
    }

    #[test]
    fn oversized_sample_fails() {
        let t = table(10);
        let err = sample(&t, 11, 42).unwrap_err();
        assert!(matches!(
            err,
            PrepareError::Sampling {
                requested: 11,
                available: 10
            }
        ));
    }

    #[test]
    fn empty_sample_writes_header_only() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.csv");
        sample_and_save(&table(3), 0, 42, &path)?;
        assert_eq!(fs::read_to_string(&path)?, "sentiment,text\n");
        Ok(())
    }
}
