use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

use crate::batch::StarRecord;

/// One row per generated star.
pub fn to_frame(records: &[StarRecord]) -> PolarsResult<DataFrame> {
    df!(
        "radius" => records.iter().map(|r| r.radius).collect::<Vec<_>>(),
        "jags" => records.iter().map(|r| r.jags).collect::<Vec<_>>(),
        "radial_samples" => records.iter().map(|r| r.radial_samples).collect::<Vec<_>>(),
        "ladder_len" => records.iter().map(|r| r.ladder_len).collect::<Vec<_>>(),
        "points" => records.iter().map(|r| r.points).collect::<Vec<_>>(),
        "min_extent" => records.iter().map(|r| r.min_extent).collect::<Vec<_>>(),
        "max_extent" => records.iter().map(|r| r.max_extent).collect::<Vec<_>>(),
        "file" => records.iter().map(|r| r.file.as_str()).collect::<Vec<_>>(),
    )
}

/// Writes the summary as Parquet when `path` ends in `.parquet`, CSV otherwise.
pub fn write_summary(path: &Path, records: &[StarRecord]) -> Result<()> {
    let mut df = to_frame(records)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating summary dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(&mut file)
                .finish(&mut df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        _ => {
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }
    tracing::info!(rows = df.height(), path = %path.display(), "summary");
    Ok(())
}
