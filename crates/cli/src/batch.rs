use anyhow::{Context, Result};
use jagpad::generate_star;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::input::BatchInput;
use crate::svg::write_svg_file;

/// How a batch reacts to per-radius failures and where it writes.
#[derive(Clone, Debug)]
pub struct Options {
    pub out_dir: PathBuf,
    pub keep_going: bool,
}

/// One generated star, as it lands in the summary table.
#[derive(Clone, Debug, Serialize)]
pub struct StarRecord {
    pub radius: f64,
    pub jags: u64,
    pub radial_samples: u64,
    pub ladder_len: u64,
    pub points: u64,
    pub min_extent: f64,
    pub max_extent: f64,
    pub file: String,
}

/// Output file name for one radius: the radius to one decimal place.
pub fn file_name(radius: f64) -> String {
    format!("{radius:.1}.svg")
}

/// Generates and writes one star per radius.
///
/// Parameter errors abort the batch unless `keep_going` is set, in which case
/// the radius is logged and skipped. I/O errors always abort.
pub fn run(input: &BatchInput, opts: &Options) -> Result<Vec<StarRecord>> {
    input
        .params
        .validate()
        .context("invalid parameter stream header")?;
    ensure_dir(&opts.out_dir)?;

    let mut records = Vec::with_capacity(input.radii.len());
    for &radius in &input.radii {
        tracing::info!(radius, "generating star");
        let (params, star) = match input
            .params
            .for_radius(radius)
            .and_then(|p| generate_star(&p).map(|star| (p, star)))
        {
            Ok(v) => v,
            Err(e) if opts.keep_going => {
                tracing::warn!(radius, error = %e, "skipping radius");
                continue;
            }
            Err(e) => return Err(e).with_context(|| format!("generating star for R = {radius}")),
        };

        let path = opts.out_dir.join(file_name(radius));
        write_svg_file(&path, star.points())?;
        let (min_extent, max_extent) = star.radius_range().unwrap_or((0.0, 0.0));
        tracing::info!(
            radius,
            jags = star.jag_count(),
            ladder_len = star.sector_len(),
            points = star.len(),
            path = %path.display(),
            "wrote star"
        );
        records.push(StarRecord {
            radius,
            jags: star.jag_count() as u64,
            radial_samples: params.radial_samples as u64,
            ladder_len: star.sector_len() as u64,
            points: star.len() as u64,
            min_extent,
            max_extent,
            file: path.to_string_lossy().into_owned(),
        });
    }
    Ok(records)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    Ok(())
}
