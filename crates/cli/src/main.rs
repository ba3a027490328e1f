use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod input;
mod provenance;
mod summary;
mod svg;

#[derive(Parser)]
#[command(name = "jagpad")]
#[command(about = "Generate star-shaped pad outlines, one SVG per radius")]
struct Cmd {
    /// Parameter file: resolution, height, max_jag_chord, min_radius,
    /// max_overlap_radius, recovery_fraction, then one radius per star
    input: PathBuf,

    /// Directory receiving the `<R>.svg` files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Log and skip radii with invalid parameters instead of aborting
    #[arg(long)]
    keep_going: bool,

    /// Write a per-star summary table (.parquet, else CSV) and its provenance sidecar
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    let text = fs::read_to_string(&cmd.input)
        .with_context(|| format!("reading {}", cmd.input.display()))?;
    let input = input::parse(&text).with_context(|| format!("parsing {}", cmd.input.display()))?;
    tracing::info!(
        input = %cmd.input.display(),
        radii = input.radii.len(),
        "batch"
    );
    if input.radii.is_empty() {
        tracing::warn!("parameter stream contains no radii");
    }

    let opts = batch::Options {
        out_dir: cmd.out_dir,
        keep_going: cmd.keep_going,
    };
    let records = batch::run(&input, &opts)?;
    tracing::info!(
        generated = records.len(),
        skipped = input.radii.len() - records.len(),
        "done"
    );

    if let Some(path) = cmd.summary {
        summary::write_summary(&path, &records)?;
        let p = &input.params;
        let mut payload = provenance::Payload::new(
            &cmd.input,
            json!({
                "resolution": p.resolution,
                "height": p.height,
                "max_jag_chord": p.max_jag_chord,
                "min_radius": p.min_radius,
                "max_overlap_radius": p.max_overlap_radius,
                "recovery_fraction": p.recovery_fraction,
                "stars": serde_json::to_value(&records)?,
                "keep_going": opts.keep_going
            }),
        );
        payload.outputs = records.iter().map(|r| r.file.clone()).collect();
        let prov = provenance::write_sidecar(&path, payload)?;
        tracing::info!(path = %prov.display(), "provenance");
    }
    Ok(())
}
