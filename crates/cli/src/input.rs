use anyhow::{bail, Context, Result};
use jagpad::params::BatchParams;

/// Header scalars, in stream order.
const HEADER: [&str; 6] = [
    "resolution",
    "height",
    "max_jag_chord",
    "min_radius",
    "max_overlap_radius",
    "recovery_fraction",
];

/// A parsed parameter stream: batch header plus the radii to generate.
#[derive(Clone, Debug)]
pub struct BatchInput {
    pub params: BatchParams,
    pub radii: Vec<f64>,
}

/// Parses a whitespace-separated parameter stream.
///
/// A stream that ends inside the header, or any token that is not a number,
/// is an error naming the position; nothing is defaulted.
pub fn parse(text: &str) -> Result<BatchInput> {
    let mut values = Vec::new();
    for (i, tok) in text.split_whitespace().enumerate() {
        let what = HEADER.get(i).copied().unwrap_or("radius");
        let v: f64 = tok
            .parse()
            .with_context(|| format!("value #{} ({what}) is not a number: {tok:?}", i + 1))?;
        values.push(v);
    }
    if values.len() < HEADER.len() {
        bail!(
            "parameter stream ended after {} of {} header values; missing {}",
            values.len(),
            HEADER.len(),
            HEADER[values.len()]
        );
    }
    let radii = values.split_off(HEADER.len());
    let params = BatchParams {
        resolution: values[0],
        height: values[1],
        max_jag_chord: values[2],
        min_radius: values[3],
        max_overlap_radius: values[4],
        recovery_fraction: values[5],
    };
    Ok(BatchInput { params, radii })
}
