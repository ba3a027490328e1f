use anyhow::{Context, Result};
use jagpad::Vec2;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Stroke-only style used for cutting templates.
pub const STYLE: &str = "fill:none;stroke:#000000;stroke-opacity:1;stroke-width:0.1";

/// Writes `points` as one closed SVG path.
pub fn write_svg<W: Write>(points: &[Vec2<f64>], out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
    )?;
    writeln!(out, r#"<svg version="1.1">"#)?;
    writeln!(out, "<g")?;
    writeln!(out, r#"style="{STYLE}">"#)?;
    write!(out, r#"<path d=""#)?;
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        write!(out, "M {} {}", first.x, first.y)?;
        for p in iter {
            write!(out, " L {} {}", p.x, p.y)?;
        }
        write!(out, " Z")?;
    }
    writeln!(out, "\"")?;
    writeln!(out, r#"id="path1" />"#)?;
    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")?;
    out.flush()
}

pub fn write_svg_file(path: &Path, points: &[Vec2<f64>]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_svg(points, &mut out).with_context(|| format!("writing {}", path.display()))
}
