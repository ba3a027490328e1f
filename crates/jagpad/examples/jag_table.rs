//! Print the derived counts for a range of pad radii.
//!
//! Usage:
//!   cargo run -p jagpad --example jag_table -- [max_jag_chord]
//!
//! Columns: R, N (jags), K (radial samples), Kappa (points per half-jag),
//! total points, closing gap.

use jagpad::generate_star;
use jagpad::params::BatchParams;

fn main() {
    let chord = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(5.0);
    let batch = BatchParams {
        resolution: 1.0,
        height: 1.0,
        max_jag_chord: chord,
        min_radius: 7.0,
        max_overlap_radius: 3.0,
        recovery_fraction: 0.4,
    };
    println!("{:>6} {:>4} {:>4} {:>6} {:>7} {:>8}", "R", "N", "K", "Kappa", "points", "gap");
    for r in [8.0, 10.0, 15.0, 20.0, 30.0, 50.0] {
        let star = match batch.for_radius(r).and_then(|p| generate_star(&p)) {
            Ok(star) => star,
            Err(e) => {
                eprintln!("R = {r}: {e}");
                continue;
            }
        };
        println!(
            "{:>6.1} {:>4} {:>4} {:>6} {:>7} {:>8.4}",
            r,
            star.jag_count(),
            batch.radial_samples(r),
            star.sector_len(),
            star.len(),
            star.closing_gap().unwrap_or(0.0)
        );
    }
}
