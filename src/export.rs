//! Export of combination lists: CSV records and a plain-text listing.
//!
//! # CSV layout
//!
//! ```text
//! Polymorphic Gate Combination,HVDD Gate,HVDD Function,LVDD Gate,LVDD Function
//! TH22_TH12,TH22,A & B,TH12,A | B
//! ```
//!
//! Functions are written exactly as authored in the catalog.

use std::fmt::Write as FmtWrite;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::info;

use crate::combination::PolymorphicGateCombination;
use crate::error::Result;

pub const CSV_HEADER: [&str; 5] = [
    "Polymorphic Gate Combination",
    "HVDD Gate",
    "HVDD Function",
    "LVDD Gate",
    "LVDD Function",
];

/// Writes the header and one record per combination to `writer`.
pub fn write_csv<W: io::Write>(writer: W, combinations: &[PolymorphicGateCombination<'_>]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for c in combinations {
        wtr.write_record([
            c.id().as_str(),
            c.hvdd_name(),
            c.hvdd_expression(),
            c.lvdd_name(),
            c.lvdd_expression(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the CSV to `path`, creating or truncating it. Returns the path written.
pub fn write_csv_file<P: AsRef<Path>>(path: P, combinations: &[PolymorphicGateCombination<'_>]) -> Result<PathBuf> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_csv(io::BufWriter::new(file), combinations)?;
    info!("wrote {} combinations to {}", combinations.len(), path.display());
    Ok(path.to_path_buf())
}

/// File name used when no output path is given: `polymorphic_gates_YYYYmmdd_HHMMSS.csv`.
pub fn default_csv_file_name(now: NaiveDateTime) -> String {
    format!("polymorphic_gates_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Human-readable listing: the count, then every combination, optionally with its truth table.
pub fn render_report(combinations: &[PolymorphicGateCombination<'_>], with_truth_tables: bool) -> String {
    let mut out = String::new();
    writeln!(out, "Number of Combinations: {}", combinations.len()).unwrap();
    for c in combinations {
        writeln!(out, "\n{}", c).unwrap();
        if with_truth_tables {
            writeln!(out, "Truth Table:\n{}", c.truth_table()).unwrap();
        }
    }
    out
}
