//! CSV export of ranked counter scores, for spreadsheet comparison.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::analysis::counter::CandidateScore;

/// Write ranked scores as CSV to any writer. Columns: rank, name, score,
/// avg_offense, avg_defense.
pub fn write_counter_rankings<W: Write>(
    writer: W,
    ranked: &[CandidateScore],
) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["rank", "name", "score", "avg_offense", "avg_defense"])?;
    for (index, entry) in ranked.iter().enumerate() {
        out.write_record([
            (index + 1).to_string(),
            entry.name.clone(),
            format!("{:.4}", entry.score),
            format!("{:.4}", entry.avg_offense),
            format!("{:.4}", entry.avg_defense),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Write ranked scores to a CSV file at `path`.
pub fn export_counter_rankings(path: &Path, ranked: &[CandidateScore]) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    write_counter_rankings(file, ranked)
}
