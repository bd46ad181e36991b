//! CSV serialization of Zipf rankings.
//!
//! The output format is a header line `rank,freq,word` followed by one
//! row per entry: `<1-based rank>,<frequency>,<term>`. Rows are written
//! in the order given; serialization never re-sorts — callers produce
//! the desired order via [`ZipfReport::analyze`](crate::zipf::analyzer::ZipfReport::analyze).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::zipf::analyzer::ZipfReport;

/// CSV header line.
pub const CSV_HEADER: &str = "rank,freq,word";

/// Write (term, frequency) rows to a CSV file at `path`.
///
/// Ranks are assigned from the iteration order, starting at 1. An empty
/// sequence produces a file containing only the header.
pub fn write_zipf_rows<'a, P, I>(path: P, rows: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{CSV_HEADER}")?;
    for (rank, (term, frequency)) in rows.into_iter().enumerate() {
        writeln!(writer, "{},{frequency},{term}", rank + 1)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a [`ZipfReport`] to a CSV file at `path`.
pub fn write_zipf_csv<P: AsRef<Path>>(path: P, report: &ZipfReport) -> Result<()> {
    write_zipf_rows(
        path,
        report
            .entries()
            .iter()
            .map(|e| (e.term.as_str(), e.frequency)),
    )
}
