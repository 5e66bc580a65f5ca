use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;

use crate::report::domain::report_writer::ReportWriter;
use crate::transcript::domain::word_hit::WordHit;

pub const CSV_HEADER: &str = "source,start,end,phrase,context";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode report rows into {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Writes one CSV row per hit: `source,start,end,phrase,context`.
///
/// Every row field is quoted with embedded quotes doubled; times are seconds
/// with millisecond precision.
pub struct CsvReportWriter;

impl CsvReportWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_atomic(&self, path: &Path, hits: &[WordHit]) -> Result<(), ReportError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err(parent))?;
        }

        // Write next to the target, then rename
        let temp_path = path.with_extension("part");
        let file = fs::File::create(&temp_path).map_err(write_err(&temp_path))?;

        let result = write_csv(BufWriter::new(file), hits)
            .map_err(|source| ReportError::Encode {
                path: temp_path.clone(),
                source,
            })
            .and_then(|()| fs::rename(&temp_path, path).map_err(write_err(path)));

        if result.is_err() {
            if let Err(e) = fs::remove_file(&temp_path) {
                log::debug!("Could not remove {}: {e}", temp_path.display());
            }
        }
        result
    }
}

impl Default for CsvReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_report(
        &self,
        path: &Path,
        hits: &[WordHit],
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.write_atomic(path, hits)?;
        Ok(())
    }
}

/// Header as a bare line, then one fully quoted record per hit.
fn write_csv<W: Write>(mut out: W, hits: &[WordHit]) -> Result<(), csv::Error> {
    out.write_all(CSV_HEADER.as_bytes())?;
    out.write_all(b"\n")?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);
    for hit in hits {
        let start = format!("{:.3}", hit.start_time);
        let end = format!("{:.3}", hit.end_time);
        writer.write_record([
            hit.source.as_str(),
            start.as_str(),
            end.as_str(),
            hit.phrase.as_str(),
            hit.context.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_err(path: &Path) -> impl FnOnce(std::io::Error) -> ReportError {
    let path = path.to_path_buf();
    move |source| ReportError::Write { path, source }
}
