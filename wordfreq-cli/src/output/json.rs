//! JSON artifact writers
//!
//! Statistics and the timing log are persisted as two separate artifacts,
//! pretty-printed so they remain diffable between runs.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use wordfreq_core::{CorpusStats, TimingRecord};

/// Write merged corpus statistics to `path`
pub fn write_stats(path: &Path, stats: &CorpusStats) -> Result<()> {
    write_pretty(path, stats)
}

/// Write the per-level timing log to `path`
pub fn write_timings(path: &Path, timings: &[TimingRecord]) -> Result<()> {
    write_pretty(path, &timings)
}

fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let file = File::create(path)
        .map_err(|e| CliError::OutputFailed(format!("{}: {e}", path.display())))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to serialize to {}", path.display()))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
