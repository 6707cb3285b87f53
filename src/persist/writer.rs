use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::persist::SyncMode;
use crate::persist::row::{self, HEADER};
use crate::types::Record;

/// Writes a complete inventory file: header, then one row per record.
///
/// The file is truncated on create, so rows must be appended in the order
/// they should appear (ascending id). Two layers of buffering:
///   BufWriter.flush()  → Rust buffer → OS page cache
///   file.sync_all()    → OS page cache → physical disk (SyncMode::Fsync)
pub struct CsvWriter {
    writer: BufWriter<File>,
    rows: usize,
    sync: SyncMode,
}

impl CsvWriter {
    /// Create (or truncate) the file at `path`, creating its directory if
    /// needed, and write the header line.
    pub fn create(path: &Path, sync: SyncMode) -> Result<Self> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "{HEADER}")?;
        Ok(CsvWriter {
            writer,
            rows: 0,
            sync,
        })
    }

    pub fn append(&mut self, record: &Record) -> Result<()> {
        writeln!(self.writer, "{}", row::encode(record))?;
        self.rows += 1;
        Ok(())
    }

    /// Rows appended so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush, fsync if the mode asks for it, and return the row count.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        if self.sync == SyncMode::Fsync {
            self.writer.get_ref().sync_all()?;
        }
        Ok(self.rows)
    }
}
