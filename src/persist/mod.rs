pub mod reader;
pub mod row;
pub mod writer;

pub use reader::CsvReader;
pub use row::HEADER;
pub use writer::CsvWriter;

use std::path::Path;

use crate::collections::DynamicArray;
use crate::error::Result;
use crate::types::Record;

/// Controls whether the inventory file is fsync'd after it is written.
///
///   - Flush: hand the bytes to the OS page cache and return.
///   - Fsync: also wait for the file to reach the disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncMode {
    Flush,
    #[default]
    Fsync,
}

/// Load every readable record from `path`.
///
/// A missing file is an empty inventory. Rows that cannot be decoded are
/// logged and skipped; the rest of the file still loads.
pub fn load(path: &Path) -> Result<DynamicArray<Record>> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no inventory file yet; starting empty");
        return Ok(DynamicArray::new());
    }

    let reader = CsvReader::open(path)?;
    let mut records = DynamicArray::new();
    let mut skipped = 0usize;
    for (line, decoded) in reader.records() {
        match decoded {
            Ok(record) => records.add(record),
            Err(e) => {
                skipped += 1;
                tracing::warn!(path = %path.display(), line, error = %e, "skipping unreadable row");
            }
        }
    }
    tracing::info!(path = %path.display(), records = records.len(), skipped, "inventory loaded");
    Ok(records)
}

/// Write `records`, in the order given, as a complete inventory file.
/// Returns the number of rows written.
pub fn save<'a>(
    path: &Path,
    records: impl IntoIterator<Item = &'a Record>,
    sync: SyncMode,
) -> Result<usize> {
    let mut writer = CsvWriter::create(path, sync)?;
    for record in records {
        writer.append(record)?;
    }
    writer.finish()
}
