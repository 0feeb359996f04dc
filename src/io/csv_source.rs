use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::RawRecord;
use crate::error::{DashboardError, DashboardResult};

use super::RecordSource;

enum CsvInput {
    Path(PathBuf),
    Reader(Option<Box<dyn Read>>),
}

/// Headered CSV input. Every row becomes one [`RawRecord`]; cells are kept
/// verbatim and typed later by the record layer.
pub struct CsvRecordSource {
    input: CsvInput,
}

impl fmt::Debug for CsvRecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.input {
            CsvInput::Path(path) => f.debug_tuple("CsvRecordSource").field(path).finish(),
            CsvInput::Reader(reader) => f
                .debug_struct("CsvRecordSource")
                .field("consumed", &reader.is_none())
                .finish(),
        }
    }
}

fn load_error(err: impl fmt::Display) -> DashboardError {
    DashboardError::Load(err.to_string())
}

impl CsvRecordSource {
    /// Reads from `path` on every load.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            input: CsvInput::Path(path.as_ref().to_path_buf()),
        }
    }

    /// Reads from `reader`. The reader is consumed by the first load.
    #[must_use]
    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Self {
            input: CsvInput::Reader(Some(Box::new(reader))),
        }
    }

    fn parse(reader: impl Read) -> DashboardResult<Vec<RawRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let headers = csv_reader.headers().map_err(load_error)?.clone();
        if headers.is_empty() {
            return Err(DashboardError::Load(
                "csv input has no header row".to_owned(),
            ));
        }

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(load_error)?;
            let row: RawRecord = headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| (header.to_owned(), value.to_owned()))
                .collect();
            rows.push(row);
        }
        debug!(rows = rows.len(), columns = headers.len(), "csv rows parsed");
        Ok(rows)
    }
}

impl RecordSource for CsvRecordSource {
    fn load(&mut self) -> DashboardResult<Vec<RawRecord>> {
        match &mut self.input {
            CsvInput::Path(path) => {
                let file = File::open(&*path)
                    .map_err(|e| DashboardError::Load(format!("{}: {e}", path.display())))?;
                Self::parse(BufReader::new(file))
            }
            CsvInput::Reader(reader) => {
                let reader = reader.take().ok_or_else(|| {
                    DashboardError::Load("csv reader was already consumed".to_owned())
                })?;
                Self::parse(reader)
            }
        }
    }
}
