use std::io;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, Trim};
use crate::error::SampleError;
use super::Sample;

impl<T: FromStr> Sample<T> {
    /// Read one numeric column, selected by header name, from a CSV file.
    pub fn read_column<P: AsRef<Path>>(path: P, column: &str) -> Result<Self, SampleError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, column)
    }

    /// Read one numeric column, selected by header name, from any CSV source.
    ///
    /// Surrounding whitespace in headers and fields is ignored.
    pub fn from_reader<R: io::Read>(reader: R, column: &str) -> Result<Self, SampleError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let idx = rdr
            .headers()?
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| SampleError::MissingColumn(column.to_owned()))?;

        let mut data = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let raw = record.get(idx).unwrap_or_default();
            let value = raw.parse().map_err(|_| SampleError::InvalidNumber {
                record: i + 1,
                value: raw.to_owned(),
            })?;
            data.push(value);
        }

        if data.is_empty() {
            return Err(SampleError::EmptyFile);
        }

        Ok(Self { data })
    }
}
