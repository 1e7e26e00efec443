use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use trf_core::errors::{ErrorInfo, TrfError};

use crate::record::ResultRecord;

/// Receives result records in round order.
///
/// Ownership of the record passes to the sink; an error aborts the run.
pub trait RecordSink {
    /// Accepts one fully formed record.
    fn accept(&mut self, record: ResultRecord) -> Result<(), TrfError>;
}

impl RecordSink for Vec<ResultRecord> {
    fn accept(&mut self, record: ResultRecord) -> Result<(), TrfError> {
        self.push(record);
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn accept(&mut self, record: ResultRecord) -> Result<(), TrfError> {
        (**self).accept(record)
    }
}

/// Writes each record as one JSON object per line, flushing after every record.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wraps an arbitrary writer.
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesSink<BufWriter<File>> {
    /// Creates (or truncates) `path` and writes records into it.
    pub fn create(path: &Path) -> Result<Self, TrfError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| {
                TrfError::Sink(
                    ErrorInfo::new("sink-mkdir", err.to_string())
                        .with_context("path", parent.display()),
                )
            })?;
        }
        let file = File::create(path).map_err(|err| {
            TrfError::Sink(
                ErrorInfo::new("sink-open", err.to_string()).with_context("path", path.display()),
            )
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn accept(&mut self, record: ResultRecord) -> Result<(), TrfError> {
        let mut line = serde_json::to_vec(&record).map_err(|err| {
            TrfError::Sink(
                ErrorInfo::new("sink-serialize", err.to_string())
                    .with_context("round", record.round),
            )
        })?;
        line.push(b'\n');
        // object and newline go out in one write_all
        self.writer
            .write_all(&line)
            .and_then(|_| self.writer.flush())
            .map_err(|err| {
                TrfError::Sink(
                    ErrorInfo::new("sink-write", err.to_string())
                        .with_context("round", record.round),
                )
            })?;
        self.written += 1;
        Ok(())
    }
}

/// Parses JSON-lines records, skipping blank lines.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<ResultRecord>, TrfError> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| {
            TrfError::Serde(
                ErrorInfo::new("records-read", err.to_string()).with_context("line", index + 1),
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|err| {
            TrfError::Serde(
                ErrorInfo::new("record-parse", err.to_string()).with_context("line", index + 1),
            )
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Reads every record from a JSON-lines file.
pub fn load_records(path: &Path) -> Result<Vec<ResultRecord>, TrfError> {
    let file = File::open(path).map_err(|err| {
        TrfError::Serde(
            ErrorInfo::new("records-open", err.to_string()).with_context("path", path.display()),
        )
    })?;
    read_records(BufReader::new(file))
}
