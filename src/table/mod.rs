// src/table/mod.rs
use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use tracing::debug;

pub mod convert;
pub mod raw_table;
pub mod schema;
pub mod utils;
pub mod value;

pub use convert::to_rows;
pub use raw_table::RawTable;
pub use schema::{analyze_columns, ColumnType};
pub use value::{CellValue, Row};

fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

/// Read a comma-separated stream with a header record into a `RawTable`.
///
/// - Blank lines are skipped; an input with nothing else yields an empty table.
/// - Header names go through [`utils::normalize_headers`].
/// - Short records are padded with empty (missing) cells.
/// - A record with more fields than the header is an error.
#[tracing::instrument(level = "debug", skip(reader))]
pub fn read_raw_table<R: Read>(reader: R) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // short rows are padded below, long rows rejected
        .from_reader(reader);

    let mut records = rdr.records();

    let header = loop {
        match records.next() {
            None => {
                debug!("no header record; empty table");
                return Ok(RawTable::default());
            }
            Some(result) => {
                let record = result.context("CSV parse error in header")?;
                if !is_blank(&record) {
                    break record;
                }
            }
        }
    };
    let headers = utils::normalize_headers(header.iter());
    let width = headers.len();

    let mut rows = Vec::new();
    for (idx, result) in records.enumerate() {
        let record = result.with_context(|| format!("CSV parse error at data record {}", idx))?;
        if is_blank(&record) {
            continue;
        }
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            bail!(
                "Error tokenizing data: expected {} fields in line {}, saw {}",
                width,
                line,
                record.len()
            );
        }
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    debug!(columns = width, rows = rows.len(), "read CSV");
    Ok(RawTable { headers, rows })
}
