use crate::service::error::SampleError;
use crate::table::{self, Row};
use anyhow::Context;
use std::{fs::File, io, io::BufReader, path::Path};
use tracing::debug;

/// Load the CSV at `path` and return its first `limit` rows, typed.
///
/// Column types are inferred over the whole file, so a bad record anywhere
/// fails the request even if it lies past the sampled prefix.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.display()))]
pub fn sample_csv(path: &Path, limit: usize) -> Result<Vec<Row>, SampleError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SampleError::NotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("failed to open CSV at {}", path.display()))
                .into());
        }
    };

    let raw = table::read_raw_table(BufReader::new(file)).context("failed to parse CSV")?;
    let types = table::analyze_columns(&raw);
    debug!(?types, "inferred column types");

    Ok(table::to_rows(&raw, &types, limit))
}
