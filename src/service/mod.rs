//! The `GET /demo` endpoint: a bounded sample of the configured CSV as JSON.
use crate::config::Config;
use crate::table::Row;
use anyhow::Context;
use serde::Serialize;
use std::{convert::Infallible, sync::Arc, time::Instant};
use tracing::{error, info, warn};
use warp::{
    http::{header::CONTENT_TYPE, StatusCode},
    reject::Rejection,
    reply::Reply,
    Filter,
};

pub mod error;
pub mod sample;

pub use error::SampleError;
pub use sample::sample_csv;

/// Rows returned per request.
pub const SAMPLE_ROWS: usize = 5;

/// Success envelope. Failures are `{"error": <message>}`.
#[derive(Debug, Serialize)]
pub struct RowsResponse {
    pub rows: Vec<Row>,
}

/// All routes served by the process.
pub fn routes(
    config: Arc<Config>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path("demo")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_config(config))
        .and_then(demo)
}

fn with_config(
    config: Arc<Config>,
) -> impl Filter<Extract = (Arc<Config>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&config))
}

/// Run the blocking load on tokio's blocking pool.
pub async fn load_sample(config: Arc<Config>) -> Result<Vec<Row>, SampleError> {
    tokio::task::spawn_blocking(move || sample_csv(&config.csv_path, SAMPLE_ROWS))
        .await
        .context("CSV loading task failed")?
}

/// Serialized envelope with its status and a JSON content type.
fn json_reply(body: String, status: StatusCode) -> impl Reply {
    warp::reply::with_header(
        warp::reply::with_status(body, status),
        CONTENT_TYPE,
        "application/json",
    )
}

async fn demo(config: Arc<Config>) -> Result<impl Reply, Rejection> {
    let start = Instant::now();

    // serialize here so a failure still maps to the error envelope
    let body = load_sample(Arc::clone(&config)).await.and_then(|rows| {
        let n = rows.len();
        serde_json::to_string(&RowsResponse { rows })
            .context("failed to serialize rows")
            .map(|json| (n, json))
            .map_err(SampleError::from)
    });

    let reply = match body {
        Ok((n, json)) => {
            info!(
                path = %config.csv_path.display(),
                rows = n,
                elapsed = ?start.elapsed(),
                "served sample"
            );
            json_reply(json, StatusCode::OK)
        }
        Err(e) => {
            let status = e.status_code();
            match &e {
                SampleError::NotFound(_) => warn!(status = status.as_u16(), "{}", e),
                SampleError::Processing(_) => {
                    error!(path = %config.csv_path.display(), status = status.as_u16(), "{}", e)
                }
            }
            let json = serde_json::json!({ "error": e.to_string() }).to_string();
            json_reply(json, status)
        }
    };

    Ok(reply)
}
