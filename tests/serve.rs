use rowsample::{routes, Config};
use std::{io::Write, sync::Arc};
use tempfile::NamedTempFile;

async fn spawn_server(config: Config) -> std::net::SocketAddr {
    let (addr, server) =
        warp::serve(routes(Arc::new(config))).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

#[tokio::test]
async fn test_demo_over_http() -> anyhow::Result<()> {
    let mut tmp = NamedTempFile::new()?;
    writeln!(tmp, "station,reading,active")?;
    for i in 0..7 {
        writeln!(tmp, "s{},{},{}", i, i * 10, i % 2 == 0)?;
    }
    tmp.flush()?;

    let addr = spawn_server(Config::new(tmp.path())).await;
    let resp = reqwest::get(format!("http://{}/demo", addr)).await?;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let body = resp.text().await?;
    assert!(body.starts_with(r#"{"rows":[{"station":"s0","reading":0,"active":true}"#));
    let parsed: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(parsed["rows"].as_array().map(Vec::len), Some(5));
    Ok(())
}

#[tokio::test]
async fn test_missing_csv_over_http() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("dataset.csv");

    let addr = spawn_server(Config::new(&path)).await;
    let resp = reqwest::get(format!("http://{}/demo", addr)).await?;
    assert_eq!(resp.status().as_u16(), 404);
    let body: serde_json::Value = resp.json().await?;
    assert_eq!(
        body,
        serde_json::json!({ "error": format!("CSV not found at {}", path.display()) })
    );
    Ok(())
}
