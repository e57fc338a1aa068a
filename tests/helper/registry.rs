//! Registry test utilities

use mockito::{Mock, ServerGuard};
use serde_json::{Map, Value, json};

/// PyPI JSON body listing `versions` as releases
pub fn pypi_body(versions: &[&str]) -> String {
    let releases: Map<String, Value> = versions
        .iter()
        .map(|v| (v.to_string(), json!([])))
        .collect();
    json!({
        "info": { "version": versions.last().copied().unwrap_or_default() },
        "releases": releases,
    })
    .to_string()
}

/// Serve `versions` for `package` from the mock PyPI server, expecting exactly one fetch
pub async fn mock_pypi_package(
    server: &mut ServerGuard,
    package: &str,
    versions: &[&str],
) -> Mock {
    server
        .mock("GET", format!("/pypi/{package}/json").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(pypi_body(versions))
        .expect(1)
        .create_async()
        .await
}
