use anyhow::{Context, Result};
use log::debug;

use crate::config::Config;
use crate::linear::query::QueryRequest;

/// Linear GraphQL endpoint.
pub const API_URL: &str = "https://api.linear.app/graphql";

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);
const USER_AGENT: &str = "linbar";

/// Posts the assigned-issues query and returns the raw response body.
///
/// Linear personal API keys go into the `Authorization` header as-is,
/// without a `Bearer` prefix.
pub async fn fetch_assigned_issues(config: &Config, api_key: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to create HTTP client")?;

    let body = QueryRequest::assigned_issues(config.num_results, config.sort_by);
    debug!(
        "requesting {} issues ordered by {}",
        config.num_results,
        config.sort_by.as_str()
    );

    let response = client
        .post(API_URL)
        .header("Authorization", api_key)
        .header("User-Agent", USER_AGENT)
        .json(&body)
        .send()
        .await
        .context("Request to Linear failed")?;

    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "API request error: {}",
            response.status()
        ));
    }

    response.text().await.context("Failed to read response body")
}
