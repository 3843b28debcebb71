use serde::Deserialize;

use crate::linear::issue::Issue;

/// Envelope shared by every GraphQL response.
#[derive(Deserialize, Debug)]
pub struct GraphQlResponse {
    pub data: Option<ResponseData>,
    pub errors: Option<Vec<ApiError>>,
}

#[derive(Deserialize, Debug)]
pub struct ApiError {
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct ResponseData {
    pub viewer: Option<Viewer>,
}

#[derive(Deserialize, Debug)]
pub struct Viewer {
    #[serde(rename = "assignedIssues")]
    pub assigned_issues: Option<Connection<Issue>>,
}

/// Node container used by GraphQL list fields.
#[derive(Deserialize, Debug)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

/// Extracts the issue list from a raw response body.
///
/// A missing `data`, `viewer` or `assignedIssues` level reads as an
/// empty list. Returns `Err` with a display-ready message when the body
/// is not valid JSON or when the API reports an error.
pub fn extract_issues(body: &str) -> Result<Vec<Issue>, String> {
    let response: GraphQlResponse =
        serde_json::from_str(body).map_err(|e| format!("Error: {e}"))?;

    if let Some(first) = response.errors.as_ref().and_then(|errors| errors.first()) {
        return Err(format!("API Error: {}", first.message));
    }

    Ok(response
        .data
        .and_then(|data| data.viewer)
        .and_then(|viewer| viewer.assigned_issues)
        .map(|connection| connection.nodes)
        .unwrap_or_default())
}
