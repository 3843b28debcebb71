use anyhow::Context;

use crate::config::Config;
use crate::linear::{client, response};
use crate::menu;
use crate::output;

/// Runs one plugin invocation: resolve configuration, fetch when a key
/// is present, and print the resulting menu.
///
/// Every failure is rendered into the menu; the returned error covers
/// only the test writer, so the host process never sees a non-zero exit
/// for an API problem.
pub async fn run(mut stdout_additional: Option<&mut dyn std::io::Write>) -> anyhow::Result<()> {
    let config = Config::from_env();

    let lines = match config.api_key.as_deref() {
        None => menu::missing_key(),
        Some(api_key) => {
            let outcome = client::fetch_assigned_issues(&config, api_key)
                .await
                .map_err(|e| format!("Error: {e}"));
            render_response(outcome)
        }
    };

    output::print_lines(&lines, &mut stdout_additional).context("Failed to write menu lines")?;
    Ok(())
}

/// Pure half of the pipeline: a completed fetch in, menu lines out.
///
/// `outcome` is the raw response body, or a display-ready message for a
/// transport failure.
pub fn render_response(outcome: Result<String, String>) -> Vec<String> {
    match outcome {
        Ok(body) => match response::extract_issues(&body) {
            Ok(issues) => menu::issues(&issues),
            Err(message) => menu::error(&message),
        },
        Err(message) => menu::error(&message),
    }
}
