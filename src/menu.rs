use crate::linear::Issue;

/// Menu-bar title when the query succeeded.
const TITLE: &str = "Linear";
/// Menu-bar title for every failure state.
const WARNING_TITLE: &str = "⚠️ Linear";
/// Lines after this separator render in the dropdown.
const SEPARATOR: &str = "---";
/// Issue titles longer than this are shortened.
const MAX_TITLE_LEN: usize = 50;

/// Menu shown when no API key is configured.
pub fn missing_key() -> Vec<String> {
    vec![
        WARNING_TITLE.to_string(),
        SEPARATOR.to_string(),
        "Set LINEAR_API_KEY in xbar plugin settings".to_string(),
    ]
}

/// Menu shown for any failed invocation. `message` already carries its
/// `Error: ` or `API Error: ` prefix.
pub fn error(message: &str) -> Vec<String> {
    vec![
        WARNING_TITLE.to_string(),
        SEPARATOR.to_string(),
        message.to_string(),
    ]
}

/// Menu for a successful query, one dropdown row per issue plus the
/// refresh action. An empty list renders a placeholder row instead.
pub fn issues(issues: &[Issue]) -> Vec<String> {
    let mut lines = vec![TITLE.to_string(), SEPARATOR.to_string()];

    if issues.is_empty() {
        lines.push("No assigned issues".to_string());
    } else {
        lines.extend(issues.iter().map(issue_line));
    }

    lines.push(SEPARATOR.to_string());
    lines.push("Refresh | refresh=true".to_string());
    lines
}

/// One dropdown row: `ENG-42: Fix login (In Progress) | href=...`.
///
/// The title is shortened before pipes are escaped, so a shortened
/// title never ends in a dangling backslash.
fn issue_line(issue: &Issue) -> String {
    let title = escape_pipes(&shorten(&issue.title));
    format!(
        "{}: {} ({}) | href={}",
        issue.identifier, title, issue.state.name, issue.url
    )
}

fn shorten(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_LEN {
        let head: String = title.chars().take(MAX_TITLE_LEN).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

// Unescaped pipes would read as xbar parameter separators.
fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}
