use serde::Deserialize;

/// Issue fields selected by the assigned-issues query.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Issue {
    /// Human-readable key, e.g. `ENG-42`.
    pub identifier: String,
    pub title: String,
    pub url: String,
    pub state: WorkflowState,
}

/// Workflow state an issue currently sits in.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WorkflowState {
    pub name: String,
    /// Hex color of the state, selected but not rendered.
    pub color: String,
}
