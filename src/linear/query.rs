use serde::Serialize;

use crate::config::SortOrder;

/// JSON envelope for a GraphQL POST body.
#[derive(Serialize, Debug, PartialEq)]
pub struct QueryRequest {
    pub query: String,
}

impl QueryRequest {
    /// Request body for the viewer's assigned issues.
    pub fn assigned_issues(first: i64, order_by: SortOrder) -> QueryRequest {
        QueryRequest {
            query: assigned_issues_query(first, order_by),
        }
    }
}

/// Builds the assigned-issues query text.
///
/// `first` and `order_by` come from the validated configuration, so no
/// free-form user input reaches the query.
pub fn assigned_issues_query(first: i64, order_by: SortOrder) -> String {
    format!(
        "\
query {{
  viewer {{
    assignedIssues(first: {first}, orderBy: {order_by}) {{
      nodes {{
        identifier
        title
        url
        state {{ name color }}
      }}
    }}
  }}
}}
",
        first = first,
        order_by = order_by.as_str(),
    )
}
