//! Pull request parameter types

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ToolParams;
use crate::schema::{FieldKind, FieldSpec, ToolSchema};

/// PR state filter for `list_prs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrState {
    Open,
    Closed,
    Merged,
    All,
}

impl PrState {
    pub const VALUES: &'static [&'static str] = &["open", "closed", "merged", "all"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrState::Open => "open",
            PrState::Closed => "closed",
            PrState::Merged => "merged",
            PrState::All => "all",
        }
    }
}

impl fmt::Display for PrState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrCreateParams {
    pub title: String,
    pub body: Option<String>,
    pub base: Option<String>,
    pub head: Option<String>,
    pub draft: Option<bool>,
}

impl ToolParams for PrCreateParams {
    const SCHEMA: ToolSchema = ToolSchema {
        name: "create_pr",
        description: "Create a new pull request",
        fields: &[
            FieldSpec::required("title", FieldKind::Text, "Pull request title"),
            FieldSpec::optional("body", FieldKind::Text, "Pull request body in markdown"),
            FieldSpec::optional("base", FieldKind::Text, "Base branch to merge into"),
            FieldSpec::optional("head", FieldKind::Text, "Head branch with changes"),
            FieldSpec::optional("draft", FieldKind::Boolean, "Create as draft PR"),
        ],
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrListParams {
    pub state: Option<PrState>,
    pub base: Option<String>,
    pub limit: Option<serde_json::Number>,
}

impl ToolParams for PrListParams {
    const SCHEMA: ToolSchema = ToolSchema {
        name: "list_prs",
        description: "List pull requests in the current repository",
        fields: &[
            FieldSpec::optional(
                "state",
                FieldKind::OneOf(PrState::VALUES),
                "PR state filter (open, closed, merged, all)",
            ),
            FieldSpec::optional("base", FieldKind::Text, "Filter by base branch"),
            FieldSpec::optional("limit", FieldKind::Number, "Maximum number of PRs to return"),
        ],
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrViewParams {
    pub number: u64,
}

impl ToolParams for PrViewParams {
    const SCHEMA: ToolSchema = ToolSchema {
        name: "view_pr",
        description: "View details of a pull request",
        fields: &[FieldSpec::required(
            "number",
            FieldKind::PositiveInteger,
            "Pull request number",
        )],
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrCommentParams {
    pub number: u64,
    pub body: String,
}

impl ToolParams for PrCommentParams {
    const SCHEMA: ToolSchema = ToolSchema {
        name: "comment_pr",
        description: "Add a comment to a pull request",
        fields: &[
            FieldSpec::required("number", FieldKind::PositiveInteger, "Pull request number"),
            FieldSpec::required("body", FieldKind::Text, "Comment body in markdown"),
        ],
    };
}
