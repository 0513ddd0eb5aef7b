//! Tool catalogue
//!
//! The closed set of tools this server exposes. Each entry ties a name to
//! its schema and command builder.

use rmcp::model::Tool;
use serde_json::Value;

use crate::gh::GhCommand;
use crate::handlers;
use crate::params::{PrCommentParams, PrCreateParams, PrListParams, PrViewParams, ToolParams};
use crate::schema::{ToolSchema, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrTool {
    CreatePr,
    ListPrs,
    ViewPr,
    CommentPr,
}

impl PrTool {
    pub const ALL: [PrTool; 4] = [
        PrTool::CreatePr,
        PrTool::ListPrs,
        PrTool::ViewPr,
        PrTool::CommentPr,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn schema(&self) -> ToolSchema {
        match self {
            PrTool::CreatePr => PrCreateParams::SCHEMA,
            PrTool::ListPrs => PrListParams::SCHEMA,
            PrTool::ViewPr => PrViewParams::SCHEMA,
            PrTool::CommentPr => PrCommentParams::SCHEMA,
        }
    }

    pub fn name(&self) -> &'static str {
        self.schema().name
    }

    /// Validate raw arguments and build the gh invocation
    pub fn build(&self, args: &Value) -> Result<GhCommand, ValidationError> {
        let command = match self {
            PrTool::CreatePr => handlers::pr_create(&PrCreateParams::from_args(args)?),
            PrTool::ListPrs => handlers::pr_list(&PrListParams::from_args(args)?),
            PrTool::ViewPr => handlers::pr_view(&PrViewParams::from_args(args)?),
            PrTool::CommentPr => handlers::pr_comment(&PrCommentParams::from_args(args)?),
        };
        Ok(command)
    }

    /// MCP tool definition published in `tools/list`
    pub fn definition(&self) -> Tool {
        let schema = self.schema();
        let input_schema = schema
            .input_schema()
            .as_object()
            .cloned()
            .unwrap_or_default();
        Tool::new(schema.name, schema.description, input_schema)
    }
}

/// Definitions for every tool, in catalogue order
pub fn catalogue() -> Vec<Tool> {
    PrTool::ALL.iter().map(PrTool::definition).collect()
}
