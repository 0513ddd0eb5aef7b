//! Pull request command builders
//!
//! Pure functions from typed params to a gh invocation. Optional flags are
//! appended only when their field is present; `--draft` only when true.

use crate::gh::GhCommand;
use crate::params::{PrCommentParams, PrCreateParams, PrListParams, PrViewParams};

/// `pr create --title "<title>" [--body "<body>"] [--base "<base>"] [--head "<head>"] [--draft]`
pub fn pr_create(params: &PrCreateParams) -> GhCommand {
    GhCommand::new(&["pr", "create"])
        .quoted_flag("--title", params.title.as_str())
        .quoted_flag_opt("--body", params.body.as_ref())
        .quoted_flag_opt("--base", params.base.as_ref())
        .quoted_flag_opt("--head", params.head.as_ref())
        .switch("--draft", params.draft == Some(true))
}

/// `pr list [--state <state>] [--base <base>] [--limit <limit>]`
pub fn pr_list(params: &PrListParams) -> GhCommand {
    GhCommand::new(&["pr", "list"])
        .flag_opt("--state", params.state.as_ref())
        .flag_opt("--base", params.base.as_ref())
        .flag_opt("--limit", params.limit.as_ref())
}

/// `pr view <number>`
pub fn pr_view(params: &PrViewParams) -> GhCommand {
    GhCommand::new(&["pr", "view"]).arg(params.number.to_string())
}

/// `pr comment <number> --body "<body>"`
pub fn pr_comment(params: &PrCommentParams) -> GhCommand {
    GhCommand::new(&["pr", "comment"])
        .arg(params.number.to_string())
        .quoted_flag("--body", params.body.as_str())
}
