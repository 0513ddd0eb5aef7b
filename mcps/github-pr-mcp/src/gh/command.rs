//! gh invocation model
//!
//! A [`GhCommand`] is the argument list handed to the gh binary. It is
//! executed as an argument vector, never through a shell, so values reach gh
//! exactly as the caller supplied them. The `Display` form is the familiar
//! command-line suffix (`pr create --title "Add X"`) used for logs and
//! assertions.

use std::fmt;

/// One argument of a gh invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GhArg {
    /// Rendered bare (`pr`, `--state`, `open`, `123`)
    Plain(String),
    /// Rendered between double quotes (`"Add X"`)
    Quoted(String),
}

impl GhArg {
    /// The value passed to the process, without any rendering quotes
    pub fn value(&self) -> &str {
        match self {
            GhArg::Plain(v) | GhArg::Quoted(v) => v,
        }
    }
}

impl fmt::Display for GhArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GhArg::Plain(v) => f.write_str(v),
            GhArg::Quoted(v) => {
                f.write_str("\"")?;
                for c in v.chars() {
                    if c == '"' || c == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{}", c)?;
                }
                f.write_str("\"")
            }
        }
    }
}

/// Argument list for a single gh invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GhCommand {
    args: Vec<GhArg>,
}

impl GhCommand {
    /// Start a command from its fixed verb prefix, e.g. `["pr", "list"]`
    pub fn new(prefix: &[&str]) -> Self {
        Self {
            args: prefix.iter().map(|p| GhArg::Plain((*p).to_string())).collect(),
        }
    }

    /// Append a bare argument
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(GhArg::Plain(value.into()));
        self
    }

    /// Append `flag value` with the value rendered bare
    pub fn flag(mut self, flag: &str, value: impl Into<String>) -> Self {
        self.args.push(GhArg::Plain(flag.to_string()));
        self.args.push(GhArg::Plain(value.into()));
        self
    }

    /// Append `flag "value"` with the value rendered quoted
    pub fn quoted_flag(mut self, flag: &str, value: impl Into<String>) -> Self {
        self.args.push(GhArg::Plain(flag.to_string()));
        self.args.push(GhArg::Quoted(value.into()));
        self
    }

    /// Append `flag value` only when the value is present
    pub fn flag_opt<T: ToString>(self, flag: &str, value: Option<&T>) -> Self {
        match value {
            Some(v) => self.flag(flag, v.to_string()),
            None => self,
        }
    }

    /// Append `flag "value"` only when the value is present
    pub fn quoted_flag_opt(self, flag: &str, value: Option<&String>) -> Self {
        match value {
            Some(v) => self.quoted_flag(flag, v.clone()),
            None => self,
        }
    }

    /// Append a bare switch only when `enabled` is true
    pub fn switch(mut self, flag: &str, enabled: bool) -> Self {
        if enabled {
            self.args.push(GhArg::Plain(flag.to_string()));
        }
        self
    }

    pub fn args(&self) -> &[GhArg] {
        &self.args
    }

    /// Argument vector for process execution
    pub fn argv(&self) -> Vec<&str> {
        self.args.iter().map(GhArg::value).collect()
    }
}

impl fmt::Display for GhCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_and_quoted_arguments() {
        let cmd = GhCommand::new(&["pr", "create"])
            .quoted_flag("--title", "Add X")
            .switch("--draft", true);
        assert_eq!(cmd.to_string(), r#"pr create --title "Add X" --draft"#);
    }

    #[test]
    fn argv_keeps_values_verbatim() {
        let cmd = GhCommand::new(&["pr", "comment"])
            .arg("7")
            .quoted_flag("--body", r#"say "hi"; rm -rf $HOME"#);
        assert_eq!(
            cmd.argv(),
            vec!["pr", "comment", "7", "--body", r#"say "hi"; rm -rf $HOME"#]
        );
    }

    #[test]
    fn display_escapes_quotes_inside_quoted_values() {
        let cmd = GhCommand::new(&["pr", "create"]).quoted_flag("--title", r#"a "b" \c"#);
        assert_eq!(cmd.to_string(), r#"pr create --title "a \"b\" \\c""#);
    }

    #[test]
    fn optional_flags_skip_absent_values() {
        let body: Option<String> = None;
        let limit: Option<u32> = Some(5);
        let cmd = GhCommand::new(&["pr", "list"])
            .quoted_flag_opt("--body", body.as_ref())
            .flag_opt("--limit", limit.as_ref())
            .switch("--draft", false);
        assert_eq!(cmd.to_string(), "pr list --limit 5");
        assert_eq!(cmd.args().len(), 4);
    }
}
