use std::path::PathBuf;
use std::sync::LazyLock;

use clap::{Args, Parser, Subcommand};
use regex::Regex;

#[derive(Parser, Debug)]
#[command(
    name = "stepwrap",
    about = "Wrap code in step blocks, or unwrap it again",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output as structured JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ./.stepwrap.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Indent width in spaces, overriding the config
    #[arg(long, global = true, value_name = "N")]
    pub indent_width: Option<usize>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wrap the selected lines in a step block
    Wrap(TransformArgs),

    /// Remove every step block from the selected lines
    Unwrap(TransformArgs),

    /// List the step blocks in the selected lines
    List(SelectArgs),

    /// Write a default .stepwrap.yaml
    Init,

    /// Show the active wrapper template
    Template,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wrap(_) => "wrap",
            Self::Unwrap(_) => "unwrap",
            Self::List(_) => "list",
            Self::Init => "init",
            Self::Template => "template",
        }
    }
}

// ── Argument structs ───────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// File to read (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Lines to select, 1-based and inclusive: START or START:END
    #[arg(long, value_name = "START[:END]", value_parser = parse_line_range)]
    pub lines: Option<LineRange>,
}

#[derive(Args, Debug)]
pub struct TransformArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Write the result back to FILE instead of stdout
    #[arg(short, long, requires = "file")]
    pub in_place: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub first: usize,
    pub last: usize,
}

static LINE_RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*(?::\s*(\d+)\s*)?$").expect("Invalid line range regex")
});

pub fn parse_line_range(s: &str) -> Result<LineRange, String> {
    let caps = LINE_RANGE_REGEX
        .captures(s)
        .ok_or_else(|| format!("expected START or START:END, got \"{s}\""))?;
    let parse = |m: regex::Match<'_>| {
        m.as_str()
            .parse::<usize>()
            .map_err(|e| format!("invalid line number \"{}\": {e}", m.as_str()))
    };
    let first = parse(caps.get(1).ok_or("missing start line")?)?;
    let last = match caps.get(2) {
        Some(m) => parse(m)?,
        None => first,
    };
    if first == 0 || last < first {
        return Err(format!("line range {first}:{last} must be 1-based and ascending"));
    }
    Ok(LineRange { first, last })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        assert_eq!(parse_line_range("7"), Ok(LineRange { first: 7, last: 7 }));
    }

    #[test]
    fn inclusive_range() {
        assert_eq!(parse_line_range("3:10"), Ok(LineRange { first: 3, last: 10 }));
        assert_eq!(parse_line_range(" 3 : 4 "), Ok(LineRange { first: 3, last: 4 }));
    }

    #[test]
    fn rejects_bad_ranges() {
        assert!(parse_line_range("0").is_err());
        assert!(parse_line_range("5:2").is_err());
        assert!(parse_line_range("a:b").is_err());
        assert!(parse_line_range("1-3").is_err());
        assert!(parse_line_range("").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
