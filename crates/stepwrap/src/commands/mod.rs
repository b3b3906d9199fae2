pub mod init;
pub mod list;
pub mod template;
pub mod unwrap;
pub mod wrap;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use stepwrap_core::document::{read_document, write_document};
use stepwrap_core::line_ending::LineEnding;
use stepwrap_core::{Engine, SelectionSpan};

use crate::cli::{SelectArgs, TransformArgs};
use crate::context::RuntimeContext;
use crate::output::*;

/// A buffer together with the whole-line span a command operates on.
pub struct Selected {
    pub buffer: String,
    pub span: SelectionSpan,
}

impl Selected {
    pub fn read(args: &SelectArgs) -> Result<Self> {
        let buffer = match &args.file {
            Some(path) => read_document(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                buf
            }
        };
        let span = match args.lines {
            Some(range) => SelectionSpan::from_lines(&buffer, range.first, range.last)?,
            None => SelectionSpan::whole(&buffer),
        };
        Ok(Self { buffer, span })
    }

    pub fn text(&self) -> &str {
        self.span.text(&self.buffer)
    }

    /// 1-based buffer line of the first selected line.
    pub fn first_line(&self) -> usize {
        self.buffer[..self.span.start].matches('\n').count() + 1
    }

    /// 1-based buffer line of the last selected line.
    pub fn last_line(&self) -> usize {
        self.first_line() + self.text().lines().count().max(1) - 1
    }
}

/// Shared flow of `wrap` and `unwrap`: read, transform the span, write or print.
pub fn run_transform<F>(
    ctx: &RuntimeContext,
    args: &TransformArgs,
    command: &str,
    transform: F,
) -> Result<()>
where
    F: FnOnce(&Engine, &str, LineEnding) -> stepwrap_core::Result<String>,
{
    let engine = ctx.engine()?;
    let selected = Selected::read(&args.select)?;
    let (first, last) = (selected.first_line(), selected.last_line());
    let line_ending = engine.line_ending_for(&selected.buffer);

    let replacement = transform(&engine, selected.text(), line_ending)
        .with_context(|| format!("cannot {command} lines {first}-{last}"))?;
    let updated = selected.span.replace(&selected.buffer, &replacement);
    tracing::debug!(command, first, last, "replaced selection");

    match (&args.select.file, args.in_place) {
        (Some(path), true) => {
            write_back(path, &updated)?;
            if ctx.json {
                output_json(&serde_json::json!({
                    "success": true,
                    "command": command,
                    "file": path.display().to_string(),
                    "firstLine": first,
                    "lastLine": last,
                }));
            } else {
                print_success(&format!(
                    "Updated {} (lines {first}-{last}).",
                    path.display()
                ));
            }
        }
        _ => {
            if ctx.json {
                output_json(&serde_json::json!({
                    "success": true,
                    "command": command,
                    "firstLine": first,
                    "lastLine": last,
                    "output": updated,
                }));
            } else {
                output_text(&updated);
            }
        }
    }

    Ok(())
}

fn write_back(path: &Path, content: &str) -> Result<()> {
    write_document(path, content).with_context(|| format!("failed to write {}", path.display()))
}
