use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::Selected;
use crate::cli::SelectArgs;
use crate::context::RuntimeContext;
use crate::output::*;

pub fn run(ctx: &RuntimeContext, args: &SelectArgs) -> Result<()> {
    let engine = ctx.engine()?;
    let selected = Selected::read(args)?;
    let offset = selected.first_line() - 1;

    let line_ending = engine.line_ending_for(&selected.buffer);

    let mut steps = engine
        .list_blocks_with(selected.text(), line_ending)
        .context("cannot list step blocks")?;
    for step in &mut steps {
        step.first_line += offset;
        step.last_line += offset;
    }

    if ctx.json {
        output_json(&serde_json::json!({
            "success": true,
            "command": "list",
            "count": steps.len(),
            "steps": steps,
        }));
        return Ok(());
    }

    if steps.is_empty() {
        print_warning("No step blocks found.");
        return Ok(());
    }

    for step in &steps {
        println!(
            "{}{} {}",
            "  ".repeat(step.depth),
            step.name.bold(),
            format!("(lines {}-{})", step.first_line, step.last_line).dimmed()
        );
    }

    Ok(())
}
