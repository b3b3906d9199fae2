use anyhow::Result;
use owo_colors::OwoColorize;

use crate::context::RuntimeContext;
use crate::output::*;

pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let cfg = ctx.load_config()?;

    if ctx.json {
        output_json(&serde_json::json!({
            "success": true,
            "command": "template",
            "indentWidth": cfg.indent_width,
            "lineEnding": cfg.line_ending,
            "placeholder": cfg.template.placeholder_name(),
            "before": cfg.template.before,
            "after": cfg.template.after,
        }));
        return Ok(());
    }

    let unit = " ".repeat(cfg.indent_width);
    for line in &cfg.template.before {
        println!("{line}");
    }
    println!("{unit}{}", "<selected lines>".dimmed());
    for line in &cfg.template.after {
        println!("{line}");
    }

    Ok(())
}
