use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::*;
use stepwrap_core::config;

pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let created = config::init_config(&ctx.cwd)?;
    let path = config::get_config_path(&ctx.cwd);

    if ctx.json {
        output_json(&serde_json::json!({
            "success": true,
            "command": "init",
            "created": created,
            "path": path.display().to_string(),
        }));
    } else if created {
        print_success(&format!("Created {}.", config::CONFIG_FILE));
    } else {
        print_warning(&format!(
            "{} already exists; left unchanged.",
            config::CONFIG_FILE
        ));
    }

    Ok(())
}
