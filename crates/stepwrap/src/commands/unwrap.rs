use anyhow::Result;

use crate::cli::TransformArgs;
use crate::context::RuntimeContext;

pub fn run(ctx: &RuntimeContext, args: &TransformArgs) -> Result<()> {
    super::run_transform(ctx, args, "unwrap", |engine, text, line_ending| {
        engine.unwrap_with(text, line_ending)
    })
}
