use anyhow::Result;

use crate::cli::TransformArgs;
use crate::context::RuntimeContext;

pub fn run(ctx: &RuntimeContext, args: &TransformArgs) -> Result<()> {
    super::run_transform(ctx, args, "wrap", |engine, text, line_ending| {
        Ok(engine.wrap_with(text, line_ending))
    })
}
