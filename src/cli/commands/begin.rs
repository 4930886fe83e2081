use crate::cli::context::Context;
use crate::core::interval::begin_interval;
use crate::core::store::open_for_update;
use crate::errors::AppResult;

/// Handle the `begin` command
pub fn handle(ctx: &Context) -> AppResult<()> {
    let mut file = open_for_update(&ctx.path)?;
    let mutation = begin_interval(&mut file, ctx.strict)?;

    ctx.warn_tolerated(mutation.tolerated.as_ref());
    ctx.out.inform("BEGIN");
    Ok(())
}
