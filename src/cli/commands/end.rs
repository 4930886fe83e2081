use crate::cli::context::Context;
use crate::core::interval::end_interval;
use crate::core::store::open_for_update;
use crate::errors::AppResult;

/// Handle the `end` command
///
/// Invalid rows before the open entry only produce a warning; the entry is
/// still closed. With `--fail` (or `strict: true`) they make `end` refuse,
/// which is how earlier versions of track behaved by default.
pub fn handle(ctx: &Context) -> AppResult<()> {
    let mut file = open_for_update(&ctx.path)?;
    let mutation = end_interval(&mut file, ctx.strict)?;

    ctx.warn_tolerated(mutation.tolerated.as_ref());
    ctx.out.inform("END");
    Ok(())
}
