use crate::cli::context::Context;
use crate::core::total::total_duration;
use crate::errors::AppResult;
use crate::utils::formatting::readable_duration;
use std::fs::File;

/// Handle the `total` command
pub fn handle(ctx: &Context) -> AppResult<()> {
    let file = File::open(&ctx.path)?;
    let tally = total_duration(file, ctx.strict)?;

    ctx.warn_tolerated(tally.tolerated.as_ref());

    println!(
        "{} ({} entries)",
        readable_duration(tally.elapsed),
        tally.intervals
    );
    Ok(())
}
