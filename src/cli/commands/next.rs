use crate::cli::context::Context;
use crate::core::interval::{begin_interval, end_interval};
use crate::core::store::open_for_update;
use crate::core::validate::{Filter, read_entries};
use crate::errors::AppResult;

/// Handle the `next` command: end the running entry, or begin a new one.
///
/// A file whose last row is fine but which has bad rows further up is
/// neither begun nor ended.
pub fn handle(ctx: &Context) -> AppResult<()> {
    let mut file = open_for_update(&ctx.path)?;
    let scan = read_entries(&mut file, Filter::All)?;

    let (mutation, word) = match scan.report {
        Some(report) if report.last_is_bad => (end_interval(&mut file, ctx.strict)?, "END"),
        Some(report) => return Err(report.into()),
        None => (begin_interval(&mut file, ctx.strict)?, "BEGIN"),
    };

    ctx.warn_tolerated(mutation.tolerated.as_ref());
    ctx.out.inform(word);
    Ok(())
}
