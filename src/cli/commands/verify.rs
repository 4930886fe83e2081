use crate::cli::context::Context;
use crate::core::store::open_for_read;
use crate::core::validate::{Filter, read_entries};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `verify` command
///
/// An open last entry is accepted unless `--fail` is given; every other
/// anomaly is an error.
pub fn handle(ctx: &Context) -> AppResult<()> {
    let Some(file) = open_for_read(&ctx.path)? else {
        info(format!("No times file at {}", ctx.path.display()));
        return Ok(());
    };

    let scan = read_entries(file, Filter::All)?;
    let n = scan.entries.len();

    match scan.report {
        None => success(format!("{}: {} entries, all complete", ctx.path.display(), n)),
        Some(report) if report.just_incomplete() && !ctx.strict => info(format!(
            "{}: {} entries, {}",
            ctx.path.display(),
            n,
            report
        )),
        Some(report) => return Err(report.into()),
    }

    Ok(())
}
