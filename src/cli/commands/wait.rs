use crate::cli::commands::end;
use crate::cli::context::Context;
use crate::core::termination::Termination;
use crate::errors::AppResult;
use tracing::debug;

/// Handle the `wait` command: block until terminated, then end the entry.
///
/// The times file is only opened once the signal has arrived.
pub fn handle(ctx: &Context) -> AppResult<()> {
    let termination = Termination::listen()?;
    ctx.out.inform("WAIT");
    let signal = termination.wait()?;
    debug!(signal, path = %ctx.path.display(), "ending entry after signal");
    end::handle(ctx)
}
