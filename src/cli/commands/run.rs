use crate::cli::commands::{begin, wait};
use crate::cli::context::Context;
use crate::errors::AppResult;

/// Handle the `run` command: begin now, end when terminated.
pub fn handle(ctx: &Context) -> AppResult<()> {
    begin::handle(ctx)?;
    wait::handle(ctx)
}
