use crate::cli::commands::begin;
use crate::cli::context::Context;
use crate::errors::AppResult;
use std::env;
use std::process::{Command, Stdio};
use tracing::debug;

/// Handle the `fork` command: begin now and leave a detached `wait` behind
/// to end the entry when it is terminated.
pub fn handle(ctx: &Context) -> AppResult<()> {
    begin::handle(ctx)?;
    ctx.out.inform("FORK");

    let exe = env::current_exe()?;
    let mut cmd = Command::new(exe);
    cmd.arg("--quiet");
    if ctx.strict {
        cmd.arg("--fail");
    }
    cmd.arg("wait")
        .arg(&ctx.path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let child = cmd.spawn()?;
    debug!(pid = child.id(), "spawned waiter");
    Ok(())
}
