//! Waiting for the operating system to ask us to stop.
//!
//! On Unix the listener reacts to SIGINT, SIGTERM, SIGHUP and SIGQUIT;
//! elsewhere to Ctrl-C. SIGKILL cannot be caught: a waiter killed that way
//! never returns and the running entry stays open in the times file.

use crate::errors::AppResult;
use std::io;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// Signal handlers installed on a single-threaded runtime.
///
/// Handlers are in place as soon as `listen` returns, so callers can announce
/// that they are waiting without racing the first signal.
pub struct Termination {
    runtime: Runtime,
    #[cfg(unix)]
    signals: unix::Signals,
}

impl Termination {
    pub fn listen() -> AppResult<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;

        #[cfg(unix)]
        let signals = {
            let _guard = runtime.enter();
            unix::Signals::install()?
        };

        Ok(Self {
            runtime,
            #[cfg(unix)]
            signals,
        })
    }

    /// Block until a termination signal arrives and return its name.
    pub fn wait(self) -> AppResult<&'static str> {
        #[cfg(unix)]
        let name = {
            let mut signals = self.signals;
            self.runtime.block_on(signals.recv())
        };

        #[cfg(not(unix))]
        let name = self.runtime.block_on(ctrl_c())?;

        debug!(signal = name, "termination signal received");
        Ok(name)
    }
}

#[cfg(not(unix))]
async fn ctrl_c() -> io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl-C")
}

#[cfg(unix)]
mod unix {
    use super::io;
    use tokio::signal::unix::{Signal, SignalKind, signal};

    pub(super) struct Signals {
        interrupt: Signal,
        terminate: Signal,
        hangup: Signal,
        quit: Signal,
    }

    impl Signals {
        /// Must run inside the runtime context.
        pub(super) fn install() -> io::Result<Self> {
            Ok(Self {
                interrupt: signal(SignalKind::interrupt())?,
                terminate: signal(SignalKind::terminate())?,
                hangup: signal(SignalKind::hangup())?,
                quit: signal(SignalKind::quit())?,
            })
        }

        pub(super) async fn recv(&mut self) -> &'static str {
            tokio::select! {
                _ = self.interrupt.recv() => "SIGINT",
                _ = self.terminate.recv() => "SIGTERM",
                _ = self.hangup.recv() => "SIGHUP",
                _ = self.quit.recv() => "SIGQUIT",
            }
        }
    }
}
