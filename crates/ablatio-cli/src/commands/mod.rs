//! Subcommand handlers.

pub mod analyze;
pub mod bench;
pub mod layout;
pub mod metrics;

use ablatio_core::CancellationFlag;
use tokio::task::JoinHandle;

/// Sets `flag` when the process receives Ctrl-C.
///
/// The engine checks the flag between metrics, so an interrupted run stops
/// at the next metric boundary with `Error::Cancelled`.
pub(crate) fn cancel_on_ctrl_c(flag: CancellationFlag) -> JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupt received; stopping after the current metric");
            flag.cancel();
        }
    })
}
