//! Progressive learning assistant service.

use mxy_runtime::{ApplicationIdentity, ApplicationRuntime, RuntimeResult};

pub const APPLICATION: ApplicationIdentity = ApplicationIdentity::new(
    "learning-agent",
    "Progressive learning assistant",
    env!("CARGO_PKG_VERSION"),
);

/// Application entry point: forwards the command-line arguments to `runtime`.
pub async fn launch<R>(runtime: &R, args: Vec<String>) -> RuntimeResult<()>
where
    R: ApplicationRuntime + ?Sized,
{
    runtime.start(&APPLICATION, args).await
}
