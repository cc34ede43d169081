//! Graph examples service.
//!
//! The launcher only declares the service identity; configuration, logging
//! and the HTTP listener come from the runtime it is handed to.

use mxy_runtime::{ApplicationIdentity, ApplicationRuntime, RuntimeResult};

pub const APPLICATION: ApplicationIdentity = ApplicationIdentity::new(
    "graph-examples",
    "Graph examples service",
    env!("CARGO_PKG_VERSION"),
);

/// Hand the process arguments to `runtime`, unmodified.
pub async fn launch<R>(runtime: &R, args: Vec<String>) -> RuntimeResult<()>
where
    R: ApplicationRuntime + ?Sized,
{
    runtime.start(&APPLICATION, args).await
}
