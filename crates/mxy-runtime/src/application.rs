//! Application identity and the runtime seam used by entry points

use async_trait::async_trait;

use crate::error::RuntimeResult;

/// Static identity declared by each service binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationIdentity {
    /// Service name, used in logs and the info endpoint
    pub name: &'static str,
    /// Human readable description
    pub description: &'static str,
    /// Version of the service crate
    pub version: &'static str,
}

impl ApplicationIdentity {
    pub const fn new(name: &'static str, description: &'static str, version: &'static str) -> Self {
        Self {
            name,
            description,
            version,
        }
    }
}

/// Something that can run an application to completion.
///
/// Entry points call [`ApplicationRuntime::start`] exactly once with their
/// identity and the process arguments.
#[async_trait]
pub trait ApplicationRuntime: Send + Sync {
    /// Start the application and run until it shuts down
    async fn start(&self, identity: &ApplicationIdentity, args: Vec<String>) -> RuntimeResult<()>;
}
