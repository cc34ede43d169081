//!
//! MXY Runtime - Application runtime for the MXY AI services
//!
//! Each service binary declares an [`ApplicationIdentity`] and hands its
//! process arguments to an [`ApplicationRuntime`]. [`ServerRuntime`] is the
//! explicit composition root: it parses arguments, loads layered
//! configuration, installs logging and serves the operational HTTP endpoints
//! until the process is signalled.

/// Application identity and runtime seam
pub mod application;

/// Command-line arguments
pub mod args;

/// Configuration module
pub mod config;

/// Application context module
pub mod context;

/// Error module
pub mod error;

/// Logging module
pub mod logging;

/// API module
pub mod api;

/// Server module
pub mod server;

/// Shutdown module
pub mod shutdown;

/// Runtime module
pub mod runtime;

// Re-export key types
pub use application::{ApplicationIdentity, ApplicationRuntime};
pub use args::ApplicationArguments;
pub use config::AppConfig;
pub use context::ApplicationContext;
pub use error::{RuntimeError, RuntimeResult};
pub use runtime::ServerRuntime;
pub use server::{ApplicationServer, BoundServer};
pub use shutdown::ShutdownState;
