//! Application context
//!
//! The object graph assembled at startup and shared with request handlers.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::ApplicationIdentity;
use crate::args::ApplicationArguments;
use crate::config::AppConfig;
use crate::shutdown::ShutdownState;

#[derive(Debug)]
pub struct ApplicationContext {
    identity: ApplicationIdentity,
    arguments: ApplicationArguments,
    config: AppConfig,
    started_at: DateTime<Utc>,
    shutdown: Arc<ShutdownState>,
}

impl ApplicationContext {
    pub fn new(identity: ApplicationIdentity, arguments: ApplicationArguments, config: AppConfig) -> Self {
        Self {
            identity,
            arguments,
            config,
            started_at: Utc::now(),
            shutdown: ShutdownState::new(),
        }
    }

    pub fn identity(&self) -> &ApplicationIdentity {
        &self.identity
    }

    pub fn arguments(&self) -> &ApplicationArguments {
        &self.arguments
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Configured name, falling back to the identity
    pub fn name(&self) -> &str {
        self.config.application_name(&self.identity)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whole seconds since the context was created
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds().max(0)
    }

    pub fn shutdown(&self) -> Arc<ShutdownState> {
        self.shutdown.clone()
    }
}
