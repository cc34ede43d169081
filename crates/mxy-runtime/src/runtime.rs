//! Server runtime: the composition root shared by all service binaries

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::application::{ApplicationIdentity, ApplicationRuntime};
use crate::args::ApplicationArguments;
use crate::config::AppConfig;
use crate::context::ApplicationContext;
use crate::error::RuntimeResult;
use crate::server::ApplicationServer;
use crate::{logging, shutdown};

/// Production runtime: configuration, logging, HTTP listener, signals
#[derive(Debug, Clone, Default)]
pub struct ServerRuntime {
    /// Directory searched for config files; current directory when unset
    config_dir: Option<PathBuf>,
}

impl ServerRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for config files under `dir` instead of the current directory
    pub fn with_config_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: Some(dir.into()),
        }
    }

    fn load_config(
        &self,
        identity: &ApplicationIdentity,
        arguments: &ApplicationArguments,
    ) -> RuntimeResult<AppConfig> {
        match &self.config_dir {
            Some(dir) => AppConfig::load_from(dir, identity, arguments),
            None => AppConfig::load(identity, arguments),
        }
    }
}

#[async_trait]
impl ApplicationRuntime for ServerRuntime {
    async fn start(&self, identity: &ApplicationIdentity, args: Vec<String>) -> RuntimeResult<()> {
        let started = Instant::now();

        let arguments = ApplicationArguments::parse(args)?;
        let config = self.load_config(identity, &arguments)?;
        logging::init(&config)?;
        info!(
            profiles = ?config.active_profiles(),
            log_filter = config.log_filter(),
            "Loaded application configuration"
        );

        let context = Arc::new(ApplicationContext::new(*identity, arguments, config));
        info!(
            application = context.name(),
            version = identity.version,
            profiles = ?context.config().active_profiles(),
            "Starting {}",
            identity.description
        );
        debug!(
            options = ?context.arguments().option_names().collect::<Vec<_>>(),
            non_option_args = context.arguments().non_option_args().len(),
            "Parsed command line"
        );

        if !context.config().server.enabled {
            info!(
                "Started {} in {:.3} seconds (no web server)",
                context.name(),
                started.elapsed().as_secs_f64()
            );
            return Ok(());
        }

        let server = ApplicationServer::new(context.clone()).bind().await?;
        info!(
            "Started {} in {:.3} seconds on {}",
            context.name(),
            started.elapsed().as_secs_f64(),
            server.address()
        );

        let signals = shutdown::listen_for_signals(context.shutdown());
        let result = server.serve().await;
        signals.abort();

        info!("{} stopped", context.name());
        result
    }
}
