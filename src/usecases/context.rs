use tokio::runtime::Runtime;
use tracing_appender::non_blocking::WorkerGuard;

use crate::{backend::client::HelpdeskClient, infra::config::AppConfig};

/// Long-lived resources shared by every command.
#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub client: HelpdeskClient,
    pub runtime: Runtime,
    /// Flushes the log file when the context is dropped.
    pub log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig, client: HelpdeskClient, runtime: Runtime) -> Self {
        Self {
            config,
            client,
            runtime,
            log_guard: None,
        }
    }
}
