use std::{
    path::Path,
    sync::mpsc::{self, Receiver},
};

use crate::{
    backend::{client::HelpdeskClient, dispatcher::HttpExchangeDispatcher},
    domain::exchange::ExchangeCompletion,
    infra::{self, error::AppError, opener::SystemOpener, storage_layout::StorageLayout},
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        exchange::{ExchangeController, ExchangeSettings},
        shell::HelpdeskOrchestrator,
    },
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let mut context = build_context(config_path)?;
    let layout = StorageLayout::resolve()?;
    context.log_guard = Some(infra::logging::init(&context.config.logging, &layout)?);

    tracing::info!(
        endpoint = %context.client.endpoint(),
        request_timeout_ms = ?context.config.backend.request_timeout_ms,
        assistant_role_label = %context.config.backend.assistant_role_label,
        log_dir = %layout.log_dir.display(),
        "helpdesk context ready"
    );

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_path)?;
    let client = HelpdeskClient::new(&config.backend)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("helpdesk-io")
        .enable_all()
        .build()
        .map_err(AppError::RuntimeBuild)?;

    Ok(AppContext::new(config, client, runtime))
}

/// Exchange controller wired to the HTTP backend plus the receiving end of
/// its completion channel.
pub fn compose_exchanges(
    context: &AppContext,
) -> (
    ExchangeController<HttpExchangeDispatcher>,
    Receiver<ExchangeCompletion>,
) {
    let (completion_tx, completion_rx) = mpsc::channel();
    let dispatcher = HttpExchangeDispatcher::new(
        context.runtime.handle().clone(),
        context.client.clone(),
        completion_tx,
    );
    let controller = ExchangeController::new(
        dispatcher,
        ExchangeSettings::from_config(&context.config.backend),
    );

    (controller, completion_rx)
}

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn compose_shell(context: &AppContext) -> ShellComposition {
    let (controller, completion_rx) = compose_exchanges(context);
    let orchestrator =
        HelpdeskOrchestrator::new(controller, SystemOpener, context.config.contact.clone());

    ShellComposition {
        event_source: Box::new(CrosstermEventSource::new(completion_rx)),
        orchestrator: Box::new(orchestrator),
    }
}
