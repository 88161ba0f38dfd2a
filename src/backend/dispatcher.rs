use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::{
    backend::client::HelpdeskClient,
    domain::exchange::{ExchangeCompletion, ExchangeRequest},
    usecases::contracts::ExchangeDispatcher,
};

const COMPLETION_SEND_FAILED: &str = "HELPDESK_COMPLETION_SEND_FAILED";

/// Runs each exchange on the tokio runtime and reports back over a channel.
///
/// The spawned task never touches screen state: its only effect is a single
/// `ExchangeCompletion` sent to the thread that owns the receiver.
#[derive(Debug, Clone)]
pub struct HttpExchangeDispatcher {
    runtime: Handle,
    client: HelpdeskClient,
    completion_tx: Sender<ExchangeCompletion>,
}

impl HttpExchangeDispatcher {
    pub fn new(
        runtime: Handle,
        client: HelpdeskClient,
        completion_tx: Sender<ExchangeCompletion>,
    ) -> Self {
        Self {
            runtime,
            client,
            completion_tx,
        }
    }
}

impl ExchangeDispatcher for HttpExchangeDispatcher {
    fn dispatch(&self, request: ExchangeRequest) {
        let client = self.client.clone();
        let completion_tx = self.completion_tx.clone();

        tracing::debug!(
            exchange = %request.id,
            endpoint = %client.endpoint(),
            bytes = request.body.len(),
            "dispatching helpdesk request"
        );

        self.runtime.spawn(async move {
            let id = request.id;
            let completion = match client.post_transcript(request.body).await {
                Ok(body) => ExchangeCompletion::body(id, body),
                Err(error) => ExchangeCompletion::failed(id, error),
            };

            if let Err(error) = completion_tx.send(completion) {
                tracing::warn!(
                    code = COMPLETION_SEND_FAILED,
                    exchange = %id,
                    error = %error,
                    "helpdesk completion dropped, receiver is gone"
                );
            }
        });
    }
}
