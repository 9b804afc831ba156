use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use crate::api::BasketApiClient;
use crate::basket::SearchTab;
use crate::event::ApiUpdateEvent;

/// Spawns API work onto the tokio runtime and sends results back into
/// the UI loop over an mpsc channel.
pub struct ApiManager {
    client: Arc<BasketApiClient>,
    runtime: tokio::runtime::Handle,
    sender: mpsc::Sender<ApiUpdateEvent>,
}

impl ApiManager {
    pub fn new(
        client: Arc<BasketApiClient>,
        runtime: tokio::runtime::Handle,
        sender: mpsc::Sender<ApiUpdateEvent>,
    ) -> Self {
        Self {
            client,
            runtime,
            sender,
        }
    }

    /// Runs a basket search and reports the result as a `SearchCompleted`
    /// event.
    pub fn search(&self, query: String, tab: SearchTab) {
        let client = Arc::clone(&self.client);
        let sender = self.sender.clone();

        self.runtime.spawn(async move {
            let result = client.search_baskets(&query, tab).await;
            let payload = result.map_err(|e| e.to_string());
            let _ = sender.send(ApiUpdateEvent::SearchCompleted(payload)).await;
        });
    }

    /// Fetches ticket details. The generation stamp lets the app discard
    /// responses that a newer fetch has superseded.
    pub fn fetch_ticket(&self, ticket_id: String, generation: u64) {
        let client = Arc::clone(&self.client);
        let sender = self.sender.clone();

        self.runtime.spawn(async move {
            let result = client.fetch_ticket_details(&ticket_id).await;
            if let Err(e) = &result {
                warn!(ticket_id, %e, "ticket detail fetch failed");
            }
            let payload = result.map_err(|e| e.to_string());
            let _ = sender
                .send(ApiUpdateEvent::TicketFetched {
                    generation,
                    result: payload,
                })
                .await;
        });
    }

    /// Fires the per-ticket refund. No result is fed back to the UI;
    /// failures are logged only.
    pub fn refund_ticket(&self, ticket_id: String) {
        let client = Arc::clone(&self.client);

        self.runtime.spawn(async move {
            if let Err(e) = client.refund_ticket(&ticket_id).await {
                warn!(ticket_id, %e, "refund request failed");
            }
        });
    }

    /// Fires the bulk refund authorization. Failures are logged only.
    pub fn authorize_all_refunds(&self) {
        let client = Arc::clone(&self.client);

        self.runtime.spawn(async move {
            if let Err(e) = client.authorize_all_refunds().await {
                warn!(%e, "bulk refund authorization failed");
            }
        });
    }
}
