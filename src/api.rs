use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::basket::{BasketSummary, SearchTab, TicketData};

/// Errors from the ticket endpoints. The UI collapses all of these into
/// one fixed message; the variants exist for logging.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

/// HTTP client for the customer-service ticket endpoints.
#[derive(Debug, Clone)]
pub struct BasketApiClient {
    base_url: String,
    client: Client,
}

impl BasketApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the detail record for one ticket. Any non-success status
    /// is a failure.
    pub async fn fetch_ticket_details(&self, ticket_id: &str) -> Result<TicketData, ApiError> {
        let url = format!("{}/resource/tickets/{}", self.base_url, ticket_id);
        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Triggers a refund for one ticket. No response body is consumed.
    pub async fn refund_ticket(&self, ticket_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/resource/tickets/{}/refund", self.base_url, ticket_id);
        let response = self.client.post(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    /// Triggers bulk refund authorization across the basket.
    pub async fn authorize_all_refunds(&self) -> Result<(), ApiError> {
        let url = format!("{}/resource/tickets/refund-all", self.base_url);
        let response = self.client.post(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    /// Basket search. There is no lookup endpoint behind this screen, so
    /// every query resolves to the canned record after a yield point.
    pub async fn search_baskets(
        &self,
        query: &str,
        tab: SearchTab,
    ) -> Result<BasketSummary, ApiError> {
        debug!(query, tab = tab.key(), "simulated basket search");
        tokio::task::yield_now().await;
        Ok(mock_basket_summary())
    }
}

/// The record every basket search resolves to.
pub fn mock_basket_summary() -> BasketSummary {
    BasketSummary {
        reference: "B00N2WEJ".to_string(),
        created: "Tue, 23 Jul 2024, 16:09".to_string(),
        status: "Completed - Refunded".to_string(),
        channel: "WEB".to_string(),
        items: 1,
        value: "R 100.00".to_string(),
        user: "qa-travel-nextjs-app.computicket.com".to_string(),
        current_balance: "R 20.00".to_string(),
        remote_status: "Not Cancelled".to_string(),
        remote_payment_status: "Payment Not Found".to_string(),
        tickets_not_delivered: "Warning".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("B00N2WEJ", SearchTab::BtlRef)]
    #[case("", SearchTab::BtlRef)]
    #[case("0821234567", SearchTab::Mobile)]
    #[case("someone@example.com", SearchTab::Email)]
    #[tokio::test]
    async fn search_resolves_to_canned_record_for_any_input(
        #[case] query: &str,
        #[case] tab: SearchTab,
    ) {
        let client = BasketApiClient::new("http://localhost:9");
        let summary = client.search_baskets(query, tab).await.expect("simulated");
        assert_eq!(summary.reference, "B00N2WEJ");
        assert_eq!(summary.items, 1);
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = BasketApiClient::new("http://api.example.com/");
        assert_eq!(client.base_url(), "http://api.example.com");
    }

    #[test]
    fn ticket_data_deserializes_from_camel_case() {
        let json = serde_json::json!({
            "event": "Concert XYZ",
            "venue": "Madison Square Garden",
            "date": "Fri, 22 Dec 2024, 19:00",
            "seats": "Section A, Row 5, Seat 12",
            "value": "$150",
            "status": "Confirmed",
            "eventType": "Music Concert",
            "lineRef": "LREF123456",
            "ticketRef": "TREF123456",
            "barcode": "BARCODE123456",
            "remoteRef": "REMOTE123456",
            "accessControlStatus": "Granted",
            "refundAmount": "$50",
            "refundDate": "Wed, 20 Dec 2024",
            "refundChannel": "Credit Card"
        });
        let data: TicketData = serde_json::from_value(json).expect("valid record");
        assert_eq!(data, TicketData::demo());
    }
}
