//! School dashboard (school-open) API wrappers.

use bytes::Bytes;
use http::Response;
use seewo_core::Result;

use crate::Client;

/// Client for the school dashboard API.
///
/// Calls on this API carry a ticket id alongside the signed credential.
#[derive(Clone, Debug)]
pub struct SchoolOpen {
    client: Client,
    ticket_id: String,
}

impl SchoolOpen {
    /// Wrap a configured client with the ticket for this API.
    pub fn new(client: Client, ticket_id: impl Into<String>) -> Self {
        Self {
            client,
            ticket_id: ticket_id.into(),
        }
    }

    /// The underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Area dashboard ranking statistics.
    ///
    /// See <https://open.seewo.com/#/service/1423/doc/1795>.
    pub async fn area_ranking_statistics(&self, area_id: i64) -> Result<Response<Bytes>> {
        let area_id = area_id.to_string();

        self.client
            .get(
                "/school-open/area-ranking/statistics",
                &[("areaId", area_id.as_str()), ("ticketId", &self.ticket_id)],
            )
            .await
    }
}
