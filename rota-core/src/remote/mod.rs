//! Remote schedule operations against the school backend.

pub mod protocol;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{RotaError, RotaResult};
use crate::remote::protocol::{SlotPayload, SlotRecord};
use crate::slot::{PersistedSlot, WeeklySlot};

/// Backend binding stored in each classroom's .rota/config.toml.
///
/// The backend is the system of record for schedules; this client only
/// reads the stored slots and issues the create/update/delete calls a
/// reconciliation produced. No call is retried.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Remote {
    pub base_url: Url,
    pub classroom_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip)]
    http: reqwest::Client,
}

impl Remote {
    pub fn new(base_url: Url, classroom_id: String, token: Option<String>) -> Self {
        Remote {
            base_url,
            classroom_id,
            token,
            http: reqwest::Client::new(),
        }
    }

    fn schedules_url(&self) -> String {
        format!(
            "{}/classrooms/{}/schedules",
            self.base_url.as_str().trim_end_matches('/'),
            self.classroom_id
        )
    }

    fn slot_url(&self, id: &str) -> String {
        format!("{}/{}", self.schedules_url(), id)
    }

    /// Send a request, attaching the token if configured, and turn non-2xx
    /// responses into a Backend error carrying the body verbatim.
    async fn send(&self, request: reqwest::RequestBuilder) -> RotaResult<reqwest::Response> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RotaError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Fetch the classroom's stored slots.
    pub async fn schedules(&self) -> RotaResult<Vec<PersistedSlot>> {
        let records: Vec<SlotRecord> = self
            .send(self.http.get(self.schedules_url()))
            .await?
            .json()
            .await?;

        records.into_iter().map(PersistedSlot::try_from).collect()
    }

    pub async fn create_slot(&self, slot: &WeeklySlot) -> RotaResult<PersistedSlot> {
        let record: SlotRecord = self
            .send(self.http.post(self.schedules_url()).json(&SlotPayload::from(slot)))
            .await?
            .json()
            .await?;

        PersistedSlot::try_from(record)
    }

    pub async fn update_slot(&self, id: &str, slot: &WeeklySlot) -> RotaResult<PersistedSlot> {
        let record: SlotRecord = self
            .send(self.http.put(self.slot_url(id)).json(&SlotPayload::from(slot)))
            .await?
            .json()
            .await?;

        PersistedSlot::try_from(record)
    }

    pub async fn delete_slot(&self, id: &str) -> RotaResult<()> {
        self.send(self.http.delete(self.slot_url(id))).await?;
        Ok(())
    }
}
