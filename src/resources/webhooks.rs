use log::debug;
use serde_json::Value;

use crate::client::{unwrap_list, unwrap_one, AdeskClient};
use crate::errors::AdeskError;
use crate::models::Webhook;
use crate::params::{require_id, require_items, require_text, Params};

/// Subscription definition used for both create and update.
#[derive(Debug, Clone, Default)]
pub struct WebhookInput {
    pub url: String,
    pub events: Vec<String>,
    pub description: Option<String>,
}

impl WebhookInput {
    pub fn new(url: impl Into<String>, events: Vec<String>) -> Self {
        Self {
            url: url.into(),
            events,
            description: None,
        }
    }

    fn to_params(&self) -> Result<Params, AdeskError> {
        require_text("url", &self.url)?;
        require_items("events", &self.events)?;
        let mut data = Params::new();
        data.push("url", self.url.as_str())
            .push_list("events", &self.events)
            .push_opt("description", self.description.as_deref());
        Ok(data)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    client: &'a AdeskClient,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(client: &'a AdeskClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<Webhook>, AdeskError> {
        debug!("webhooks.list");
        let response = self.client.get("webhooks", Params::new())?;
        Ok(unwrap_list(response, "webhooks"))
    }

    pub fn create(&self, webhook: &WebhookInput) -> Result<Option<Webhook>, AdeskError> {
        let data = webhook.to_params()?;
        debug!("webhooks.create events={}", webhook.events.len());
        let response = self.client.post("webhook", data, Params::new())?;
        Ok(unwrap_one(response, "webhook"))
    }

    pub fn update(
        &self,
        webhook_id: i64,
        webhook: &WebhookInput,
    ) -> Result<Option<Webhook>, AdeskError> {
        require_id("webhook_id", webhook_id)?;
        let data = webhook.to_params()?;
        debug!("webhooks.update webhook_id={}", webhook_id);
        let response = self
            .client
            .post(&format!("webhook/{webhook_id}"), data, Params::new())?;
        Ok(unwrap_one(response, "webhook"))
    }

    pub fn delete(&self, webhook_id: i64) -> Result<Option<Value>, AdeskError> {
        require_id("webhook_id", webhook_id)?;
        debug!("webhooks.delete webhook_id={}", webhook_id);
        self.client.post(
            &format!("webhook/{webhook_id}/remove"),
            Params::new(),
            Params::new(),
        )
    }
}
