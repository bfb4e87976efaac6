use log::debug;
use serde_json::Value;

use crate::client::{unwrap_list, unwrap_one, AdeskClient};
use crate::errors::AdeskError;
use crate::models::Tag;
use crate::params::{require_id, require_text, Params};

/// Operation tags.
#[derive(Debug, Clone, Copy)]
pub struct Tags<'a> {
    client: &'a AdeskClient,
}

impl<'a> Tags<'a> {
    pub(crate) fn new(client: &'a AdeskClient) -> Self {
        Self { client }
    }

    pub fn list(&self, search: Option<&str>) -> Result<Vec<Tag>, AdeskError> {
        debug!("tags.list");
        let mut params = Params::new();
        params.push_opt("search", search);
        let response = self.client.get("tags", params)?;
        Ok(unwrap_list(response, "tags"))
    }

    pub fn get(&self, tag_id: i64) -> Result<Option<Tag>, AdeskError> {
        require_id("tag_id", tag_id)?;
        debug!("tags.get tag_id={}", tag_id);
        let response = self.client.get(&format!("tag/{tag_id}"), Params::new())?;
        Ok(unwrap_one(response, "tag"))
    }

    /// The API answers with a status payload, returned as is.
    pub fn create(&self, name: &str, color: &str) -> Result<Option<Value>, AdeskError> {
        require_text("name", name)?;
        require_text("color", color)?;
        debug!("tags.create");
        let mut data = Params::new();
        data.push("name", name).push("color", color);
        self.client.post("tag", data, Params::new())
    }

    /// At least one of `name` and `color` must be given.
    pub fn update(
        &self,
        tag_id: i64,
        name: Option<&str>,
        color: Option<&str>,
    ) -> Result<Option<Value>, AdeskError> {
        require_id("tag_id", tag_id)?;
        if name.is_none() && color.is_none() {
            return Err(AdeskError::validation(
                "Required parameters missing for update: name or color.",
            ));
        }
        debug!("tags.update tag_id={}", tag_id);
        let mut data = Params::new();
        data.push_opt("name", name).push_opt("color", color);
        self.client
            .post(&format!("tag/{tag_id}"), data, Params::new())
    }

    pub fn delete(&self, tag_id: i64) -> Result<Option<Value>, AdeskError> {
        require_id("tag_id", tag_id)?;
        debug!("tags.delete tag_id={}", tag_id);
        self.client.post(
            &format!("tag/{tag_id}/remove"),
            Params::new(),
            Params::new(),
        )
    }
}
