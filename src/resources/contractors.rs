use log::debug;
use serde_json::Value;

use crate::client::{unwrap_list, unwrap_one, AdeskClient};
use crate::errors::AdeskError;
use crate::models::{Commitment, Contractor};
use crate::params::{require_id, require_items, require_text, Params};

#[derive(Debug, Clone, Default)]
pub struct ContractorFilter {
    pub range_str: Option<String>,
    pub range_start: Option<String>,
    pub range_end: Option<String>,
    pub reduced: Option<bool>,
    pub q: Option<String>,
    pub inn: Option<String>,
    pub checking_bank_account: Option<String>,
    pub with_balance: Option<bool>,
}

impl ContractorFilter {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push_opt("range_str", self.range_str.as_deref())
            .push_opt("range_start", self.range_start.as_deref())
            .push_opt("range_end", self.range_end.as_deref())
            .push_opt("reduced", self.reduced)
            .push_opt("q", self.q.as_deref())
            .push_opt("inn", self.inn.as_deref())
            .push_opt("checking_bank_account", self.checking_bank_account.as_deref())
            .push_opt("with_balance", self.with_balance);
        params
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewContractor {
    pub name: String,
    pub contact_person: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}

impl NewContractor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    fn to_params(&self) -> Result<Params, AdeskError> {
        require_text("name", &self.name)?;
        let mut data = Params::new();
        data.push("name", self.name.as_str())
            .push_opt("contact_person", self.contact_person.as_deref())
            .push_opt("phone_number", self.phone_number.as_deref())
            .push_opt("email", self.email.as_deref())
            .push_opt("description", self.description.as_deref());
        Ok(data)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContractorUpdate {
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}

impl ContractorUpdate {
    fn to_params(&self) -> Params {
        let mut data = Params::new();
        data.push_opt("name", self.name.as_deref())
            .push_opt("contact_person", self.contact_person.as_deref())
            .push_opt("phone_number", self.phone_number.as_deref())
            .push_opt("email", self.email.as_deref())
            .push_opt("description", self.description.as_deref());
        data
    }
}

/// Counterparties.
#[derive(Debug, Clone, Copy)]
pub struct Contractors<'a> {
    client: &'a AdeskClient,
}

impl<'a> Contractors<'a> {
    pub(crate) fn new(client: &'a AdeskClient) -> Self {
        Self { client }
    }

    pub fn list(&self, filter: &ContractorFilter) -> Result<Vec<Contractor>, AdeskError> {
        debug!("contractors.list");
        let response = self.client.get("contractors", filter.to_params())?;
        Ok(unwrap_list(response, "contractors"))
    }

    pub fn get(&self, contractor_id: i64) -> Result<Option<Contractor>, AdeskError> {
        require_id("contractor_id", contractor_id)?;
        debug!("contractors.get contractor_id={}", contractor_id);
        let response = self
            .client
            .get(&format!("contractor/{contractor_id}"), Params::new())?;
        Ok(unwrap_one(response, "contractor"))
    }

    /// Commitments open with one contractor.
    pub fn commitments(&self, contractor_id: i64) -> Result<Vec<Commitment>, AdeskError> {
        require_id("contractor_id", contractor_id)?;
        debug!("contractors.commitments contractor_id={}", contractor_id);
        let response = self.client.get(
            &format!("contractor/{contractor_id}/commitments"),
            Params::new(),
        )?;
        Ok(unwrap_list(response, "commitments"))
    }

    pub fn create(&self, contractor: &NewContractor) -> Result<Option<Contractor>, AdeskError> {
        let data = contractor.to_params()?;
        debug!("contractors.create fields={}", data.len());
        let response = self.client.post("contractor", data, Params::new())?;
        Ok(unwrap_one(response, "contractor"))
    }

    /// Returns the raw response; the API does not echo the contractor back.
    pub fn update(
        &self,
        contractor_id: i64,
        update: &ContractorUpdate,
    ) -> Result<Option<Value>, AdeskError> {
        require_id("contractor_id", contractor_id)?;
        debug!("contractors.update contractor_id={}", contractor_id);
        self.client.post(
            &format!("contractor/{contractor_id}"),
            update.to_params(),
            Params::new(),
        )
    }

    pub fn delete(&self, contractor_id: i64) -> Result<Option<Value>, AdeskError> {
        require_id("contractor_id", contractor_id)?;
        debug!("contractors.delete contractor_id={}", contractor_id);
        self.client.post(
            &format!("contractor/{contractor_id}/remove"),
            Params::new(),
            Params::new(),
        )
    }

    /// Remove several contractors at once. Ids are sent comma-separated.
    pub fn mass_delete(&self, contractor_ids: &[i64]) -> Result<Option<Value>, AdeskError> {
        require_items("contractor_ids", contractor_ids)?;
        debug!("contractors.mass_delete count={}", contractor_ids.len());
        let joined = contractor_ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let mut data = Params::new();
        data.push("contractor_ids", joined);
        self.client.post("contractors/remove", data, Params::new())
    }
}
