use log::debug;
use serde_json::Value;

use crate::client::{unwrap_list, unwrap_one, AdeskClient};
use crate::errors::AdeskError;
use crate::models::Operation;
use crate::params::{require_id, require_text, ParamValue, Params};

/// Direction of money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    Income,
    Outcome,
}

impl ParamValue for OperationType {
    fn to_param(&self) -> String {
        match self {
            OperationType::Income => "income",
            OperationType::Outcome => "outcome",
        }
        .to_string()
    }
}

/// Which occurrences of a periodic operation an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodicEditType {
    This,
    ThisAndFollowing,
}

impl ParamValue for PeriodicEditType {
    fn to_param(&self) -> String {
        match self {
            PeriodicEditType::This => "this",
            PeriodicEditType::ThisAndFollowing => "this-and-following",
        }
        .to_string()
    }
}

/// Filters for [`Operations::list`].
#[derive(Debug, Clone, Default)]
pub struct OperationFilter {
    pub range_str: Option<String>,
    /// `YYYY-MM-DD`.
    pub range_start: Option<String>,
    pub range_end: Option<String>,
    /// Raw API filter (`income`, `outcome`, `transfer`, ...).
    pub r#type: Option<String>,
    pub category: Option<i64>,
    pub bank_account: Option<i64>,
    pub legal_entity: Option<i64>,
    pub contractor: Option<i64>,
    pub contractor_inn: Option<String>,
    pub project: Option<i64>,
    pub business_unit: Option<i64>,
    pub status: Option<String>,
    pub owner_transfer: Option<bool>,
    pub taxes: Option<bool>,
    pub date_type: Option<String>,
    pub start: Option<i64>,
    pub length: Option<i64>,
}

impl OperationFilter {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push_opt("range_str", self.range_str.as_deref())
            .push_opt("range_start", self.range_start.as_deref())
            .push_opt("range_end", self.range_end.as_deref())
            .push_opt("type", self.r#type.as_deref())
            .push_opt("category", self.category)
            .push_opt("bank_account", self.bank_account)
            .push_opt("legal_entity", self.legal_entity)
            .push_opt("contractor", self.contractor)
            .push_opt("contractor_inn", self.contractor_inn.as_deref())
            .push_opt("project", self.project)
            .push_opt("business_unit", self.business_unit)
            .push_opt("status", self.status.as_deref())
            .push_opt("owner_transfer", self.owner_transfer)
            .push_opt("taxes", self.taxes)
            .push_opt("date_type", self.date_type.as_deref())
            .push_opt("start", self.start)
            .push_opt("length", self.length);
        params
    }
}

/// Arguments for [`Operations::create`]. An amount of `0` is valid.
#[derive(Debug, Clone)]
pub struct NewOperation {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub r#type: OperationType,
    pub amount: f64,
    pub bank_account: i64,
    pub apply_import_rules: Option<bool>,
    pub category: Option<i64>,
    pub project: Option<i64>,
    pub business_unit: Option<i64>,
    pub contractor: Option<i64>,
    pub description: Option<String>,
    pub related_date: Option<String>,
    pub is_periodic: Option<bool>,
    pub period: Option<String>,
    pub repetition_end_date: Option<String>,
    pub is_commitment: Option<bool>,
    pub is_planned: Option<bool>,
    pub is_splitted: Option<bool>,
    /// Split parts as a JSON document.
    pub parts: Option<String>,
    /// Comma-separated tag ids.
    pub tags: Option<String>,
}

impl NewOperation {
    pub fn new(
        date: impl Into<String>,
        r#type: OperationType,
        amount: f64,
        bank_account: i64,
    ) -> Self {
        Self {
            date: date.into(),
            r#type,
            amount,
            bank_account,
            apply_import_rules: None,
            category: None,
            project: None,
            business_unit: None,
            contractor: None,
            description: None,
            related_date: None,
            is_periodic: None,
            period: None,
            repetition_end_date: None,
            is_commitment: None,
            is_planned: None,
            is_splitted: None,
            parts: None,
            tags: None,
        }
    }

    fn to_params(&self) -> Result<Params, AdeskError> {
        require_text("date", &self.date)?;
        let mut data = Params::new();
        data.push("date", self.date.as_str())
            .push("type", self.r#type)
            .push("amount", self.amount)
            .push("bank_account", self.bank_account)
            .push_opt("apply_import_rules", self.apply_import_rules)
            .push_opt("category", self.category)
            .push_opt("project", self.project)
            .push_opt("business_unit", self.business_unit)
            .push_opt("contractor", self.contractor)
            .push_opt("description", self.description.as_deref())
            .push_opt("related_date", self.related_date.as_deref())
            .push_opt("is_periodic", self.is_periodic)
            .push_opt("period", self.period.as_deref())
            .push_opt("repetition_end_date", self.repetition_end_date.as_deref())
            .push_opt("is_commitment", self.is_commitment)
            .push_opt("is_planned", self.is_planned)
            .push_opt("is_splitted", self.is_splitted)
            .push_opt("parts", self.parts.as_deref())
            .push_opt("tags", self.tags.as_deref());
        Ok(data)
    }
}

/// Arguments for [`Operations::update`]. Date, account and amount are always sent.
#[derive(Debug, Clone)]
pub struct OperationUpdate {
    pub date: String,
    pub bank_account: i64,
    pub amount: f64,
    pub category: Option<i64>,
    pub project: Option<i64>,
    pub business_unit: Option<i64>,
    pub contractor: Option<i64>,
    pub description: Option<String>,
    pub related_date: Option<String>,
    pub is_periodic: Option<bool>,
    pub period: Option<String>,
    pub repetition_end_date: Option<String>,
    pub is_commitment: Option<bool>,
    pub is_planned: Option<bool>,
    pub is_splitted: Option<bool>,
    pub parts: Option<String>,
    pub periodic_edit_type: Option<PeriodicEditType>,
    pub tags: Option<String>,
}

impl OperationUpdate {
    pub fn new(date: impl Into<String>, bank_account: i64, amount: f64) -> Self {
        Self {
            date: date.into(),
            bank_account,
            amount,
            category: None,
            project: None,
            business_unit: None,
            contractor: None,
            description: None,
            related_date: None,
            is_periodic: None,
            period: None,
            repetition_end_date: None,
            is_commitment: None,
            is_planned: None,
            is_splitted: None,
            parts: None,
            periodic_edit_type: None,
            tags: None,
        }
    }

    fn to_params(&self) -> Result<Params, AdeskError> {
        require_text("date", &self.date)?;
        let mut data = Params::new();
        data.push("date", self.date.as_str())
            .push("bank_account", self.bank_account)
            .push("amount", self.amount)
            .push_opt("category", self.category)
            .push_opt("project", self.project)
            .push_opt("business_unit", self.business_unit)
            .push_opt("contractor", self.contractor)
            .push_opt("description", self.description.as_deref())
            .push_opt("related_date", self.related_date.as_deref())
            .push_opt("is_periodic", self.is_periodic)
            .push_opt("period", self.period.as_deref())
            .push_opt("repetition_end_date", self.repetition_end_date.as_deref())
            .push_opt("is_commitment", self.is_commitment)
            .push_opt("is_planned", self.is_planned)
            .push_opt("is_splitted", self.is_splitted)
            .push_opt("parts", self.parts.as_deref())
            .push_opt("periodic_edit_type", self.periodic_edit_type)
            .push_opt("tags", self.tags.as_deref());
        Ok(data)
    }
}

/// Money movements (the API calls them transactions).
#[derive(Debug, Clone, Copy)]
pub struct Operations<'a> {
    client: &'a AdeskClient,
}

impl<'a> Operations<'a> {
    pub(crate) fn new(client: &'a AdeskClient) -> Self {
        Self { client }
    }

    /// GET transactions
    pub fn list(&self, filter: &OperationFilter) -> Result<Vec<Operation>, AdeskError> {
        debug!("operations.list");
        let response = self.client.get("transactions", filter.to_params())?;
        Ok(unwrap_list(response, "transactions"))
    }

    /// GET transaction/{id}
    pub fn get(&self, transaction_id: i64) -> Result<Option<Operation>, AdeskError> {
        require_id("transaction_id", transaction_id)?;
        debug!("operations.get transaction_id={}", transaction_id);
        let response = self
            .client
            .get(&format!("transaction/{transaction_id}"), Params::new())?;
        Ok(unwrap_one(response, "transaction"))
    }

    /// POST transaction
    pub fn create(&self, operation: &NewOperation) -> Result<Option<Operation>, AdeskError> {
        let data = operation.to_params()?;
        debug!("operations.create fields={}", data.len());
        let response = self.client.post("transaction", data, Params::new())?;
        Ok(unwrap_one(response, "transaction"))
    }

    /// POST transaction/{id}
    pub fn update(
        &self,
        transaction_id: i64,
        update: &OperationUpdate,
    ) -> Result<Option<Operation>, AdeskError> {
        require_id("transaction_id", transaction_id)?;
        let data = update.to_params()?;
        debug!("operations.update transaction_id={}", transaction_id);
        let response =
            self.client
                .post(&format!("transaction/{transaction_id}"), data, Params::new())?;
        Ok(unwrap_one(response, "transaction"))
    }

    /// POST transaction/{id}/remove
    ///
    /// `periodic_edit_type` travels in the query string.
    pub fn delete(
        &self,
        transaction_id: i64,
        periodic_edit_type: Option<PeriodicEditType>,
    ) -> Result<Option<Value>, AdeskError> {
        require_id("transaction_id", transaction_id)?;
        debug!("operations.delete transaction_id={}", transaction_id);
        let mut query = Params::new();
        query.push_opt("periodic_edit_type", periodic_edit_type);
        self.client.post(
            &format!("transaction/{transaction_id}/remove"),
            Params::new(),
            query,
        )
    }

    /// POST transaction/{id}/complete, confirming a planned operation.
    pub fn complete(&self, transaction_id: i64) -> Result<Option<Value>, AdeskError> {
        require_id("transaction_id", transaction_id)?;
        debug!("operations.complete transaction_id={}", transaction_id);
        self.client.post(
            &format!("transaction/{transaction_id}/complete"),
            Params::new(),
            Params::new(),
        )
    }
}
