//! Custom report resources of the v2 JSON API.
//!
//! Batch endpoints take a JSON array of records and answer with the
//! affected records under `data`. Inputs serialize with camelCase keys and
//! leave out every field the caller did not set.
use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::client::{unwrap_list, AdeskClient};
use crate::errors::AdeskError;
use crate::models::{
    CustomReportDebtEntry, CustomReportEntry, CustomReportGroup, CustomReportValue,
    CustomReportValueList, FromWire,
};
use crate::params::{require_items, Params};

const DATA_KEY: &str = "data";

fn to_json_array<T: Serialize>(name: &str, items: &[T]) -> Result<Value, AdeskError> {
    require_items(name, items)?;
    serde_json::to_value(items)
        .map_err(|err| AdeskError::validation(format!("Cannot encode {name}: {err}")))
}

fn post_batch<T: FromWire>(
    client: &AdeskClient,
    endpoint: &str,
    body: Value,
) -> Result<Vec<T>, AdeskError> {
    let response = client.post_v2(endpoint, Some(body), Params::new())?;
    Ok(unwrap_list(response, DATA_KEY))
}

fn remove_ids(
    client: &AdeskClient,
    endpoint: &str,
    ids: &[i64],
) -> Result<Option<Value>, AdeskError> {
    let body = to_json_array("ids", ids)?;
    client.post_v2(endpoint, Some(body), Params::new())
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct CustomReportGroupFilter {
    pub name: Option<String>,
    pub api_name: Option<String>,
    pub color: Option<String>,
    pub report_section: Option<String>,
}

impl CustomReportGroupFilter {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push_opt("name", self.name.as_deref())
            .push_opt("apiName", self.api_name.as_deref())
            .push_opt("color", self.color.as_deref())
            .push_opt("reportSection", self.report_section.as_deref());
        params
    }
}

/// Group record for create (no `id`) and update (with `id`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomReportGroupInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_section: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct CustomReportGroups<'a> {
    client: &'a AdeskClient,
}

impl<'a> CustomReportGroups<'a> {
    pub(crate) fn new(client: &'a AdeskClient) -> Self {
        Self { client }
    }

    pub fn list(
        &self,
        filter: &CustomReportGroupFilter,
    ) -> Result<Vec<CustomReportGroup>, AdeskError> {
        debug!("custom_report_groups.list");
        let response = self
            .client
            .get_v2("custom-report-groups", filter.to_params())?;
        Ok(unwrap_list(response, DATA_KEY))
    }

    pub fn create(
        &self,
        groups: &[CustomReportGroupInput],
    ) -> Result<Vec<CustomReportGroup>, AdeskError> {
        let body = to_json_array("groups", groups)?;
        debug!("custom_report_groups.create count={}", groups.len());
        post_batch(self.client, "custom-report-groups/create", body)
    }

    pub fn update(
        &self,
        groups: &[CustomReportGroupInput],
    ) -> Result<Vec<CustomReportGroup>, AdeskError> {
        let body = to_json_array("groups", groups)?;
        debug!("custom_report_groups.update count={}", groups.len());
        post_batch(self.client, "custom-report-groups/update", body)
    }

    pub fn remove(&self, group_ids: &[i64]) -> Result<Option<Value>, AdeskError> {
        debug!("custom_report_groups.remove count={}", group_ids.len());
        remove_ids(self.client, "custom-report-groups/remove", group_ids)
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct CustomReportEntryFilter {
    pub name: Option<String>,
    pub api_name: Option<String>,
    pub value_type: Option<String>,
    pub group_id: Option<i64>,
    pub report_section: Option<String>,
}

impl CustomReportEntryFilter {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push_opt("name", self.name.as_deref())
            .push_opt("apiName", self.api_name.as_deref())
            .push_opt("valueType", self.value_type.as_deref())
            .push_opt("groupId", self.group_id)
            .push_opt("reportSection", self.report_section.as_deref());
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomReportEntryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_aggregation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cashflow_categories: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Copy)]
pub struct CustomReportEntries<'a> {
    client: &'a AdeskClient,
}

impl<'a> CustomReportEntries<'a> {
    pub(crate) fn new(client: &'a AdeskClient) -> Self {
        Self { client }
    }

    pub fn list(
        &self,
        filter: &CustomReportEntryFilter,
    ) -> Result<Vec<CustomReportEntry>, AdeskError> {
        debug!("custom_report_entries.list");
        let response = self
            .client
            .get_v2("custom-report-entries", filter.to_params())?;
        Ok(unwrap_list(response, DATA_KEY))
    }

    pub fn create(
        &self,
        entries: &[CustomReportEntryInput],
    ) -> Result<Vec<CustomReportEntry>, AdeskError> {
        let body = to_json_array("entries", entries)?;
        debug!("custom_report_entries.create count={}", entries.len());
        post_batch(self.client, "custom-report-entries/create", body)
    }

    pub fn update(
        &self,
        entries: &[CustomReportEntryInput],
    ) -> Result<Vec<CustomReportEntry>, AdeskError> {
        let body = to_json_array("entries", entries)?;
        debug!("custom_report_entries.update count={}", entries.len());
        post_batch(self.client, "custom-report-entries/update", body)
    }

    pub fn remove(&self, entry_ids: &[i64]) -> Result<Option<Value>, AdeskError> {
        debug!("custom_report_entries.remove count={}", entry_ids.len());
        remove_ids(self.client, "custom-report-entries/remove", entry_ids)
    }
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// Filters and pagination for [`CustomReportValues::list`].
#[derive(Debug, Clone, Default)]
pub struct CustomReportValueFilter {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub offset: Option<i64>,
    pub entry_id: Option<i64>,
    pub entry_api_name: Option<String>,
    pub group_id: Option<i64>,
    pub group_api_name: Option<String>,
    /// `YYYY-MM-DD`.
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub month: Option<String>,
    pub r#type: Option<String>,
    pub project: Option<i64>,
    pub business_unit: Option<i64>,
    pub exact_business_unit: Option<bool>,
}

impl CustomReportValueFilter {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push_opt("page", self.page)
            .push_opt("pageSize", self.page_size)
            .push_opt("offset", self.offset)
            .push_opt("entryId", self.entry_id)
            .push_opt("entryApiName", self.entry_api_name.as_deref())
            .push_opt("groupId", self.group_id)
            .push_opt("groupApiName", self.group_api_name.as_deref())
            .push_opt("dateFrom", self.date_from.as_deref())
            .push_opt("dateTo", self.date_to.as_deref())
            .push_opt("month", self.month.as_deref())
            .push_opt("type", self.r#type.as_deref())
            .push_opt("project", self.project)
            .push_opt("businessUnit", self.business_unit)
            .push_opt("exactBusinessUnit", self.exact_business_unit);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomReportValueInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_unit_id: Option<i64>,
}

#[derive(Debug, Clone, Copy)]
pub struct CustomReportValues<'a> {
    client: &'a AdeskClient,
}

impl<'a> CustomReportValues<'a> {
    pub(crate) fn new(client: &'a AdeskClient) -> Self {
        Self { client }
    }

    /// One page of values plus the entries, groups and projects they
    /// reference. `None` unless the API reports `success`.
    pub fn list(
        &self,
        filter: &CustomReportValueFilter,
    ) -> Result<Option<CustomReportValueList>, AdeskError> {
        debug!("custom_report_values.list");
        let response = self
            .client
            .get_v2("custom-report-values", filter.to_params())?;
        Ok(response
            .filter(|body| is_truthy(body.get("success")))
            .map(|body| CustomReportValueList::from_wire(&body)))
    }

    pub fn create(
        &self,
        values: &[CustomReportValueInput],
    ) -> Result<Vec<CustomReportValue>, AdeskError> {
        let body = to_json_array("values", values)?;
        debug!("custom_report_values.create count={}", values.len());
        post_batch(self.client, "custom-report-values/create", body)
    }

    pub fn update(
        &self,
        values: &[CustomReportValueInput],
    ) -> Result<Vec<CustomReportValue>, AdeskError> {
        let body = to_json_array("values", values)?;
        debug!("custom_report_values.update count={}", values.len());
        post_batch(self.client, "custom-report-values/update", body)
    }

    pub fn remove(&self, value_ids: &[i64]) -> Result<Option<Value>, AdeskError> {
        debug!("custom_report_values.remove count={}", value_ids.len());
        remove_ids(self.client, "custom-report-values/remove", value_ids)
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(fields)) => !fields.is_empty(),
        Some(Value::Null) | None => false,
    }
}

// ---------------------------------------------------------------------------
// Debt entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomReportDebtEntryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ids of the custom report entries aggregated by this line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cashflow_categories: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Copy)]
pub struct CustomReportDebtEntries<'a> {
    client: &'a AdeskClient,
}

impl<'a> CustomReportDebtEntries<'a> {
    pub(crate) fn new(client: &'a AdeskClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<CustomReportDebtEntry>, AdeskError> {
        debug!("custom_report_debt_entries.list");
        let response = self
            .client
            .get_v2("custom-report-debt-entries", Params::new())?;
        Ok(unwrap_list(response, DATA_KEY))
    }

    pub fn create(
        &self,
        entries: &[CustomReportDebtEntryInput],
    ) -> Result<Vec<CustomReportDebtEntry>, AdeskError> {
        let body = to_json_array("debt entries", entries)?;
        debug!("custom_report_debt_entries.create count={}", entries.len());
        post_batch(self.client, "custom-report-debt-entries/create", body)
    }

    pub fn update(
        &self,
        entries: &[CustomReportDebtEntryInput],
    ) -> Result<Vec<CustomReportDebtEntry>, AdeskError> {
        let body = to_json_array("debt entries", entries)?;
        debug!("custom_report_debt_entries.update count={}", entries.len());
        post_batch(self.client, "custom-report-debt-entries/update", body)
    }

    pub fn remove(&self, debt_entry_ids: &[i64]) -> Result<Option<Value>, AdeskError> {
        debug!(
            "custom_report_debt_entries.remove count={}",
            debt_entry_ids.len()
        );
        remove_ids(
            self.client,
            "custom-report-debt-entries/remove",
            debt_entry_ids,
        )
    }
}
