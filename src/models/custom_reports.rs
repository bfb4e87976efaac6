//! Custom report models (v2 API).
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient_bool, lenient_f64, lenient_i64, lenient_list, lenient_string, FromWire};

/// Grouping of custom report entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomReportGroup {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub api_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub report_section: Option<String>,
}

id_name_record!(CashflowCategoryInfo);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationInfo {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub source: Option<String>,
}

/// A row (metric) of a custom report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomReportEntry {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub api_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub r#type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub value_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub total_aggregation_type: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    pub group_id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub report_section: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    pub order: Option<i64>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_editable: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_persistent: Option<bool>,
    pub system_report_entry: Option<Value>,
    #[serde(deserialize_with = "lenient_list")]
    pub cashflow_categories: Vec<CashflowCategoryInfo>,
    #[serde(deserialize_with = "lenient_list")]
    pub integrations: Vec<IntegrationInfo>,
}

/// A value recorded against a custom report entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomReportValue {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub entry_id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub vat: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub vat_percent: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub exchange_rate: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    pub project_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub business_unit_id: Option<i64>,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_attachments: Option<bool>,
}

/// Page of custom report values with the records they reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomReportValueList {
    #[serde(deserialize_with = "lenient_i64")]
    pub items_count: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub total_items_count: Option<i64>,
    #[serde(deserialize_with = "lenient_list")]
    pub values: Vec<CustomReportValue>,
    #[serde(deserialize_with = "lenient_list")]
    pub entries: Vec<CustomReportEntry>,
    #[serde(deserialize_with = "lenient_list")]
    pub groups: Vec<CustomReportGroup>,
    pub projects: Option<Value>,
    pub business_units: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomReportDebtEntryDetail {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub r#type: Option<String>,
}

/// Debt report line aggregating entries and cashflow categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomReportDebtEntry {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub entries: Vec<CustomReportDebtEntryDetail>,
    #[serde(deserialize_with = "lenient_list")]
    pub cashflow_categories: Vec<CustomReportDebtEntryDetail>,
}

impl FromWire for CustomReportGroup {}
impl FromWire for IntegrationInfo {}
impl FromWire for CustomReportEntry {}
impl FromWire for CustomReportValue {}
impl FromWire for CustomReportValueList {}
impl FromWire for CustomReportDebtEntryDetail {}
impl FromWire for CustomReportDebtEntry {}
