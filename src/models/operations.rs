use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    lenient_bool, lenient_f64, lenient_i64, lenient_list, lenient_nested, lenient_string,
    FromWire, Tag,
};

/// Account an operation was booked against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationBankAccount {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub number: Option<String>,
    /// `Bank` or `Cash`.
    #[serde(deserialize_with = "lenient_string")]
    pub r#type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationCategory {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// 1 = income, 2 = outcome.
    #[serde(deserialize_with = "lenient_i64")]
    pub r#type: Option<i64>,
    pub kind: Option<Value>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_owner_transfer: Option<bool>,
    /// Either a group id or a nested group object.
    pub group: Option<Value>,
}

id_name_record!(OperationContractor, OperationProject, OperationBusinessUnit);

/// A money movement (transaction), actual or planned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_splitted: Option<bool>,
    #[serde(deserialize_with = "lenient_i64")]
    pub split_id: Option<i64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date_iso: Option<String>,
    /// 1 = income, 2 = outcome.
    #[serde(deserialize_with = "lenient_i64")]
    pub r#type: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date_formatted: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub related_date: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub confirm_accrual: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_planned: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_ready_to_be_confirmed: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_periodic: Option<bool>,
    #[serde(deserialize_with = "lenient_i64")]
    pub periodic_chain: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub period: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_commitment: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_transfer: Option<bool>,
    #[serde(deserialize_with = "lenient_f64")]
    pub bank_account_amount: Option<f64>,
    #[serde(deserialize_with = "lenient_nested")]
    pub bank_account: Option<OperationBankAccount>,
    #[serde(deserialize_with = "lenient_nested")]
    pub category: Option<OperationCategory>,
    #[serde(deserialize_with = "lenient_nested")]
    pub contractor: Option<OperationContractor>,
    #[serde(deserialize_with = "lenient_nested")]
    pub project: Option<OperationProject>,
    #[serde(rename = "business_unit", deserialize_with = "lenient_nested")]
    pub business_unit: Option<OperationBusinessUnit>,
    #[serde(deserialize_with = "lenient_list")]
    pub tags: Vec<Tag>,
}

impl FromWire for OperationBankAccount {}
impl FromWire for OperationCategory {}
impl FromWire for Operation {}
