use serde::{Deserialize, Serialize};

use super::{lenient_bool, lenient_f64, lenient_i64, lenient_nested, lenient_string, FromWire};

id_name_record!(
    /// Category a project belongs to.
    ProjectCategory,
    /// User responsible for a project.
    ProjectManager,
    /// Counterparty of a deal-type project.
    DealContractor,
    /// Own legal entity of a deal-type project.
    DealLegalEntity,
);

/// A project (or deal) with its running totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub created: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub income: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub outcome: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub gross_profit: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub profitability: Option<f64>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_archived: Option<bool>,
    #[serde(deserialize_with = "lenient_f64")]
    pub plan_income: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub plan_outcome: Option<f64>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_deal: Option<bool>,
    #[serde(deserialize_with = "lenient_nested")]
    pub category: Option<ProjectCategory>,
    #[serde(deserialize_with = "lenient_nested")]
    pub manager: Option<ProjectManager>,
    // snake_case on the wire, unlike the rest of the object
    #[serde(rename = "deal_contractor", deserialize_with = "lenient_nested")]
    pub deal_contractor: Option<DealContractor>,
    #[serde(rename = "deal_legal_entity", deserialize_with = "lenient_nested")]
    pub deal_legal_entity: Option<DealLegalEntity>,
}

impl FromWire for Project {}
