use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    lenient_bool, lenient_f64, lenient_i64, lenient_list, lenient_nested, lenient_string,
    FromWire,
};

/// One product line of a shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShipmentProduct {
    /// Product id or product object, as sent.
    pub product: Option<Value>,
    #[serde(deserialize_with = "lenient_i64")]
    pub r#type: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub quantity: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub vat: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub vat_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shipment {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_list")]
    pub batches: Vec<ShipmentProduct>,
}

/// An obligation between the business and a contractor.
///
/// Linked records (legal entity, contractor, project, transaction) are kept
/// as raw JSON because the API returns either bare ids or small objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Commitment {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub vat: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub vat_percent: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date_formatted: Option<String>,
    pub legal_entity: Option<Value>,
    pub contractor: Option<Value>,
    pub project: Option<Value>,
    /// 1 = incoming, 2 = outgoing.
    #[serde(deserialize_with = "lenient_i64")]
    pub r#type: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    pub transaction: Option<Value>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_shipment: Option<bool>,
    #[serde(deserialize_with = "lenient_nested")]
    pub shipment: Option<Shipment>,
}

impl FromWire for ShipmentProduct {}
impl FromWire for Shipment {}
impl FromWire for Commitment {}
