use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    lenient_bool, lenient_f64, lenient_i64, lenient_list, lenient_nested, lenient_string,
    FromWire, ShipmentProduct,
};

/// Unit of measurement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Unit {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub symbol: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub code: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub fractional: Option<bool>,
}

/// Opening stock of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InitialBatch {
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub quantity: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    pub legal_entity: Option<Value>,
}

/// A product or service in the warehouse catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    /// 1 = product, 2 = service.
    #[serde(deserialize_with = "lenient_i64")]
    pub r#type: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sku: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_nested")]
    pub unit: Option<Unit>,
    #[serde(deserialize_with = "lenient_nested")]
    pub initial_batch: Option<InitialBatch>,
    #[serde(deserialize_with = "lenient_f64")]
    pub balance: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub average_cost_price: Option<f64>,
}

/// Cost price of a product within a project. This endpoint answers in
/// snake_case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommodityCost {
    #[serde(deserialize_with = "lenient_i64")]
    pub product_id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sku: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub unit_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub unit_symbol: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    pub project_id: Option<i64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub quantity: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub cost_price: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_cost: Option<f64>,
}

/// Stock write-off produced by a commodity expense.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarehouseShipment {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_list")]
    pub batches: Vec<ShipmentProduct>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    pub legal_entity_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub project_id: Option<i64>,
}

impl FromWire for Unit {}
impl FromWire for InitialBatch {}
impl FromWire for Product {}
impl FromWire for CommodityCost {}
impl FromWire for WarehouseShipment {}
