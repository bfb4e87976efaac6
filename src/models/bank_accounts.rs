use serde::{Deserialize, Serialize};

use super::{lenient_f64, lenient_i64, lenient_string, FromWire};

/// A bank or cash account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BankAccount {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub bank_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub created: Option<String>,
    /// Currency code such as `RUB`.
    #[serde(deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    /// Kept as sent: either a label (`Bank`, `Cash`) or a numeric code.
    #[serde(deserialize_with = "lenient_string")]
    pub r#type: Option<String>,
    /// `open` or `closed`.
    #[serde(deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub initial_amount_date: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub initial_amount: Option<f64>,
    /// Current balance.
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
}

impl FromWire for BankAccount {}
