use serde::{Deserialize, Serialize};

use super::{lenient_f64, lenient_i64, lenient_string, FromWire};

/// A client, supplier or other counterparty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contractor {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub contact_person: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub phone_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    /// Only present in list responses.
    #[serde(deserialize_with = "lenient_f64")]
    pub balance: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

impl FromWire for Contractor {}
