use serde::{Deserialize, Serialize};

use super::{lenient_i64, lenient_string, lenient_strings, FromWire};

/// A webhook subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub url: Option<String>,
    /// Subscribed event names; empty when the API omits them.
    #[serde(deserialize_with = "lenient_strings")]
    pub events: Vec<String>,
}

impl FromWire for Webhook {}
