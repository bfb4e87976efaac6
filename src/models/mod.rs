//! Typed views over Adesk API payloads.
//!
//! Models derive `Deserialize` and are lenient: every field is optional,
//! unknown keys are ignored, and a value of the wrong shape becomes `None`
//! instead of failing the record. Numeric fields the API sometimes sends as
//! strings go through [`coerce_f64`].
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Declares a lenient `{ id, name }` reference record.
macro_rules! id_name_record {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
            #[serde(default)]
            pub struct $name {
                #[serde(deserialize_with = "super::lenient_i64")]
                pub id: Option<i64>,
                #[serde(deserialize_with = "super::lenient_string")]
                pub name: Option<String>,
            }

            impl super::FromWire for $name {}
        )*
    };
}

mod bank_accounts;
mod commitments;
mod contractors;
mod custom_reports;
mod operations;
mod projects;
mod tags;
mod warehouse;
mod webhooks;

pub use bank_accounts::BankAccount;
pub use commitments::{Commitment, Shipment, ShipmentProduct};
pub use contractors::Contractor;
pub use custom_reports::{
    CashflowCategoryInfo, CustomReportDebtEntry, CustomReportDebtEntryDetail, CustomReportEntry,
    CustomReportGroup, CustomReportValue, CustomReportValueList, IntegrationInfo,
};
pub use operations::{
    Operation, OperationBankAccount, OperationBusinessUnit, OperationCategory,
    OperationContractor, OperationProject,
};
pub use projects::{DealContractor, DealLegalEntity, Project, ProjectCategory, ProjectManager};
pub use tags::Tag;
pub use warehouse::{CommodityCost, InitialBatch, Product, Unit, WarehouseShipment};
pub use webhooks::Webhook;

/// Build a model from a raw JSON payload.
///
/// Never fails: anything that is not a JSON object, or that serde rejects,
/// yields the all-`None` default.
pub trait FromWire: DeserializeOwned + Default {
    fn from_wire(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }

    /// Hydrate every element of a JSON array. A missing or non-array value
    /// gives an empty list.
    fn from_wire_list(value: Option<&Value>) -> Vec<Self> {
        match value {
            Some(Value::Array(items)) => items.iter().map(Self::from_wire).collect(),
            _ => Vec::new(),
        }
    }
}

/// Lenient numeric coercion.
///
/// Numbers pass through, numeric strings are parsed (`"NaN"` and `"inf"`
/// included), booleans become 0/1. Anything else is `None`.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Integers, integral floats (`42.0`) and numeric strings.
fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Lenient field deserializers
// ---------------------------------------------------------------------------

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_f64))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_i64))
}

/// Strings verbatim; numbers and booleans rendered as text.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => n.as_f64().map(|n| n != 0.0),
        _ => None,
    })
}

/// Nested model; only JSON objects are hydrated.
fn lenient_nested<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromWire,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.filter(Value::is_object).map(|v| T::from_wire(&v)))
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromWire,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(T::from_wire_list(value.as_ref()))
}

/// Array of strings; non-string elements are skipped.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coercion_rules() {
        assert_eq!(coerce_f64(&json!(10)), Some(10.0));
        assert_eq!(coerce_f64(&json!("1234.56")), Some(1234.56));
        assert_eq!(coerce_f64(&json!(true)), Some(1.0));
        assert_eq!(coerce_f64(&json!("inf")), Some(f64::INFINITY));
        assert!(coerce_f64(&json!("NaN")).is_some_and(f64::is_nan));
        assert_eq!(coerce_f64(&json!("not-a-number")), None);
        assert_eq!(coerce_f64(&json!({"a": 1})), None);
        assert_eq!(coerce_f64(&json!([1])), None);
        assert_eq!(coerce_f64(&Value::Null), None);
    }

    #[test]
    fn integral_floats_are_ids() {
        assert_eq!(coerce_i64(&json!(42.0)), Some(42));
        assert_eq!(coerce_i64(&json!(" 17 ")), Some(17));
        assert_eq!(coerce_i64(&json!(42.5)), None);
        assert_eq!(coerce_i64(&json!(true)), None);
    }

    #[test]
    fn fields_tolerate_odd_shapes() {
        let tag = Tag::from_wire(&json!({"id": "17", "name": 42, "color": null}));
        assert_eq!(tag.id, Some(17));
        assert_eq!(tag.name.as_deref(), Some("42"));
        assert_eq!(tag.color, None);

        let category = OperationCategory::from_wire(&json!({"isOwnerTransfer": 1, "group": 3}));
        assert_eq!(category.is_owner_transfer, Some(true));
        assert_eq!(category.group, Some(json!(3)));

        let project = Project::from_wire(&json!({"category": "not-an-object", "id": 42.0}));
        assert_eq!(project.category, None);
        assert_eq!(project.id, Some(42));

        let webhook = Webhook::from_wire(&json!({"events": ["a", 3, "b"]}));
        assert_eq!(webhook.events, vec!["a", "b"]);
    }

    #[test]
    fn non_objects_hydrate_to_default() {
        assert_eq!(Tag::from_wire(&Value::Null), Tag::default());
        assert_eq!(Tag::from_wire(&json!([1, 2])), Tag::default());
        assert!(Tag::from_wire_list(Some(&json!({"id": 1}))).is_empty());
        assert!(Tag::from_wire_list(None).is_empty());
    }
}
