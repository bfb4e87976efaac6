//! Query-string and form-body assembly.
//!
//! Only parameters that were actually supplied become keys: the API treats
//! an explicitly empty field differently from a missing one on partial
//! updates, so "absent" must never be encoded as an empty string.
use std::collections::BTreeMap;

use crate::errors::AdeskError;

/// A scalar that can be sent as a query or form value.
pub trait ParamValue {
    fn to_param(&self) -> String;
}

impl ParamValue for str {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

impl ParamValue for String {
    fn to_param(&self) -> String {
        self.clone()
    }
}

impl ParamValue for bool {
    fn to_param(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }
}

/// Whole numbers keep a trailing `.0` (`3.0`, not `3`).
impl ParamValue for f64 {
    fn to_param(&self) -> String {
        if self.is_finite() && self.fract() == 0.0 && self.abs() < 1e16 {
            format!("{self:.1}")
        } else {
            self.to_string()
        }
    }
}

macro_rules! int_param {
    ($($t:ty),*) => {
        $(impl ParamValue for $t {
            fn to_param(&self) -> String {
                self.to_string()
            }
        })*
    };
}

int_param!(i32, i64, u8, u32, u64);

impl<T: ParamValue + ?Sized> ParamValue for &T {
    fn to_param(&self) -> String {
        (**self).to_param()
    }
}

/// Ordered list of `(key, value)` pairs. Keys may repeat (`managers[]`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key that is always present.
    pub fn push(&mut self, key: &str, value: impl ParamValue) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_param()));
        self
    }

    /// Add a key only when a value was supplied.
    pub fn push_opt<T: ParamValue>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Add one pair per element under the same key.
    pub fn push_list<T: ParamValue>(&mut self, key: &str, values: &[T]) -> &mut Self {
        for value in values {
            self.push(key, value);
        }
        self
    }

    /// Add an optional list; `None` adds nothing.
    pub fn push_opt_list<T: ParamValue>(&mut self, key: &str, values: Option<&[T]>) -> &mut Self {
        if let Some(values) = values {
            self.push_list(key, values);
        }
        self
    }

    /// Flatten repeated sub-records into `prefix-<n>-<field>` keys.
    ///
    /// Entries are ordered by their caller-supplied index and renumbered
    /// from zero, so gaps in the caller's numbering never reach the wire.
    pub fn push_indexed<E: IndexedEntry>(
        &mut self,
        prefix: &str,
        entries: &[E],
    ) -> Result<&mut Self, AdeskError> {
        let mut by_index: BTreeMap<u32, &E> = BTreeMap::new();
        for entry in entries {
            if by_index.insert(entry.index(), entry).is_some() {
                return Err(AdeskError::validation(format!(
                    "Duplicate {prefix} index: {}.",
                    entry.index()
                )));
            }
        }
        for (position, entry) in by_index.values().enumerate() {
            for (field, value) in entry.fields() {
                self.pairs
                    .push((format!("{prefix}-{position}-{field}"), value));
            }
        }
        Ok(self)
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value stored under `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

/// A repeated sub-record sent as indexed form keys.
pub trait IndexedEntry {
    /// Caller-chosen position; only the relative order matters.
    fn index(&self) -> u32;

    /// Field name/value pairs, without the `prefix-<n>-` part.
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Reject a required string that is empty or only whitespace.
pub(crate) fn require_text(name: &str, value: &str) -> Result<(), AdeskError> {
    if value.trim().is_empty() {
        return Err(AdeskError::validation(format!(
            "Required parameter missing: {name}."
        )));
    }
    Ok(())
}

/// Reject a zero resource identifier.
pub(crate) fn require_id(name: &str, id: i64) -> Result<(), AdeskError> {
    if id == 0 {
        return Err(AdeskError::validation(format!(
            "Required parameter missing: {name}."
        )));
    }
    Ok(())
}

/// Reject an empty required list.
pub(crate) fn require_items<T>(name: &str, items: &[T]) -> Result<(), AdeskError> {
    if items.is_empty() {
        return Err(AdeskError::validation(format!(
            "Required parameter missing: {name}."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        index: u32,
        price: f64,
    }

    impl IndexedEntry for Line {
        fn index(&self) -> u32 {
            self.index
        }

        fn fields(&self) -> Vec<(&'static str, String)> {
            vec![("price", self.price.to_param())]
        }
    }

    #[test]
    fn absent_values_add_no_key() {
        let mut params = Params::new();
        params
            .push_opt::<&str>("q", None)
            .push_opt("start", Some(10))
            .push_opt_list::<i64>("managers[]", None);
        assert_eq!(params.len(), 1);
        assert!(!params.contains_key("q"));
        assert_eq!(params.get("start"), Some("10"));
    }

    #[test]
    fn lists_repeat_the_key() {
        let mut params = Params::new();
        params.push_list("managers[]", &[101, 102]);
        assert_eq!(params.get_all("managers[]"), vec!["101", "102"]);
    }

    #[test]
    fn scalar_encoding() {
        let mut params = Params::new();
        params
            .push("flag", true)
            .push("amount", 12.5)
            .push("whole", 3.0)
            .push("zero", 0.0)
            .push("name", "Q1");
        assert_eq!(params.get("flag"), Some("true"));
        assert_eq!(params.get("amount"), Some("12.5"));
        assert_eq!(params.get("whole"), Some("3.0"));
        assert_eq!(params.get("zero"), Some("0.0"));
        assert_eq!(params.get("name"), Some("Q1"));
    }

    #[test]
    fn indexed_entries_are_renumbered_contiguously() {
        let mut params = Params::new();
        params
            .push_indexed(
                "product",
                &[
                    Line { index: 2, price: 20.0 },
                    Line { index: 0, price: 5.0 },
                ],
            )
            .unwrap();
        assert_eq!(params.get("product-0-price"), Some("5.0"));
        assert_eq!(params.get("product-1-price"), Some("20.0"));
        assert!(!params.contains_key("product-2-price"));
    }

    #[test]
    fn duplicate_indices_are_rejected() {
        let mut params = Params::new();
        let err = params
            .push_indexed(
                "product",
                &[Line { index: 1, price: 1.0 }, Line { index: 1, price: 2.0 }],
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert!(params.is_empty());
    }

    #[test]
    fn zero_is_not_missing_text_is() {
        assert!(require_text("name", "  ").is_err());
        assert!(require_text("name", "ok").is_ok());
        assert!(require_id("tag_id", 0).is_err());
        assert!(require_items::<i64>("projects", &[]).is_err());
    }
}
