use log::debug;
use serde_json::Value;

use crate::client::{unwrap_list, unwrap_one, AdeskClient};
use crate::errors::AdeskError;
use crate::models::Commitment;
use crate::params::{require_id, require_text, IndexedEntry, ParamValue, Params};

/// One product line attached to a commitment.
///
/// `index` only orders the lines; they are renumbered from zero on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitmentProduct {
    pub index: u32,
    pub product_id: i64,
    pub price: f64,
    pub quantity: f64,
    pub vat_percent: Option<f64>,
}

impl IndexedEntry for CommitmentProduct {
    fn index(&self) -> u32 {
        self.index
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("product_id", self.product_id.to_param()),
            ("price", self.price.to_param()),
            ("quantity", self.quantity.to_param()),
        ];
        if let Some(vat) = self.vat_percent {
            fields.push(("vat_percent", vat.to_param()));
        }
        fields
    }
}

/// Filters for [`Commitments::list`]. Sent as a form body.
#[derive(Debug, Clone, Default)]
pub struct CommitmentFilter {
    pub range_str: Option<String>,
    pub range_start: Option<String>,
    pub range_end: Option<String>,
    pub contractors: Option<Vec<i64>>,
    pub projects: Option<Vec<i64>>,
}

impl CommitmentFilter {
    fn to_params(&self) -> Params {
        let mut data = Params::new();
        data.push_opt("range_str", self.range_str.as_deref())
            .push_opt("range_start", self.range_start.as_deref())
            .push_opt("range_end", self.range_end.as_deref())
            .push_opt_list("contractors[]", self.contractors.as_deref())
            .push_opt_list("projects[]", self.projects.as_deref());
        data
    }
}

#[derive(Debug, Clone)]
pub struct NewCommitment {
    pub amount: f64,
    /// 1 = incoming, 2 = outgoing.
    pub r#type: i64,
    pub date: String,
    pub contractor: i64,
    /// `0` is a valid legal entity id.
    pub legal_entity: i64,
    pub currency: String,
    pub description: Option<String>,
    pub project: Option<i64>,
    pub vat_percent: Option<f64>,
    pub products: Vec<CommitmentProduct>,
}

impl NewCommitment {
    fn to_params(&self) -> Result<Params, AdeskError> {
        require_text("date", &self.date)?;
        require_text("currency", &self.currency)?;
        let mut data = Params::new();
        data.push("amount", self.amount)
            .push("type", self.r#type)
            .push("date", self.date.as_str())
            .push("contractor", self.contractor)
            .push("legal_entity", self.legal_entity)
            .push("currency", self.currency.as_str())
            .push_opt("description", self.description.as_deref())
            .push_opt("project", self.project)
            .push_opt("vat_percent", self.vat_percent)
            .push_indexed("product", &self.products)?;
        Ok(data)
    }
}

/// Update for [`Commitments::update`]. The legal entity is always required.
#[derive(Debug, Clone, Default)]
pub struct CommitmentUpdate {
    pub legal_entity: i64,
    pub amount: Option<f64>,
    pub r#type: Option<i64>,
    pub date: Option<String>,
    pub contractor: Option<i64>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub project: Option<i64>,
    pub vat_percent: Option<f64>,
    pub products: Vec<CommitmentProduct>,
}

impl CommitmentUpdate {
    pub fn new(legal_entity: i64) -> Self {
        Self {
            legal_entity,
            ..Default::default()
        }
    }

    fn to_params(&self) -> Result<Params, AdeskError> {
        let mut data = Params::new();
        data.push("legal_entity", self.legal_entity)
            .push_opt("amount", self.amount)
            .push_opt("type", self.r#type)
            .push_opt("date", self.date.as_deref())
            .push_opt("contractor", self.contractor)
            .push_opt("currency", self.currency.as_deref())
            .push_opt("description", self.description.as_deref())
            .push_opt("project", self.project)
            .push_opt("vat_percent", self.vat_percent)
            .push_indexed("product", &self.products)?;
        Ok(data)
    }
}

/// Obligations to and from contractors.
#[derive(Debug, Clone, Copy)]
pub struct Commitments<'a> {
    client: &'a AdeskClient,
}

impl<'a> Commitments<'a> {
    pub(crate) fn new(client: &'a AdeskClient) -> Self {
        Self { client }
    }

    /// POST commitments. This listing endpoint takes its filters as a form.
    pub fn list(&self, filter: &CommitmentFilter) -> Result<Vec<Commitment>, AdeskError> {
        debug!("commitments.list");
        let response = self
            .client
            .post("commitments", filter.to_params(), Params::new())?;
        Ok(unwrap_list(response, "commitments"))
    }

    pub fn create(&self, commitment: &NewCommitment) -> Result<Option<Commitment>, AdeskError> {
        let data = commitment.to_params()?;
        debug!(
            "commitments.create products={}",
            commitment.products.len()
        );
        let response = self.client.post("commitment", data, Params::new())?;
        Ok(unwrap_one(response, "commitment"))
    }

    pub fn update(
        &self,
        commitment_id: i64,
        update: &CommitmentUpdate,
    ) -> Result<Option<Commitment>, AdeskError> {
        require_id("commitment_id", commitment_id)?;
        let data = update.to_params()?;
        debug!("commitments.update commitment_id={}", commitment_id);
        let response =
            self.client
                .post(&format!("commitment/{commitment_id}"), data, Params::new())?;
        Ok(unwrap_one(response, "commitment"))
    }

    pub fn delete(&self, commitment_id: i64) -> Result<Option<Value>, AdeskError> {
        require_id("commitment_id", commitment_id)?;
        debug!("commitments.delete commitment_id={}", commitment_id);
        self.client.post(
            &format!("commitment/{commitment_id}/remove"),
            Params::new(),
            Params::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(index: u32, product_id: i64) -> CommitmentProduct {
        CommitmentProduct {
            index,
            product_id,
            price: 10.0,
            quantity: 2.0,
            vat_percent: None,
        }
    }

    #[test]
    fn update_keeps_legal_entity_zero() {
        let params = CommitmentUpdate::new(0).to_params().unwrap();
        assert_eq!(params.get("legal_entity"), Some("0"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn product_lines_are_renumbered() {
        let update = CommitmentUpdate {
            products: vec![line(5, 50), line(3, 30)],
            ..CommitmentUpdate::new(1)
        };
        let params = update.to_params().unwrap();
        assert_eq!(params.get("product-0-product_id"), Some("30"));
        assert_eq!(params.get("product-1-product_id"), Some("50"));
        assert!(!params.contains_key("product-0-vat_percent"));
    }
}
