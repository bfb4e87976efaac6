use log::debug;
use serde_json::Value;

use crate::client::{unwrap_list, unwrap_one, AdeskClient};
use crate::errors::AdeskError;
use crate::models::{CommodityCost, Product, Unit, WarehouseShipment};
use crate::params::{require_id, require_items, require_text, ParamValue, Params};

/// Catalog item kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    /// Stocked goods; needs a unit of measurement.
    Product,
    Service,
}

impl ParamValue for ProductType {
    fn to_param(&self) -> String {
        match self {
            ProductType::Product => "1",
            ProductType::Service => "2",
        }
        .to_string()
    }
}

/// Arguments for [`Warehouse::create_product`].
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub r#type: ProductType,
    pub name: String,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub unit_id: Option<i64>,
    pub unit_name: Option<String>,
    pub unit_symbol: Option<String>,
    pub unit_code: Option<String>,
    pub with_initial_batch: Option<bool>,
    pub initial_batch_date: Option<String>,
    pub initial_batch_quantity: Option<f64>,
    pub initial_batch_price: Option<f64>,
    pub initial_batch_currency: Option<String>,
    pub initial_batch_legal_entity: Option<i64>,
}

impl NewProduct {
    pub fn new(r#type: ProductType, name: impl Into<String>) -> Self {
        Self {
            r#type,
            name: name.into(),
            sku: None,
            description: None,
            unit_id: None,
            unit_name: None,
            unit_symbol: None,
            unit_code: None,
            with_initial_batch: None,
            initial_batch_date: None,
            initial_batch_quantity: None,
            initial_batch_price: None,
            initial_batch_currency: None,
            initial_batch_legal_entity: None,
        }
    }

    fn validate(&self) -> Result<(), AdeskError> {
        require_text("name", &self.name)?;
        let has_text = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        if self.r#type == ProductType::Product
            && !self.unit_id.is_some_and(|id| id != 0)
            && !(has_text(&self.unit_name) && has_text(&self.unit_symbol))
        {
            return Err(AdeskError::validation(
                "A product needs unit_id or both unit_name and unit_symbol.",
            ));
        }
        if self.with_initial_batch == Some(true)
            && !(has_text(&self.initial_batch_date)
                && self.initial_batch_quantity.is_some()
                && self.initial_batch_price.is_some()
                && has_text(&self.initial_batch_currency)
                && self.initial_batch_legal_entity.is_some())
        {
            return Err(AdeskError::validation(
                "Missing required parameters for initial batch.",
            ));
        }
        Ok(())
    }

    fn to_params(&self) -> Result<Params, AdeskError> {
        self.validate()?;
        let mut data = Params::new();
        data.push("type", self.r#type)
            .push("name", self.name.as_str())
            .push_opt("sku", self.sku.as_deref())
            .push_opt("description", self.description.as_deref())
            .push_opt("unit_id", self.unit_id)
            .push_opt("unit_name", self.unit_name.as_deref())
            .push_opt("unit_symbol", self.unit_symbol.as_deref())
            .push_opt("unit_code", self.unit_code.as_deref())
            .push_opt("with_initial_batch", self.with_initial_batch)
            .push_opt("initial_batch_date", self.initial_batch_date.as_deref())
            .push_opt("initial_batch_quantity", self.initial_batch_quantity)
            .push_opt("initial_batch_price", self.initial_batch_price)
            .push_opt("initial_batch_currency", self.initial_batch_currency.as_deref())
            .push_opt("initial_batch_legal_entity", self.initial_batch_legal_entity);
        Ok(data)
    }
}

/// Partial update for [`Warehouse::update_product`].
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub unit_id: Option<i64>,
    pub unit_name: Option<String>,
    pub unit_symbol: Option<String>,
    pub unit_code: Option<String>,
    pub with_initial_batch: Option<bool>,
    pub initial_batch_date: Option<String>,
    pub initial_batch_quantity: Option<f64>,
    pub initial_batch_price: Option<f64>,
    pub initial_batch_currency: Option<String>,
    pub initial_batch_legal_entity: Option<i64>,
}

impl ProductUpdate {
    fn to_params(&self) -> Params {
        let mut data = Params::new();
        data.push_opt("name", self.name.as_deref())
            .push_opt("sku", self.sku.as_deref())
            .push_opt("description", self.description.as_deref())
            .push_opt("unit_id", self.unit_id)
            .push_opt("unit_name", self.unit_name.as_deref())
            .push_opt("unit_symbol", self.unit_symbol.as_deref())
            .push_opt("unit_code", self.unit_code.as_deref())
            .push_opt("with_initial_batch", self.with_initial_batch)
            .push_opt("initial_batch_date", self.initial_batch_date.as_deref())
            .push_opt("initial_batch_quantity", self.initial_batch_quantity)
            .push_opt("initial_batch_price", self.initial_batch_price)
            .push_opt("initial_batch_currency", self.initial_batch_currency.as_deref())
            .push_opt("initial_batch_legal_entity", self.initial_batch_legal_entity);
        data
    }
}

/// A write-off of stock against a project.
///
/// `products` is sent to the API as a JSON-encoded form field.
#[derive(Debug, Clone, PartialEq)]
pub struct CommodityExpense {
    pub date: String,
    pub legal_entity_id: i64,
    pub project_id: i64,
    pub products: Value,
}

impl CommodityExpense {
    fn to_params(&self) -> Result<Params, AdeskError> {
        require_text("date", &self.date)?;
        let empty = match &self.products {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(fields) => fields.is_empty(),
            Value::String(s) => s.trim().is_empty(),
            _ => false,
        };
        if empty {
            return Err(AdeskError::validation("Required parameter missing: products."));
        }
        let products = match &self.products {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let mut data = Params::new();
        data.push("date", self.date.as_str())
            .push("legal_entity_id", self.legal_entity_id)
            .push("project_id", self.project_id)
            .push("products", products);
        Ok(data)
    }
}

/// Products, services, units and stock movements.
#[derive(Debug, Clone, Copy)]
pub struct Warehouse<'a> {
    client: &'a AdeskClient,
}

impl<'a> Warehouse<'a> {
    pub(crate) fn new(client: &'a AdeskClient) -> Self {
        Self { client }
    }

    pub fn list_products(&self, search: Option<&str>) -> Result<Vec<Product>, AdeskError> {
        debug!("warehouse.list_products");
        let mut params = Params::new();
        params.push_opt("search", search);
        let response = self.client.get("warehouse/products", params)?;
        Ok(unwrap_list(response, "products"))
    }

    pub fn create_product(&self, product: &NewProduct) -> Result<Option<Product>, AdeskError> {
        let data = product.to_params()?;
        debug!("warehouse.create_product type={}", product.r#type.to_param());
        let response = self.client.post("warehouse/product", data, Params::new())?;
        Ok(unwrap_one(response, "product"))
    }

    pub fn update_product(
        &self,
        product_id: i64,
        update: &ProductUpdate,
    ) -> Result<Option<Product>, AdeskError> {
        require_id("product_id", product_id)?;
        debug!("warehouse.update_product product_id={}", product_id);
        let response = self.client.post(
            &format!("warehouse/product/{product_id}"),
            update.to_params(),
            Params::new(),
        )?;
        Ok(unwrap_one(response, "product"))
    }

    pub fn delete_product(&self, product_id: i64) -> Result<Option<Value>, AdeskError> {
        require_id("product_id", product_id)?;
        debug!("warehouse.delete_product product_id={}", product_id);
        self.client.post(
            &format!("warehouse/product/{product_id}/remove"),
            Params::new(),
            Params::new(),
        )
    }

    pub fn list_units(&self) -> Result<Vec<Unit>, AdeskError> {
        debug!("warehouse.list_units");
        let response = self.client.get("warehouse/units", Params::new())?;
        Ok(unwrap_list(response, "units"))
    }

    /// Cost prices per product for the given projects.
    pub fn list_commodity_costs(&self, projects: &[i64]) -> Result<Vec<CommodityCost>, AdeskError> {
        require_items("projects", projects)?;
        debug!("warehouse.list_commodity_costs projects={}", projects.len());
        let mut params = Params::new();
        params.push_list("projects[]", projects);
        let response = self.client.get("warehouse/commodity-costs", params)?;
        Ok(unwrap_list(response, "commodity-costs"))
    }

    pub fn create_expense(
        &self,
        expense: &CommodityExpense,
    ) -> Result<Option<WarehouseShipment>, AdeskError> {
        let data = expense.to_params()?;
        debug!("warehouse.create_expense project_id={}", expense.project_id);
        let response = self.client.post("warehouse/expenses", data, Params::new())?;
        Ok(unwrap_one(response, "shipment"))
    }

    pub fn update_expense(
        &self,
        shipment_id: i64,
        expense: &CommodityExpense,
    ) -> Result<Option<WarehouseShipment>, AdeskError> {
        require_id("shipment_id", shipment_id)?;
        let data = expense.to_params()?;
        debug!("warehouse.update_expense shipment_id={}", shipment_id);
        let response = self.client.post(
            &format!("warehouse/expenses/{shipment_id}"),
            data,
            Params::new(),
        )?;
        Ok(unwrap_one(response, "shipment"))
    }

    pub fn delete_expense(&self, shipment_id: i64) -> Result<Option<Value>, AdeskError> {
        require_id("shipment_id", shipment_id)?;
        debug!("warehouse.delete_expense shipment_id={}", shipment_id);
        self.client.post(
            &format!("warehouse/expenses/{shipment_id}/remove"),
            Params::new(),
            Params::new(),
        )
    }
}
