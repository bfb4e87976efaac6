use log::debug;
use serde_json::Value;

use crate::client::{unwrap_list, unwrap_one, AdeskClient};
use crate::errors::AdeskError;
use crate::models::BankAccount;
use crate::params::{require_id, require_text, Params};

#[derive(Debug, Clone, Default)]
pub struct BankAccountFilter {
    pub start: Option<i64>,
    pub length: Option<i64>,
    pub reduced: Option<bool>,
    pub with_sum_amount: Option<bool>,
    /// `Bank` or `Cash`.
    pub bank_account_type: Option<String>,
    /// `open` or `closed`.
    pub status: Option<String>,
}

impl BankAccountFilter {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push_opt("start", self.start)
            .push_opt("length", self.length)
            .push_opt("reduced", self.reduced)
            .push_opt("with_sum_amount", self.with_sum_amount)
            .push_opt("bank_account_type", self.bank_account_type.as_deref())
            .push_opt("status", self.status.as_deref());
        params
    }
}

/// Arguments for [`BankAccounts::create`].
#[derive(Debug, Clone, Default)]
pub struct NewBankAccount {
    pub name: String,
    pub currency: String,
    /// `0` is a valid legal entity id.
    pub legal_entity: i64,
    pub number: Option<String>,
    pub bank_name: Option<String>,
    pub initial_amount: Option<f64>,
    pub initial_amount_date: Option<String>,
    /// 1 = cash, 2 = bank.
    pub r#type: Option<i64>,
    pub bank_code: Option<String>,
    pub correspondent_account: Option<String>,
    pub is_acquiring_enabled: Option<bool>,
    pub commission_category: Option<i64>,
    pub refund_category: Option<i64>,
    /// Cash accounts only.
    pub category: Option<i64>,
}

impl NewBankAccount {
    pub fn new(name: impl Into<String>, currency: impl Into<String>, legal_entity: i64) -> Self {
        Self {
            name: name.into(),
            currency: currency.into(),
            legal_entity,
            ..Default::default()
        }
    }

    fn to_params(&self) -> Result<Params, AdeskError> {
        require_text("name", &self.name)?;
        require_text("currency", &self.currency)?;
        let mut data = Params::new();
        data.push("name", self.name.as_str())
            .push("currency", self.currency.as_str())
            .push("legal_entity", self.legal_entity)
            .push_opt("number", self.number.as_deref())
            .push_opt("bank_name", self.bank_name.as_deref())
            .push_opt("initial_amount", self.initial_amount)
            .push_opt("initial_amount_date", self.initial_amount_date.as_deref())
            .push_opt("type", self.r#type)
            .push_opt("bank_code", self.bank_code.as_deref())
            .push_opt("correspondent_account", self.correspondent_account.as_deref())
            .push_opt("is_acquiring_enabled", self.is_acquiring_enabled)
            .push_opt("commission_category", self.commission_category)
            .push_opt("refund_category", self.refund_category)
            .push_opt("category", self.category);
        Ok(data)
    }
}

/// Arguments for [`BankAccounts::update`]. The name is always sent.
#[derive(Debug, Clone, Default)]
pub struct BankAccountUpdate {
    pub name: String,
    pub number: Option<String>,
    pub bank_name: Option<String>,
    pub bank_code: Option<String>,
    pub initial_amount: Option<f64>,
    pub initial_amount_date: Option<String>,
    pub legal_entity: Option<i64>,
    pub r#type: Option<i64>,
    pub correspondent_account: Option<String>,
    pub is_acquiring_enabled: Option<bool>,
    pub commission_category: Option<i64>,
    pub refund_category: Option<i64>,
    pub category: Option<i64>,
}

impl BankAccountUpdate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    fn to_params(&self) -> Result<Params, AdeskError> {
        require_text("name", &self.name)?;
        let mut data = Params::new();
        data.push("name", self.name.as_str())
            .push_opt("number", self.number.as_deref())
            .push_opt("bank_name", self.bank_name.as_deref())
            .push_opt("bank_code", self.bank_code.as_deref())
            .push_opt("initial_amount", self.initial_amount)
            .push_opt("initial_amount_date", self.initial_amount_date.as_deref())
            .push_opt("legal_entity", self.legal_entity)
            .push_opt("type", self.r#type)
            .push_opt("correspondent_account", self.correspondent_account.as_deref())
            .push_opt("is_acquiring_enabled", self.is_acquiring_enabled)
            .push_opt("commission_category", self.commission_category)
            .push_opt("refund_category", self.refund_category)
            .push_opt("category", self.category);
        Ok(data)
    }
}

/// Bank and cash accounts.
#[derive(Debug, Clone, Copy)]
pub struct BankAccounts<'a> {
    client: &'a AdeskClient,
}

impl<'a> BankAccounts<'a> {
    pub(crate) fn new(client: &'a AdeskClient) -> Self {
        Self { client }
    }

    pub fn list(&self, filter: &BankAccountFilter) -> Result<Vec<BankAccount>, AdeskError> {
        debug!("bank_accounts.list");
        let response = self.client.get("bank-accounts", filter.to_params())?;
        Ok(unwrap_list(response, "bankAccounts"))
    }

    pub fn get(&self, bank_account_id: i64) -> Result<Option<BankAccount>, AdeskError> {
        require_id("bank_account_id", bank_account_id)?;
        debug!("bank_accounts.get bank_account_id={}", bank_account_id);
        let response = self
            .client
            .get(&format!("bank-account/{bank_account_id}"), Params::new())?;
        Ok(unwrap_one(response, "bankAccount"))
    }

    pub fn create(&self, account: &NewBankAccount) -> Result<Option<BankAccount>, AdeskError> {
        let data = account.to_params()?;
        debug!("bank_accounts.create fields={}", data.len());
        let response = self.client.post("bank-account", data, Params::new())?;
        Ok(unwrap_one(response, "bankAccount"))
    }

    pub fn update(
        &self,
        bank_account_id: i64,
        update: &BankAccountUpdate,
    ) -> Result<Option<Value>, AdeskError> {
        require_id("bank_account_id", bank_account_id)?;
        let data = update.to_params()?;
        debug!("bank_accounts.update bank_account_id={}", bank_account_id);
        self.client
            .post(&format!("bank-account/{bank_account_id}"), data, Params::new())
    }

    pub fn delete(&self, bank_account_id: i64) -> Result<Option<Value>, AdeskError> {
        require_id("bank_account_id", bank_account_id)?;
        debug!("bank_accounts.delete bank_account_id={}", bank_account_id);
        self.client.post(
            &format!("bank-account/{bank_account_id}/remove"),
            Params::new(),
            Params::new(),
        )
    }
}
