//! Resource wrappers.
//!
//! Each wrapper borrows the client, checks required arguments locally,
//! assembles only the parameters the caller supplied, sends one request and
//! unwraps the fixed response key into models.
mod bank_accounts;
mod commitments;
mod contractors;
mod custom_reports;
mod operations;
mod projects;
mod tags;
mod warehouse;
mod webhooks;

pub use bank_accounts::{BankAccountFilter, BankAccountUpdate, BankAccounts, NewBankAccount};
pub use commitments::{
    CommitmentFilter, CommitmentProduct, CommitmentUpdate, Commitments, NewCommitment,
};
pub use contractors::{ContractorFilter, ContractorUpdate, Contractors, NewContractor};
pub use custom_reports::{
    CustomReportDebtEntries, CustomReportDebtEntryInput, CustomReportEntries,
    CustomReportEntryFilter, CustomReportEntryInput, CustomReportGroupFilter,
    CustomReportGroupInput, CustomReportGroups, CustomReportValueFilter, CustomReportValueInput,
    CustomReportValues,
};
pub use operations::{
    NewOperation, OperationFilter, OperationType, OperationUpdate, Operations, PeriodicEditType,
};
pub use projects::{NewProject, ProjectFilter, ProjectUpdate, Projects};
pub use tags::Tags;
pub use warehouse::{CommodityExpense, NewProduct, ProductType, ProductUpdate, Warehouse};
pub use webhooks::{WebhookInput, Webhooks};
