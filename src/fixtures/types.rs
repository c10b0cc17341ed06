//! Banking domain records
//!
//! Field names serialize in camelCase to match the service's JSON payloads.

use serde::{Deserialize, Serialize};

/// Kind of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Savings,
    Current,
}

/// Postal address of a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Customer payload sent to `/customers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub address: Address,
    pub date_of_birth: String,
    pub account_type: AccountType,
    pub balance: f64,
}

/// Account payload sent to `/accounts`
///
/// `customer_id` is a plain foreign-key value; nothing checks that the
/// customer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub account_type: AccountType,
    pub account_number: String,
    pub balance: f64,
    pub customer_id: u64,
}

/// Partial customer used to override factory defaults
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerOverrides {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub date_of_birth: Option<String>,
    pub account_type: Option<AccountType>,
    pub balance: Option<f64>,
}

/// Partial account used to override factory defaults
///
/// There is no `customer_id` here: the factory argument always wins.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountOverrides {
    pub account_type: Option<AccountType>,
    pub account_number: Option<String>,
    pub balance: Option<f64>,
}
