//! Fixture factory
//!
//! Default-filled banking records used as request payloads. Every function
//! here is pure: callers supply optional overrides and get a complete record.

mod factory;
mod types;

pub use factory::{create_bank_account, create_bank_customer};
pub use types::{AccountOverrides, AccountType, Address, BankAccount, BankCustomer, CustomerOverrides};
