//! Default-filled record construction

use super::types::{
    AccountOverrides, AccountType, Address, BankAccount, BankCustomer, CustomerOverrides,
};

fn default_address() -> Address {
    Address {
        street: "123 Main St".to_string(),
        city: "Cityville".to_string(),
        postal_code: "12345".to_string(),
        country: "Countryland".to_string(),
    }
}

/// Build a customer, taking each field from `overrides` when present
pub fn create_bank_customer(overrides: Option<CustomerOverrides>) -> BankCustomer {
    let o = overrides.unwrap_or_default();
    BankCustomer {
        first_name: o.first_name.unwrap_or_else(|| "John".to_string()),
        last_name: o.last_name.unwrap_or_else(|| "Doe".to_string()),
        email: o
            .email
            .unwrap_or_else(|| "john.doe@example.com".to_string()),
        phone: Some(o.phone.unwrap_or_else(|| "1234567890".to_string())),
        address: o.address.unwrap_or_else(default_address),
        date_of_birth: o.date_of_birth.unwrap_or_else(|| "1990-01-01".to_string()),
        account_type: o.account_type.unwrap_or(AccountType::Savings),
        balance: o.balance.unwrap_or(1000.0),
    }
}

/// Build an account bound to `customer_id`
pub fn create_bank_account(customer_id: u64, overrides: Option<AccountOverrides>) -> BankAccount {
    let o = overrides.unwrap_or_default();
    BankAccount {
        account_type: o.account_type.unwrap_or(AccountType::Savings),
        account_number: o
            .account_number
            .unwrap_or_else(|| "ACC123456789".to_string()),
        balance: o.balance.unwrap_or(0.0),
        customer_id,
    }
}
