//! Banking test flows
//!
//! Each flow issues its requests, asserts the expected statuses, logs the
//! decoded bodies as test data, optionally records response interfaces, and
//! ends with a performance section.

use super::orchestrator::{Exchange, Scenario};
use crate::error::{Error, Result};
use crate::fixtures::{create_bank_account, BankAccount, BankCustomer};
use crate::types::Method;
use serde_json::Value;

/// Suite file for the customer-only flow
pub const CUSTOMER_SUITE: &str = "bankCustomer";

/// Suite file for flows that also create accounts
pub const ACCOUNT_SUITE: &str = "bankAccount";

/// Outcome of a completed flow
#[derive(Debug, Clone)]
pub struct FlowReport {
    /// Exchanges in the order they were issued
    pub exchanges: Vec<Exchange>,
}

impl FlowReport {
    /// Sum of all response times
    pub fn total_response_ms(&self) -> f64 {
        self.exchanges.iter().map(Exchange::response_ms).sum()
    }

    /// Body of the n-th exchange
    pub fn body(&self, index: usize) -> Option<&Value> {
        self.exchanges.get(index).map(Exchange::body)
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// POST `/customers` and expect 201
pub async fn create_customer(scenario: &Scenario, customer: &BankCustomer) -> Result<FlowReport> {
    let payload = to_value(customer)?;
    scenario.logger().log_test_data(&payload)?;

    let exchange = scenario
        .exchange(Method::POST, "/customers", Some(payload))
        .await?;
    scenario.record_interface(exchange.body(), "CustomerResponse", CUSTOMER_SUITE)?;
    exchange.expect_status(201)?;

    let report = FlowReport {
        exchanges: vec![exchange],
    };
    scenario.finish(report.total_response_ms())?;
    Ok(report)
}

/// POST `/customers` (201), then POST `/accounts` (201)
pub async fn create_customer_then_account(
    scenario: &Scenario,
    customer: &BankCustomer,
    account: &BankAccount,
) -> Result<FlowReport> {
    let customer_exchange = scenario
        .exchange(Method::POST, "/customers", Some(to_value(customer)?))
        .await?;
    customer_exchange.expect_status(201)?;
    scenario.logger().log_test_data(customer_exchange.body())?;
    scenario.record_interface(customer_exchange.body(), "CustomerResponse", ACCOUNT_SUITE)?;

    let account_exchange = scenario
        .exchange(Method::POST, "/accounts", Some(to_value(account)?))
        .await?;
    account_exchange.expect_status(201)?;
    scenario.logger().log_test_data(account_exchange.body())?;
    scenario.record_interface(account_exchange.body(), "BankAccountResponse", ACCOUNT_SUITE)?;

    let report = FlowReport {
        exchanges: vec![customer_exchange, account_exchange],
    };
    scenario.finish(report.total_response_ms())?;
    Ok(report)
}

/// GET `/customers/{id}` (200), then POST `/accounts` (201) for that customer
pub async fn get_customer_then_create_account(
    scenario: &Scenario,
    customer_id: u64,
) -> Result<FlowReport> {
    let customer_exchange = scenario
        .exchange(Method::GET, &format!("/customers/{customer_id}"), None)
        .await?;
    customer_exchange.expect_status(200)?;
    scenario.logger().log_test_data(customer_exchange.body())?;
    scenario.record_interface(
        customer_exchange.body(),
        "ExistingCustomerResponse",
        ACCOUNT_SUITE,
    )?;

    let existing_id = customer_exchange.body()["id"].as_u64().ok_or_else(|| {
        Error::assertion(format!(
            "customer response has no numeric id: {}",
            customer_exchange.body()
        ))
    })?;

    let account = create_bank_account(existing_id, None);
    let account_exchange = scenario
        .exchange(Method::POST, "/accounts", Some(to_value(&account)?))
        .await?;
    account_exchange.expect_status(201)?;
    scenario.logger().log_test_data(account_exchange.body())?;
    scenario.record_interface(account_exchange.body(), "BankAccountResponse", ACCOUNT_SUITE)?;

    let report = FlowReport {
        exchanges: vec![customer_exchange, account_exchange],
    };
    scenario.finish(report.total_response_ms())?;
    Ok(report)
}
