//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: token setup → fixtures → mocked exchanges →
//! run logs and generated interface files

use bank_api_harness::auth::{AuthContext, OAuthCredentials, TokenClient, TokenStore};
use bank_api_harness::config::HarnessConfig;
use bank_api_harness::fixtures::{create_bank_account, create_bank_customer, BankCustomer};
use bank_api_harness::output::{InterfaceWriter, WriteOutcome};
use bank_api_harness::scenario::{flows, Scenario};
use bank_api_harness::Error;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::path::Path;
use tempfile::tempdir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn harness_config(server: &MockServer, dir: &Path) -> HarnessConfig {
    HarnessConfig {
        base_url: Some(server.uri()),
        generate_interfaces: true,
        log_root: dir.join("logs"),
        interface_root: dir.join("generatedInterfaces"),
        ..HarnessConfig::default()
    }
}

fn customer_response(id: u64, customer: &BankCustomer) -> Value {
    let mut body = json!({ "id": id });
    let fields = serde_json::to_value(customer).unwrap();
    for (key, value) in fields.as_object().unwrap() {
        body[key] = value.clone();
    }
    body
}

async fn mount_once(server: &MockServer, verb: &str, route: &str, status: u16, body: Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .up_to_n_times(1)
        .mount(server)
        .await;
}

fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path).unwrap()
}

// ============================================================================
// Setup Phase
// ============================================================================

#[tokio::test]
async fn test_token_setup_then_authorized_request() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_json(json!({
            "client_id": "your-client-id",
            "client_secret": "your-client-secret",
            "grant_type": "client_credentials"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "live-token"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/customers/123"))
        .and(header("Authorization", "Bearer live-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 123})))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = OAuthCredentials {
        token_url: format!("{}/oauth/token", server.uri()),
        ..OAuthCredentials::default()
    };
    let context = TokenClient::new().fetch_token(&credentials).await.unwrap();

    // Persist and reload, as the CLI's token and run phases do
    let store = TokenStore::new(dir.path().join("token.txt"));
    store.save(&context).unwrap();
    let reloaded = store.load().unwrap();
    assert_eq!(reloaded, AuthContext::new("live-token"));

    let config = harness_config(&server, dir.path());
    let scenario = Scenario::new(&config, Some(&reloaded), "authorized lookup").unwrap();
    let exchange = scenario
        .exchange(bank_api_harness::Method::GET, "/customers/123", None)
        .await
        .unwrap();
    exchange.expect_status(200).unwrap();

    let log = read(scenario.logger().log_file());
    assert!(log.contains("\"Authorization\": \"Bearer live-token\""));
}

#[tokio::test]
async fn test_token_setup_failure_aborts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let credentials = OAuthCredentials {
        token_url: format!("{}/oauth/token", server.uri()),
        ..OAuthCredentials::default()
    };
    let err = TokenClient::new().fetch_token(&credentials).await.unwrap_err();

    assert!(err.is_setup_failure());
    assert_eq!(err.to_string(), "Failed to get OAuth token: 403");
}

// ============================================================================
// Bank Customer API Tests
// ============================================================================

#[tokio::test]
async fn test_should_create_a_new_bank_customer_and_log_details() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let config = harness_config(&server, dir.path());
    let customer = create_bank_customer(None);
    let response_body = customer_response(123, &customer);

    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_json(serde_json::to_value(&customer).unwrap()))
        .respond_with(ResponseTemplate::new(201).set_body_json(response_body.clone()))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthContext::new("some-token");
    let scenario = Scenario::new(
        &config,
        Some(&auth),
        "should create a new bank customer and log details",
    )
    .unwrap();
    let report = flows::create_customer(&scenario, &customer).await.unwrap();

    assert_eq!(report.exchanges[0].status(), 201);
    assert_eq!(report.exchanges[0].body(), &response_body);
    assert_eq!(
        report.exchanges[0].request.body,
        serde_json::to_value(&customer).unwrap()
    );

    let log = read(
        dir.path()
            .join("logs")
            .join("should create a new bank customer and log details")
            .join("log.txt"),
    );
    assert!(log.starts_with("### Test Data ###\n{\n  \"firstName\": \"John\","));
    assert!(log.contains("Method: POST\nURL: /customers\n"));
    assert!(log.contains("Status: 201\n"));
    assert!(log.contains("\"id\": 123"));
    assert!(log.contains("Test Execution Time: "));

    let interfaces = read(dir.path().join("generatedInterfaces").join("bankCustomer.ts"));
    assert_eq!(
        interfaces,
        "interface CustomerResponse {\n  id: number;\n  firstName: string;\n  lastName: string;\n  email: string;\n  phone: string;\n  address: object;\n  dateOfBirth: string;\n  accountType: string;\n  balance: number;\n}\n\n"
    );
}

#[tokio::test]
async fn test_customer_interface_written_once_across_runs() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let config = harness_config(&server, dir.path());
    let customer = create_bank_customer(None);
    let interface_file = dir.path().join("generatedInterfaces").join("bankCustomer.ts");

    let mut snapshots = Vec::new();
    for run in 0..2 {
        mount_once(&server, "POST", "/customers", 201, customer_response(123 + run, &customer)).await;
        let scenario = Scenario::new(&config, None, "repeat run").unwrap();
        flows::create_customer(&scenario, &customer).await.unwrap();
        snapshots.push(read(&interface_file));
    }

    assert_eq!(snapshots[0], snapshots[1]);
    assert_eq!(snapshots[1].matches("interface CustomerResponse {").count(), 1);

    // Both runs appended to the same case log
    let log = read(dir.path().join("logs").join("repeat run").join("log.txt"));
    assert_eq!(log.matches("### Performance Data ###").count(), 2);
}

// ============================================================================
// Bank Account API Tests
// ============================================================================

#[tokio::test]
async fn test_should_create_a_bank_customer_and_then_create_a_bank_account() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let config = harness_config(&server, dir.path());
    let customer = create_bank_customer(None);
    let account = create_bank_account(123, None);

    mount_once(&server, "POST", "/customers", 201, customer_response(123, &customer)).await;
    mount_once(
        &server,
        "POST",
        "/accounts",
        201,
        serde_json::to_value(&account).unwrap(),
    )
    .await;

    let scenario = Scenario::new(
        &config,
        None,
        "should create a bank customer and then create a bank account",
    )
    .unwrap();
    let report = flows::create_customer_then_account(&scenario, &customer, &account)
        .await
        .unwrap();

    assert_eq!(report.exchanges.len(), 2);
    assert_eq!(report.body(1).unwrap()["customerId"], 123);
    assert_eq!(report.body(1).unwrap()["accountNumber"], "ACC123456789");

    let log = read(scenario.logger().log_file());
    let labels: Vec<&str> = log.lines().filter(|l| l.starts_with("### ")).collect();
    assert_eq!(
        labels,
        vec![
            "### Request ###",
            "### Response ###",
            "### Test Data ###",
            "### Request ###",
            "### Response ###",
            "### Test Data ###",
            "### Performance Data ###",
        ]
    );

    let interfaces = read(dir.path().join("generatedInterfaces").join("bankAccount.ts"));
    assert!(interfaces.contains("interface CustomerResponse {"));
    assert!(interfaces.contains(
        "interface BankAccountResponse {\n  accountType: string;\n  accountNumber: string;\n  balance: number;\n  customerId: number;\n}\n"
    ));
}

#[tokio::test]
async fn test_should_get_an_existing_bank_customer_and_create_a_bank_account() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let config = harness_config(&server, dir.path());
    let customer = create_bank_customer(None);

    mount_once(&server, "GET", "/customers/123", 200, customer_response(123, &customer)).await;

    let mut account_body = serde_json::to_value(create_bank_account(123, None)).unwrap();
    account_body["customerId"] = json!(123);
    Mock::given(method("POST"))
        .and(path("/accounts"))
        .and(body_json(serde_json::to_value(create_bank_account(123, None)).unwrap()))
        .respond_with(ResponseTemplate::new(201).set_body_json(account_body))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    let scenario = Scenario::new(
        &config,
        None,
        "should get an existing bank customer and create a bank account",
    )
    .unwrap();
    let report = flows::get_customer_then_create_account(&scenario, 123)
        .await
        .unwrap();

    assert_eq!(report.exchanges[0].status(), 200);
    assert_eq!(report.exchanges[0].request.body, Value::Null);
    assert_eq!(report.exchanges[1].status(), 201);

    let interfaces = read(dir.path().join("generatedInterfaces").join("bankAccount.ts"));
    assert!(interfaces.contains("interface ExistingCustomerResponse {"));
    assert!(interfaces.contains("interface BankAccountResponse {"));
}

#[tokio::test]
async fn test_account_flow_stops_at_first_unexpected_status() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let config = harness_config(&server, dir.path());
    let customer = create_bank_customer(None);

    mount_once(&server, "POST", "/customers", 409, json!({"error": "duplicate"})).await;
    Mock::given(method("POST"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let scenario = Scenario::new(&config, None, "conflict").unwrap();
    let result =
        flows::create_customer_then_account(&scenario, &customer, &create_bank_account(1, None))
            .await;

    match result {
        Err(Error::UnexpectedStatus {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 201);
            assert_eq!(actual, 409);
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!dir.path().join("generatedInterfaces").join("bankAccount.ts").exists());
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_cases_share_suite_file_safely() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let config = harness_config(&server, dir.path());
    let customer = create_bank_customer(None);

    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(201).set_body_json(customer_response(1, &customer)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/accounts"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::to_value(create_bank_account(1, None)).unwrap()),
        )
        .mount(&server)
        .await;

    let mut handles = Vec::new();
    for i in 0..6 {
        let config = config.clone();
        let customer = customer.clone();
        handles.push(tokio::spawn(async move {
            let scenario = Scenario::new(&config, None, &format!("parallel case {i}")).unwrap();
            flows::create_customer_then_account(&scenario, &customer, &create_bank_account(1, None))
                .await
                .map(|_| ())
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let interfaces = read(dir.path().join("generatedInterfaces").join("bankAccount.ts"));
    assert_eq!(interfaces.matches("interface CustomerResponse {").count(), 1);
    assert_eq!(interfaces.matches("interface BankAccountResponse {").count(), 1);

    for i in 0..6 {
        assert!(dir
            .path()
            .join("logs")
            .join(format!("parallel case {i}"))
            .join("log.txt")
            .is_file());
    }
}

// ============================================================================
// Interface Writer
// ============================================================================

#[test]
fn test_interface_writer_sample_payload() {
    let dir = tempdir().unwrap();
    let writer = InterfaceWriter::new(dir.path());

    let outcome = writer
        .write_declaration(
            &json!({"a": 1, "b": "x", "c": [1, 2, 3], "d": null, "e": {"f": true}, "g": []}),
            "Sample",
            "samples",
        )
        .unwrap();

    assert_eq!(outcome, WriteOutcome::Written);
    assert_eq!(
        read(writer.path_for_suite("samples")),
        "interface Sample {\n  a: number;\n  b: string;\n  c: number[];\n  d: any;\n  e: object;\n  g: any[];\n}\n\n"
    );
}
