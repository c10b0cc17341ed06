//! CLI runner - executes commands

use crate::auth::{TokenClient, TokenStore};
use crate::cli::commands::{Cli, Commands};
use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::fixtures::{create_bank_account, create_bank_customer};
use crate::output::{InterfaceWriter, WriteOutcome};
use crate::scenario::{flows, Scenario};
use serde_json::Value;
use std::path::Path;
use tracing::{error, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        match &self.cli.command {
            Commands::Token => self.token(&config).await,
            Commands::Infer {
                input,
                name,
                suite,
                nested,
            } => self.infer(&config, input, name, suite, *nested),
            Commands::Run {
                customer_id,
                no_auth,
            } => self.run_flows(&config, *customer_id, *no_auth).await,
        }
    }

    /// Defaults or YAML file, then environment, then CLI flags
    fn load_config(&self) -> Result<HarnessConfig> {
        let base = match &self.cli.config {
            Some(path) => HarnessConfig::from_yaml_file(path)?,
            None => HarnessConfig::default(),
        };
        let mut config = base.apply_env(|key| std::env::var(key).ok())?;

        if let Some(url) = &self.cli.base_url {
            config.base_url = Some(url.clone());
        }
        if self.cli.generate_interfaces {
            config.generate_interfaces = true;
        }
        config.validate()?;
        Ok(config)
    }

    async fn token(&self, config: &HarnessConfig) -> Result<()> {
        let context = TokenClient::new().fetch_token(&config.oauth).await?;
        let store = TokenStore::new(&config.token_file);
        store.save(&context)?;
        println!("Token written to {}", store.path().display());
        Ok(())
    }

    fn infer(
        &self,
        config: &HarnessConfig,
        input: &Path,
        name: &str,
        suite: &str,
        nested: bool,
    ) -> Result<()> {
        let contents = std::fs::read_to_string(input).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {e}", input.display()),
            ))
        })?;
        let payload: Value = serde_json::from_str(&contents)?;

        let writer = InterfaceWriter::new(&config.interface_root)
            .with_extension(config.interface_extension.as_str())
            .with_nested_interfaces(nested || config.nested_interfaces);
        let path = writer.path_for_suite(suite);

        match writer.write_declaration(&payload, name, suite)? {
            WriteOutcome::Written => println!("Wrote interface {name} to {}", path.display()),
            WriteOutcome::Skipped => {
                println!("Interface {name} already exists in {}", path.display());
            }
        }
        Ok(())
    }

    async fn run_flows(&self, config: &HarnessConfig, customer_id: u64, no_auth: bool) -> Result<()> {
        let auth = if no_auth {
            None
        } else {
            Some(TokenStore::new(&config.token_file).load()?)
        };
        let auth = auth.as_ref();

        info!("Running flows against {}", config.resolved_base_url());

        let customer = create_bank_customer(None);
        let account = create_bank_account(customer_id, None);
        let mut failures = Vec::new();

        let scenario = Scenario::new(
            config,
            auth,
            "should create a new bank customer and log details",
        )?;
        if let Err(e) = flows::create_customer(&scenario, &customer).await {
            failures.push(report_failure(&scenario, e)?);
        }

        let scenario = Scenario::new(
            config,
            auth,
            "should create a bank customer and then create a bank account",
        )?;
        if let Err(e) = flows::create_customer_then_account(&scenario, &customer, &account).await {
            failures.push(report_failure(&scenario, e)?);
        }

        let scenario = Scenario::new(
            config,
            auth,
            "should get an existing bank customer and create a bank account",
        )?;
        if let Err(e) = flows::get_customer_then_create_account(&scenario, customer_id).await {
            failures.push(report_failure(&scenario, e)?);
        }

        if failures.is_empty() {
            println!("All 3 scenarios passed");
            Ok(())
        } else {
            Err(Error::Other(format!(
                "{} of 3 scenarios failed: {}",
                failures.len(),
                failures.join("; ")
            )))
        }
    }
}

/// Case failures are collected; anything else aborts the run
fn report_failure(scenario: &Scenario, err: Error) -> Result<String> {
    if !err.is_case_failure() {
        return Err(err);
    }
    error!("Scenario '{}' failed: {}", scenario.logger().case_name(), err);
    Ok(format!("{}: {err}", scenario.logger().case_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    fn runner() -> Runner {
        Runner::new(Cli::parse_from(["bank-api-harness", "token"]))
    }

    #[test]
    fn test_infer_missing_input_is_io_error() {
        let dir = tempdir().unwrap();
        let config = HarnessConfig {
            interface_root: dir.path().join("generated"),
            ..HarnessConfig::default()
        };
        let missing = dir.path().join("missing.json");

        let err = runner()
            .infer(&config, &missing, "Sample", "sample", false)
            .unwrap_err();

        match err {
            Error::Io(io) => {
                assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
                assert!(io.to_string().contains("missing.json"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_infer_writes_suite_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("payload.json");
        std::fs::write(&input, r#"{"id": 1, "name": "x"}"#).unwrap();
        let config = HarnessConfig {
            interface_root: dir.path().join("generated"),
            ..HarnessConfig::default()
        };

        runner()
            .infer(&config, &input, "Sample", "sample", false)
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join("generated/sample.ts")).unwrap();
        assert!(written.starts_with("interface Sample {\n  id: number;\n  name: string;\n}\n"));
    }
}
