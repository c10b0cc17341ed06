//! Scenario orchestration
//!
//! A `Scenario` owns everything one test case needs: the HTTP client, the
//! run logger and the interface writer. Flows in [`flows`] compose fixtures,
//! exchanges and assertions into the banking test cases.
//!
//! # Ordering
//!
//! Within a scenario every step is awaited in sequence: a mocked route must
//! be registered before the exchange it intercepts, and the request and
//! response are logged before the status is asserted.

pub mod flows;
mod orchestrator;

pub use flows::FlowReport;
pub use orchestrator::{Exchange, Scenario};
