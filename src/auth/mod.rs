//! Authentication module
//!
//! OAuth2 client-credentials token acquisition for the setup phase.
//!
//! The `TokenClient` fetches a bearer token once; the resulting
//! `AuthContext` is passed explicitly into later phases. `TokenStore`
//! persists the token as plain text for runs split across processes.

mod authenticator;
mod store;
mod types;

pub use authenticator::TokenClient;
pub use store::TokenStore;
pub use types::{AuthContext, OAuthCredentials};
