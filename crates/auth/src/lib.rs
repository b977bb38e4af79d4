//! Authentication core for the Dishpatch API
//!
//! Provides token issuance and verification, the per-request session
//! pipeline (Extract → Verify → Resolve), the role gate, and axum
//! extractors that work with any state implementing `FromRef<S>` for
//! `Authenticator` and `RoutePolicy`.

mod claims;
mod config;
mod error;
mod extractors;
mod pipeline;
mod policy;
mod roles;
mod store;
pub mod tokens;

pub use claims::TokenClaims;
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::{AuthUser, Authorized, RefreshUser};
pub use pipeline::{Authenticator, TokenClass};
pub use policy::RoutePolicy;
pub use roles::Role;
pub use store::{CredentialStore, MemoryCredentialStore, PgCredentialStore, Principal, StoredPrincipal};
pub use tokens::TokenPair;
