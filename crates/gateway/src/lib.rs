//! Dishpatch API gateway
//!
//! The gateway composes downstream subgraph services into one surface
//! for clients. It makes no authorization decision itself: the caller's
//! Authorization header is copied verbatim onto every downstream call,
//! and each downstream service runs its own session guard and role
//! gate.

mod error;
mod forward;
mod subgraph;

pub use error::GatewayError;
pub use forward::ForwardedCredentials;
pub use subgraph::{routes, SubgraphRegistry};
