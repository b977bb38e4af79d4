//! API layer for the Orders domain

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{route_policy, routes};
pub use state::OrdersState;
