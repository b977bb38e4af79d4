//! API layer for the Accounts domain

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::routes;
pub use state::AccountsState;
