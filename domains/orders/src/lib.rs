//! Orders domain: delivery routes gated by role
//!
//! Each party sees its own slice of an order's life: customers place
//! and list orders, couriers see their assignments, restaurants manage
//! their menu, admins see everything. The required roles per route live
//! in the policy table exported by [`route_policy`], populated at
//! startup — handlers carry no role annotations themselves.

pub mod api;

pub use api::routes;
pub use api::state::OrdersState;
pub use api::route_policy;
