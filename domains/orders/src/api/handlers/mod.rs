//! Orders domain API handlers, one module per party

pub mod admin;
pub mod customer;
pub mod delivery;
pub mod restaurant;
