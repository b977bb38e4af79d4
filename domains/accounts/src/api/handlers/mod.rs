//! Accounts domain API handlers

pub mod sessions;
