//! Wire and configuration models used at the crate boundaries.

pub mod client;
pub mod config;
