//! Domain aggregates exposed by the gateway and the view-state controller.

pub mod client;
pub mod stats;
pub mod types;
