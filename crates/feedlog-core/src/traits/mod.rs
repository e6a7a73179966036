//! Core traits for persistence gateways.

mod gateway;

pub use gateway::Gateway;
