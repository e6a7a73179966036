//! feedlog-file - Filesystem-backed feeding record gateway.

mod gateway;
mod store;

pub use gateway::FileGateway;
pub use store::FileStore;
