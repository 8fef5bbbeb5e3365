//! Engine configuration and state

pub mod config;
pub mod state;

pub use config::{CoreConfig, TableSpec};
pub use state::{SalesLog, TableStore};
