pub mod config;
pub mod error;
pub mod routing;
pub mod store;
pub mod types;
