pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;
pub mod views;
