pub mod patient;
pub mod prescription;

pub use patient::*;
pub use prescription::*;
