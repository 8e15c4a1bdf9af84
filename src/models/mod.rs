pub mod disease;
pub mod patient;
pub mod prescription;

pub use disease::*;
pub use patient::*;
pub use prescription::*;
