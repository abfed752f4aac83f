pub mod address;
pub mod person;

// Re-exports for convenience
pub use address::{Address, Sector};
pub use person::Person;
