pub mod aggregate;
pub mod domain;
pub mod error;
pub mod query;
pub mod resolve;
pub mod store;

// Re-export commonly used types
pub use domain::*;
pub use error::*;
pub use store::FixtureStore;

// Re-export external dependencies that consumers will need
pub use chrono;
pub use serde;
