// Public modules
pub mod defaults;
pub mod error;
pub mod identifier;
pub mod license;
pub mod paths;
pub mod project;
pub mod scaffold;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
