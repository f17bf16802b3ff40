mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from placeholders for tests
pub use placeholders::{Generator, GeneratorConfig, PLACEHOLDERS, PlaceholderError, RecordOutcome};
