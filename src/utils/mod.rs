/// Relationship time accounting
pub mod datetime;
/// Inline keyboard builders
pub mod keyboard;
/// Structured logging helpers
pub mod logging;
