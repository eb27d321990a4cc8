/// Command definitions and per-command handlers
pub mod commands;
/// Dispatch schema and message handlers
pub mod handlers;
