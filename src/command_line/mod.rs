/// Argument parsing and the command handlers.
pub(crate) mod cli;

/// Errors that end a command, with their exit codes.
pub(crate) mod error;

/// Tracing subscriber setup.
pub(crate) mod logging;
