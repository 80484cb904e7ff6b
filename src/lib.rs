//! Library behind the `arcdesk` command-line desk for sessions, leads, transactions and courses.

/// Config file loading and defaults.
pub mod config;
/// Status and type values shared with the backend and the CLI.
pub mod enums;
/// Operation-level errors and their user-facing messages.
pub mod errors;
/// Date and config path helpers.
pub mod helpers;
/// Terminal output: spinner and tables.
pub mod logger;
/// API client, auth and the list/flow controllers.
pub mod services;
/// Wire and config data types.
pub mod structs;
/// Seams for the backend and searchable rows.
pub mod traits;
/// Command dispatch for the binary.
pub mod workers;
