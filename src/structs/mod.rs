pub mod api_envelope;
pub mod appointment_stats;
pub mod auth;
pub mod cli;
pub mod config;
pub mod course;
pub mod filtered_list;
pub mod lead;
pub mod session;
pub mod slot;
pub mod transaction;
pub mod user;
