pub mod api_client;
pub mod appointments;
pub mod auth_context;
pub mod course_catalog;
pub mod lead_list;
pub mod rate_limiter;
pub mod report_exporter;
pub mod reschedule_flow;
pub mod session_list;
pub mod slot_decoder;
pub mod slot_fetcher;
pub mod starting_soon;
pub mod transaction_list;
