pub mod api_error;
pub mod commands;
pub mod lead_status;
pub mod reschedule_state;
pub mod session_status;
pub mod transaction_status;
pub mod transaction_type;
pub mod user_type;
