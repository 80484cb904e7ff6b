pub mod animated_logger;
pub mod table_logger;
