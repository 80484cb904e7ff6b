pub mod config_helper;
pub mod date_helper;
