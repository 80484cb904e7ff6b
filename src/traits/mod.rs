pub mod backend;
pub mod searchable;
