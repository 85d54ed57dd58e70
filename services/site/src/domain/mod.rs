pub mod filename;
pub mod repository;
pub mod types;
