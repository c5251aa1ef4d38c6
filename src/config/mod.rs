// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Environment-driven settings and the Postgres pool used by the db engine

pub mod db;
pub mod env;

pub use db::init_db_pool;
pub use env::Config;
