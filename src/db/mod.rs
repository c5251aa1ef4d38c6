// src/db/mod.rs
// DOCUMENTATION: Storage module organization
// PURPOSE: Re-export storage engines and the request session

pub mod db_storage;
pub mod file_storage;
pub mod session;
pub mod storage;

pub use db_storage::*;
pub use file_storage::*;
pub use session::*;
pub use storage::*;
