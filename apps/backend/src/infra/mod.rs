//! Infrastructure layer - database, retries, state management, and error translation.

pub mod db;
pub mod db_errors;
pub mod retry;
pub mod state;
