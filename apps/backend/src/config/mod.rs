pub mod db;

pub use db::{db_url, DbKind, PoolSettings};
