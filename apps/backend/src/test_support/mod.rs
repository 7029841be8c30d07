//! Helpers shared by unit and integration tests.

pub mod app_builder;
pub mod gateway;

pub use app_builder::create_test_app;
pub use gateway::InMemoryGateway;
