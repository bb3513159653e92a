pub mod app_state_builder;
pub mod auth_helper;
pub mod profile_test_fixtures;
pub mod stubs;
