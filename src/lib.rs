// Library for tests to access modules

pub mod config;
pub mod inventory;
pub mod mock;
pub mod models;
pub mod normalize;
pub mod routes;
pub mod secrets_repo;
pub mod vendor_repo;
pub mod version;
