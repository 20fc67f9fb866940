// Library for tests to access modules

pub mod config;
pub mod error;
pub mod flight;
pub mod flight_repo;
pub mod models;
pub mod routes;
pub mod telemetry;
pub mod version;
