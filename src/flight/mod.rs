// Flight-level merge and summary derivation

pub mod aggregate;

pub use aggregate::{FlightAggregate, aggregate, classify_status, distinct};
