//! # Flight Domain
//!
//! Randomized flight generation and the static fare-class catalog. Both are
//! pure presentation stubs: no real schedules, no real pricing, and no
//! reproducibility requirement between runs.

pub mod fares;
pub mod generator;

pub use fares::{compute_price, FareClass, FareClassName, FARE_CLASSES, TAXES_AND_FEES};
pub use generator::{generate_flights, Airline, Flight, AIRLINES};
