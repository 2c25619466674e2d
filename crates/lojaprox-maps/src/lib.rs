//! Client and lookup pipeline for the Google Maps web services used by
//! Loja Próxima: geocoding, places nearby-search, distance-matrix, and
//! place details, plus the nearest-store ranking built on top of them.

pub mod client;
pub mod error;
pub mod lookup;
pub mod route;
pub mod types;

pub use client::MapsClient;
pub use error::MapsError;
pub use lookup::LookupError;
