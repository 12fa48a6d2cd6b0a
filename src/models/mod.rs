//! Data models for the temperatures service
//!
//! - Location: location classification and resolved coordinates
//! - Weather: use case input, provider reading and lookup output

pub mod location;
pub mod weather;

pub use location::{Coordinates, LocationKind};
pub use weather::{GetWeatherInput, WeatherOutput, WeatherReading};
