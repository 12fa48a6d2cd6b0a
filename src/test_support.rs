//! Recording gateway stubs shared by the unit tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::geocoding::LocationGateway;
use crate::models::{Coordinates, WeatherReading};
use crate::weather::WeatherGateway;
use crate::{Result, TemperatureError};

#[derive(Debug, Clone, Copy)]
pub enum LocationReply {
    Found(&'static str),
    NotFound,
    Fails,
}

pub struct StubLocationGateway {
    reply: LocationReply,
    calls: Mutex<Vec<String>>,
}

impl StubLocationGateway {
    pub fn new(reply: LocationReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LocationGateway for StubLocationGateway {
    async fn resolve(&self, postal_code: &str) -> Result<Option<Coordinates>> {
        self.calls.lock().unwrap().push(postal_code.to_string());
        match self.reply {
            LocationReply::Found(coordinates) => Ok(Some(Coordinates::new(coordinates))),
            LocationReply::NotFound => Ok(None),
            LocationReply::Fails => Err(TemperatureError::upstream(
                "stub-location",
                502,
                "bad gateway",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum WeatherReply {
    Reading(WeatherReading),
    Fails,
}

pub struct StubWeatherGateway {
    reply: WeatherReply,
    calls: Mutex<Vec<String>>,
}

impl StubWeatherGateway {
    pub fn new(reply: WeatherReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherGateway for StubWeatherGateway {
    async fn get_temperature(&self, coordinates: &Coordinates) -> Result<WeatherReading> {
        self.calls.lock().unwrap().push(coordinates.to_string());
        match self.reply {
            WeatherReply::Reading(reading) => Ok(reading),
            WeatherReply::Fails => Err(TemperatureError::upstream(
                "stub-weather",
                503,
                "unavailable",
            )),
        }
    }
}
