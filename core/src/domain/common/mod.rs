use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::reservation::value_objects::ReservationPolicy;

pub mod entities;
pub mod labels;
pub mod services;

#[derive(Clone, Debug)]
pub struct DineSureConfig {
    pub database: DatabaseConfig,
    pub overpass: OverpassConfig,
    pub reservations: ReservationPolicy,
    pub mail: MailConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

/// Bounding box and endpoint used when importing restaurants from OpenStreetMap.
#[derive(Clone, Debug)]
pub struct OverpassConfig {
    pub endpoint: String,
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
    pub timeout_seconds: u64,
    pub city: String,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub sender: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
