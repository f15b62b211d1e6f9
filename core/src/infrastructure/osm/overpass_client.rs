use std::{collections::HashMap, time::Duration};

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{
    common::{OverpassConfig, entities::app_errors::CoreError},
    restaurant::{ports::RestaurantImporter, value_objects::ImportedRestaurant},
};

const UNKNOWN_STREET: &str = "Unknown street";

/// Fetches `amenity=restaurant` elements inside a bounding box from the Overpass API.
#[derive(Debug, Clone)]
pub struct OverpassRestaurantImporter {
    config: OverpassConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    lat: Option<f64>,
    lon: Option<f64>,
    center: Option<Center>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct Center {
    lat: f64,
    lon: f64,
}

impl OverpassElement {
    fn tag(&self, key: &str) -> Option<String> {
        self.tags.get(key).cloned()
    }

    /// `contact:*` wins over the bare tag.
    fn contact(&self, key: &str) -> Option<String> {
        self.tag(&format!("contact:{}", key))
            .or_else(|| self.tag(key))
    }

    fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon, &self.center) {
            (Some(lat), Some(lon), _) => Some((lat, lon)),
            (_, _, Some(center)) => Some((center.lat, center.lon)),
            _ => None,
        }
    }

    fn into_imported(self, city: &str) -> Option<ImportedRestaurant> {
        let name = self.tag("name")?;
        let Some((latitude, longitude)) = self.coordinates() else {
            debug!("Skipping {} without coordinates", name);
            return None;
        };

        let street = self.tag("addr:street");
        let number = self.tag("addr:housenumber");
        let address = format!(
            "{} {}",
            street.as_deref().unwrap_or(UNKNOWN_STREET),
            number.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string();

        Some(ImportedRestaurant {
            phone: self.contact("phone"),
            email: self.contact("email"),
            website: self.contact("website"),
            name,
            street,
            number,
            address,
            city: city.to_string(),
            latitude,
            longitude,
        })
    }
}

impl OverpassRestaurantImporter {
    pub fn new(config: OverpassConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build Overpass HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self { config, client })
    }

    pub fn query(&self) -> String {
        let bbox = format!(
            "({},{},{},{})",
            self.config.south, self.config.west, self.config.north, self.config.east
        );
        let selectors: String = ["node", "way", "relation"]
            .iter()
            .map(|kind| format!("{}[\"amenity\"=\"restaurant\"]{};", kind, bbox))
            .collect();

        format!(
            "[out:json][timeout:{}];({});out center tags;",
            self.config.timeout_seconds, selectors
        )
    }

    fn parse(&self, body: &str) -> Result<Vec<ImportedRestaurant>, CoreError> {
        let response: OverpassResponse = serde_json::from_str(body).map_err(|e| {
            tracing::error!("Failed to parse Overpass response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse Overpass response: {}", e))
        })?;

        Ok(response
            .elements
            .into_iter()
            .filter_map(|element| element.into_imported(&self.config.city))
            .collect())
    }
}

impl RestaurantImporter for OverpassRestaurantImporter {
    async fn fetch_restaurants(&self) -> Result<Vec<ImportedRestaurant>, CoreError> {
        let url = format!(
            "{}?data={}",
            self.config.endpoint,
            urlencoding::encode(&self.query())
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Overpass API request failed: {}", e);
            if e.is_timeout() {
                CoreError::ServiceUnavailable("Overpass API request timed out".to_string())
            } else {
                CoreError::ServiceUnavailable(format!(
                    "Failed to fetch data from Overpass API: {}",
                    e
                ))
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Overpass API error: {} - {}", status, error_text);
            return Err(CoreError::ServiceUnavailable(format!(
                "Overpass API returned error: {}",
                status
            )));
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read Overpass response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to read Overpass response: {}", e))
        })?;

        self.parse(&body)
    }
}
