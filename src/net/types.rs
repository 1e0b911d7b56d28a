//! Wire types for the REST backend.
//!
//! Field names follow the backend schemas exactly; anything the backend may
//! omit is defaulted so a sparse payload still deserializes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use crate::net::http::ApiError;

/// Generic `{"msg": "..."}` acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Msg {
    pub msg: String,
}

/// Payload for `PUT /users/` (self-service profile update) and
/// `PUT /users/{id}` (admin edit). `original` carries the current password
/// when changing it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Payload for open registration, `POST /users/`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct UserRegister {
    pub email: String,
    pub password: String,
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Payload for the admin `POST /users/create`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct UserCreate {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
}

/// ETL providers the backend can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EtlProvider {
    Wildlife,
    Ninjas,
    Maps,
    Ebird,
}

impl EtlProvider {
    pub const ALL: [EtlProvider; 4] = [
        EtlProvider::Wildlife,
        EtlProvider::Ninjas,
        EtlProvider::Maps,
        EtlProvider::Ebird,
    ];

    /// Path segment used by `/etl/{provider}/...`.
    pub fn as_str(self) -> &'static str {
        match self {
            EtlProvider::Wildlife => "wildlife",
            EtlProvider::Ninjas => "ninjas",
            EtlProvider::Maps => "maps",
            EtlProvider::Ebird => "ebird",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EtlProvider::Wildlife => "Wildlife API",
            EtlProvider::Ninjas => "API Ninjas",
            EtlProvider::Maps => "OpenStreetMap",
            EtlProvider::Ebird => "eBird",
        }
    }
}

/// Body for `POST /etl/ebird/run`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EtlRunRequest {
    pub region_code: String,
    pub species: String,
    pub max_results: u32,
}

/// Acknowledgement of `POST /etl/{provider}/run`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct EtlStarted {
    #[serde(default)]
    pub message: String,
}

/// One stored ETL record from `GET /etl/{provider}/results`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct EtlRecord {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub fetched_at: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// One run summary from `GET /etl/{provider}/history`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct EtlHistoryEntry {
    #[serde(default)]
    pub fetched_at: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// One geocoded point in an `animal-to-map` response.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct MapPoint {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
}

/// Response of `GET /maps/animal-to-map`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct AnimalMap {
    #[serde(default)]
    pub animal_name: String,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub map_data: Vec<MapPoint>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One eBird sighting in an observations-map response.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Observation {
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub sci_name: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub how_many: Option<u32>,
    #[serde(default)]
    pub obs_id: Option<String>,
}

/// Response of `GET /maps/ebird-observations-map`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct ObservationMap {
    #[serde(default)]
    pub observations: Vec<Observation>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One community-submitted sighting in a country search result. The `image`
/// field is a ready-to-render data URL.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct LocalObservation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub image: String,
}

/// Response of `GET /observations/search`: eBird sightings plus community
/// uploads for one region. Each source fails independently, so the errors
/// ride alongside whatever data did arrive.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub ebird: Vec<Observation>,
    #[serde(default)]
    pub local: Vec<LocalObservation>,
    #[serde(default)]
    pub region_code: String,
    #[serde(default)]
    pub ebird_error: Option<String>,
    #[serde(default)]
    pub local_error: Option<String>,
}

/// One login attempt from the admin `GET /logs/` listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct LoginLog {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub timestamp: String,
}

/// Best-match identification from `POST /image-to-animal-info`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Identification {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub genus: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Peak sighting times from the temporal analysis.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct BestTimes {
    #[serde(default)]
    pub hour: String,
    #[serde(default)]
    pub day_of_week: String,
    #[serde(default)]
    pub month: String,
}

/// Habitat correlation block; present only when habitat data matched.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct HabitatCorrelation {
    #[serde(default)]
    pub primary_habitat: String,
    #[serde(default)]
    pub analysis: String,
}

/// Diet/habitat profile sourced from the wildlife providers.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct SpeciesBehavior {
    #[serde(default)]
    pub diet: String,
    #[serde(default)]
    pub habitat: String,
}

/// Observation-planning hints derived from the analysis.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub optimal_time: String,
    #[serde(default)]
    pub activity_level: String,
    #[serde(default)]
    pub confidence: String,
    #[serde(default)]
    pub tip: Option<String>,
}

/// Sample-size summary attached to the analysis.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct DataQuality {
    #[serde(default)]
    pub observation_count: u64,
    #[serde(default)]
    pub unique_locations: u64,
    #[serde(default)]
    pub date_range_days: u32,
    #[serde(default)]
    pub external_apis_used: bool,
}

/// Response of `GET /analytics/temporal-patterns`.
///
/// Distribution maps are keyed by display label (`"07:00"`, `"Monday"`,
/// `"June"`) with percentage values. A zero-observation response carries only
/// `species`, `message`, `total_observations`, and `data_sources_used`, so
/// everything else defaults.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct TemporalPatterns {
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub total_observations: u64,
    #[serde(default)]
    pub data_sources_used: Vec<String>,
    #[serde(default)]
    pub best_observation_times: BestTimes,
    #[serde(default)]
    pub hourly_distribution: HashMap<String, f64>,
    #[serde(default)]
    pub weekly_distribution: HashMap<String, f64>,
    #[serde(default)]
    pub seasonal_distribution: HashMap<String, f64>,
    #[serde(default)]
    pub habitat_correlation: Option<HabitatCorrelation>,
    #[serde(default)]
    pub species_behavior: Option<SpeciesBehavior>,
    #[serde(default)]
    pub recommendations: Recommendations,
    #[serde(default)]
    pub data_quality: DataQuality,
}

/// Deserialize a classified JSON value into a typed response.
pub fn from_value<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}
