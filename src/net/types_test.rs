use super::*;

use crate::state::session::{Tokens, UserProfile};

#[test]
fn tokens_deserialize_without_refresh_token() {
    let tokens: Tokens = serde_json::from_value(serde_json::json!({
        "access_token": "a",
        "token_type": "bearer"
    }))
    .expect("tokens");
    assert_eq!(tokens.access_token, "a");
    assert!(tokens.refresh_token.is_empty());
}

#[test]
fn user_profile_uses_backend_field_names() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "email": "jo@example.com",
        "fullName": "Jo Bird",
        "is_active": true,
        "is_superuser": false,
        "latitude": 41.39
    }))
    .expect("profile");
    assert_eq!(profile.full_name, "Jo Bird");
    assert!(profile.is_active);
    assert_eq!(profile.latitude, Some(41.39));
    assert_eq!(profile.longitude, None);
}

#[test]
fn user_update_skips_unset_fields() {
    let update = UserUpdate {
        full_name: Some("Jo".to_owned()),
        ..UserUpdate::default()
    };
    let value = serde_json::to_value(&update).expect("json");
    assert_eq!(value, serde_json::json!({ "fullName": "Jo" }));
}

#[test]
fn observation_map_tolerates_sparse_payloads() {
    let map: ObservationMap = serde_json::from_value(serde_json::json!({
        "observations": [
            { "species": "Fieldfare", "lat": 59.3, "lon": 18.1 },
            {}
        ]
    }))
    .expect("map");
    assert_eq!(map.observations.len(), 2);
    assert_eq!(map.observations[0].species.as_deref(), Some("Fieldfare"));
    assert!(map.error.is_none());
}

#[test]
fn search_results_carry_per_source_errors() {
    let results: SearchResults = serde_json::from_value(serde_json::json!({
        "ebird": [],
        "local": [
            {
                "id": "obs-1",
                "species": "White Stork",
                "confidence": 0.93,
                "user_name": "Jo Bird",
                "timestamp": "2026-08-01T10:00:00",
                "lat": 40.4,
                "lon": -3.7,
                "image": "data:image/jpeg;base64,AAAA"
            }
        ],
        "region_code": "ES",
        "ebird_error": "eBird API unavailable"
    }))
    .expect("results");
    assert_eq!(results.region_code, "ES");
    assert_eq!(results.ebird_error.as_deref(), Some("eBird API unavailable"));
    assert!(results.local_error.is_none());
    assert_eq!(results.local.len(), 1);
    assert_eq!(results.local[0].species, "White Stork");
    assert!(results.local[0].image.starts_with("data:"));
}

#[test]
fn temporal_patterns_zero_observation_payload() {
    let patterns: TemporalPatterns = serde_json::from_value(serde_json::json!({
        "species": "dodo",
        "message": "No observations found in the specified period",
        "total_observations": 0,
        "data_sources_used": ["ebird"]
    }))
    .expect("patterns");
    assert_eq!(patterns.total_observations, 0);
    assert!(patterns.message.is_some());
    assert!(patterns.hourly_distribution.is_empty());
    assert!(patterns.habitat_correlation.is_none());
    assert_eq!(patterns.recommendations, Recommendations::default());
}

#[test]
fn temporal_patterns_full_payload() {
    let patterns: TemporalPatterns = serde_json::from_value(serde_json::json!({
        "species": "Blue Jay",
        "period": "2026-06-01 to 2026-08-01",
        "total_observations": 120,
        "data_sources_used": ["ebird", "local_db"],
        "best_observation_times": { "hour": "07:00", "day_of_week": "Saturday", "month": "June" },
        "hourly_distribution": { "07:00": 40.0, "08:00": 25.5 },
        "weekly_distribution": { "Saturday": 30.0 },
        "seasonal_distribution": { "June": 80.0 },
        "habitat_correlation": { "primary_habitat": "Forest", "analysis": "Peak activity matches forest species behavior (early morning)" },
        "species_behavior": { "diet": "Omnivore", "habitat": "Forest" },
        "recommendations": { "optimal_time": "Saturday at 07:00", "activity_level": "High", "confidence": "High" },
        "data_quality": { "observation_count": 120, "unique_locations": 14, "date_range_days": 60, "external_apis_used": true }
    }))
    .expect("patterns");
    assert_eq!(patterns.best_observation_times.hour, "07:00");
    assert_eq!(patterns.hourly_distribution.get("07:00"), Some(&40.0));
    assert_eq!(
        patterns.habitat_correlation.as_ref().map(|h| h.primary_habitat.as_str()),
        Some("Forest")
    );
    assert_eq!(patterns.recommendations.activity_level, "High");
    assert!(patterns.recommendations.tip.is_none());
    assert_eq!(patterns.data_quality.unique_locations, 14);
}

#[test]
fn login_log_listing_deserializes() {
    let logs: Vec<LoginLog> = serde_json::from_value(serde_json::json!([
        { "id": "l-1", "email": "jo@example.com", "success": true, "timestamp": "2026-08-02T08:00:00" },
        { "id": "l-2", "email": "intruder@example.com", "success": false, "timestamp": "2026-08-02T08:05:00" }
    ]))
    .expect("logs");
    assert_eq!(logs.len(), 2);
    assert!(logs[0].success);
    assert!(!logs[1].success);
}

#[test]
fn etl_provider_path_segments() {
    assert_eq!(EtlProvider::Ebird.as_str(), "ebird");
    assert_eq!(EtlProvider::ALL.len(), 4);
}
