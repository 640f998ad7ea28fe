// API request/response models
use serde::Serialize;

use crate::entity::attraction;

/// Response structure for GET / (service banner)
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
    pub time: String,
    pub version: String,
}

/// Response structure for GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub db: bool,
}

/// Attraction data augmented with its like count
#[derive(Debug, Serialize)]
pub struct AttractionData {
    pub id: i32,
    pub name: String,
    pub detail: String,
    pub coverimage: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub likes: i64,
}

impl AttractionData {
    /// Builds the response row from an entity model and its like count
    pub fn from_model(model: attraction::Model, likes: i64) -> Self {
        AttractionData {
            id: model.id,
            name: model.name,
            detail: model.detail,
            coverimage: model.coverimage,
            latitude: model.latitude,
            longitude: model.longitude,
            created_at: model.created_at,
            likes,
        }
    }
}

/// Response body when a single attraction id matches no row.
/// `ok` is always false; callers are expected to check it, not the status.
#[derive(Debug, Serialize)]
pub struct AttractionNotFound {
    pub message: String,
    pub ok: bool,
}

impl AttractionNotFound {
    pub fn new(id: &str) -> Self {
        AttractionNotFound {
            message: format!("No attraction found with id: {}", id),
            ok: false,
        }
    }
}

/// Response structure for POST /attractions/{id}/like
#[derive(Debug, Serialize)]
pub struct LikeAddedResponse {
    pub message: String,
    pub ok: bool,
    pub likes: i64,
}

/// Response structure for DELETE /attractions/{id}/like
#[derive(Debug, Serialize)]
pub struct LikeRemovedResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_model() -> attraction::Model {
        attraction::Model {
            id: 1,
            name: "Grand Palace".to_string(),
            detail: "Royal residence".to_string(),
            coverimage: "https://example.com/palace.jpg".to_string(),
            latitude: 13.75,
            longitude: 100.49,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn attraction_data_keeps_wire_field_spellings() {
        let value = serde_json::to_value(AttractionData::from_model(sample_model(), 3)).unwrap();
        assert_eq!(value["coverimage"], "https://example.com/palace.jpg");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
        assert_eq!(value["likes"], 3);
    }

    #[test]
    fn not_found_payload_carries_ok_false() {
        let value = serde_json::to_value(AttractionNotFound::new("42")).unwrap();
        assert_eq!(value["message"], "No attraction found with id: 42");
        assert_eq!(value["ok"], false);
    }
}
