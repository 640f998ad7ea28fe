use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::api::error::ApiClientError;
use crate::config::ClientConfig;
use crate::models::{Attraction, LikeAck, UnlikeAck};

/// Client for the attractions service
pub struct AttractionsClient {
    client: Client,
    api_url: String,
}

impl AttractionsClient {
    /// Create a new API client
    pub fn new(config: &ClientConfig) -> Result<Self, ApiClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                ApiClientError::ResponseError(format!("Failed to create HTTP client: {}", e))
            })?;
        let api_url = config.api_url.clone();

        Ok(AttractionsClient { client, api_url })
    }

    /// Fetch all attractions with their like counts
    pub async fn list_attractions(&self) -> Result<Vec<Attraction>, ApiClientError> {
        let url = format!("{}/attractions", self.api_url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiClientError::ApiError(format!(
                "API returned error status: {}",
                status
            )));
        }

        Ok(response.json::<Vec<Attraction>>().await?)
    }

    /// Fetch one attraction. Returns None for the service's `ok:false`
    /// "not found" payload, which is absence rather than failure.
    pub async fn get_attraction(&self, id: i32) -> Result<Option<Attraction>, ApiClientError> {
        let url = format!("{}/attractions/{}", self.api_url, id);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiClientError::ApiError(format!(
                "API returned error status: {}",
                status
            )));
        }

        let body = response.json::<Value>().await?;
        Self::decode_attraction(body)
    }

    /// Add one like and return the service's acknowledgment with the
    /// updated count
    pub async fn like(&self, id: i32) -> Result<LikeAck, ApiClientError> {
        let url = format!("{}/attractions/{}/like", self.api_url, id);

        let response = self.client.post(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiClientError::ApiError(format!(
                "API returned error status: {}",
                status
            )));
        }

        Ok(response.json::<LikeAck>().await?)
    }

    /// Remove one like. The service acknowledges whether or not a like
    /// row existed.
    pub async fn unlike(&self, id: i32) -> Result<UnlikeAck, ApiClientError> {
        let url = format!("{}/attractions/{}/like", self.api_url, id);

        let response = self.client.delete(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiClientError::ApiError(format!(
                "API returned error status: {}",
                status
            )));
        }

        Ok(response.json::<UnlikeAck>().await?)
    }

    /// Splits the single-attraction contract into absence and data:
    /// `{ok:false, ...}` decodes to None, anything else must be a full row.
    fn decode_attraction(body: Value) -> Result<Option<Attraction>, ApiClientError> {
        if body.get("ok").and_then(Value::as_bool) == Some(false) {
            return Ok(None);
        }

        let attraction = serde_json::from_value::<Attraction>(body)
            .map_err(|e| ApiClientError::ResponseError(format!("Error decoding response: {}", e)))?;

        Ok(Some(attraction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_false_payload_decodes_to_absence() {
        let body = json!({"message": "No attraction found with id: 42", "ok": false});
        let decoded = AttractionsClient::decode_attraction(body).unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn full_row_decodes_to_attraction() {
        let body = json!({
            "id": 1,
            "name": "Grand Palace",
            "detail": "Royal residence",
            "coverimage": "https://example.com/palace.jpg",
            "latitude": 13.7563,
            "longitude": 100.5018,
            "likes": 2,
            "createdAt": "2024-01-01T00:00:00Z"
        });
        let decoded = AttractionsClient::decode_attraction(body).unwrap().unwrap();
        assert_eq!(decoded.name, "Grand Palace");
        assert_eq!(decoded.likes, 2);
    }

    #[test]
    fn malformed_row_is_a_response_error() {
        let body = json!({"id": 1});
        let decoded = AttractionsClient::decode_attraction(body);
        assert!(matches!(decoded, Err(ApiClientError::ResponseError(_))));
    }
}
