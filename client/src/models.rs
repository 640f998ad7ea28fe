// Wire types for the attractions service responses

use serde::Deserialize;

/// An attraction row as served by the API, like count included
#[derive(Debug, Clone, Deserialize)]
pub struct Attraction {
    pub id: i32,
    pub name: String,
    pub detail: String,
    pub coverimage: String,
    pub latitude: f64,
    pub longitude: f64,
    pub likes: i64,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Acknowledgment returned by POST /attractions/{id}/like
#[derive(Debug, Deserialize)]
pub struct LikeAck {
    pub message: String,
    pub ok: bool,
    pub likes: i64,
}

/// Acknowledgment returned by DELETE /attractions/{id}/like
#[derive(Debug, Deserialize)]
pub struct UnlikeAck {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_attraction_payload() {
        let payload = r#"{
            "id": 1,
            "name": "Grand Palace",
            "detail": "Royal residence",
            "coverimage": "https://example.com/palace.jpg",
            "latitude": 13.7563,
            "longitude": 100.5018,
            "likes": 4,
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;

        let attraction: Attraction = serde_json::from_str(payload).unwrap();
        assert_eq!(attraction.id, 1);
        assert_eq!(attraction.likes, 4);
        assert_eq!(attraction.coverimage, "https://example.com/palace.jpg");
    }

    #[test]
    fn decodes_like_ack() {
        let ack: LikeAck =
            serde_json::from_str(r#"{"message":"Like added","ok":true,"likes":2}"#).unwrap();
        assert!(ack.ok);
        assert_eq!(ack.likes, 2);
    }
}
