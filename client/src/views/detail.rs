// Detail view: full record plus a map link

use crate::models::Attraction;

/// Builds the external map link for an attraction's coordinates
pub fn maps_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps?q={},{}", latitude, longitude)
}

/// Renders the full detail view for one attraction
pub fn render_detail(attraction: &Attraction) -> String {
    format!(
        "{}\n\n{}\n\nCoordinates: {:.6}, {:.6}\nMap: {}\nLikes: {}",
        attraction.name,
        attraction.detail,
        attraction.latitude,
        attraction.longitude,
        maps_url(attraction.latitude, attraction.longitude),
        attraction.likes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> Attraction {
        Attraction {
            id: 1,
            name: "Grand Palace".to_string(),
            detail: "Royal residence in Bangkok.".to_string(),
            coverimage: "https://example.com/palace.jpg".to_string(),
            latitude: 13.7563,
            longitude: 100.5018,
            likes: 7,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn maps_url_embeds_raw_coordinates() {
        assert_eq!(
            maps_url(13.7563, 100.5018),
            "https://www.google.com/maps?q=13.7563,100.5018"
        );
    }

    #[test]
    fn detail_shows_six_decimal_coordinates_and_likes() {
        let rendered = render_detail(&sample());
        assert!(rendered.contains("13.756300, 100.501800"));
        assert!(rendered.contains("Likes: 7"));
        assert!(rendered.contains("https://www.google.com/maps?q=13.7563,100.5018"));
    }
}
