// List view: one card per attraction

use crate::models::Attraction;
use crate::views::truncate_detail;

const DETAIL_PREVIEW_CHARS: usize = 120;

/// Renders the attractions list as a sequence of cards
pub fn render_list(attractions: &[Attraction]) -> String {
    if attractions.is_empty() {
        return "No attractions found.".to_string();
    }

    let cards: Vec<String> = attractions.iter().map(render_card).collect();
    cards.join("\n\n")
}

fn render_card(attraction: &Attraction) -> String {
    format!(
        "{}\n  {}\n  ♥ {}  →  /attractions/{}",
        attraction.name,
        truncate_detail(&attraction.detail, DETAIL_PREVIEW_CHARS),
        attraction.likes,
        attraction.id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample(id: i32, name: &str, likes: i64) -> Attraction {
        Attraction {
            id,
            name: name.to_string(),
            detail: "A sight worth seeing.".to_string(),
            coverimage: "https://example.com/img.jpg".to_string(),
            latitude: 13.7563,
            longitude: 100.5018,
            likes,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(render_list(&[]), "No attractions found.");
    }

    #[test]
    fn cards_carry_name_likes_and_link() {
        let rendered = render_list(&[sample(1, "Grand Palace", 2)]);
        assert!(rendered.contains("Grand Palace"));
        assert!(rendered.contains("♥ 2"));
        assert!(rendered.contains("/attractions/1"));
    }
}
