use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;
#[cfg(feature = "ssr")]
use remote_store::RemoteStore;

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub store: std::sync::Arc<RemoteStore>,
    pub leptos_options: LeptosOptions,
}

/// Image shown when an item has no files to display.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

/// A single portfolio entry as served by the remote store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub main_category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub created_at: String,
}

impl PortfolioItem {
    /// The first file, or [`PLACEHOLDER_IMAGE`] when there are none.
    #[must_use]
    pub fn cover(&self) -> &str {
        self.files.first().map_or(PLACEHOLDER_IMAGE, String::as_str)
    }

    #[must_use]
    pub fn created_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Creation date formatted for display, or the raw value if it does not parse.
    #[must_use]
    pub fn created_on(&self) -> String {
        self.created_timestamp().map_or_else(
            || self.created_at.clone(),
            |created| created.format("%b %-d, %Y").to_string(),
        )
    }

    #[must_use]
    pub const fn is_video(&self) -> bool {
        matches!(self.media_type, MediaType::Video)
    }
}

/// Admin-managed grouping of sub-categories under a main category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
    pub main_category: String,
    #[serde(default)]
    pub sub_categories: Vec<String>,
}

/// Top of the star scale reviews are rated on.
pub const MAX_RATING: u8 = 5;

/// A client testimonial shown on the feedback page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Review {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rating: f64,
}

impl Review {
    /// Filled stars, rounded and clamped to `0..=MAX_RATING`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn stars(&self) -> u8 {
        if self.rating.is_nan() {
            return 0;
        }
        self.rating.clamp(0.0, f64::from(MAX_RATING)).round() as u8
    }
}

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

/// Turns a category slug such as `social-media_ads` into `Social Media Ads`.
#[must_use]
pub fn titleize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for c in raw.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        if c.is_alphanumeric() {
            if in_word {
                out.push(c);
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod portfolio_type_tests {
    use super::*;
    use serde_json::json;

    fn item_json() -> serde_json::Value {
        json!({
            "_id": "66a1f0",
            "title": "Logo Pack",
            "description": "Brand marks",
            "mainCategory": "branding",
            "subCategory": "logo",
            "mediaType": "image",
            "files": ["https://cdn.example.com/1.png", "https://cdn.example.com/2.png"],
            "createdAt": "2024-01-01T10:00:00.000Z"
        })
    }

    #[test]
    fn test_deserializes_store_record() {
        let item: PortfolioItem = serde_json::from_value(item_json()).unwrap();

        assert_eq!(item.id, "66a1f0");
        assert_eq!(item.main_category, "branding");
        assert_eq!(item.sub_category, "logo");
        assert_eq!(item.media_type, MediaType::Image);
        assert_eq!(item.files.len(), 2);
        assert_eq!(item.cover(), "https://cdn.example.com/1.png");
    }

    #[test]
    fn test_accepts_plain_id_and_missing_optionals() {
        let item: PortfolioItem = serde_json::from_value(json!({
            "id": "b",
            "title": "Banner Set"
        }))
        .unwrap();

        assert_eq!(item.id, "b");
        assert!(item.description.is_empty());
        assert!(item.files.is_empty());
        assert_eq!(item.media_type, MediaType::Image);
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let item: PortfolioItem = serde_json::from_value(item_json()).unwrap();
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["_id"], "66a1f0");
        assert_eq!(value["subCategory"], "logo");
        assert_eq!(value["mediaType"], "image");
        assert_eq!(value["createdAt"], "2024-01-01T10:00:00.000Z");
    }

    #[test]
    fn test_video_media_type() {
        let mut value = item_json();
        value["mediaType"] = json!("video");
        let item: PortfolioItem = serde_json::from_value(value).unwrap();
        assert!(item.is_video());
    }

    #[test]
    fn test_cover_falls_back_to_placeholder() {
        let item = PortfolioItem::default();
        assert_eq!(item.cover(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let full = parse_timestamp("2024-02-01T12:30:00Z").unwrap();
        let date_only = parse_timestamp("2024-02-01").unwrap();

        assert!(full > date_only);
        assert_eq!(date_only.to_rfc3339(), "2024-02-01T00:00:00+00:00");
        assert!(parse_timestamp("last tuesday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_created_on_display() {
        let item = PortfolioItem {
            created_at: "2024-03-05T08:00:00Z".to_owned(),
            ..Default::default()
        };
        assert_eq!(item.created_on(), "Mar 5, 2024");

        let odd = PortfolioItem {
            created_at: "sometime".to_owned(),
            ..Default::default()
        };
        assert_eq!(odd.created_on(), "sometime");
    }

    #[test]
    fn test_category_deserialization() {
        let category: Category = serde_json::from_value(json!({
            "_id": "c1",
            "mainCategory": "branding",
            "subCategories": ["logo", "banner"],
            "createdAt": "2024-01-01"
        }))
        .unwrap();

        assert_eq!(category.id.as_deref(), Some("c1"));
        assert_eq!(category.sub_categories, vec!["logo", "banner"]);
    }

    #[test]
    fn test_titleize() {
        assert_eq!(titleize("social-media_ads"), "Social Media Ads");
        assert_eq!(titleize("logo"), "Logo");
        assert_eq!(titleize("3d renders"), "3d Renders");
        assert_eq!(titleize(""), "");
    }

    #[test]
    fn test_review_decodes_and_clamps_stars() {
        let review: Review = serde_json::from_value(json!({
            "_id": "r1",
            "name": "Nadia",
            "photo": "https://cdn.example.com/nadia.jpg",
            "text": "Great logo work.",
            "rating": 4
        }))
        .unwrap();
        assert_eq!(review.id, "r1");
        assert_eq!(review.stars(), 4);

        let generous = Review { rating: 9.0, ..review.clone() };
        assert_eq!(generous.stars(), MAX_RATING);
        let negative = Review { rating: -1.0, ..review.clone() };
        assert_eq!(negative.stars(), 0);
        let half = Review { rating: 3.5, ..review };
        assert_eq!(half.stars(), 4);
    }

    #[test]
    fn test_review_tolerates_missing_fields() {
        let review: Review = serde_json::from_value(json!({"name": "Sam"})).unwrap();
        assert_eq!(review.stars(), 0);
        assert!(review.text.is_empty());
    }
}
