//! # Place model
//!
//! A rental listing as returned by `GET /places/` and `GET /places/{id}`. The
//! API has used both `title`/`name` and `price`/`price_by_night` over time and
//! may send both; each spelling is kept and the accessors pick the first usable
//! one. Every display fallback the
//! pages need lives here rather than in the views.

use serde::{Deserialize, Serialize};

/// Listing cards cut descriptions longer than this.
pub const SUMMARY_LIMIT: usize = 100;

/// An amenity attached to a place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// The owner projection embedded in a place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceOwner {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A place listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub price_by_night: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub owner: Option<PlaceOwner>,
}

impl Place {
    /// Title, then name, or `"Unnamed Place"`.
    pub fn display_title(&self) -> &str {
        [self.title.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|t| !t.is_empty())
            .unwrap_or("Unnamed Place")
    }

    /// Description, or `"No description available"`.
    pub fn display_description(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("No description available")
    }

    /// Description shortened for listing cards.
    pub fn summary(&self) -> String {
        let description = self.display_description();
        if description.chars().count() > SUMMARY_LIMIT {
            let head: String = description.chars().take(SUMMARY_LIMIT - 3).collect();
            format!("{head}...")
        } else {
            description.to_string()
        }
    }

    /// Nightly price from `price`, then `price_by_night`. Missing or zero
    /// everywhere counts as free.
    pub fn nightly_price(&self) -> f64 {
        [self.price, self.price_by_night]
            .into_iter()
            .flatten()
            .find(|p| *p != 0.0)
            .unwrap_or(0.0)
    }

    /// Price formatted as dollars, e.g. `$120.00`.
    pub fn formatted_price(&self) -> String {
        format_price(self.nightly_price())
    }

    /// Image file name derived from the title: whitespace runs become `_`.
    pub fn image_name(&self) -> String {
        let stem = self
            .display_title()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!("{stem}.png")
    }
}

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Body of `GET /places/`, either bare or wrapped in `data`.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PlaceList {
    Bare(Vec<Place>),
    Wrapped { data: Vec<Place> },
}

impl PlaceList {
    pub fn into_places(self) -> Vec<Place> {
        match self {
            Self::Bare(places) => places,
            Self::Wrapped { data } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn place(value: serde_json::Value) -> Place {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_aliases() {
        let p = place(json!({ "id": "p1", "name": "Cabin", "price_by_night": 80 }));
        assert_eq!(p.display_title(), "Cabin");
        assert_eq!(p.nightly_price(), 80.0);
    }

    #[test]
    fn test_both_spellings_present() {
        let p = place(json!({
            "id": "p1",
            "title": "Loft",
            "name": "Old name",
            "price": 120,
            "price_by_night": 90
        }));
        assert_eq!(p.display_title(), "Loft");
        assert_eq!(p.nightly_price(), 120.0);

        let p = place(json!({ "id": "p1", "title": "", "name": "Cabin", "price": 0, "price_by_night": 75 }));
        assert_eq!(p.display_title(), "Cabin");
        assert_eq!(p.nightly_price(), 75.0);

        let list: PlaceList = serde_json::from_value(json!({
            "data": [{ "id": "a", "title": "A", "name": "B", "price": 1.0, "price_by_night": 2.0 }]
        }))
        .unwrap();
        assert_eq!(list.into_places().len(), 1);
    }

    #[test]
    fn test_fallbacks() {
        let p = place(json!({ "id": "p1" }));
        assert_eq!(p.display_title(), "Unnamed Place");
        assert_eq!(p.display_description(), "No description available");
        assert_eq!(p.formatted_price(), "$0.00");
        assert!(p.amenities.is_empty());
    }

    #[test]
    fn test_full_place() {
        let p = place(json!({
            "id": "p2",
            "title": "Beach  House",
            "description": "Sea view",
            "price": 150.5,
            "latitude": 10.0,
            "longitude": -20.0,
            "owner": { "id": "u1", "first_name": "Ana", "last_name": "Lopez", "email": "ana@example.com" },
            "amenities": [{ "id": "a1", "name": "Wifi" }, { "id": "a2", "name": "Pool" }],
            "reviews": ["r1"]
        }));
        assert_eq!(p.formatted_price(), "$150.50");
        assert_eq!(p.image_name(), "Beach_House.png");
        assert_eq!(p.amenities[1].name, "Pool");
        assert_eq!(p.owner.as_ref().map(|o| o.id.as_str()), Some("u1"));
    }

    #[test]
    fn test_summary_truncates_long_descriptions() {
        let exact = "a".repeat(100);
        let p = place(json!({ "id": "p", "description": exact }));
        assert_eq!(p.summary(), exact);

        let long = "b".repeat(101);
        let p = place(json!({ "id": "p", "description": long }));
        let summary = p.summary();
        assert_eq!(summary.len(), 100);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_place_list_envelopes() {
        let wrapped: PlaceList =
            serde_json::from_value(json!({ "data": [{ "id": "a" }, { "id": "b" }] })).unwrap();
        assert_eq!(wrapped.into_places().len(), 2);

        let bare: PlaceList = serde_json::from_value(json!([{ "id": "a" }])).unwrap();
        assert_eq!(bare.into_places()[0].id, "a");
    }
}
