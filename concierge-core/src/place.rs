/// Point-of-interest records surfaced by the agent's tool layer

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A place exactly as the agent runtime reported it.
///
/// The record is opaque: fields are neither validated nor normalized, and it
/// serializes back to the same JSON it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Place(Value);

impl Place {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// String field lookup; `None` when absent or not a string
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn place_name(&self) -> Option<&str> {
        self.field("place_name")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Typed place used when records are built locally rather than received
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub place_name: String,
    pub address: String,
    pub lat: String,
    pub long: String,
    pub review_ratings: String,
    pub highlights: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

impl From<PlaceRecord> for Place {
    fn from(record: PlaceRecord) -> Self {
        let mut value = json!({
            "place_name": record.place_name,
            "address": record.address,
            "lat": record.lat,
            "long": record.long,
            "review_ratings": record.review_ratings,
            "highlights": record.highlights,
            "image_url": record.image_url,
        });
        if let Some(map) = value.as_object_mut() {
            if let Some(map_url) = record.map_url {
                map.insert("map_url".to_string(), Value::String(map_url));
            }
            if let Some(place_id) = record.place_id {
                map.insert("place_id".to_string(), Value::String(place_id));
            }
        }
        Place(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_is_passed_through_verbatim() {
        let raw = json!({
            "place_name": "Taj Mahal",
            "lat": 27.1751,
            "map_url": null,
            "extra": {"nested": true}
        });
        let place: Place = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(place.place_name(), Some("Taj Mahal"));
        // Non-string values are kept but not exposed as strings
        assert_eq!(place.field("lat"), None);
        assert_eq!(place.field("map_url"), None);
        assert_eq!(serde_json::to_value(&place).unwrap(), raw);
    }

    #[test]
    fn test_record_conversion_skips_missing_optionals() {
        let record = PlaceRecord {
            place_name: "Amber Fort".to_string(),
            address: "Devisinghpura, Amer, Jaipur".to_string(),
            lat: "26.9859".to_string(),
            long: "75.8513".to_string(),
            review_ratings: "4.7".to_string(),
            highlights: "Hilltop fort".to_string(),
            image_url: String::new(),
            map_url: Some("https://maps.example/amber".to_string()),
            place_id: None,
        };
        let place = Place::from(record);

        assert_eq!(place.field("map_url"), Some("https://maps.example/amber"));
        assert!(place.as_value().get("place_id").is_none());
        assert_eq!(place.field("long"), Some("75.8513"));
    }
}
