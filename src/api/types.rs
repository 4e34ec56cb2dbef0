use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque, server-assigned record identifier.
///
/// The service is free to hand out numeric or string ids (json-server does
/// both depending on version), so this accepts either on the wire and only
/// ever echoes the value back into URL paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrinkId(String);

impl DrinkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DrinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DrinkId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(s) => Ok(DrinkId(s)),
            serde_json::Value::Number(n) => Ok(DrinkId(n.to_string())),
            other => Err(D::Error::custom(format!(
                "expected string or number id, got {}",
                other
            ))),
        }
    }
}

impl Serialize for DrinkId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// A complete drink record as held by the remote service.
///
/// Records arriving from the server are always complete; the client never
/// fabricates a partial one for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub id: DrinkId,
    pub title: String,
    pub company_name: String,
    pub price: f64,
    pub volume: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
}

/// The six writable drink fields, i.e. a [`Drink`] minus its id.
///
/// This is the request body for both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkDraft {
    pub title: String,
    pub company_name: String,
    pub price: f64,
    pub volume: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drink_id_deserializes_from_number() {
        let id: DrinkId = serde_json::from_str("7").unwrap();
        assert_eq!(id, DrinkId::new("7"));
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn drink_id_deserializes_from_string() {
        let id: DrinkId = serde_json::from_str("\"a3f\"").unwrap();
        assert_eq!(id.as_str(), "a3f");
    }

    #[test]
    fn drink_id_rejects_other_shapes() {
        assert!(serde_json::from_str::<DrinkId>("[1]").is_err());
        assert!(serde_json::from_str::<DrinkId>("null").is_err());
    }

    #[test]
    fn drink_deserializes_server_record() {
        let json = r#"{
            "id": 7,
            "title": "Cola",
            "company_name": "Acme",
            "price": 12000,
            "volume": "0.5L",
            "type": "carbonated",
            "image": "http://x/y.png"
        }"#;
        let drink: Drink = serde_json::from_str(json).unwrap();
        assert_eq!(drink.id, DrinkId::new("7"));
        assert_eq!(drink.title, "Cola");
        assert_eq!(drink.company_name, "Acme");
        assert_eq!(drink.price, 12000.0);
        assert_eq!(drink.volume, "0.5L");
        assert_eq!(drink.kind, "carbonated");
        assert_eq!(drink.image, "http://x/y.png");
    }

    #[test]
    fn draft_serializes_type_field_name() {
        let draft = DrinkDraft {
            title: "Cola".into(),
            company_name: "Acme".into(),
            price: 12000.0,
            volume: "0.5L".into(),
            kind: "carbonated".into(),
            image: "http://x/y.png".into(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["type"], "carbonated");
        assert_eq!(value["price"], 12000.0);
        assert!(value.get("id").is_none());
        assert!(value.get("kind").is_none());
    }
}
