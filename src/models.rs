//! Upload Payload Models
//!
//! Data structures matching the `/items` endpoint contract.

use serde::{Deserialize, Serialize};

/// One menu item in a submission (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub item: String,
    pub food: String,
    pub price: f64,
    pub picture_filename: String,
    pub picture_type: String,
    pub picture_data: String,
}

/// Complete document POSTed to `/items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    /// Always present on the wire; `None` serializes as `null`
    pub user_id: Option<String>,
    /// Ordered to match the visual order of entry groups
    pub items: Vec<ItemEntry>,
}

/// Parse price text from the number input.
/// Non-numeric text becomes NaN, which serde_json writes as `null`.
pub fn parse_price(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_entry(name: &str, price: f64) -> ItemEntry {
        ItemEntry {
            item: name.to_string(),
            food: format!("{} description", name),
            price,
            picture_filename: format!("{}.png", name),
            picture_type: "image/png".to_string(),
            picture_data: "AAECAwQFBgcICQ==".to_string(),
        }
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.50"), 12.5);
        assert_eq!(parse_price(" 9.99 "), 9.99);
        assert!(parse_price("abc").is_nan());
        assert!(parse_price("").is_nan());
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = SubmissionPayload {
            user_id: Some("user-42".to_string()),
            items: vec![ItemEntry {
                item: "Pizza".to_string(),
                food: "Pepperoni".to_string(),
                price: 9.99,
                picture_filename: "a.png".to_string(),
                picture_type: "image/png".to_string(),
                picture_data: "AAECAwQFBgcICQ==".to_string(),
            }],
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "user_id": "user-42",
                "items": [{
                    "item": "Pizza",
                    "food": "Pepperoni",
                    "price": 9.99,
                    "picture_filename": "a.png",
                    "picture_type": "image/png",
                    "picture_data": "AAECAwQFBgcICQ=="
                }]
            })
        );
    }

    #[test]
    fn test_missing_user_id_is_null_not_omitted() {
        let payload = SubmissionPayload { user_id: None, items: vec![] };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["user_id"], json!(null));
        assert!(value.as_object().unwrap().contains_key("user_id"));
    }

    #[test]
    fn test_nan_price_serializes_as_null() {
        let entry = make_entry("mystery", f64::NAN);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["price"], json!(null));
    }

    #[test]
    fn test_item_order_preserved() {
        let payload = SubmissionPayload {
            user_id: None,
            items: vec![
                make_entry("first", 1.0),
                make_entry("second", 2.0),
                make_entry("third", 3.0),
            ],
        };
        let value = serde_json::to_value(&payload).unwrap();
        let names: Vec<&str> = value["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["item"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
