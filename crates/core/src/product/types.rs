use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

/// A product record as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier, immutable once created.
    #[serde(rename = "productID")]
    pub product_id: String,
    pub name: String,
    pub description: String,
    /// Kept as the JSON number the client sent, so `2` stays `2`.
    pub price: Number,
    pub available: bool,
}

impl Product {
    /// Creates a product with a freshly generated identifier.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<Number>,
        available: bool,
    ) -> Self {
        ProductDraft {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            available,
        }
        .into_product(new_product_id())
    }

    /// Sets a specific identifier (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.product_id = id.into();
        self
    }
}

/// A validated payload that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub available: bool,
}

impl ProductDraft {
    /// Binds the draft to an identifier, producing the full record.
    ///
    /// Any identifier the client sent never reaches the draft, so the record
    /// always carries `id`.
    pub fn into_product(self, id: impl Into<String>) -> Product {
        Product {
            product_id: id.into(),
            name: self.name,
            description: self.description,
            price: self.price,
            available: self.available,
        }
    }
}

/// Generates a fresh, collision-resistant product identifier.
pub fn new_product_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_with_product_id_key() {
        let price = Number::from_f64(1.5).unwrap();
        let product = Product::new("Pen", "Blue ink", price, true).with_id("abc-123");
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["productID"], "abc-123");
        assert_eq!(json["name"], "Pen");
        assert_eq!(json["price"], 1.5);
        assert_eq!(json["available"], true);
        assert!(json.get("product_id").is_none());
    }

    #[test]
    fn test_draft_into_product_uses_given_id() {
        let draft = ProductDraft {
            name: "Pen".to_string(),
            description: "Blue ink".to_string(),
            price: Number::from(2),
            available: true,
        };

        let product = draft.into_product("fixed-id");
        assert_eq!(product.product_id, "fixed-id");
        assert_eq!(product.description, "Blue ink");
    }

    #[test]
    fn test_integer_price_round_trips_unchanged() {
        let product = Product::new("Pen", "Blue ink", 2, true);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["price"], serde_json::json!(2));
        assert_eq!(json["price"].to_string(), "2");

        let parsed: Product = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.price, Number::from(2));
    }

    #[test]
    fn test_new_product_ids_are_unique() {
        let a = new_product_id();
        let b = new_product_id();

        assert!(!a.is_empty());
        assert_ne!(a, b);
    }
}
