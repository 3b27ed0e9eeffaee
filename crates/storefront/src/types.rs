use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: Value,
    pub price: Value,
    pub category: Value,
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:<3} {} [{}] {}",
            self.id,
            plain(&self.name),
            plain(&self.category),
            plain(&self.price)
        )
    }
}

/// Body of a create request. Every field is optional at the wire level so
/// that absent and falsy values are both reported as missing fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
}

/// Body of a partial update. Only present and truthy fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn truthy(value: Option<Value>) -> Option<Value> {
    value.filter(is_truthy)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub image: String,
    pub price: String,
    pub infos: Vec<ListingInfo>,
}

impl Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌─ {} ─ {}", self.title.trim(), self.price.trim())?;
        writeln!(f, "│  Image: {}", self.image)?;
        for info in &self.infos {
            writeln!(f, "│  {}: {}", info.label.trim(), info.value.trim())?;
        }
        write!(f, "└─ {} spec(s)", self.infos.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingInfo {
    pub label: String,
    pub value: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid catalog '{0}'. Accepted values: 'laptops', 'mini_computers', 'accessories'")]
pub struct CatalogParseError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Catalog {
    Laptops,
    MiniComputers,
    Accessories,
}

impl Catalog {
    pub const ALL: [Catalog; 3] = [
        Catalog::Laptops,
        Catalog::MiniComputers,
        Catalog::Accessories,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Catalog::Laptops => "linux-laptops",
            Catalog::MiniComputers => "mini-computers",
            Catalog::Accessories => "accessories",
        }
    }
}

impl FromStr for Catalog {
    type Err = CatalogParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "laptops" => Ok(Catalog::Laptops),
            "mini_computers" | "mini-computers" => Ok(Catalog::MiniComputers),
            "accessories" => Ok(Catalog::Accessories),
            _ => Err(CatalogParseError(s.to_string())),
        }
    }
}

impl Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Catalog::Laptops => write!(f, "Laptops"),
            Catalog::MiniComputers => write!(f, "Mini computers"),
            Catalog::Accessories => write!(f, "Accessories"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_matches_json_semantics() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_truthy_keeps_any_non_empty_value() {
        assert_eq!(truthy(Some(json!(5))), Some(json!(5)));
        assert_eq!(truthy(Some(json!("A"))), Some(json!("A")));
        assert_eq!(truthy(Some(json!(""))), None);
        assert_eq!(truthy(None), None);
    }

    #[test]
    fn test_item_display_unquotes_strings() {
        let item = Item {
            id: 3,
            name: json!("Dock"),
            price: json!(129),
            category: json!(7),
        };
        assert_eq!(item.to_string(), "#3   Dock [7] 129");
    }

    #[test]
    fn test_catalog_from_str() {
        assert_eq!("laptops".parse::<Catalog>().unwrap(), Catalog::Laptops);
        assert_eq!(
            "mini-computers".parse::<Catalog>().unwrap(),
            Catalog::MiniComputers
        );
        assert_eq!(
            "mini_computers".parse::<Catalog>().unwrap(),
            Catalog::MiniComputers
        );
        assert_eq!(
            "accessories".parse::<Catalog>().unwrap(),
            Catalog::Accessories
        );
        assert!("desktops".parse::<Catalog>().is_err());
    }

    #[test]
    fn test_new_item_defaults_missing_fields() {
        let body: NewItem = serde_json::from_value(json!({ "name": "A" })).unwrap();
        assert_eq!(body.name, Some(json!("A")));
        assert_eq!(body.price, None);
        assert_eq!(body.category, None);
    }
}
