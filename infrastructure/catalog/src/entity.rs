use serde::Deserialize;
use serde_json::Value;
use url::Url;

use business::domain::catalog::model::Product;

/// Image shown when the feed carries none, or a value that is not a URL.
const FALLBACK_IMAGE: &str = "https://cdn.storefront.example/placeholder-product.jpg";

/// Some feeds write this literal instead of leaving the field empty.
const EMPTY_DESCRIPTION_SENTINEL: &str = "vide";

/// Raw feed item. Field names vary by deployment (`item_name` vs `name`,
/// numeric ids shipped as strings), so everything is optional here and
/// resolved during normalization.
#[derive(Debug, Deserialize)]
pub struct CatalogItemEntity {
    #[serde(default, alias = "item_lookup_custom_id")]
    pub id: Option<Value>,
    #[serde(default, alias = "item_name")]
    pub name: Option<String>,
    #[serde(default, alias = "articles_custom_namear", alias = "name_ar")]
    pub name_ar: Option<String>,
    #[serde(default, alias = "articles_custom_categorie", alias = "category")]
    pub category: Option<String>,
    #[serde(default, alias = "item_codebar", alias = "reference")]
    pub reference: Option<String>,
    #[serde(default, alias = "item_image", alias = "image")]
    pub image: Option<String>,
    #[serde(default, alias = "item_description", alias = "description")]
    pub description: Option<String>,
    #[serde(default, alias = "description_ar")]
    pub description_ar: Option<String>,
    #[serde(default, alias = "item_quantity", alias = "stock")]
    pub stock: Option<Value>,
}

/// Parses a count shipped as number or numeric string; anything else is 0.
fn parse_count(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

fn normalize_image(raw: Option<String>) -> String {
    let trimmed = raw.map(|s| s.trim().to_string()).unwrap_or_default();
    if trimmed.is_empty() || Url::parse(&trimmed).is_err() {
        FALLBACK_IMAGE.to_string()
    } else {
        trimmed
    }
}

fn normalize_description(raw: Option<String>) -> String {
    match raw {
        Some(text) if text != EMPTY_DESCRIPTION_SENTINEL => text,
        _ => String::new(),
    }
}

impl CatalogItemEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: parse_count(self.id.as_ref()).max(0) as u64,
            category: self.category.unwrap_or_default(),
            image: normalize_image(self.image),
            reference: self.reference.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            name_ar: self.name_ar.unwrap_or_default(),
            description: normalize_description(self.description),
            description_ar: self.description_ar.unwrap_or_default(),
            stock: parse_count(self.stock.as_ref()).max(0) as u32,
        }
    }
}
