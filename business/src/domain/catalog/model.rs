use crate::domain::shared::value_objects::Locale;

/// A catalog product, normalized from the external feed.
/// Immutable once fetched; this core never writes back to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub category: String,
    pub image: String,
    pub reference: String,
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
    pub stock: u32,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Display name for the active locale: the Arabic name when the locale
    /// is Arabic and one exists, the default name otherwise.
    pub fn display_name(&self, locale: Locale) -> &str {
        if locale.is_arabic() && !self.name_ar.is_empty() {
            &self.name_ar
        } else {
            &self.name
        }
    }

    /// Display description for the active locale, empty when none is set.
    pub fn display_description(&self, locale: Locale) -> &str {
        if locale.is_arabic() && !self.description_ar.is_empty() {
            &self.description_ar
        } else {
            &self.description
        }
    }
}

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures {
    use super::*;

    /// Minimal valid product for tests across the crate.
    pub fn product(id: u64, stock: u32) -> Product {
        Product {
            id,
            category: "Huiles_d_olive".to_string(),
            image: "https://cdn.example.com/olive.jpg".to_string(),
            reference: format!("SKU-{id:04}"),
            name: format!("Product {id}"),
            name_ar: String::new(),
            description: String::new(),
            description_ar: String::new(),
            stock,
        }
    }
}
