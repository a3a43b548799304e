use poem_openapi::Object;

use business::domain::catalog::categories::category_label;
use business::domain::catalog::model::Product;
use business::domain::shared::value_objects::Locale;

/// A catalog product, localized for the requested locale.
#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier in the feed
    pub id: u64,
    /// Raw category key from the feed
    pub category: String,
    /// Localized category label
    pub category_label: String,
    /// Product image URL
    pub image: String,
    /// Vendor SKU
    pub reference: String,
    /// Localized display name
    pub name: String,
    /// Localized display description (may be empty)
    pub description: String,
    /// Units currently available
    pub stock: u32,
    /// Whether the product can be added to a shopping list
    pub in_stock: bool,
}

impl ProductResponse {
    pub fn from_domain(product: Product, locale: Locale) -> Self {
        Self {
            name: product.display_name(locale).to_string(),
            description: product.display_description(locale).to_string(),
            category_label: category_label(&product.category, locale).to_string(),
            in_stock: product.is_in_stock(),
            id: product.id,
            category: product.category,
            image: product.image,
            reference: product.reference,
            stock: product.stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::model::fixtures::product;

    #[test]
    fn should_localize_name_for_arabic_locale() {
        let mut p = product(1, 5);
        p.name = "Olive Oil 5L".to_string();
        p.name_ar = "زيت زيتون 5ل".to_string();

        let dto = ProductResponse::from_domain(p, Locale::Arabic);

        assert_eq!(dto.name, "زيت زيتون 5ل");
        assert!(dto.in_stock);
    }

    #[test]
    fn should_report_out_of_stock() {
        let dto = ProductResponse::from_domain(product(1, 0), Locale::English);

        assert_eq!(dto.stock, 0);
        assert!(!dto.in_stock);
    }
}
