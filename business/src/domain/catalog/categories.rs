use crate::domain::shared::value_objects::Locale;

/// Display label for a feed category key. Unknown keys fall back to the
/// raw key so new feed categories degrade visibly instead of breaking.
pub fn category_label(key: &str, locale: Locale) -> &str {
    let table: &[(&str, &str)] = match locale {
        Locale::English => EN,
        Locale::French => FR,
        Locale::Arabic => AR,
    };

    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

// Category keys come from the feed verbatim; the tables mirror the
// storefront translation files.
const EN: &[(&str, &str)] = &[
    ("Halava", "Halwa"),
    ("Conserves", "Canned Goods"),
    ("Olive_verte", "Green Olive"),
    ("Epices", "Spices"),
    ("Legumes_sec", "Dried Legumes"),
    ("Cafe", "Coffee"),
    ("Riz", "Rice"),
    ("Huiles_d_olive", "Olive Oil"),
    ("Fruits_secs", "Dried Fruits"),
    ("Lait_en_poudre", "Powdered Milk"),
    ("Produits_laitiers", "Dairy Products"),
    ("Miel", "Honey"),
    ("Thé", "Tea"),
    ("Condiments_et_Sauces", "Condiments And Sauces"),
    ("Confitures", "Jams"),
];

const FR: &[(&str, &str)] = &[
    ("Halava", "Halva"),
    ("Conserves", "Conserves"),
    ("Olive_verte", "Olive verte"),
    ("Epices", "Épices"),
    ("Legumes_sec", "Légumes secs"),
    ("Cafe", "Café"),
    ("Riz", "Riz"),
    ("Huiles_d_olive", "Huile d'olive"),
    ("Fruits_secs", "Fruits secs"),
    ("Lait_en_poudre", "Lait en poudre"),
    ("Produits_laitiers", "Produits laitiers"),
    ("Miel", "Miel"),
    ("Thé", "Thé"),
    ("Condiments_et_Sauces", "Condiments et sauces"),
    ("Confitures", "Confitures"),
];

const AR: &[(&str, &str)] = &[
    ("Halava", "حلاوة"),
    ("Conserves", "معلبات"),
    ("Olive_verte", "زيتون أخضر"),
    ("Epices", "بهارات"),
    ("Legumes_sec", "بقوليات مجففة"),
    ("Cafe", "قهوة"),
    ("Riz", "أرز"),
    ("Huiles_d_olive", "زيت الزيتون"),
    ("Fruits_secs", "فواكه مجففة"),
    ("Lait_en_poudre", "حليب مجفف"),
    ("Produits_laitiers", "منتجات الألبان"),
    ("Miel", "عسل"),
    ("Thé", "شاي"),
    ("Condiments_et_Sauces", "توابل وصلصات"),
    ("Confitures", "مربيات"),
];
