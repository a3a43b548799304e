use business::domain::shared::value_objects::Locale;

/// Resolves the `locale` query parameter, defaulting to English for
/// missing or unknown values.
pub fn resolve_locale(param: &Option<String>) -> Locale {
    param
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}
