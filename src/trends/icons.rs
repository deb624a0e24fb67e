//! Category → display symbol lookup.

/// Symbol for categories missing from [`CATEGORY_ICONS`].
pub const FALLBACK_ICON: &str = "📦";

/// Normalized category key → symbol. Keys are lowercase, unaccented, with
/// inner whitespace replaced by `_` (see [`normalize_category`]).
pub const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("cereales", "🌾"),
    ("legumes", "🥕"),
    ("fruits", "🍎"),
    ("viandes", "🥩"),
    ("poissons", "🐟"),
    ("produits_laitiers", "🥛"),
    ("huiles", "🫒"),
    ("epices", "🌶️"),
];

/// Resolve the symbol for a product category.
///
/// Matching ignores case, accents and surrounding whitespace, so `"Légumes"`,
/// `"legumes"` and `"  LEGUMES "` share an icon.
pub fn icon_for_category(category: &str) -> &'static str {
    let key = normalize_category(category);
    CATEGORY_ICONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_ICON)
}

/// Lowercase, strip French diacritics, trim, and join words with `_`.
pub fn normalize_category(category: &str) -> String {
    let folded: String = category
        .trim()
        .to_lowercase()
        .chars()
        .map(fold_accent)
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Map a lowercase French accented letter to its base letter.
pub(crate) fn fold_accent(c: char) -> char {
    match c {
        'à' | 'â' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'î' | 'ï' => 'i',
        'ô' | 'ö' => 'o',
        'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        other => other,
    }
}
