//! Lookup-key normalization for creature names.
//!
//! Roster names arrive with mixed casing and diacritics ("Féral" vs "feral");
//! lookups fold both away so display strings and user input resolve to the
//! same record.

/// Normalize a creature name for lookup: fold common diacritics to their
/// ASCII base, then keep lowercase alphanumerics only.
pub fn normalize_name(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect()
}

fn fold_diacritic(ch: char) -> char {
    match ch {
        'à'..='å' | 'ā' | 'ă' => 'a',
        'è'..='ë' | 'ē' | 'ĕ' | 'ě' => 'e',
        'ì'..='ï' | 'ī' => 'i',
        'ò'..='ö' | 'ø' | 'ō' => 'o',
        'ù'..='ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'ñ' => 'n',
        'ç' => 'c',
        'ß' => 's',
        _ => ch,
    }
}
