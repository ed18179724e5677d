//! Title canonicalization for note basenames.

/// Converts a heading title to a standard basename.
///
/// - Trims surrounding whitespace
/// - Collapses internal whitespace runs to a single underscore
/// - Transliterates German characters: ä→ae ö→oe ü→ue Ä→Ae Ö→Oe Ü→Ue ß→ss
/// - Strips everything outside `[A-Za-z0-9_]`
///
/// # Examples
///
/// ```
/// use zettel::infra::title_to_basename;
///
/// assert_eq!(title_to_basename("Dinge für mein Thema"), "Dinge_fuer_mein_Thema");
/// assert_eq!(title_to_basename("  spaced   out  "), "spaced_out");
/// ```
pub fn title_to_basename(title: &str) -> String {
    let collapsed = title.split_whitespace().collect::<Vec<_>>().join("_");
    let transliterated = collapsed
        .replace('ä', "ae")
        .replace('ö', "oe")
        .replace('ü', "ue")
        .replace('Ä', "Ae")
        .replace('Ö', "Oe")
        .replace('Ü', "Ue")
        .replace('ß', "ss");
    transliterated
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
