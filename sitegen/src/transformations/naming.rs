//! Display names for emoji glyphs.

/// Human-readable name for an emoji glyph.
///
/// Looks the glyph up in the Unicode emoji catalog and normalizes the
/// canonical name: lowercased, colon delimiters stripped, underscores
/// replaced by spaces. Glyphs not in the catalog fall back to the glyph
/// itself.
///
/// # Examples
///
/// ```
/// use emolex_sitegen::transformations::display_name;
///
/// assert_eq!(display_name("😀"), "grinning face");
/// assert_eq!(display_name("not an emoji"), "not an emoji");
/// ```
pub fn display_name(glyph: &str) -> String {
    match emojis::get(glyph.trim()) {
        Some(entry) => normalize_name(entry.name()),
        None => glyph.to_string(),
    }
}

fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    lowered.trim_matches(':').replace('_', " ")
}
