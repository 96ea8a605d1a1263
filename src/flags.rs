//! Country flag symbols for league menu labels.

/// Symbol used for competitions whose "country" is the World sentinel
pub const GLOBE: &str = "\u{1F30D}";

/// Map an ISO 3166 two-letter country code to its flag emoji.
///
/// Total over any input: codes that are not exactly two ASCII letters are
/// returned unchanged so the menu still renders something readable.
pub fn country_flag(code: &str) -> String {
    let code = code.trim();
    let mut chars = code.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
            [a, b]
                .iter()
                .map(|c| {
                    char::from_u32(0x1F1E6 + (c.to_ascii_uppercase() as u32 - 'A' as u32))
                        .unwrap_or(*c)
                })
                .collect()
        }
        _ => code.to_string(),
    }
}

/// Pick the display symbol for a league's country.
///
/// The sports API reports international competitions under the country name
/// "World" with no country code.
pub fn league_symbol(country_name: &str, country_code: Option<&str>) -> String {
    if country_name == "World" {
        GLOBE.to_string()
    } else {
        country_code.map(country_flag).unwrap_or_default()
    }
}
