//! Resolves a currency code to the glyph shown next to it.

use crate::currency::{normalize_code, region_for, special_icon};

pub const GLOBE: &str = "🌐";
pub const EU_FLAG: &str = "🇪🇺";

/// `'A'` + this offset is REGIONAL INDICATOR SYMBOL LETTER A.
const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// Returns the flag or icon for a currency code.
///
/// The code may be empty or lowercase. Lookup order is the special-icon table,
/// then the code→region table, then a region inferred from the first two
/// letters. Codes starting with `X` are never inferred since that prefix is
/// reserved for supranational and special codes.
pub fn currency_icon(code: &str) -> String {
    let code = normalize_code(code);
    if code.is_empty() {
        return GLOBE.to_string();
    }
    if let Some(icon) = special_icon(&code) {
        return icon.to_string();
    }

    let region = region_for(&code)
        .map(str::to_string)
        .or_else(|| infer_region(&code));
    region_flag(region.as_deref())
}

/// Guesses the issuing region from the leading letters of a normalized code.
pub fn infer_region(code: &str) -> Option<String> {
    if code.is_empty() || code.starts_with('X') {
        return None;
    }
    let region: String = code.chars().take(2).collect();
    if region == "UK" {
        return Some("GB".to_string());
    }
    Some(region)
}

/// Builds a flag glyph out of regional indicator symbols.
pub fn region_flag(region: Option<&str>) -> String {
    let Some(region) = region.filter(|r| !r.is_empty()) else {
        return GLOBE.to_string();
    };
    if region.eq_ignore_ascii_case("EU") {
        return EU_FLAG.to_string();
    }

    region
        .chars()
        .map(|c| {
            let upper = c.to_ascii_uppercase();
            char::from_u32(REGIONAL_INDICATOR_OFFSET + upper as u32).unwrap_or(upper)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::SPECIAL_ICONS;

    #[test]
    fn empty_code_is_globe() {
        assert_eq!(currency_icon(""), GLOBE);
        assert_eq!(currency_icon("   "), GLOBE);
    }

    #[test]
    fn special_codes_always_get_their_icon() {
        for (code, icon) in SPECIAL_ICONS {
            assert_eq!(currency_icon(code), *icon);
            assert_eq!(currency_icon(&code.to_lowercase()), *icon);
        }
    }

    #[test]
    fn mapped_codes_use_the_region_table() {
        assert_eq!(currency_icon("usd"), "🇺🇸");
        assert_eq!(currency_icon("EUR"), EU_FLAG);
        assert_eq!(currency_icon("XOF"), "🇸🇳");
        assert_eq!(currency_icon("ANG"), "🇨🇼");
    }

    #[test]
    fn unknown_codes_infer_from_prefix() {
        assert_eq!(currency_icon("FRF"), "🇫🇷");
        assert_eq!(currency_icon("UKP"), "🇬🇧");
    }

    #[test]
    fn unknown_x_codes_fall_back_to_globe() {
        assert_eq!(currency_icon("XBT"), GLOBE);
        assert_eq!(infer_region("XYZ"), None);
    }

    #[test]
    fn region_flags_are_deterministic() {
        for a in 'A'..='Z' {
            for b in ['A', 'M', 'Z'] {
                let region = format!("{a}{b}");
                let first = region_flag(Some(&region));
                assert_eq!(first, region_flag(Some(&region)));
                assert_eq!(first.chars().count(), 2);
            }
        }
        assert_eq!(region_flag(Some("us")), region_flag(Some("US")));
        assert_eq!(region_flag(None), GLOBE);
    }

    #[test]
    fn resolver_is_total_over_odd_input() {
        for input in ["1", "€€€", "a", "ü-x", "\u{10FFFF}\u{10FFFF}"] {
            assert!(!currency_icon(input).is_empty());
        }
    }
}
