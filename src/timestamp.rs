//! Timestamps for working trees with uncommitted changes.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use eyre::{Result, eyre};
use std::fmt::Display;

// Longer tokens first so "YYYY" never degrades into two "YY".
const TOKENS: [(&str, &str); 7] = [
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("dd", "%d"),
    ("HH", "%H"),
    ("mm", "%M"),
    ("ss", "%S"),
];

pub const DEFAULT_TIMESTAMP: &str = "YYYYMMddHHmmss";

/// Translate a human pattern such as `YYYYMMdd` into strftime syntax.
///
/// The pattern is scanned once from the left; text produced by a replacement is
/// never scanned again, and everything that isn't a token is kept literally.
pub fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    'scan: while !rest.is_empty() {
        for (token, strftime) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(strftime);
                rest = tail;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        match chars.next() {
            Some('%') => out.push_str("%%"),
            Some(c) => out.push(c),
            None => break,
        }
        rest = chars.as_str();
    }

    out
}

/// Render `at` through the translated `pattern`.
pub fn stamp<Tz>(pattern: &str, at: &DateTime<Tz>) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let strftime = translate(pattern);
    let items: Vec<Item<'_>> = StrftimeItems::new(&strftime).collect();

    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(eyre!("Invalid timestamp format: {}", pattern));
    }

    Ok(at.format_with_items(items.iter()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 5, 14, 30, 22).unwrap()
    }

    #[test]
    fn test_translate_default_pattern() {
        assert_eq!(translate(DEFAULT_TIMESTAMP), "%Y%m%d%H%M%S");
    }

    #[test]
    fn test_translate_long_year_before_short_year() {
        assert_eq!(translate("YYYY-YY"), "%Y-%y");
        assert_eq!(translate("YYYYYY"), "%Y%y");
    }

    #[test]
    fn test_translate_keeps_literals() {
        assert_eq!(translate("build.YYYY_x"), "build.%Y_x");
        assert_eq!(translate("Y"), "Y");
    }

    #[test]
    fn test_translate_escapes_percent() {
        assert_eq!(translate("100%"), "100%%");
    }

    #[test]
    fn test_translate_does_not_rescan_output() {
        // "MM" becomes "%m"; the trailing "m" must stay a literal
        assert_eq!(translate("MMm"), "%mm");
    }

    #[test]
    fn test_stamp_default_pattern() {
        assert_eq!(stamp(DEFAULT_TIMESTAMP, &fixed()).unwrap(), "20251205143022");
    }

    #[test]
    fn test_stamp_date_only() {
        assert_eq!(stamp("YYYYMMdd", &fixed()).unwrap(), "20251205");
    }

    #[test]
    fn test_stamp_mixed_tokens() {
        assert_eq!(stamp("YYYY-YY.HH:mm:ss", &fixed()).unwrap(), "2025-25.14:30:22");
        assert_eq!(stamp("100%", &fixed()).unwrap(), "100%");
    }

    #[test]
    fn test_stamp_is_deterministic_for_fixed_time() {
        let now = fixed();
        assert_eq!(stamp("YYYYMMddHHmmss", &now).unwrap(), stamp("YYYYMMddHHmmss", &now).unwrap());
    }
}
