//! Accept-Language header parsing.
//!
//! The parser never fails: every input, however malformed, produces a list of
//! entries. Two flavours exist. [`parse_accept_language`] keeps every segment
//! and the exact primary subtag, so `"ES"`, `"es "` or an empty segment are
//! candidates that simply match nothing. [`parse_accept_language_lenient`]
//! skips empty segments and normalizes subtags before matching.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// One comma-separated segment of an Accept-Language header.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptLanguageEntry {
    /// Primary subtag (`"en"` for `"en-US"`)
    pub language: String,
    /// Relative weight; 1.0 when omitted, NaN when unparseable
    pub quality: f32,
}

/// Parse an Accept-Language header into entries sorted by descending quality.
///
/// Each trimmed segment is split on `;q=` into tag and quality. The tag is
/// reduced to the text before its first hyphen and otherwise left untouched.
/// Empty segments are kept as empty-tag entries with quality 1.0. The sort is
/// stable and NaN qualities sort after every numeric quality.
pub fn parse_accept_language(header: &str) -> Vec<AcceptLanguageEntry> {
    parse(header, false)
}

/// Like [`parse_accept_language`], but skips empty segments and trims and
/// ASCII-lowercases primary subtags (`"ES-mx "` → `"es"`).
pub fn parse_accept_language_lenient(header: &str) -> Vec<AcceptLanguageEntry> {
    parse(header, true)
}

fn parse(header: &str, lenient: bool) -> Vec<AcceptLanguageEntry> {
    let mut entries: Vec<AcceptLanguageEntry> = header
        .split(',')
        .map(str::trim)
        .filter(|segment| !lenient || !segment.is_empty())
        .map(|segment| {
            let mut entry = parse_entry(segment);
            if lenient {
                entry.language = entry.language.trim().to_ascii_lowercase();
            }
            entry
        })
        .collect();

    entries.sort_by(|a, b| by_descending_quality(a.quality, b.quality));
    entries
}

fn parse_entry(segment: &str) -> AcceptLanguageEntry {
    let mut parts = segment.splitn(3, ";q=");
    let tag = parts.next().unwrap_or_default();
    let quality = parts.next().map(parse_quality).unwrap_or(1.0);

    AcceptLanguageEntry {
        language: primary_subtag(tag).to_string(),
        quality,
    }
}

/// Portion of a language tag before the first hyphen.
pub fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Parse the longest leading decimal number of `raw`, ignoring whatever
/// follows it (`"0.8x"` → 0.8). Leading whitespace is skipped. Only the
/// spelling `Infinity` is accepted for infinite values; anything without a
/// numeric prefix, `"inf"` and `"nan"` included, is NaN.
pub fn parse_quality(raw: &str) -> f32 {
    static NUMBER: OnceLock<Option<Regex>> = OnceLock::new();
    let number = NUMBER.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").ok()
    });

    number
        .as_ref()
        .and_then(|re| re.find(raw.trim_start()))
        .and_then(|m| m.as_str().parse::<f32>().ok())
        .unwrap_or(f32::NAN)
}

fn by_descending_quality(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn languages(entries: &[AcceptLanguageEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.language.as_str()).collect()
    }

    // ==================== Basic Parsing ====================

    #[test]
    fn test_single_tag_defaults_to_full_quality() {
        let entries = parse_accept_language("es");
        assert_eq!(
            entries,
            vec![AcceptLanguageEntry {
                language: "es".to_string(),
                quality: 1.0
            }]
        );
    }

    #[test]
    fn test_region_subtag_is_stripped() {
        let entries = parse_accept_language("es-VE,en;q=0.8");
        assert_eq!(languages(&entries), vec!["es", "en"]);
        assert_eq!(entries[1].quality, 0.8);
    }

    #[test]
    fn test_script_and_region_subtags_stripped() {
        let entries = parse_accept_language("zh-Hant-TW");
        assert_eq!(languages(&entries), vec!["zh"]);
    }

    #[test]
    fn test_whitespace_around_segments() {
        let entries = parse_accept_language("  fr ,  en;q=0.3 ");
        assert_eq!(languages(&entries), vec!["fr", "en"]);
        assert_eq!(entries[1].quality, 0.3);
    }

    // ==================== Exact Subtags ====================

    #[test]
    fn test_case_is_preserved() {
        let entries = parse_accept_language("ES-mx");
        assert_eq!(languages(&entries), vec!["ES"]);
    }

    #[test]
    fn test_space_before_quality_kept_in_subtag() {
        let entries = parse_accept_language("es ;q=0.9");
        assert_eq!(languages(&entries), vec!["es "]);
        assert_eq!(entries[0].quality, 0.9);
    }

    #[test]
    fn test_empty_segments_are_candidates() {
        let entries = parse_accept_language(",es");
        assert_eq!(languages(&entries), vec!["", "es"]);

        let entries = parse_accept_language("es;q=0.5,");
        assert_eq!(languages(&entries), vec!["", "es"]);
    }

    #[test]
    fn test_empty_header_yields_single_empty_entry() {
        let entries = parse_accept_language("");
        assert_eq!(languages(&entries), vec![""]);
        assert_eq!(entries[0].quality, 1.0);
    }

    // ==================== Lenient Parsing ====================

    #[test]
    fn test_lenient_lowercases_and_trims() {
        let entries = parse_accept_language_lenient("ES-mx,es ;q=0.9");
        assert_eq!(languages(&entries), vec!["es", "es"]);
    }

    #[test]
    fn test_lenient_skips_empty_segments() {
        assert_eq!(languages(&parse_accept_language_lenient(",es")), vec!["es"]);
        assert!(parse_accept_language_lenient("").is_empty());
        assert!(parse_accept_language_lenient(" , ,").is_empty());
    }

    // ==================== Ordering ====================

    #[test]
    fn test_sorted_by_descending_quality() {
        let entries = parse_accept_language("en;q=0.2,de;q=0.9,es");
        assert_eq!(languages(&entries), vec!["es", "de", "en"]);
    }

    #[test]
    fn test_ties_keep_header_order() {
        let entries = parse_accept_language("fr,es,en");
        assert_eq!(languages(&entries), vec!["fr", "es", "en"]);
    }

    #[test]
    fn test_nan_quality_sorts_last() {
        let entries = parse_accept_language("es;q=abc,en;q=0.1");
        assert_eq!(languages(&entries), vec!["en", "es"]);
        assert!(entries[1].quality.is_nan());
    }

    #[test]
    fn test_empty_quality_is_nan() {
        let entries = parse_accept_language("es;q=");
        assert!(entries[0].quality.is_nan());
    }

    // ==================== Quality Values ====================

    #[test]
    fn test_quality_numeric_prefix() {
        assert_eq!(parse_quality("0.8x"), 0.8);
        assert_eq!(parse_quality("  0.5"), 0.5);
        assert_eq!(parse_quality("1"), 1.0);
        assert_eq!(parse_quality(".25"), 0.25);
        assert_eq!(parse_quality("1."), 1.0);
        assert_eq!(parse_quality("5e-1"), 0.5);
        assert_eq!(parse_quality("1e"), 1.0);
        assert_eq!(parse_quality("-0.5"), -0.5);
    }

    #[test]
    fn test_quality_infinity_spelling() {
        assert_eq!(parse_quality("Infinity"), f32::INFINITY);
        assert!(parse_quality("inf").is_nan());
        assert!(parse_quality("infinity").is_nan());
        assert!(parse_quality("nan").is_nan());
        assert!(parse_quality("").is_nan());
        assert!(parse_quality("x0.5").is_nan());
    }

    #[test]
    fn test_quality_prefix_in_header() {
        let entries = parse_accept_language("en;q=0.1,es;q=0.9garbage");
        assert_eq!(languages(&entries), vec!["es", "en"]);
    }

    #[test]
    fn test_primary_subtag() {
        assert_eq!(primary_subtag("en-US"), "en");
        assert_eq!(primary_subtag("es"), "es");
        assert_eq!(primary_subtag(""), "");
        assert_eq!(primary_subtag("-US"), "");
    }
}
