//! Display strings for values.
//!
//! Three ranges, each prefixed by the currency symbol:
//!
//! - from one million: truncated and abbreviated (`US$2.5M`);
//! - from one thousand: truncated and grouped per language (`US$12,345`);
//! - below: two fractional digits, no grouping (`US$500.00`).

use crate::currency::symbol_for;

const ABBREVIATE_FROM: f64 = 1_000_000.0;
const GROUP_FROM: f64 = 1_000.0;

const SUFFIXES: [&str; 6] = ["", "K", "M", "B", "T", "Q"];

/// Formats `value` for display in `currency` using the conventions of
/// `language` (a BCP 47 tag such as `en`, `de-CH` or `pt_BR`).
#[must_use]
pub fn format_value(value: f64, currency: &str, language: &str) -> String {
    let symbol = symbol_for(currency);
    let truncated = value.trunc() as i64;

    if value >= ABBREVIATE_FROM {
        format!("{symbol}{}", abbreviate(truncated))
    } else if value >= GROUP_FROM {
        format!("{symbol}{}", group_digits(truncated, language))
    } else {
        format!("{symbol}{}", fixed_two(value))
    }
}

/// Two fractional digits, exact ties rounded away from zero.
fn fixed_two(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded:.2}")
}

/// Short form of a large integer: one fractional digit at most, trailing
/// `.0` dropped, `K`/`M`/`B`/`T`/`Q` suffix.
#[must_use]
pub fn abbreviate(number: i64) -> String {
    let sign = if number < 0 { "-" } else { "" };
    let mut scaled = number.unsigned_abs() as f64;
    let mut tier = 0;
    while scaled >= 1000.0 && tier < SUFFIXES.len() - 1 {
        scaled /= 1000.0;
        tier += 1;
    }

    let mut rounded = (scaled * 10.0).round() / 10.0;
    // 999.96 rounds up into the next tier.
    if rounded >= 1000.0 && tier < SUFFIXES.len() - 1 {
        rounded = (rounded / 100.0).round() / 10.0;
        tier += 1;
    }

    let digits = format!("{rounded:.1}");
    let digits = digits.strip_suffix(".0").unwrap_or(&digits);
    format!("{sign}{digits}{}", SUFFIXES[tier])
}

/// Digit grouping conventions of a language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Grouping {
    separator: &'static str,
    /// Minimum number of digits in the leading group before grouping kicks
    /// in: `2` leaves four-digit numbers ungrouped.
    min_leading: usize,
}

impl Grouping {
    const COMMA: Grouping = Grouping {
        separator: ",",
        min_leading: 1,
    };

    fn for_language(language: &str) -> Self {
        let tag = language.trim().to_ascii_lowercase().replace('_', "-");
        let mut subtags = tag.split('-');
        let primary = subtags.next().unwrap_or_default();
        let region = subtags.find(|subtag| subtag.len() == 2);

        match (primary, region) {
            ("de" | "it", Some("ch")) => Grouping {
                separator: "\u{2019}",
                min_leading: 1,
            },
            ("es", _) => Grouping {
                separator: ".",
                min_leading: 2,
            },
            ("pl", _) => Grouping {
                separator: "\u{a0}",
                min_leading: 2,
            },
            ("de" | "id" | "it" | "pt" | "nl" | "tr" | "vi" | "da", _) => Grouping {
                separator: ".",
                min_leading: 1,
            },
            ("ru" | "uk" | "cs" | "sk" | "nb" | "no" | "fi" | "sv", _) => Grouping {
                separator: "\u{a0}",
                min_leading: 1,
            },
            ("fr", _) => Grouping {
                separator: "\u{202f}",
                min_leading: 1,
            },
            _ => Grouping::COMMA,
        }
    }
}

/// Renders `number` with the thousands separator of `language`.
#[must_use]
pub fn group_digits(number: i64, language: &str) -> String {
    let grouping = Grouping::for_language(language);
    let sign = if number < 0 { "-" } else { "" };
    let digits = number.unsigned_abs().to_string();

    if digits.len() < 3 + grouping.min_leading {
        return format!("{sign}{digits}");
    }

    let mut grouped = String::with_capacity(digits.len() * 2);
    grouped.push_str(sign);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(grouping.separator);
        }
        grouped.push(digit);
    }
    grouped
}
