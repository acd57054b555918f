//! Terminal rendering of results, framed like a small dialog.

use std::time::Duration;

use engine::{Appraisal, Currency, Formula, Settings, WalletSummary};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{Label, text};

/// Frames `lines` in a box, each line centered by its terminal width.
pub fn popup(lines: &[String]) -> String {
    let width = lines
        .iter()
        .map(|line| line.width())
        .max()
        .unwrap_or_default()
        + 4;

    let mut out = String::new();
    out.push('┌');
    out.push_str(&"─".repeat(width));
    out.push_str("┐\n");
    for line in lines {
        let len = line.width();
        let left = (width - len) / 2;
        let right = width - len - left;
        out.push('│');
        out.push_str(&" ".repeat(left));
        out.push_str(line);
        out.push_str(&" ".repeat(right));
        out.push_str("│\n");
    }
    out.push('└');
    out.push_str(&"─".repeat(width));
    out.push('┘');
    out
}

pub fn notice(formula: Formula, language: &str) -> &'static str {
    match formula {
        Formula::Legacy => text(Label::CalculatingNotice, language),
        Formula::Reworked => text(Label::CalculatingReworkedNotice, language),
    }
}

fn elapsed_ms(elapsed: Duration) -> String {
    format!("{:.2} ms", elapsed.as_secs_f64() * 1000.0)
}

pub fn appraisal(appraisal: &Appraisal) -> String {
    let language = appraisal.language.as_str();
    let title = match appraisal.formula {
        Formula::Legacy => text(Label::ModalTitle, language),
        Formula::Reworked => text(Label::ModalReworkedTitle, language),
    };
    let mut lines = vec![
        title.to_string(),
        String::new(),
        appraisal.display.clone(),
        String::new(),
        format!(
            "{} {}",
            text(Label::CalculatedTime, language),
            elapsed_ms(appraisal.elapsed)
        ),
    ];
    if !appraisal.skipped.is_empty() {
        lines.push(format!(
            "{} {}",
            appraisal.skipped.len(),
            text(Label::SkippedNotes, language)
        ));
    }
    popup(&lines)
}

pub fn wallet(summary: &WalletSummary) -> String {
    popup(&[
        text(Label::WalletTitle, &summary.language).to_string(),
        String::new(),
        summary.display.clone(),
    ])
}

pub fn settings(settings: &Settings) -> String {
    let language = settings.language.as_str();
    let currency = match Currency::from_code(&settings.currency) {
        Some(currency) => format!("{} ({})", currency.code(), currency.symbol().trim()),
        None => settings.currency.clone(),
    };
    popup(&[
        text(Label::SettingsTitle, language).to_string(),
        String::new(),
        format!("{}: {currency}", text(Label::Currency, language)),
        format!("{}: {language}", text(Label::Language, language)),
    ])
}

/// Table of the supported currencies.
pub fn currencies() -> String {
    Currency::ALL
        .iter()
        .map(|currency| {
            format!(
                "{:<4} {:<5} {}",
                currency.code(),
                currency.symbol().trim(),
                currency.multiplier()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use engine::{Valuation, VaultStats};

    use super::*;

    #[test]
    fn popup_centers_lines() {
        let rendered = popup(&["ab".to_string(), "abcd".to_string()]);
        let expected = "┌────────┐\n│   ab   │\n│  abcd  │\n└────────┘";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn popup_aligns_wide_characters() {
        let rendered = popup(&["価値".to_string(), "abcdef".to_string()]);
        let widths: Vec<_> = rendered.lines().map(UnicodeWidthStr::width).collect();
        assert!(widths.iter().all(|width| *width == widths[0]));
        assert!(rendered.contains("│   価値   │"));
    }

    #[test]
    fn appraisal_shows_title_value_and_time() {
        let appraisal = Appraisal {
            formula: Formula::Reworked,
            stats: VaultStats::default(),
            skipped: vec!["broken.md".into()],
            age_days: 0.0,
            valuation: Valuation {
                raw: 12.0,
                converted: 12.0,
            },
            currency: "USD".to_string(),
            language: "en".to_string(),
            display: "US$12.00".to_string(),
            wallet_value: 12.0,
            elapsed: Duration::from_micros(1_500),
        };
        let rendered = super::appraisal(&appraisal);
        assert!(rendered.contains("Vault Value (Reworked)"));
        assert!(rendered.contains("US$12.00"));
        assert!(rendered.contains("Calculated in 1.50 ms"));
        assert!(rendered.contains("1 notes could not be read"));
    }

    #[test]
    fn settings_list_unknown_currency_verbatim() {
        let rendered = settings(&Settings {
            currency: "DOGE".to_string(),
            language: "fr".to_string(),
            wallet_value: 0.0,
            ..Settings::default()
        });
        assert!(rendered.contains("Devise: DOGE"));
        assert!(rendered.contains("Langue: fr"));
    }

    #[test]
    fn currency_table_lists_every_code() {
        assert_eq!(currencies().lines().count(), Currency::ALL.len());
    }
}
