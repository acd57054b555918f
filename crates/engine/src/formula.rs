//! Value formulas.
//!
//! Two independently tuned families coexist: [`Formula::Legacy`] and
//! [`Formula::Reworked`]. Both map the same [`VaultStats`] and vault age to a
//! dollar value; the only difference is the set of divisors.

use crate::{VaultStats, currency::multiplier_for};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Formula {
    #[default]
    Legacy,
    Reworked,
}

/// Divisors of a formula family.
///
/// `value = (a / characters) * (1 + b / words) + c / files + d / sentences
/// + (age_days / age) / age_inner`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormulaParams {
    pub characters: f64,
    pub words: f64,
    pub files: f64,
    pub sentences: f64,
    pub age: f64,
    pub age_inner: f64,
}

/// A value before and after currency conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Valuation {
    /// Dollar value, what the wallet accumulates.
    pub raw: f64,
    /// `raw` converted to the selected currency.
    pub converted: f64,
}

impl Formula {
    pub const fn params(self) -> FormulaParams {
        match self {
            Formula::Legacy => FormulaParams {
                characters: 122_000.0,
                words: 130_000.0,
                files: 200.0,
                sentences: 21_000.0,
                age: 60.0,
                age_inner: 1.0,
            },
            // The age term is divided by 30 twice.
            Formula::Reworked => FormulaParams {
                characters: 92_500.0,
                words: 105_000.0,
                files: 50.0,
                sentences: 12_250.0,
                age: 30.0,
                age_inner: 30.0,
            },
        }
    }

    /// Dollar value of a vault.
    pub fn raw_value(self, stats: &VaultStats, age_days: f64) -> f64 {
        let p = self.params();
        let a = stats.total_characters as f64;
        let b = stats.total_words as f64;
        let c = stats.total_files as f64;
        let d = stats.total_sentences as f64;
        let e = age_days / p.age;

        (a / p.characters) * (1.0 + b / p.words) + c / p.files + d / p.sentences + e / p.age_inner
    }

    /// Raw value and its conversion to `currency` (unknown codes use `1`).
    pub fn evaluate(self, stats: &VaultStats, age_days: f64, currency: &str) -> Valuation {
        let raw = self.raw_value(stats, age_days);
        Valuation {
            raw,
            converted: raw * multiplier_for(currency),
        }
    }
}

impl core::fmt::Display for Formula {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Formula::Legacy => f.write_str("legacy"),
            Formula::Reworked => f.write_str("reworked"),
        }
    }
}
