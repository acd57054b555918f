/// Symbol used when a currency code is not in the table.
pub const DEFAULT_SYMBOL: &str = "$";

/// Multiplier used when a currency code is not in the table.
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// ISO-like currency code a vault value can be displayed in.
///
/// Every value is computed in US dollars and converted for display by
/// multiplying with [`Currency::multiplier`]. The table is static: rates are
/// fixed approximations, not live quotes.
///
/// Settings keep the code as a plain string so that unknown codes survive a
/// round trip; use [`multiplier_for`] and [`symbol_for`] to resolve them with
/// the documented fallback (`1` and `"$"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    Usd,
    Jpy,
    Php,
    Idr,
    Eur,
    Gbp,
    Krw,
    Cny,
    Aud,
    Hkd,
    Cad,
    Myr,
    Uah,
    Nzd,
    Chf,
    Twd,
    Inr,
    Bnd,
    Irr,
    Vnd,
}

impl Currency {
    pub const ALL: [Currency; 20] = [
        Currency::Usd,
        Currency::Jpy,
        Currency::Php,
        Currency::Idr,
        Currency::Eur,
        Currency::Gbp,
        Currency::Krw,
        Currency::Cny,
        Currency::Aud,
        Currency::Hkd,
        Currency::Cad,
        Currency::Myr,
        Currency::Uah,
        Currency::Nzd,
        Currency::Chf,
        Currency::Twd,
        Currency::Inr,
        Currency::Bnd,
        Currency::Irr,
        Currency::Vnd,
    ];

    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Jpy => "JPY",
            Currency::Php => "PHP",
            Currency::Idr => "IDR",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Krw => "KRW",
            Currency::Cny => "CNY",
            Currency::Aud => "AUD",
            Currency::Hkd => "HKD",
            Currency::Cad => "CAD",
            Currency::Myr => "MYR",
            Currency::Uah => "UAH",
            Currency::Nzd => "NZD",
            Currency::Chf => "CHF",
            Currency::Twd => "TWD",
            Currency::Inr => "INR",
            Currency::Bnd => "BND",
            Currency::Irr => "IRR",
            Currency::Vnd => "VND",
        }
    }

    /// Prefix shown in front of a formatted value.
    ///
    /// Some symbols carry a trailing space (`"Rp "`, `"RM "`) because they are
    /// glued directly to the digits.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "US$",
            Currency::Jpy => "JP¥",
            Currency::Php => "₱",
            Currency::Idr => "Rp ",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Krw => "₩",
            Currency::Cny => "CN¥",
            Currency::Aud => "AU$",
            Currency::Hkd => "HK$",
            Currency::Cad => "CA$",
            Currency::Myr => "RM ",
            Currency::Uah => "₴",
            Currency::Nzd => "NZ$",
            Currency::Chf => "Fr ",
            Currency::Twd => "NT$",
            Currency::Inr => "₹",
            Currency::Bnd => "B$",
            Currency::Irr => "Rls ",
            Currency::Vnd => "₫",
        }
    }

    /// Units of this currency per US dollar.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Jpy => 150.0,
            Currency::Php => 58.0,
            Currency::Idr => 16_000.0,
            Currency::Eur => 0.92,
            Currency::Gbp => 0.79,
            Currency::Krw => 1_400.0,
            Currency::Cny => 7.2,
            Currency::Aud => 1.55,
            Currency::Hkd => 7.8,
            Currency::Cad => 1.4,
            Currency::Myr => 4.5,
            Currency::Uah => 41.0,
            Currency::Nzd => 1.7,
            Currency::Chf => 0.88,
            Currency::Twd => 32.5,
            Currency::Inr => 86.0,
            Currency::Bnd => 1.35,
            Currency::Irr => 42_000.0,
            Currency::Vnd => 25_000.0,
        }
    }

    /// Looks a code up in the table. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Currency> {
        let code = code.trim();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// Multiplier for `code`, `1` when the code is unknown.
#[must_use]
pub fn multiplier_for(code: &str) -> f64 {
    Currency::from_code(code).map_or(DEFAULT_MULTIPLIER, Currency::multiplier)
}

/// Display symbol for `code`, `"$"` when the code is unknown.
#[must_use]
pub fn symbol_for(code: &str) -> &'static str {
    Currency::from_code(code).map_or(DEFAULT_SYMBOL, Currency::symbol)
}
