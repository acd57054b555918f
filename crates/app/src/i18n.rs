//! Localized labels for the terminal output.
//!
//! Lookup uses the primary subtag of the language tag and falls back to
//! English.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    CalculatingNotice,
    CalculatingReworkedNotice,
    ModalTitle,
    ModalReworkedTitle,
    CalculatedTime,
    WalletTitle,
    SkippedNotes,
    SettingsTitle,
    Currency,
    Language,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lang {
    En,
    Id,
    Es,
    Fr,
    De,
    Ja,
}

impl Lang {
    fn parse(language: &str) -> Self {
        let primary = language
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "id" => Lang::Id,
            "es" => Lang::Es,
            "fr" => Lang::Fr,
            "de" => Lang::De,
            "ja" => Lang::Ja,
            _ => Lang::En,
        }
    }
}

pub fn text(label: Label, language: &str) -> &'static str {
    use Label::*;

    match (Lang::parse(language), label) {
        (Lang::Id, CalculatingNotice) => "Menghitung nilai vault...",
        (Lang::Id, CalculatingReworkedNotice) => "Menghitung nilai vault (versi baru)...",
        (Lang::Id, ModalTitle) => "Nilai Vault",
        (Lang::Id, ModalReworkedTitle) => "Nilai Vault (Versi Baru)",
        (Lang::Id, CalculatedTime) => "Dihitung dalam",
        (Lang::Id, WalletTitle) => "Dompet",
        (Lang::Id, SkippedNotes) => "catatan tidak dapat dibaca dan dilewati",
        (Lang::Id, SettingsTitle) => "Pengaturan",
        (Lang::Id, Currency) => "Mata uang",
        (Lang::Id, Language) => "Bahasa",

        (Lang::Es, CalculatingNotice) => "Calculando el valor de la bóveda...",
        (Lang::Es, CalculatingReworkedNotice) => "Calculando el valor renovado de la bóveda...",
        (Lang::Es, ModalTitle) => "Valor de la bóveda",
        (Lang::Es, ModalReworkedTitle) => "Valor de la bóveda (renovado)",
        (Lang::Es, CalculatedTime) => "Calculado en",
        (Lang::Es, WalletTitle) => "Cartera",
        (Lang::Es, SkippedNotes) => "notas no se pudieron leer y se omitieron",
        (Lang::Es, SettingsTitle) => "Ajustes",
        (Lang::Es, Currency) => "Moneda",
        (Lang::Es, Language) => "Idioma",

        (Lang::Fr, CalculatingNotice) => "Calcul de la valeur du coffre...",
        (Lang::Fr, CalculatingReworkedNotice) => "Calcul de la valeur remaniée du coffre...",
        (Lang::Fr, ModalTitle) => "Valeur du coffre",
        (Lang::Fr, ModalReworkedTitle) => "Valeur du coffre (remaniée)",
        (Lang::Fr, CalculatedTime) => "Calculé en",
        (Lang::Fr, WalletTitle) => "Portefeuille",
        (Lang::Fr, SkippedNotes) => "notes illisibles ont été ignorées",
        (Lang::Fr, SettingsTitle) => "Paramètres",
        (Lang::Fr, Currency) => "Devise",
        (Lang::Fr, Language) => "Langue",

        (Lang::De, CalculatingNotice) => "Tresorwert wird berechnet...",
        (Lang::De, CalculatingReworkedNotice) => "Überarbeiteter Tresorwert wird berechnet...",
        (Lang::De, ModalTitle) => "Tresorwert",
        (Lang::De, ModalReworkedTitle) => "Tresorwert (überarbeitet)",
        (Lang::De, CalculatedTime) => "Berechnet in",
        (Lang::De, WalletTitle) => "Geldbörse",
        (Lang::De, SkippedNotes) => "Notizen waren nicht lesbar und wurden übersprungen",
        (Lang::De, SettingsTitle) => "Einstellungen",
        (Lang::De, Currency) => "Währung",
        (Lang::De, Language) => "Sprache",

        (Lang::Ja, CalculatingNotice) => "保管庫の価値を計算中...",
        (Lang::Ja, CalculatingReworkedNotice) => "保管庫の価値（改訂版）を計算中...",
        (Lang::Ja, ModalTitle) => "保管庫の価値",
        (Lang::Ja, ModalReworkedTitle) => "保管庫の価値（改訂版）",
        (Lang::Ja, CalculatedTime) => "計算時間",
        (Lang::Ja, WalletTitle) => "財布",
        (Lang::Ja, SkippedNotes) => "件のノートを読み取れずスキップしました",
        (Lang::Ja, SettingsTitle) => "設定",
        (Lang::Ja, Currency) => "通貨",
        (Lang::Ja, Language) => "言語",

        (_, CalculatingNotice) => "Calculating vault value...",
        (_, CalculatingReworkedNotice) => "Calculating reworked vault value...",
        (_, ModalTitle) => "Vault Value",
        (_, ModalReworkedTitle) => "Vault Value (Reworked)",
        (_, CalculatedTime) => "Calculated in",
        (_, WalletTitle) => "Wallet",
        (_, SkippedNotes) => "notes could not be read and were skipped",
        (_, SettingsTitle) => "Settings",
        (_, Currency) => "Currency",
        (_, Language) => "Language",
    }
}
