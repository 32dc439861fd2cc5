use std::collections::HashMap;

use once_cell::sync::Lazy;

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Pl,
}

/// Immutable reference row: ISO codes plus the display name in both locales
/// the pool's sheets show up in.
#[derive(Debug, Clone, Copy)]
pub struct CountryRecord {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name_en: &'static str,
    pub name_pl: &'static str,
}

impl CountryRecord {
    pub fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.name_en,
            Locale::Pl => self.name_pl,
        }
    }
}

/// World Cup field plus the European sides that keep showing up on sheets.
/// ISO 3166 codes; football-association aliases (GER, NED, ...) are left to
/// the raw-text fallback on purpose.
pub const BUILTIN_COUNTRIES: &[CountryRecord] = &[
    CountryRecord { alpha2: "AR", alpha3: "ARG", name_en: "Argentina", name_pl: "Argentyna" },
    CountryRecord { alpha2: "AU", alpha3: "AUS", name_en: "Australia", name_pl: "Australia" },
    CountryRecord { alpha2: "AT", alpha3: "AUT", name_en: "Austria", name_pl: "Austria" },
    CountryRecord { alpha2: "BE", alpha3: "BEL", name_en: "Belgium", name_pl: "Belgia" },
    CountryRecord { alpha2: "BO", alpha3: "BOL", name_en: "Bolivia", name_pl: "Boliwia" },
    CountryRecord { alpha2: "BR", alpha3: "BRA", name_en: "Brazil", name_pl: "Brazylia" },
    CountryRecord { alpha2: "CM", alpha3: "CMR", name_en: "Cameroon", name_pl: "Kamerun" },
    CountryRecord { alpha2: "CA", alpha3: "CAN", name_en: "Canada", name_pl: "Kanada" },
    CountryRecord { alpha2: "CV", alpha3: "CPV", name_en: "Cape Verde", name_pl: "Republika Zielonego Przylądka" },
    CountryRecord { alpha2: "CL", alpha3: "CHL", name_en: "Chile", name_pl: "Chile" },
    CountryRecord { alpha2: "CO", alpha3: "COL", name_en: "Colombia", name_pl: "Kolumbia" },
    CountryRecord { alpha2: "CR", alpha3: "CRI", name_en: "Costa Rica", name_pl: "Kostaryka" },
    CountryRecord { alpha2: "HR", alpha3: "HRV", name_en: "Croatia", name_pl: "Chorwacja" },
    CountryRecord { alpha2: "CW", alpha3: "CUW", name_en: "Curaçao", name_pl: "Curaçao" },
    CountryRecord { alpha2: "CZ", alpha3: "CZE", name_en: "Czechia", name_pl: "Czechy" },
    CountryRecord { alpha2: "DK", alpha3: "DNK", name_en: "Denmark", name_pl: "Dania" },
    CountryRecord { alpha2: "EC", alpha3: "ECU", name_en: "Ecuador", name_pl: "Ekwador" },
    CountryRecord { alpha2: "EG", alpha3: "EGY", name_en: "Egypt", name_pl: "Egipt" },
    CountryRecord { alpha2: "FR", alpha3: "FRA", name_en: "France", name_pl: "Francja" },
    CountryRecord { alpha2: "DE", alpha3: "DEU", name_en: "Germany", name_pl: "Niemcy" },
    CountryRecord { alpha2: "GH", alpha3: "GHA", name_en: "Ghana", name_pl: "Ghana" },
    CountryRecord { alpha2: "GR", alpha3: "GRC", name_en: "Greece", name_pl: "Grecja" },
    CountryRecord { alpha2: "HT", alpha3: "HTI", name_en: "Haiti", name_pl: "Haiti" },
    CountryRecord { alpha2: "HU", alpha3: "HUN", name_en: "Hungary", name_pl: "Węgry" },
    CountryRecord { alpha2: "IR", alpha3: "IRN", name_en: "Iran", name_pl: "Iran" },
    CountryRecord { alpha2: "IE", alpha3: "IRL", name_en: "Ireland", name_pl: "Irlandia" },
    CountryRecord { alpha2: "IT", alpha3: "ITA", name_en: "Italy", name_pl: "Włochy" },
    CountryRecord { alpha2: "CI", alpha3: "CIV", name_en: "Ivory Coast", name_pl: "Wybrzeże Kości Słoniowej" },
    CountryRecord { alpha2: "JP", alpha3: "JPN", name_en: "Japan", name_pl: "Japonia" },
    CountryRecord { alpha2: "JO", alpha3: "JOR", name_en: "Jordan", name_pl: "Jordania" },
    CountryRecord { alpha2: "MA", alpha3: "MAR", name_en: "Morocco", name_pl: "Maroko" },
    CountryRecord { alpha2: "MX", alpha3: "MEX", name_en: "Mexico", name_pl: "Meksyk" },
    CountryRecord { alpha2: "NL", alpha3: "NLD", name_en: "Netherlands", name_pl: "Holandia" },
    CountryRecord { alpha2: "NZ", alpha3: "NZL", name_en: "New Zealand", name_pl: "Nowa Zelandia" },
    CountryRecord { alpha2: "NG", alpha3: "NGA", name_en: "Nigeria", name_pl: "Nigeria" },
    CountryRecord { alpha2: "NO", alpha3: "NOR", name_en: "Norway", name_pl: "Norwegia" },
    CountryRecord { alpha2: "PA", alpha3: "PAN", name_en: "Panama", name_pl: "Panama" },
    CountryRecord { alpha2: "PY", alpha3: "PRY", name_en: "Paraguay", name_pl: "Paragwaj" },
    CountryRecord { alpha2: "PE", alpha3: "PER", name_en: "Peru", name_pl: "Peru" },
    CountryRecord { alpha2: "PL", alpha3: "POL", name_en: "Poland", name_pl: "Polska" },
    CountryRecord { alpha2: "PT", alpha3: "PRT", name_en: "Portugal", name_pl: "Portugalia" },
    CountryRecord { alpha2: "QA", alpha3: "QAT", name_en: "Qatar", name_pl: "Katar" },
    CountryRecord { alpha2: "RO", alpha3: "ROU", name_en: "Romania", name_pl: "Rumunia" },
    CountryRecord { alpha2: "SA", alpha3: "SAU", name_en: "Saudi Arabia", name_pl: "Arabia Saudyjska" },
    CountryRecord { alpha2: "SN", alpha3: "SEN", name_en: "Senegal", name_pl: "Senegal" },
    CountryRecord { alpha2: "RS", alpha3: "SRB", name_en: "Serbia", name_pl: "Serbia" },
    CountryRecord { alpha2: "SK", alpha3: "SVK", name_en: "Slovakia", name_pl: "Słowacja" },
    CountryRecord { alpha2: "SI", alpha3: "SVN", name_en: "Slovenia", name_pl: "Słowenia" },
    CountryRecord { alpha2: "ZA", alpha3: "ZAF", name_en: "South Africa", name_pl: "Republika Południowej Afryki" },
    CountryRecord { alpha2: "KR", alpha3: "KOR", name_en: "South Korea", name_pl: "Korea Południowa" },
    CountryRecord { alpha2: "ES", alpha3: "ESP", name_en: "Spain", name_pl: "Hiszpania" },
    CountryRecord { alpha2: "SE", alpha3: "SWE", name_en: "Sweden", name_pl: "Szwecja" },
    CountryRecord { alpha2: "CH", alpha3: "CHE", name_en: "Switzerland", name_pl: "Szwajcaria" },
    CountryRecord { alpha2: "TN", alpha3: "TUN", name_en: "Tunisia", name_pl: "Tunezja" },
    CountryRecord { alpha2: "TR", alpha3: "TUR", name_en: "Turkey", name_pl: "Turcja" },
    CountryRecord { alpha2: "UA", alpha3: "UKR", name_en: "Ukraine", name_pl: "Ukraina" },
    CountryRecord { alpha2: "GB", alpha3: "GBR", name_en: "United Kingdom", name_pl: "Wielka Brytania" },
    CountryRecord { alpha2: "US", alpha3: "USA", name_en: "United States", name_pl: "Stany Zjednoczone" },
    CountryRecord { alpha2: "UY", alpha3: "URY", name_en: "Uruguay", name_pl: "Urugwaj" },
    CountryRecord { alpha2: "UZ", alpha3: "UZB", name_en: "Uzbekistan", name_pl: "Uzbekistan" },
    CountryRecord { alpha2: "VE", alpha3: "VEN", name_en: "Venezuela", name_pl: "Wenezuela" },
];

static BUILTIN_TABLE: Lazy<CountryTable> =
    Lazy::new(|| CountryTable::from_records(BUILTIN_COUNTRIES));

/// Normalized indexes over a record set. Built once, read-only afterwards;
/// construction is explicit so tests can run against a reduced table.
pub struct CountryTable {
    records: &'static [CountryRecord],
    by_alpha2: HashMap<&'static str, usize>,
    by_alpha3: HashMap<&'static str, usize>,
    by_name: HashMap<String, usize>,
}

impl CountryTable {
    pub fn from_records(records: &'static [CountryRecord]) -> Self {
        let mut by_alpha2 = HashMap::with_capacity(records.len());
        let mut by_alpha3 = HashMap::with_capacity(records.len());
        let mut by_name = HashMap::with_capacity(records.len() * 2);
        for (idx, record) in records.iter().enumerate() {
            by_alpha2.insert(record.alpha2, idx);
            by_alpha3.insert(record.alpha3, idx);
            by_name.insert(record.name_en.to_lowercase(), idx);
            by_name.insert(record.name_pl.to_lowercase(), idx);
        }
        Self {
            records,
            by_alpha2,
            by_alpha3,
            by_name,
        }
    }

    /// The shared table over [`BUILTIN_COUNTRIES`].
    pub fn builtin() -> &'static CountryTable {
        &BUILTIN_TABLE
    }

    /// Canonical 3-letter code for a code or a localized name, `None` when
    /// nothing matches. Callers keep their raw text in that case.
    pub fn resolve_code(&self, name_or_code: &str) -> Option<&'static str> {
        self.lookup(name_or_code).map(|record| record.alpha3)
    }

    /// Display name in the requested locale; unknown codes echo the input.
    pub fn display_name(&self, code: &str, locale: Locale) -> String {
        match self.lookup(code) {
            Some(record) => record.name(locale).to_string(),
            None => code.to_string(),
        }
    }

    /// Emoji flag from the 2-letter code via Unicode regional indicators.
    /// Deterministic and locale-independent; for unknown codes the input's
    /// own letters are composed, matching how downstream always rendered it.
    pub fn flag_emoji(&self, code: &str) -> String {
        let normalized = normalize(code);
        let alpha2 = match self.lookup(&normalized) {
            Some(record) => record.alpha2.to_string(),
            None => normalized,
        };
        alpha2
            .to_uppercase()
            .chars()
            .filter(char::is_ascii_uppercase)
            .filter_map(|c| char::from_u32(REGIONAL_INDICATOR_A + (c as u32 - 'A' as u32)))
            .collect()
    }

    pub fn record(&self, name_or_code: &str) -> Option<&CountryRecord> {
        self.lookup(name_or_code)
    }

    fn lookup(&self, raw: &str) -> Option<&CountryRecord> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }
        if normalized.len() <= 3 && normalized.chars().all(|c| c.is_ascii_alphabetic()) {
            let code = normalized.to_ascii_uppercase();
            if let Some(&idx) = self.by_alpha3.get(code.as_str()) {
                return self.records.get(idx);
            }
            if let Some(&idx) = self.by_alpha2.get(code.as_str()) {
                return self.records.get(idx);
            }
        }
        let name = normalized.to_lowercase();
        self.by_name
            .get(name.as_str())
            .and_then(|&idx| self.records.get(idx))
    }
}

/// Trim and collapse internal whitespace; case is handled per index.
fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_resolve_case_insensitively() {
        let table = CountryTable::builtin();
        assert_eq!(table.resolve_code("POL"), Some("POL"));
        assert_eq!(table.resolve_code("pl"), Some("POL"));
        assert_eq!(table.resolve_code("  de "), Some("DEU"));
    }

    #[test]
    fn names_resolve_in_both_locales() {
        let table = CountryTable::builtin();
        assert_eq!(table.resolve_code("Germany"), Some("DEU"));
        assert_eq!(table.resolve_code("Niemcy"), Some("DEU"));
        assert_eq!(table.resolve_code("korea  południowa"), Some("KOR"));
    }

    #[test]
    fn unknown_input_is_none_not_error() {
        assert_eq!(CountryTable::builtin().resolve_code("Atlantis"), None);
        assert_eq!(CountryTable::builtin().resolve_code(""), None);
    }

    #[test]
    fn flag_is_two_regional_indicators() {
        let table = CountryTable::builtin();
        assert_eq!(table.flag_emoji("POL"), "\u{1F1F5}\u{1F1F1}");
        assert_eq!(table.flag_emoji("br"), "\u{1F1E7}\u{1F1F7}");
    }
}
