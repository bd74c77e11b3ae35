//! Static calling-code table shown next to phone inputs.

use serde::Serialize;

/// A country entry: display name, calling code, and flag emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: &'static str,
    pub ddi: &'static str,
    pub flag: &'static str,
}

const fn country(name: &'static str, ddi: &'static str, flag: &'static str) -> Country {
    Country { name, ddi, flag }
}

/// Countries offered in the DDI picker, Brazil first.
pub static COUNTRIES: &[Country] = &[
    country("Brasil", "55", "🇧🇷"),
    country("Estados Unidos", "1", "🇺🇸"),
    country("Portugal", "351", "🇵🇹"),
    country("Espanha", "34", "🇪🇸"),
    country("França", "33", "🇫🇷"),
    country("Alemanha", "49", "🇩🇪"),
    country("Itália", "39", "🇮🇹"),
    country("Reino Unido", "44", "🇬🇧"),
    country("Japão", "81", "🇯🇵"),
    country("China", "86", "🇨🇳"),
    country("Austrália", "61", "🇦🇺"),
    country("Canadá", "1", "🇨🇦"),
    country("México", "52", "🇲🇽"),
    country("Argentina", "54", "🇦🇷"),
    country("Chile", "56", "🇨🇱"),
];

pub fn countries() -> &'static [Country] {
    COUNTRIES
}

/// First country using `ddi`. Shared codes (`"1"`) resolve to the earlier entry.
pub fn find_by_ddi(ddi: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.ddi == ddi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_starts_with_brazil() {
        assert_eq!(countries().len(), 15);
        assert_eq!(countries()[0].ddi, "55");
        assert_eq!(countries()[0].name, "Brasil");
    }

    #[test]
    fn test_find_by_ddi() {
        assert_eq!(find_by_ddi("351").map(|c| c.name), Some("Portugal"));
        assert_eq!(find_by_ddi("1").map(|c| c.name), Some("Estados Unidos"));
        assert!(find_by_ddi("999").is_none());
    }

    #[test]
    fn test_country_serializes() {
        let json = serde_json::to_value(find_by_ddi("56").unwrap()).unwrap();
        assert_eq!(json["name"], "Chile");
        assert_eq!(json["ddi"], "56");
    }
}
