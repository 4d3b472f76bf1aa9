//! Static country name to ISO-3166 alpha-3 table.

use std::collections::HashSet;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Canonical (title-cased) names of the 54 African states and their codes.
pub const COUNTRY_CODES: [(&str, &str); 54] = [
    ("Algeria", "DZA"),
    ("Angola", "AGO"),
    ("Benin", "BEN"),
    ("Botswana", "BWA"),
    ("Burkina Faso", "BFA"),
    ("Burundi", "BDI"),
    ("Cabo Verde", "CPV"),
    ("Cameroon", "CMR"),
    ("Central African Republic", "CAF"),
    ("Chad", "TCD"),
    ("Comoros", "COM"),
    ("Democratic Republic Of The Congo", "COD"),
    ("Republic Of The Congo", "COG"),
    ("Djibouti", "DJI"),
    ("Egypt", "EGY"),
    ("Equatorial Guinea", "GNQ"),
    ("Eritrea", "ERI"),
    ("Eswatini", "SWZ"),
    ("Ethiopia", "ETH"),
    ("Gabon", "GAB"),
    ("Gambia", "GMB"),
    ("Ghana", "GHA"),
    ("Guinea", "GIN"),
    ("Guinea-Bissau", "GNB"),
    ("Ivory Coast", "CIV"),
    ("Kenya", "KEN"),
    ("Lesotho", "LSO"),
    ("Liberia", "LBR"),
    ("Libya", "LBY"),
    ("Madagascar", "MDG"),
    ("Malawi", "MWI"),
    ("Mali", "MLI"),
    ("Mauritania", "MRT"),
    ("Mauritius", "MUS"),
    ("Morocco", "MAR"),
    ("Mozambique", "MOZ"),
    ("Namibia", "NAM"),
    ("Niger", "NER"),
    ("Nigeria", "NGA"),
    ("Rwanda", "RWA"),
    ("Sao Tome And Principe", "STP"),
    ("Senegal", "SEN"),
    ("Seychelles", "SYC"),
    ("Sierra Leone", "SLE"),
    ("Somalia", "SOM"),
    ("South Africa", "ZAF"),
    ("South Sudan", "SSD"),
    ("Sudan", "SDN"),
    ("Tanzania", "TZA"),
    ("Togo", "TGO"),
    ("Tunisia", "TUN"),
    ("Uganda", "UGA"),
    ("Zambia", "ZMB"),
    ("Zimbabwe", "ZWE"),
];

/// Codes a canonical record may carry. Kept separate from the name table
/// so that a richer mapping cannot admit codes outside Africa.
pub const AFRICAN_ISO_A3: [&str; 54] = [
    "DZA", "AGO", "BEN", "BWA", "BFA", "BDI", "CPV", "CMR", "CAF", "TCD", "COM", "COD", "COG",
    "DJI", "EGY", "GNQ", "ERI", "SWZ", "ETH", "GAB", "GMB", "GHA", "GIN", "GNB", "CIV", "KEN",
    "LSO", "LBR", "LBY", "MDG", "MWI", "MLI", "MRT", "MUS", "MAR", "MOZ", "NAM", "NER", "NGA",
    "RWA", "STP", "SEN", "SYC", "SLE", "SOM", "ZAF", "SSD", "SDN", "TZA", "TGO", "TUN", "UGA",
    "ZMB", "ZWE",
];

static COUNTRY_TABLE: Lazy<IndexMap<&'static str, &'static str>> =
    Lazy::new(|| COUNTRY_CODES.iter().copied().collect());

static ALLOW_LIST: Lazy<HashSet<&'static str>> =
    Lazy::new(|| AFRICAN_ISO_A3.iter().copied().collect());

/// Look up the alpha-3 code for a canonical country name.
pub fn iso_a3_for(country: &str) -> Option<&'static str> {
    COUNTRY_TABLE.get(country).copied()
}

/// Whether a code is one of the African alpha-3 codes.
pub fn is_allowed(code: &str) -> bool {
    ALLOW_LIST.contains(code)
}

/// The built-in name table, in declaration order.
pub fn country_table() -> &'static IndexMap<&'static str, &'static str> {
    &COUNTRY_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_and_allow_list_agree() {
        assert_eq!(country_table().len(), 54);
        assert_eq!(ALLOW_LIST.len(), 54);
        for (_, code) in COUNTRY_CODES {
            assert!(is_allowed(code), "{code} missing from allow-list");
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(iso_a3_for("Democratic Republic Of The Congo"), Some("COD"));
        assert_eq!(iso_a3_for("Guinea-Bissau"), Some("GNB"));
        assert_eq!(iso_a3_for("Atlantis"), None);
        // Exact match only
        assert_eq!(iso_a3_for("kenya"), None);
        assert_eq!(iso_a3_for("Western Sahara"), None);
    }

    #[test]
    fn test_keys_are_title_cased() {
        for (name, _) in COUNTRY_CODES {
            assert_eq!(crate::normalize::title_case(name), name);
        }
    }
}
