//! Area normalization
//!
//! Pulls a built-up area out of free text such as
//! `Calculate cost for 1,500 sq.ft` or `௧௫௦௦ சதுர அடி`.
//! Patterns are tried in order and the first hit wins. Square metres are
//! reported with their unit but the value is not converted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::numerals::indic_numerals_to_ascii;

/// Unit the visitor wrote the area in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    SquareFeet,
    SquareMetres,
}

/// Area mentioned in a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// Integer part of the number as written, separators removed
    pub value: u64,
    pub unit: AreaUnit,
}

// Number with optional comma grouping (western or Indian) and decimals
const NUMBER: &str = r"(\d[\d,]*(?:\.\d+)?)";

static AREA_PATTERNS: Lazy<Vec<(Regex, AreaUnit)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(&format!(
                r"(?i){}\s*(?:sq\.?\s*ft|sqft|sqrt\.?\s*ft|square\s*f(?:ee|oo)t|sq\.?\s*f(?:ee|oo)t|ft²)",
                NUMBER
            ))
            .unwrap(),
            AreaUnit::SquareFeet,
        ),
        (
            Regex::new(&format!(r"{}\s*(?:வர்க்க\s*அடி|சதுர\s*அடி)", NUMBER)).unwrap(),
            AreaUnit::SquareFeet,
        ),
        (
            Regex::new(&format!(
                r"(?i){}\s*(?:sq\.?\s*m(?:eters?|etres?|trs?)?\b|sqm\b|square\s*met(?:er|re)s?)",
                NUMBER
            ))
            .unwrap(),
            AreaUnit::SquareMetres,
        ),
    ]
});

/// Extract the first area mention with its unit
pub fn extract_area_with_unit(text: &str) -> Option<Area> {
    let text = indic_numerals_to_ascii(text);

    AREA_PATTERNS.iter().find_map(|(pattern, unit)| {
        let caps = pattern.captures(&text)?;
        let value = parse_integer_part(caps.get(1)?.as_str())?;
        Some(Area { value, unit: *unit })
    })
}

/// Extract the first area mention as a plain number
///
/// Zero and unparseable numbers count as no area.
pub fn extract_area(text: &str) -> Option<u64> {
    extract_area_with_unit(text).map(|a| a.value)
}

fn parse_integer_part(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    let integer = digits.split('.').next().unwrap_or_default();
    integer.parse::<u64>().ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_square_feet_variants() {
        assert_eq!(extract_area("Calculate cost for 1500 sq.ft"), Some(1500));
        assert_eq!(extract_area("1500 sq ft house"), Some(1500));
        assert_eq!(extract_area("1500sqft"), Some(1500));
        assert_eq!(extract_area("1200 square feet"), Some(1200));
        assert_eq!(extract_area("1200 Square Foot"), Some(1200));
        assert_eq!(extract_area("900 sq. ft."), Some(900));
        assert_eq!(extract_area("800 sqrt ft"), Some(800));
        assert_eq!(extract_area("950 ft²"), Some(950));
    }

    #[test]
    fn test_comma_grouping_removed() {
        assert_eq!(extract_area("2,400 sq.ft"), Some(2400));
        assert_eq!(extract_area("1,20,000 square feet"), Some(120000));
        assert_eq!(extract_area("1,500 sqft"), Some(1500));
    }

    #[test]
    fn test_decimals_truncate() {
        assert_eq!(extract_area("1500.75 sqft"), Some(1500));
    }

    #[test]
    fn test_tamil_units() {
        assert_eq!(extract_area("1500 சதுர அடி வீடு"), Some(1500));
        assert_eq!(extract_area("௧௨௦௦ வர்க்க அடி"), Some(1200));
    }

    #[test]
    fn test_square_metres_returned_raw() {
        let area = extract_area_with_unit("house of 140 sq m").unwrap();
        assert_eq!(area.value, 140);
        assert_eq!(area.unit, AreaUnit::SquareMetres);
        assert_eq!(extract_area("200 sqm"), Some(200));
        assert_eq!(extract_area("200 square meters"), Some(200));
    }

    #[test]
    fn test_no_area() {
        assert_eq!(extract_area("cost for 3BHK"), None);
        assert_eq!(extract_area("1500"), None);
        assert_eq!(extract_area("0 sq ft"), None);
        assert_eq!(extract_area(""), None);
    }

    #[test]
    fn test_feet_preferred_over_metres() {
        let area = extract_area_with_unit("1500 sq ft or 140 sq m").unwrap();
        assert_eq!(area.unit, AreaUnit::SquareFeet);
        assert_eq!(area.value, 1500);
    }
}
