//! Indic digit normalization
//!
//! Visitors typing on Indian keyboards may enter areas as `௧௫௦௦` or
//! `१५००`. Every supported script encodes 0-9 as ten consecutive code
//! points, so conversion is an offset from the script's zero.

/// Zero code point of each supported digit block
const DIGIT_ZEROS: [u32; 11] = [
    0x0966, // Devanagari
    0x09E6, // Bengali/Assamese
    0x0BE6, // Tamil
    0x0C66, // Telugu
    0x0AE6, // Gujarati
    0x0CE6, // Kannada
    0x0D66, // Malayalam
    0x0B66, // Odia
    0x0A66, // Gurmukhi
    0x1C50, // Ol Chiki
    0x06F0, // Extended Arabic-Indic
];

fn indic_digit_value(c: char) -> Option<u32> {
    let cp = c as u32;
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&cp))
        .map(|&zero| cp - zero)
}

/// Check if a character is an Indic numeral
pub fn is_indic_numeral(c: char) -> bool {
    indic_digit_value(c).is_some()
}

/// Replace Indic digits with ASCII digits, leaving everything else intact
pub fn indic_numerals_to_ascii(s: &str) -> String {
    s.chars()
        .map(|c| match indic_digit_value(c) {
            Some(v) => char::from_digit(v, 10).unwrap_or(c),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tamil_digits() {
        assert_eq!(indic_numerals_to_ascii("௧௫௦௦ சதுர அடி"), "1500 சதுர அடி");
    }

    #[test]
    fn test_devanagari_digits() {
        assert_eq!(indic_numerals_to_ascii("१२०० sq ft"), "1200 sq ft");
        assert!(is_indic_numeral('९'));
    }

    #[test]
    fn test_ascii_and_letters_untouched() {
        assert_eq!(indic_numerals_to_ascii("3BHK @ ₹2,100"), "3BHK @ ₹2,100");
        assert!(!is_indic_numeral('7'));
        assert!(!is_indic_numeral('க'));
    }
}
