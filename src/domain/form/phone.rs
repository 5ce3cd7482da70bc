//! Phone number input formatting

/// Reformat a phone input as the user types: keep the digits, then
/// hyphenate progressively (`081`, `081-234`, `081-234-5678`). Digits past
/// the third group are appended to it unhyphenated.
pub fn format_phone_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}
