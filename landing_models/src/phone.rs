//! Progressive masking of brazilian phone numbers, `(DD) NNNNN-NNNN`.

/// Two digit area code followed by up to nine subscriber digits.
pub const MAX_PHONE_DIGITS: usize = 11;

const AREA_CODE_DIGITS: usize = 2;
const PREFIX_END: usize = 7;

/// Strips every non-digit from `raw` and keeps at most [`MAX_PHONE_DIGITS`].
pub fn phone_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect()
}

/// Formats the current content of a phone input field.
///
/// The mask grows with the number of digits typed so far:
///
/// ```rust
/// # use landing_models::phone::format_phone;
/// assert_eq!(format_phone(""), "(");
/// assert_eq!(format_phone("1"), "(1");
/// assert_eq!(format_phone("119"), "(11) 9");
/// assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
/// ```
///
/// Re-formatting an already formatted value yields the same value.
pub fn format_phone(raw: &str) -> String {
    let digits = phone_digits(raw);

    if digits.len() <= AREA_CODE_DIGITS {
        return format!("({digits}");
    }

    let (area_code, rest) = digits.split_at(AREA_CODE_DIGITS);
    if digits.len() <= PREFIX_END {
        return format!("({area_code}) {rest}");
    }

    let (prefix, suffix) = rest.split_at(PREFIX_END - AREA_CODE_DIGITS);
    format!("({area_code}) {prefix}-{suffix}")
}
