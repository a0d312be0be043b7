//! Input masks for the register and self-checkout forms.
//!
//! A mask always strips the input down to its digits before formatting,
//! so feeding an already masked value back in yields the same string.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::{CPF_LENGTH, PHONE_MAX_DIGITS};
use crate::utils::input_validation::digits_only;

static AREA_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2})(\d)").expect("Failed to compile area code regex")
});

static LINE_SUFFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d)(\d{4})$").expect("Failed to compile line suffix regex")
});

/// Formats a phone number as `(11) 98765-4321` while it is being typed.
///
/// The first two digits become the area code once a third digit is typed,
/// and a hyphen goes before the last four digits once there are at least
/// five digits after the area code. Beyond 11 digits the bare digits are
/// returned. No validity check is performed.
pub fn mask_phone(input: &str) -> String {
    let digits = digits_only(input);
    if digits.len() > PHONE_MAX_DIGITS {
        return digits;
    }

    let with_area_code = AREA_CODE_REGEX.replace(&digits, "($1) $2");
    LINE_SUFFIX_REGEX
        .replace(&with_area_code, "$1-$2")
        .into_owned()
}

/// Formats a CPF as `000.000.000-00` while it is being typed.
/// Digits past the eleventh are dropped.
pub fn mask_cpf(input: &str) -> String {
    let mut masked = String::with_capacity(CPF_LENGTH + 3);

    for (i, digit) in digits_only(input).chars().take(CPF_LENGTH).enumerate() {
        match i {
            3 | 6 => masked.push('.'),
            9 => masked.push('-'),
            _ => {}
        }
        masked.push(digit);
    }

    masked
}
