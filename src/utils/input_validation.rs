//! Validation des champs texte saisis aux caisses et au self-checkout:
//! email, téléphone, CPF, mot de passe, et nettoyage du texte libre.
//!
//! Toutes les fonctions sont totales: elles ne paniquent jamais et
//! renvoient `false` (ou une chaîne vide) pour une entrée invalide.

use derive_more::derive::Display;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::consts::{CPF_LENGTH, MIN_PASSWORD_LENGTH, PHONE_MAX_DIGITS, PHONE_MIN_DIGITS};
use crate::utils::masks::{mask_cpf, mask_phone};

// local-part@domain, with a dot somewhere in the domain
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// Keeps only the ASCII digits of the input, in their original order.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Checks the `local-part@domain.tld` shape. The input is not trimmed.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// A phone number is valid when it has 10 or 11 digits, area code included.
pub fn is_valid_phone(phone: &str) -> bool {
    let count = digits_only(phone).len();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&count)
}

/// Computes a CPF check digit over the given prefix.
///
/// Weights start at `prefix.len() + 1` and go down to 2, so the first
/// check digit uses 10..=2 over 9 digits and the second 11..=2 over 10.
fn cpf_check_digit(prefix: &[u32]) -> u32 {
    let first_weight = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, digit)| digit * (first_weight - i as u32))
        .sum();

    match 11 - sum % 11 {
        10 | 11 => 0,
        remainder => remainder,
    }
}

/// Validates a CPF number, with or without its `000.000.000-00` punctuation.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = digits_only(cpf)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != CPF_LENGTH {
        return false;
    }

    // 000.000.000-00, 111.111.111-11... are placeholders, not identities
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    if cpf_check_digit(&digits[..9]) != digits[9] {
        return false;
    }

    cpf_check_digit(&digits[..10]) == digits[10]
}

/// A password is accepted when present and at least 6 characters long.
/// No character class mix is required. Length is counted in `char`s,
/// so an emoji counts once, not as two UTF-16 units.
pub fn is_valid_password(password: Option<&str>) -> bool {
    match password {
        Some(password) => password.chars().count() >= MIN_PASSWORD_LENGTH,
        None => false,
    }
}

/// Trims free text, byte order marks included. A missing value becomes
/// the empty string.
pub fn sanitize_text(text: Option<&str>) -> String {
    text.map(|t| {
        t.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
            .to_owned()
    })
    .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub struct InvalidInput;

/// Wrapper type for an email address that has been validated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = InvalidInput;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        if is_valid_email(&email) {
            Ok(Self(email))
        } else {
            debug!("Rejected email address");
            Err(InvalidInput)
        }
    }
}

impl TryFrom<&str> for Email {
    type Error = InvalidInput;

    fn try_from(email: &str) -> Result<Self, Self::Error> {
        Self::try_from(email.to_owned())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wrapper type for a phone number that has been validated.
/// Only the digits are kept; `Display` applies the input mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Phone(String);

impl TryFrom<&str> for Phone {
    type Error = InvalidInput;

    fn try_from(phone: &str) -> Result<Self, Self::Error> {
        if is_valid_phone(phone) {
            Ok(Self(digits_only(phone)))
        } else {
            debug!("Rejected phone number");
            Err(InvalidInput)
        }
    }
}

impl TryFrom<String> for Phone {
    type Error = InvalidInput;

    fn try_from(phone: String) -> Result<Self, Self::Error> {
        Self::try_from(phone.as_str())
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", mask_phone(&self.0))
    }
}

/// Wrapper type for a CPF that passed the check digit validation.
/// Stored as its 11 digits, displayed as `000.000.000-00`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Cpf(String);

impl TryFrom<&str> for Cpf {
    type Error = InvalidInput;

    fn try_from(cpf: &str) -> Result<Self, Self::Error> {
        if is_valid_cpf(cpf) {
            Ok(Self(digits_only(cpf)))
        } else {
            debug!("Rejected CPF");
            Err(InvalidInput)
        }
    }
}

impl TryFrom<String> for Cpf {
    type Error = InvalidInput;

    fn try_from(cpf: String) -> Result<Self, Self::Error> {
        Self::try_from(cpf.as_str())
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", mask_cpf(&self.0))
    }
}

/// Wrapper type for a password that meets the length policy.
/// Its `Debug` output never shows the content.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl TryFrom<&str> for Password {
    type Error = InvalidInput;

    fn try_from(password: &str) -> Result<Self, Self::Error> {
        if is_valid_password(Some(password)) {
            Ok(Self(password.to_owned()))
        } else {
            Err(InvalidInput)
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
