//! Payment card input validation.
//!
//! These checks are input hygiene only: they tell a customer that a card
//! number was mistyped or a card has expired before anything is submitted.
//! No card data is ever stored or forwarded.
//!
//! ```
//! use adventure_works_core::{CardNumber, Cvv, ExpiryDate};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//!
//! assert!(CardNumber::parse("4242 4242 4242 4242").is_ok());
//! assert!(ExpiryDate::parse("12/27").unwrap().is_valid_on(today));
//! assert!(Cvv::parse("123").is_ok());
//! ```

use core::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Errors that can occur when parsing card fields.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardError {
    /// The card number has the wrong number of digits.
    #[error("card number must have between {min} and {max} digits, got {actual}")]
    InvalidLength {
        /// Minimum digits.
        min: usize,
        /// Maximum digits.
        max: usize,
        /// Digits found in the input.
        actual: usize,
    },
    /// The card number fails the Luhn checksum.
    #[error("card number checksum is invalid")]
    ChecksumMismatch,
    /// The expiry is not in `MM/YY` form.
    #[error("expiry date must be in MM/YY format")]
    MalformedExpiry,
    /// The expiry month is outside 1-12.
    #[error("expiry month must be between 01 and 12")]
    InvalidMonth,
    /// The security code is not 3 or 4 digits.
    #[error("security code must have 3 or 4 digits")]
    InvalidCvv,
}

/// Keep only ASCII digits, dropping spaces, dashes and anything else typed.
fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Returns true if the digit string passes the Luhn (mod 10) checksum.
///
/// Every second digit from the right is doubled, with 9 subtracted from
/// doubled values above 9, and the total must be a multiple of 10. Non-digit
/// characters make the check fail.
#[must_use]
pub fn luhn_valid(digits: &str) -> bool {
    let mut sum = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

/// A structurally plausible payment card number.
///
/// Holds the digits only. `Debug` and `Display` show the last four digits so
/// the number can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct CardNumber(String);

impl CardNumber {
    /// Fewest digits accepted.
    pub const MIN_DIGITS: usize = 13;
    /// Most digits accepted.
    pub const MAX_DIGITS: usize = 19;

    /// Parse a card number typed by a customer.
    ///
    /// Whitespace and other non-digit characters are ignored.
    ///
    /// # Errors
    ///
    /// Returns `CardError::InvalidLength` if fewer than 13 or more than 19
    /// digits remain, or `CardError::ChecksumMismatch` if the Luhn check fails.
    pub fn parse(input: &str) -> Result<Self, CardError> {
        let digits = digits_only(input);

        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len()) {
            return Err(CardError::InvalidLength {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
                actual: digits.len(),
            });
        }

        if !luhn_valid(&digits) {
            return Err(CardError::ChecksumMismatch);
        }

        Ok(Self(digits))
    }

    /// The last four digits.
    #[must_use]
    pub fn last_four(&self) -> &str {
        self.0.get(self.0.len().saturating_sub(4)..).unwrap_or("")
    }

    /// Number of digits in the card number.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed card number.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardNumber(**** {})", self.last_four())
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**** {}", self.last_four())
    }
}

/// A card expiry month in `MM/YY` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpiryDate {
    month: u32,
    /// Two-digit year (`27` for 2027).
    year: u32,
}

impl ExpiryDate {
    /// Parse an expiry date such as `"08/27"`.
    ///
    /// Whitespace anywhere in the input is ignored. Exactly two digits, a
    /// slash and two digits must remain.
    ///
    /// # Errors
    ///
    /// Returns `CardError::MalformedExpiry` if the shape is wrong, or
    /// `CardError::InvalidMonth` if the month is not 01-12.
    pub fn parse(input: &str) -> Result<Self, CardError> {
        let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();

        let (month, year) = cleaned
            .split_once('/')
            .ok_or(CardError::MalformedExpiry)?;

        let is_two_digits = |s: &str| s.len() == 2 && s.chars().all(|c| c.is_ascii_digit());
        if !is_two_digits(month) || !is_two_digits(year) {
            return Err(CardError::MalformedExpiry);
        }

        let month: u32 = month.parse().map_err(|_| CardError::MalformedExpiry)?;
        let year: u32 = year.parse().map_err(|_| CardError::MalformedExpiry)?;

        if !(1..=12).contains(&month) {
            return Err(CardError::InvalidMonth);
        }

        Ok(Self { month, year })
    }

    /// Expiry month, 1-12.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Two-digit expiry year.
    #[must_use]
    pub const fn year(&self) -> u32 {
        self.year
    }

    /// Whether the card can still be used on `today`.
    ///
    /// A card is valid through the whole of its expiry month; only months
    /// strictly before the current one are rejected. Years are compared on
    /// their last two digits.
    #[must_use]
    pub fn is_valid_on(&self, today: NaiveDate) -> bool {
        let current_year = today.year().rem_euclid(100).unsigned_abs();
        let current_month = today.month();

        (self.year, self.month) >= (current_year, current_month)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

/// A card security code (CVV/CVC).
#[derive(Clone, PartialEq, Eq)]
pub struct Cvv(String);

impl Cvv {
    /// Parse a security code, ignoring whitespace and non-digits.
    ///
    /// # Errors
    ///
    /// Returns `CardError::InvalidCvv` unless exactly 3 or 4 digits remain.
    pub fn parse(input: &str) -> Result<Self, CardError> {
        let digits = digits_only(input);
        match digits.len() {
            3 | 4 => Ok(Self(digits)),
            _ => Err(CardError::InvalidCvv),
        }
    }
}

impl fmt::Debug for Cvv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cvv([REDACTED])")
    }
}

/// Format a card number as typed into groups of four (`"4242 4242 4242 4242"`).
#[must_use]
pub fn format_card_number(input: &str) -> String {
    let digits = digits_only(input);
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(c);
    }
    formatted
}

/// Format expiry digits as typed into `MM/YY`.
///
/// Fewer than two digits are returned unchanged; digits past the fourth are
/// dropped.
#[must_use]
pub fn format_expiry_date(input: &str) -> String {
    let digits = digits_only(input);
    if digits.len() < 2 {
        return digits;
    }
    let (month, rest) = digits.split_at(2);
    let year: String = rest.chars().take(2).collect();
    format!("{month}/{year}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Append the Luhn check digit to a payload of digits.
    fn with_check_digit(payload: &str) -> String {
        (0..10)
            .map(|d| format!("{payload}{d}"))
            .find(|candidate| luhn_valid(candidate))
            .unwrap()
    }

    #[test]
    fn test_known_test_cards_accepted() {
        for number in [
            "4242424242424242",
            "4111 1111 1111 1111",
            "5555-5555-5555-4444",
            "378282246310005",
            "6011111111111117",
            "4222222222222",
        ] {
            assert!(CardNumber::parse(number).is_ok(), "{number} should pass");
        }
    }

    #[test]
    fn test_generated_luhn_numbers_always_accepted() {
        let mut payload = String::from("400000");
        for i in 0..200u32 {
            payload.push(char::from_digit(i % 10, 10).unwrap());
            if payload.len() >= CardNumber::MAX_DIGITS {
                payload.truncate(8);
            }
            let number = with_check_digit(&payload);
            if number.len() >= CardNumber::MIN_DIGITS {
                assert!(CardNumber::parse(&number).is_ok(), "{number} should pass");
            }
        }
    }

    #[test]
    fn test_single_digit_corruption_rejected() {
        let valid = "4539148803436467";
        assert!(luhn_valid(valid));

        for pos in 0..valid.len() {
            for replacement in '0'..='9' {
                let original = valid.as_bytes()[pos] as char;
                if replacement == original {
                    continue;
                }
                let mut corrupted = valid.to_string();
                corrupted.replace_range(pos..=pos, &replacement.to_string());
                assert_eq!(
                    CardNumber::parse(&corrupted),
                    Err(CardError::ChecksumMismatch),
                    "{corrupted} should fail"
                );
            }
        }
    }

    #[test]
    fn test_length_bounds() {
        assert!(matches!(
            CardNumber::parse("4242 4242"),
            Err(CardError::InvalidLength { actual: 8, .. })
        ));
        assert!(matches!(
            CardNumber::parse(&"4".repeat(20)),
            Err(CardError::InvalidLength { actual: 20, .. })
        ));
        assert!(matches!(
            CardNumber::parse(""),
            Err(CardError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn test_card_number_masked_output() {
        let card = CardNumber::parse("4242 4242 4242 4242").unwrap();
        assert_eq!(card.last_four(), "4242");
        assert_eq!(card.to_string(), "**** 4242");
        assert_eq!(format!("{card:?}"), "CardNumber(**** 4242)");
        assert_eq!(card.len(), 16);
    }

    #[test]
    fn test_expiry_parse() {
        let expiry = ExpiryDate::parse(" 08 / 27 ").unwrap();
        assert_eq!((expiry.month(), expiry.year()), (8, 27));
        assert_eq!(expiry.to_string(), "08/27");

        assert_eq!(ExpiryDate::parse("8/27"), Err(CardError::MalformedExpiry));
        assert_eq!(ExpiryDate::parse("08-27"), Err(CardError::MalformedExpiry));
        assert_eq!(ExpiryDate::parse("08/2027"), Err(CardError::MalformedExpiry));
        assert_eq!(ExpiryDate::parse("ab/cd"), Err(CardError::MalformedExpiry));
        assert_eq!(ExpiryDate::parse("00/27"), Err(CardError::InvalidMonth));
        assert_eq!(ExpiryDate::parse("13/27"), Err(CardError::InvalidMonth));
    }

    #[test]
    fn test_expiry_past_months_rejected() {
        let today = date(2026, 10, 19);
        for (month, year) in [(9, 26), (1, 26), (12, 25), (10, 20)] {
            let expiry = ExpiryDate::parse(&format!("{month:02}/{year:02}")).unwrap();
            assert!(!expiry.is_valid_on(today), "{expiry} should be expired");
        }
    }

    #[test]
    fn test_expiry_current_and_future_months_accepted() {
        let today = date(2026, 10, 19);
        for (month, year) in [(10, 26), (11, 26), (12, 26), (1, 27), (3, 35)] {
            let expiry = ExpiryDate::parse(&format!("{month:02}/{year:02}")).unwrap();
            assert!(expiry.is_valid_on(today), "{expiry} should be valid");
        }
    }

    #[test]
    fn test_expiry_valid_through_last_day_of_month() {
        let expiry = ExpiryDate::parse("10/26").unwrap();
        assert!(expiry.is_valid_on(date(2026, 10, 31)));
        assert!(!expiry.is_valid_on(date(2026, 11, 1)));
    }

    #[test]
    fn test_cvv() {
        assert!(Cvv::parse("123").is_ok());
        assert!(Cvv::parse("1234").is_ok());
        assert!(Cvv::parse(" 1 2 3 ").is_ok());
        assert_eq!(Cvv::parse("12"), Err(CardError::InvalidCvv));
        assert_eq!(Cvv::parse("12345"), Err(CardError::InvalidCvv));
        assert_eq!(Cvv::parse(""), Err(CardError::InvalidCvv));
        assert_eq!(format!("{:?}", Cvv::parse("999").unwrap()), "Cvv([REDACTED])");
    }

    #[test]
    fn test_format_card_number() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("4242-42"), "4242 42");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_format_expiry_date() {
        assert_eq!(format_expiry_date("0"), "0");
        assert_eq!(format_expiry_date("08"), "08/");
        assert_eq!(format_expiry_date("0827"), "08/27");
        assert_eq!(format_expiry_date("08/2799"), "08/27");
    }
}
