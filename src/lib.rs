mod consts;
mod prelude;
mod types;

pub use consts::*;
pub use types::{BirthDate, DateError, Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A Danish civil registration number ("CPR number"): ten digits in the
/// form DDMMYY-SSSS, where the birthdate part and the sequence part are
/// conventionally separated by a dash.
///
/// The value is normalized on construction and immutable afterwards.
/// Inputs may carry the dash or omit it, and may omit the leading zero of
/// the day field (9 significant digits); all of these normalize to the same
/// canonical 10-digit form, which equality, hashing, and ordering use.
#[derive(Debug, Clone)]
pub struct CprNumber {
    /// Canonical form: exactly 10 ASCII digits.
    digits: String,
    /// Input after separator removal, before zero padding. Audit only.
    trimmed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    /// The input, with separators removed, is not a clean 9- or 10-digit
    /// numeral. The only way construction can fail.
    #[display(fmt = "CPR number not in a recognizable format: {_0:?}")]
    InvalidFormat(String),
}

impl std::error::Error for ParseError {}

impl FromStr for CprNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Drop every separator; its position in the raw input is not
        // validated, only what remains.
        let trimmed: String = s.chars().filter(|&c| c != CPR_SEPARATOR).collect();

        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }

        let digits = match trimmed.len() {
            CPR_DIGITS_SHORT => format!("0{trimmed}"),
            CPR_DIGITS => trimmed.clone(),
            _ => return Err(ParseError::InvalidFormat(s.to_owned())),
        };

        Ok(Self { digits, trimmed })
    }
}

impl CprNumber {
    /// Parses a CPR number, with or without the dash, with or without the
    /// leading zero of the day field.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if separator removal does not
    /// leave a 9- or 10-digit numeral.
    pub fn new(raw: &str) -> Result<Self, ParseError> {
        raw.parse()
    }

    /// Returns the canonical 10-digit form
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Returns the input after separator removal, before zero padding.
    /// Kept for audit and display; derivations never read it.
    pub fn trimmed_input(&self) -> &str {
        &self.trimmed
    }

    /// Returns the DDMMYY-SSSS rendering of the canonical form
    pub fn dashed(&self) -> String {
        self.to_string()
    }

    /// Digit at `index`, as a number. The constructor guarantees exactly
    /// 10 ASCII digits, so this cannot go wrong for `index < 10`.
    fn digit(&self, index: usize) -> u8 {
        self.digits.as_bytes()[index] - b'0'
    }

    /// Reconstructs the birthdate encoded in the number.
    ///
    /// The two-digit year is expanded to a full year by the official
    /// century rule over the sequence digit (the 7th digit):
    /// digits 0-3 always mean the 1900s; 4 and 9 mean the 2000s up to
    /// year 36 and the 1900s after; 5-8 mean the 2000s up to year 57 and
    /// the 1800s after.
    ///
    /// # Errors
    /// Returns `DateError` if the encoded (year, month, day) triple is not
    /// a real calendar date. Construction does not check this, so a
    /// well-formed `CprNumber` can still encode month 13 or Feb 30.
    pub fn birth_date(&self) -> Result<BirthDate, DateError> {
        let day = self.digit(0) * 10 + self.digit(1);
        let month = self.digit(2) * 10 + self.digit(3);
        let year2 = self.digit(4) * 10 + self.digit(5);
        let seq7 = self.digit(SEQUENCE_OFFSET);

        let century: u16 = match (seq7, year2) {
            (4 | 9, y) if y <= YEAR2_CUTOFF_SEQ_4_9 => 2000,
            (5..=8, y) if y <= YEAR2_CUTOFF_SEQ_5_8 => 2000,
            (5..=8, _) => 1800,
            _ => 1900,
        };

        BirthDate::new(century + u16::from(year2), month, day)
    }

    /// Runs the legacy modulus 11 check over the number.
    ///
    /// The check was officially deprecated in October 2007 and some
    /// legitimately issued numbers fail it. The result is advisory only:
    /// a `false` here is not proof of an invalid number and must never be
    /// used as a rejection gate.
    pub fn passes_modulus11(&self) -> bool {
        let sum: u32 = MODULUS_11_WEIGHTS
            .iter()
            .enumerate()
            .map(|(i, &weight)| weight * u32::from(self.digit(i)))
            .sum();
        let control = u32::from(self.digit(CPR_DIGITS - 1));

        (sum + control) % MODULUS_11 == 0
    }

    /// Returns true if the number encodes a male (odd 10th digit),
    /// false for a female (even 10th digit)
    pub fn is_male(&self) -> bool {
        self.digit(CPR_DIGITS - 1) % 2 != 0
    }
}

impl fmt::Display for CprNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            &self.digits[..SEQUENCE_OFFSET],
            CPR_SEPARATOR,
            &self.digits[SEQUENCE_OFFSET..]
        )
    }
}

// Equality, hashing, and ordering read only the canonical form, so a
// 9-digit input and its padded 10-digit form compare equal.

impl PartialEq for CprNumber {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for CprNumber {}

impl Hash for CprNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl PartialOrd for CprNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CprNumber {
    /// Orders by the canonical digit string (day-first, as written), not
    /// chronologically. Stable for use as a map key.
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits.cmp(&other.digits)
    }
}

impl TryFrom<&str> for CprNumber {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl serde::Serialize for CprNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CprNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
