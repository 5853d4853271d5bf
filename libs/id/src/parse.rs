//! Parsing identity numbers from text.
//!
//! Accepted input is equivalent to the anchored pattern
//! `(\d{2})?\d{2}-?\d{2}-?\d{2}[-+]?\d{4}`: a two- or four-digit year, month,
//! day, and a four-digit ordinal number, with each separator independently
//! optional. Only ASCII digits are accepted.
//!
//! A two-digit year always resolves to the 1900s. The `+` separator, which
//! marks a holder aged 100 or more, is accepted but does not change that.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::error::{PinError, PinResult};
use crate::number::IdentityNumber;

/// Century prepended to two-digit years.
const TWO_DIGIT_YEAR_BASE: i32 = 1900;

impl IdentityNumber {
    /// Parses an identity number, returning `None` if `input` is not valid.
    ///
    /// Never fails for any other reason: malformed layouts and impossible
    /// calendar dates both yield `None`.
    #[must_use]
    pub fn try_parse(input: &str) -> Option<Self> {
        match scan(input) {
            Ok(pin) => {
                trace!(input, "parsed identity number");
                Some(pin)
            }
            Err(reason) => {
                debug!(input, reason = reason.as_str(), "rejected identity number");
                None
            }
        }
    }

    /// Parses an identity number.
    ///
    /// Fails with [`PinError::InvalidFormat`] carrying the original input
    /// whenever [`IdentityNumber::try_parse`] would return `None`.
    pub fn parse(input: &str) -> PinResult<Self> {
        Self::try_parse(input).ok_or_else(|| PinError::InvalidFormat {
            input: input.to_string(),
        })
    }

    /// Parses an identity number from input that may be absent.
    ///
    /// `None` fails with [`PinError::MissingArgument`], which is distinct from
    /// a parse failure.
    pub fn parse_opt(input: Option<&str>) -> PinResult<Self> {
        let input = input.ok_or(PinError::MissingArgument { name: "input" })?;
        Self::parse(input)
    }
}

/// Why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    DigitCount,
    Layout,
    InvalidDate,
}

impl Rejection {
    fn as_str(self) -> &'static str {
        match self {
            Rejection::DigitCount => "expected 10 or 12 digits",
            Rejection::Layout => "unexpected character",
            Rejection::InvalidDate => "not a calendar date",
        }
    }
}

/// Scans `input` into its fields and validates the date.
fn scan(input: &str) -> Result<IdentityNumber, Rejection> {
    let year_len = match input.bytes().filter(u8::is_ascii_digit).count() {
        12 => 4,
        10 => 2,
        _ => return Err(Rejection::DigitCount),
    };

    let mut cursor = Cursor::new(input);

    let year = cursor.digits(year_len)?;
    cursor.separator(b"-");
    let month = cursor.digits(2)?;
    cursor.separator(b"-");
    let day = cursor.digits(2)?;
    cursor.separator(b"-+");
    let ordinal = cursor.digits(4)?;
    cursor.finish()?;

    let year = if year_len == 2 {
        TWO_DIGIT_YEAR_BASE + year as i32
    } else {
        year as i32
    };

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(Rejection::InvalidDate)?;

    // Four digits always fit the ordinal range, so only the year can fail here.
    IdentityNumber::new(date, ordinal as i32).map_err(|_| Rejection::InvalidDate)
}

/// Forward-only reader over the input bytes.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    /// Consumes exactly `n` ASCII digits and returns their value.
    fn digits(&mut self, n: usize) -> Result<u32, Rejection> {
        let end = self.pos + n;
        let chunk = self.bytes.get(self.pos..end).ok_or(Rejection::Layout)?;

        let mut value = 0u32;
        for b in chunk {
            if !b.is_ascii_digit() {
                return Err(Rejection::Layout);
            }
            value = value * 10 + u32::from(b - b'0');
        }

        self.pos = end;
        Ok(value)
    }

    /// Consumes one byte if it is one of `allowed`.
    fn separator(&mut self, allowed: &[u8]) {
        if let Some(b) = self.bytes.get(self.pos) {
            if allowed.contains(b) {
                self.pos += 1;
            }
        }
    }

    /// Fails unless every byte has been consumed.
    fn finish(&self) -> Result<(), Rejection> {
        if self.pos == self.bytes.len() {
            Ok(())
        } else {
            Err(Rejection::Layout)
        }
    }
}
