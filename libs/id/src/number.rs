//! The identity number value type.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::{PinError, PinResult};
use crate::format::{Format, PinFormatter};

/// A Swedish personal identity number (personnummer).
///
/// Made of a calendar date of birth and a four-digit ordinal number.
/// Two values are equal when both the date and the ordinal are equal;
/// ordering compares the date first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdentityNumber {
    date_of_birth: NaiveDate,
    ordinal_number: u16,
}

impl IdentityNumber {
    /// The smallest ordinal number.
    pub const MIN_ORDINAL: u16 = 0;

    /// The largest ordinal number.
    pub const MAX_ORDINAL: u16 = 9999;

    /// The smallest year that fits every layout.
    pub const MIN_YEAR: i32 = 1;

    /// The largest year that fits every layout.
    pub const MAX_YEAR: i32 = 9999;

    /// Creates an identity number from a date of birth and an ordinal number.
    ///
    /// Fails with [`PinError::OrdinalOutOfRange`] if `ordinal` is outside
    /// `0..=9999`, and with [`PinError::DateOutOfRange`] if the year needs
    /// more than four digits.
    pub fn new(date_of_birth: NaiveDate, ordinal: i32) -> PinResult<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&date_of_birth.year()) {
            debug!(date = %date_of_birth, "rejected date of birth");
            return Err(PinError::DateOutOfRange {
                date: date_of_birth,
            });
        }

        let ordinal_number = u16::try_from(ordinal)
            .ok()
            .filter(|o| *o <= Self::MAX_ORDINAL)
            .ok_or_else(|| {
                debug!(ordinal, "rejected ordinal number");
                PinError::OrdinalOutOfRange {
                    ordinal: i64::from(ordinal),
                    max: Self::MAX_ORDINAL,
                }
            })?;

        Ok(Self {
            date_of_birth,
            ordinal_number,
        })
    }

    /// Creates an identity number from a timestamp, discarding the time of day.
    pub fn from_datetime(date_of_birth: NaiveDateTime, ordinal: i32) -> PinResult<Self> {
        Self::new(date_of_birth.date(), ordinal)
    }

    /// Returns the date of birth.
    #[must_use]
    pub const fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Returns the ordinal number.
    #[must_use]
    pub const fn ordinal_number(&self) -> u16 {
        self.ordinal_number
    }

    /// Formats the identity number with the given formatter.
    #[must_use]
    pub fn to_formatted_string<F>(&self, formatter: &F) -> String
    where
        F: PinFormatter + ?Sized,
    {
        formatter.format(self)
    }
}

impl std::fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Format::TwelveDigits.format(self))
    }
}

impl std::str::FromStr for IdentityNumber {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for IdentityNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for IdentityNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
