//! Textual layouts for identity numbers.
//!
//! Every layout renders the date of birth with zero-padded fields and the
//! ordinal number zero-padded to four digits:
//!
//! | Format | Layout |
//! |---|---|
//! | `NoSplitTwelveDigits` | `YYYYMMDDOOOO` |
//! | `NoSplitTenDigits` | `YYMMDDOOOO` |
//! | `TwelveDigits` | `YYYYMMDD-OOOO` |
//! | `TenDigits` | `YYMMDD-OOOO` |
//! | `SplitTwelveDigits` | `YYYY-MM-DD-OOOO` |
//! | `SplitTenDigits` | `YY-MM-DD-OOOO` |
//!
//! Ten-digit layouts drop the century, so they only round-trip through the
//! parser for dates in the 1900s.

use serde::{Deserialize, Serialize};

use crate::error::PinError;
use crate::number::IdentityNumber;

/// Something that can render an identity number as text.
pub trait PinFormatter {
    /// Formats `pin` as a string.
    fn format(&self, pin: &IdentityNumber) -> String;
}

/// The built-in identity number layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// `YYYYMMDDOOOO`
    NoSplitTwelveDigits,
    /// `YYMMDDOOOO`
    NoSplitTenDigits,
    /// `YYYYMMDD-OOOO`, the canonical layout.
    #[default]
    TwelveDigits,
    /// `YYMMDD-OOOO`
    TenDigits,
    /// `YYYY-MM-DD-OOOO`
    SplitTwelveDigits,
    /// `YY-MM-DD-OOOO`
    SplitTenDigits,
}

impl Format {
    /// Every built-in layout.
    pub const ALL: [Format; 6] = [
        Format::NoSplitTwelveDigits,
        Format::NoSplitTenDigits,
        Format::TwelveDigits,
        Format::TenDigits,
        Format::SplitTwelveDigits,
        Format::SplitTenDigits,
    ];

    /// Returns the stable name of this layout.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Format::NoSplitTwelveDigits => "no_split_twelve_digits",
            Format::NoSplitTenDigits => "no_split_ten_digits",
            Format::TwelveDigits => "twelve_digits",
            Format::TenDigits => "ten_digits",
            Format::SplitTwelveDigits => "split_twelve_digits",
            Format::SplitTenDigits => "split_ten_digits",
        }
    }

    /// Returns true if the layout carries the century.
    #[must_use]
    pub const fn has_century(&self) -> bool {
        matches!(
            self,
            Format::NoSplitTwelveDigits | Format::TwelveDigits | Format::SplitTwelveDigits
        )
    }

    /// Returns the length of every string this layout produces.
    #[must_use]
    pub const fn output_len(&self) -> usize {
        match self {
            Format::NoSplitTwelveDigits => 12,
            Format::NoSplitTenDigits => 10,
            Format::TwelveDigits => 13,
            Format::TenDigits => 11,
            Format::SplitTwelveDigits => 15,
            Format::SplitTenDigits => 13,
        }
    }

    /// `chrono` format string for the date part.
    const fn date_pattern(&self) -> &'static str {
        match self {
            Format::NoSplitTwelveDigits | Format::TwelveDigits => "%Y%m%d",
            Format::NoSplitTenDigits | Format::TenDigits => "%y%m%d",
            Format::SplitTwelveDigits => "%Y-%m-%d",
            Format::SplitTenDigits => "%y-%m-%d",
        }
    }

    /// Text between the date and the ordinal number.
    const fn separator(&self) -> &'static str {
        match self {
            Format::NoSplitTwelveDigits | Format::NoSplitTenDigits => "",
            _ => "-",
        }
    }
}

impl PinFormatter for Format {
    fn format(&self, pin: &IdentityNumber) -> String {
        format!(
            "{}{}{:04}",
            pin.date_of_birth().format(self.date_pattern()),
            self.separator(),
            pin.ordinal_number()
        )
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Format {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| PinError::UnknownFormat {
                name: s.to_string(),
            })
    }
}

/// Named instances of every built-in layout.
pub mod formats {
    use super::Format;

    /// `YYYYMMDDOOOO`
    pub const NO_SPLIT_TWELVE_DIGITS: Format = Format::NoSplitTwelveDigits;

    /// `YYMMDDOOOO`
    pub const NO_SPLIT_TEN_DIGITS: Format = Format::NoSplitTenDigits;

    /// `YYYYMMDD-OOOO`
    pub const TWELVE_DIGITS: Format = Format::TwelveDigits;

    /// `YYMMDD-OOOO`
    pub const TEN_DIGITS: Format = Format::TenDigits;

    /// `YYYY-MM-DD-OOOO`
    pub const SPLIT_TWELVE_DIGITS: Format = Format::SplitTwelveDigits;

    /// `YY-MM-DD-OOOO`
    pub const SPLIT_TEN_DIGITS: Format = Format::SplitTenDigits;
}
