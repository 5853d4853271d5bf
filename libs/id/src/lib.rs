//! # pnr-id
//!
//! Swedish personal identity number (personnummer) value type, parsing, and
//! formatting.
//!
//! ## Design Principles
//!
//! - An identity number is an immutable value: a date of birth plus a
//!   four-digit ordinal number
//! - Parsing is lenient about separators but strict about digit counts and
//!   calendar dates
//! - Every built-in layout round-trips through the parser (ten-digit layouts
//!   only for dates in the 1900s)
//! - No control-digit (Luhn) validation is performed
//!
//! ## Layouts
//!
//! | Name | Example |
//! |---|---|
//! | `NoSplitTwelveDigits` | `199606150042` |
//! | `NoSplitTenDigits` | `9606150042` |
//! | `TwelveDigits` | `19960615-0042` |
//! | `TenDigits` | `960615-0042` |
//! | `SplitTwelveDigits` | `1996-06-15-0042` |
//! | `SplitTenDigits` | `96-06-15-0042` |
//!
//! ```
//! use pnr_id::{formats, IdentityNumber};
//!
//! let pin: IdentityNumber = "960615+0042".parse()?;
//! assert_eq!(pin.to_string(), "19960615-0042");
//! assert_eq!(pin.to_formatted_string(&formats::SPLIT_TEN_DIGITS), "96-06-15-0042");
//! # Ok::<(), pnr_id::PinError>(())
//! ```

mod error;
mod format;
mod number;
mod parse;

pub use error::{PinError, PinResult};
pub use format::{formats, Format, PinFormatter};
pub use number::IdentityNumber;

/// Re-export chrono for consumers building dates.
pub use chrono;
