// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! A Rust crate for parsing and formatting the timestamps carried by log
//! records, and for converting between their representations.
//!
//! A record describes one instant three ways: an ISO 8601 `date` string, a
//! `millis` count since the epoch, and a `nanos` adjustment that extends the
//! millis to nanosecond precision. This crate supports:
//!
//! * ISO 8601 local dates, times and date-times, with or without an offset
//! * ISO 8601 instants in UTC
//! * RFC 1123 date-times, as used in mail and HTTP headers
//! * epoch milliseconds with a nanosecond adjustment
//!
use std::error::Error;
use std::fmt::{self, Display};

mod field;
mod format;
mod items;
mod parsed;

pub mod demo;
pub mod record;

pub use field::Field;
pub use format::Formatter;
pub use parsed::Parsed;
pub use record::{EpochMillis, NanoAdjustment, RecordTimestamp};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseDateTimeError {
    /// The text does not match the grammar, starting at byte `index`.
    InvalidInput { text: String, index: usize },
    /// A numeric value lies outside the range allowed for it.
    OutOfRange { name: &'static str, value: i64 },
}

impl ParseDateTimeError {
    pub(crate) fn from_syntax(text: &str, err: items::error::Error) -> Self {
        let items::error::Error::Syntax { index, .. } = err;
        ParseDateTimeError::InvalidInput {
            text: text.to_owned(),
            index,
        }
    }
}

impl Display for ParseDateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDateTimeError::InvalidInput { text, index } => {
                write!(f, "Text '{text}' could not be parsed at index {index}")
            }
            ParseDateTimeError::OutOfRange { name, value } => {
                write!(f, "Invalid value for {name}: {value}")
            }
        }
    }
}

impl Error for ParseDateTimeError {}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormatError {
    /// The style prints a field that the value does not have.
    UnsupportedField(Field),
    /// The style cannot print the value of a field.
    OutOfRange { field: Field, value: i64 },
}

impl Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnsupportedField(field) => write!(f, "Unsupported field: {field}"),
            FormatError::OutOfRange { field, value } => write!(
                f,
                "Field {field} cannot be printed as the value {value} is out of range"
            ),
        }
    }
}

impl Error for FormatError {}

/// Parses an ISO 8601 date-time with an optional offset.
///
/// # Arguments
///
/// * `input` - A string slice representing the date-time.
///
/// # Examples
///
/// ```
/// use parse_date::{parse_datetime, Field};
/// let parsed = parse_datetime("2020-06-19T11:56:35.938955247-04:00").unwrap();
/// assert_eq!(parsed.get_long(Field::InstantSeconds), Ok(1592582195));
/// assert_eq!(parsed.get_long(Field::NanoOfSecond), Ok(938955247));
/// ```
///
/// # Errors
///
/// This function will return `Err(ParseDateTimeError::InvalidInput)` if the
/// input string is not an ISO 8601 date-time.
pub fn parse_datetime<S: AsRef<str>>(input: S) -> Result<Parsed, ParseDateTimeError> {
    Formatter::IsoDateTime.parse(input.as_ref())
}
