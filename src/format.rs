// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Predefined formatters.
//!
//! Every formatter both parses and renders. Parsing requires the whole input
//! to match the formatter's grammar. Rendering requires the fields the
//! formatter prints to be present in the value: a value parsed without an
//! offset cannot be rendered by a formatter that prints one.

use std::fmt::{self, Display};

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use tracing::trace;
use winnow::Parser;

use crate::items::{self, combined, date, rfc1123, time};
use crate::{Field, FormatError, ParseDateTimeError, Parsed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formatter {
    /// `2020-06-19`
    IsoLocalDate,
    /// `11:56:35.938955247`
    IsoLocalTime,
    /// `2020-06-19T11:56:35.938955247`
    IsoLocalDateTime,
    /// `2020-06-19T11:56:35.938955247-04:00`
    IsoOffsetDateTime,
    /// Like [`Formatter::IsoOffsetDateTime`], but the offset is optional both
    /// when parsing and when rendering.
    IsoDateTime,
    /// `2020-06-19T15:56:35.938955247Z`, always rendered in UTC.
    IsoInstant,
    /// `Fri, 19 Jun 2020 11:56:35 -0400`
    Rfc1123DateTime,
}

impl Formatter {
    pub const ALL: [Formatter; 7] = [
        Formatter::IsoLocalDate,
        Formatter::IsoLocalTime,
        Formatter::IsoLocalDateTime,
        Formatter::IsoOffsetDateTime,
        Formatter::IsoDateTime,
        Formatter::IsoInstant,
        Formatter::Rfc1123DateTime,
    ];

    /// Parses `text` into the fields this formatter's grammar provides.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDateTimeError::InvalidInput`] with the index at which
    /// the text stops matching the grammar, including trailing text.
    pub fn parse(self, text: &str) -> Result<Parsed, ParseDateTimeError> {
        let result = match self {
            Formatter::IsoLocalDate => items::parse_all(text, date::iso.map(Parsed::from)),
            Formatter::IsoLocalTime => items::parse_all(text, time::iso.map(Parsed::from)),
            Formatter::IsoLocalDateTime => {
                items::parse_all(text, combined::local.map(Parsed::from))
            }
            Formatter::IsoOffsetDateTime => items::parse_all(
                text,
                combined::offset.map(|(dt, offset)| Parsed::new(dt, Some(offset))),
            ),
            Formatter::IsoDateTime => items::parse_all(
                text,
                combined::parse.map(|(dt, offset)| Parsed::new(dt, offset)),
            ),
            Formatter::IsoInstant => items::parse_all(
                text,
                combined::offset
                    .verify_map(|(dt, offset)| offset.from_local_datetime(&dt).single())
                    .map(|dt| Parsed::from(dt.with_timezone(&Utc).fixed_offset())),
            ),
            Formatter::Rfc1123DateTime => {
                items::parse_all(text, rfc1123::parse.map(Parsed::from))
            }
        };

        result.map_err(|err| {
            trace!(formatter = %self, text, %err, "parse failed");
            ParseDateTimeError::from_syntax(text, err)
        })
    }

    /// Renders `value` in this formatter's style.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnsupportedField`] when `value` lacks a field
    /// this style prints, and [`FormatError::OutOfRange`] when a field cannot
    /// be printed in the style's fixed width.
    pub fn format(self, value: &Parsed) -> Result<String, FormatError> {
        trace!(formatter = %self, %value, "format");
        match self {
            Formatter::IsoLocalDate => Ok(IsoDate(value.require_date()?).to_string()),
            Formatter::IsoLocalTime => Ok(IsoTime(value.require_time()?).to_string()),
            Formatter::IsoLocalDateTime => Ok(format!(
                "{}T{}",
                IsoDate(value.require_date()?),
                IsoTime(value.require_time()?)
            )),
            Formatter::IsoOffsetDateTime => Ok(format!(
                "{}T{}{}",
                IsoDate(value.require_date()?),
                IsoTime(value.require_time()?),
                OffsetId(value.require_offset()?)
            )),
            Formatter::IsoDateTime => {
                let local = format!(
                    "{}T{}",
                    IsoDate(value.require_date()?),
                    IsoTime(value.require_time()?)
                );
                Ok(match value.offset() {
                    Some(offset) => format!("{local}{}", OffsetId(offset)),
                    None => local,
                })
            }
            Formatter::IsoInstant => {
                let instant = value
                    .to_date_time()
                    .ok_or(FormatError::UnsupportedField(Field::InstantSeconds))?
                    .naive_utc();
                Ok(format!(
                    "{}T{:02}:{:02}:{:02}{}Z",
                    IsoDate(instant.date()),
                    instant.hour(),
                    instant.minute(),
                    instant.second(),
                    GroupedFraction(instant.nanosecond())
                ))
            }
            Formatter::Rfc1123DateTime => rfc1123(value),
        }
    }
}

impl Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Formatter::IsoLocalDate => "ISO_LOCAL_DATE",
            Formatter::IsoLocalTime => "ISO_LOCAL_TIME",
            Formatter::IsoLocalDateTime => "ISO_LOCAL_DATE_TIME",
            Formatter::IsoOffsetDateTime => "ISO_OFFSET_DATE_TIME",
            Formatter::IsoDateTime => "ISO_DATE_TIME",
            Formatter::IsoInstant => "ISO_INSTANT",
            Formatter::Rfc1123DateTime => "RFC_1123_DATE_TIME",
        };
        f.write_str(name)
    }
}

fn rfc1123(value: &Parsed) -> Result<String, FormatError> {
    let date = value.require_date()?;
    let time = value.require_time()?;
    let offset = value.require_offset()?;
    if !(0..=9999).contains(&date.year()) {
        return Err(FormatError::OutOfRange {
            field: Field::Year,
            value: date.year().into(),
        });
    }
    Ok(format!(
        "{} {}",
        date.and_time(time).format("%a, %-d %b %Y %H:%M:%S"),
        Rfc1123Offset(offset)
    ))
}

/// `YYYY-MM-DD`, with a sign on years outside `0..=9999`.
pub(crate) struct IsoDate(pub(crate) NaiveDate);

impl Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.0.year();
        if (0..=9999).contains(&year) {
            write!(f, "{year:04}")?;
        } else if year > 9999 {
            write!(f, "+{year}")?;
        } else {
            write!(f, "-{:04}", year.unsigned_abs())?;
        }
        write!(f, "-{:02}-{:02}", self.0.month(), self.0.day())
    }
}

/// `HH:MM:SS` followed by the shortest fraction that is exact.
pub(crate) struct IsoTime(pub(crate) NaiveTime);

impl Display for IsoTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        write!(f, "{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())?;
        let nanos = t.nanosecond();
        if nanos > 0 {
            let mut digits: usize = 9;
            let mut fraction = nanos;
            while fraction % 10 == 0 {
                fraction /= 10;
                digits -= 1;
            }
            write!(f, ".{fraction:0digits$}")?;
        }
        Ok(())
    }
}

/// A fraction of a second in groups of three digits, or nothing when zero.
pub(crate) struct GroupedFraction(pub(crate) u32);

impl Display for GroupedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.0;
        if nanos == 0 {
            Ok(())
        } else if nanos % 1_000_000 == 0 {
            write!(f, ".{:03}", nanos / 1_000_000)
        } else if nanos % 1_000 == 0 {
            write!(f, ".{:06}", nanos / 1_000)
        } else {
            write!(f, ".{nanos:09}")
        }
    }
}

/// `Z`, `±HH:MM` or `±HH:MM:SS`.
pub(crate) struct OffsetId(pub(crate) FixedOffset);

impl Display for OffsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.local_minus_utc();
        if total == 0 {
            return f.write_str("Z");
        }
        let sign = if total < 0 { '-' } else { '+' };
        let abs = total.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", abs / 3600, abs / 60 % 60)?;
        if abs % 60 != 0 {
            write!(f, ":{:02}", abs % 60)?;
        }
        Ok(())
    }
}

/// `GMT` or `±HHMM`; seconds of the offset are not printed, so offsets
/// under a minute print as `GMT`.
struct Rfc1123Offset(FixedOffset);

impl Display for Rfc1123Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.local_minus_utc();
        let abs = total.unsigned_abs();
        if abs / 60 == 0 {
            return f.write_str("GMT");
        }
        let sign = if total < 0 { '-' } else { '+' };
        write!(f, "{sign}{:02}{:02}", abs / 3600, abs / 60 % 60)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, NaiveTime};

    use super::{GroupedFraction, IsoDate, IsoTime, OffsetId, Rfc1123Offset};

    #[test]
    fn years() {
        let date = |y| NaiveDate::from_ymd_opt(y, 1, 2).unwrap();
        assert_eq!(IsoDate(date(2020)).to_string(), "2020-01-02");
        assert_eq!(IsoDate(date(33)).to_string(), "0033-01-02");
        assert_eq!(IsoDate(date(12345)).to_string(), "+12345-01-02");
        assert_eq!(IsoDate(date(-1)).to_string(), "-0001-01-02");
    }

    #[test]
    fn shortest_fraction() {
        let time = |n| NaiveTime::from_hms_nano_opt(12, 59, 55, n).unwrap();
        assert_eq!(IsoTime(time(0)).to_string(), "12:59:55");
        assert_eq!(IsoTime(time(289_000_000)).to_string(), "12:59:55.289");
        assert_eq!(IsoTime(time(500_000_000)).to_string(), "12:59:55.5");
        assert_eq!(IsoTime(time(938_955_247)).to_string(), "12:59:55.938955247");
        assert_eq!(IsoTime(time(1)).to_string(), "12:59:55.000000001");
        assert_eq!(IsoTime(time(120_000)).to_string(), "12:59:55.00012");
    }

    #[test]
    fn grouped_fraction() {
        assert_eq!(GroupedFraction(0).to_string(), "");
        assert_eq!(GroupedFraction(500_000_000).to_string(), ".500");
        assert_eq!(GroupedFraction(120_000).to_string(), ".000120");
        assert_eq!(GroupedFraction(938_955_247).to_string(), ".938955247");
    }

    #[test]
    fn offsets() {
        let east = |secs| FixedOffset::east_opt(secs).unwrap();
        assert_eq!(OffsetId(east(0)).to_string(), "Z");
        assert_eq!(OffsetId(east(-4 * 3600)).to_string(), "-04:00");
        assert_eq!(OffsetId(east(19800)).to_string(), "+05:30");
        assert_eq!(OffsetId(east(3723)).to_string(), "+01:02:03");

        assert_eq!(Rfc1123Offset(east(0)).to_string(), "GMT");
        assert_eq!(Rfc1123Offset(east(-4 * 3600)).to_string(), "-0400");
        assert_eq!(Rfc1123Offset(east(3723)).to_string(), "+0102");
        assert_eq!(Rfc1123Offset(east(-30)).to_string(), "GMT");
        assert_eq!(Rfc1123Offset(east(59)).to_string(), "GMT");
    }
}
