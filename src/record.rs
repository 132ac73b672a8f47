// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! The numeric timestamp of a log record.
//!
//! Besides its `date` string, a record carries the same instant as
//! `millis`, the number of milliseconds since the epoch, and `nanos`, the
//! nanoseconds to add to those milliseconds:
//!
//! ```xml
//! <date>2020-06-19T11:56:35.938955247-04:00</date>
//! <millis>1592582195938</millis>
//! <nanos>955247</nanos>
//! ```
//!
//! Records written before the `nanos` element existed only carry `millis`.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, TimeDelta, TimeZone, Utc};
use winnow::error::{ContextError, ErrMode};

use crate::items::{self, primitive::dec_int};
use crate::{Field, FormatError, ParseDateTimeError, Parsed};

const NANOS_PER_MILLI: u32 = 1_000_000;

/// Milliseconds since 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpochMillis(pub i64);

impl EpochMillis {
    /// The instant in the time zone `tz`, if it is representable.
    pub fn to_date_time<Tz: TimeZone>(self, tz: &Tz) -> Option<DateTime<Tz>> {
        tz.timestamp_millis_opt(self.0).single()
    }

    /// Renders the instant the way a legacy date object prints itself:
    /// `EEE MMM dd HH:mm:ss zzz yyyy`, e.g. `Fri Jun 19 15:56:35 UTC 2020`.
    ///
    /// Only the offset of `tz` at that instant is shown, as `UTC` or
    /// `GMT±HH:MM`.
    pub fn legacy_string<Tz: TimeZone>(self, tz: &Tz) -> Result<String, FormatError> {
        let dt = self
            .to_date_time(tz)
            .ok_or(FormatError::OutOfRange {
                field: Field::InstantSeconds,
                value: self.0.div_euclid(1000),
            })?
            .fixed_offset();
        Ok(format!(
            "{} {} {}",
            dt.format("%a %b %d %H:%M:%S"),
            LegacyZone(*dt.offset()),
            dt.year()
        ))
    }
}

impl Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EpochMillis {
    type Err = ParseDateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        items::parse_all(s, dec_int::<i64, ErrMode<ContextError>>)
            .map(EpochMillis)
            .map_err(|err| ParseDateTimeError::from_syntax(s, err))
    }
}

/// Nanoseconds to add to an [`EpochMillis`], in `0..=999_999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NanoAdjustment(u32);

impl NanoAdjustment {
    pub const MAX: NanoAdjustment = NanoAdjustment(NANOS_PER_MILLI - 1);

    pub fn new(nanos: u32) -> Result<Self, ParseDateTimeError> {
        Self::try_from(i64::from(nanos))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for NanoAdjustment {
    type Error = ParseDateTimeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .filter(|nanos| *nanos < NANOS_PER_MILLI)
            .map(NanoAdjustment)
            .ok_or(ParseDateTimeError::OutOfRange {
                name: "nanos",
                value,
            })
    }
}

impl FromStr for NanoAdjustment {
    type Err = ParseDateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = items::parse_all(s, dec_int::<i64, ErrMode<ContextError>>)
            .map_err(|err| ParseDateTimeError::from_syntax(s, err))?;
        Self::try_from(value)
    }
}

impl Display for NanoAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `millis` and `nanos` pair of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordTimestamp {
    pub millis: EpochMillis,
    pub nanos: NanoAdjustment,
}

impl RecordTimestamp {
    pub fn new(millis: EpochMillis, nanos: NanoAdjustment) -> Self {
        Self { millis, nanos }
    }

    /// Splits an instant into whole milliseconds, rounded towards minus
    /// infinity, and the nanoseconds that remain.
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self {
            millis: EpochMillis(instant.timestamp_millis()),
            nanos: NanoAdjustment(instant.timestamp_subsec_nanos() % NANOS_PER_MILLI),
        }
    }

    /// The instant at full precision, if it is representable.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.millis.0)?
            .checked_add_signed(TimeDelta::nanoseconds(self.nanos.0.into()))
    }

    /// Whether `parsed`, typically read from the record's `date` string,
    /// describes the same instant as the millis and nanos.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnsupportedField`] if `parsed` has no offset,
    /// since a local date-time is not an instant.
    pub fn matches(&self, parsed: &Parsed) -> Result<bool, FormatError> {
        let seconds = parsed.get_long(Field::InstantSeconds)?;
        let nanos = parsed.get_long(Field::NanoOfSecond)?;
        Ok(self.instant().is_some_and(|instant| {
            instant.timestamp() == seconds && i64::from(instant.timestamp_subsec_nanos()) == nanos
        }))
    }
}

/// The zone of a legacy date string: `UTC` or `GMT±HH:MM`.
struct LegacyZone(FixedOffset);

impl Display for LegacyZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.local_minus_utc();
        if total == 0 {
            return f.write_str("UTC");
        }
        let sign = if total < 0 { '-' } else { '+' };
        let abs = total.unsigned_abs();
        write!(f, "GMT{sign}{:02}:{:02}", abs / 3600, abs / 60 % 60)
    }
}
