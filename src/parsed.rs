// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::fmt::{self, Display};

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike,
};

use crate::format::{GroupedFraction, IsoDate};
use crate::{Field, FormatError};

/// Days from 0001-01-01 to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// The fields read from a timestamp string.
///
/// Which parts are present depends on the formatter that produced the value:
/// a local date-time has a date and a time but no offset, a local date has
/// no time. Fields that depend on a missing part are unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parsed {
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    offset: Option<FixedOffset>,
}

impl Parsed {
    pub(crate) fn new(dt: NaiveDateTime, offset: Option<FixedOffset>) -> Self {
        Self {
            date: Some(dt.date()),
            time: Some(dt.time()),
            offset,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// The instant this value describes, if it has a date, a time and an
    /// offset.
    pub fn to_date_time(&self) -> Option<DateTime<FixedOffset>> {
        let local = self.date?.and_time(self.time?);
        self.offset?.from_local_datetime(&local).single()
    }

    pub fn is_supported(&self, field: Field) -> bool {
        self.get_long(field).is_ok()
    }

    /// Reads a single field.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnsupportedField`] when the part of the value
    /// the field is derived from is missing.
    pub fn get_long(&self, field: Field) -> Result<i64, FormatError> {
        let date = |f: fn(NaiveDate) -> i64| self.date.map(f);
        let time = |f: fn(NaiveTime) -> i64| self.time.map(f);

        let value = match field {
            Field::Year => date(|d| d.year().into()),
            Field::MonthOfYear => date(|d| d.month().into()),
            Field::DayOfMonth => date(|d| d.day().into()),
            Field::DayOfYear => date(|d| d.ordinal().into()),
            Field::DayOfWeek => date(|d| d.weekday().number_from_monday().into()),
            Field::EpochDay => {
                date(|d| i64::from(d.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE)
            }
            Field::HourOfDay => time(|t| t.hour().into()),
            Field::MinuteOfHour => time(|t| t.minute().into()),
            Field::SecondOfMinute => time(|t| t.second().into()),
            Field::MilliOfSecond => time(|t| (t.nanosecond() / 1_000_000).into()),
            Field::MicroOfSecond => time(|t| (t.nanosecond() / 1_000).into()),
            Field::NanoOfSecond => time(|t| t.nanosecond().into()),
            Field::OffsetSeconds => self.offset.map(|o| o.local_minus_utc().into()),
            Field::InstantSeconds => self.to_date_time().map(|dt| dt.timestamp()),
        };
        value.ok_or(FormatError::UnsupportedField(field))
    }

    pub(crate) fn require_date(&self) -> Result<NaiveDate, FormatError> {
        self.date.ok_or(FormatError::UnsupportedField(Field::Year))
    }

    pub(crate) fn require_time(&self) -> Result<NaiveTime, FormatError> {
        self.time.ok_or(FormatError::UnsupportedField(Field::HourOfDay))
    }

    pub(crate) fn require_offset(&self) -> Result<FixedOffset, FormatError> {
        self.offset.ok_or(FormatError::UnsupportedField(Field::OffsetSeconds))
    }
}

impl From<NaiveDate> for Parsed {
    fn from(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            time: None,
            offset: None,
        }
    }
}

impl From<NaiveTime> for Parsed {
    fn from(time: NaiveTime) -> Self {
        Self {
            date: None,
            time: Some(time),
            offset: None,
        }
    }
}

impl From<NaiveDateTime> for Parsed {
    fn from(dt: NaiveDateTime) -> Self {
        Self::new(dt, None)
    }
}

impl From<DateTime<FixedOffset>> for Parsed {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::new(dt.naive_local(), Some(*dt.offset()))
    }
}

/// Prints the fields that were not folded into the date and time, followed
/// by the resolved date and time:
///
/// ```txt
/// {OffsetSeconds=-14400, InstantSeconds=1592582195},ISO resolved to 2020-06-19T11:56:35.938955247
/// ```
impl Display for Parsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        if let Some(offset) = self.offset {
            write!(f, "{}={}", Field::OffsetSeconds, offset.local_minus_utc())?;
            if let Some(dt) = self.to_date_time() {
                write!(f, ", {}={}", Field::InstantSeconds, dt.timestamp())?;
            }
        }
        f.write_str("},ISO")?;

        match (self.date, self.time) {
            (Some(date), Some(time)) => {
                write!(f, " resolved to {}T{}", IsoDate(date), ResolvedTime(time))
            }
            (Some(date), None) => write!(f, " resolved to {}", IsoDate(date)),
            (None, Some(time)) => write!(f, " resolved to {}", ResolvedTime(time)),
            (None, None) => Ok(()),
        }
    }
}

/// `HH:MM`, with `:SS` and a fraction in groups of three digits only when
/// they are not zero.
struct ResolvedTime(NaiveTime);

impl Display for ResolvedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        write!(f, "{:02}:{:02}", t.hour(), t.minute())?;
        if t.second() > 0 || t.nanosecond() > 0 {
            write!(f, ":{:02}{}", t.second(), GroupedFraction(t.nanosecond()))?;
        }
        Ok(())
    }
}
