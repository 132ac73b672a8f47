// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::fmt;

/// A field that can be read from a [`Parsed`](crate::Parsed) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    MonthOfYear,
    DayOfMonth,
    DayOfYear,
    /// Day of the week, from 1 (Monday) to 7 (Sunday).
    DayOfWeek,
    /// Days since 1970-01-01.
    EpochDay,
    HourOfDay,
    MinuteOfHour,
    SecondOfMinute,
    MilliOfSecond,
    MicroOfSecond,
    NanoOfSecond,
    /// Offset from UTC, in seconds east of Greenwich.
    OffsetSeconds,
    /// Seconds since 1970-01-01T00:00:00Z. Needs a date, a time and an
    /// offset.
    InstantSeconds,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Year => "Year",
            Field::MonthOfYear => "MonthOfYear",
            Field::DayOfMonth => "DayOfMonth",
            Field::DayOfYear => "DayOfYear",
            Field::DayOfWeek => "DayOfWeek",
            Field::EpochDay => "EpochDay",
            Field::HourOfDay => "HourOfDay",
            Field::MinuteOfHour => "MinuteOfHour",
            Field::SecondOfMinute => "SecondOfMinute",
            Field::MilliOfSecond => "MilliOfSecond",
            Field::MicroOfSecond => "MicroOfSecond",
            Field::NanoOfSecond => "NanoOfSecond",
            Field::OffsetSeconds => "OffsetSeconds",
            Field::InstantSeconds => "InstantSeconds",
        };
        f.write_str(name)
    }
}
