// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse an RFC 1123 date-time, as found in mail and HTTP headers
//!
//! ```txt
//! [day-of-week ","] day month year hour ":" minute [":" second] offset
//! ```
//!
//! The day of the month has one or two digits, the year exactly four. Day
//! and month names are the English three-letter abbreviations, matched
//! case-insensitively. The offset is `GMT` or `±HHMM`. When the day of the
//! week is present it has to agree with the date.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Weekday};
use winnow::{
    ascii::alpha1,
    combinator::{opt, terminated, trace},
    stream::AsChar,
    token::take_while,
    ModalResult, Parser,
};

use super::{primitive::digits, time};

pub(crate) fn parse(input: &mut &str) -> ModalResult<DateTime<FixedOffset>> {
    trace(
        "rfc 1123",
        (
            opt(terminated(weekday, ", ")),
            take_while(1..=2, AsChar::is_dec_digit).try_map(|s: &str| s.parse::<u32>()),
            ' ',
            month,
            ' ',
            digits(4),
            ' ',
            time::hms,
            ' ',
            time::offset_hhmm,
        ),
    )
    .verify_map(
        |(weekday, day, _, month, _, year, _, time, _, offset)| {
            let date = NaiveDate::from_ymd_opt(year as i32, month, day)?;
            if weekday.is_some_and(|w| w != date.weekday()) {
                return None;
            }
            offset.from_local_datetime(&date.and_time(time)).single()
        },
    )
    .parse_next(input)
}

/// Parse the abbreviated name of a day of the week (case-insensitive)
fn weekday(input: &mut &str) -> ModalResult<Weekday> {
    alpha1
        .verify_map(|s: &str| {
            Some(match s.to_ascii_lowercase().as_str() {
                "mon" => Weekday::Mon,
                "tue" => Weekday::Tue,
                "wed" => Weekday::Wed,
                "thu" => Weekday::Thu,
                "fri" => Weekday::Fri,
                "sat" => Weekday::Sat,
                "sun" => Weekday::Sun,
                _ => return None,
            })
        })
        .parse_next(input)
}

/// Parse the abbreviated name of a month (case-insensitive)
fn month(input: &mut &str) -> ModalResult<u32> {
    alpha1
        .verify_map(|s: &str| {
            Some(match s.to_ascii_lowercase().as_str() {
                "jan" => 1,
                "feb" => 2,
                "mar" => 3,
                "apr" => 4,
                "may" => 5,
                "jun" => 6,
                "jul" => 7,
                "aug" => 8,
                "sep" => 9,
                "oct" => 10,
                "nov" => 11,
                "dec" => 12,
                _ => return None,
            })
        })
        .parse_next(input)
}
