// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore hhmm

//! Parse a time item (without a date) and the UTC offset that may follow it
//!
//! The ISO 8601 extended local time is `HH:MM[:SS[.fraction]]` in 24-hour
//! notation. Hours run from 00 to 23, minutes and seconds from 00 to 59. The
//! fraction carries one to nine digits, preceded by either `.` or `,`, and
//! is scaled to nanoseconds.
//!
//! An offset id is either `Z` for UTC or `±HH:MM[:SS]`. RFC 1123 uses the
//! colonless `±HHMM` form or the literal `GMT` instead.

use chrono::{FixedOffset, NaiveTime};
use winnow::{
    ascii::Caseless,
    combinator::{alt, opt, preceded, trace},
    error::ErrMode,
    stream::AsChar,
    token::{literal, one_of, take_while},
    ModalResult, Parser,
};

use super::primitive::{bounded, ctx_err, sign};

/// The largest offset accepted, in seconds.
const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

/// Parse an ISO 8601 local time
///
/// Also used by the [`combined`](super::combined) module
pub(crate) fn iso(input: &mut &str) -> ModalResult<NaiveTime> {
    trace(
        "time iso",
        (
            hour24,
            ':',
            minute,
            opt((preceded(':', second), opt(preceded(one_of(['.', ',']), nano)))),
        ),
    )
    .verify_map(|(hour, _, minute, rest)| {
        let (second, nano) = match rest {
            Some((second, nano)) => (second, nano.unwrap_or(0)),
            None => (0, 0),
        };
        NaiveTime::from_hms_nano_opt(hour, minute, second, nano)
    })
    .parse_next(input)
}

/// Parse `HH:MM[:SS]` as used by RFC 1123
pub(super) fn hms(input: &mut &str) -> ModalResult<NaiveTime> {
    (hour24, ':', minute, opt(preceded(':', second)))
        .verify_map(|(hour, _, minute, second)| {
            NaiveTime::from_hms_opt(hour, minute, second.unwrap_or(0))
        })
        .parse_next(input)
}

/// Parse a number of hours in `0..24`
fn hour24(input: &mut &str) -> ModalResult<u32> {
    bounded(2, 0, 23).parse_next(input)
}

/// Parse a number of minutes
fn minute(input: &mut &str) -> ModalResult<u32> {
    bounded(2, 0, 59).parse_next(input)
}

/// Parse a number of seconds
fn second(input: &mut &str) -> ModalResult<u32> {
    bounded(2, 0, 59).parse_next(input)
}

/// Parse the digits of a fraction of a second as nanoseconds
///
/// A tenth digit is left in the input, where it fails the enclosing parse.
fn nano(input: &mut &str) -> ModalResult<u32> {
    take_while(1..=9, AsChar::is_dec_digit)
        .try_map(|s: &str| {
            s.parse::<u32>()
                .map(|fraction| fraction * 10_u32.pow(9 - s.len() as u32))
        })
        .parse_next(input)
}

/// Parse an ISO 8601 offset id: `Z`, `±HH:MM` or `±HH:MM:SS`
pub(crate) fn offset_id(input: &mut &str) -> ModalResult<FixedOffset> {
    trace(
        "offset id",
        alt((
            one_of(['Z', 'z']).map(|_| utc()),
            (
                sign,
                bounded(2, 0, 18),
                ':',
                minute,
                opt(preceded(':', second)),
            )
                .map(|(negative, hours, _, minutes, seconds)| {
                    (negative, hours, minutes, seconds.unwrap_or(0))
                }),
        )),
    )
    .parse_next(input)
    .and_then(to_fixed)
}

/// Parse an RFC 1123 offset: `GMT` or `±HHMM`
pub(super) fn offset_hhmm(input: &mut &str) -> ModalResult<FixedOffset> {
    alt((
        literal(Caseless("GMT")).map(|_| utc()),
        (sign, bounded(2, 0, 18), minute)
            .map(|(negative, hours, minutes)| (negative, hours, minutes, 0)),
    ))
    .parse_next(input)
    .and_then(to_fixed)
}

fn utc() -> (bool, u32, u32, u32) {
    (false, 0, 0, 0)
}

/// Convert a parsed `(negative, hours, minutes, seconds)` offset
///
/// Offsets beyond eighteen hours are a hard error rather than a mismatch:
/// the text has the shape of an offset, so no other branch can accept it.
fn to_fixed(
    (negative, hours, minutes, seconds): (bool, u32, u32, u32),
) -> ModalResult<FixedOffset> {
    let total = (hours * 3600 + minutes * 60 + seconds) as i32;
    if total > MAX_OFFSET_SECONDS {
        return Err(ErrMode::Cut(ctx_err("offset between -18:00 and +18:00")));
    }
    let secs = if negative { -total } else { total };
    FixedOffset::east_opt(secs).ok_or_else(|| ErrMode::Cut(ctx_err("valid UTC offset")))
}
