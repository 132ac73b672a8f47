// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse an ISO 8601 local date item (without time component)
//!
//! The extended calendar date format is `YYYY-MM-DD`. The year has at least
//! four digits; years with more than four digits must carry an explicit sign,
//! and negative years always do. Month and day are two digits each, with a
//! leading zero below ten.

use chrono::NaiveDate;
use winnow::{
    combinator::{alt, trace},
    stream::AsChar,
    token::take_while,
    ModalResult, Parser,
};

use super::primitive::{bounded, sign};

/// Parse `YYYY-MM-DD`, `+YYYYY-MM-DD` or `-YYYY-MM-DD`
///
/// This is also used by [`combined`](super::combined).
pub(crate) fn iso(input: &mut &str) -> ModalResult<NaiveDate> {
    trace(
        "date iso",
        (year, '-', bounded(2, 1, 12), '-', bounded(2, 1, 31)),
    )
    .verify_map(|(year, _, month, _, day)| NaiveDate::from_ymd_opt(year, month, day))
    .parse_next(input)
}

/// Parse the year of an ISO date
///
/// Four unsigned digits, or a sign followed by four to nine digits. A plus
/// sign is only accepted when the year needs more than four digits, and a
/// minus sign never precedes year zero.
pub(super) fn year(input: &mut &str) -> ModalResult<i32> {
    alt((
        take_while(4, AsChar::is_dec_digit).try_map(|s: &str| s.parse::<i32>()),
        (sign, take_while(4..=9, AsChar::is_dec_digit)).verify_map(
            |(negative, s): (bool, &str)| {
                let year = s.parse::<i32>().ok()?;
                match negative {
                    true if year == 0 => None,
                    true => Some(-year),
                    false if s.len() > 4 => Some(year),
                    false => None,
                }
            },
        ),
    ))
    .parse_next(input)
}
