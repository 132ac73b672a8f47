// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse an ISO 8601 date and time item
//!
//! The extended format consists of an ISO 8601 date, a `T` separator and an
//! ISO 8601 time of day, optionally followed by an offset id. The separator
//! is matched case-insensitively; a space is not accepted in its place.

use chrono::{FixedOffset, NaiveDateTime};
use winnow::{
    combinator::{opt, trace},
    token::one_of,
    ModalResult, Parser,
};

use super::{date, time};

/// Parse a local date-time that may be followed by an offset
pub(crate) fn parse(input: &mut &str) -> ModalResult<(NaiveDateTime, Option<FixedOffset>)> {
    (local, opt(time::offset_id)).parse_next(input)
}

/// Parse a local date-time with no offset
pub(crate) fn local(input: &mut &str) -> ModalResult<NaiveDateTime> {
    trace(
        "date time iso",
        (date::iso, one_of(['T', 't']), time::iso),
    )
    .map(|(date, _, time)| date.and_time(time))
    .parse_next(input)
}

/// Parse a local date-time that must be followed by an offset
pub(crate) fn offset(input: &mut &str) -> ModalResult<(NaiveDateTime, FixedOffset)> {
    (local, time::offset_id).parse_next(input)
}
