// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! The grammar of the timestamps found in log records.
//!
//! A timestamp string is made of items that must appear in a fixed order,
//! with fixed-width numeric fields and no optional whitespace:
//!  - calendar date items, `2020-06-19`
//!  - time of day items, `11:56:35.938955247`
//!  - offset ids, `-04:00` or `Z`
//!  - combined date and time of day items, `2020-06-19T11:56:35`
//!  - RFC 1123 date-times, `Fri, 19 Jun 2020 11:56:35 -0400`
//!
//! We put all of those in separate modules:
//!  - [`date`]
//!  - [`time`] (also parses the offset ids)
//!  - [`combined`]
//!  - [`rfc1123`]

use winnow::{
    error::{ContextError, ErrMode},
    Parser,
};

pub(crate) mod combined;
pub(crate) mod date;
pub(crate) mod error;
pub(crate) mod primitive;
pub(crate) mod rfc1123;
pub(crate) mod time;

/// Run `parser` over the whole of `input`.
///
/// Text left over after the parser finishes is an error, reported at the
/// index of its first character.
pub(crate) fn parse_all<'a, O>(
    input: &'a str,
    mut parser: impl Parser<&'a str, O, ErrMode<ContextError>>,
) -> Result<O, error::Error> {
    parser.parse(input).map_err(error::Error::from)
}
