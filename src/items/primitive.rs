// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Primitive combinators.
//!
//! Unlike free-form date strings, the ISO 8601 and RFC 1123 grammars are
//! strict: no whitespace is skipped and every numeric field has a fixed width.

use std::str::FromStr;

use winnow::{
    ascii::digit1,
    combinator::opt,
    error::{ContextError, ErrMode, ParserError, StrContext, StrContextValue},
    stream::AsChar,
    token::{one_of, take_while},
    ModalResult, Parser,
};

/// Parse a signed decimal integer.
///
/// Rationale for not using `winnow::ascii::dec_int`: it rejects zero-prefixed
/// values like `+012`, which appear in zero-padded log fields.
pub(crate) fn dec_int<'a, O, E>(input: &mut &'a str) -> winnow::Result<O, E>
where
    O: FromStr,
    E: ParserError<&'a str>,
{
    (opt(one_of(['+', '-'])), digit1)
        .void()
        .take()
        .verify_map(|s: &str| s.parse().ok())
        .parse_next(input)
}

/// Parse exactly `count` decimal digits.
pub(super) fn digits<'a>(count: usize) -> impl Parser<&'a str, u32, ErrMode<ContextError>> {
    take_while(count, AsChar::is_dec_digit).try_map(|s: &str| s.parse::<u32>())
}

/// Parse exactly `count` decimal digits holding a value in `min..=max`.
pub(super) fn bounded<'a>(
    count: usize,
    min: u32,
    max: u32,
) -> impl Parser<&'a str, u32, ErrMode<ContextError>> {
    digits(count).verify(move |x: &u32| (min..=max).contains(x))
}

/// Parse a plus or minus character and return whether it was negative.
pub(super) fn sign(input: &mut &str) -> ModalResult<bool> {
    one_of(['+', '-']).map(|c| c == '-').parse_next(input)
}

/// Create a context error with a reason.
pub(super) fn ctx_err(reason: &'static str) -> ContextError {
    let mut err = ContextError::new();
    err.push(StrContext::Expected(StrContextValue::Description(reason)));
    err
}

#[cfg(test)]
mod tests {
    use winnow::{error::ContextError, Parser};

    use super::{bounded, dec_int, digits, sign};

    #[test]
    fn signed_integers() {
        for (input, expected) in [
            ("1592582195938", 1592582195938_i64),
            ("+012", 12),
            ("-4", -4),
            ("0", 0),
        ] {
            let mut s = input;
            assert_eq!(
                dec_int::<i64, ContextError>(&mut s).unwrap(),
                expected,
                "{input}"
            );
        }

        for input in ["", "+", "-x", "abc"] {
            let mut s = input;
            assert!(dec_int::<i64, ContextError>(&mut s).is_err(), "{input}");
        }
    }

    #[test]
    fn integer_overflow_is_rejected() {
        let mut s = "99999999999999999999";
        assert!(dec_int::<i64, ContextError>(&mut s).is_err());
    }

    #[test]
    fn fixed_width() {
        let mut s = "0615";
        assert_eq!(digits(2).parse_next(&mut s).unwrap(), 6);
        assert_eq!(s, "15");

        let mut s = "6-15";
        assert!(digits(2).parse_next(&mut s).is_err());
    }

    #[test]
    fn bounded_values() {
        assert_eq!(bounded(2, 1, 12).parse("12").unwrap(), 12);
        assert!(bounded(2, 1, 12).parse("13").is_err());
        assert!(bounded(2, 1, 12).parse("00").is_err());
    }

    #[test]
    fn signs() {
        assert!(!sign(&mut "+").unwrap());
        assert!(sign(&mut "-").unwrap());
        assert!(sign(&mut "0").is_err());
    }
}
