// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use parse_date::{parse_datetime, Field, FormatError, Formatter, ParseDateTimeError};
use rstest::rstest;

mod common;
use common::{check_format, check_idempotent};

#[rstest]
#[case::with_offset("2020-06-19T11:56:35.938955247-04:00", "2020-06-19T11:56:35.938955247")]
#[case::without_offset("2020-06-15T12:59:55.289", "2020-06-15T12:59:55.289")]
#[case::utc("2020-06-19T15:56:35.938955247Z", "2020-06-19T15:56:35.938955247")]
#[case::no_seconds("2020-06-15T12:59", "2020-06-15T12:59:00")]
#[case::comma_fraction("2020-06-15T12:59:55,5", "2020-06-15T12:59:55.5")]
#[case::lower_case_t("2020-06-15t12:59:55", "2020-06-15T12:59:55")]
#[case::micros("2020-06-15T12:59:55.000120", "2020-06-15T12:59:55.00012")]
#[case::large_year("+12345-01-02T00:00:00Z", "+12345-01-02T00:00:00")]
#[case::negative_year("-0001-12-31T23:59:59", "-0001-12-31T23:59:59")]
fn local_date_time(#[case] input: &str, #[case] expected: &str) {
    check_format(
        Formatter::IsoDateTime,
        input,
        Formatter::IsoLocalDateTime,
        expected,
    );
}

#[rstest]
#[case::negative("2020-06-19T11:56:35.938955247-04:00", "2020-06-19T11:56:35.938955247-04:00")]
#[case::zero("2020-06-19T15:56:35+00:00", "2020-06-19T15:56:35Z")]
#[case::half_hour("2020-06-20T01:26:35.5+09:30", "2020-06-20T01:26:35.5+09:30")]
#[case::seconds("2020-06-19T11:56:35+01:02:03", "2020-06-19T11:56:35+01:02:03")]
fn offset_date_time(#[case] input: &str, #[case] expected: &str) {
    check_format(
        Formatter::IsoOffsetDateTime,
        input,
        Formatter::IsoOffsetDateTime,
        expected,
    );
}

#[rstest]
#[case::edt("2020-06-19T11:56:35.938955247-04:00", "2020-06-19T15:56:35.938955247Z")]
#[case::cest("2020-06-15T12:59:55.289+02:00", "2020-06-15T10:59:55.289Z")]
#[case::previous_year("2020-01-01T00:30:00+01:00", "2019-12-31T23:30:00Z")]
#[case::grouped_fraction("2020-06-15T12:59:55.5Z", "2020-06-15T12:59:55.500Z")]
fn instant(#[case] input: &str, #[case] expected: &str) {
    check_format(
        Formatter::IsoOffsetDateTime,
        input,
        Formatter::IsoInstant,
        expected,
    );
}

#[rstest]
#[case::date(Formatter::IsoLocalDate, "2020-06-19")]
#[case::time(Formatter::IsoLocalTime, "11:56:35.938955247")]
fn parts(#[case] to: Formatter, #[case] expected: &str) {
    check_format(
        Formatter::IsoDateTime,
        "2020-06-19T11:56:35.938955247-04:00",
        to,
        expected,
    );
}

#[rstest]
#[case(Formatter::IsoLocalDate, "2020-06-19")]
#[case(Formatter::IsoLocalTime, "12:59")]
#[case(Formatter::IsoLocalDateTime, "2020-06-15T12:59:55.289")]
#[case(Formatter::IsoOffsetDateTime, "2020-06-19T11:56:35.938955247-04:00")]
#[case(Formatter::IsoDateTime, "2020-06-15T12:59:55.289")]
#[case(Formatter::IsoInstant, "2020-06-19T11:56:35.938955247-04:00")]
fn idempotent(#[case] formatter: Formatter, #[case] input: &str) {
    check_idempotent(formatter, input);
}

#[rstest]
#[case::not_a_date(Formatter::IsoDateTime, "NotADate", 0)]
#[case::truncated_date(Formatter::IsoLocalDate, "2020-06", 7)]
#[case::month_out_of_range(Formatter::IsoLocalDate, "2020-13-01", 5)]
#[case::negative_year_zero(Formatter::IsoLocalDate, "-0000-01-01", 0)]
#[case::seconds_out_of_range(Formatter::IsoLocalTime, "12:30:60", 5)]
#[case::truncated_date_time(Formatter::IsoDateTime, "2020-06-19T11", 13)]
#[case::missing_offset(Formatter::IsoOffsetDateTime, "2020-06-15T12:59:55.289", 23)]
#[case::unexpected_offset(Formatter::IsoLocalDateTime, "2020-06-15T12:59:55.289Z", 23)]
#[case::space_separator(Formatter::IsoDateTime, "2020-06-19 11:56:35", 10)]
fn invalid(#[case] formatter: Formatter, #[case] input: &str, #[case] index: usize) {
    assert_eq!(
        formatter.parse(input),
        Err(ParseDateTimeError::InvalidInput {
            text: input.to_owned(),
            index
        })
    );
}

#[test]
fn impossible_dates_are_rejected() {
    assert!(Formatter::IsoLocalDate.parse("2020-02-30").is_err());
    assert!(Formatter::IsoLocalDate.parse("2020-02-29").is_ok());
    assert!(Formatter::IsoLocalDate.parse("2021-02-29").is_err());
}

#[test]
fn instant_seconds_need_an_offset() {
    let parsed = parse_datetime("2020-06-19T11:56:35.938955247-04:00").unwrap();
    assert_eq!(parsed.get_long(Field::InstantSeconds), Ok(1592582195));
    assert_eq!(parsed.get_long(Field::NanoOfSecond), Ok(938955247));

    let parsed = parse_datetime("2020-06-15T12:59:55.289").unwrap();
    assert_eq!(
        parsed.get_long(Field::InstantSeconds),
        Err(FormatError::UnsupportedField(Field::InstantSeconds))
    );
    assert_eq!(
        Formatter::IsoOffsetDateTime.format(&parsed),
        Err(FormatError::UnsupportedField(Field::OffsetSeconds))
    );
    assert_eq!(
        Formatter::IsoInstant.format(&parsed),
        Err(FormatError::UnsupportedField(Field::InstantSeconds))
    );
}
