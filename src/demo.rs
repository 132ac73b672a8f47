// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Walks through the representations of one log record's timestamp.
//!
//! The record below is parsed, printed in a few styles and converted to
//! seconds and nanoseconds. A second, offset-less timestamp shows what can
//! still be printed when the offset is missing.

use std::error;
use std::fmt::{self, Display};
use std::io::{self, Write};

use chrono::TimeZone;
use tracing::{debug, warn};

use crate::{
    EpochMillis, Field, FormatError, Formatter, NanoAdjustment, ParseDateTimeError,
    RecordTimestamp,
};

pub const DATE_WITH_OFFSET: &str = "2020-06-19T11:56:35.938955247-04:00";
pub const DATE_NO_OFFSET: &str = "2020-06-15T12:59:55.289";
pub const MILLIS: &str = "1592582195938";
pub const NANOS: &str = "955247";

#[derive(Debug)]
pub enum Error {
    Parse(ParseDateTimeError),
    Format(FormatError),
    Io(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(_) => f.write_str("failed to parse the record"),
            Error::Format(_) => f.write_str("failed to format the record"),
            Error::Io(_) => f.write_str("failed to write the output"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Format(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<ParseDateTimeError> for Error {
    fn from(err: ParseDateTimeError) -> Self {
        Error::Parse(err)
    }
}

impl From<FormatError> for Error {
    fn from(err: FormatError) -> Self {
        Error::Format(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Writes the walkthrough to `out`, rendering the legacy date in `tz`.
pub fn run<W: Write, Tz: TimeZone>(out: &mut W, tz: &Tz) -> Result<(), Error> {
    let millis: EpochMillis = MILLIS.parse()?;
    let nanos: NanoAdjustment = NANOS.parse()?;

    writeln!(out, "DATE:   {DATE_WITH_OFFSET}")?;
    writeln!(out, "MILLIS: {millis}")?;
    writeln!(out, "NANOS:  {nanos}")?;

    let parsed = Formatter::IsoDateTime.parse(DATE_WITH_OFFSET)?;
    writeln!(out, "Fully parsed: {parsed}")?;
    writeln!(out, "{}", Formatter::IsoLocalDateTime.format(&parsed)?)?;
    writeln!(out, "{}", Formatter::Rfc1123DateTime.format(&parsed)?)?;
    writeln!(out, "Seconds: {}", parsed.get_long(Field::InstantSeconds)?)?;
    writeln!(out, "Nanos: {}", parsed.get_long(Field::NanoOfSecond)?)?;
    writeln!(out, "Plain old Date: {}", millis.legacy_string(tz)?)?;

    let record = RecordTimestamp::new(millis, nanos);
    if record.matches(&parsed)? {
        debug!(%millis, %nanos, date = DATE_WITH_OFFSET, "record timestamps agree");
    } else {
        warn!(%millis, %nanos, date = DATE_WITH_OFFSET, "record timestamps disagree");
    }

    writeln!(out)?;
    writeln!(out, "Date/Time with no offset")?;
    let parsed = Formatter::IsoDateTime.parse(DATE_NO_OFFSET)?;
    writeln!(out, "Fully parsed: {parsed}")?;
    writeln!(out, "{}", Formatter::IsoLocalDateTime.format(&parsed)?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use chrono::Utc;

    use super::{run, Error, DATE_NO_OFFSET, DATE_WITH_OFFSET, MILLIS, NANOS};
    use crate::{Formatter, RecordTimestamp};

    #[test]
    fn embedded_record_is_consistent() {
        let record = RecordTimestamp::new(MILLIS.parse().unwrap(), NANOS.parse().unwrap());
        let parsed = Formatter::IsoDateTime.parse(DATE_WITH_OFFSET).unwrap();
        assert_eq!(record.matches(&parsed), Ok(true));
    }

    #[test]
    fn no_offset_cannot_be_printed_as_rfc1123() {
        let parsed = Formatter::IsoDateTime.parse(DATE_NO_OFFSET).unwrap();
        assert!(Formatter::Rfc1123DateTime.format(&parsed).is_err());
    }

    #[test]
    fn output_ends_with_the_no_offset_section() {
        let mut out = Vec::new();
        run(&mut out, &Utc).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.ends_with(
            "\nDate/Time with no offset\n\
             Fully parsed: {},ISO resolved to 2020-06-15T12:59:55.289\n\
             2020-06-15T12:59:55.289\n"
        ));
    }

    struct Closed;

    impl std::io::Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_propagate() {
        let err = run(&mut Closed, &Utc).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.source().is_some());
    }
}
