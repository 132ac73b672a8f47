// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::fmt;

use winnow::error::{ContextError, ParseError};

#[derive(Debug)]
pub(crate) enum Error {
    Syntax { index: usize, reason: String },
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax { index, reason } if reason.is_empty() => {
                write!(f, "unexpected input at index {index}")
            }
            Error::Syntax { index, reason } => {
                write!(f, "expected {reason} at index {index}")
            }
        }
    }
}

impl From<ParseError<&str, ContextError>> for Error {
    fn from(err: ParseError<&str, ContextError>) -> Self {
        Error::Syntax {
            index: err.offset(),
            reason: err.inner().to_string(),
        }
    }
}
