// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use parse_date::{Formatter, Parsed};

pub fn parse(formatter: Formatter, input: &str) -> Parsed {
    match formatter.parse(input) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse '{input}' as {formatter}: {e}"),
    }
}

/// Parses `input` with `from` and checks its rendering by `to`.
pub fn check_format(from: Formatter, input: &str, to: Formatter, expected: &str) {
    let parsed = parse(from, input);
    match to.format(&parsed) {
        Ok(actual) => assert_eq!(actual, expected, "Input value: {input}, style: {to}"),
        Err(e) => panic!("Failed to format '{input}' as {to}: {e}"),
    }
}

/// Parsing the rendering of `input` gives back the same rendering.
pub fn check_idempotent(formatter: Formatter, input: &str) {
    let once = formatter
        .format(&parse(formatter, input))
        .unwrap_or_else(|e| panic!("Failed to format '{input}' as {formatter}: {e}"));
    let twice = formatter
        .format(&parse(formatter, &once))
        .unwrap_or_else(|e| panic!("Failed to format '{once}' as {formatter}: {e}"));
    assert_eq!(once, twice, "Input value: {input}");
}
