#![no_main]

use libfuzzer_sys::fuzz_target;
use parse_date::Formatter;

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");
    for formatter in Formatter::ALL {
        let Ok(parsed) = formatter.parse(s) else {
            continue;
        };
        // Whatever a formatter accepts, it can print and read back.
        let Ok(once) = formatter.format(&parsed) else {
            // Only the year of RFC 1123 has a narrower range when printing.
            assert_eq!(formatter, Formatter::Rfc1123DateTime, "input: {s}");
            continue;
        };
        let again = formatter.parse(&once).map(|p| formatter.format(&p));
        assert_eq!(again, Ok(Ok(once)), "{formatter} input: {s}");
    }
});
