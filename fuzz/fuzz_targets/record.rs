#![no_main]

use chrono::{FixedOffset, Utc};
use libfuzzer_sys::fuzz_target;
use parse_date::{EpochMillis, NanoAdjustment, RecordTimestamp};

fuzz_target!(|input: (i64, u32, i32)| {
    let (millis, nanos, offset) = input;
    let millis = EpochMillis(millis);
    let _ = millis.legacy_string(&Utc);
    if let Some(tz) = FixedOffset::east_opt(offset % 86_400) {
        let _ = millis.legacy_string(&tz);
    }

    let Ok(nanos) = NanoAdjustment::new(nanos) else {
        return;
    };
    let record = RecordTimestamp::new(millis, nanos);
    if let Some(instant) = record.instant() {
        assert_eq!(RecordTimestamp::from_instant(instant), record);
    }
});
