use chrono::{Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

/// Submission timestamps arrive in several shapes depending on which form
/// version produced the row. Tried in order; first exact match wins.
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S", // 5/2/2019 17:11:13
    "%Y-%m-%d %H:%M:%S", // 2019-05-02 17:11:13
];
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y", // 5/2/2019
    "%Y-%m-%d", // 2019-05-02
];

/// Parse a raw timestamp field against every supported format.
/// Date-only formats resolve to midnight. Returns `None` for empty input or
/// when nothing matches; both output modes must classify a given string the
/// same way, so all lowering goes through here.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Lower a raw timestamp field to Unix seconds, interpreting the wall-clock
/// value in the machine-local timezone. Unparseable input yields 0, the
/// sentinel the JSON path treats as "drop this row". Ambiguous local times
/// (DST fold) take the earliest mapping; nonexistent local times yield the
/// sentinel.
pub fn unix_timestamp(raw: &str) -> i64 {
    let Some(naive) = parse_timestamp(raw) else {
        return 0;
    };
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.timestamp(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp(),
        LocalResult::None => 0,
    }
}

/// Lower a raw timestamp field to a comparable sort key. Unparseable input
/// yields the minimum representable datetime, which orders such rows after
/// every parsed row under a descending sort.
pub fn sort_key(raw: &str) -> NaiveDateTime {
    parse_timestamp(raw).unwrap_or(NaiveDateTime::MIN)
}
