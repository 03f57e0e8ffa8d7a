use chrono::{Local, NaiveDateTime, TimeZone};

/// Category-axis label pattern, `YYYY-MM-DD HH:mm:ss`.
pub const LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Volume-axis tick pattern, `HH:mm`.
pub const SHORT_LABEL_FORMAT: &str = "%H:%M";
/// What the label reads when the timestamp cannot be represented.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a bucket timestamp (unix seconds) in the local timezone.
pub fn format_label(data_ts: i64) -> String {
    format_label_in(data_ts, &Local)
}

/// Format a bucket timestamp (unix seconds) in `tz`.
///
/// The value is scaled to milliseconds first; overflow and out-of-range
/// instants give [`INVALID_DATE`].
pub fn format_label_in<Tz: TimeZone>(data_ts: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    data_ts
        .checked_mul(1000)
        .and_then(|ms| tz.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format(LABEL_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// `HH:mm` part of a category label, for the volume axis ticks.
///
/// Labels that don't follow [`LABEL_FORMAT`] are returned unchanged.
pub fn short_time_label(label: &str) -> String {
    NaiveDateTime::parse_from_str(label, LABEL_FORMAT)
        .map(|dt| dt.format(SHORT_LABEL_FORMAT).to_string())
        .unwrap_or_else(|_| label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn label_in_utc() {
        assert_eq!(format_label_in(1_700_000_000, &Utc), "2023-11-14 22:13:20");
        assert_eq!(format_label_in(0, &Utc), "1970-01-01 00:00:00");
    }

    #[test]
    fn label_follows_offset() {
        let shanghai = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(format_label_in(1_700_000_000, &shanghai), "2023-11-15 06:13:20");
    }

    #[test]
    fn overflow_is_invalid_date() {
        assert_eq!(format_label_in(i64::MAX, &Utc), INVALID_DATE);
        assert_eq!(format_label(i64::MIN), INVALID_DATE);
    }

    #[test]
    fn short_label_takes_hours_minutes() {
        assert_eq!(short_time_label("2023-11-14 22:13:20"), "22:13");
        assert_eq!(short_time_label(INVALID_DATE), INVALID_DATE);
    }
}
