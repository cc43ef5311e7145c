//! Date/time construction from loosely formatted strings.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::Error;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Creates a UTC date/time from a time string, or the current instant for `None`.
///
/// Accepted inputs:
/// - `None`, `""` or `"now"`: the current instant
/// - `"today"`, `"yesterday"`, `"tomorrow"`: midnight UTC of that day
/// - `"@1700000000"`: a Unix timestamp in seconds
/// - RFC 3339 (`2024-05-01T12:30:00+02:00`)
/// - `2024-05-01 12:30:00`, `2024-05-01T12:30:00` (taken as UTC)
/// - `2024-05-01` (midnight UTC)
///
/// ```
/// use dragon_helpers::carbonize;
///
/// let date = carbonize(Some("2024-05-01 12:30:00"))?;
/// assert_eq!(date.to_rfc3339(), "2024-05-01T12:30:00+00:00");
/// # Ok::<(), dragon_helpers::Error>(())
/// ```
pub fn carbonize(time: Option<&str>) -> Result<DateTime<Utc>, Error> {
    let now = Utc::now();
    let Some(raw) = time else {
        return Ok(now);
    };

    let input = raw.trim();
    let invalid = || Error::InvalidDate(raw.to_string());

    match input.to_ascii_lowercase().as_str() {
        "" | "now" => return Ok(now),
        "today" => return Ok(midnight(now.date_naive())),
        "yesterday" => {
            let day = now.date_naive().checked_sub_days(Days::new(1)).ok_or_else(invalid)?;
            return Ok(midnight(day));
        }
        "tomorrow" => {
            let day = now.date_naive().checked_add_days(Days::new(1)).ok_or_else(invalid)?;
            return Ok(midnight(day));
        }
        _ => {}
    }

    if let Some(seconds) = input.strip_prefix('@') {
        let seconds: i64 = seconds.parse().map_err(|_| invalid())?;
        return DateTime::from_timestamp(seconds, 0).ok_or_else(invalid);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(Utc.from_utc_datetime(&parsed));
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(midnight)
        .map_err(|_| invalid())
}

fn midnight(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN))
}
