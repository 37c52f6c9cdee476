use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// `February 11, 2023 at 6:31 PM UTC`
pub fn full_datetime(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz)
        .format("%B %-d, %Y at %-I:%M %p %Z")
        .to_string()
}

/// `Sat Feb 11, 2023`
pub fn short_date(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format("%a %b %-d, %Y").to_string()
}
