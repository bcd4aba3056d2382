//! Human-relative time phrases such as "a few seconds ago" or "in 3 days".
//!
//! Bucket boundaries follow the common moment/dayjs scale: each step rounds
//! the elapsed time to its unit and moves up once the rounded value passes
//! the step's limit. Months are approximated as 30.4375 days.

use chrono::{DateTime, Utc};

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const MONTH_MS: f64 = 30.4375 * DAY_MS as f64;

/// Phrase describing `then` as seen from `now`.
pub fn from_now(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = (now - then).num_milliseconds();
    let phrase = span_phrase(elapsed_ms.unsigned_abs() as i64);

    if elapsed_ms < 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn span_phrase(ms: i64) -> String {
    let seconds = rounded(ms, SECOND_MS);
    if seconds <= 44 {
        return "a few seconds".to_string();
    }
    if seconds <= 89 {
        return "a minute".to_string();
    }

    let minutes = rounded(ms, MINUTE_MS);
    if minutes <= 44 {
        return format!("{minutes} minutes");
    }
    if minutes <= 89 {
        return "an hour".to_string();
    }

    let hours = rounded(ms, HOUR_MS);
    if hours <= 21 {
        return format!("{hours} hours");
    }
    if hours <= 35 {
        return "a day".to_string();
    }

    let days = rounded(ms, DAY_MS);
    if days <= 25 {
        return format!("{days} days");
    }
    if days <= 45 {
        return "a month".to_string();
    }

    let months = (ms as f64 / MONTH_MS).round() as i64;
    if months <= 10 {
        return format!("{months} months");
    }
    if months <= 17 {
        return "a year".to_string();
    }

    let years = (months as f64 / 12.0).round() as i64;
    format!("{years} years")
}

fn rounded(ms: i64, unit: i64) -> i64 {
    (ms + unit / 2) / unit
}
