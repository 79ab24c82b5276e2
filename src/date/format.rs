//! Absolute date rendering with moment-style pattern tokens.
//!
//! Supported tokens: `YYYY YY MMMM MMM MM M Do DD D dddd ddd d HH H hh h
//! mm m ss s SSS A a ZZ Z`. Text inside `[...]` is copied verbatim and any
//! other character passes through unchanged.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Pattern used when neither the caller nor the configuration supplies one.
pub const DEFAULT_DATE_FORMAT: &str = "MMMM Do, YYYY h:mma";

// Longer tokens first so that prefix matching picks the widest token.
const TOKENS: &[&str] = &[
    "YYYY", "YY", "MMMM", "MMM", "MM", "M", "Do", "DD", "D", "dddd", "ddd", "d", "HH", "H", "hh",
    "h", "mm", "m", "ss", "s", "SSS", "A", "a", "ZZ", "Z",
];

/// Render `date` (in UTC) according to `pattern`.
pub fn format_date(date: &DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(end) = rest.find(']') {
                out.push_str(&rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        if let Some(token) = TOKENS.iter().find(|token| rest.starts_with(**token)) {
            out.push_str(&render_token(date, token));
            rest = &rest[token.len()..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn render_token(date: &DateTime<Utc>, token: &str) -> String {
    let (is_pm, hour12) = date.hour12();
    match token {
        "YYYY" => format!("{:04}", date.year()),
        "YY" => format!("{:02}", date.year().rem_euclid(100)),
        "MMMM" => date.format("%B").to_string(),
        "MMM" => date.format("%b").to_string(),
        "MM" => format!("{:02}", date.month()),
        "M" => date.month().to_string(),
        "Do" => ordinal(date.day()),
        "DD" => format!("{:02}", date.day()),
        "D" => date.day().to_string(),
        "dddd" => date.format("%A").to_string(),
        "ddd" => date.format("%a").to_string(),
        "d" => date.weekday().num_days_from_sunday().to_string(),
        "HH" => format!("{:02}", date.hour()),
        "H" => date.hour().to_string(),
        "hh" => format!("{:02}", hour12),
        "h" => hour12.to_string(),
        "mm" => format!("{:02}", date.minute()),
        "m" => date.minute().to_string(),
        "ss" => format!("{:02}", date.second()),
        "s" => date.second().to_string(),
        // Leap seconds report 1000+ millis
        "SSS" => format!("{:03}", date.timestamp_subsec_millis().min(999)),
        "A" => (if is_pm { "PM" } else { "AM" }).to_string(),
        "a" => (if is_pm { "pm" } else { "am" }).to_string(),
        "ZZ" => date.format("%z").to_string(),
        "Z" => date.format("%:z").to_string(),
        other => other.to_string(),
    }
}

/// Day of month with its English ordinal suffix ("1st", "12th", "23rd").
fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}
