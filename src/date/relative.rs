use chrono::{DateTime, Utc};

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

const UNITS: &[(u64, &str)] = &[
    (365 * DAY, "year"),
    (30 * DAY, "month"),
    (7 * DAY, "week"),
    (DAY, "day"),
    (HOUR, "hour"),
    (MINUTE, "minute"),
];

/// Human-relative distance between `date` and the current time
pub fn from_now(date: &DateTime<Utc>) -> String {
    from_now_at(date, &Utc::now())
}

/// Human-relative distance between `date` and `now`
/// "just now" within a minute, otherwise "3 days ago" or "in 2 hours"
pub fn from_now_at(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = (*now - *date).num_seconds();
    let magnitude = seconds.unsigned_abs();

    let Some((unit_seconds, unit)) = UNITS.iter().find(|(size, _)| magnitude >= *size) else {
        return "just now".to_string();
    };

    let count = magnitude / unit_seconds;
    let plural = if count == 1 { "" } else { "s" };

    if seconds > 0 {
        format!("{} {}{} ago", count, unit, plural)
    } else {
        format!("in {} {}{}", count, unit, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_from_now_just_now() {
        assert_eq!(from_now_at(&(now() - Duration::seconds(30)), &now()), "just now");
        assert_eq!(from_now_at(&(now() + Duration::seconds(30)), &now()), "just now");
    }

    #[test]
    fn test_from_now_minutes() {
        assert_eq!(from_now_at(&(now() - Duration::minutes(1)), &now()), "1 minute ago");
        assert_eq!(from_now_at(&(now() - Duration::minutes(45)), &now()), "45 minutes ago");
    }

    #[test]
    fn test_from_now_hours() {
        assert_eq!(from_now_at(&(now() - Duration::hours(2)), &now()), "2 hours ago");
    }

    #[test]
    fn test_from_now_days() {
        assert_eq!(from_now_at(&(now() - Duration::days(3)), &now()), "3 days ago");
    }

    #[test]
    fn test_from_now_weeks_months_years() {
        assert_eq!(from_now_at(&(now() - Duration::weeks(2)), &now()), "2 weeks ago");
        assert_eq!(from_now_at(&(now() - Duration::days(65)), &now()), "2 months ago");
        assert_eq!(from_now_at(&(now() - Duration::days(400)), &now()), "1 year ago");
    }

    #[test]
    fn test_from_now_future() {
        assert_eq!(from_now_at(&(now() + Duration::hours(5)), &now()), "in 5 hours");
        assert_eq!(from_now_at(&(now() + Duration::days(1)), &now()), "in 1 day");
    }

    #[test]
    fn test_from_now_uses_clock() {
        let result = from_now(&(Utc::now() - Duration::days(10)));
        assert_eq!(result, "1 week ago");
    }
}
