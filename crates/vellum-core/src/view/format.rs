use chrono::{DateTime, Utc};

/// Abbreviate large counters: 415000 -> "415.0K", 1200000 -> "1.2M".
/// Values below a thousand are rendered as-is.
pub fn compact_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Uppercased first letters of the first two words of a name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Human-readable distance between two instants, coarsening with age.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);

    let (amount, unit) = if seconds < 60 {
        return "just now".to_string();
    } else if seconds < 3600 {
        (seconds / 60, "minute")
    } else if seconds < 86_400 {
        (seconds / 3600, "hour")
    } else if seconds < 7 * 86_400 {
        (seconds / 86_400, "day")
    } else if seconds < 30 * 86_400 {
        (seconds / (7 * 86_400), "week")
    } else if seconds < 365 * 86_400 {
        (seconds / (30 * 86_400), "month")
    } else {
        (seconds / (365 * 86_400), "year")
    };

    if amount == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{amount} {unit}s ago")
    }
}

/// Estimated read time in minutes at 200 words per minute, minimum 1.
pub fn reading_time(content: &str) -> u32 {
    let words = content.split_whitespace().count() as u32;
    words.div_ceil(200).max(1)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_compact_number() {
        assert_eq!(compact_number(999), "999");
        assert_eq!(compact_number(5_000), "5.0K");
        assert_eq!(compact_number(415_000), "415.0K");
        assert_eq!(compact_number(1_200_000), "1.2M");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("anna maria luisa"), "AM");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_relative_time_units() {
        let now = Utc::now();
        assert_eq!(relative_time(now - Duration::seconds(30), now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(relative_time(now - Duration::days(3), now), "3 days ago");
        assert_eq!(relative_time(now - Duration::days(14), now), "2 weeks ago");
        assert_eq!(relative_time(now - Duration::days(90), now), "3 months ago");
        assert_eq!(relative_time(now - Duration::days(800), now), "2 years ago");
    }

    #[test]
    fn test_relative_time_never_negative() {
        let now = Utc::now();
        assert_eq!(relative_time(now + Duration::hours(1), now), "just now");
    }

    #[test]
    fn test_reading_time_floor_is_one_minute() {
        assert_eq!(reading_time("a few words"), 1);
        let long = "word ".repeat(450);
        assert_eq!(reading_time(&long), 3);
    }
}
