//! Publish-date formatting with English ordinal suffixes.

use chrono::{DateTime, Datelike, Utc};

/// Format a publish date as `Month day-with-suffix, Year`, e.g.
/// `January 1st, 2024`.
#[must_use]
pub fn format_publish_date(published_at: DateTime<Utc>) -> String {
    let day = published_at.day();
    format!(
        "{} {day}{}, {}",
        published_at.format("%B"),
        ordinal_suffix(day),
        published_at.format("%Y")
    )
}

/// English ordinal suffix for a day of month; 11–13 take `th`.
const fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 9, 30, 0)
            .single()
            .expect("test timestamp should be unambiguous")
    }

    #[test]
    fn formats_reference_date() {
        assert_eq!(format_publish_date(date(2024, 1, 1)), "January 1st, 2024");
    }

    #[test]
    fn suffixes_follow_english_rules() {
        assert_eq!(format_publish_date(date(2024, 3, 2)), "March 2nd, 2024");
        assert_eq!(format_publish_date(date(2024, 3, 3)), "March 3rd, 2024");
        assert_eq!(format_publish_date(date(2024, 3, 4)), "March 4th, 2024");
        assert_eq!(format_publish_date(date(2024, 3, 21)), "March 21st, 2024");
        assert_eq!(format_publish_date(date(2024, 3, 22)), "March 22nd, 2024");
        assert_eq!(format_publish_date(date(2024, 3, 23)), "March 23rd, 2024");
        assert_eq!(format_publish_date(date(2024, 3, 31)), "March 31st, 2024");
    }

    #[test]
    fn teen_days_take_th() {
        assert_eq!(format_publish_date(date(2024, 6, 11)), "June 11th, 2024");
        assert_eq!(format_publish_date(date(2024, 6, 12)), "June 12th, 2024");
        assert_eq!(format_publish_date(date(2024, 6, 13)), "June 13th, 2024");
    }
}
