use chrono::{Datelike, Local, NaiveDate, NaiveTime, Weekday};

/// Storage format for dates. Lexicographic order matches chronological
/// order, which the message queries rely on.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now_time() -> NaiveTime {
    Local::now().time()
}

pub fn encode_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn encode_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

fn czech_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Pondělí",
        Weekday::Tue => "Úterý",
        Weekday::Wed => "Středa",
        Weekday::Thu => "Čtvrtek",
        Weekday::Fri => "Pátek",
        Weekday::Sat => "Sobota",
        Weekday::Sun => "Neděle",
    }
}

/// Display header for a day, e.g. "Pátek, 22. 08. 2025".
pub fn display_header(date: NaiveDate) -> String {
    format!(
        "{}, {}",
        czech_weekday(date.weekday()),
        date.format("%d. %m. %Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_uses_czech_weekday() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 22).unwrap();
        assert_eq!(display_header(date), "Pátek, 22. 08. 2025");
    }

    #[test]
    fn storage_formats_are_sortable() {
        let earlier = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        let later = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert!(encode_time(earlier) < encode_time(later));
    }
}
