use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

pub struct DateHelper;

impl DateHelper {
    /// Accepts `YYYY-MM-DD`, a full ISO-8601 timestamp (date part only) or `M/D/YYYY`.
    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(stamp.date_naive());
        }

        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(stamp.date());
        }

        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
    }

    pub fn parse_time(raw: &str) -> Option<NaiveTime> {
        let raw = raw.trim();
        TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
    }

    /// Combines a date string with the start of a `"HH:MM-HH:MM"` range.
    pub fn start_of_range(date: &str, time_range: &str) -> Option<NaiveDateTime> {
        let start = time_range.split('-').next()?.trim();
        if start.is_empty() {
            return None;
        }
        Some(Self::parse_date(date)?.and_time(Self::parse_time(start)?))
    }

    /// `M/D/YYYY` without zero padding, the format the slot endpoint expects by default.
    pub fn slot_query_date(date: NaiveDate) -> String {
        format!("{}/{}/{}", date.month(), date.day(), date.year())
    }

    /// `YYYY-MM-DD`, used by the student booking view.
    pub fn iso_date(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// `Jan 10, 2025`; anything unparsable is shown as-is.
    pub fn display_date(raw: &str) -> String {
        Self::parse_date(raw).map_or_else(|| raw.to_string(), |date| date.format("%b %-d, %Y").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_supported_date_formats() {
        assert_eq!(DateHelper::parse_date("2025-01-10"), Some(date(2025, 1, 10)));
        assert_eq!(DateHelper::parse_date("1/10/2025"), Some(date(2025, 1, 10)));
        assert_eq!(DateHelper::parse_date("2025-01-10T00:00:00.000Z"), Some(date(2025, 1, 10)));
        assert_eq!(DateHelper::parse_date("next tuesday"), None);
        assert_eq!(DateHelper::parse_date(""), None);
    }

    #[test]
    fn start_of_range_uses_first_half() {
        let start = DateHelper::start_of_range("2025-01-10", "09:00-10:00").unwrap();
        assert_eq!(start, date(2025, 1, 10).and_hms_opt(9, 0, 0).unwrap());
        assert!(DateHelper::start_of_range("2025-01-10", "").is_none());
        assert!(DateHelper::start_of_range("2025-01-10", "soon").is_none());
    }

    #[test]
    fn slot_query_date_is_not_padded() {
        assert_eq!(DateHelper::slot_query_date(date(2025, 3, 7)), "3/7/2025");
        assert_eq!(DateHelper::iso_date(date(2025, 3, 7)), "2025-03-07");
    }

    #[test]
    fn display_date_falls_back_to_raw() {
        assert_eq!(DateHelper::display_date("2025-01-10"), "Jan 10, 2025");
        assert_eq!(DateHelper::display_date("tbd"), "tbd");
    }
}
