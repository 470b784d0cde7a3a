//! Human-friendly date labels for the CMS inbox.

use chrono::Datelike;

use crate::types::Timestamp;

/// Label a message timestamp relative to `now`.
///
/// - under one day old: `HH:MM`
/// - same calendar year: `Mon DD`
/// - otherwise: `DD/MM/YYYY`
pub fn inbox_label(timestamp: Timestamp, now: Timestamp) -> String {
    if (now - timestamp).num_days() < 1 {
        timestamp.format("%H:%M").to_string()
    } else if now.year() == timestamp.year() {
        timestamp.format("%b %d").to_string()
    } else {
        timestamp.format("%d/%m/%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn recent_message_shows_time() {
        let now = at(2024, 6, 10, 12, 0);
        assert_eq!(inbox_label(at(2024, 6, 10, 9, 5), now), "09:05");
        assert_eq!(inbox_label(at(2024, 6, 9, 13, 30), now), "13:30");
    }

    #[test]
    fn same_year_shows_month_and_day() {
        let now = at(2024, 6, 10, 12, 0);
        assert_eq!(inbox_label(at(2024, 3, 4, 8, 0), now), "Mar 04");
    }

    #[test]
    fn older_years_show_full_date() {
        let now = at(2024, 1, 5, 12, 0);
        assert_eq!(inbox_label(at(2023, 12, 1, 8, 0), now), "01/12/2023");
    }
}
