//! GP date conventions.
//!
//! GP keeps dates and times in separate `DATETIME` columns: date columns carry
//! midnight, time columns carry the time of day on 1900-01-01.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// 1900-01-01 00:00:00, the date part of every GP time column.
pub fn gp_epoch_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1900, 1, 1)
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}

/// Today at midnight, local time.
pub fn gp_cur_date() -> NaiveDateTime {
    Local::now().date_naive().and_time(NaiveTime::MIN)
}

/// The current local time of day on the GP epoch date.
pub fn gp_cur_time() -> NaiveDateTime {
    gp_epoch_start().date().and_time(Local::now().time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_epoch() {
        let epoch = gp_epoch_start();
        assert_eq!((epoch.year(), epoch.month(), epoch.day()), (1900, 1, 1));
        assert_eq!(epoch.time(), NaiveTime::MIN);
    }

    #[test]
    fn test_cur_date_has_no_time() {
        let today = gp_cur_date();
        assert_eq!(today.time(), NaiveTime::MIN);
        assert!(today.year() >= 2024);
    }

    #[test]
    fn test_cur_time_is_on_epoch_date() {
        let now = gp_cur_time();
        assert_eq!(now.date(), gp_epoch_start().date());
        assert!(now.hour() < 24);
    }
}
