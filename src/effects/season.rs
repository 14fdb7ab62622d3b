//! Seasonal effect detection in São Paulo local time.

use chrono::{DateTime, Datelike, NaiveDate};
use chrono_tz::America::Sao_Paulo;
use chrono_tz::Tz;

use crate::config::SeasonWindow;

/// Wall-clock time in São Paulo for a Unix timestamp in milliseconds.
pub fn sao_paulo_time(epoch_ms: f64) -> Option<DateTime<Tz>> {
    DateTime::from_timestamp_millis(epoch_ms as i64).map(|utc| utc.with_timezone(&Sao_Paulo))
}

/// Whether `(month, day)` falls inside the window. A window whose end month
/// differs from its start month spans the turn of the year.
pub fn in_window(window: &SeasonWindow, month: u32, day: u32) -> bool {
    if window.start_month == window.end_month {
        month == window.start_month && day >= window.start_day && day <= window.end_day
    } else {
        (month == window.start_month && day >= window.start_day)
            || (month == window.end_month && day <= window.end_day)
    }
}

/// `?xmas=true` / `?christmas=true` / `?newyear=true` page overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeasonOverrides {
    pub christmas: bool,
    pub new_year: bool,
}

impl SeasonOverrides {
    pub fn from_params(param: impl Fn(&str) -> Option<String>) -> Self {
        let is_true = |name: &str| param(name).as_deref() == Some("true");
        Self { christmas: is_true("xmas") || is_true("christmas"), new_year: is_true("newyear") }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveSeasons {
    pub christmas: bool,
    pub new_year: bool,
}

impl ActiveSeasons {
    pub fn any(&self) -> bool {
        self.christmas || self.new_year
    }
}

/// Decide which seasonal scenes run. A forced window is evaluated at its own
/// start date; forcing New Year suppresses Christmas entirely.
pub fn detect(
    today: NaiveDate,
    christmas: &SeasonWindow,
    new_year: &SeasonWindow,
    overrides: SeasonOverrides,
) -> ActiveSeasons {
    let check = |window: &SeasonWindow, forced: bool| {
        let (month, day) = if forced {
            (window.start_month, window.start_day)
        } else {
            (today.month(), today.day())
        };
        in_window(window, month, day)
    };

    let force_new_year = new_year.force_test || overrides.new_year;
    let force_christmas = christmas.force_test || overrides.christmas;
    ActiveSeasons {
        christmas: !force_new_year && check(christmas, force_christmas),
        new_year: check(new_year, force_new_year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    #[test]
    fn test_sao_paulo_wall_clock() {
        use chrono::Timelike;

        // 2024-12-25T00:00:00Z
        let t = sao_paulo_time(1_735_084_800_000.0).unwrap();
        assert_eq!((t.year(), t.month(), t.day(), t.hour()), (2024, 12, 24, 21));
        // 2025-01-01T02:30:00Z
        let t = sao_paulo_time(1_735_698_600_000.0).unwrap();
        assert_eq!((t.year(), t.month(), t.day(), t.hour(), t.minute()), (2024, 12, 31, 23, 30));
        // 2024-03-01T12:00:00Z, leap year
        let t = sao_paulo_time(1_709_294_400_000.0).unwrap();
        assert_eq!((t.month(), t.day(), t.hour()), (3, 1, 9));
        // 2018-12-25T00:00:00Z, daylight saving time was still observed (UTC-2)
        let t = sao_paulo_time(1_545_696_000_000.0).unwrap();
        assert_eq!((t.month(), t.day(), t.hour()), (12, 24, 22));
    }

    #[test]
    fn test_windows() {
        let xmas = SeasonWindow::christmas();
        let ny = SeasonWindow::new_year();
        assert!(in_window(&xmas, 12, 24));
        assert!(in_window(&xmas, 12, 26));
        assert!(!in_window(&xmas, 12, 27));
        assert!(in_window(&ny, 12, 31));
        assert!(in_window(&ny, 1, 7));
        assert!(!in_window(&ny, 1, 8));
        assert!(!in_window(&ny, 12, 30));
    }

    #[test]
    fn test_detect_by_date() {
        let (xmas, ny) = (SeasonWindow::christmas(), SeasonWindow::new_year());
        let none = SeasonOverrides::default();
        assert_eq!(detect(at(12, 25), &xmas, &ny, none), ActiveSeasons { christmas: true, new_year: false });
        assert_eq!(detect(at(1, 3), &xmas, &ny, none), ActiveSeasons { christmas: false, new_year: true });
        assert!(!detect(at(6, 15), &xmas, &ny, none).any());
    }

    #[test]
    fn test_forcing_new_year_suppresses_christmas() {
        let (xmas, ny) = (SeasonWindow::christmas(), SeasonWindow::new_year());
        let both = SeasonOverrides { christmas: true, new_year: true };
        assert_eq!(detect(at(12, 25), &xmas, &ny, both), ActiveSeasons { christmas: false, new_year: true });
        let only_xmas = SeasonOverrides { christmas: true, new_year: false };
        assert_eq!(detect(at(6, 1), &xmas, &ny, only_xmas), ActiveSeasons { christmas: true, new_year: false });
    }

    #[test]
    fn test_overrides_from_params() {
        let o = SeasonOverrides::from_params(|name| (name == "christmas").then(|| "true".to_string()));
        assert!(o.christmas && !o.new_year);
        let o = SeasonOverrides::from_params(|name| (name == "xmas").then(|| "1".to_string()));
        assert!(!o.christmas);
    }
}
