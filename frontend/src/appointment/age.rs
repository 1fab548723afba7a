use chrono::{Datelike, NaiveDate};

/// Human readable age of a child born on `dob`, as seen on `today`.
///
/// Children under a year are described in elapsed calendar months, everyone
/// else in completed years. A birth date in the future yields an empty string.
pub fn describe_age(dob: NaiveDate, today: NaiveDate) -> String {
    let year_diff = today.year() - dob.year();
    let month_diff = today.month() as i32 - dob.month() as i32;
    let day_diff = today.day() as i32 - dob.day() as i32;

    let birthday_pending = month_diff < 0 || (month_diff == 0 && day_diff < 0);
    let age = if birthday_pending { year_diff - 1 } else { year_diff };

    if age < 0 {
        return String::new();
    }

    if age == 0 {
        // Day of month is ignored here, only calendar months count.
        let months = year_diff * 12 + month_diff;
        return pluralize(months, "month");
    }

    pluralize(age, "year")
}

/// Same as [`describe_age`] for the `YYYY-MM-DD` value of a date input.
/// Anything that doesn't parse gives an empty string.
pub fn describe_age_iso(dob: &str, today: NaiveDate) -> String {
    match NaiveDate::parse_from_str(dob.trim(), "%Y-%m-%d") {
        Ok(dob) => describe_age(dob, today),
        Err(e) => {
            log::warn!("Unreadable date of birth: {}", e);
            String::new()
        }
    }
}

// The practice has always written "3 year's"; kept as is.
fn pluralize(n: i32, unit: &str) -> String {
    if n > 1 {
        format!("{} {}'s", n, unit)
    } else {
        format!("{} {}", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn one_full_year() {
        assert_eq!(describe_age(date(2020, 1, 1), date(2021, 6, 15)), "1 year");
    }

    #[test]
    fn several_years_use_apostrophe_plural() {
        assert_eq!(describe_age(date(2015, 2, 1), date(2024, 6, 15)), "9 year's");
    }

    #[test]
    fn day_before_anniversary_is_still_previous_year() {
        assert_eq!(describe_age(date(2020, 3, 10), date(2024, 3, 9)), "3 year's");
        assert_eq!(describe_age(date(2020, 3, 10), date(2024, 3, 10)), "4 year's");
    }

    #[test]
    fn under_a_year_counts_months() {
        assert_eq!(describe_age(date(2023, 5, 1), date(2023, 6, 15)), "1 month");
        assert_eq!(describe_age(date(2023, 4, 1), date(2023, 6, 15)), "2 month's");
        assert_eq!(describe_age(date(2023, 1, 1), date(2023, 6, 15)), "5 month's");
    }

    #[test]
    fn months_ignore_day_of_month() {
        assert_eq!(describe_age(date(2023, 1, 20), date(2023, 2, 10)), "1 month");
        assert_eq!(describe_age(date(2023, 6, 1), date(2023, 6, 20)), "0 month");
    }

    #[test]
    fn months_across_new_year() {
        assert_eq!(describe_age(date(2022, 11, 5), date(2023, 2, 20)), "3 month's");
        // Eleven and a bit months: still under one year, month count is twelve.
        assert_eq!(describe_age(date(2022, 12, 20), date(2023, 12, 10)), "12 month's");
    }

    #[test]
    fn future_birth_date_is_empty() {
        assert_eq!(describe_age(date(2030, 1, 1), date(2024, 1, 1)), "");
        assert_eq!(describe_age(date(2024, 1, 2), date(2024, 1, 1)), "");
    }

    #[test]
    fn same_inputs_same_answer() {
        let dob = date(2019, 8, 31);
        let today = date(2024, 2, 29);
        assert_eq!(describe_age(dob, today), describe_age(dob, today));
        assert_eq!(describe_age(dob, today), "4 year's");
    }

    #[test]
    fn iso_input_is_parsed() {
        assert_eq!(describe_age_iso("2020-01-01", date(2021, 6, 15)), "1 year");
        assert_eq!(describe_age_iso(" 2020-01-01 ", date(2021, 6, 15)), "1 year");
    }

    mod capture {
        use std::sync::Mutex;

        use log::{LevelFilter, Log, Metadata, Record};

        pub struct CaptureLogger {
            pub lines: Mutex<Vec<String>>,
        }

        impl Log for CaptureLogger {
            fn enabled(&self, _: &Metadata) -> bool {
                true
            }

            fn log(&self, record: &Record) {
                self.lines
                    .lock()
                    .unwrap()
                    .push(format!("{} {}", record.level(), record.args()));
            }

            fn flush(&self) {}
        }

        pub static LOGGER: CaptureLogger = CaptureLogger { lines: Mutex::new(Vec::new()) };

        pub fn install() -> &'static CaptureLogger {
            // Another test may already have installed it.
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(LevelFilter::Trace);
            &LOGGER
        }
    }

    #[test]
    fn unreadable_date_is_not_logged() {
        let logger = capture::install();

        assert_eq!(describe_age_iso("1990-13-45 private", date(2024, 1, 1)), "");

        let lines = logger.lines.lock().unwrap();
        assert!(lines.iter().any(|l| l.starts_with("WARN Unreadable date of birth")));
        assert!(lines.iter().all(|l| !l.contains("private") && !l.contains("1990-13-45")));
    }

    #[test]
    fn bad_iso_input_is_empty() {
        assert_eq!(describe_age_iso("", date(2021, 6, 15)), "");
        assert_eq!(describe_age_iso("01/01/2020", date(2021, 6, 15)), "");
        assert_eq!(describe_age_iso("2020-02-30", date(2021, 6, 15)), "");
    }
}
