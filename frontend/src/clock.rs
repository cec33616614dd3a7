use chrono::{Local, NaiveDate};
use std::rc::Rc;

/// Source of the visitor's local wall-clock time.
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Human-readable timestamp, e.g. `2026. 10. 18. 14:03:59`.
    fn timestamp(&self) -> String;
}

impl<T: Clock + ?Sized> Clock for Rc<T> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }

    fn timestamp(&self) -> String {
        (**self).timestamp()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn timestamp(&self) -> String {
        Local::now().format("%Y. %-m. %-d. %H:%M:%S").to_string()
    }
}

/// Storage form of a calendar date, used as the stats cache key.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::Cell;

    pub struct FixedClock {
        date: Cell<NaiveDate>,
    }

    impl FixedClock {
        pub fn new(year: i32, month: u32, day: u32) -> Rc<Self> {
            let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
            Rc::new(Self { date: Cell::new(date) })
        }

        pub fn advance_days(&self, days: u64) {
            let next = self.date.get() + chrono::Days::new(days);
            self.date.set(next);
        }
    }

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.date.get()
        }

        fn timestamp(&self) -> String {
            format!("{} 12:00:00", self.date.get().format("%Y. %-m. %-d."))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FixedClock;
    use super::*;

    #[test]
    fn test_date_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(date_key(date), "2026-03-07");
    }

    #[test]
    fn test_fixed_clock_rolls_over() {
        let clock = FixedClock::new(2026, 12, 31);
        clock.advance_days(1);
        assert_eq!(date_key(clock.today()), "2027-01-01");
        assert_eq!(clock.timestamp(), "2027. 1. 1. 12:00:00");
    }
}
