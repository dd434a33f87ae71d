use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Decides which calendar days count as trading days.
pub trait TradingCalendar: Send + Sync {
    fn is_trading_day(&self, date: NaiveDate) -> bool;

    /// Walk forward from `date` until a trading day is reached. A date that
    /// already is one comes back unchanged.
    fn next_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut day = date;
        while !self.is_trading_day(day) {
            day += Duration::days(1);
        }
        day
    }
}

/// Weekday-only calendar. Exchange holidays are not modeled.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekdayCalendar;

impl TradingCalendar for WeekdayCalendar {
    fn is_trading_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
