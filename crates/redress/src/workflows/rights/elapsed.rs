use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;

/// Time between the start date and the event date.
///
/// Months and years are approximations (`days / 30`, `days / 365`) rather than calendar
/// arithmetic; every rule-table threshold is expressed against these approximations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elapsed {
    pub days: i64,
    pub months: i64,
    pub years: i64,
}

impl Elapsed {
    /// Spans where `later` precedes `earlier` clamp to zero. Intake rejects those claims,
    /// so the clamp only matters to direct callers of the evaluator.
    pub fn between(earlier: NaiveDate, later: NaiveDate) -> Self {
        Self::from_days((later - earlier).num_days())
    }

    pub fn from_days(days: i64) -> Self {
        let days = days.max(0);
        Self {
            days,
            months: days / DAYS_PER_MONTH,
            years: days / DAYS_PER_YEAR,
        }
    }
}

/// Inclusive upper bound of a tier or modifier window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum ElapsedBound {
    Days(i64),
    Months(i64),
    Years(i64),
}

impl ElapsedBound {
    /// `elapsed == bound` belongs inside the window.
    pub fn contains(self, elapsed: &Elapsed) -> bool {
        match self {
            Self::Days(limit) => elapsed.days <= limit,
            Self::Months(limit) => elapsed.months <= limit,
            Self::Years(limit) => elapsed.years <= limit,
        }
    }

    const fn unit_days(self) -> i64 {
        match self {
            Self::Days(_) => 1,
            Self::Months(_) => DAYS_PER_MONTH,
            Self::Years(_) => DAYS_PER_YEAR,
        }
    }

    /// Last elapsed day still inside the window. `Months(6)` runs to day 209, since
    /// `209 / 30 == 6`.
    pub const fn last_day(self) -> i64 {
        (self.limit() + 1) * self.unit_days() - 1
    }

    /// Days left before the window closes; zero on its last day and after.
    pub fn days_left(self, elapsed: &Elapsed) -> i64 {
        (self.last_day() - elapsed.days).max(0)
    }

    /// Whole units left before the window closes.
    pub fn remaining(self, elapsed: &Elapsed) -> i64 {
        self.days_left(elapsed) / self.unit_days()
    }

    /// Bound length in approximate days, used to check that tiers ascend.
    pub fn approx_days(self) -> i64 {
        match self {
            Self::Days(limit) => limit,
            Self::Months(limit) => limit * DAYS_PER_MONTH,
            Self::Years(limit) => limit * DAYS_PER_YEAR,
        }
    }

    pub const fn limit(self) -> i64 {
        match self {
            Self::Days(limit) | Self::Months(limit) | Self::Years(limit) => limit,
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::Days(_) => "day",
            Self::Months(_) => "month",
            Self::Years(_) => "year",
        }
    }

    /// Hyphenated window length, e.g. `30-day` or `6-month`.
    pub fn window(self) -> String {
        format!("{}-{}", self.limit(), self.unit())
    }

    /// `20 days left in 30-day window`. Month and year windows with less than one whole
    /// unit to go are phrased in days.
    pub fn remaining_phrase(self, elapsed: &Elapsed) -> String {
        let (remaining, unit) = match self.remaining(elapsed) {
            0 => (self.days_left(elapsed), "day"),
            whole => (whole, self.unit()),
        };
        let plural = if remaining == 1 { "" } else { "s" };
        format!("{remaining} {unit}{plural} left in {} window", self.window())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn months_use_thirty_day_approximation() {
        let elapsed = Elapsed::between(date(2025, 1, 1), date(2025, 7, 20));
        assert_eq!(elapsed.days, 200);
        assert_eq!(elapsed.months, 6);
        assert_eq!(elapsed.years, 0);
    }

    #[test]
    fn reversed_dates_clamp_to_zero() {
        let elapsed = Elapsed::between(date(2025, 3, 10), date(2025, 3, 1));
        assert_eq!(elapsed, Elapsed::from_days(0));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(ElapsedBound::Days(30).contains(&Elapsed::from_days(30)));
        assert!(!ElapsedBound::Days(30).contains(&Elapsed::from_days(31)));
        assert!(ElapsedBound::Months(6).contains(&Elapsed::from_days(209)));
        assert!(!ElapsedBound::Months(6).contains(&Elapsed::from_days(210)));
        assert!(ElapsedBound::Years(6).contains(&Elapsed::from_days(6 * 365 + 364)));
    }

    #[test]
    fn remaining_phrase_handles_singular_units() {
        assert_eq!(
            ElapsedBound::Days(30).remaining_phrase(&Elapsed::from_days(10)),
            "20 days left in 30-day window"
        );
        assert_eq!(
            ElapsedBound::Months(6).remaining_phrase(&Elapsed::from_days(150)),
            "1 month left in 6-month window"
        );
        assert_eq!(
            ElapsedBound::Days(14).remaining_phrase(&Elapsed::from_days(14)),
            "0 days left in 14-day window"
        );
    }

    #[test]
    fn month_window_counts_real_days_when_under_one_unit_remains() {
        let repair_window = ElapsedBound::Months(6);

        assert_eq!(repair_window.last_day(), 209);
        assert_eq!(
            repair_window.remaining_phrase(&Elapsed::from_days(185)),
            "24 days left in 6-month window"
        );
        assert_eq!(
            repair_window.remaining_phrase(&Elapsed::from_days(208)),
            "1 day left in 6-month window"
        );
        assert_eq!(
            repair_window.remaining_phrase(&Elapsed::from_days(209)),
            "0 days left in 6-month window"
        );
        assert_eq!(
            repair_window.remaining_phrase(&Elapsed::from_days(120)),
            "2 months left in 6-month window"
        );
    }

    #[test]
    fn year_window_runs_to_the_end_of_its_final_year() {
        let limitation = ElapsedBound::Years(2);

        assert_eq!(limitation.last_day(), 3 * 365 - 1);
        assert_eq!(
            limitation.remaining_phrase(&Elapsed::from_days(800)),
            "294 days left in 2-year window"
        );
        assert_eq!(limitation.remaining(&Elapsed::from_days(300)), 2);
    }
}
