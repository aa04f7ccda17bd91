use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date_math::{days_in_month, month_name};

/// The month the matrix is showing. `month` is zero-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewMonth {
    pub month: u32,
    pub year: i32,
}

impl ViewMonth {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    /// The month containing `today`
    pub fn current(today: NaiveDate) -> Self {
        Self {
            month: today.month0(),
            year: today.year(),
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 0 {
            Self { month: 11, year: self.year - 1 }
        } else {
            Self { month: self.month - 1, year: self.year }
        }
    }

    pub fn next(self) -> Self {
        if self.month >= 11 {
            Self { month: 0, year: self.year + 1 }
        } else {
            Self { month: self.month + 1, year: self.year }
        }
    }

    /// One-based month number as the booking backend expects it
    pub fn query_month(&self) -> u32 {
        self.month + 1
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Calendar date of a one-based day of this month
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.query_month(), day)
    }

    /// Header title, e.g. `"Juni 2024"`
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}
