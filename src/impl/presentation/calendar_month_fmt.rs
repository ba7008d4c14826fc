use chrono::NaiveDate;

use crate::entities::CalendarMonth;

impl CalendarMonth {
    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), 1)
    }

    /// Column label, e.g. `Jan 24`.
    pub fn short_label(&self) -> String {
        self.first_day()
            .map(|d| d.format("%b %y").to_string())
            .unwrap_or_else(|| self.to_string())
    }

    /// Tooltip label, e.g. `January 2024`.
    pub fn long_label(&self) -> String {
        self.first_day()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| self.to_string())
    }
}
