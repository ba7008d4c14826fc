use crate::entities::CalendarMonth;

impl CalendarMonth {
    pub fn is_before(&self, other: &CalendarMonth) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &CalendarMonth) -> bool {
        self > other
    }

    /// Inclusive on both ends.
    pub fn is_within(&self, start: &CalendarMonth, end: &CalendarMonth) -> bool {
        !self.is_before(start) && !self.is_after(end)
    }

    /// Returns the month `count` months later (earlier, if negative).
    ///
    /// Works on the total month count. Saturates at `0000-01` and `9999-12`.
    pub fn advance(&self, count: i64) -> CalendarMonth {
        let first = i64::from(CalendarMonth::MIN_YEAR) * 12;
        let last = i64::from(CalendarMonth::MAX_YEAR) * 12 + 11;
        let total = self.total_months().saturating_add(count).clamp(first, last);
        let year = i32::try_from(total.div_euclid(12)).unwrap_or(CalendarMonth::MAX_YEAR);
        let month = total.rem_euclid(12) + 1;
        CalendarMonth::new(year, month).unwrap_or(*self)
    }

    fn total_months(&self) -> i64 {
        i64::from(self.year()) * 12 + i64::from(self.month()) - 1
    }
}
