use crate::entities::CalendarMonth;

/// Returns every month from `start` through `end`, inclusive. An inverted
/// range yields no months.
pub(crate) fn month_range(start: CalendarMonth, end: CalendarMonth) -> Vec<CalendarMonth> {
    if start.is_after(&end) {
        return Vec::new();
    }
    let mut months = Vec::new();
    let mut current = start;
    while !current.is_after(&end) {
        months.push(current);
        let next = current.advance(1);
        if !next.is_after(&current) {
            // Saturated at the last representable month.
            break;
        }
        current = next;
    }
    months
}
