use crate::entities::{
    CalendarMonth, Position, PositionInput, PositionPatch, Project, ProjectInput, ProjectPatch,
};

/// Months a freshly created project spans beyond its first month.
const DEFAULT_PROJECT_EXTRA_MONTHS: i64 = 5;

/// End of the range once `start` is fixed: an end before the start snaps
/// forward to it. Moving the start therefore drags the end along, and a new
/// end is never allowed before the start.
fn clamped_end(start: CalendarMonth, end: CalendarMonth) -> CalendarMonth {
    if end.is_before(&start) {
        start
    } else {
        end
    }
}

impl ProjectInput {
    /// Blank, unfunded project running from `today` for six months.
    pub fn default_for(today: CalendarMonth) -> Self {
        ProjectInput {
            name: String::new(),
            start: today,
            end: today.advance(DEFAULT_PROJECT_EXTRA_MONTHS),
            funded: false,
        }
    }

    pub fn set_start(&mut self, start: CalendarMonth) {
        self.start = start;
        self.end = clamped_end(start, self.end);
    }

    pub fn set_end(&mut self, end: CalendarMonth) {
        self.end = clamped_end(self.start, end);
    }
}

impl PositionInput {
    /// Blank position of one unit spanning the parent project's range.
    pub fn default_for(project: &Project) -> Self {
        PositionInput {
            description: String::new(),
            quantity: 1.0,
            position_type: String::new(),
            start: project.start,
            end: project.end,
        }
    }

    pub fn set_start(&mut self, start: CalendarMonth) {
        self.start = start;
        self.end = clamped_end(start, self.end);
    }

    pub fn set_end(&mut self, end: CalendarMonth) {
        self.end = clamped_end(self.start, end);
    }
}

// Patches fall back to the record being edited for any end they leave
// unset.

impl ProjectPatch {
    pub fn set_start(&mut self, current: &Project, start: CalendarMonth) {
        let end = self.end.unwrap_or(current.end);
        self.start = Some(start);
        if end.is_before(&start) {
            self.end = Some(start);
        }
    }

    pub fn set_end(&mut self, current: &Project, end: CalendarMonth) {
        self.end = Some(clamped_end(self.start.unwrap_or(current.start), end));
    }
}

impl PositionPatch {
    pub fn set_start(&mut self, current: &Position, start: CalendarMonth) {
        let end = self.end.unwrap_or(current.end);
        self.start = Some(start);
        if end.is_before(&start) {
            self.end = Some(start);
        }
    }

    pub fn set_end(&mut self, current: &Position, end: CalendarMonth) {
        self.end = Some(clamped_end(self.start.unwrap_or(current.start), end));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(year: i32, month: i64) -> CalendarMonth {
        CalendarMonth::new(year, month).unwrap()
    }

    #[test]
    fn default_project_spans_six_months() {
        let input = ProjectInput::default_for(m(2024, 9));
        assert_eq!(input.start, m(2024, 9));
        assert_eq!(input.end, m(2025, 2));
        assert!(!input.funded);
        assert!(input.name.is_empty());
    }

    #[test]
    fn moving_start_past_end_drags_end_along() {
        let mut input = ProjectInput::default_for(m(2024, 1));
        input.set_start(m(2024, 10));
        assert_eq!((input.start, input.end), (m(2024, 10), m(2024, 10)));
        input.set_start(m(2024, 3));
        assert_eq!((input.start, input.end), (m(2024, 3), m(2024, 10)));
    }

    #[test]
    fn end_before_start_snaps_to_start() {
        let mut input = ProjectInput::default_for(m(2024, 4));
        input.set_end(m(2024, 1));
        assert_eq!((input.start, input.end), (m(2024, 4), m(2024, 4)));
    }

    #[test]
    fn default_position_follows_project_range() {
        let project = Project {
            name: "Alpha".into(),
            start: m(2024, 2),
            end: m(2024, 8),
            funded: true,
            positions: vec![],
        };
        let mut input = PositionInput::default_for(&project);
        assert_eq!((input.start, input.end), (m(2024, 2), m(2024, 8)));
        assert_eq!(input.quantity, 1.0);
        input.set_end(m(2023, 12));
        assert_eq!(input.end, m(2024, 2));
    }

    #[test]
    fn patch_clamps_against_current_record() {
        let project = Project {
            name: "Alpha".into(),
            start: m(2024, 2),
            end: m(2024, 4),
            funded: false,
            positions: vec![],
        };
        let mut patch = ProjectPatch::default();
        patch.set_start(&project, m(2024, 6));
        assert_eq!(patch.start, Some(m(2024, 6)));
        assert_eq!(patch.end, Some(m(2024, 6)));

        let mut patch = ProjectPatch::default();
        patch.set_start(&project, m(2024, 3));
        assert_eq!(patch.end, None);
        patch.set_end(&project, m(2024, 1));
        assert_eq!(patch.end, Some(m(2024, 3)));
    }
}
