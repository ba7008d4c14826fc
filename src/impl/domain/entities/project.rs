use super::{calendar_month::CalendarMonth, position::Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub start: CalendarMonth,
    pub end: CalendarMonth,
    pub funded: bool,
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInput {
    pub name: String,
    pub start: CalendarMonth,
    pub end: CalendarMonth,
    pub funded: bool,
}

/// Fields left as `None` are kept as they are. Changing the range does not
/// move the project's positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub start: Option<CalendarMonth>,
    pub end: Option<CalendarMonth>,
    pub funded: Option<bool>,
}

// --

impl From<&Project> for ProjectInput {
    fn from(project: &Project) -> Self {
        ProjectInput {
            name: project.name.clone(),
            start: project.start,
            end: project.end,
            funded: project.funded,
        }
    }
}

impl Project {
    /// Positions active in `month`, with their index in the position list.
    pub fn active_positions<'a>(
        &'a self,
        month: &'a CalendarMonth,
    ) -> impl Iterator<Item = (usize, &'a Position)> + 'a {
        self.positions
            .iter()
            .enumerate()
            .filter(move |(_, position)| position.is_active_in(month))
    }
}
