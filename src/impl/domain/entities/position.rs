use super::calendar_month::CalendarMonth;

/// A staffing allocation of `quantity` units of `position_type` over an
/// inclusive month range. Owned by exactly one `Project`.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub description: String,
    pub quantity: f64,
    pub position_type: String,
    pub start: CalendarMonth,
    pub end: CalendarMonth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionInput {
    pub description: String,
    pub quantity: f64,
    pub position_type: String,
    pub start: CalendarMonth,
    pub end: CalendarMonth,
}

/// Fields left as `None` are kept as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionPatch {
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub position_type: Option<String>,
    pub start: Option<CalendarMonth>,
    pub end: Option<CalendarMonth>,
}

// --

impl Position {
    pub fn is_active_in(&self, month: &CalendarMonth) -> bool {
        month.is_within(&self.start, &self.end)
    }
}

impl From<PositionInput> for Position {
    fn from(input: PositionInput) -> Self {
        Position {
            description: input.description,
            quantity: input.quantity,
            position_type: input.position_type,
            start: input.start,
            end: input.end,
        }
    }
}

impl From<&Position> for PositionInput {
    fn from(position: &Position) -> Self {
        PositionInput {
            description: position.description.clone(),
            quantity: position.quantity,
            position_type: position.position_type.clone(),
            start: position.start,
            end: position.end,
        }
    }
}
