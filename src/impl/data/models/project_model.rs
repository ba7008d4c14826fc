use crate::{
    entities::{CalendarMonth, Position, Project},
    errors::TimelineError,
};

use super::{
    calendar_month_model::CalendarMonthModel, flag_model::FlagModel,
    quantity_model::QuantityModel,
};

// Import side.
// ---

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct RawPositionModel {
    pub description: String,
    #[serde(default)]
    pub quantity: QuantityModel,
    #[serde(rename = "type")]
    pub position_type: String,
    pub start: CalendarMonthModel,
    pub end: CalendarMonthModel,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct RawProjectModel {
    pub name: String,
    pub start: CalendarMonthModel,
    pub end: CalendarMonthModel,
    #[serde(default)]
    pub funded: FlagModel,
    #[serde(default)]
    pub positions: Option<Vec<RawPositionModel>>,
}

impl TryFrom<RawPositionModel> for Position {
    type Error = TimelineError;

    fn try_from(model: RawPositionModel) -> Result<Self, Self::Error> {
        let quantity: f64 = model.quantity.into();
        if quantity < 0.0 {
            return Err(TimelineError::deserialization(format!(
                "position '{}' has negative quantity {quantity}",
                model.description
            )));
        }
        Ok(Position {
            description: model.description,
            quantity,
            position_type: model.position_type,
            start: CalendarMonth::try_from(model.start)?,
            end: CalendarMonth::try_from(model.end)?,
        })
    }
}

impl TryFrom<RawProjectModel> for Project {
    type Error = TimelineError;

    fn try_from(model: RawProjectModel) -> Result<Self, Self::Error> {
        let positions = model
            .positions
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, p)| Position::try_from(p).map_err(|e| e.within(format!("position {i}"))))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Project {
            name: model.name,
            start: CalendarMonth::try_from(model.start)?,
            end: CalendarMonth::try_from(model.end)?,
            funded: model.funded.into(),
            positions,
        })
    }
}

// Export side.
// ---

#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct SerializedPositionModel<'a> {
    pub description: &'a str,
    pub quantity: f64,
    #[serde(rename = "type")]
    pub position_type: &'a str,
    pub start: String,
    pub end: String,
}

#[derive(Debug, serde_derive::Serialize)]
pub(crate) struct SerializedProjectModel<'a> {
    pub name: &'a str,
    pub start: String,
    pub end: String,
    pub funded: bool,
    pub positions: Vec<SerializedPositionModel<'a>>,
}

impl<'a> From<&'a Position> for SerializedPositionModel<'a> {
    fn from(position: &'a Position) -> Self {
        SerializedPositionModel {
            description: &position.description,
            quantity: position.quantity,
            position_type: &position.position_type,
            start: position.start.to_string(),
            end: position.end.to_string(),
        }
    }
}

impl<'a> From<&'a Project> for SerializedProjectModel<'a> {
    fn from(project: &'a Project) -> Self {
        SerializedProjectModel {
            name: &project.name,
            start: project.start.to_string(),
            end: project.end.to_string(),
            funded: project.funded,
            positions: project.positions.iter().map(Into::into).collect(),
        }
    }
}
