use std::str::FromStr as _;

use serde::Deserialize;
use serde_json::Value;

use crate::{entities::CalendarMonth, errors::TimelineError};

use super::quantity_model::coerce_number;

/// The encodings a month may arrive in. JSON input only ever produces the
/// first two; `Normalized` covers records assembled in code.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CalendarMonthModel {
    /// `"YYYY-MM"`.
    Canonical(String),
    /// `{"year": .., "month": ..}`, fields as numbers or numeric strings.
    Structured { year: Value, month: Value },
    Normalized(CalendarMonth),
}

impl<'de> Deserialize<'de> for CalendarMonthModel {
    fn deserialize<D>(deserializer: D) -> Result<CalendarMonthModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(CalendarMonthModel::Canonical(s)),
            Value::Object(mut fields)
                if fields.contains_key("year") && fields.contains_key("month") =>
            {
                Ok(CalendarMonthModel::Structured {
                    year: fields.remove("year").unwrap_or_default(),
                    month: fields.remove("month").unwrap_or_default(),
                })
            }
            other => Err(serde::de::Error::custom(format!(
                "invalid calendar month: {other}"
            ))),
        }
    }
}

fn integral(value: &Value, field: &str) -> Result<i64, TimelineError> {
    coerce_number(value)
        .filter(|n| n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64)
        .map(|n| n as i64)
        .ok_or_else(|| TimelineError::InvalidFormat {
            value: format!("{field}: {value}"),
        })
}

impl TryFrom<CalendarMonthModel> for CalendarMonth {
    type Error = TimelineError;

    fn try_from(model: CalendarMonthModel) -> Result<Self, Self::Error> {
        match model {
            CalendarMonthModel::Canonical(s) => CalendarMonth::from_str(&s),
            CalendarMonthModel::Structured { year, month } => {
                let y = integral(&year, "year")?;
                let y = i32::try_from(y).map_err(|_| TimelineError::InvalidFormat {
                    value: format!("year: {year}"),
                })?;
                CalendarMonth::new(y, integral(&month, "month")?)
            }
            CalendarMonthModel::Normalized(m) => Ok(m),
        }
    }
}

impl From<CalendarMonth> for CalendarMonthModel {
    fn from(month: CalendarMonth) -> Self {
        CalendarMonthModel::Normalized(month)
    }
}
