use serde::Deserialize;
use serde_json::Value;

/// Loose numeric coercion for imported values: numbers pass through, numeric
/// strings are parsed (blank counts as 0), booleans count as 1/0. Anything
/// else, or a non-finite result, is not a number.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) if s.trim().is_empty() => 0.0,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}

/// Position quantity as found in an import file. Unparsable values fall
/// back to 0.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct QuantityModel(pub f64);

impl<'de> Deserialize<'de> for QuantityModel {
    fn deserialize<D>(deserializer: D) -> Result<QuantityModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(QuantityModel(coerce_number(&value).unwrap_or(0.0)))
    }
}

impl From<QuantityModel> for f64 {
    fn from(model: QuantityModel) -> Self {
        model.0
    }
}
