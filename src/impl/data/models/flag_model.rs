use serde::Deserialize;
use serde_json::Value;

/// Boolean flag with truthiness coercion; a missing flag is `false`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FlagModel(pub bool);

impl<'de> Deserialize<'de> for FlagModel {
    fn deserialize<D>(deserializer: D) -> Result<FlagModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let flag = match &value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        };
        Ok(FlagModel(flag))
    }
}

impl From<FlagModel> for bool {
    fn from(model: FlagModel) -> Self {
        model.0
    }
}
