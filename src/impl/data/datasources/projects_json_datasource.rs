use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    data::models::project_model::{RawProjectModel, SerializedProjectModel},
    entities::Project,
    errors::TimelineError,
};

fn serialized_models(projects: &[Project]) -> Vec<SerializedProjectModel<'_>> {
    projects.iter().map(SerializedProjectModel::from).collect()
}

/// Plain-data form of the projects: every month becomes its canonical
/// `YYYY-MM` string, all other fields pass through.
pub fn serialize(projects: &[Project]) -> Result<Value, TimelineError> {
    serde_json::to_value(serialized_models(projects)).map_err(TimelineError::serialization)
}

/// Rebuilds projects from plain data. All or nothing: the first malformed
/// record fails the whole call.
pub fn deserialize(raw: Value) -> Result<Vec<Project>, TimelineError> {
    let entries = match raw {
        Value::Array(entries) => entries,
        other => {
            return Err(TimelineError::deserialization(format!(
                "expected a list of projects, found {}",
                json_kind(&other)
            )))
        }
    };
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            serde_json::from_value::<RawProjectModel>(entry)
                .map_err(TimelineError::deserialization)
                .and_then(Project::try_from)
                .map_err(|e| e.within(format!("project {i}")))
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
pub(crate) trait ProjectsJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<Project>, TimelineError>;

    fn to_string(&self, projects: &[Project]) -> Result<String, TimelineError>;

    async fn from_file(&self, path: &Path) -> Result<Vec<Project>, TimelineError>;

    async fn to_file(&self, path: &Path, projects: &[Project]) -> Result<(), TimelineError>;
}

pub(crate) struct ProjectsJsonDatasourceImpl;

impl ProjectsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProjectsJsonDatasource for ProjectsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Project>, TimelineError> {
        let raw: Value = serde_json::from_str(s).map_err(TimelineError::deserialization)?;
        deserialize(raw)
    }

    fn to_string(&self, projects: &[Project]) -> Result<String, TimelineError> {
        // Encoded from the models, not a `Value`, so keys keep their declared order.
        serde_json::to_string_pretty(&serialized_models(projects))
            .map_err(TimelineError::serialization)
    }

    async fn from_file(&self, path: &Path) -> Result<Vec<Project>, TimelineError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| TimelineError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        self.from_string(&contents)
    }

    async fn to_file(&self, path: &Path, projects: &[Project]) -> Result<(), TimelineError> {
        let contents = self.to_string(projects)?;
        tokio::fs::write(path, contents)
            .await
            .map_err(|source| TimelineError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}
