use std::path::Path;

use async_trait::async_trait;

use crate::{entities::Project, errors::TimelineError};

#[async_trait]
pub(crate) trait RecordsRepository: Send + Sync {
    fn from_string(&self, json: &str) -> Result<Vec<Project>, TimelineError>;

    fn to_string(&self, projects: &[Project]) -> Result<String, TimelineError>;

    async fn from_file(&self, path: &Path) -> Result<Vec<Project>, TimelineError>;

    async fn to_file(&self, path: &Path, projects: &[Project]) -> Result<(), TimelineError>;
}
