use std::path::Path;

use async_trait::async_trait;

use crate::{
    data::datasources::projects_json_datasource::{
        ProjectsJsonDatasource, ProjectsJsonDatasourceImpl,
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::Project,
    errors::TimelineError,
};

pub(crate) struct RecordsRepositoryImpl<DS1 = ProjectsJsonDatasourceImpl>
where
    DS1: ProjectsJsonDatasource,
{
    projects_datasource: DS1,
}

#[async_trait]
impl<DS1> RecordsRepository for RecordsRepositoryImpl<DS1>
where
    DS1: ProjectsJsonDatasource,
{
    fn from_string(&self, json: &str) -> Result<Vec<Project>, TimelineError> {
        self.projects_datasource.from_string(json)
    }

    fn to_string(&self, projects: &[Project]) -> Result<String, TimelineError> {
        self.projects_datasource.to_string(projects)
    }

    async fn from_file(&self, path: &Path) -> Result<Vec<Project>, TimelineError> {
        let projects = self.projects_datasource.from_file(path).await?;
        tracing::info!(path = %path.display(), projects = projects.len(), "read projects file");
        Ok(projects)
    }

    async fn to_file(&self, path: &Path, projects: &[Project]) -> Result<(), TimelineError> {
        self.projects_datasource.to_file(path, projects).await?;
        tracing::info!(path = %path.display(), projects = projects.len(), "wrote projects file");
        Ok(())
    }
}

impl RecordsRepositoryImpl {
    pub(crate) fn new() -> Self {
        RecordsRepositoryImpl {
            projects_datasource: ProjectsJsonDatasourceImpl::new(),
        }
    }
}
