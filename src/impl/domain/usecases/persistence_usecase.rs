use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    data::repositories::records_repository_impl::RecordsRepositoryImpl,
    domain::repositories::records_repository::RecordsRepository,
    entities::{Project, RecordStore},
    errors::TimelineError,
};

/// `projects-YYYY-MM-DD.json`.
pub(crate) fn export_file_name(date: NaiveDate) -> String {
    format!("projects-{}.json", date.format("%Y-%m-%d"))
}

#[async_trait]
pub(crate) trait PersistenceUsecase: Send + Sync {
    /// Parses the whole input before touching the store. On error the store
    /// is left exactly as it was.
    fn import_string(&self, store: &mut RecordStore, json: &str) -> Result<(), TimelineError>;

    fn export_string(&self, store: &RecordStore) -> Result<String, TimelineError>;

    async fn import_file(
        &self,
        store: &mut RecordStore,
        path: &Path,
    ) -> Result<(), TimelineError>;

    /// Writes the store into `dir` under the dated export name and returns the
    /// full path.
    async fn export_to_dir(
        &self,
        store: &RecordStore,
        dir: &Path,
        date: NaiveDate,
    ) -> Result<PathBuf, TimelineError>;
}

pub(crate) struct PersistenceUsecaseImpl<
    R1 = RecordsRepositoryImpl, // Default.
> where
    R1: RecordsRepository,
{
    records_repository: R1,
}

impl<R1> PersistenceUsecaseImpl<R1>
where
    R1: RecordsRepository,
{
    fn commit(
        store: &mut RecordStore,
        loaded: Result<Vec<Project>, TimelineError>,
    ) -> Result<(), TimelineError> {
        let projects = loaded.inspect_err(|e| {
            tracing::warn!(error = %e, "import rejected, keeping current projects");
        })?;
        store.replace_all(projects);
        Ok(())
    }
}

#[async_trait]
impl<R1> PersistenceUsecase for PersistenceUsecaseImpl<R1>
where
    R1: RecordsRepository,
{
    fn import_string(&self, store: &mut RecordStore, json: &str) -> Result<(), TimelineError> {
        Self::commit(store, self.records_repository.from_string(json))
    }

    fn export_string(&self, store: &RecordStore) -> Result<String, TimelineError> {
        self.records_repository.to_string(store.projects())
    }

    async fn import_file(
        &self,
        store: &mut RecordStore,
        path: &Path,
    ) -> Result<(), TimelineError> {
        let loaded = self.records_repository.from_file(path).await;
        Self::commit(store, loaded)
    }

    async fn export_to_dir(
        &self,
        store: &RecordStore,
        dir: &Path,
        date: NaiveDate,
    ) -> Result<PathBuf, TimelineError> {
        let path = dir.join(export_file_name(date));
        self.records_repository
            .to_file(&path, store.projects())
            .await?;
        Ok(path)
    }
}

impl PersistenceUsecaseImpl {
    pub(crate) fn new() -> Self {
        PersistenceUsecaseImpl {
            records_repository: RecordsRepositoryImpl::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::{CalendarMonth, ProjectInput};

    use super::*;

    struct FailingRepository;

    #[async_trait]
    impl RecordsRepository for FailingRepository {
        fn from_string(&self, _json: &str) -> Result<Vec<Project>, TimelineError> {
            Err(TimelineError::deserialization("broken"))
        }

        fn to_string(&self, _projects: &[Project]) -> Result<String, TimelineError> {
            Ok(String::new())
        }

        async fn from_file(&self, _path: &Path) -> Result<Vec<Project>, TimelineError> {
            Err(TimelineError::deserialization("broken"))
        }

        async fn to_file(&self, _path: &Path, _projects: &[Project]) -> Result<(), TimelineError> {
            Ok(())
        }
    }

    fn store_with_one_project() -> RecordStore {
        let mut store = RecordStore::new();
        let month = CalendarMonth::new(2024, 1).unwrap();
        store
            .add_project(ProjectInput {
                name: "Keep".into(),
                start: month,
                end: month,
                funded: false,
            })
            .unwrap();
        store
    }

    #[test]
    fn export_file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_file_name(date), "projects-2024-03-07.json");
    }

    #[test]
    fn failed_import_leaves_store_untouched() {
        let usecase = PersistenceUsecaseImpl {
            records_repository: FailingRepository,
        };
        let mut store = store_with_one_project();
        let before = store.clone();
        assert!(usecase.import_string(&mut store, "[]").is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn successful_import_replaces_everything() {
        let usecase = PersistenceUsecaseImpl::new();
        let mut store = store_with_one_project();
        usecase
            .import_string(
                &mut store,
                r#"[{"name": "New", "start": "2025-01", "end": "2025-02"}]"#,
            )
            .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.projects()[0].name, "New");
    }

    #[tokio::test]
    async fn exports_into_directory_with_dated_name() {
        let dir = tempfile::tempdir().unwrap();
        let usecase = PersistenceUsecaseImpl::new();
        let store = store_with_one_project();
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let path = usecase.export_to_dir(&store, dir.path(), date).await.unwrap();
        assert_eq!(path, dir.path().join("projects-2024-12-01.json"));

        let mut reloaded = RecordStore::new();
        usecase.import_file(&mut reloaded, &path).await.unwrap();
        assert_eq!(reloaded, store);
    }
}
