use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::{
    domain::usecases::persistence_usecase::{
        export_file_name, PersistenceUsecase as _, PersistenceUsecaseImpl,
    },
    entities::{
        CalendarMonth, Position, PositionInput, PositionPatch, Project, ProjectInput,
        ProjectPatch, RecordStore, Timeline, TimelineOptions,
    },
    errors::TimelineError,
    presentation::{
        timeline_csv_exporter::TimelineCsvExporter, timeline_table_printer::TimelineTablePrinter,
    },
};

/// Owns the record store and is the single entry point for editing,
/// aggregating, importing and exporting staffing plans.
pub struct TimelineEditor {
    store: RecordStore,
    persistence_usecase: PersistenceUsecaseImpl,
    table_printer: TimelineTablePrinter,
    csv_exporter: TimelineCsvExporter,
}

impl Default for TimelineEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineEditor {
    pub fn new() -> Self {
        Self::from_store(RecordStore::new())
    }

    pub fn from_store(store: RecordStore) -> Self {
        Self {
            store,
            persistence_usecase: PersistenceUsecaseImpl::new(),
            table_printer: TimelineTablePrinter::new(),
            csv_exporter: TimelineCsvExporter::new(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn projects(&self) -> &[Project] {
        self.store.projects()
    }

    // Record editing.
    // ---

    pub fn add_project(&mut self, input: ProjectInput) -> Result<usize, TimelineError> {
        self.store.add_project(input)
    }

    pub fn update_project(
        &mut self,
        index: usize,
        patch: ProjectPatch,
    ) -> Result<(), TimelineError> {
        self.store.update_project(index, patch)
    }

    pub fn delete_project(&mut self, index: usize) -> Result<Project, TimelineError> {
        self.store.delete_project(index)
    }

    pub fn add_position(
        &mut self,
        project_index: usize,
        input: PositionInput,
    ) -> Result<usize, TimelineError> {
        self.store.add_position(project_index, input)
    }

    pub fn update_position(
        &mut self,
        project_index: usize,
        position_index: usize,
        patch: PositionPatch,
    ) -> Result<(), TimelineError> {
        self.store
            .update_position(project_index, position_index, patch)
    }

    pub fn delete_position(
        &mut self,
        project_index: usize,
        position_index: usize,
    ) -> Result<Position, TimelineError> {
        self.store.delete_position(project_index, position_index)
    }

    /// Pre-filled form for a new project starting in `today`.
    pub fn new_project_input(&self, today: CalendarMonth) -> ProjectInput {
        ProjectInput::default_for(today)
    }

    /// Pre-filled form for a new position of the given project.
    pub fn new_position_input(&self, project_index: usize) -> Result<PositionInput, TimelineError> {
        self.store
            .project(project_index)
            .map(PositionInput::default_for)
            .ok_or(TimelineError::ProjectIndexOutOfRange {
                index: project_index,
                len: self.store.len(),
            })
    }

    // Aggregation.
    // ---

    pub fn timeline(&self, options: TimelineOptions, today: CalendarMonth) -> Timeline {
        self.store.timeline(options, today)
    }

    /// Same as [`Self::timeline`], with "today" taken from the local clock.
    pub fn timeline_now(&self, options: TimelineOptions) -> Timeline {
        self.timeline(options, CalendarMonth::current())
    }

    pub fn render_table(&self, options: TimelineOptions, today: CalendarMonth) -> String {
        let timeline = self.timeline(options, today);
        self.table_printer
            .print_table(self.store.projects(), &timeline)
    }

    pub fn render_csv(
        &self,
        options: TimelineOptions,
        today: CalendarMonth,
    ) -> Result<String, TimelineError> {
        self.csv_exporter.export(&self.timeline(options, today))
    }

    // Import / export.
    // ---

    /// Replaces every project with the ones in `json`. Nothing changes if any
    /// record fails to load.
    pub fn import_from_string(&mut self, json: &str) -> Result<(), TimelineError> {
        self.persistence_usecase
            .import_string(&mut self.store, json)
    }

    pub async fn import_from_file<P>(&mut self, path: P) -> Result<(), TimelineError>
    where
        P: AsRef<Path> + Send,
    {
        self.persistence_usecase
            .import_file(&mut self.store, path.as_ref())
            .await
    }

    /// Pretty-printed JSON of the whole store.
    pub fn export_to_string(&self) -> Result<String, TimelineError> {
        self.persistence_usecase.export_string(&self.store)
    }

    /// Writes `projects-<date>.json` into `dir` and returns its path.
    pub async fn export_to_dir<P>(&self, dir: P, date: NaiveDate) -> Result<PathBuf, TimelineError>
    where
        P: AsRef<Path> + Send,
    {
        self.persistence_usecase
            .export_to_dir(&self.store, dir.as_ref(), date)
            .await
    }

    pub fn export_file_name(date: NaiveDate) -> String {
        export_file_name(date)
    }
}
