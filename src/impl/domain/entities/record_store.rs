use super::project::Project;

/// Ordered list of projects; the unit of persistence. Projects and their
/// positions are addressed by their current index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    pub(crate) projects: Vec<Project>,
}

// --

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn into_projects(self) -> Vec<Project> {
        self.projects
    }
}
