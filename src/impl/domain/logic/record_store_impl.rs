use crate::{
    entities::{
        Position, PositionInput, PositionPatch, Project, ProjectInput, ProjectPatch, RecordStore,
    },
    errors::TimelineError,
};

fn require_text(value: &str, field: &str) -> Result<(), TimelineError> {
    if value.trim().is_empty() {
        return Err(TimelineError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_quantity(quantity: f64) -> Result<(), TimelineError> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(TimelineError::validation(format!(
            "quantity must be a non-negative number, got {quantity}"
        )));
    }
    Ok(())
}

impl RecordStore {
    /// Appends a project with no positions and returns its index. The name is
    /// stored trimmed.
    pub fn add_project(&mut self, input: ProjectInput) -> Result<usize, TimelineError> {
        require_text(&input.name, "project name").inspect_err(|e| {
            tracing::warn!(error = %e, "rejected new project");
        })?;
        self.projects.push(Project {
            name: input.name.trim().to_string(),
            start: input.start,
            end: input.end,
            funded: input.funded,
            positions: Vec::new(),
        });
        let index = self.projects.len() - 1;
        tracing::debug!(index, "added project");
        Ok(index)
    }

    pub fn update_project(
        &mut self,
        index: usize,
        patch: ProjectPatch,
    ) -> Result<(), TimelineError> {
        if let Some(name) = &patch.name {
            require_text(name, "project name")?;
        }
        let project = self.project_mut(index)?;
        let ProjectPatch {
            name,
            start,
            end,
            funded,
        } = patch;
        if let Some(name) = name {
            project.name = name.trim().to_string();
        }
        if let Some(start) = start {
            project.start = start;
        }
        if let Some(end) = end {
            project.end = end;
        }
        if let Some(funded) = funded {
            project.funded = funded;
        }
        tracing::debug!(index, "updated project");
        Ok(())
    }

    /// Removes the project together with all of its positions.
    pub fn delete_project(&mut self, index: usize) -> Result<Project, TimelineError> {
        self.project_mut(index)?;
        let removed = self.projects.remove(index);
        tracing::debug!(index, positions = removed.positions.len(), "deleted project");
        Ok(removed)
    }

    /// Appends a position to the project's list and returns its index.
    pub fn add_position(
        &mut self,
        project_index: usize,
        input: PositionInput,
    ) -> Result<usize, TimelineError> {
        require_text(&input.description, "position description")
            .and_then(|_| require_text(&input.position_type, "position type"))
            .and_then(|_| require_quantity(input.quantity))
            .inspect_err(|e| {
                tracing::warn!(project_index, error = %e, "rejected new position");
            })?;
        let project = self.project_mut(project_index)?;
        project.positions.push(input.into());
        let index = project.positions.len() - 1;
        tracing::debug!(project_index, index, "added position");
        Ok(index)
    }

    pub fn update_position(
        &mut self,
        project_index: usize,
        position_index: usize,
        patch: PositionPatch,
    ) -> Result<(), TimelineError> {
        if let Some(description) = &patch.description {
            require_text(description, "position description")?;
        }
        if let Some(position_type) = &patch.position_type {
            require_text(position_type, "position type")?;
        }
        if let Some(quantity) = patch.quantity {
            require_quantity(quantity)?;
        }
        let position = self.position_mut(project_index, position_index)?;
        let PositionPatch {
            description,
            quantity,
            position_type,
            start,
            end,
        } = patch;
        if let Some(description) = description {
            position.description = description;
        }
        if let Some(quantity) = quantity {
            position.quantity = quantity;
        }
        if let Some(position_type) = position_type {
            position.position_type = position_type;
        }
        if let Some(start) = start {
            position.start = start;
        }
        if let Some(end) = end {
            position.end = end;
        }
        tracing::debug!(project_index, position_index, "updated position");
        Ok(())
    }

    pub fn delete_position(
        &mut self,
        project_index: usize,
        position_index: usize,
    ) -> Result<Position, TimelineError> {
        self.position_mut(project_index, position_index)?;
        let removed = self.projects[project_index].positions.remove(position_index);
        tracing::debug!(project_index, position_index, "deleted position");
        Ok(removed)
    }

    /// Swaps in a whole new set of projects at once (used by import).
    pub fn replace_all(&mut self, projects: Vec<Project>) {
        tracing::debug!(
            previous = self.projects.len(),
            current = projects.len(),
            "replaced record store"
        );
        self.projects = projects;
    }

    fn project_mut(&mut self, index: usize) -> Result<&mut Project, TimelineError> {
        let len = self.projects.len();
        self.projects
            .get_mut(index)
            .ok_or(TimelineError::ProjectIndexOutOfRange { index, len })
    }

    fn position_mut(
        &mut self,
        project_index: usize,
        index: usize,
    ) -> Result<&mut Position, TimelineError> {
        let project = self.project_mut(project_index)?;
        let len = project.positions.len();
        project
            .positions
            .get_mut(index)
            .ok_or(TimelineError::PositionIndexOutOfRange {
                project_index,
                index,
                len,
            })
    }
}
