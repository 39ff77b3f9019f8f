//! Multi-project collection tracking.
//!
//! [`ProjectTracker`] owns the "active project" workflow: importing a list
//! creates a project and selects it, and every collection action loads the
//! active project, applies the change and writes the whole project back.

use litematica_common::{parse_material_list, MaterialItem, MaterialList};
use log::{debug, info};

use crate::error::{Result, TrackerError};
use crate::project::{now_millis, BuildProject};
use crate::store::ProjectRepository;

pub struct ProjectTracker<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectTracker<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Parses exported text and stores it as a new, active project.
    ///
    /// The project is named after the list title unless `name` is given.
    pub fn import_text(&mut self, text: &str, name: Option<&str>) -> Result<BuildProject> {
        let list = parse_material_list(text)?;
        let name = name.map(str::to_string).unwrap_or_else(|| list.title.clone());
        let id = self.add_project(&name, list)?;
        self.get_project(&id)
    }

    /// Stores a list as a new project and makes it active. Returns the new id.
    pub fn add_project(&mut self, name: &str, material_list: MaterialList) -> Result<String> {
        let project = BuildProject::new(name, material_list);
        self.repo.put(&project)?;
        self.repo.set_active_project_id(Some(&project.id))?;
        info!(
            "Added project '{}' ({}) with {} items",
            project.name,
            project.id,
            project.material_list.items.len()
        );
        Ok(project.id)
    }

    /// Stores an existing project as-is, e.g. one read from an export file.
    /// The project becomes active.
    pub fn restore_project(&mut self, project: &BuildProject) -> Result<()> {
        self.repo.put(project)?;
        self.repo.set_active_project_id(Some(&project.id))?;
        info!("Restored project '{}' ({})", project.name, project.id);
        Ok(())
    }

    /// Deletes a project. If it was active, the first remaining project takes over.
    pub fn remove_project(&mut self, id: &str) -> Result<()> {
        if !self.repo.delete(id)? {
            return Err(TrackerError::ProjectNotFound(id.to_string()));
        }

        if self.repo.active_project_id()?.as_deref() == Some(id) {
            let next = self.repo.list()?.into_iter().next().map(|p| p.id);
            self.repo.set_active_project_id(next.as_deref())?;
            debug!("Active project is now {next:?}");
        }
        info!("Removed project {id}");
        Ok(())
    }

    pub fn set_active_project(&mut self, id: &str) -> Result<BuildProject> {
        let project = self.get_project(id)?;
        self.repo.set_active_project_id(Some(id))?;
        Ok(project)
    }

    /// Deselects the active project without deleting anything
    pub fn clear_active(&mut self) -> Result<()> {
        self.repo.set_active_project_id(None)
    }

    pub fn complete_project(&mut self, id: &str) -> Result<BuildProject> {
        self.update_project(id, |project| project.completed_at = Some(now_millis()))
    }

    pub fn rename_project(&mut self, id: &str, name: &str) -> Result<BuildProject> {
        self.update_project(id, |project| project.name = name.to_string())
    }

    pub fn get_project(&self, id: &str) -> Result<BuildProject> {
        self.repo
            .get(id)?
            .ok_or_else(|| TrackerError::ProjectNotFound(id.to_string()))
    }

    pub fn projects(&self) -> Result<Vec<BuildProject>> {
        self.repo.list()
    }

    pub fn active_project_id(&self) -> Result<Option<String>> {
        self.repo.active_project_id()
    }

    /// The active project, or `None` if nothing is selected or the selection is stale
    pub fn active_project(&self) -> Result<Option<BuildProject>> {
        match self.repo.active_project_id()? {
            Some(id) => self.repo.get(&id),
            None => Ok(None),
        }
    }

    pub fn collect_item(&mut self, item_id: &str, amount: Option<u32>) -> Result<MaterialItem> {
        self.update_active_item(item_id, |list| list.collect_item(item_id, amount).cloned())
    }

    pub fn reset_item(&mut self, item_id: &str) -> Result<MaterialItem> {
        self.update_active_item(item_id, |list| list.reset_item(item_id).cloned())
    }

    pub fn set_item_hidden(&mut self, item_id: &str, hidden: bool) -> Result<MaterialItem> {
        self.update_active_item(item_id, |list| list.set_hidden(item_id, hidden).cloned())
    }

    pub fn collect_all(&mut self) -> Result<BuildProject> {
        self.update_active(|list| list.collect_all())
    }

    pub fn reset_all(&mut self) -> Result<BuildProject> {
        self.update_active(|list| list.reset_all())
    }

    /// True when the active project has items and all of them are collected
    pub fn is_all_collected(&self) -> Result<bool> {
        Ok(self
            .active_project()?
            .is_some_and(|project| project.material_list.is_all_collected()))
    }

    fn update_project<F>(&mut self, id: &str, update: F) -> Result<BuildProject>
    where
        F: FnOnce(&mut BuildProject),
    {
        let mut project = self.get_project(id)?;
        update(&mut project);
        self.repo.put(&project)?;
        Ok(project)
    }

    fn require_active(&self) -> Result<BuildProject> {
        self.active_project()?.ok_or(TrackerError::NoActiveProject)
    }

    fn update_active<F>(&mut self, update: F) -> Result<BuildProject>
    where
        F: FnOnce(&mut MaterialList),
    {
        let mut project = self.require_active()?;
        update(&mut project.material_list);
        self.repo.put(&project)?;
        Ok(project)
    }

    fn update_active_item<F>(&mut self, item_id: &str, update: F) -> Result<MaterialItem>
    where
        F: FnOnce(&mut MaterialList) -> Option<MaterialItem>,
    {
        let mut project = self.require_active()?;
        let item = update(&mut project.material_list)
            .ok_or_else(|| TrackerError::ItemNotFound(item_id.to_string()))?;
        self.repo.put(&project)?;
        Ok(item)
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
