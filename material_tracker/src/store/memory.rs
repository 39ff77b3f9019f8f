use super::ProjectRepository;
use crate::error::Result;
use crate::project::BuildProject;

/// Project store kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    projects: Vec<BuildProject>,
    active_project_id: Option<String>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectRepository for MemoryProjectStore {
    fn get(&self, id: &str) -> Result<Option<BuildProject>> {
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }

    fn put(&mut self, project: &BuildProject) -> Result<()> {
        match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project.clone(),
            None => self.projects.push(project.clone()),
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<BuildProject>> {
        Ok(self.projects.clone())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        Ok(self.projects.len() != before)
    }

    fn active_project_id(&self) -> Result<Option<String>> {
        Ok(self.active_project_id.clone())
    }

    fn set_active_project_id(&mut self, id: Option<&str>) -> Result<()> {
        self.active_project_id = id.map(str::to_string);
        Ok(())
    }
}
