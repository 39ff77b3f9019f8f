//! Persistence for build projects.
//!
//! The tracker only talks to [`ProjectRepository`]; the SQLite store is the
//! one used by the binary, the in-memory store backs tests and embedding.

mod memory;
mod sqlite;

pub use memory::MemoryProjectStore;
pub use sqlite::SqliteProjectStore;

use crate::error::Result;
use crate::project::BuildProject;

/// Keyed storage of build projects plus the id of the active one.
pub trait ProjectRepository {
    fn get(&self, id: &str) -> Result<Option<BuildProject>>;

    /// Inserts or fully replaces a project, keeping its original list position.
    fn put(&mut self, project: &BuildProject) -> Result<()>;

    /// All projects in the order they were first stored
    fn list(&self) -> Result<Vec<BuildProject>>;

    /// Returns true if a project was removed
    fn delete(&mut self, id: &str) -> Result<bool>;

    fn active_project_id(&self) -> Result<Option<String>>;

    fn set_active_project_id(&mut self, id: Option<&str>) -> Result<()>;
}
