//! Material Tracker - Litematica build progress
//!
//! Imports Litematica material lists into named build projects, stores them
//! in SQLite and tracks how much of each item has been collected.

pub mod error;
pub mod formatters;
pub mod io;
pub mod project;
pub mod store;
pub mod tracker;
pub mod view;

pub use error::{Result, TrackerError};
pub use formatters::{format_material_table, format_project_list, format_units_breakdown};
pub use io::{export_project, import_project, read_material_list, read_material_list_from};
pub use project::BuildProject;
pub use store::{MemoryProjectStore, ProjectRepository, SqliteProjectStore};
pub use tracker::ProjectTracker;
pub use view::{ItemQuery, SortDirection, SortField};
