//! Error types for material_tracker

use litematica_common::ParseError;
use thiserror::Error;

/// Unified error type for material_tracker operations
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The material list text could not be parsed
    #[error("Could not read material list: {0}")]
    Parse(#[from] ParseError),
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// Failed to encode or decode a project as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// No project is selected
    #[error("No active project; import a material list or select a project first")]
    NoActiveProject,
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
    #[error("Item not found: {0}")]
    ItemNotFound(String),
    /// A project file that cannot be stored as-is
    #[error("Invalid project file: {0}")]
    InvalidProject(String),
}

/// Result alias for material_tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
