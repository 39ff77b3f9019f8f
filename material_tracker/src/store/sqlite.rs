//! SQLite storage for build projects.
//!
//! Uses parameterized queries exclusively (no SQL string concatenation).
//! Every write runs in a transaction, so a project and its items are always
//! replaced together.

use std::path::Path;

use litematica_common::{MaterialItem, MaterialList};
use rusqlite::{params, Connection, OptionalExtension, Transaction};

use super::ProjectRepository;
use crate::error::Result;
use crate::project::BuildProject;

const ACTIVE_PROJECT_KEY: &str = "active_project_id";

/// Project store backed by a SQLite database file
pub struct SqliteProjectStore {
    conn: Connection,
}

impl SqliteProjectStore {
    /// Opens (or creates) the database at `path` and initialises the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                log::info!("Created directory: {}", parent.display());
            }
        }
        log::info!("Project DB: {}", path.display());
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(Self { conn })
    }
}

/// Creates the project tables if they don't exist:
/// - `projects`: one row per build project
/// - `material_items`: the items of each project, ordered by `position`
/// - `app_state`: small key/value settings such as the active project
fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS projects (
            id           TEXT NOT NULL PRIMARY KEY,
            name         TEXT NOT NULL,
            title        TEXT NOT NULL,
            created_at   INTEGER NOT NULL,
            completed_at INTEGER
        );

        CREATE TABLE IF NOT EXISTS material_items (
            project_id TEXT NOT NULL,
            item_id    TEXT NOT NULL,
            position   INTEGER NOT NULL,
            name       TEXT NOT NULL,
            total      INTEGER NOT NULL,
            missing    INTEGER NOT NULL,
            available  INTEGER NOT NULL,
            collected  INTEGER NOT NULL,
            hidden     INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (project_id, item_id)
        );

        CREATE INDEX IF NOT EXISTS idx_material_items_project ON material_items(project_id, position);

        CREATE TABLE IF NOT EXISTS app_state (
            key   TEXT NOT NULL PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )?;

    log::debug!("Project schema initialized");
    Ok(())
}

fn put_project_tx(tx: &Transaction<'_>, project: &BuildProject) -> rusqlite::Result<()> {
    // Upsert instead of REPLACE so the rowid, and with it the list order, survives
    tx.execute(
        "INSERT INTO projects (id, name, title, created_at, completed_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
             name         = excluded.name,
             title        = excluded.title,
             created_at   = excluded.created_at,
             completed_at = excluded.completed_at",
        params![
            project.id,
            project.name,
            project.material_list.title,
            project.created_at,
            project.completed_at,
        ],
    )?;

    tx.execute(
        "DELETE FROM material_items WHERE project_id = ?1",
        params![project.id],
    )?;

    let mut stmt = tx.prepare_cached(
        "INSERT INTO material_items
         (project_id, item_id, position, name, total, missing, available, collected, hidden)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )?;
    for (position, item) in project.material_list.items.iter().enumerate() {
        stmt.execute(params![
            project.id,
            item.id,
            position as i64,
            item.name,
            item.total,
            item.missing,
            item.available,
            item.collected,
            item.hidden,
        ])?;
    }
    Ok(())
}

fn load_items(conn: &Connection, project_id: &str) -> rusqlite::Result<Vec<MaterialItem>> {
    let mut stmt = conn.prepare_cached(
        "SELECT item_id, name, total, missing, available, collected, hidden
         FROM material_items
         WHERE project_id = ?1
         ORDER BY position ASC",
    )?;

    let items: rusqlite::Result<Vec<MaterialItem>> = stmt
        .query_map(params![project_id], |row| {
            Ok(MaterialItem {
                id: row.get(0)?,
                name: row.get(1)?,
                total: row.get(2)?,
                missing: row.get(3)?,
                available: row.get(4)?,
                collected: row.get(5)?,
                hidden: row.get(6)?,
            })
        })?
        .collect();
    items
}

/// Project columns without the items, as read from `projects`
struct ProjectRow {
    id: String,
    name: String,
    title: String,
    created_at: i64,
    completed_at: Option<i64>,
}

impl ProjectRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            title: row.get(2)?,
            created_at: row.get(3)?,
            completed_at: row.get(4)?,
        })
    }

    fn into_project(self, conn: &Connection) -> rusqlite::Result<BuildProject> {
        let items = load_items(conn, &self.id)?;
        Ok(BuildProject {
            id: self.id,
            name: self.name,
            material_list: MaterialList {
                title: self.title,
                items,
            },
            created_at: self.created_at,
            completed_at: self.completed_at,
        })
    }
}

impl ProjectRepository for SqliteProjectStore {
    fn get(&self, id: &str) -> Result<Option<BuildProject>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, title, created_at, completed_at FROM projects WHERE id = ?1",
                params![id],
                ProjectRow::from_row,
            )
            .optional()?;

        match row {
            Some(row) => Ok(Some(row.into_project(&self.conn)?)),
            None => Ok(None),
        }
    }

    fn put(&mut self, project: &BuildProject) -> Result<()> {
        let tx = self.conn.transaction()?;
        put_project_tx(&tx, project)?;
        tx.commit()?;
        log::debug!(
            "Stored project '{}' ({} items)",
            project.name,
            project.material_list.items.len()
        );
        Ok(())
    }

    fn list(&self) -> Result<Vec<BuildProject>> {
        let rows: Vec<ProjectRow> = self
            .conn
            .prepare(
                "SELECT id, name, title, created_at, completed_at
                 FROM projects
                 ORDER BY rowid ASC",
            )?
            .query_map([], ProjectRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut projects = Vec::with_capacity(rows.len());
        for row in rows {
            projects.push(row.into_project(&self.conn)?);
        }
        Ok(projects)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM material_items WHERE project_id = ?1",
            params![id],
        )?;
        let removed = tx.execute("DELETE FROM projects WHERE id = ?1", params![id])?;
        tx.commit()?;
        if removed > 0 {
            log::info!("Deleted project {id}");
        }
        Ok(removed > 0)
    }

    fn active_project_id(&self) -> Result<Option<String>> {
        let id = self
            .conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![ACTIVE_PROJECT_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    fn set_active_project_id(&mut self, id: Option<&str>) -> Result<()> {
        match id {
            Some(id) => self.conn.execute(
                "INSERT INTO app_state (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![ACTIVE_PROJECT_KEY, id],
            )?,
            None => self.conn.execute(
                "DELETE FROM app_state WHERE key = ?1",
                params![ACTIVE_PROJECT_KEY],
            )?,
        };
        Ok(())
    }
}
