use litematica_common::MaterialList;
use serde::{Deserialize, Serialize};

/// A named material list being collected for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildProject {
    pub id: String,
    pub name: String,
    pub material_list: MaterialList,
    /// Unix epoch milliseconds
    pub created_at: i64,
    /// Unix epoch milliseconds, `None` while the build is ongoing
    pub completed_at: Option<i64>,
}

impl BuildProject {
    /// Creates a project with a fresh `project-<uuid>` id, stamped with the current time.
    pub fn new(name: impl Into<String>, material_list: MaterialList) -> Self {
        Self {
            id: format!("project-{}", uuid::Uuid::new_v4()),
            name: name.into(),
            material_list,
            created_at: now_millis(),
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Current time as Unix epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Formats epoch milliseconds as a local `YYYY-MM-DD HH:MM` timestamp
pub fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|utc| {
            utc.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|| "-".to_string())
}
