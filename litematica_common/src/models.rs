use serde::{Deserialize, Serialize};

/// One row of a material list, plus the in-app collection state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialItem {
    /// `item-<line>`; unique within one list only
    pub id: String,
    pub name: String,
    pub total: u32,
    pub missing: u32,
    pub available: u32,
    /// Never exceeds `total`
    pub collected: u32,
    #[serde(default)]
    pub hidden: bool,
}

impl MaterialItem {
    /// Returns true once everything required has been collected
    pub fn is_collected(&self) -> bool {
        self.collected >= self.total
    }

    /// Returns true if nothing is missing anymore (collected or available)
    pub fn is_complete(&self) -> bool {
        self.missing == 0
    }

    /// Collected share of `total`, rounded to whole percent. 0 for an empty total.
    pub fn progress_percent(&self) -> u32 {
        crate::tracking::percent(u64::from(self.collected), u64::from(self.total))
    }

    /// Missing amount when nothing has been collected in-app yet
    pub(crate) fn baseline_missing(&self) -> u32 {
        self.total.saturating_sub(self.available)
    }
}

/// A parsed material list: the placement title and its items in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialList {
    pub title: String,
    pub items: Vec<MaterialItem>,
}

impl MaterialList {
    /// Title used when the export does not carry a placement name
    pub const DEFAULT_TITLE: &'static str = "Material List";

    pub fn item(&self, id: &str) -> Option<&MaterialItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut MaterialItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
