//! Filtering and ordering of material list items for display.

use std::cmp::Ordering;

use litematica_common::MaterialItem;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SortField {
    Name,
    Total,
    #[default]
    Missing,
    Available,
    Collected,
}

impl SortField {
    /// Parse a field name as typed on the command line (e.g. "name", "missing")
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" | "item" => Some(SortField::Name),
            "total" => Some(SortField::Total),
            "missing" => Some(SortField::Missing),
            "available" => Some(SortField::Available),
            "collected" => Some(SortField::Collected),
            _ => None,
        }
    }

    fn count(&self, item: &MaterialItem) -> u32 {
        match self {
            SortField::Name => 0,
            SortField::Total => item.total,
            SortField::Missing => item.missing,
            SortField::Available => item.available,
            SortField::Collected => item.collected,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Which items to show and in what order
#[derive(Debug, Clone)]
pub struct ItemQuery {
    /// Case-insensitive substring of the item name
    pub search: Option<String>,
    /// Include items with nothing missing
    pub show_completed: bool,
    pub show_hidden: bool,
    pub sort_field: SortField,
    pub direction: SortDirection,
}

impl Default for ItemQuery {
    fn default() -> Self {
        Self {
            search: None,
            show_completed: true,
            show_hidden: false,
            sort_field: SortField::default(),
            direction: SortDirection::default(),
        }
    }
}

impl ItemQuery {
    pub fn matches(&self, item: &MaterialItem) -> bool {
        let matches_search = self
            .search
            .as_deref()
            .map(|term| item.name.to_lowercase().contains(&term.to_lowercase()))
            .unwrap_or(true);

        matches_search
            && (self.show_completed || !item.is_complete())
            && (self.show_hidden || !item.hidden)
    }

    /// Returns the matching items ordered by the sort field.
    pub fn apply<'a>(&self, items: &'a [MaterialItem]) -> Vec<&'a MaterialItem> {
        let mut selected: Vec<&MaterialItem> =
            items.iter().filter(|item| self.matches(item)).collect();
        // Stable sort: ties keep source order
        selected.sort_by(|a, b| self.compare(a, b));
        selected
    }

    fn compare(&self, a: &MaterialItem, b: &MaterialItem) -> Ordering {
        let ordering = match self.sort_field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            field => field.count(a).cmp(&field.count(b)),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}
