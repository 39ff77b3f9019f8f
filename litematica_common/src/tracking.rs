//! Collection tracking on a parsed material list.
//!
//! Every mutation recomputes `missing` from `total`, `available` and
//! `collected`; callers never set it directly.

use log::debug;

use crate::models::{MaterialItem, MaterialList};

/// Summed collection progress over a list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub total: u64,
    pub collected: u64,
    /// Rounded to whole percent, 0 when nothing is required
    pub percent: u32,
}

pub(crate) fn percent(collected: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    // Round half up in integer arithmetic
    ((collected * 200 + total) / (total * 2)) as u32
}

impl MaterialItem {
    fn collect(&mut self, amount: u32) {
        self.collected = self.collected.saturating_add(amount).min(self.total);
        self.recompute_missing();
    }

    fn recompute_missing(&mut self) {
        self.missing = self
            .total
            .saturating_sub(self.collected)
            .saturating_sub(self.available);
    }

    fn reset(&mut self) {
        self.collected = 0;
        self.missing = self.baseline_missing();
    }
}

impl MaterialList {
    /// Marks `amount` more of an item as collected, or everything still missing
    /// when no amount is given. Returns the updated item, `None` for unknown ids.
    pub fn collect_item(&mut self, id: &str, amount: Option<u32>) -> Option<&MaterialItem> {
        let item = self.item_mut(id)?;
        let amount = amount.unwrap_or(item.missing);
        item.collect(amount);
        debug!(
            "Collected {amount} of '{}': {}/{}, {} missing",
            item.name, item.collected, item.total, item.missing
        );
        Some(&*item)
    }

    /// Clears the collected amount of one item
    pub fn reset_item(&mut self, id: &str) -> Option<&MaterialItem> {
        let item = self.item_mut(id)?;
        item.reset();
        Some(&*item)
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) -> Option<&MaterialItem> {
        let item = self.item_mut(id)?;
        item.hidden = hidden;
        Some(&*item)
    }

    pub fn collect_all(&mut self) {
        for item in &mut self.items {
            item.collected = item.total;
            item.missing = 0;
        }
    }

    /// Clears all collected amounts and unhides every item
    pub fn reset_all(&mut self) {
        for item in &mut self.items {
            item.reset();
            item.hidden = false;
        }
    }

    /// Caps `collected` at `total` and recomputes `missing` for every item.
    ///
    /// Used on lists that did not come from the parser, e.g. hand-edited
    /// project files. Returns the number of items that changed.
    pub fn normalize(&mut self) -> usize {
        let mut changed = 0;
        for item in &mut self.items {
            let before = (item.collected, item.missing);
            item.collected = item.collected.min(item.total);
            item.recompute_missing();
            if (item.collected, item.missing) != before {
                debug!(
                    "Normalized '{}': collected {}, missing {}",
                    item.name, item.collected, item.missing
                );
                changed += 1;
            }
        }
        changed
    }

    /// True when the list has items and every one of them is fully collected
    pub fn is_all_collected(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(MaterialItem::is_collected)
    }

    pub fn progress(&self) -> Progress {
        let (total, collected) = self.items.iter().fold((0u64, 0u64), |(total, collected), item| {
            (total + u64::from(item.total), collected + u64::from(item.collected))
        });
        Progress {
            total,
            collected,
            percent: percent(collected, total),
        }
    }
}

#[cfg(test)]
#[path = "tracking_tests.rs"]
mod tests;
