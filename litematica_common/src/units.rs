//! Conversion of raw item counts into Minecraft packaging units.

use std::fmt;

pub const ITEMS_PER_STACK: u32 = 64;
pub const STACKS_PER_SHULKER: u32 = 27;
pub const ITEMS_PER_SHULKER: u32 = ITEMS_PER_STACK * STACKS_PER_SHULKER;

/// A count broken down into shulker boxes, stacks and loose items.
///
/// Always derived from a count on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinecraftUnits {
    pub shulkers: u32,
    pub stacks: u32,
    pub items: u32,
    /// The count this breakdown was computed from
    pub total: u32,
    /// e.g. "2 shulkers, 1 stack, 1 item"; a zero count reads "0 items"
    pub display_text: String,
}

impl fmt::Display for MinecraftUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text)
    }
}

pub fn convert_to_minecraft_units(count: u32) -> MinecraftUnits {
    let shulkers = count / ITEMS_PER_SHULKER;
    let remainder = count % ITEMS_PER_SHULKER;
    let stacks = remainder / ITEMS_PER_STACK;
    let items = remainder % ITEMS_PER_STACK;

    let mut parts = Vec::with_capacity(3);
    if shulkers > 0 {
        parts.push(pluralize(shulkers, "shulker"));
    }
    if stacks > 0 {
        parts.push(pluralize(stacks, "stack"));
    }
    if items > 0 || (shulkers == 0 && stacks == 0) {
        parts.push(pluralize(items, "item"));
    }

    MinecraftUnits {
        shulkers,
        stacks,
        items,
        total: count,
        display_text: parts.join(", "),
    }
}

/// Renders a quantity for listings.
///
/// Counts up to one stack are shown as the bare number; larger counts get the
/// unit breakdown appended, e.g. `"130 (2 stacks, 2 items)"`.
pub fn format_quantity(count: u32) -> String {
    if count <= ITEMS_PER_STACK {
        count.to_string()
    } else {
        format!("{count} ({})", convert_to_minecraft_units(count))
    }
}

fn pluralize(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
#[path = "units_tests.rs"]
mod tests;
