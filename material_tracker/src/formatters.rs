use litematica_common::{format_quantity, MaterialItem, MinecraftUnits, Progress};

use crate::project::{format_timestamp, BuildProject};

/// Renders items as an aligned table with a progress footer.
///
/// Total and Missing above one stack also show the shulker/stack breakdown.
/// `items` is the already filtered and sorted selection; `total_items` and
/// `progress` describe the whole list.
pub fn format_material_table(
    title: &str,
    items: &[&MaterialItem],
    total_items: usize,
    progress: Progress,
) -> String {
    let mut max_id_len = 2; // Minimum width for "ID"
    let mut max_name_len = 4;
    let mut max_total_len = 5;
    let mut max_missing_len = 7;
    let mut max_available_len = 9;
    let mut max_collected_len = 9;

    let rows: Vec<(String, String, String)> = items
        .iter()
        .map(|item| {
            let name = if item.hidden {
                format!("{} (hidden)", item.name)
            } else {
                item.name.clone()
            };
            (name, format_quantity(item.total), format_quantity(item.missing))
        })
        .collect();

    // Calculate maximum lengths for alignment
    for (item, (name, total, missing)) in items.iter().zip(&rows) {
        max_id_len = max_id_len.max(item.id.len());
        max_name_len = max_name_len.max(name.chars().count());
        max_total_len = max_total_len.max(total.len());
        max_missing_len = max_missing_len.max(missing.len());
        max_available_len = max_available_len.max(item.available.to_string().len());
        max_collected_len = max_collected_len.max(item.collected.to_string().len());
    }

    let header = format!(
        "{:<width_id$} | {:<width_name$} | {:<width_total$} | {:<width_missing$} | {:>width_available$} | {:>width_collected$} | {:>4}\n",
        "ID",
        "Item",
        "Total",
        "Missing",
        "Available",
        "Collected",
        "%",
        width_id = max_id_len,
        width_name = max_name_len,
        width_total = max_total_len,
        width_missing = max_missing_len,
        width_available = max_available_len,
        width_collected = max_collected_len,
    );

    let separator = format!(
        "{:-<width_id$}-+-{:-<width_name$}-+-{:-<width_total$}-+-{:-<width_missing$}-+-{:-<width_available$}-+-{:-<width_collected$}-+-{:-<4}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        width_id = max_id_len,
        width_name = max_name_len,
        width_total = max_total_len,
        width_missing = max_missing_len,
        width_available = max_available_len,
        width_collected = max_collected_len,
    );

    let mut output = String::new();
    output.push_str(&format!("{title}\n\n"));
    output.push_str(&header);
    output.push_str(&separator);

    for (item, (name, total, missing)) in items.iter().zip(&rows) {
        output.push_str(&format!(
            "{:<width_id$} | {:<width_name$} | {:<width_total$} | {:<width_missing$} | {:>width_available$} | {:>width_collected$} | {:>3}%\n",
            item.id,
            name,
            total,
            missing,
            item.available,
            item.collected,
            item.progress_percent(),
            width_id = max_id_len,
            width_name = max_name_len,
            width_total = max_total_len,
            width_missing = max_missing_len,
            width_available = max_available_len,
            width_collected = max_collected_len,
        ));
    }

    output.push_str(&separator);
    output.push_str(&format!("Items shown: {} of {total_items}\n", items.len()));
    output.push_str(&format!(
        "Progress: {} of {} collected ({}% complete)\n",
        progress.collected, progress.total, progress.percent
    ));

    output
}

/// One line per project; the active project is marked with `*`.
pub fn format_project_list(projects: &[BuildProject], active_id: Option<&str>) -> String {
    if projects.is_empty() {
        return "No projects yet. Import a material list to get started.\n".to_string();
    }

    let max_id_len = projects.iter().map(|p| p.id.len()).max().unwrap_or(0);
    let max_name_len = projects
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for project in projects {
        let marker = if active_id == Some(project.id.as_str()) {
            '*'
        } else {
            ' '
        };
        let list = &project.material_list;
        let status = match project.completed_at {
            Some(completed_at) => format!("completed {}", format_timestamp(completed_at)),
            None if list.is_all_collected() => "all collected".to_string(),
            None => "in progress".to_string(),
        };

        output.push_str(&format!(
            "{marker} {:<width_id$} | {:<width_name$} | {:>4} items | {:>3}% | created {} | {status}\n",
            project.id,
            project.name,
            list.items.len(),
            list.progress().percent,
            format_timestamp(project.created_at),
            width_id = max_id_len,
            width_name = max_name_len,
        ));
    }
    output
}

/// Multi-line breakdown of a count; unit lines with a zero amount are left out.
pub fn format_units_breakdown(units: &MinecraftUnits) -> String {
    let mut output = format!(
        "{} {} = {}\n",
        units.total,
        if units.total == 1 { "item" } else { "items" },
        units.display_text
    );

    if units.shulkers > 0 {
        output.push_str(&format!("  Shulker boxes: {}\n", units.shulkers));
    }
    if units.stacks > 0 {
        output.push_str(&format!("  Stacks:        {}\n", units.stacks));
    }
    if units.items > 0 {
        output.push_str(&format!("  Items:         {}\n", units.items));
    }
    output
}
