//! Material Tracker - Litematica build progress
//!
//! Imports material list exports into build projects stored in SQLite and
//! tracks collection progress from the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use litematica_common::convert_to_minecraft_units;
use material_tracker::{
    export_project, format_material_table, format_project_list, format_units_breakdown,
    import_project, io::read_input_text, ItemQuery, ProjectTracker, SortDirection,
    SortField, SqliteProjectStore, TrackerError,
};

/// Track collection progress of Litematica material lists
#[derive(Parser, Debug)]
#[command(name = "material-tracker")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    #[arg(short, long, env = "MATERIAL_TRACKER_DB", default_value_t = default_db_path())]
    database: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Project(ProjectCommand),
    /// Convert an item count into shulker boxes, stacks and items
    Units {
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },
}

/// Commands that work on the project database
#[derive(Subcommand, Debug)]
enum ProjectCommand {
    /// Import a material list export (.txt) as a new active project
    Import {
        /// Export file; reads stdin when omitted or "-"
        file: Option<PathBuf>,
        /// Project name (default: the placement name from the list)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List all projects
    Projects,
    /// Make a project the active one
    Use { project: String },
    /// Show the items of the active (or given) project
    Show {
        #[arg(short, long)]
        project: Option<String>,
        /// Only items whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Sort by: name, total, missing, available, collected
        #[arg(long, default_value = "missing", value_parser = parse_sort_field)]
        sort: SortField,
        /// Sort ascending instead of descending
        #[arg(long, default_value_t = false)]
        asc: bool,
        /// Leave out items with nothing missing
        #[arg(long, default_value_t = false)]
        hide_completed: bool,
        /// Include hidden items
        #[arg(long, default_value_t = false)]
        show_hidden: bool,
    },
    /// Mark an item of the active project as collected
    Collect {
        item: String,
        /// Amount to add (default: everything still missing)
        #[arg(short, long)]
        amount: Option<u32>,
    },
    /// Clear the collected amount of an item
    Reset { item: String },
    /// Mark every item of the active project as collected
    CollectAll,
    /// Clear all progress of the active project and unhide all items
    ResetAll,
    /// Hide an item from listings
    Hide { item: String },
    /// Show a hidden item again
    Unhide { item: String },
    /// Rename a project
    Rename { project: String, name: String },
    /// Mark a project as completed
    Complete { project: String },
    /// Delete a project
    Remove { project: String },
    /// Write a project to a JSON file
    Export { project: String, file: PathBuf },
    /// Restore a project from a JSON file written by `export`
    ImportJson { file: PathBuf },
}

/// Returns the default database path: ~/.local/share/material_tracker/projects.db
fn default_db_path() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("material_tracker")
        .join("projects.db")
        .to_string_lossy()
        .to_string()
}

fn parse_sort_field(s: &str) -> Result<SortField, String> {
    SortField::parse(s).ok_or_else(|| {
        format!("unknown sort field '{s}' (expected name, total, missing, available or collected)")
    })
}

/// Negative counts are shown as zero
fn print_units(count: i64) {
    let count = u32::try_from(count.max(0)).unwrap_or(u32::MAX);
    print!("{}", format_units_breakdown(&convert_to_minecraft_units(count)));
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), TrackerError> {
    match args.command {
        // Unit conversion needs no database
        Command::Units { count } => {
            print_units(count);
            Ok(())
        }
        Command::Project(command) => {
            let store = SqliteProjectStore::open(&args.database)?;
            run_command(&mut ProjectTracker::new(store), command)
        }
    }
}

fn run_command(
    tracker: &mut ProjectTracker<SqliteProjectStore>,
    command: ProjectCommand,
) -> Result<(), TrackerError> {
    match command {
        ProjectCommand::Import { file, name } => {
            let text = read_input_text(file.as_deref())?;
            let project = tracker.import_text(&text, name.as_deref())?;
            println!(
                "Imported '{}' with {} items as {}",
                project.name,
                project.material_list.items.len(),
                project.id
            );
        }
        ProjectCommand::Projects => {
            let active = tracker.active_project_id()?;
            print!(
                "{}",
                format_project_list(&tracker.projects()?, active.as_deref())
            );
        }
        ProjectCommand::Use { project } => {
            let project = tracker.set_active_project(&project)?;
            println!("Active project: {} ({})", project.name, project.id);
        }
        ProjectCommand::Show {
            project,
            search,
            sort,
            asc,
            hide_completed,
            show_hidden,
        } => {
            let project = match project {
                Some(id) => tracker.get_project(&id)?,
                None => tracker
                    .active_project()?
                    .ok_or(TrackerError::NoActiveProject)?,
            };
            let query = ItemQuery {
                search,
                show_completed: !hide_completed,
                show_hidden,
                sort_field: sort,
                direction: if asc {
                    SortDirection::Ascending
                } else {
                    SortDirection::Descending
                },
            };
            let list = &project.material_list;
            let items = query.apply(&list.items);
            print!(
                "{}",
                format_material_table(&project.name, &items, list.items.len(), list.progress())
            );
            if list.is_all_collected() {
                println!("All items collected!");
            }
        }
        ProjectCommand::Collect { item, amount } => {
            let item = tracker.collect_item(&item, amount)?;
            println!(
                "{}: {}/{} collected, {} missing",
                item.name, item.collected, item.total, item.missing
            );
            if tracker.is_all_collected()? {
                println!("All items collected!");
            }
        }
        ProjectCommand::Reset { item } => {
            let item = tracker.reset_item(&item)?;
            println!("{}: reset, {} missing", item.name, item.missing);
        }
        ProjectCommand::CollectAll => {
            let project = tracker.collect_all()?;
            println!("All items of '{}' marked as collected", project.name);
        }
        ProjectCommand::ResetAll => {
            let project = tracker.reset_all()?;
            println!("Progress of '{}' reset", project.name);
        }
        ProjectCommand::Hide { item } => {
            let item = tracker.set_item_hidden(&item, true)?;
            println!("{} hidden", item.name);
        }
        ProjectCommand::Unhide { item } => {
            let item = tracker.set_item_hidden(&item, false)?;
            println!("{} visible", item.name);
        }
        ProjectCommand::Rename { project, name } => {
            let project = tracker.rename_project(&project, &name)?;
            println!("Renamed {} to '{}'", project.id, project.name);
        }
        ProjectCommand::Complete { project } => {
            let project = tracker.complete_project(&project)?;
            println!("Project '{}' completed", project.name);
        }
        ProjectCommand::Remove { project } => {
            tracker.remove_project(&project)?;
            println!("Removed {project}");
        }
        ProjectCommand::Export { project, file } => {
            let project = tracker.get_project(&project)?;
            export_project(&file, &project)?;
            println!("Exported '{}' to {}", project.name, file.display());
        }
        ProjectCommand::ImportJson { file } => {
            let project = import_project(&file)?;
            tracker.restore_project(&project)?;
            println!("Restored '{}' as {}", project.name, project.id);
        }
    }

    Ok(())
}
