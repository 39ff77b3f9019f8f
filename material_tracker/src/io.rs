use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use litematica_common::{parse_material_list, MaterialList};

use crate::error::{Result, TrackerError};
use crate::project::BuildProject;

/// Reads a Litematica material list export (`.txt`) from disk and parses it.
pub fn read_material_list<P: AsRef<Path>>(path: P) -> Result<MaterialList> {
    let path = path.as_ref();
    log::info!("Reading material list from {}", path.display());
    read_material_list_from(File::open(path)?)
}

/// Parses a material list from any reader, e.g. pasted text on stdin.
pub fn read_material_list_from<R: Read>(mut reader: R) -> Result<MaterialList> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    log::debug!("Read {} bytes of material list text", text.len());
    Ok(parse_material_list(&text)?)
}

/// Reads raw export text from the file at `path`, or from stdin when no path
/// or `-` is given.
pub fn read_input_text(path: Option<&Path>) -> Result<String> {
    let mut text = String::new();
    match path {
        Some(path) if path != Path::new("-") => {
            log::info!("Reading material list from {}", path.display());
            File::open(path)?.read_to_string(&mut text)?;
        }
        _ => {
            log::info!("Reading material list from stdin");
            io::stdin().lock().read_to_string(&mut text)?;
        }
    }
    Ok(text)
}

/// Writes a project as pretty-printed JSON.
pub fn export_project<P: AsRef<Path>>(path: P, project: &BuildProject) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(&mut writer, project)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    log::info!(
        "Exported project '{}' to {}",
        project.name,
        path.as_ref().display()
    );
    Ok(())
}

/// Reads a project previously written by [`export_project`].
///
/// Item counts are normalized so `collected` never exceeds `total`.
///
/// # Errors
/// [`TrackerError::InvalidProject`] if two items share an id.
pub fn import_project<P: AsRef<Path>>(path: P) -> Result<BuildProject> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut project: BuildProject = serde_json::from_reader(reader)?;

    let mut seen = HashSet::new();
    if let Some(item) = project
        .material_list
        .items
        .iter()
        .find(|item| !seen.insert(item.id.as_str()))
    {
        return Err(TrackerError::InvalidProject(format!(
            "duplicate item id '{}'",
            item.id
        )));
    }

    let adjusted = project.material_list.normalize();
    if adjusted > 0 {
        log::warn!(
            "Adjusted counts of {adjusted} items in '{}' to be consistent",
            project.name
        );
    }

    log::info!(
        "Read project '{}' ({} items) from {}",
        project.name,
        project.material_list.items.len(),
        path.as_ref().display()
    );
    Ok(project)
}
