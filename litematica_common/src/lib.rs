//! Litematica Common - material list parsing and Minecraft units
//!
//! Pure building blocks shared by the material tracker: the data model,
//! the parser for Litematica's ASCII table export, the converter from raw
//! item counts to shulker boxes / stacks / items, and the collection
//! tracking rules applied to a parsed list.

pub mod error;
pub mod models;
pub mod parser;
pub mod tracking;
pub mod units;

pub use error::{ParseError, ParseResult};
pub use models::{MaterialItem, MaterialList};
pub use parser::parse_material_list;
pub use tracking::Progress;
pub use units::{convert_to_minecraft_units, format_quantity, MinecraftUnits};
