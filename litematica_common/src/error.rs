//! Error types for litematica_common

use thiserror::Error;

/// Reasons a material list export could not be turned into a [`MaterialList`].
///
/// Unparseable numeric cells are not represented here: they default to 0.
///
/// [`MaterialList`]: crate::models::MaterialList
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No line contains all of the `Item`, `Total`, `Missing` and `Available` columns
    #[error("Invalid format: header line not found")]
    HeaderNotFound,
    /// The header was found but no row below it had enough columns
    #[error("No items found in the material list")]
    NoItemsFound,
}

/// Result alias for parsing operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;
