/*!
 * Cell label classification
 */

use crate::error::{MegaverseError, Result};

/// Canonical label for a base entity cell
pub const POLYANET_TAG: &str = "POLYANET";
/// Marker substring identifying a soloon cell
pub const SOLOON_MARKER: &str = "SOLOON";
/// Marker substring identifying a cometh cell
pub const COMETH_MARKER: &str = "COMETH";
/// Canonical label for an empty cell
pub const SPACE_TAG: &str = "SPACE";

/// Separator between the attribute and the entity part of a composite label
pub const ATTRIBUTE_SEPARATOR: char = '_';

/// A classified grid cell
///
/// Composite labels such as `BLUE_SOLOON` or `UP_COMETH` carry their
/// attribute before the separator; the attribute is lower-cased on parse
/// since the API expects lower-case values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Base entity (`POLYANET`)
    Polyanet,
    /// Satellite with a color, placed only next to a base entity
    Soloon { color: String },
    /// Comet with a direction, placed unconditionally
    Cometh { direction: String },
    /// Empty space, or any label this client does not recognize
    Space,
}

impl Cell {
    /// Classify a raw cell label
    ///
    /// Matching is case-sensitive and checked in priority order: exact
    /// base-entity tag, then soloon marker, then cometh marker. Everything
    /// else (including `SPACE`) is empty.
    pub fn parse(label: &str) -> Result<Cell> {
        if label == POLYANET_TAG {
            Ok(Cell::Polyanet)
        } else if label.contains(SOLOON_MARKER) {
            Ok(Cell::Soloon {
                color: attribute_of(label)?,
            })
        } else if label.contains(COMETH_MARKER) {
            Ok(Cell::Cometh {
                direction: attribute_of(label)?,
            })
        } else {
            Ok(Cell::Space)
        }
    }

}

/// Extract the lower-cased attribute from a composite label
fn attribute_of(label: &str) -> Result<String> {
    match label.split_once(ATTRIBUTE_SEPARATOR) {
        Some((attribute, _)) => Ok(attribute.to_lowercase()),
        None => Err(MegaverseError::MalformedLabel(label.to_string())),
    }
}
