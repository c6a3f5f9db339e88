/*!
 * Goal grid model
 */

use std::fmt;

use crate::error::{MegaverseError, Result};

/// The target grid: an immutable, rectangular 2-D array of cell labels
///
/// Construction validates the shape once; afterwards `num_rows` and
/// `num_columns` are trusted and all access is bounds-checked.
#[derive(Debug, Clone)]
pub struct GridModel {
    cells: Vec<Vec<String>>,
    num_rows: usize,
    num_columns: usize,
}

impl GridModel {
    /// Build a grid from a fetched label array
    ///
    /// Fails fast on an empty array, an empty first row, or ragged rows.
    pub fn new(cells: Vec<Vec<String>>) -> Result<Self> {
        let num_rows = cells.len();
        if num_rows == 0 {
            return Err(MegaverseError::InvalidGrid(
                "goal map has no rows".to_string(),
            ));
        }

        let num_columns = cells[0].len();
        if num_columns == 0 {
            return Err(MegaverseError::InvalidGrid(
                "goal map has no columns".to_string(),
            ));
        }

        for (row_index, row) in cells.iter().enumerate() {
            if row.len() != num_columns {
                return Err(MegaverseError::InvalidGrid(format!(
                    "row {} has {} columns, expected {}",
                    row_index,
                    row.len(),
                    num_columns
                )));
            }
        }

        Ok(Self {
            cells,
            num_rows,
            num_columns,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Label at a position, or `None` when out of bounds
    pub fn label(&self, row: usize, column: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_dimensions() {
        let grid = GridModel::new(labels(&[
            &["SPACE", "POLYANET", "SPACE"],
            &["SPACE", "SPACE", "SPACE"],
        ]))
        .unwrap();
        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.num_columns(), 3);
    }

    #[test]
    fn test_empty_grid_fails() {
        assert!(matches!(
            GridModel::new(vec![]),
            Err(MegaverseError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_empty_row_fails() {
        assert!(matches!(
            GridModel::new(vec![vec![]]),
            Err(MegaverseError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_ragged_rows_fail() {
        let result = GridModel::new(labels(&[&["SPACE", "SPACE"], &["SPACE"]]));
        assert!(matches!(result, Err(MegaverseError::InvalidGrid(_))));
    }

    #[test]
    fn test_label_access() {
        let grid = GridModel::new(labels(&[&["SPACE", "POLYANET"]])).unwrap();
        assert_eq!(grid.label(0, 1), Some("POLYANET"));
        assert_eq!(grid.label(0, 2), None);
        assert_eq!(grid.label(1, 0), None);
    }

    #[test]
    fn test_display() {
        let grid = GridModel::new(labels(&[&["SPACE", "POLYANET"]])).unwrap();
        assert_eq!(grid.to_string(), "SPACE POLYANET\n");
    }
}
