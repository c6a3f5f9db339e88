/*!
 * Goal grid traversal
 */

use tracing::{debug, warn};

use crate::cell::{Cell, POLYANET_TAG};
use crate::client::{MegaverseClient, Transport};
use crate::error::MegaverseError;
use crate::grid::GridModel;
use crate::stats::TraversalStats;

/// Glyph for an untouched preview cell
pub const EMPTY_GLYPH: &str = "🌌";
/// Glyph marking a placed base entity
pub const POLYANET_GLYPH: &str = "🪐";
/// Glyph marking a placed soloon
pub const SOLOON_GLYPH: &str = "🌕";
/// Glyph marking a placed cometh
pub const COMETH_GLYPH: &str = "☄";

/// Orthogonal neighbor offsets for the adjacency rule
const NEIGHBOR_OFFSETS: [(i64, i64); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Walks the goal grid and drives one creation call per qualifying cell
///
/// Traversal is row-major and strictly sequential; each call blocks until
/// the client gives up or succeeds. A failed placement is logged and
/// counted, never propagated, so one bad cell cannot abort the run. A
/// preview matrix is filled in alongside the calls.
pub struct GridProcessor<'a, T: Transport> {
    client: &'a MegaverseClient<T>,
    grid: GridModel,
    preview: Vec<Vec<&'static str>>,
}

impl<'a, T: Transport> GridProcessor<'a, T> {
    pub fn new(client: &'a MegaverseClient<T>, grid: GridModel) -> Self {
        let preview = vec![vec![EMPTY_GLYPH; grid.num_columns()]; grid.num_rows()];
        Self {
            client,
            grid,
            preview,
        }
    }

    /// Replay the whole goal grid, returning the traversal counters
    pub fn run(&mut self) -> TraversalStats {
        let mut stats = TraversalStats::default();

        for row in 0..self.grid.num_rows() {
            for column in 0..self.grid.num_columns() {
                let parsed = match self.grid.label(row, column) {
                    Some(label) => Cell::parse(label),
                    None => continue,
                };

                match parsed {
                    Err(e) => {
                        warn!(row, column, error = %e, "skipping unparseable cell");
                        stats.malformed += 1;
                    }
                    Ok(Cell::Space) => stats.empty += 1,
                    Ok(Cell::Polyanet) => {
                        self.place(row, column, POLYANET_GLYPH);
                        match self.client.create_polyanet(row, column) {
                            Ok(_) => stats.polyanets += 1,
                            Err(e) => Self::record_failure(&mut stats, row, column, "polyanet", &e),
                        }
                    }
                    Ok(Cell::Soloon { color }) => {
                        if !adjacent_to_polyanet(&self.grid, row, column) {
                            debug!(row, column, "soloon has no adjacent polyanet, skipping");
                            stats.skipped_soloons += 1;
                            continue;
                        }
                        self.place(row, column, SOLOON_GLYPH);
                        match self.client.create_soloon(row, column, &color) {
                            Ok(_) => stats.soloons += 1,
                            Err(e) => Self::record_failure(&mut stats, row, column, "soloon", &e),
                        }
                    }
                    Ok(Cell::Cometh { direction }) => {
                        self.place(row, column, COMETH_GLYPH);
                        match self.client.create_cometh(row, column, &direction) {
                            Ok(_) => stats.comeths += 1,
                            Err(e) => Self::record_failure(&mut stats, row, column, "cometh", &e),
                        }
                    }
                }
            }
        }

        stats
    }

    /// Render the preview matrix, one grid row per line
    pub fn render_preview(&self) -> String {
        self.preview
            .iter()
            .map(|row| row.concat())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn place(&mut self, row: usize, column: usize, glyph: &'static str) {
        if let Some(cell) = self.preview.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = glyph;
        }
    }

    fn record_failure(
        stats: &mut TraversalStats,
        row: usize,
        column: usize,
        entity: &str,
        error: &MegaverseError,
    ) {
        warn!(row, column, entity, error = %error, "placement failed, continuing");
        stats.failed += 1;
    }
}

/// Whether a position is 4-directionally adjacent to a base entity
///
/// Only orthogonal neighbors count; a neighbor qualifies when it is in
/// bounds and its label is exactly the base-entity tag.
fn adjacent_to_polyanet(grid: &GridModel, row: usize, column: usize) -> bool {
    NEIGHBOR_OFFSETS.iter().any(|(delta_row, delta_column)| {
        let neighbor_row = row as i64 + delta_row;
        let neighbor_column = column as i64 + delta_column;
        if neighbor_row < 0 || neighbor_column < 0 {
            return false;
        }
        grid.label(neighbor_row as usize, neighbor_column as usize) == Some(POLYANET_TAG)
    })
}
