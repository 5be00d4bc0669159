//! Uniform spatial partition over the simulation bounds
//!
//! The area is cut into square cells of side `cell_size`:
//! `cols = ceil(width / cell_size)`, `rows = ceil(height / cell_size)`,
//! and cell `row * cols + col` holds the ids of the particles inside it.
//! Force accumulation only looks at a particle's own cell and its eight
//! neighbours, which keeps a frame close to linear in the population.
//!
//! Neighbour lookup works on (row, col) pairs and drops every neighbour
//! that falls outside the grid on either axis. A flat `index +/- 1` scheme
//! would wrap East/West lookups at row ends into the opposite edge of the
//! adjacent row; that aliasing is intentionally not reproduced here.
//!
//! Membership is only changed through [`Grid::insert`], [`Grid::remove`]
//! and [`Grid::relocate`]. Each particle id remembers its (cell, slot)
//! pair, so all three run in O(1) via swap-remove.

use super::error::SimError;
use super::states::{Bounds, NVec2};

/// Self followed by N, NE, E, SE, S, SW, W, NW as (row, col) offsets
const NEIGHBOR_OFFSETS: [(isize, isize); 9] = [
    (0, 0),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Upper limit on `cols * rows`; finer grids are a configuration error
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    cell: usize,
    index: usize, // position inside `cells[cell]`
}

#[derive(Debug, Clone)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cell_size: f64,
    cells: Vec<Vec<usize>>,
    slots: Vec<Option<Slot>>, // indexed by particle id
}

impl Grid {
    /// Build an empty grid covering `bounds`
    pub fn new(bounds: Bounds, cell_size: f64) -> Result<Self, SimError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(SimError::InvalidCellSize(cell_size));
        }
        if !bounds.width.is_finite() || !bounds.height.is_finite() || bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Err(SimError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }

        // sized in f64 first: a tiny cell size would saturate the usize casts
        let cols = (bounds.width / cell_size).ceil();
        let rows = (bounds.height / cell_size).ceil();
        if cols * rows > MAX_CELLS as f64 {
            return Err(SimError::TooManyCells { cell_size, cols, rows });
        }
        let (cols, rows) = (cols as usize, rows as usize);

        Ok(Self {
            cols,
            rows,
            cell_size,
            cells: vec![Vec::new(); cols * rows],
            slots: Vec::new(),
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Raw cell index for a point. Not bounds-checked: points outside the
    /// grid give negative or too-large indices, which callers must treat
    /// as "no such cell".
    pub fn cell_index_of(&self, x: f64, y: f64) -> isize {
        let col = (x / self.cell_size).floor() as isize;
        let row = (y / self.cell_size).floor() as isize;
        row * self.cols as isize + col
    }

    /// Cell holding the point, if the point lies on the grid
    pub fn cell_of(&self, x: f64, y: f64) -> Option<usize> {
        let col = (x / self.cell_size).floor();
        let row = (y / self.cell_size).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f64 || row >= self.rows as f64 {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn cell_of_position(&self, p: &NVec2) -> Option<usize> {
        self.cell_of(p.x, p.y)
    }

    /// The cell itself and its eight compass neighbours. Entries are `None`
    /// where the neighbour would fall off the grid (no wrapping).
    pub fn neighbors_of(&self, cell: usize) -> [Option<usize>; 9] {
        let mut out = [None; 9];
        if cell >= self.cells.len() {
            return out;
        }
        let row = (cell / self.cols) as isize;
        let col = (cell % self.cols) as isize;

        for (slot, (dr, dc)) in out.iter_mut().zip(NEIGHBOR_OFFSETS.iter()) {
            let r = row + dr;
            let c = col + dc;
            if r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.cols {
                *slot = Some(r as usize * self.cols + c as usize);
            }
        }
        out
    }

    /// Add particle `id` to `cell`. A particle already on the grid is moved instead.
    pub fn insert(&mut self, id: usize, cell: usize) {
        debug_assert!(cell < self.cells.len(), "cell {cell} outside grid");
        if self.slots.len() <= id {
            self.slots.resize(id + 1, None);
        }
        if let Some(old) = self.slots[id] {
            if old.cell == cell {
                return;
            }
            self.detach(id, old);
        }
        let members = &mut self.cells[cell];
        members.push(id);
        self.slots[id] = Some(Slot {
            cell,
            index: members.len() - 1,
        });
    }

    /// Take particle `id` off the grid. Returns the cell it was in.
    pub fn remove(&mut self, id: usize) -> Option<usize> {
        let slot = self.slots.get(id).copied().flatten()?;
        self.detach(id, slot);
        self.slots[id] = None;
        Some(slot.cell)
    }

    /// Move particle `id` from `old` to `new`. No-op when the cells match.
    pub fn relocate(&mut self, id: usize, old: usize, new: usize) {
        if old == new {
            return;
        }
        debug_assert_eq!(self.cell_containing(id), Some(old), "particle {id} not in cell {old}");
        self.insert(id, new);
    }

    /// Ids currently in `cell` (empty for an out-of-range index)
    pub fn members(&self, cell: usize) -> &[usize] {
        self.cells.get(cell).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn cell_containing(&self, id: usize) -> Option<usize> {
        self.slots.get(id).copied().flatten().map(|s| s.cell)
    }

    /// Number of particles on the grid
    pub fn len(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }

    /// Top-left and bottom-right corners of a cell
    pub fn cell_bounds(&self, cell: usize) -> Option<(NVec2, NVec2)> {
        if cell >= self.cells.len() {
            return None;
        }
        let row = (cell / self.cols) as f64;
        let col = (cell % self.cols) as f64;
        let min = NVec2::new(col * self.cell_size, row * self.cell_size);
        Some((min, min + NVec2::new(self.cell_size, self.cell_size)))
    }

    /// x coordinates of the vertical cell boundaries, starting at 0
    pub fn column_lines(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.cols).map(move |c| c as f64 * self.cell_size)
    }

    /// y coordinates of the horizontal cell boundaries, starting at 0
    pub fn row_lines(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.rows).map(move |r| r as f64 * self.cell_size)
    }

    fn detach(&mut self, id: usize, slot: Slot) {
        let members = &mut self.cells[slot.cell];
        debug_assert_eq!(members.get(slot.index), Some(&id));
        members.swap_remove(slot.index);
        // the former last member now sits where `id` was
        if let Some(&moved) = members.get(slot.index) {
            self.slots[moved] = Some(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        // 4 cols x 3 rows
        Grid::new(Bounds::new(200.0, 150.0), 50.0).unwrap()
    }

    #[test]
    fn dimensions_round_up() {
        let g = Grid::new(Bounds::new(1050.0, 800.0), 50.0).unwrap();
        assert_eq!(g.cols(), 21);
        assert_eq!(g.rows(), 16);

        let g = Grid::new(Bounds::new(101.0, 99.0), 50.0).unwrap();
        assert_eq!(g.cols(), 3);
        assert_eq!(g.rows(), 2);
    }

    #[test]
    fn raw_index_can_leave_grid() {
        let g = grid();
        assert_eq!(g.cell_index_of(60.0, 60.0), 5);
        assert!(g.cell_index_of(-10.0, -10.0) < 0);
        assert_eq!(g.cell_of(-10.0, 10.0), None);
        assert_eq!(g.cell_of(10.0, 151.0), None);
    }

    #[test]
    fn corner_neighbors_are_clipped() {
        let g = grid();
        let found: Vec<usize> = g.neighbors_of(0).iter().flatten().copied().collect();
        assert_eq!(found.len(), 4);
        for c in [0, 1, 4, 5] {
            assert!(found.contains(&c));
        }
    }

    #[test]
    fn row_end_does_not_wrap() {
        let g = grid();
        // cell 3 is the last column of row 0; cell 4 starts row 1 on the far side
        let found: Vec<usize> = g.neighbors_of(3).iter().flatten().copied().collect();
        assert!(!found.contains(&4));
        assert!(found.contains(&7));
        assert!(found.contains(&6));
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn swap_remove_keeps_slots_consistent() {
        let mut g = grid();
        g.insert(0, 2);
        g.insert(1, 2);
        g.insert(2, 2);

        assert_eq!(g.remove(0), Some(2));
        assert_eq!(g.members(2).len(), 2);
        assert_eq!(g.cell_containing(2), Some(2));

        g.relocate(2, 2, 7);
        assert_eq!(g.members(2), &[1]);
        assert_eq!(g.members(7), &[2]);
        assert_eq!(g.remove(0), None);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn rejects_bad_cell_size() {
        assert_eq!(
            Grid::new(Bounds::new(100.0, 100.0), 0.0).unwrap_err(),
            SimError::InvalidCellSize(0.0)
        );
        assert!(Grid::new(Bounds::new(100.0, 100.0), f64::NAN).is_err());
    }

    #[test]
    fn tiny_cell_size_is_an_error_not_a_panic() {
        let err = Grid::new(Bounds::new(1050.0, 800.0), 1e-7).unwrap_err();
        assert!(matches!(err, SimError::TooManyCells { .. }), "got {:?}", err);

        let err = Grid::new(Bounds::new(1.0e300, 1.0e300), 1.0).unwrap_err();
        assert!(matches!(err, SimError::TooManyCells { .. }));

        // exactly at the limit still builds
        let g = Grid::new(Bounds::new(4096.0, 4096.0), 1.0).unwrap();
        assert_eq!(g.cell_count(), MAX_CELLS);
    }
}
