//! Mutable 2D grid of field type codes with bounds-checked neighbor lookups.
use crate::surface::FieldId;

/// A rectangular grid of field type codes for one region of a colony.
///
/// Cells are stored row-major and fully populated from construction on.
/// Neighbor probes use signed coordinates so callers can step off the edge;
/// out-of-range lookups report "absent" instead of a default code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceGrid {
    width: usize,
    height: usize,
    cells: Vec<FieldId>,
}

impl SurfaceGrid {
    /// Creates a grid with every cell set to `base_field`.
    pub fn new(width: usize, height: usize, base_field: FieldId) -> Self {
        Self {
            width,
            height,
            cells: vec![base_field; width * height],
        }
    }

    /// Number of cells in X.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells in Y.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the field code at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<FieldId> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Overwrites the field code at `(x, y)`.
    ///
    /// Panics if `(x, y)` is out of bounds; mutation targets always originate
    /// from an in-bounds candidate scan.
    pub fn set(&mut self, x: usize, y: usize, value: FieldId) {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        self.cells[y * self.width + x] = value;
    }

    /// Whether the cell at signed coordinates `(x, y)` holds `other`.
    ///
    /// Out-of-range coordinates never match.
    pub fn matches(&self, x: isize, y: isize, other: FieldId) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.get(x as usize, y as usize) == Some(other)
    }

    /// Row-major iteration over all cells, outer loop over rows.
    pub fn row_major(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.cells.iter().copied()
    }
}
