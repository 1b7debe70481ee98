//! Cell matrices consumed by the renderer.
//!
//! The renderer does not encode data. It takes a finished grid produced by a
//! QR encoder and only looks at what state each cell is in.

/// Side length of a finder pattern, in cells.
const FINDER_SIZE: u32 = 7;

/// The discrete state of one matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Light module, or a cell that was never set.
    Background,
    /// Dark data module.
    Foreground,
    /// Dark module belonging to one of the three finder patterns.
    Finder,
}

impl CellState {
    /// Every state, in table order.
    pub const ALL: [CellState; 3] =
        [CellState::Background, CellState::Foreground, CellState::Finder];

    /// Dense index of this state, used by [`crate::color::ColorTable`].
    pub const fn index(self) -> usize {
        match self {
            CellState::Background => 0,
            CellState::Foreground => 1,
            CellState::Finder => 2,
        }
    }
}

/// A square grid of [`CellState`]s.
///
/// # Example
///
/// ```rust
/// use qirender::matrix::{CellState, Matrix};
///
/// let m = Matrix::from_modules(21, |x, y| (x + y) % 2 == 0);
/// assert_eq!(m.get(0, 0), Some(CellState::Finder));
/// assert_eq!(m.get(10, 10), Some(CellState::Foreground));
/// assert_eq!(m.get(21, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    size: u32,
    cells: Vec<CellState>,
}

impl Matrix {
    /// Creates a `size` x `size` matrix with every cell set to background.
    pub fn new(size: u32) -> Self {
        let len = size as usize * size as usize;
        Matrix { size, cells: vec![CellState::Background; len] }
    }

    /// Builds a matrix from a dark/light module predicate, such as the
    /// `get_module` accessor of a QR encoder.
    ///
    /// Dark modules inside the three 7x7 finder corners are classified as
    /// [`CellState::Finder`], other dark modules as
    /// [`CellState::Foreground`].
    pub fn from_modules<F>(size: u32, mut is_dark: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut matrix = Matrix::new(size);
        for y in 0..size {
            for x in 0..size {
                if !is_dark(x, y) {
                    continue;
                }
                let state = if in_finder(size, x, y) {
                    CellState::Finder
                } else {
                    CellState::Foreground
                };
                matrix.set(x, y, state);
            }
        }
        matrix
    }

    /// Width and height of the matrix, in cells.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the state at `(x, y)`, or `None` if the coordinate is outside.
    pub fn get(&self, x: u32, y: u32) -> Option<CellState> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    /// Overwrites the state at `(x, y)`. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, state: CellState) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = state;
        }
    }

    /// Iterates `(x, y, state)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, CellState)> + '_ {
        let size = self.size as usize;
        self.cells.iter().enumerate().map(move |(i, &state)| {
            // both quotient and remainder are below `size`, which is a u32
            ((i % size) as u32, (i / size) as u32, state)
        })
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.size && y < self.size {
            Some(y as usize * self.size as usize + x as usize)
        } else {
            None
        }
    }
}

fn in_finder(size: u32, x: u32, y: u32) -> bool {
    let far = size.saturating_sub(FINDER_SIZE);
    let left = x < FINDER_SIZE;
    let top = y < FINDER_SIZE;
    (left && top) || (x >= far && top) || (left && y >= far)
}
