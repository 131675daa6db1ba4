//! Periodic (toroidal) nearest-neighbor topology.
//!
//! For cell `(i, j)` of an `N×N` lattice the four neighbors are
//!
//! ```text
//! neighbor(i, j, dir) = ((i + di) mod N, (j + dj) mod N)
//! ```
//!
//! for the unit offsets below.  The table stores flat row-major cell indices
//! so the Metropolis inner loop does four loads and no modulo arithmetic.

/// One of the four lattice directions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    /// `(i + 1, j)`
    Down,
    /// `(i - 1, j)`
    Up,
    /// `(i, j + 1)`
    Right,
    /// `(i, j - 1)`
    Left,
}

impl Direction {
    /// All four directions, in table column order.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// Unit offset `(di, dj)`.
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Down  => (1, 0),
            Direction::Up    => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left  => (0, -1),
        }
    }
}

/// Precomputed neighbor indices for every cell of an `N×N` torus.
///
/// Built once in O(N²) time and space; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborTable {
    size:  usize,
    table: Vec<[usize; 4]>,
}

impl NeighborTable {
    pub fn new(size: usize) -> Self {
        let mut table = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                let mut row = [0usize; 4];
                for (slot, dir) in row.iter_mut().zip(Direction::ALL) {
                    let (ni, nj) = wrap(size, i, j, dir);
                    *slot = ni * size + nj;
                }
                table.push(row);
            }
        }
        Self { size, table }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat indices of the four neighbors of flat cell `index`.
    #[inline(always)]
    pub fn of_index(&self, index: usize) -> &[usize; 4] {
        &self.table[index]
    }

    /// Lattice coordinates of the four neighbors of `(i, j)`, in
    /// [`Direction::ALL`] order.
    pub fn coords(&self, i: usize, j: usize) -> [(usize, usize); 4] {
        let flat = self.table[i * self.size + j];
        flat.map(|k| (k / self.size, k % self.size))
    }

    /// Coordinates of the neighbor of `(i, j)` in direction `dir`.
    pub fn neighbor(&self, i: usize, j: usize, dir: Direction) -> (usize, usize) {
        wrap(self.size, i, j, dir)
    }
}

fn wrap(size: usize, i: usize, j: usize, dir: Direction) -> (usize, usize) {
    let n = size as isize;
    let (di, dj) = dir.offset();
    let ni = (i as isize + di).rem_euclid(n) as usize;
    let nj = (j as isize + dj).rem_euclid(n) as usize;
    (ni, nj)
}
