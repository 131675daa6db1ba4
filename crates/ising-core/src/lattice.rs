//! The `N×N` spin grid.
//!
//! Spins are stored row-major as `i8` values, each exactly `+1` or `-1`.
//! Every constructor validates that invariant, and the only mutation offered
//! is a sign flip, so it can never be broken afterwards.

use std::fmt;

use crate::{EngineRng, IsingError, IsingResult};

/// Spin-up value.
pub const UP: i8 = 1;
/// Spin-down value.
pub const DOWN: i8 = -1;

/// A square lattice of `±1` spins.  `size` is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<Vec<i8>>", try_from = "Vec<Vec<i8>>")
)]
pub struct Lattice {
    size:  usize,
    spins: Vec<i8>,
}

impl Lattice {
    // ── Constructors ──────────────────────────────────────────────────────

    /// Every cell set to `spin`.
    pub fn uniform(size: usize, spin: i8) -> IsingResult<Self> {
        check_size(size)?;
        check_spin(spin)?;
        Ok(Self { size, spins: vec![spin; size * size] })
    }

    /// Each cell drawn independently and uniformly from `{-1, +1}`.
    pub fn random(size: usize, rng: &mut EngineRng) -> IsingResult<Self> {
        check_size(size)?;
        let spins = (0..size * size).map(|_| rng.spin()).collect();
        Ok(Self { size, spins })
    }

    /// Build from a row-major flat vector of length `size * size`.
    pub fn from_flat(size: usize, spins: Vec<i8>) -> IsingResult<Self> {
        check_size(size)?;
        if spins.len() != size * size {
            return Err(IsingError::invalid(format!(
                "flat lattice has {} cells, expected {}",
                spins.len(),
                size * size,
            )));
        }
        spins.iter().try_for_each(|&s| check_spin(s))?;
        Ok(Self { size, spins })
    }

    /// Build from nested rows.  Fails with [`IsingError::ShapeMismatch`]
    /// unless the grid is exactly `size×size`.
    pub fn from_rows(size: usize, rows: &[Vec<i8>]) -> IsingResult<Self> {
        check_size(size)?;
        let cols = rows.iter().map(Vec::len).find(|&c| c != size).unwrap_or(size);
        if rows.len() != size || cols != size {
            return Err(IsingError::ShapeMismatch {
                expected: size,
                rows:     rows.len(),
                cols,
            });
        }
        let spins: Vec<i8> = rows.iter().flatten().copied().collect();
        spins.iter().try_for_each(|&s| check_spin(s))?;
        Ok(Self { size, spins })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size²`).
    #[inline]
    pub fn len(&self) -> usize {
        self.spins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    /// Row-major flat index of `(i, j)`.
    #[inline(always)]
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * self.size + j
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> i8 {
        self.spins[self.index(i, j)]
    }

    #[inline(always)]
    pub fn get_index(&self, index: usize) -> i8 {
        self.spins[index]
    }

    /// Row-major view of all spins.
    #[inline]
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    /// Sum of all spins.
    pub fn magnetization(&self) -> i64 {
        self.spins.iter().map(|&s| s as i64).sum()
    }

    /// Copy out as nested rows.
    pub fn rows(&self) -> Vec<Vec<i8>> {
        self.spins.chunks(self.size.max(1)).map(<[i8]>::to_vec).collect()
    }

    /// Fail with [`IsingError::ShapeMismatch`] unless `size() == expected`.
    pub fn expect_size(&self, expected: usize) -> IsingResult<()> {
        if self.size != expected {
            return Err(IsingError::ShapeMismatch {
                expected,
                rows: self.size,
                cols: self.size,
            });
        }
        Ok(())
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Negate the spin at flat `index`; returns the new value.
    #[inline(always)]
    pub fn flip_index(&mut self, index: usize) -> i8 {
        let s = &mut self.spins[index];
        *s = -*s;
        *s
    }

    /// Negate the spin at `(i, j)`; returns the new value.
    #[inline]
    pub fn flip(&mut self, i: usize, j: usize) -> i8 {
        let k = self.index(i, j);
        self.flip_index(k)
    }
}

fn check_size(size: usize) -> IsingResult<()> {
    if size == 0 {
        return Err(IsingError::invalid("lattice size must be at least 1"));
    }
    Ok(())
}

fn check_spin(spin: i8) -> IsingResult<()> {
    if spin != UP && spin != DOWN {
        return Err(IsingError::invalid(format!("spin value {spin} is not +1 or -1")));
    }
    Ok(())
}

impl fmt::Display for Lattice {
    /// One text row per lattice row: `+` for up, `-` for down.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.spins.chunks(self.size.max(1)) {
            let line: String = row.iter().map(|&s| if s == UP { '+' } else { '-' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

// ── Nested-sequence form (serialization) ──────────────────────────────────────

impl From<Lattice> for Vec<Vec<i8>> {
    fn from(lattice: Lattice) -> Self {
        lattice.rows()
    }
}

impl TryFrom<Vec<Vec<i8>>> for Lattice {
    type Error = IsingError;

    /// The row count defines the expected size; the grid must be square.
    fn try_from(rows: Vec<Vec<i8>>) -> IsingResult<Self> {
        Lattice::from_rows(rows.len(), &rows)
    }
}
