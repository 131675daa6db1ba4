//! Named initial-lattice patterns.
//!
//! | Pattern                  | Layout                                              |
//! |--------------------------|-----------------------------------------------------|
//! | `random`                 | each cell uniform in `{-1, +1}`                     |
//! | `up` / `down`            | every cell `+1` / `-1`                              |
//! | `domain-wall-vertical`   | `+1`, columns `size/2..` set to `-1`                |
//! | `domain-wall-horizontal` | `+1`, rows `size/2..` set to `-1`                   |
//! | `checkerboard`           | `+1` where `i + j` is even, `-1` otherwise (even size only) |

use std::fmt;
use std::str::FromStr;

use crate::lattice::{DOWN, UP};
use crate::{EngineRng, IsingError, IsingResult, Lattice};

/// Which axis a domain wall runs along.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// The wall is a vertical line: the right half of the columns is flipped.
    #[default]
    Vertical,
    /// The wall is a horizontal line: the bottom half of the rows is flipped.
    Horizontal,
}

impl FromStr for Orientation {
    type Err = IsingError;

    fn from_str(s: &str) -> IsingResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical"   => Ok(Orientation::Vertical),
            "horizontal" => Ok(Orientation::Horizontal),
            other => Err(IsingError::invalid(format!(
                "orientation must be 'vertical' or 'horizontal', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical   => f.write_str("vertical"),
            Orientation::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// A lattice with two opposite domains separated by a straight wall.
pub fn domain_wall(size: usize, orientation: Orientation) -> IsingResult<Lattice> {
    let half = size / 2;
    let mut spins = vec![UP; size * size];
    for i in 0..size {
        for j in 0..size {
            let flipped = match orientation {
                Orientation::Vertical   => j >= half,
                Orientation::Horizontal => i >= half,
            };
            if flipped {
                spins[i * size + j] = DOWN;
            }
        }
    }
    Lattice::from_flat(size, spins)
}

/// Alternating spins; fails with `InvalidArgument` for odd `size`.
pub fn checkerboard(size: usize) -> IsingResult<Lattice> {
    if size % 2 != 0 {
        return Err(IsingError::invalid(format!(
            "checkerboard size must be even, got {size}"
        )));
    }
    let spins = (0..size * size)
        .map(|k| if (k / size + k % size) % 2 == 0 { UP } else { DOWN })
        .collect();
    Lattice::from_flat(size, spins)
}

// ── Pattern ───────────────────────────────────────────────────────────────────

/// A named way of producing an initial lattice.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Pattern {
    #[default]
    Random,
    AllUp,
    AllDown,
    DomainWall(Orientation),
    Checkerboard,
}

impl Pattern {
    /// Materialize the pattern at `size`.  Only [`Pattern::Random`] draws
    /// from `rng`.
    pub fn build(self, size: usize, rng: &mut EngineRng) -> IsingResult<Lattice> {
        match self {
            Pattern::Random          => Lattice::random(size, rng),
            Pattern::AllUp           => Lattice::uniform(size, UP),
            Pattern::AllDown         => Lattice::uniform(size, DOWN),
            Pattern::DomainWall(o)   => domain_wall(size, o),
            Pattern::Checkerboard    => checkerboard(size),
        }
    }
}

impl FromStr for Pattern {
    type Err = IsingError;

    fn from_str(s: &str) -> IsingResult<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "random"       => Ok(Pattern::Random),
            "up"           => Ok(Pattern::AllUp),
            "down"         => Ok(Pattern::AllDown),
            "checkerboard" => Ok(Pattern::Checkerboard),
            _ => match name.strip_prefix("domain-wall-") {
                Some(o) => o.parse().map(Pattern::DomainWall),
                None => Err(IsingError::invalid(format!("unknown lattice pattern '{name}'"))),
            },
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Random        => f.write_str("random"),
            Pattern::AllUp         => f.write_str("up"),
            Pattern::AllDown       => f.write_str("down"),
            Pattern::DomainWall(o) => write!(f, "domain-wall-{o}"),
            Pattern::Checkerboard  => f.write_str("checkerboard"),
        }
    }
}
