//! Temperature grids.

use ising_core::T_CRITICAL;

use crate::{SweepError, SweepResult};

/// `n` evenly spaced values from `start` towards `stop`.  With `endpoint`
/// the last value is exactly `stop`; without it `stop` is excluded.
pub fn linspace(start: f64, stop: f64, n: usize, endpoint: bool) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let div = (if endpoint { n - 1 } else { n }) as f64;
            let step = (stop - start) / div;
            let mut v: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            if endpoint {
                v[n - 1] = stop;
            }
            v
        }
    }
}

/// Grid over `[t_min, t_max]` concentrated around [`T_CRITICAL`]:
///
/// | Segment                 | Points  | Endpoint |
/// |-------------------------|---------|----------|
/// | `[t_min, 0.9·Tc)`       | `n / 2` | excluded |
/// | `[0.9·Tc, 1.1·Tc)`      | `n / 4` | excluded |
/// | `[1.1·Tc, t_max]`       | `n / 4` | included |
///
/// The result is strictly increasing.  `t_min` must lie below `0.9·Tc` and
/// `t_max` above `1.1·Tc`.
pub fn temperature_grid(t_min: f64, t_max: f64, num_points: usize) -> SweepResult<Vec<f64>> {
    let low = 0.9 * T_CRITICAL;
    let high = 1.1 * T_CRITICAL;
    if !(t_min.is_finite() && t_min > 0.0 && t_min < low) {
        return Err(SweepError::InvalidArgument(format!(
            "t_min must be in (0, {low:.4}), got {t_min}"
        )));
    }
    if !(t_max.is_finite() && t_max > high) {
        return Err(SweepError::InvalidArgument(format!(
            "t_max must be finite and above {high:.4}, got {t_max}"
        )));
    }

    let mut grid = linspace(t_min, low, num_points / 2, false);
    grid.extend(linspace(low, high, num_points / 4, false));
    grid.extend(linspace(high, t_max, num_points / 4, true));
    Ok(grid)
}
