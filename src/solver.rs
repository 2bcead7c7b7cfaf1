//! Fixed-Step Runge-Kutta Integration
//!
//! Generic classic RK4 over `[f64; N]` state vectors. The model side
//! supplies only the vector field, the initial state and the time grid;
//! nothing here knows about membranes or gates.

use serde::{Deserialize, Serialize};

use crate::error::{AxonError, Result};

/// Ordered fixed-step sequence of sample times
///
/// Half-open like `arange`: t0 is included, t_end is not. The default
/// grid is t in [0, 30) ms at 0.01 ms resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    t0: f64,
    t_end: f64,
    dt: f64,
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self {
            t0: 0.0,
            t_end: 30.0,
            dt: 0.01,
        }
    }
}

impl TimeGrid {
    /// Build a grid over [t0, t_end) with step dt
    pub fn new(t0: f64, t_end: f64, dt: f64) -> Result<Self> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(AxonError::Grid(format!("step must be positive, got {dt}")));
        }
        if !(t0.is_finite() && t_end.is_finite() && t_end > t0) {
            return Err(AxonError::Grid(format!(
                "need finite t_end > t0, got [{t0}, {t_end})"
            )));
        }
        Ok(Self { t0, t_end, dt })
    }

    /// Step size (ms)
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of sample times
    pub fn len(&self) -> usize {
        // Half-open count. The tolerance is relative (a few ULP of the
        // step count) so an exactly-divisible span does not pick up a
        // spurious final point, while a span genuinely past the last
        // multiple of dt keeps its final sample.
        let steps = (self.t_end - self.t0) / self.dt;
        (steps * (1.0 - 4.0 * f64::EPSILON)).ceil() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample times, in order
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.t0 + i as f64 * self.dt)
    }
}

/// Integrate `dy/dt = f(y, t)` from `y0` across the grid with classic RK4
///
/// Returns one `(t, y)` pair per grid time; the first pair is
/// `(t0, y0)` untouched. `f` is probed at midpoints between grid times,
/// so it must be well-defined off the grid.
pub fn rk4<const N: usize, F>(f: F, y0: [f64; N], grid: &TimeGrid) -> Vec<(f64, [f64; N])>
where
    F: Fn(&[f64; N], f64) -> [f64; N],
{
    let dt = grid.dt();
    let mut out = Vec::with_capacity(grid.len());
    let mut y = y0;

    for t in grid.times() {
        out.push((t, y));

        let k1 = f(&y, t);
        let k2 = f(&axpy(&y, &k1, dt / 2.0), t + dt / 2.0);
        let k3 = f(&axpy(&y, &k2, dt / 2.0), t + dt / 2.0);
        let k4 = f(&axpy(&y, &k3, dt), t + dt);

        for i in 0..N {
            y[i] += dt / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
        }
    }

    out
}

/// y + k * scale, componentwise
fn axpy<const N: usize>(y: &[f64; N], k: &[f64; N], scale: f64) -> [f64; N] {
    let mut out = *y;
    for i in 0..N {
        out[i] += k[i] * scale;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_shape() {
        let grid = TimeGrid::default();
        assert_eq!(grid.len(), 3000);
        let times: Vec<f64> = grid.times().collect();
        assert_eq!(times[0], 0.0);
        assert!((times[2999] - 29.99).abs() < 1e-9);
    }

    #[test]
    fn test_grid_len_exactly_divisible_spans() {
        // No spurious extra point when the span is a multiple of dt
        assert_eq!(TimeGrid::new(0.0, 1.0, 0.1).unwrap().len(), 10);
        assert_eq!(TimeGrid::new(0.0, 3.0, 0.001).unwrap().len(), 3000);
        assert_eq!(TimeGrid::new(-5.0, 5.0, 0.5).unwrap().len(), 20);
    }

    #[test]
    fn test_grid_len_keeps_sample_just_inside_span() {
        // t_end barely past the last multiple of dt: the t = 5.0 sample
        // is inside the half-open span and must not be dropped
        let grid = TimeGrid::new(0.0, 5.0 + 1e-10, 1.0).unwrap();
        assert_eq!(grid.len(), 6);
        let last = grid.times().last().unwrap();
        assert!((last - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_grid_rejects_bad_inputs() {
        assert!(TimeGrid::new(0.0, 10.0, 0.0).is_err());
        assert!(TimeGrid::new(0.0, 10.0, -0.1).is_err());
        assert!(TimeGrid::new(5.0, 5.0, 0.1).is_err());
        assert!(TimeGrid::new(0.0, f64::NAN, 0.1).is_err());
    }

    #[test]
    fn test_rk4_exponential_decay() {
        // dy/dt = -y, y(0) = 1; RK4 at dt=0.01 should track exp(-t)
        // far below 1e-8 over a unit interval
        let grid = TimeGrid::new(0.0, 1.0 + 0.005, 0.01).unwrap();
        let sol = rk4(|y, _t| [-y[0]], [1.0], &grid);
        let (t_last, y_last) = sol[sol.len() - 1];
        assert!((y_last[0] - (-t_last).exp()).abs() < 1e-8);
    }

    #[test]
    fn test_rk4_harmonic_oscillator() {
        // y'' = -y as a 2-vector; energy should be conserved to ~1e-6
        let grid = TimeGrid::new(0.0, 6.3, 0.01).unwrap();
        let sol = rk4(|y, _t| [y[1], -y[0]], [1.0, 0.0], &grid);
        for (_, y) in &sol {
            let energy = y[0] * y[0] + y[1] * y[1];
            assert!((energy - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_rk4_first_sample_is_initial_condition() {
        let grid = TimeGrid::new(2.0, 3.0, 0.1).unwrap();
        let sol = rk4(|_y, _t| [0.0], [42.0], &grid);
        assert_eq!(sol[0], (2.0, [42.0]));
    }
}
