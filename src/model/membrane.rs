//! Space-Clamped Membrane Model
//!
//! The membrane is treated as a single uniform compartment (no spatial
//! propagation). `HodgkinHuxleyModel` holds the fixed physical constants;
//! `derivatives` is the pure vector field an ODE integrator consumes.
//!
//! ## Equations
//!
//! ```text
//! C_m dV/dt = I_stim(t) - g_K n⁴ (V - V_K) - g_Na m³h (V - V_Na) - g_L (V - V_L)
//! dx/dt     = alpha_x(V)(1 - x) - beta_x(V) x      for x in {n, m, h}
//! ```

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use super::rates;
use super::stimulus::input_stimulus;

/// Instantaneous state of the membrane: voltage plus the three gates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Membrane voltage (mV)
    pub v: f64,
    /// Potassium activation gate
    pub n: f64,
    /// Sodium activation gate
    pub m: f64,
    /// Sodium inactivation gate
    pub h: f64,
}

impl State {
    /// Gating variables at their equilibrium values for voltage `v`
    ///
    /// The usual initial condition is `State::steady_state(0.0)`.
    pub fn steady_state(v: f64) -> Self {
        Self {
            v,
            n: rates::n_inf(v),
            m: rates::m_inf(v),
            h: rates::h_inf(v),
        }
    }

    /// Add Gaussian noise to the initial condition (exploration aid)
    ///
    /// Gates are clamped back into [0, 1]. A non-positive `noise_std`
    /// returns the state unchanged.
    pub fn perturbed<R: Rng>(mut self, noise_std: f64, rng: &mut R) -> Self {
        // rand_distr accepts a negative std_dev (mirrored distribution),
        // so the no-op contract needs its own guard.
        if noise_std <= 0.0 {
            return self;
        }
        let Ok(normal) = Normal::new(0.0, noise_std) else {
            return self;
        };
        self.v += normal.sample(rng);
        self.n = (self.n + normal.sample(rng)).clamp(0.0, 1.0);
        self.m = (self.m + normal.sample(rng)).clamp(0.0, 1.0);
        self.h = (self.h + normal.sample(rng)).clamp(0.0, 1.0);
        self
    }

    /// Solver-facing representation, ordered (V, n, m, h)
    pub fn to_array(self) -> [f64; 4] {
        [self.v, self.n, self.m, self.h]
    }

    /// Inverse of [`State::to_array`]
    pub fn from_array(y: [f64; 4]) -> Self {
        Self {
            v: y[0],
            n: y[1],
            m: y[2],
            h: y[3],
        }
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        self.v.is_finite() && self.n.is_finite() && self.m.is_finite() && self.h.is_finite()
    }
}

/// Fixed physical constants of the squid-axon membrane
///
/// Immutable for a given run; the default is the original fit in the
/// V_rest = 0 mV convention.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HodgkinHuxleyModel {
    /// Membrane capacitance (µF/cm²)
    pub c_m: f64,
    /// Sodium maximal conductance (mS/cm²)
    pub g_na: f64,
    /// Potassium maximal conductance (mS/cm²)
    pub g_k: f64,
    /// Leak maximal conductance (mS/cm²)
    pub g_l: f64,
    /// Sodium reversal potential (mV)
    pub v_na: f64,
    /// Potassium reversal potential (mV)
    pub v_k: f64,
    /// Leak reversal potential (mV)
    pub v_l: f64,
}

impl Default for HodgkinHuxleyModel {
    fn default() -> Self {
        Self {
            c_m: 1.0,
            g_na: 120.0,
            g_k: 36.0,
            g_l: 0.3,
            v_na: 115.0,
            v_k: -12.0,
            v_l: -11.0,
        }
    }
}

impl HodgkinHuxleyModel {
    /// Injected current density (µA/cm²) at time `t` (ms)
    pub fn stimulus(&self, t: f64) -> f64 {
        input_stimulus(t)
    }

    /// Instantaneous derivatives of (V, n, m, h) at state `y`, time `t`
    ///
    /// Pure function of its arguments; valid at arbitrary (non-grid)
    /// times, since adaptive solvers probe intermediate points. NaN from
    /// the singular rate voltages propagates unguarded.
    pub fn derivatives(&self, y: &State, t: f64) -> State {
        let State { v, n, m, h } = *y;

        let g_k = (self.g_k / self.c_m) * n.powi(4);
        let g_na = (self.g_na / self.c_m) * m.powi(3) * h;
        let g_l = self.g_l / self.c_m;

        State {
            v: self.stimulus(t) / self.c_m
                - g_k * (v - self.v_k)
                - g_na * (v - self.v_na)
                - g_l * (v - self.v_l),
            n: rates::alpha_n(v) * (1.0 - n) - rates::beta_n(v) * n,
            m: rates::alpha_m(v) * (1.0 - m) - rates::beta_m(v) * m,
            h: rates::alpha_h(v) * (1.0 - h) - rates::beta_h(v) * h,
        }
    }
}
