//! # Axonsim - Space-Clamped Hodgkin-Huxley Simulation
//!
//! Time evolution of membrane voltage and ion-channel gating for a single
//! space-clamped axon segment under a prescribed stimulus current.
//!
//! ## Core Components
//!
//! - **HodgkinHuxleyModel**: fixed physical constants plus the pure
//!   derivative function (the vector field)
//! - **State**: the (V, n, m, h) state vector and its steady-state
//!   initial condition
//! - **TimeGrid / rk4**: fixed-step classic Runge-Kutta integration over
//!   an ordered time grid
//! - **Trajectory**: the recorded (t, V, n, m, h) series, spike scan and
//!   JSON/CSV export
//!
//! ## Design Principles
//!
//! - **Pure vector field**: the model never mutates state; it maps
//!   (state, time) to derivative and nothing else
//! - **Singularities surfaced**: alpha_m / alpha_n are left unpatched at
//!   V = 25 / V = 10 mV; NaN propagates rather than being silently fixed
//! - **Solver-agnostic**: the model hands f, y0 and the grid to a generic
//!   integrator and has no opinion about the scheme
//!
//! ## Example
//!
//! ```
//! use axonsim::{simulate, HodgkinHuxleyModel, TimeGrid};
//!
//! let model = HodgkinHuxleyModel::default();
//! let traj = simulate(&model, &TimeGrid::default());
//!
//! // The first stimulus pulse provokes an action potential
//! assert!(traj.voltage_max(0.0..5.0) > 40.0);
//! ```

// The membrane model: constants, rates, stimulus, derivative function
pub mod model;
pub use model::{h_inf, input_stimulus, m_inf, n_inf, HodgkinHuxleyModel, State};

// Generic fixed-step ODE integration
pub mod solver;
pub use solver::{rk4, TimeGrid};

// Recorded runs: spike scan and export
pub mod trajectory;
pub use trajectory::{simulate, simulate_from, Trajectory, TrajectorySample};

// Error types
mod error;
pub use error::{AxonError, Result};
