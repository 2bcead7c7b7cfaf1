//! # Hodgkin-Huxley Membrane Model
//!
//! The coupled four-variable ODE model of a space-clamped squid axon:
//! membrane voltage V plus the gating variables n (potassium activation),
//! m (sodium activation) and h (sodium inactivation).
//!
//! ## Pieces
//!
//! - **rates**: the six voltage-dependent alpha/beta rate functions and
//!   the steady-state gating values built from them
//! - **stimulus**: the fixed two-pulse injected-current schedule
//! - **membrane**: constants + the pure derivative function (the vector
//!   field handed to the solver)
//!
//! The model never mutates state itself; it is a pure map from
//! (state, time) to derivative, evaluated repeatedly by [`crate::solver`].

mod membrane;
pub use membrane::{HodgkinHuxleyModel, State};

pub mod rates;
pub use rates::{h_inf, m_inf, n_inf};

mod stimulus;
pub use stimulus::input_stimulus;
