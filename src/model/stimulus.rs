//! Injected Stimulus Schedule
//!
//! Fixed two-pulse current protocol: a strong 150 µA/cm² pulse over
//! (0, 5) ms to provoke an action potential, then a weaker 50 µA/cm²
//! hold over (10, 30) ms. All comparisons are strict, so the exact
//! boundary times (0, 5, 10, 30) fall through to 0.0.

/// Injected current density (µA/cm²) at simulation time `t` (ms)
pub fn input_stimulus(t: f64) -> f64 {
    if t > 0.0 && t < 5.0 {
        150.0
    } else if t > 10.0 && t < 30.0 {
        50.0
    } else {
        0.0
    }
}
