//! Channel Gating Kinetics - Voltage-Dependent Rate Functions
//!
//! The six alpha/beta rate constants (1/ms) from the original
//! Hodgkin-Huxley squid-axon fit, in the V_rest = 0 mV convention,
//! plus the steady-state gating values derived from them.
//!
//! ## Note on singularities
//!
//! `alpha_m` and `alpha_n` have removable singularities at V = 25 mV and
//! V = 10 mV (0/0 as exp(x) - 1 -> 0). The reference formulation does not
//! special-case these voltages and neither do we: evaluation at exactly
//! the singular voltage yields NaN, which propagates. The analytic limits
//! (1.0 and 0.1) are approached smoothly from both sides.

/// Sodium activation opening rate (1/ms)
///
/// Singular at exactly V = 25 (limit value 1.0, not patched).
pub fn alpha_m(v: f64) -> f64 {
    0.1 * (25.0 - v) / (((25.0 - v) / 10.0).exp() - 1.0)
}

/// Sodium activation closing rate (1/ms)
pub fn beta_m(v: f64) -> f64 {
    4.0 * (-v / 18.0).exp()
}

/// Sodium inactivation opening rate (1/ms)
pub fn alpha_h(v: f64) -> f64 {
    0.07 * (-v / 20.0).exp()
}

/// Sodium inactivation closing rate (1/ms)
pub fn beta_h(v: f64) -> f64 {
    1.0 / (1.0 + (-(30.0 - v) / 10.0).exp())
}

/// Potassium activation opening rate (1/ms)
///
/// Singular at exactly V = 10 (limit value 0.1, not patched).
pub fn alpha_n(v: f64) -> f64 {
    0.01 * (10.0 - v) / (((10.0 - v) / 10.0).exp() - 1.0)
}

/// Potassium activation closing rate (1/ms)
pub fn beta_n(v: f64) -> f64 {
    0.125 * (-v / 80.0).exp()
}

/// Equilibrium potassium activation at voltage `v`
pub fn n_inf(v: f64) -> f64 {
    alpha_n(v) / (alpha_n(v) + beta_n(v))
}

/// Equilibrium sodium activation at voltage `v`
pub fn m_inf(v: f64) -> f64 {
    alpha_m(v) / (alpha_m(v) + beta_m(v))
}

/// Equilibrium sodium inactivation at voltage `v`
pub fn h_inf(v: f64) -> f64 {
    alpha_h(v) / (alpha_h(v) + beta_h(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_m_finite_positive_below_singularity() {
        for v in [-50.0, -10.0, 0.0, 12.5, 24.0, 24.9] {
            let a = alpha_m(v);
            assert!(a.is_finite() && a > 0.0, "alpha_m({v}) = {a}");
        }
    }

    #[test]
    fn test_alpha_m_limit_at_25() {
        // 0.1 x / (exp(x/10) - 1) -> 1.0 as x -> 0, from both sides
        assert!((alpha_m(24.999) - 1.0).abs() < 1e-3);
        assert!((alpha_m(25.001) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_alpha_n_limit_at_10() {
        assert!((alpha_n(9.999) - 0.1).abs() < 1e-4);
        assert!((alpha_n(10.001) - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_singular_voltages_unpatched() {
        // Pins the reference behavior: 0/0 at the exact singular voltage
        assert!(alpha_m(25.0).is_nan());
        assert!(alpha_n(10.0).is_nan());
    }

    #[test]
    fn test_steady_states_in_open_unit_interval() {
        for x in [n_inf(0.0), m_inf(0.0), h_inf(0.0)] {
            assert!(x > 0.0 && x < 1.0, "steady state out of (0,1): {x}");
        }
    }

    #[test]
    fn test_steady_state_known_values() {
        // alpha_n(0) = 0.1/(e - 1), beta_n(0) = 0.125
        let a_n = 0.1 / (1.0_f64.exp() - 1.0);
        assert!((n_inf(0.0) - a_n / (a_n + 0.125)).abs() < 1e-12);
        // beta_h(0) = 1/(1 + e^{-3})
        assert!((h_inf(0.0) - 0.07 / (0.07 + 1.0 / (1.0 + (-3.0_f64).exp()))).abs() < 1e-12);
    }
}
