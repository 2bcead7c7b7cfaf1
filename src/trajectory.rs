//! Simulation Trajectories
//!
//! The produced artifact of a run: an ordered (t, V, n, m, h) series,
//! with a peak-detection spike scan and JSON/CSV export for downstream
//! plotting. Export refuses trajectories carrying NaN/Inf samples;
//! the integration itself never guards them.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{AxonError, Result};
use crate::model::{HodgkinHuxleyModel, State};
use crate::solver::{rk4, TimeGrid};

/// One recorded point of the trajectory
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Sample time (ms)
    pub t: f64,
    /// Membrane voltage (mV)
    pub v: f64,
    /// Potassium activation gate
    pub n: f64,
    /// Sodium activation gate
    pub m: f64,
    /// Sodium inactivation gate
    pub h: f64,
}

impl TrajectorySample {
    fn is_finite(&self) -> bool {
        self.t.is_finite()
            && self.v.is_finite()
            && self.n.is_finite()
            && self.m.is_finite()
            && self.h.is_finite()
    }
}

/// Ordered time series of membrane states
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn from_samples(samples: Vec<TrajectorySample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest voltage over `window` (half-open in t), NEG_INFINITY if none
    pub fn voltage_max(&self, window: std::ops::Range<f64>) -> f64 {
        self.samples
            .iter()
            .filter(|s| window.contains(&s.t))
            .map(|s| s.v)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest voltage over `window` (half-open in t), INFINITY if none
    pub fn voltage_min(&self, window: std::ops::Range<f64>) -> f64 {
        self.samples
            .iter()
            .filter(|s| window.contains(&s.t))
            .map(|s| s.v)
            .fold(f64::INFINITY, f64::min)
    }

    /// Times of voltage peaks above `threshold`
    ///
    /// Peak detection: above threshold, was rising, now falling.
    pub fn spike_times(&self, threshold: f64) -> Vec<f64> {
        let mut spikes = Vec::new();
        for w in self.samples.windows(3) {
            let (prev, mid, next) = (w[0], w[1], w[2]);
            if mid.v > threshold && mid.v > prev.v && mid.v >= next.v {
                spikes.push(mid.t);
            }
        }
        spikes
    }

    /// JSON snapshot of the full series
    ///
    /// Errors with [`AxonError::NonFinite`] if any sample went NaN/Inf.
    pub fn to_json(&self) -> Result<String> {
        self.check_finite()?;
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a trajectory from its JSON snapshot
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Plain column dump: header line, one row per sample
    pub fn write_csv<W: Write>(&self, mut out: W) -> Result<()> {
        self.check_finite()?;
        writeln!(out, "t_ms,v_mv,n,m,h")?;
        for s in &self.samples {
            writeln!(out, "{},{},{},{},{}", s.t, s.v, s.n, s.m, s.h)?;
        }
        Ok(())
    }

    fn check_finite(&self) -> Result<()> {
        match self.samples.iter().find(|s| !s.is_finite()) {
            Some(bad) => Err(AxonError::NonFinite { t: bad.t }),
            None => Ok(()),
        }
    }
}

/// Integrate `model` across `grid` from initial state `y0`
pub fn simulate_from(model: &HodgkinHuxleyModel, grid: &TimeGrid, y0: State) -> Trajectory {
    let f = |y: &[f64; 4], t: f64| model.derivatives(&State::from_array(*y), t).to_array();
    let samples = rk4(f, y0.to_array(), grid)
        .into_iter()
        .map(|(t, y)| TrajectorySample {
            t,
            v: y[0],
            n: y[1],
            m: y[2],
            h: y[3],
        })
        .collect();
    Trajectory::from_samples(samples)
}

/// Integrate `model` across `grid` from the V = 0 steady state
pub fn simulate(model: &HodgkinHuxleyModel, grid: &TimeGrid) -> Trajectory {
    simulate_from(model, grid, State::steady_state(0.0))
}
