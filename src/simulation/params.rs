//! Physical constants and runtime parameters for the simulation
//!
//! `Parameters` holds the values the integrator reads every step:
//! - gravitational constant `g`,
//! - fixed step size `dt` (one simulated day by default),
//! - the distance unit `au` used to place bodies
//!
//! Display scale lives in `visualization::projection`, not here.

use crate::error::{Error, Result};

/// Gravitational constant (SI)
pub const G: f64 = 6.6743e-11;

/// Distance unit used to lay out the scenario.
/// Kept at the reference program's literal; see DESIGN.md
pub const AU: f64 = 1.495978707e19;

pub const SECONDS_PER_DAY: f64 = 3600.0 * 24.0;

/// Default step: one simulated day
pub const TIMESTEP: f64 = SECONDS_PER_DAY;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub dt: f64, // step size (s)
    pub au: f64, // distance unit (m)
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: G,
            dt: TIMESTEP,
            au: AU,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<()> {
        if !(self.g.is_finite() && self.g > 0.0) {
            return Err(Error::InvalidParam(format!("G must be finite and > 0, got {}", self.g)));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(Error::InvalidParam(format!("timestep must be finite and > 0, got {}", self.dt)));
        }
        if !(self.au.is_finite() && self.au > 0.0) {
            return Err(Error::InvalidParam(format!("au must be finite and > 0, got {}", self.au)));
        }
        Ok(())
    }
}
