//! Force contributors for the n-body engine
//!
//! Defines the `Force` trait and the direct pairwise Newtonian gravity term.
//! Forces are evaluated against a read-only snapshot of the system; nothing
//! here mutates a body.

use crate::error::{Error, Result};
use crate::simulation::states::{NVec2, System};

/// Collection of force terms (gravity, drag, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute net forces for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, sys: &System, out: &mut [NVec2]) -> Result<()> {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(sys, out)?;
        }
        Ok(())
    }
}

/// Trait for force sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn force(&self, sys: &System, out: &mut [NVec2]) -> Result<()>;
}

/// Direct Newtonian gravity, no softening.
/// Every ordered pair (i, j) with i != j is evaluated; a body never
/// interacts with itself because pairs are excluded by index.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Force for NewtonianGravity {
    fn force(&self, sys: &System, out: &mut [NVec2]) -> Result<()> {
        for (i, bi) in sys.bodies.iter().enumerate() {
            for (j, bj) in sys.bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                out[i] += bi
                    .gravitational_force_from(bj, self.g)
                    .map_err(|_| Error::CoincidentBodies { a: i, b: j })?;
            }
        }
        Ok(())
    }
}
