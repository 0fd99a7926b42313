//! The simulation engine: owns the system state, parameters and force set
//! and advances them one fixed step at a time.

use tracing::{debug, info};

use crate::error::Result;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::{Parameters, SECONDS_PER_DAY};
use crate::simulation::states::{Body, NVec2, System};

/// A running simulation.
///
/// The body collection is fixed at construction. In the viewer this is
/// inserted as a Bevy `Resource`; the physics system is its only writer.
#[cfg_attr(feature = "visualization", derive(bevy::prelude::Resource))]
pub struct Simulation {
    system: System,
    parameters: Parameters,
    forces: ForceSet,
}

impl Simulation {
    /// Validate `bodies` and `parameters` and set up direct Newtonian gravity
    pub fn new(bodies: Vec<Body>, parameters: Parameters) -> Result<Self> {
        parameters.validate()?;
        let system = System::new(bodies)?;
        let forces = ForceSet::new().with(NewtonianGravity { g: parameters.g });

        info!(
            bodies = system.bodies.len(),
            dt = parameters.dt,
            "simulation initialised"
        );

        Ok(Self {
            system,
            parameters,
            forces,
        })
    }

    /// Advance every body by one timestep.
    ///
    /// Errors if two bodies coincide (nothing is mutated in that case) or if
    /// the step drives a body to NaN/infinity.
    pub fn advance(&mut self) -> Result<()> {
        symplectic_euler(&mut self.system, &self.forces, &self.parameters)?;
        debug!(step = self.system.steps, t = self.system.t, "advanced");
        Ok(())
    }

    /// Net force on each body for the current positions
    pub fn net_forces(&self) -> Result<Vec<NVec2>> {
        let mut out = vec![NVec2::zeros(); self.system.bodies.len()];
        self.forces.accumulate_forces(&self.system, &mut out)?;
        Ok(out)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn body(&self, i: usize) -> Option<&Body> {
        self.system.bodies.get(i)
    }

    pub fn len(&self) -> usize {
        self.system.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.system.bodies.is_empty()
    }

    pub fn star_index(&self) -> Option<usize> {
        self.system.star_index()
    }

    pub fn star(&self) -> Option<&Body> {
        self.star_index().map(|i| &self.system.bodies[i])
    }

    /// Distance from body `i` to the star.
    /// `None` if `i` is out of range, is the star, or there is no star.
    pub fn distance_to_star(&self, i: usize) -> Option<f64> {
        let s = self.star_index()?;
        if s == i {
            return None;
        }
        let body = self.body(i)?;
        Some(body.distance_to(&self.system.bodies[s]))
    }

    pub fn steps(&self) -> u64 {
        self.system.steps
    }

    /// Elapsed simulated time in seconds
    pub fn elapsed(&self) -> f64 {
        self.system.t
    }

    pub fn elapsed_days(&self) -> f64 {
        self.system.t / SECONDS_PER_DAY
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}
