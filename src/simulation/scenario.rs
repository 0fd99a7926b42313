//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - the validated `Simulation` (bodies at t = 0, parameters, forces)
//! - the world-to-pixel `Projection` used by the viewer
//! - the display settings (window size, frame rate)

use crate::configuration::config::{BodyConfig, ScenarioConfig, DisplayConfig};
use crate::error::Result;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};
use crate::visualization::projection::Projection;

pub struct Scenario {
    pub simulation: Simulation,
    pub projection: Projection,
    pub display: DisplayConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        cfg.display.validate()?;

        let parameters = Parameters {
            g: cfg.parameters.g,
            dt: cfg.parameters.timestep,
            au: cfg.parameters.au,
        };

        // Bodies: map `BodyConfig` -> runtime `Body`, AU -> meters
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                let body = Body::new(
                    bc.name.clone(),
                    NVec2::new(bc.x[0], bc.x[1]) * parameters.au,
                    NVec2::new(bc.v[0], bc.v[1]),
                    bc.m,
                )
                .with_display(bc.radius, bc.color);
                if bc.star { body.as_star() } else { body }
            })
            .collect();

        let projection = Projection::centered(
            cfg.display.scale / parameters.au,
            cfg.display.width as f64,
            cfg.display.height as f64,
        );
        let simulation = Simulation::new(bodies, parameters)?;

        Ok(Self {
            simulation,
            projection,
            display: cfg.display,
        })
    }

    /// The built-in star + four planets scenario
    pub fn solar_system() -> Result<Self> {
        Self::build_scenario(ScenarioConfig::solar_system())
    }
}
