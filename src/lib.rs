pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod error;

pub use simulation::states::{Body, System, NVec2, Rgb};
pub use simulation::engine::Simulation;
pub use simulation::forces::{Force, ForceSet, NewtonianGravity};
pub use simulation::integrator::symplectic_euler;
pub use simulation::params::{Parameters, AU, G, SECONDS_PER_DAY, TIMESTEP};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, DisplayConfig, BodyConfig};

pub use visualization::projection::Projection;
#[cfg(feature = "visualization")]
pub use visualization::vis2d::run_2d;

pub use error::{Error, Result};
