//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and the fixed step size
//! - [`DisplayConfig`]    – window size, pixels per AU and frame rate
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Positions are given in AU and scaled by `parameters.au`; velocities are
//! in m/s. `parameters`, `display` and the per-body `name`, `color` and
//! `star` keys are optional.
//!
//! ```yaml
//! parameters:
//!   G: 6.6743e-11
//!   au: 1.495978707e19
//!   timestep: 86400.0
//!
//! display:
//!   width: 800
//!   height: 800
//!   scale: 250.0            # pixels per AU
//!   fps: 60.0
//!
//! bodies:
//!   - name: Sun
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     m: 1.98892e30
//!     radius: 30.0
//!     color: [255, 255, 0]
//!     star: true
//!   - name: Earth
//!     x: [-1.0, 0.0]
//!     v: [0.0, 29783.0]
//!     m: 5.9722e24
//!     radius: 16.0
//!     color: [0, 0, 255]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::simulation::params::{AU, G, TIMESTEP};

/// Global physical parameters for a scenario
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64,        // gravitational constant
    pub au: f64,       // distance unit body positions are expressed in (m)
    pub timestep: f64, // seconds per step
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: G,
            au: AU,
            timestep: TIMESTEP,
        }
    }
}

/// Window and projection settings, only read by the viewer
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: f32,
    pub height: f32,
    pub scale: f64, // pixels per AU
    pub fps: f64,   // physics steps per real second
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            scale: 250.0,
            fps: 60.0,
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0) {
            return Err(Error::InvalidParam(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(Error::InvalidParam(format!("scale must be finite and > 0, got {}", self.scale)));
        }
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(Error::InvalidParam(format!("fps must be finite and > 0, got {}", self.fps)));
        }
        Ok(())
    }
}

/// Configuration for a single body's initial state
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: String,
    pub x: [f64; 2], // initial position in AU
    pub v: [f64; 2], // initial velocity in m/s
    pub m: f64,      // mass in kg
    pub radius: f64, // display radius in pixels
    #[serde(default = "white")]
    pub color: [u8; 3],
    #[serde(default)]
    pub star: bool,
}

fn white() -> [u8; 3] {
    [255, 255, 255]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // physical constants and step size
    #[serde(default)]
    pub display: DisplayConfig, // viewer settings
    pub bodies: Vec<BodyConfig>, // bodies that define the initial state of the system
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Star plus the four inner planets, all starting on the negative x axis
    pub fn solar_system() -> Self {
        let body = |name: &str, x: f64, vy: f64, m: f64, radius: f64, color: [u8; 3]| BodyConfig {
            name: name.to_string(),
            x: [x, 0.0],
            v: [0.0, vy],
            m,
            radius,
            color,
            star: false,
        };

        let mut sun = body("Sun", 0.0, 0.0, 1.98892e30, 30.0, [255, 255, 0]);
        sun.star = true;

        Self {
            parameters: ParametersConfig::default(),
            display: DisplayConfig::default(),
            bodies: vec![
                sun,
                body("Earth", -1.0, 29_783.0, 5.9722e24, 16.0, [0, 0, 255]),
                body("Mars", -1.524, 24_077.0, 6.39e23, 12.0, [255, 76, 5]),
                body("Mercury", -0.387, -47_400.0, 3.30e23, 8.0, [80, 71, 81]),
                body("Venus", -0.723, -35_020.0, 4.8685e24, 14.0, [255, 255, 255]),
            ],
        }
    }
}
