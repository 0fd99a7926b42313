//! Core state types for the N-body simulation.
//!
//! - `Body` carries physical state, presentation data and the orbit path
//! - `System` is the index-addressed arena of bodies plus elapsed time
//!
//! Bodies are never added or removed once a `System` is built, so an index
//! identifies the same body for the whole run.

use nalgebra::Vector2;

use crate::error::{Error, Result};

pub type NVec2 = Vector2<f64>;

/// RGB color, presentation only
pub type Rgb = [u8; 3];

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64, // mass (kg)
    pub star: bool, // gravitational center, only used for distance readouts
    pub radius: f64, // display radius (px)
    pub color: Rgb,
    orbit: Vec<NVec2>, // past positions, oldest first
}

impl Body {
    pub fn new(name: impl Into<String>, x: NVec2, v: NVec2, m: f64) -> Self {
        Self {
            name: name.into(),
            x,
            v,
            m,
            star: false,
            radius: 1.0,
            color: [255, 255, 255],
            orbit: Vec::new(),
        }
    }

    /// Mark this body as the star
    pub fn as_star(mut self) -> Self {
        self.star = true;
        self
    }

    pub fn with_display(mut self, radius: f64, color: Rgb) -> Self {
        self.radius = radius;
        self.color = color;
        self
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    /// Recorded positions, oldest first. Grows by one point per step.
    pub fn orbit_path(&self) -> &[NVec2] {
        &self.orbit
    }

    /// Straight-line distance to `other`
    pub fn distance_to(&self, other: &Body) -> f64 {
        separation(&self.x, &other.x)
    }

    /// Newtonian force this body feels due to `other`, with constant `g`.
    ///
    /// Zero separation has no defined direction or magnitude and is reported as
    /// [`Error::ZeroSeparation`] rather than clamped.
    pub fn gravitational_force_from(&self, other: &Body, g: f64) -> Result<NVec2> {
        let r = separation(&self.x, &other.x);
        if r == 0.0 {
            return Err(Error::ZeroSeparation);
        }

        let dx = other.x.x - self.x.x;
        let dy = other.x.y - self.x.y;
        let theta = dy.atan2(dx);
        let magnitude = g * self.m * other.m / (r * r);
        Ok(NVec2::new(magnitude * theta.cos(), magnitude * theta.sin()))
    }

    /// State after one step of net force `f` over `dt`: kick, then drift
    /// with the kicked velocity. Returns `(x, v)` without touching `self`.
    pub(crate) fn stepped(&self, f: NVec2, dt: f64) -> (NVec2, NVec2) {
        let v = self.v + (f / self.m) * dt;
        let x = self.x + v * dt;
        (x, v)
    }

    /// Move to `(x, v)` and record the new position
    pub(crate) fn commit(&mut self, x: NVec2, v: NVec2) {
        self.x = x;
        self.v = v;
        self.orbit.push(x);
    }

    pub(crate) fn is_finite(&self) -> bool {
        is_finite(&self.x) && is_finite(&self.v)
    }
}

pub(crate) fn is_finite(p: &NVec2) -> bool {
    p.iter().all(|c| c.is_finite())
}

/// Distance between two points, computed the same way everywhere so that
/// construction-time and per-step coincidence checks agree
pub(crate) fn separation(a: &NVec2, b: &NVec2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // fixed collection of bodies
    pub t: f64, // elapsed simulated time (s)
    pub steps: u64, // completed steps
}

impl System {
    /// Build a system after checking every body descriptor
    pub fn new(bodies: Vec<Body>) -> Result<Self> {
        let mut star: Option<usize> = None;
        for (i, b) in bodies.iter().enumerate() {
            if !(b.m.is_finite() && b.m > 0.0) {
                return Err(Error::InvalidBody {
                    index: i,
                    reason: format!("mass must be finite and > 0, got {}", b.m),
                });
            }
            if !b.is_finite() {
                return Err(Error::InvalidBody {
                    index: i,
                    reason: "position and velocity must be finite".to_string(),
                });
            }
            if b.star {
                if let Some(first) = star {
                    return Err(Error::MultipleStars { first, second: i });
                }
                star = Some(i);
            }
            for (j, other) in bodies.iter().enumerate().take(i) {
                if separation(&other.x, &b.x) == 0.0 {
                    return Err(Error::CoincidentBodies { a: j, b: i });
                }
            }
        }

        Ok(Self {
            bodies,
            t: 0.0,
            steps: 0,
        })
    }

    pub fn star_index(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.star)
    }
}
