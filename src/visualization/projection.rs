//! World-to-screen projection.
//!
//! Pixel space has its origin at the top-left corner of the window with y
//! pointing down, matching what a 2D renderer is handed. The physics never
//! sees any of this.

use crate::simulation::states::{Body, NVec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub scale: f64, // pixels per meter
    pub origin: NVec2, // pixel position of the world origin
}

impl Projection {
    /// World origin at the center of a `width` x `height` window
    pub fn centered(scale: f64, width: f64, height: f64) -> Self {
        Self {
            scale,
            origin: NVec2::new(width / 2.0, height / 2.0),
        }
    }

    /// `(x * scale + origin_x, y * scale + origin_y)`
    pub fn project(&self, p: &NVec2) -> NVec2 {
        p * self.scale + self.origin
    }
}

impl Body {
    /// Pixel coordinates of this body under `projection`
    pub fn render_position(&self, projection: &Projection) -> NVec2 {
        projection.project(&self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::params::AU;

    #[test]
    fn origin_maps_to_window_center() {
        let p = Projection::centered(250.0 / AU, 800.0, 600.0);
        assert_eq!(p.project(&NVec2::zeros()), NVec2::new(400.0, 300.0));
    }

    #[test]
    fn one_au_is_250_pixels() {
        let p = Projection::centered(250.0 / AU, 800.0, 800.0);
        let px = p.project(&NVec2::new(-AU, AU));
        assert!((px.x - 150.0).abs() < 1e-9);
        assert!((px.y - 650.0).abs() < 1e-9);
    }

    #[test]
    fn body_render_position_uses_current_position() {
        let p = Projection::centered(1.0, 100.0, 100.0);
        let b = Body::new("probe", NVec2::new(10.0, -5.0), NVec2::zeros(), 1.0);
        assert_eq!(b.render_position(&p), NVec2::new(60.0, 45.0));
    }
}
