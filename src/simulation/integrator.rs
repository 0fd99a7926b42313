//! Fixed-step time integrator for the N-body system
//!
//! Symplectic Euler driven by a `ForceSet` and `Parameters`:
//! v_n+1 = v_n + (F_n / m) dt, then x_n+1 = x_n + v_n+1 dt

use tracing::trace;

use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{is_finite, NVec2, System};
use crate::error::{Error, Result};

/// Advance the system by one step.
///
/// All forces are computed from the pre-step positions before any body is
/// touched, so the result does not depend on the order bodies are stored or
/// updated in. On any error (coincident bodies, or a step that would leave
/// the finite domain) the system is left unchanged.
pub fn symplectic_euler(sys: &mut System, forces: &ForceSet, params: &Parameters) -> Result<()> {
    let n = sys.bodies.len();
    let dt = params.dt;

    // f[i] holds the net force on body i at time t_n
    let mut f = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&*sys, &mut f)?;

    // Kick then drift into a scratch buffer, using the freshly kicked velocity
    let next: Vec<(NVec2, NVec2)> = sys
        .bodies
        .iter()
        .zip(f.iter())
        .map(|(b, fi)| b.stepped(*fi, dt))
        .collect();

    if let Some(index) = next.iter().position(|(x, v)| !(is_finite(x) && is_finite(v))) {
        return Err(Error::NonFinite { index });
    }

    for (i, (b, (x, v))) in sys.bodies.iter_mut().zip(next).enumerate() {
        b.commit(x, v);
        trace!(body = i, x = x.x, y = x.y, "committed");
    }

    sys.t += dt;
    sys.steps += 1;
    Ok(())
}
