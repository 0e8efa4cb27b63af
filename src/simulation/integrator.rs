//! Fixed-step time integration for the N-body generation
//!
//! A single semi-implicit Euler step driven by `AccelSet` and `Parameters`

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{Generation, NVec2};

/// Advance the generation by one step
///
/// All accelerations come from the same position snapshot. Velocities of
/// every body are updated first, then positions using the new velocities;
/// each new position is appended to the body's trail.
pub fn euler_integrator(sys: &mut Generation, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.dt;

    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*sys, &mut accels);

    // v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        b.velocity += dt * *a;
    }

    // x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.position += dt * b.velocity;
        b.trail.push(b.position);
    }

    sys.t += dt;
}
