use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::factory::{MassSource, SystemFactory};
use crate::simulation::forces::{Acceleration, OrderedPairGravity, SymmetricPairGravity};
use crate::simulation::params::{Parameters, Viewport};
use crate::simulation::sim_loop::SimulationLoop;
use crate::simulation::states::{Body, Generation, MassMode, NVec2, Rgb};

/// Helper to build a deterministic generation of size `n` around the viewport center
fn make_generation(n: usize, params: &Parameters) -> Generation {
    let center = Viewport::default().center();
    let bodies = (0..n)
        .filter_map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = center + NVec2::new((i_f * 0.37).sin() * 200.0, (i_f * 0.13).cos() * 200.0);
            Body::new(x, NVec2::zeros(), 1000.0 + i_f, Rgb(255, 255, 255), params.trail_length).ok()
        })
        .collect();

    Generation {
        id: 0,
        bodies,
        mass_mode: MassMode::Manual,
        t: 0.0,
    }
}

/// Time ordered-pair against symmetric gravity for growing body counts
pub fn bench_gravity() {
    let ns = [2, 5, 10, 100, 400, 1600];
    let params = Parameters::default();

    let ordered = OrderedPairGravity {
        G: params.G,
        softening: params.softening,
    };
    let symmetric = SymmetricPairGravity {
        G: params.G,
        softening: params.softening,
    };

    for n in ns {
        let sys = make_generation(n, &params);
        let mut out = vec![NVec2::zeros(); n];
        let reps = (200_000 / (n * n)).max(1);

        // Warm up
        ordered.acceleration(&sys, &mut out);
        symmetric.acceleration(&sys, &mut out);

        let t0 = Instant::now();
        for _ in 0..reps {
            out.iter_mut().for_each(|a| *a = NVec2::zeros());
            ordered.acceleration(&sys, &mut out);
        }
        let dt_ordered = t0.elapsed().as_secs_f64() / reps as f64;

        let t1 = Instant::now();
        for _ in 0..reps {
            out.iter_mut().for_each(|a| *a = NVec2::zeros());
            symmetric.acceleration(&sys, &mut out);
        }
        let dt_symmetric = t1.elapsed().as_secs_f64() / reps as f64;

        println!("N = {n:5}, ordered = {:10.3} us, symmetric = {:10.3} us", dt_ordered * 1e6, dt_symmetric * 1e6);
    }
}

/// Time full loop steps (integrate + boundary check + restarts) per body count
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() {
    println!("N,ordered_us,symmetric_us");

    let steps = 10_000;
    for n in 2..=10 {
        let mut row = Vec::with_capacity(2);
        for symmetric_forces in [false, true] {
            let params = Parameters {
                seed: Some(42),
                ..Parameters::default()
            };
            let Ok(factory) = SystemFactory::new(n, MassSource::Random, Viewport::default()) else {
                continue;
            };
            let mut sim = SimulationLoop::new(factory, params, Viewport::default(), Engine { symmetric_forces });

            let t0 = Instant::now();
            for _ in 0..steps {
                sim.step();
            }
            row.push(t0.elapsed().as_secs_f64() * 1e6 / steps as f64);
        }
        if let [ordered, symmetric] = row[..] {
            println!("{},{:.3},{:.3}", n, ordered, symmetric);
        }
    }
}
