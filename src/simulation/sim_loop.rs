//! The per-frame stepping loop
//!
//! `SimulationLoop` owns the current `Generation` together with everything
//! needed to advance it and to replace it:
//! - numerical parameters (`Parameters`)
//! - the active force set (`AccelSet`)
//! - the exit check (`BoundaryMonitor`)
//! - the factory and RNG used to build new generations
//!
//! It is inserted into the viewer as a Bevy `Resource`; renderers only see
//! it through [`SimulationLoop::snapshot`].

use bevy::prelude::Resource;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::configuration::config::{ConfigError, ScenarioConfig};
use crate::simulation::boundary::BoundaryMonitor;
use crate::simulation::engine::Engine;
use crate::simulation::factory::SystemFactory;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::{Parameters, Viewport};
use crate::simulation::states::{Generation, NVec2, Rgb, Trail};

/// What happened during one call to [`SimulationLoop::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Running,   // same generation keeps going
    Restarted, // every body left, a new generation replaced the old one
}

/// Read-only view of one body for drawing
#[derive(Debug, Clone, Copy)]
pub struct BodySnapshot<'a> {
    pub position: NVec2,
    pub trail: &'a Trail, // oldest first
    pub radius: f64,
    pub color: Rgb,
}

/// Read-only view of a whole frame
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub generation: u64,
    pub bodies: Vec<BodySnapshot<'a>>,
}

#[derive(Resource)]
pub struct SimulationLoop {
    pub engine: Engine,
    pub parameters: Parameters,
    pub forces: AccelSet,
    pub monitor: BoundaryMonitor,
    factory: SystemFactory,
    rng: ChaChaRng,
    generation: Generation,
    restarts: u64,
}

impl SimulationLoop {
    /// Build the first generation from `factory`
    pub fn new(factory: SystemFactory, parameters: Parameters, viewport: Viewport, engine: Engine) -> Self {
        let mut rng = match parameters.seed {
            Some(seed) => ChaChaRng::seed_from_u64(seed),
            None => ChaChaRng::from_entropy(),
        };
        let forces = engine.build_forces(&parameters);
        let monitor = BoundaryMonitor::new(viewport, parameters.margin);
        let generation = factory.build(0, parameters.trail_length, &mut rng);

        Self {
            engine,
            parameters,
            forces,
            monitor,
            factory,
            rng,
            generation,
            restarts: 0,
        }
    }

    /// Validate a scenario and build its loop
    pub fn from_config(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        let factory = SystemFactory::from_config(cfg)?;
        Ok(Self::new(
            factory,
            cfg.parameters(),
            cfg.viewport(),
            Engine::from_config(&cfg.engine),
        ))
    }

    /// Advance exactly one step, restarting if every body has left
    pub fn step(&mut self) -> StepOutcome {
        euler_integrator(&mut self.generation, &self.forces, &self.parameters);

        if self.monitor.all_bodies_outside(&self.generation) {
            self.restart();
            info!("Simulation restarted! New initial conditions.");
            return StepOutcome::Restarted;
        }
        StepOutcome::Running
    }

    /// Replace the current generation with a freshly built one
    fn restart(&mut self) {
        let next_id = self.generation.id + 1;
        self.generation = self.factory.build(next_id, self.parameters.trail_length, &mut self.rng);
        self.restarts += 1;
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    /// Move bodies of the current generation, in body order
    ///
    /// Extra positions are ignored; the body count never changes.
    pub fn set_positions<I: IntoIterator<Item = NVec2>>(&mut self, positions: I) {
        for (body, p) in self.generation.bodies.iter_mut().zip(positions) {
            body.position = p;
        }
    }

    pub fn factory(&self) -> &SystemFactory {
        &self.factory
    }

    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let radius = self.parameters.radius;
        Snapshot {
            generation: self.generation.id,
            bodies: self
                .generation
                .bodies
                .iter()
                .map(|b| BodySnapshot {
                    position: b.position,
                    trail: &b.trail,
                    radius,
                    color: b.color,
                })
                .collect(),
        }
    }
}
