pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, Generation, MassMode, NVec2, Rgb, Trail};
pub use simulation::params::{Parameters, Viewport};
pub use simulation::engine::Engine;
pub use simulation::forces::{pair_force, Acceleration, AccelSet, OrderedPairGravity, SymmetricPairGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::factory::{MassSource, SystemFactory};
pub use simulation::boundary::BoundaryMonitor;
pub use simulation::sim_loop::{BodySnapshot, SimulationLoop, Snapshot, StepOutcome};

pub use configuration::config::{ConfigError, EngineConfig, ParametersConfig, ViewportConfig, BodyConfig, BodiesConfig, ScenarioConfig};
pub use configuration::prompt::prompt_bodies;

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_gravity, bench_step};
