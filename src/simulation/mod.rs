pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod factory;
pub mod boundary;
pub mod sim_loop;
