//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and softening (`G`, `softening`),
//! - fixed step size `dt`,
//! - trail capacity, exit margin and drawn body radius,
//! - optional random seed
//!
//! `Viewport` is the visible region the bodies start in and must leave
//! before a restart.

use super::states::NVec2;

pub const G: f64 = 6.67430e-2;
pub const SOFTENING: f64 = 10.0;
pub const DT: f64 = 1.0;
pub const TRAIL_LENGTH: usize = 100;
pub const MARGIN: f64 = 100.0;
pub const PARTICLE_RADIUS: f64 = 8.0;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 800;
pub const FPS: f64 = 60.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64,              // gravitational constant
    pub softening: f64,      // added squared to every pair distance
    pub dt: f64,             // step size
    pub trail_length: usize, // max positions kept per body
    pub margin: f64,         // distance past the viewport edge before a body counts as gone
    pub radius: f64,         // drawn body radius
    pub seed: Option<u64>,   // deterministic seed, None = entropy
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G,
            softening: SOFTENING,
            dt: DT,
            trail_length: TRAIL_LENGTH,
            margin: MARGIN,
            radius: PARTICLE_RADIUS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> NVec2 {
        NVec2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
