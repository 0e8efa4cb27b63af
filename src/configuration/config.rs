//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – global engine options (force evaluation variant)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`ViewportConfig`]   – visible region and frame rate
//! - [`BodiesConfig`]     – body count and how masses are chosen
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Only `bodies` is required, everything else falls back to the defaults
//! in [`crate::simulation::params`]:
//!
//! ```yaml
//! engine:
//!   symmetric_forces: false # true -> each pair once, force negated
//!
//! parameters:
//!   G: 6.6743e-2            # gravitational constant
//!   softening: 10.0         # added squared to every pair distance
//!   dt: 1.0                 # fixed step size
//!   trail_length: 100
//!   margin: 100.0
//!   radius: 8.0
//!   seed: 42                # optional, omit for a fresh run every time
//!
//! viewport:
//!   width: 800
//!   height: 800
//!   fps: 60.0
//!
//! bodies:
//!   count: 2
//!   random_masses: false
//!   masses:
//!     - m: 1000.0
//!       x: [ 250.0, 400.0 ] # optional, sampled when absent
//!       v: [ 0.0, 0.3 ]     # optional, sampled when absent
//!     - m: 1000.0
//! ```
//!
//! [`ScenarioConfig::validate`] rejects anything outside the accepted
//! ranges before a simulation is built.

use std::ops::RangeInclusive;

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::params::{self, Parameters, Viewport};

pub const BODY_COUNT_RANGE: RangeInclusive<usize> = 2..=10;
pub const MANUAL_MASS_RANGE: RangeInclusive<f64> = 100.0..=10000.0;
pub const RANDOM_MASS_RANGE: RangeInclusive<f64> = 1000.0..=3000.0;

/// Rejected configuration, raised before any simulation state exists
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Number of bodies must be between 2 and 10, got {count}")]
    InvalidBodyCount { count: usize },

    #[error("Mass of body {} must be between 100 and 10000, got {mass}", .index + 1)]
    InvalidMass { index: usize, mass: f64 },

    #[error("mass must be a positive number, got {mass}")]
    NonPositiveMass { mass: f64 },

    #[error("expected {expected} masses, found {found}")]
    MassCountMismatch { expected: usize, found: usize },

    #[error("viewport must have a positive size, got {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("parameter `{name}` is out of range: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub fn validate_body_count(count: usize) -> Result<usize, ConfigError> {
    if BODY_COUNT_RANGE.contains(&count) {
        Ok(count)
    } else {
        Err(ConfigError::InvalidBodyCount { count })
    }
}

/// Check a user-supplied mass for body `index`
pub fn validate_manual_mass(index: usize, mass: f64) -> Result<f64, ConfigError> {
    if MANUAL_MASS_RANGE.contains(&mass) {
        Ok(mass)
    } else {
        Err(ConfigError::InvalidMass { index, mass })
    }
}

/// Engine-level configuration
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub symmetric_forces: bool, // `true` - O(n^2/2) pairs with negation, `false` - every ordered pair
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,              // gravitational constant
    pub softening: f64,      // softening - prevent singular forces at very small separations
    pub dt: f64,             // time step size
    pub trail_length: usize, // positions kept per body for drawing
    pub margin: f64,         // exit margin around the viewport
    pub radius: f64,         // drawn body radius
    pub seed: Option<u64>,   // deterministic seed to make runs reproducable
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            G: p.G,
            softening: p.softening,
            dt: p.dt,
            trail_length: p.trail_length,
            margin: p.margin,
            radius: p.radius,
            seed: p.seed,
        }
    }
}

/// Visible region and target frame rate
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: params::WIDTH,
            height: params::HEIGHT,
            fps: params::FPS,
        }
    }
}

/// One manually configured body
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub m: f64,                // Mass of the body
    pub x: Option<[f64; 2]>,   // Initial position, sampled around the center when absent
    pub v: Option<[f64; 2]>,   // Initial velocity, sampled when absent
}

impl BodyConfig {
    pub fn with_mass(m: f64) -> Self {
        Self { m, x: None, v: None }
    }
}

/// How many bodies to create and how their masses are chosen
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodiesConfig {
    pub count: usize,
    pub random_masses: bool,
    #[serde(default)]
    pub masses: Vec<BodyConfig>, // one entry per body when `random_masses` is false
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    pub bodies: BodiesConfig,
}

impl ScenarioConfig {
    /// Scenario with default engine, parameters and viewport
    pub fn from_bodies(bodies: BodiesConfig) -> Self {
        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig::default(),
            viewport: ViewportConfig::default(),
            bodies,
        }
    }

    pub fn from_yaml_str(s: &str) -> anyhow::Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        Ok(cfg)
    }

    /// Check every range the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.bodies;
        validate_body_count(b.count)?;
        if !b.random_masses {
            if b.masses.len() != b.count {
                return Err(ConfigError::MassCountMismatch {
                    expected: b.count,
                    found: b.masses.len(),
                });
            }
            for (i, body) in b.masses.iter().enumerate() {
                validate_manual_mass(i, body.m)?;
            }
        }

        let vp = &self.viewport;
        if vp.width == 0 || vp.height == 0 {
            return Err(ConfigError::InvalidViewport {
                width: vp.width,
                height: vp.height,
            });
        }
        if !(vp.fps > 0.0) {
            return Err(ConfigError::InvalidParameter { name: "fps", value: vp.fps });
        }

        let p = &self.parameters;
        let positive = [("G", p.G), ("softening", p.softening), ("dt", p.dt)];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        if p.trail_length == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "trail_length",
                value: 0.0,
            });
        }
        if !(p.margin.is_finite() && p.margin >= 0.0) {
            return Err(ConfigError::InvalidParameter { name: "margin", value: p.margin });
        }
        if !(p.radius.is_finite() && p.radius > 0.0) {
            return Err(ConfigError::InvalidParameter { name: "radius", value: p.radius });
        }
        Ok(())
    }

    pub fn parameters(&self) -> Parameters {
        let p = &self.parameters;
        Parameters {
            G: p.G,
            softening: p.softening,
            dt: p.dt,
            trail_length: p.trail_length,
            margin: p.margin,
            radius: p.radius,
            seed: p.seed,
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport.width, self.viewport.height)
    }
}
