//! Build fresh simulation generations from configuration
//!
//! Takes a validated body count and mass source and produces a new
//! `Generation`:
//! - masses, either sampled or user supplied
//! - positions scattered around the viewport center
//! - small random velocities with the center-of-mass velocity removed
//! - one evenly spaced hue per body
//!
//! A factory is reused on every restart, so it never reads or keeps a
//! previous generation.

use log::debug;
use rand::Rng;

use crate::configuration::config::{validate_body_count, BodyConfig, ConfigError, ScenarioConfig, RANDOM_MASS_RANGE};
use crate::simulation::params::Viewport;
use crate::simulation::states::{Body, Generation, MassMode, NVec2, Rgb, Trail};

/// Half-width of the square around the viewport center bodies start in
pub const SPAWN_OFFSET: f64 = 200.0;
/// Largest initial speed per axis before the COM correction
pub const MAX_INITIAL_SPEED: f64 = 0.5;

const SATURATION: f64 = 0.9;
const VALUE: f64 = 0.9;

/// Where the masses of a new generation come from
#[derive(Debug, Clone, PartialEq)]
pub enum MassSource {
    Random,                 // uniform in 1000..=3000 per body, redrawn every restart
    Manual(Vec<BodyConfig>), // one entry per body
}

impl MassSource {
    pub fn mode(&self) -> MassMode {
        match self {
            MassSource::Random => MassMode::Random,
            MassSource::Manual(_) => MassMode::Manual,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SystemFactory {
    count: usize,
    masses: MassSource,
    center: NVec2,
    colors: Vec<Rgb>,
}

impl SystemFactory {
    /// Factory for `count` bodies centered in `viewport`
    ///
    /// Range checks for user input live in the configuration layer; this
    /// only refuses what would break the physics (bad count, mass <= 0).
    pub fn new(count: usize, masses: MassSource, viewport: Viewport) -> Result<Self, ConfigError> {
        validate_body_count(count)?;
        if let MassSource::Manual(bodies) = &masses {
            if bodies.len() != count {
                return Err(ConfigError::MassCountMismatch {
                    expected: count,
                    found: bodies.len(),
                });
            }
            for (index, b) in bodies.iter().enumerate() {
                if !(b.m.is_finite() && b.m > 0.0) {
                    return Err(ConfigError::InvalidMass { index, mass: b.m });
                }
            }
        }
        if viewport.width == 0 || viewport.height == 0 {
            return Err(ConfigError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            count,
            masses,
            center: viewport.center(),
            colors: palette(count),
        })
    }

    /// Validate a scenario and build its factory
    pub fn from_config(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let masses = if cfg.bodies.random_masses {
            MassSource::Random
        } else {
            MassSource::Manual(cfg.bodies.masses.clone())
        };
        Self::new(cfg.bodies.count, masses, cfg.viewport())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mass_mode(&self) -> MassMode {
        self.masses.mode()
    }

    /// Build a brand-new generation tagged with `id`, each trail holding
    /// at most `trail_length` positions
    ///
    /// Draw order from `rng`: masses (random mode only), then every
    /// position, then every velocity.
    pub fn build<R: Rng + ?Sized>(&self, id: u64, trail_length: usize, rng: &mut R) -> Generation {
        let n = self.count;

        let masses: Vec<f64> = match &self.masses {
            MassSource::Random => (0..n).map(|_| rng.gen_range(RANDOM_MASS_RANGE)).collect(),
            MassSource::Manual(bodies) => bodies.iter().map(|b| b.m).collect(),
        };

        let mut positions: Vec<NVec2> = (0..n)
            .map(|_| {
                let dx = rng.gen_range(-SPAWN_OFFSET..=SPAWN_OFFSET);
                let dy = rng.gen_range(-SPAWN_OFFSET..=SPAWN_OFFSET);
                self.center + NVec2::new(dx, dy)
            })
            .collect();

        let mut velocities: Vec<NVec2> = (0..n)
            .map(|_| {
                let vx = rng.gen_range(-1.0_f64..=1.0) * MAX_INITIAL_SPEED;
                let vy = rng.gen_range(-1.0_f64..=1.0) * MAX_INITIAL_SPEED;
                NVec2::new(vx, vy)
            })
            .collect();

        // Explicit initial state from the scenario wins over the samples
        if let MassSource::Manual(bodies) = &self.masses {
            for (i, b) in bodies.iter().enumerate() {
                if let Some([x, y]) = b.x {
                    positions[i] = NVec2::new(x, y);
                }
                if let Some([vx, vy]) = b.v {
                    velocities[i] = NVec2::new(vx, vy);
                }
            }
        }

        remove_com_velocity(&masses, &mut velocities);

        let bodies: Vec<Body> = (0..n)
            .map(|i| Body {
                position: positions[i],
                velocity: velocities[i],
                mass: masses[i],
                color: self.colors[i],
                trail: Trail::new(trail_length),
            })
            .collect();

        debug!("built generation {id} with {n} bodies, total mass {:.1}", masses.iter().sum::<f64>());

        Generation {
            id,
            bodies,
            mass_mode: self.masses.mode(),
            t: 0.0,
        }
    }
}

/// Subtract the mass-weighted mean velocity so total momentum is zero
pub fn remove_com_velocity(masses: &[f64], velocities: &mut [NVec2]) {
    let total_mass: f64 = masses.iter().sum();
    if total_mass <= 0.0 {
        return;
    }
    let v_com = masses
        .iter()
        .zip(velocities.iter())
        .fold(NVec2::zeros(), |acc, (m, v)| acc + *v * *m)
        / total_mass;

    for v in velocities.iter_mut() {
        *v -= v_com;
    }
}

/// `n` evenly spaced hues at fixed saturation and value, body order
pub fn palette(n: usize) -> Vec<Rgb> {
    (0..n)
        .map(|i| {
            let hue = i as f64 / n as f64;
            let (r, g, b) = hsv_to_rgb(hue, SATURATION, VALUE);
            // truncate, never round
            Rgb((255.0 * r) as u8, (255.0 * g) as u8, (255.0 * b) as u8)
        })
        .collect()
}

/// HSV to RGB, all components in [0, 1]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
