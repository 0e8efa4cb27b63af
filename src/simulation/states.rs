//! Core state types for the N-body simulation.
//!
//! Defines the 2D body and generation structs:
//! - `Body` using `NVec2` for position and velocity, plus its color and trail
//! - `Trail` a bounded position history used only for drawing
//! - `Generation` the full set of bodies of one run between restarts
//!
//! Positions live in screen space (pixels, origin top-left, y down).

use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::configuration::config::ConfigError;
pub type NVec2 = Vector2<f64>;

/// 8-bit RGB color assigned to a body at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Bounded FIFO history of past positions, oldest first
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<NVec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a position, evicting the oldest one once over capacity
    pub fn push(&mut self, p: NVec2) {
        self.points.push_back(p);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.back()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NVec2> + '_ {
        self.points.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub position: NVec2, // position
    pub velocity: NVec2, // velocity, per step
    pub(crate) mass: f64, // mass, fixed for the body's lifetime
    pub color: Rgb,
    pub trail: Trail,
}

impl Body {
    /// Build a body, rejecting a mass that is not a positive finite number
    pub fn new(position: NVec2, velocity: NVec2, mass: f64, color: Rgb, trail_length: usize) -> Result<Self, ConfigError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ConfigError::NonPositiveMass { mass });
        }
        Ok(Self {
            position,
            velocity,
            mass,
            color,
            trail: Trail::new(trail_length),
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }
}

/// How the masses of a generation were chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassMode {
    Random,
    Manual,
}

/// One run of the simulation between restarts
#[derive(Debug, Clone)]
pub struct Generation {
    pub id: u64,           // increases by one on every restart
    pub bodies: Vec<Body>, // fixed count for the generation's lifetime
    pub mass_mode: MassMode,
    pub t: f64, // simulated time since creation
}

impl Generation {
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(Body::mass).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.momentum())
    }

    pub fn center_of_mass(&self) -> NVec2 {
        let total = self.total_mass();
        if total == 0.0 {
            return NVec2::zeros();
        }
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.position * b.mass())
            / total
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}
