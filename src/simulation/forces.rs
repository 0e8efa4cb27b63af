//! Force / acceleration contributors for the n-body engine
//!
//! Defines the pairwise softened gravity law, the `Acceleration` trait and
//! the two ways of summing it over a generation: every ordered pair (the
//! default) or each unordered pair once with the force negated for the
//! partner

use crate::simulation::states::{Body, Generation, NVec2};

/// Gravitational force that `b2` exerts on `b1`
///
/// The softening term is added to the squared distance, so coincident
/// bodies give a finite (zero-direction) force instead of a division by zero.
/// The direction is taken from `atan2(dy, dx)`.
#[allow(non_snake_case)]
pub fn pair_force(b1: &Body, b2: &Body, G: f64, softening: f64) -> NVec2 {
    let dx = b2.position.x - b1.position.x;
    let dy = b2.position.y - b1.position.y;
    let distance_sq = dx * dx + dy * dy + softening * softening;

    let force = G * b1.mass() * b2.mass() / distance_sq;
    let angle = dy.atan2(dx);

    NVec2::new(force * angle.cos(), force * angle.sin())
}

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys` at their current positions
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &Generation, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Position-dependent acceleration sources operating on a [`Generation`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &Generation, out: &mut [NVec2]);
}

/// Softened Newtonian gravity evaluated once per ordered pair (i, j), i != j
///
/// Each body's acceleration is the sum of `F_ij / m_i` over all other
/// bodies. Newton's third law is not used, so `n * (n - 1)` force
/// evaluations happen per call.
#[allow(non_snake_case)]
pub struct OrderedPairGravity {
    pub G: f64,         // gravitational constant
    pub softening: f64, // softening length
}

impl Acceleration for OrderedPairGravity {
    fn acceleration(&self, sys: &Generation, out: &mut [NVec2]) {
        for (i, bi) in sys.bodies.iter().enumerate() {
            let mut total = NVec2::zeros();
            for (j, bj) in sys.bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                let f = pair_force(bi, bj, self.G, self.softening);
                total += f / bi.mass();
            }
            out[i] += total;
        }
    }
}

/// Softened Newtonian gravity over each unordered pair (i, j) with i < j
///
/// The force on `j` is the negated force on `i`. Only numerically close to
/// [`OrderedPairGravity`], not bit-identical.
#[allow(non_snake_case)]
pub struct SymmetricPairGravity {
    pub G: f64,
    pub softening: f64,
}

impl Acceleration for SymmetricPairGravity {
    fn acceleration(&self, sys: &Generation, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in (i + 1)..n {
                let bj = &sys.bodies[j];
                // i is pulled along +f, j along -f
                let f = pair_force(bi, bj, self.G, self.softening);
                out[i] += f / bi.mass();
                out[j] -= f / bj.mass();
            }
        }
    }
}
