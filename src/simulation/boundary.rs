//! Exit detection for the restart policy

use crate::simulation::params::Viewport;
use crate::simulation::states::{Body, Generation};

/// Watches whether a generation has left the viewport plus a margin
#[derive(Debug, Clone, Copy)]
pub struct BoundaryMonitor {
    pub viewport: Viewport,
    pub margin: f64,
}

impl BoundaryMonitor {
    pub fn new(viewport: Viewport, margin: f64) -> Self {
        Self { viewport, margin }
    }

    /// Strictly inside `(-margin, width + margin) x (-margin, height + margin)`
    ///
    /// A body sitting exactly on the extended edge is not inside.
    pub fn is_inside(&self, body: &Body) -> bool {
        let w = self.viewport.width as f64;
        let h = self.viewport.height as f64;
        let p = body.position;
        (0.0 - self.margin < p.x && p.x < w + self.margin)
            && (0.0 - self.margin < p.y && p.y < h + self.margin)
    }

    /// True once no body is inside the extended viewport
    pub fn all_bodies_outside(&self, sys: &Generation) -> bool {
        for body in &sys.bodies {
            if self.is_inside(body) {
                return false;
            }
        }
        true
    }
}
