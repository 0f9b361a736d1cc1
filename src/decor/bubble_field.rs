//! Floating bubble system for card containers.
//!
//! Bubbles spawn at uniform random positions inside the card's allowed
//! range, drift with independently signed axis velocities, overhang the card
//! edges by up to 40% of their own size, and swap velocities when they brush
//! each other. Randomness lives entirely in spawn; stepping is deterministic.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::decor::{Placement, random_sign, range_f32};
use crate::frame::{FrameClock, StopHandle};
use crate::physics::{self, Bounds, Element, Inset, StepPolicy};

/// Spawn-time parameter bands for a bubble field.
///
/// `Default` matches the production visuals: 40% edge overhang, horizontal
/// speeds 20-45 px/s, vertical 14-36 px/s, opacity 0.35-0.65, collision
/// reach at 90% of combined half-extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleParams {
    /// Fraction of its own size a bubble may rest past the card edge
    pub overhang: f32,
    /// Horizontal speed band (px/s); sign drawn separately
    pub speed_x: (f32, f32),
    /// Vertical speed band (px/s); sign drawn separately
    pub speed_y: (f32, f32),
    /// Render opacity band
    pub opacity: (f32, f32),
    /// Overlap fraction that triggers a velocity swap
    pub collide_ratio: f32,
    /// Frame pacing
    pub step: crate::frame::StepConfig,
}

impl Default for BubbleParams {
    fn default() -> Self {
        Self {
            overhang: 0.4,
            speed_x: (20.0, 45.0),
            speed_y: (14.0, 36.0),
            opacity: (0.35, 0.65),
            collide_ratio: 0.9,
            step: crate::frame::StepConfig::default(),
        }
    }
}

/// Owns and animates the bubbles of one card container.
pub struct BubbleField {
    elements: Vec<Element>,
    params: BubbleParams,
    clock: FrameClock,
    stop: StopHandle,
}

impl BubbleField {
    /// Spawn a field for one card. Returns the field plus the host's stop
    /// handle, or `None` when the reduced-motion preference is set or the
    /// card has no bubbles (no loop should start in either case).
    ///
    /// A degenerate (zero-sized) container collapses the spawn ranges to a
    /// point; that is acceptable, not a fault.
    pub fn spawn(
        bounds: Bounds,
        sizes: &[Vec2],
        params: BubbleParams,
        rng: &mut fastrand::Rng,
        reduced_motion: bool,
    ) -> Option<(Self, StopHandle)> {
        if reduced_motion || sizes.is_empty() {
            return None;
        }

        let inset = Inset::Overhang(params.overhang);
        let elements = sizes
            .iter()
            .map(|&size| {
                let rx = inset.range(bounds.width, size.x);
                let ry = inset.range(bounds.height, size.y);
                Element {
                    position: Vec2::new(
                        range_f32(rng, rx.min, rx.max.max(rx.min)),
                        range_f32(rng, ry.min, ry.max.max(ry.min)),
                    ),
                    velocity: Vec2::new(
                        random_sign(rng) * range_f32(rng, params.speed_x.0, params.speed_x.1),
                        random_sign(rng) * range_f32(rng, params.speed_y.0, params.speed_y.1),
                    ),
                    size,
                    opacity: range_f32(rng, params.opacity.0, params.opacity.1),
                    mass: 1.0,
                }
            })
            .collect::<Vec<_>>();

        log::debug!(
            "bubble field spawned: {} bubbles in {:.0}x{:.0}",
            elements.len(),
            bounds.width,
            bounds.height
        );

        let stop = StopHandle::new();
        let field = Self {
            elements,
            clock: FrameClock::new(params.step),
            params,
            stop: stop.clone(),
        };
        Some((field, stop))
    }

    /// Host animation callback: advance by the elapsed real time (seconds).
    ///
    /// Bounds are re-read every frame so layout changes between callbacks
    /// take effect on the next step. Once the stop handle fires this is a
    /// no-op and the host should not reschedule.
    pub fn frame(&mut self, bounds: Bounds, elapsed: f32) {
        if self.stop.is_stopped() {
            return;
        }
        let policy = self.policy();
        for _ in 0..self.clock.advance(elapsed) {
            physics::step(&mut self.elements, bounds, self.clock.fixed_dt(), policy);
        }
    }

    /// Snap bubbles back inside after a container size change.
    /// Positions clamp with the spawn inset rule; velocities are untouched.
    pub fn resize(&mut self, bounds: Bounds) {
        physics::reclamp(&mut self.elements, bounds, Inset::Overhang(self.params.overhang));
    }

    /// Post-frame write-back records for the host's rendering surface.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.elements.iter().enumerate().map(|(index, e)| Placement {
            index,
            x: e.position.x,
            y: e.position.y,
            opacity: e.opacity,
        })
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_running(&self) -> bool {
        !self.stop.is_stopped()
    }

    fn policy(&self) -> StepPolicy {
        StepPolicy {
            inset: Inset::Overhang(self.params.overhang),
            collide: true,
            collide_ratio: self.params.collide_ratio,
        }
    }
}
