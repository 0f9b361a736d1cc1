//! Bouncing chip system for step-media zones.
//!
//! Chips stay strictly inside their zone (the host shrinks the media box by
//! [`ZONE_INSET`](crate::decor::ZONE_INSET) before passing bounds in). Their
//! spawn velocity is drawn by angle, uniform in [0, 2π), so paths are never
//! biased toward the axes the way independent signed draws are. Chips do not
//! collide with each other.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::decor::{Placement, range_f32};
use crate::frame::{FrameClock, StopHandle};
use crate::physics::{self, Bounds, Element, Inset, StepPolicy};

/// Spawn-time parameter bands for a chip zone.
///
/// `Default` matches the production visuals: speeds 28-56 px/s, per-chip
/// mass 0.8-1.2 (reserved for a weighted response that never shipped).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChipParams {
    /// Speed band (px/s); direction drawn as a uniform angle
    pub speed: (f32, f32),
    /// Mass band; stored on each chip, unused by the current swap rule
    pub mass: (f32, f32),
    /// Frame pacing
    pub step: crate::frame::StepConfig,
}

impl Default for ChipParams {
    fn default() -> Self {
        Self {
            speed: (28.0, 56.0),
            mass: (0.8, 1.2),
            step: crate::frame::StepConfig::default(),
        }
    }
}

/// Owns and animates the chips of one zone.
pub struct ChipZone {
    elements: Vec<Element>,
    clock: FrameClock,
    stop: StopHandle,
}

impl ChipZone {
    /// Spawn a zone's chips. Returns `None` when the reduced-motion
    /// preference is set or the zone has no chips.
    pub fn spawn(
        bounds: Bounds,
        sizes: &[Vec2],
        params: ChipParams,
        rng: &mut fastrand::Rng,
        reduced_motion: bool,
    ) -> Option<(Self, StopHandle)> {
        if reduced_motion || sizes.is_empty() {
            return None;
        }

        let elements = sizes
            .iter()
            .map(|&size| {
                let rx = Inset::Strict.range(bounds.width, size.x);
                let ry = Inset::Strict.range(bounds.height, size.y);
                let angle = range_f32(rng, 0.0, TAU);
                let speed = range_f32(rng, params.speed.0, params.speed.1);
                Element {
                    position: Vec2::new(
                        range_f32(rng, rx.min, rx.max),
                        range_f32(rng, ry.min, ry.max),
                    ),
                    velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                    size,
                    opacity: 1.0,
                    mass: range_f32(rng, params.mass.0, params.mass.1),
                }
            })
            .collect::<Vec<_>>();

        log::debug!(
            "chip zone spawned: {} chips in {:.0}x{:.0}",
            elements.len(),
            bounds.width,
            bounds.height
        );

        let stop = StopHandle::new();
        let zone = Self {
            elements,
            clock: FrameClock::new(params.step),
            stop: stop.clone(),
        };
        Some((zone, stop))
    }

    /// Host animation callback: advance by the elapsed real time (seconds).
    pub fn frame(&mut self, bounds: Bounds, elapsed: f32) {
        if self.stop.is_stopped() {
            return;
        }
        for _ in 0..self.clock.advance(elapsed) {
            physics::step(
                &mut self.elements,
                bounds,
                self.clock.fixed_dt(),
                StepPolicy::chips(),
            );
        }
    }

    /// Snap chips back inside after a zone size change.
    pub fn resize(&mut self, bounds: Bounds) {
        physics::reclamp(&mut self.elements, bounds, Inset::Strict);
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
}
