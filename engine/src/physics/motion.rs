//! Bounded drift motion for decorative elements
//!
//! Provides the element record, the per-axis containment rules, and the
//! fixed-timestep stepper. Uses explicit Euler integration with a
//! clamp-and-flip boundary policy:
//! - position += velocity * dt
//! - position <= min  =>  position = min, velocity = |velocity|
//! - position >= max  =>  position = max, velocity = -|velocity|
//!
//! The min check runs before the max check on each axis; when a container is
//! smaller than an element, the inverted range makes the max clamp win, which
//! is the intended degenerate behavior rather than a fault.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::physics::collision;

/// Rectangular extent of a container, in pixels.
///
/// Read fresh each frame; layout may change it at any time between steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Container width (pixels)
    pub width: f32,
    /// Container height (pixels)
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Allowed interval for one axis of an element's top-left position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    /// Clamp a value into this range. When the range is inverted
    /// (max < min, tiny container), the max bound wins.
    pub fn clamp(self, v: f32) -> f32 {
        v.max(self.min).min(self.max)
    }
}

/// How far past the container edge an element may rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Inset {
    /// Element may overhang each edge by this fraction of its own size.
    /// Bubbles use 0.4: positions range from -0.4*size to container - 0.6*size.
    Overhang(f32),
    /// Element stays fully inside; the upper bound floors at zero so a
    /// too-small container pins elements to the origin instead of
    /// pushing them negative.
    Strict,
}

impl Inset {
    /// Allowed position range along one axis for an element of the given
    /// size inside a container of the given extent.
    pub fn range(self, container: f32, size: f32) -> Range {
        match self {
            Inset::Overhang(f) => Range {
                min: -size * f,
                max: container - size * (1.0 - f),
            },
            Inset::Strict => Range {
                min: 0.0,
                max: (container - size).max(0.0),
            },
        }
    }
}

/// A single decorative element being simulated inside a container.
///
/// Plain record owned by the container's system; the rendering node only
/// ever receives a one-way position/opacity write-back after a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Top-left position relative to the container (pixels)
    pub position: Vec2,
    /// Current velocity (px/s)
    pub velocity: Vec2,
    /// Rendered size, fixed for the session (pixels)
    pub size: Vec2,
    /// Render opacity in [0, 1]
    pub opacity: f32,
    /// Reserved for weighted collision response; drawn at spawn, never
    /// read by the current swap rule.
    pub mass: f32,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::new(30.0, 20.0),
            size: Vec2::ZERO,
            opacity: 1.0,
            mass: 1.0,
        }
    }
}

/// Containment and collision rules applied by [`step`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepPolicy {
    /// Edge rule for every element in the container.
    pub inset: Inset,
    /// Whether overlapping pairs swap velocities (bubbles yes, chips no).
    pub collide: bool,
    /// Fraction of combined half-extents that counts as overlap.
    pub collide_ratio: f32,
}

impl StepPolicy {
    /// Bubble rule: 40% edge overhang, swap collisions at 0.9 reach.
    pub fn bubbles() -> Self {
        Self {
            inset: Inset::Overhang(0.4),
            collide: true,
            collide_ratio: 0.9,
        }
    }

    /// Chip rule: strict containment, no collisions.
    pub fn chips() -> Self {
        Self {
            inset: Inset::Strict,
            collide: false,
            collide_ratio: 0.9,
        }
    }
}

fn reflect_axis(p: &mut f32, v: &mut f32, range: Range) {
    if *p <= range.min {
        *p = range.min;
        *v = v.abs();
    }
    if *p >= range.max {
        *p = range.max;
        *v = -v.abs();
    }
}

/// Advance all elements in one container by a single fixed timestep.
///
/// Elements update in index order. Each element integrates, reflects off the
/// container edges, then (when the policy collides) swaps velocities with
/// every later element it overlaps — comparing its post-step position against
/// the other's pre-step position. A three-way overlap therefore resolves in a
/// well-defined but order-sensitive way; this is intended decorative
/// behavior, not a rigid-body solver.
///
/// Deterministic: identical inputs produce bit-identical outputs.
pub fn step(elements: &mut [Element], bounds: Bounds, dt: f32, policy: StepPolicy) {
    for i in 0..elements.len() {
        let e = elements[i];
        let mut pos = e.position + e.velocity * dt;
        let mut vel = e.velocity;

        reflect_axis(
            &mut pos.x,
            &mut vel.x,
            policy.inset.range(bounds.width, e.size.x),
        );
        reflect_axis(
            &mut pos.y,
            &mut vel.y,
            policy.inset.range(bounds.height, e.size.y),
        );

        if policy.collide {
            collision::swap_on_overlap(elements, i, pos, e.size, &mut vel, policy.collide_ratio);
        }

        elements[i].position = pos;
        elements[i].velocity = vel;
    }
}

/// Snap every element's position back into the valid range for new bounds.
///
/// Velocity is untouched; the correction is instantaneous and idempotent.
/// Called by the host when the container's layout size changes.
pub fn reclamp(elements: &mut [Element], bounds: Bounds, inset: Inset) {
    for e in elements.iter_mut() {
        e.position.x = inset.range(bounds.width, e.size.x).clamp(e.position.x);
        e.position.y = inset.range(bounds.height, e.size.y).clamp(e.position.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bubble(x: f32, y: f32, vx: f32, vy: f32, size: f32) -> Element {
        Element {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            size: Vec2::splat(size),
            ..Element::default()
        }
    }

    #[test]
    fn test_overhang_range() {
        // Container 300, element 60, 40% overhang: [-24, 264]
        let r = Inset::Overhang(0.4).range(300.0, 60.0);
        assert_eq!(r.min, -24.0);
        assert_eq!(r.max, 264.0);
    }

    #[test]
    fn test_strict_range_floors_at_zero() {
        let r = Inset::Strict.range(40.0, 60.0);
        assert_eq!(r.min, 0.0);
        assert_eq!(r.max, 0.0);
    }

    #[test]
    fn test_reflection_clamps_exactly_and_flips_sign() {
        // Worked example: x=260, vx=+50, dt=0.1 would land at 265;
        // maxX = 300 - 60*0.6 = 264, so x clamps to 264 and vx flips.
        let mut els = vec![bubble(260.0, 100.0, 50.0, 0.0, 60.0)];
        step(
            &mut els,
            Bounds::new(300.0, 400.0),
            0.1,
            StepPolicy::bubbles(),
        );
        assert_eq!(els[0].position.x, 264.0);
        assert_eq!(els[0].velocity.x, -50.0);
        // Magnitude preserved, y untouched
        assert_eq!(els[0].velocity.y, 0.0);
    }

    #[test]
    fn test_reflection_at_min_edge() {
        let mut els = vec![bubble(-23.0, 100.0, -40.0, 0.0, 60.0)];
        step(
            &mut els,
            Bounds::new(300.0, 400.0),
            0.1,
            StepPolicy::bubbles(),
        );
        // -23 - 4 = -27 crosses min=-24: clamp and flip positive
        assert_eq!(els[0].position.x, -24.0);
        assert_eq!(els[0].velocity.x, 40.0);
    }

    #[test]
    fn test_chip_stays_strictly_inside() {
        let mut els = vec![Element {
            position: Vec2::new(230.0, 10.0),
            velocity: Vec2::new(200.0, 0.0),
            size: Vec2::new(80.0, 24.0),
            ..Element::default()
        }];
        let bounds = Bounds::new(240.0, 120.0);
        for _ in 0..600 {
            step(&mut els, bounds, 1.0 / 60.0, StepPolicy::chips());
            assert!(els[0].position.x >= 0.0);
            assert!(els[0].position.x <= 160.0);
            assert!(els[0].position.y >= 0.0);
            assert!(els[0].position.y <= 96.0);
        }
    }

    #[test]
    fn test_step_is_deterministic() {
        let start = vec![
            bubble(10.0, 20.0, 33.0, -17.0, 50.0),
            bubble(120.0, 80.0, -28.0, 24.0, 40.0),
            bubble(60.0, 150.0, 41.0, 12.0, 64.0),
        ];
        let bounds = Bounds::new(320.0, 420.0);

        let mut a = start.clone();
        let mut b = start.clone();
        for _ in 0..2000 {
            step(&mut a, bounds, 1.0 / 60.0, StepPolicy::bubbles());
            step(&mut b, bounds, 1.0 / 60.0, StepPolicy::bubbles());
        }
        // Bit-identical, including collision swaps
        assert_eq!(a, b);
    }

    #[test]
    fn test_containment_holds_over_long_runs() {
        let mut els = vec![
            bubble(0.0, 0.0, 45.0, 36.0, 60.0),
            bubble(200.0, 300.0, -45.0, -36.0, 44.0),
            bubble(100.0, 100.0, 20.0, -14.0, 52.0),
        ];
        let bounds = Bounds::new(320.0, 420.0);
        for _ in 0..10_000 {
            step(&mut els, bounds, 1.0 / 60.0, StepPolicy::bubbles());
            for e in &els {
                let rx = Inset::Overhang(0.4).range(bounds.width, e.size.x);
                let ry = Inset::Overhang(0.4).range(bounds.height, e.size.y);
                assert!(e.position.x >= rx.min && e.position.x <= rx.max);
                assert!(e.position.y >= ry.min && e.position.y <= ry.max);
            }
        }
    }

    #[test]
    fn test_degenerate_container_collapses_to_point() {
        let mut els = vec![Element {
            position: Vec2::new(5.0, 5.0),
            velocity: Vec2::new(10.0, 10.0),
            size: Vec2::splat(20.0),
            ..Element::default()
        }];
        let bounds = Bounds::new(0.0, 0.0);
        for _ in 0..100 {
            step(&mut els, bounds, 1.0 / 60.0, StepPolicy::chips());
        }
        // Strict range is [0, 0] on both axes
        assert_eq!(els[0].position, Vec2::ZERO);
    }

    #[test]
    fn test_reclamp_is_idempotent() {
        let mut els = vec![
            bubble(500.0, -80.0, 10.0, 10.0, 60.0),
            bubble(-90.0, 900.0, -5.0, 5.0, 44.0),
        ];
        let bounds = Bounds::new(300.0, 200.0);
        reclamp(&mut els, bounds, Inset::Overhang(0.4));
        let once = els.clone();
        reclamp(&mut els, bounds, Inset::Overhang(0.4));
        assert_eq!(els, once);
        // Velocity never changes on reclamp
        assert_eq!(els[0].velocity, Vec2::new(10.0, 10.0));
    }
}
