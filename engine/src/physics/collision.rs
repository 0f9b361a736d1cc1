//! Pairwise overlap test and velocity swap
//!
//! Two elements "collide" when their centers are closer than a fraction
//! (0.9 by default) of their combined half-extents on BOTH axes, i.e. an
//! axis-aligned box test slightly smaller than true contact. The response
//! swaps the two velocity vectors and leaves positions alone — an
//! approximate decorative bounce, not momentum-correct physics. The rule is
//! preserved as-is on purpose; do not replace it with an impulse solver.

use glam::Vec2;

use crate::physics::motion::Element;

/// Swap velocities between element `i` and every later element it overlaps.
///
/// `pos` and `vel` are element `i`'s working state for the current step:
/// its position is post-integration while each `j` is still at its pre-step
/// position. Pairs are visited in index order and a swap feeds `i`'s new
/// velocity into the next comparison, so multi-way overlaps resolve
/// order-sensitively (a three-in-a-row overlap cycles the velocities).
pub(crate) fn swap_on_overlap(
    elements: &mut [Element],
    i: usize,
    pos: Vec2,
    size: Vec2,
    vel: &mut Vec2,
    ratio: f32,
) {
    let center = pos + size * 0.5;
    for j in (i + 1)..elements.len() {
        let other = elements[j];
        let reach = (size + other.size) * 0.5 * ratio;
        let delta = center - (other.position + other.size * 0.5);
        if delta.x.abs() < reach.x && delta.y.abs() < reach.y {
            let taken = other.velocity;
            elements[j].velocity = *vel;
            *vel = taken;
        }
    }
}
