//! Decor systems — self-contained modules that own element state and motion.
//!
//! Two instances of the same pattern: [`BubbleField`] floats soft bubbles
//! inside a card (they may overhang the edges and bounce off each other),
//! [`ChipZone`] bounces label chips strictly inside a padded zone. Each
//! system owns its element records, runs its own frame clock, and hands the
//! host one-way [`Placement`] write-back records; systems never share state
//! with each other.
//!
//! Spawning is gated twice: a reduced-motion preference disables the whole
//! subsystem, and a container with no decorative children gets no loop.

pub mod bubble_field;
pub mod chip_zone;

pub use bubble_field::{BubbleField, BubbleParams};
pub use chip_zone::{ChipParams, ChipZone};

/// Padding between a media box and the chip zone it hosts, on all four
/// sides (pixels). Applied by the host when deriving zone bounds.
pub const ZONE_INSET: f32 = 12.0;

/// One element's post-step state for the host to write to its surface.
///
/// `index` pairs the record with the spawn-time element order; positions
/// are top-left offsets relative to the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

/// Uniform random f32 in [min, max).
pub(crate) fn range_f32(rng: &mut fastrand::Rng, min: f32, max: f32) -> f32 {
    min + rng.f32() * (max - min)
}

/// Random sign, each with probability one half.
pub(crate) fn random_sign(rng: &mut fastrand::Rng) -> f32 {
    if rng.bool() { 1.0 } else { -1.0 }
}
