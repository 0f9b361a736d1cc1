//! Physics module for the Drift Deco engine
//!
//! Custom 2D kinematics for decorative elements, built without an external
//! physics library. The stepper is intentionally simple: explicit Euler
//! integration, boundary reflection by clamp-and-sign-flip, and a pairwise
//! velocity swap on overlap that trades physical accuracy for visual variety.
//!
//! # Unit System
//!
//! **1 unit = 1 layout pixel**
//!
//! - Positions in pixels, top-left relative to the owning container
//! - Velocities in px/s
//! - Timesteps in seconds
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types (Vec2) re-exported from glam
//! - [`motion`] - Element records, containment ranges, stepping, reclamping
//! - [`collision`] - Pairwise overlap test and velocity swap

pub mod collision;
pub mod motion;
pub mod types;

// Re-export commonly used types at the physics module level
pub use motion::{Bounds, Element, Inset, Range, StepPolicy, reclamp, step};
pub use types::Vec2;
