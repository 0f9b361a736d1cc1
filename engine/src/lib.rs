//! Drift Deco Engine Library
//!
//! A small simulation engine for decorative UI motion: elements drift inside
//! bounded rectangular containers under a fixed-timestep integrator with edge
//! reflection and a deliberately non-physical pairwise velocity swap.
//! The engine owns plain element records and never touches a rendering
//! surface; hosts pull position/opacity write-back records after each frame.
//!
//! # Modules
//!
//! - [`physics`] - Element records, containment ranges, Euler stepping, swap collisions
//! - [`frame`] - Fixed-timestep frame clock and loop lifecycle handle
//! - [`decor`] - Scene systems: bubble fields and chip zones with random spawn
//!
//! # Example
//!
//! ```ignore
//! use drift_deco_engine::decor::{BubbleField, BubbleParams};
//! use drift_deco_engine::physics::Bounds;
//! use glam::Vec2;
//!
//! let bounds = Bounds::new(320.0, 420.0);
//! let sizes = vec![Vec2::new(60.0, 60.0), Vec2::new(44.0, 44.0)];
//! let mut rng = fastrand::Rng::new();
//!
//! // Returns None when reduced motion is requested or there are no elements.
//! let (mut field, stop) =
//!     BubbleField::spawn(bounds, &sizes, BubbleParams::default(), &mut rng, false).unwrap();
//!
//! // Host animation callback: feed elapsed seconds, then apply placements.
//! field.frame(bounds, 1.0 / 60.0);
//! for p in field.placements() {
//!     // write p.x / p.y / p.opacity to the rendering surface
//! }
//!
//! // Teardown: stop scheduling further frames.
//! stop.stop();
//! ```

pub mod frame;
pub mod physics;

// Scene-level systems (located in src/decor/ directory)
#[path = "../../src/decor/mod.rs"]
pub mod decor;

// Re-export the core types at crate level for convenience
pub use frame::{FrameClock, StepConfig, StopHandle};
pub use physics::{Bounds, Element, Inset, Range, StepPolicy};
