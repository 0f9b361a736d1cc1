//! Headless Drift Demo
//!
//! Run with: `cargo run --bin drift_demo`
//!
//! Drives one bubble field and one chip zone from a wall-clock frame loop
//! for a few seconds, then exercises a container resize and an explicit
//! stop. Stands in for a real rendering host: where it logs placements, a
//! web or canvas host would write element styles instead.

use std::error::Error;
use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;

use drift_deco_engine::decor::{BubbleField, BubbleParams, ChipParams, ChipZone, ZONE_INSET};
use drift_deco_engine::physics::Bounds;

/// Simulated display refresh interval.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn Error>> {
    flexi_logger::Logger::try_with_env_or_str("debug")?.start()?;

    let mut rng = fastrand::Rng::new();

    // An architect card with three bubbles.
    let card = Bounds::new(320.0, 420.0);
    let bubble_sizes = vec![Vec2::splat(60.0), Vec2::splat(44.0), Vec2::splat(52.0)];
    let (mut field, field_stop) =
        BubbleField::spawn(card, &bubble_sizes, BubbleParams::default(), &mut rng, false)
            .expect("motion enabled and bubbles present");

    // A step-media box with four chips; the zone sits ZONE_INSET inside it.
    let media = Bounds::new(480.0, 300.0);
    let zone = Bounds::new(media.width - 2.0 * ZONE_INSET, media.height - 2.0 * ZONE_INSET);
    let chip_sizes = vec![
        Vec2::new(96.0, 28.0),
        Vec2::new(72.0, 28.0),
        Vec2::new(110.0, 28.0),
        Vec2::new(84.0, 28.0),
    ];
    let (mut chips, chip_stop) =
        ChipZone::spawn(zone, &chip_sizes, ChipParams::default(), &mut rng, false)
            .expect("motion enabled and chips present");

    // ~3 seconds of frames at display cadence.
    let mut last = Instant::now();
    for frame in 0..180u32 {
        thread::sleep(FRAME_INTERVAL);
        let now = Instant::now();
        let elapsed = now.duration_since(last).as_secs_f32();
        last = now;

        field.frame(card, elapsed);
        chips.frame(zone, elapsed);

        if frame % 60 == 0 {
            for p in field.placements() {
                log::info!("bubble[{}] at ({:.1}, {:.1})", p.index, p.x, p.y);
            }
            for p in chips.placements() {
                log::info!("chip[{}] at ({:.1}, {:.1})", p.index, p.x, p.y);
            }
        }
    }

    // Layout change: the card narrows, bubbles snap back inside.
    let narrow = Bounds::new(240.0, 420.0);
    field.resize(narrow);
    field.frame(narrow, FRAME_INTERVAL.as_secs_f32());
    log::info!("card resized to {:.0}x{:.0}", narrow.width, narrow.height);

    // Teardown: stop both loops; further frames are no-ops.
    field_stop.stop();
    chip_stop.stop();
    assert!(!field.is_running() && !chips.is_running());
    log::info!("demo finished");

    Ok(())
}
