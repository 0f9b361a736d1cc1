//! Fixed-timestep frame pacing
//!
//! Decouples simulation cadence from the host's variable display refresh
//! rate. Each animation callback feeds real elapsed seconds into a
//! [`FrameClock`]; the clock caps the delta (so a stalled tab does not burst
//! catch-up steps), accumulates it, and hands back how many fixed steps to
//! run this callback, bounded by a maximum. Leftover time stays in the
//! accumulator for the next callback.
//!
//! Loops are torn down explicitly: starting a system yields a [`StopHandle`]
//! and hosts stop rescheduling once it fires.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

/// Fixed-timestep pacing parameters.
///
/// `Default` matches the production constants: 60 Hz simulation, at most
/// 5 steps per callback, frame deltas capped at 100 ms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepConfig {
    /// Simulation timestep (seconds)
    pub fixed_dt: f32,
    /// Upper bound on steps run in a single callback
    pub max_steps: usize,
    /// Cap applied to the real elapsed time per callback (seconds)
    pub max_frame_delta: f32,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps: 5,
            max_frame_delta: 0.1,
        }
    }
}

/// Accumulating clock that converts real frame deltas into fixed steps.
#[derive(Debug, Clone)]
pub struct FrameClock {
    config: StepConfig,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(config: StepConfig) -> Self {
        Self {
            config,
            accumulator: 0.0,
        }
    }

    /// Feed one callback's elapsed real time (seconds); returns how many
    /// fixed steps the caller should run. The elapsed time is capped at
    /// `max_frame_delta` before accumulating, and at most `max_steps` are
    /// granted; any remainder carries over to the next call.
    pub fn advance(&mut self, elapsed: f32) -> usize {
        self.accumulator += elapsed.min(self.config.max_frame_delta);
        let mut steps = 0;
        while self.accumulator >= self.config.fixed_dt && steps < self.config.max_steps {
            self.accumulator -= self.config.fixed_dt;
            steps += 1;
        }
        steps
    }

    /// The constant timestep to pass to the stepper for each granted step.
    pub fn fixed_dt(&self) -> f32 {
        self.config.fixed_dt
    }

    /// Unconsumed time carried to the next callback (seconds).
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }
}

/// Cancellation token for a running motion loop.
///
/// Cloned into the system at spawn; the host keeps the other clone and calls
/// [`stop`](StopHandle::stop) on teardown (component unmount, page
/// navigation). Once stopped, `frame()` becomes a no-op and the host must
/// not schedule further callbacks. Stopping is one-way.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the loop this handle was spawned with.
    pub fn stop(&self) {
        log::trace!("motion loop stopped");
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_config_default() {
        let config = StepConfig::default();
        assert_eq!(config.fixed_dt, 1.0 / 60.0);
        assert_eq!(config.max_steps, 5);
        assert_eq!(config.max_frame_delta, 0.1);
    }

    #[test]
    fn test_no_steps_until_a_full_timestep_accumulates() {
        let mut clock = FrameClock::new(StepConfig::default());
        assert_eq!(clock.advance(0.008), 0);
        // 0.008 + 0.009 = 0.017 >= 1/60
        assert_eq!(clock.advance(0.009), 1);
        assert!(clock.accumulator() < clock.fixed_dt());
    }

    #[test]
    fn test_steps_bounded_and_leftover_retained() {
        let mut clock = FrameClock::new(StepConfig::default());
        // A full second of elapsed time is capped to 100ms, which covers
        // six 60Hz steps; only five run and the remainder stays queued.
        assert_eq!(clock.advance(1.0), 5);
        let leftover = 0.1 - 5.0 * (1.0 / 60.0);
        assert!((clock.accumulator() - leftover).abs() < 1e-6);
        // The leftover helps fund the next callback's steps. Repeated f32
        // subtraction can leave the accumulator an ulp either side of
        // fixed_dt, so one timestep of elapsed time grants one step or two.
        let steps = clock.advance(1.0 / 60.0);
        assert!((1..=2).contains(&steps), "granted {steps} steps");
        assert!(clock.accumulator() < clock.fixed_dt());
    }

    #[test]
    fn test_frame_delta_cap_prevents_burst_after_stall() {
        let mut clock = FrameClock::new(StepConfig::default());
        clock.advance(7.5); // tab was backgrounded
        assert!(clock.accumulator() <= 0.1);
    }

    #[test]
    fn test_zero_elapsed_grants_nothing() {
        let mut clock = FrameClock::new(StepConfig::default());
        assert_eq!(clock.advance(0.0), 0);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn test_stop_handle_is_shared() {
        let handle = StopHandle::new();
        let other = handle.clone();
        assert!(!other.is_stopped());
        handle.stop();
        assert!(other.is_stopped());
    }

    #[test]
    fn test_step_config_parses_from_json() {
        let config: StepConfig =
            serde_json::from_str(r#"{"fixed_dt":0.02,"max_steps":3,"max_frame_delta":0.05}"#)
                .unwrap();
        assert_eq!(config.max_steps, 3);
        assert_eq!(config.fixed_dt, 0.02);
    }
}
