//! Self-driving carousel engine.
//!
//! Advances a horizontal offset in proportion to elapsed time and rotates
//! the strip's head to its tail each time a full step width (card plus gap)
//! has been traversed, producing an endlessly cycling strip from a finite
//! ordered list. The engine owns the strip and the animation state; the
//! step width is queried from a provider every tick so the loop tolerates
//! layout changes between frames.

use crate::models::ServiceStrip;
use anyhow::Result;
use std::time::Instant;

/// Supplies the current step width (card width plus gap) in terminal cells.
///
/// Production uses a viewport-measuring implementation that reflects the
/// rendered layout; tests use [`FixedStep`]. A provider reporting zero or
/// a non-finite value disables wraparound for that tick without stopping
/// the engine.
pub trait StepSizeProvider {
    /// Current step width in cells, or 0 when no card is laid out yet.
    fn step_size(&self) -> f32;
}

/// Constant step width, used by tests and as a degenerate-case stand-in.
#[derive(Debug, Clone, Copy)]
pub struct FixedStep(pub f32);

impl StepSizeProvider for FixedStep {
    fn step_size(&self) -> f32 {
        self.0
    }
}

/// Frame-driven engine owning the strip and its animation state.
#[derive(Debug, Clone)]
pub struct CarouselEngine {
    strip: ServiceStrip,
    speed: f32,
    offset: f32,
    last_tick: Option<Instant>,
    running: bool,
}

impl CarouselEngine {
    /// Creates an engine over `strip` advancing at `speed` cells per second.
    ///
    /// # Errors
    ///
    /// Returns an error if `speed` is not a positive finite number.
    pub fn new(strip: ServiceStrip, speed: f32) -> Result<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            anyhow::bail!("carousel speed must be a positive number, got {speed}");
        }

        Ok(Self {
            strip,
            speed,
            offset: 0.0,
            last_tick: None,
            running: false,
        })
    }

    /// Marks the engine running and drops the clock.
    ///
    /// The first tick after a start observes a zero elapsed time, so time
    /// spent hidden (detail view open, section not visible) never arrives
    /// as one large jump.
    pub fn start(&mut self) {
        self.running = true;
        self.last_tick = None;
    }

    /// Stops the engine and resets the applied offset to neutral.
    ///
    /// Must be called whenever the carousel is hidden; a stopped engine
    /// ignores ticks entirely.
    pub fn stop(&mut self) {
        self.running = false;
        self.offset = 0.0;
        self.last_tick = None;
    }

    /// Whether the engine currently advances on ticks.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Current horizontal offset of the strip in cells.
    ///
    /// Always in `[0, step)` after a tick whose step width was positive.
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Configured advance speed in cells per second.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// The strip in its current rotation order.
    #[must_use]
    pub const fn strip(&self) -> &ServiceStrip {
        &self.strip
    }

    /// Advances one frame and returns how many rotations occurred.
    ///
    /// Elapsed time since the previous tick is clamped to zero to tolerate
    /// timer irregularities, and the step width is re-read from `step`
    /// every call. The wraparound rule subtracts one step width per full
    /// traversal, so several steps elapsed in a single long tick rotate the
    /// strip several positions; all rotations of a tick are applied as one
    /// batched update, together with the offset correction, before the
    /// caller renders. A zero or non-finite step width skips the wraparound
    /// test entirely for that tick.
    pub fn tick(&mut self, now: Instant, step: &dyn StepSizeProvider) -> usize {
        if !self.running {
            return 0;
        }

        let dt = match self.last_tick {
            Some(previous) => now.saturating_duration_since(previous).as_secs_f32(),
            None => 0.0,
        };
        self.last_tick = Some(now);
        self.offset += self.speed * dt;

        let step = step.step_size();
        if !step.is_finite() || step <= 0.0 {
            return 0;
        }

        let mut rotations = 0;
        while self.offset >= step {
            self.offset -= step;
            rotations += 1;
        }
        if rotations > 0 {
            self.strip = self.strip.rotated_left(rotations);
        }
        rotations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Service;
    use std::time::Duration;

    fn engine(speed: f32) -> CarouselEngine {
        let strip = ServiceStrip::new(vec![
            Service::new("A", "A", "first"),
            Service::new("B", "B", "second"),
            Service::new("C", "C", "third"),
        ])
        .unwrap();
        CarouselEngine::new(strip, speed).unwrap()
    }

    fn order(engine: &CarouselEngine) -> Vec<&str> {
        engine.strip().iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_new_rejects_non_positive_speed() {
        let strip = ServiceStrip::new(vec![Service::new("A", "A", "only")]).unwrap();
        assert!(CarouselEngine::new(strip.clone(), 0.0).is_err());
        assert!(CarouselEngine::new(strip.clone(), -1.0).is_err());
        assert!(CarouselEngine::new(strip.clone(), f32::NAN).is_err());
        assert!(CarouselEngine::new(strip, f32::INFINITY).is_err());
    }

    #[test]
    fn test_stopped_engine_ignores_ticks() {
        let mut engine = engine(50.0);
        let t0 = Instant::now();

        assert_eq!(engine.tick(t0, &FixedStep(100.0)), 0);
        assert_eq!(engine.offset(), 0.0);
    }

    #[test]
    fn test_first_tick_after_start_has_zero_elapsed_time() {
        let mut engine = engine(50.0);
        engine.start();

        let t0 = Instant::now() + Duration::from_secs(1000);
        assert_eq!(engine.tick(t0, &FixedStep(100.0)), 0);
        assert_eq!(engine.offset(), 0.0);
    }

    #[test]
    fn test_offset_advances_with_elapsed_time() {
        let mut engine = engine(50.0);
        engine.start();

        let t0 = Instant::now();
        engine.tick(t0, &FixedStep(100.0));
        engine.tick(t0 + Duration::from_millis(500), &FixedStep(100.0));

        assert!((engine.offset() - 25.0).abs() < 1e-3);
        assert_eq!(order(&engine), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_full_step_rotates_head_to_tail() {
        let mut engine = engine(50.0);
        engine.start();

        let t0 = Instant::now();
        engine.tick(t0, &FixedStep(100.0));
        let rotations = engine.tick(t0 + Duration::from_secs(2), &FixedStep(100.0));

        assert_eq!(rotations, 1);
        assert!(engine.offset().abs() < 1e-3);
        assert_eq!(order(&engine), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_long_tick_wraps_multiple_steps_in_one_batch() {
        let mut engine = engine(50.0);
        engine.start();

        let t0 = Instant::now();
        engine.tick(t0, &FixedStep(100.0));
        let rotations = engine.tick(t0 + Duration::from_millis(4500), &FixedStep(100.0));

        assert_eq!(rotations, 2);
        assert!((engine.offset() - 25.0).abs() < 1e-3);
        assert_eq!(order(&engine), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_zero_step_never_rotates() {
        let mut engine = engine(50.0);
        engine.start();

        let t0 = Instant::now();
        engine.tick(t0, &FixedStep(0.0));
        let rotations = engine.tick(t0 + Duration::from_secs(10), &FixedStep(0.0));

        assert_eq!(rotations, 0);
        assert_eq!(order(&engine), vec!["A", "B", "C"]);
        // Offset keeps accumulating; the next positive step catches up
        assert!(engine.offset() > 0.0);
    }

    #[test]
    fn test_non_finite_step_never_rotates() {
        let mut engine = engine(50.0);
        engine.start();

        let t0 = Instant::now();
        engine.tick(t0, &FixedStep(f32::NAN));
        assert_eq!(engine.tick(t0 + Duration::from_secs(2), &FixedStep(f32::NAN)), 0);
        assert_eq!(order(&engine), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_offset_stays_below_step_after_every_tick() {
        let mut engine = engine(73.0);
        engine.start();

        let t0 = Instant::now();
        for i in 0..40 {
            engine.tick(t0 + Duration::from_millis(i * 137), &FixedStep(30.0));
            assert!(engine.offset() < 30.0, "tick {i}: offset {}", engine.offset());
            assert!(engine.offset() >= 0.0);
        }
    }

    #[test]
    fn test_out_of_order_timestamp_clamps_to_zero() {
        let mut engine = engine(50.0);
        engine.start();

        let t0 = Instant::now() + Duration::from_secs(10);
        engine.tick(t0, &FixedStep(100.0));
        engine.tick(t0 - Duration::from_secs(5), &FixedStep(100.0));

        assert_eq!(engine.offset(), 0.0);
    }

    #[test]
    fn test_stop_resets_offset_to_neutral() {
        let mut engine = engine(50.0);
        engine.start();

        let t0 = Instant::now();
        engine.tick(t0, &FixedStep(100.0));
        engine.tick(t0 + Duration::from_secs(1), &FixedStep(100.0));
        assert!(engine.offset() > 0.0);

        engine.stop();
        assert!(!engine.is_running());
        assert_eq!(engine.offset(), 0.0);
    }

    #[test]
    fn test_restart_does_not_replay_hidden_time() {
        let mut engine = engine(50.0);
        engine.start();

        let t0 = Instant::now();
        engine.tick(t0, &FixedStep(100.0));
        engine.stop();

        // A long stretch passes while the carousel is hidden
        engine.start();
        let rotations = engine.tick(t0 + Duration::from_secs(600), &FixedStep(100.0));

        assert_eq!(rotations, 0);
        assert_eq!(engine.offset(), 0.0);
        assert_eq!(order(&engine), vec!["A", "B", "C"]);
    }
}
