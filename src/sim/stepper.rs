//! Frame-time driver for the world
//!
//! Turns wall-clock frame durations into ticks. `Variable` runs exactly one
//! tick per frame with the raw frame time. `Fixed` accumulates time and runs
//! whole steps, capped per frame; time beyond the cap is dropped.

use super::state::World;
use crate::settings::StepMode;

#[derive(Debug, Clone)]
pub struct Stepper {
    mode: StepMode,
    accumulator: f32,
    /// Seconds discarded by the substep cap
    dropped: f64,
}

impl Stepper {
    pub fn new(mode: StepMode) -> Self {
        Self {
            mode,
            accumulator: 0.0,
            dropped: 0.0,
        }
    }

    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Unspent time waiting for the next fixed step
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn dropped_time(&self) -> f64 {
        self.dropped
    }

    /// Feed one frame's elapsed time, returning the number of ticks run
    pub fn advance(&mut self, world: &mut World, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() && frame_dt >= 0.0 {
            frame_dt
        } else {
            log::warn!("Ignoring invalid frame time {frame_dt}");
            0.0
        };

        match self.mode {
            StepMode::Variable => {
                world.tick(frame_dt);
                1
            }
            StepMode::Fixed { step, max_substeps } => {
                self.accumulator += frame_dt;

                let mut substeps = 0;
                while self.accumulator >= step && substeps < max_substeps {
                    world.tick(step);
                    self.accumulator -= step;
                    substeps += 1;
                }

                if self.accumulator >= step {
                    let remainder = self.accumulator % step;
                    let lost = self.accumulator - remainder;
                    log::warn!("Frame hitch: dropping {lost:.4}s after {substeps} substeps");
                    self.dropped += f64::from(lost);
                    self.accumulator = remainder;
                }

                substeps
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn world() -> World {
        World::new(&Settings::default()).unwrap()
    }

    #[test]
    fn test_variable_one_tick_per_frame() {
        let mut world = world();
        let mut stepper = Stepper::new(StepMode::Variable);
        assert_eq!(stepper.advance(&mut world, 0.033), 1);
        assert_eq!(stepper.advance(&mut world, 0.0), 1);
        assert_eq!(world.tick_count(), 2);
        assert!((world.time() - 0.033).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_accumulates() {
        let mut world = world();
        let mut stepper = Stepper::new(StepMode::Fixed {
            step: 0.01,
            max_substeps: 8,
        });
        assert_eq!(stepper.advance(&mut world, 0.004), 0);
        assert_eq!(stepper.advance(&mut world, 0.004), 0);
        assert_eq!(stepper.advance(&mut world, 0.004), 1);
        assert!((stepper.accumulator() - 0.002).abs() < 1e-5);
        assert_eq!(stepper.advance(&mut world, 0.025), 2);
        assert_eq!(world.tick_count(), 3);
    }

    #[test]
    fn test_fixed_caps_substeps() {
        let mut world = world();
        let mut stepper = Stepper::new(StepMode::Fixed {
            step: 0.01,
            max_substeps: 4,
        });
        // A one-second hitch only runs four steps
        assert_eq!(stepper.advance(&mut world, 1.0), 4);
        assert!(stepper.accumulator() < 0.01);
        assert!(stepper.dropped_time() > 0.94 && stepper.dropped_time() < 0.961);
        assert_eq!(world.tick_count(), 4);
    }

    #[test]
    fn test_invalid_frame_time_ignored() {
        let mut world = world();
        let mut stepper = Stepper::new(StepMode::Fixed {
            step: 0.01,
            max_substeps: 4,
        });
        assert_eq!(stepper.advance(&mut world, -1.0), 0);
        assert_eq!(stepper.advance(&mut world, f32::NAN), 0);
        assert_eq!(stepper.accumulator(), 0.0);

        let mut stepper = Stepper::new(StepMode::Variable);
        stepper.advance(&mut world, f32::INFINITY);
        assert_eq!(world.time(), 0.0);
    }
}
