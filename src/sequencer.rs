//! Frame-counter state machine choosing what the fire does each tick

use crate::config::FireConfig;

/// What the simulation should do on a given tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,        // Counter still below the ignition frame
    Ignite,      // Light the bottom row
    Burn,        // Spread only
    Extinguish,  // Cool the source band, then spread
    Reset,       // Counter wrapped back to its starting value
}

/// Fractional frame counter advanced by a fixed velocity per tick
#[derive(Clone, Debug)]
pub struct PhaseSequencer {
    counter: f32,
    velocity: f32,
    last_frame: i32,
    ignite_frame: i32,
    stop_start_frame: i32,
    stop_end_frame: i32,
    reset_frame: i32,
}

impl PhaseSequencer {
    pub fn new(config: &FireConfig) -> Self {
        let mut seq = Self {
            counter: 0.0,
            velocity: config.velocity,
            last_frame: 0,
            ignite_frame: config.ignite_frame,
            stop_start_frame: config.stop_start_frame,
            stop_end_frame: config.stop_end_frame,
            reset_frame: config.reset_frame,
        };
        seq.rewind();
        seq
    }

    fn rewind(&mut self) {
        self.counter = -self.velocity;
        self.last_frame = self.counter.floor() as i32;
    }

    pub fn counter(&self) -> f32 {
        self.counter
    }

    /// Discrete frame index for the current counter
    pub fn frame(&self) -> i32 {
        self.counter.floor() as i32
    }

    /// Advance one tick and report the phase to run.
    ///
    /// Ignition and reset are edge-triggered: ignition fires only on the tick
    /// that first enters the ignition frame, reset on the first tick at or
    /// past the reset frame. Every other tick in range burns, fractional
    /// ticks included.
    pub fn advance(&mut self) -> Phase {
        self.counter += self.velocity;
        let frame = self.frame();
        let entered = frame != self.last_frame;
        self.last_frame = frame;

        if frame >= self.reset_frame {
            self.rewind();
            return Phase::Reset;
        }
        if frame < self.ignite_frame {
            return Phase::Idle;
        }
        if frame == self.ignite_frame && entered {
            return Phase::Ignite;
        }
        if (self.stop_start_frame..=self.stop_end_frame).contains(&frame) {
            Phase::Extinguish
        } else {
            Phase::Burn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_seq() -> PhaseSequencer {
        PhaseSequencer::new(&FireConfig::default())
    }

    #[test]
    fn starts_one_step_before_ignition() {
        let seq = default_seq();
        assert_eq!(seq.counter(), -0.5);
        assert_eq!(seq.frame(), -1);
    }

    #[test]
    fn first_tick_ignites_then_burns() {
        let mut seq = default_seq();
        assert_eq!(seq.advance(), Phase::Ignite);
        assert_eq!(seq.counter(), 0.0);
        assert_eq!(seq.advance(), Phase::Burn);
        assert_eq!(seq.counter(), 0.5);
        assert_eq!(seq.frame(), 0);
        assert_eq!(seq.advance(), Phase::Burn);
    }

    #[test]
    fn extinguish_window_is_inclusive() {
        let mut seq = default_seq();
        let mut phases = Vec::new();
        for _ in 0..1000 {
            let phase = seq.advance();
            phases.push((seq.frame(), phase));
        }
        for (frame, phase) in phases.into_iter().skip(1) {
            let expected =
                if (300..=400).contains(&frame) { Phase::Extinguish } else { Phase::Burn };
            assert_eq!(phase, expected, "frame {}", frame);
        }
    }

    #[test]
    fn resets_on_reaching_reset_frame() {
        let mut seq = default_seq();
        for _ in 0..1000 {
            assert_ne!(seq.advance(), Phase::Reset);
        }
        assert_eq!(seq.counter(), 499.5);
        assert_eq!(seq.advance(), Phase::Reset);
        assert_eq!(seq.counter(), -0.5);
        assert_eq!(seq.advance(), Phase::Ignite);
    }

    #[test]
    fn ignites_once_per_cycle() {
        let mut seq = default_seq();
        let ignitions = (0..3 * 1001).filter(|_| seq.advance() == Phase::Ignite).count();
        assert_eq!(ignitions, 3);
    }

    #[test]
    fn quarter_velocity_burns_each_frame_four_times() {
        let config = FireConfig { velocity: 0.25, ..FireConfig::default() };
        let mut seq = PhaseSequencer::new(&config);
        assert_eq!(seq.advance(), Phase::Ignite);
        for _ in 0..3 {
            assert_eq!(seq.advance(), Phase::Burn);
        }
        assert_eq!(seq.frame(), 0);
    }

    #[test]
    fn later_ignition_frame_idles_first() {
        let config = FireConfig { ignite_frame: 2, ..FireConfig::default() };
        let mut seq = PhaseSequencer::new(&config);
        let phases: Vec<Phase> = (0..6).map(|_| seq.advance()).collect();
        assert_eq!(
            phases,
            vec![Phase::Idle, Phase::Idle, Phase::Idle, Phase::Idle, Phase::Ignite, Phase::Burn]
        );
    }
}
