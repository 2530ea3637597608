use crate::error::FireError;
use crate::palette::Palette;

/// Simulation constants for the fire effect
#[derive(Clone, Debug)]
pub struct FireConfig {
    pub width: usize,
    pub display_height: usize,  // Height of the whole display surface
    pub fire_height: usize,     // Rows actually simulated (bottom of the display)
    pub velocity: f32,          // Frame counter advance per tick
    pub spread: u32,            // Random draws are taken from 0..=spread
    pub ignite_frame: i32,
    pub stop_start_frame: i32,
    pub stop_end_frame: i32,
    pub reset_frame: i32,
    pub extinguish_rows: usize, // Bottom rows cooled during the stop window
    pub palette: Palette,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            width: 320,
            display_height: 240,
            fire_height: 168,
            velocity: 0.5,
            spread: 3,
            ignite_frame: 0,
            stop_start_frame: 300,
            stop_end_frame: 400,
            reset_frame: 500,
            extinguish_rows: 7,
            palette: Palette::doom(),
        }
    }
}

impl FireConfig {
    /// Default constants with a different grid size, fire filling the display
    pub fn with_size(width: usize, fire_height: usize) -> Self {
        let defaults = Self::default();
        Self {
            width,
            display_height: fire_height,
            fire_height,
            extinguish_rows: defaults.extinguish_rows.min(fire_height),
            ..defaults
        }
    }

    /// Reject configurations that would produce an unusable simulation
    pub fn validate(&self) -> Result<(), FireError> {
        let invalid = |msg: String| Err(FireError::InvalidConfig(msg));

        if self.width == 0 || self.fire_height == 0 {
            return invalid(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.fire_height
            ));
        }
        if self.fire_height > self.display_height {
            return invalid(format!(
                "fire height {} exceeds display height {}",
                self.fire_height, self.display_height
            ));
        }
        // Steps of at most one frame cannot jump over the ignition frame
        if !self.velocity.is_finite() || self.velocity <= 0.0 || self.velocity > 1.0 {
            return invalid(format!("velocity must be in (0, 1], got {}", self.velocity));
        }
        if self.ignite_frame < 0 {
            return invalid(format!(
                "ignite frame must not be negative, got {}",
                self.ignite_frame
            ));
        }
        if self.spread == 0 {
            return invalid("spread must be at least 1".into());
        }
        if self.palette.len() < 2 || self.palette.len() > 256 {
            return invalid(format!("palette needs 2..=256 colors, got {}", self.palette.len()));
        }
        if self.extinguish_rows > self.fire_height {
            return invalid(format!(
                "extinguish band of {} rows is taller than the fire ({})",
                self.extinguish_rows, self.fire_height
            ));
        }
        let ordered = self.ignite_frame < self.stop_start_frame
            && self.stop_start_frame <= self.stop_end_frame
            && self.stop_end_frame < self.reset_frame;
        if !ordered {
            return invalid(format!(
                "phase frames out of order: ignite {}, stop {}..={}, reset {}",
                self.ignite_frame, self.stop_start_frame, self.stop_end_frame, self.reset_frame
            ));
        }

        Ok(())
    }
}

/// Host-side options for a live run
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub time_step: f32,
    pub seed: Option<u64>,
}

/// Host-side options for printing a single frame
#[derive(Clone, Debug)]
pub struct PrintConfig {
    pub frames: u32,
    pub cols: u16,
    pub rows: u16,
    pub seed: Option<u64>,
}
