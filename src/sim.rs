//! Fire simulation state: heat grid plus phase sequencer

use crate::config::FireConfig;
use crate::error::FireError;
use crate::grid::HeatGrid;
use crate::propagate;
use crate::render::{self, PixelBuffer};
use crate::rng::FireRng;
use crate::sequencer::{Phase, PhaseSequencer};
use log::debug;

/// Everything one fire instance owns between ticks
#[derive(Clone, Debug)]
pub struct FireSim {
    config: FireConfig,
    grid: HeatGrid,
    sequencer: PhaseSequencer,
}

impl FireSim {
    /// Cold grid with the counter one step before ignition
    pub fn new(config: FireConfig) -> Result<Self, FireError> {
        config.validate()?;
        let grid = HeatGrid::new(config.width, config.fire_height);
        let sequencer = PhaseSequencer::new(&config);
        Ok(Self { config, grid, sequencer })
    }

    pub fn config(&self) -> &FireConfig {
        &self.config
    }

    pub fn grid(&self) -> &HeatGrid {
        &self.grid
    }

    pub fn counter(&self) -> f32 {
        self.sequencer.counter()
    }

    pub fn frame(&self) -> i32 {
        self.sequencer.frame()
    }

    /// Advance one display tick, returning the phase that ran
    pub fn tick<R: FireRng + ?Sized>(&mut self, rng: &mut R) -> Phase {
        let phase = self.sequencer.advance();
        let spread = self.config.spread;

        match phase {
            Phase::Idle => {}
            Phase::Ignite => {
                debug!("igniting {}x{} fire", self.grid.width(), self.grid.height());
                propagate::ignite(&mut self.grid, self.config.palette.max_heat());
            }
            Phase::Burn => propagate::spread(&mut self.grid, spread, rng),
            Phase::Extinguish => {
                propagate::extinguish(&mut self.grid, self.config.extinguish_rows, spread, rng);
                propagate::spread(&mut self.grid, spread, rng);
            }
            Phase::Reset => {
                debug!("fire cycle complete, residual max heat {}", self.grid.max_heat());
            }
        }

        phase
    }

    /// Fresh pixel buffer for the current grid
    pub fn render(&self) -> PixelBuffer {
        let mut buf = PixelBuffer::new(self.grid.width(), self.grid.height());
        self.render_into(&mut buf);
        buf
    }

    pub fn render_into(&self, buf: &mut PixelBuffer) {
        render::render_into(&self.grid, &self.config.palette, buf);
    }
}
