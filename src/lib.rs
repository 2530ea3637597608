//! Doom fire: a heat grid seeded at the bottom edge, spread upward with
//! random cooling and drift, and mapped through the classic 37-color ramp.
//!
//! The simulation core (`sim`, `sequencer`, `propagate`, `grid`, `palette`,
//! `render`) is platform-free. `terminal` and `display` present it in a
//! terminal.

pub mod config;
pub mod display;
pub mod error;
pub mod grid;
pub mod palette;
pub mod propagate;
pub mod render;
pub mod rng;
pub mod sequencer;
pub mod settings;
pub mod sim;
pub mod terminal;

pub use config::FireConfig;
pub use error::FireError;
pub use render::PixelBuffer;
pub use sim::FireSim;
