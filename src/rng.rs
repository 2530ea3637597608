//! Random source used by the propagation engine

use rand::rngs::StdRng;
use rand::Rng;

/// Uniform draws in `0..n`
pub trait FireRng {
    fn next_in_range(&mut self, n: u32) -> u32;
}

impl FireRng for StdRng {
    fn next_in_range(&mut self, n: u32) -> u32 {
        self.gen_range(0..n)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted
#[cfg(test)]
pub struct ScriptedRng {
    draws: Vec<u32>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub fn new(draws: Vec<u32>) -> Self {
        Self { draws, pos: 0 }
    }

    pub fn constant(draw: u32) -> Self {
        Self::new(vec![draw])
    }
}

#[cfg(test)]
impl FireRng for ScriptedRng {
    fn next_in_range(&mut self, n: u32) -> u32 {
        let draw = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        assert!(draw < n, "scripted draw {} outside 0..{}", draw, n);
        draw
    }
}
