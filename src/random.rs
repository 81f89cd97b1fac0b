//! Linear congruential generator with caller-owned state.
//!
//! Cheap and reproducible, not statistically strong; use it for jitter and
//! procedural variation, never for anything security related.

const MULTIPLIER: u32 = 1664525;
const INCREMENT: u32 = 1013904223;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Lcg {
        Lcg { state: seed }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);

        self.state
    }

    /// Uniform in `[0, 1)`, from the high 24 bits (low bits of an LCG
    /// cycle quickly)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * (1. / 16777216.)
    }

    /// Uniform in `[min, max)`
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }
}

impl Default for Lcg {
    fn default() -> Lcg {
        Lcg::new(1)
    }
}
