//! Fixed-timestep frame clock
//!
//! Converts an arbitrary monotonic counter into 60 Hz logical ticks using
//! only integer math: elapsed counter units are accumulated scaled by the
//! tick rate, and one tick is due whenever the accumulator holds a full
//! counter-frequency's worth. No division, no floats, no drift.

use crate::consts::TICK_RATE;

#[derive(Debug, Clone)]
pub struct FrameClock {
    frequency: u64,
    last: u64,
    acc: u64,
}

impl FrameClock {
    /// `frequency` is the counter's units-per-second; `now` the current
    /// counter reading.
    pub fn new(frequency: u64, now: u64) -> FrameClock {
        FrameClock {
            frequency,
            last: now,
            acc: 0,
        }
    }

    /// Feed the current counter reading into the accumulator.
    pub fn advance(&mut self, now: u64) {
        self.acc = self
            .acc
            .wrapping_add(now.wrapping_sub(self.last).wrapping_mul(TICK_RATE));
        self.last = now;
    }

    /// Take one logical tick out of the accumulator if one is due.
    pub fn consume(&mut self) -> bool {
        if self.acc >= self.frequency {
            self.acc -= self.frequency;
            true
        } else {
            false
        }
    }

    /// Drop any pending ticks. Called when the caller hits its catch-up
    /// budget, so a long stall slows the game down instead of spiraling.
    pub fn discard_backlog(&mut self) {
        self.acc = 0;
    }
}
