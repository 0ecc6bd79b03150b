//! Sparkle pattern

use super::{Pattern, SharedPhase};
use crate::channel::Channel;
use crate::rand8::Rand8;

/// Chance per tick (out of 256) of igniting a random channel.
const DEFAULT_SPARK_CHANCE: u8 = 64;
/// Brightness lost by every channel each tick.
const DECAY_PER_TICK: u8 = 8;
/// Lowest brightness a fresh spark can land with.
const MIN_SPARK_BRIGHTNESS: u8 = 128;

/// Sparkle pattern: random channels flash up with a random hue, then all
/// channels decay steadily toward black. Channels stay logically on so the
/// decayed level is what renders.
#[derive(Debug, Clone, Copy)]
pub struct SparklePattern {
    spark_chance: u8,
}

impl SparklePattern {
    pub const fn new() -> Self {
        Self {
            spark_chance: DEFAULT_SPARK_CHANCE,
        }
    }

    /// Override the per-tick ignition chance (out of 256).
    #[must_use]
    pub const fn with_spark_chance(mut self, chance: u8) -> Self {
        self.spark_chance = chance;
        self
    }
}

impl Default for SparklePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Pattern<N> for SparklePattern {
    #[allow(clippy::cast_possible_truncation)]
    fn advance(
        &mut self,
        _shared: &mut SharedPhase,
        rng: &mut Rand8,
        channels: &mut [Channel; N],
    ) {
        for ch in channels.iter_mut() {
            ch.set_on(true);
            ch.fade(DECAY_PER_TICK);
        }

        if N > 0 && rng.next_byte() < self.spark_chance {
            let ch = &mut channels[rng.below(N as u8) as usize];
            ch.set_hue(rng.next_byte());
            ch.set_brightness(rng.range(MIN_SPARK_BRIGHTNESS, u8::MAX));
        }
    }
}
