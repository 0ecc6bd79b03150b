//! Animation mode state machine.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::Channel;
use crate::pattern::{PatternId, PatternSlot, SharedPhase};
use crate::rand8::Rand8;

/// Default per-tick increment of the shared phase accumulator.
pub const DEFAULT_SPEED: u8 = 2;

/// The animation sub-state: the manual/animating switch, the selected
/// generator, and the phase and randomness the generators share.
///
/// Mode transitions rewrite the channel array (all-on for animation,
/// defaults for manual), which is why the engine mutates channels directly
/// instead of going through the store's bounds-checked entrypoints.
#[derive(Debug, Clone)]
pub struct AnimationEngine<const N: usize> {
    animating: bool,
    shared: SharedPhase,
    slot: PatternSlot<N>,
    rng: Rand8,
}

impl<const N: usize> AnimationEngine<N> {
    pub fn new(speed: u8, seed: u32) -> Self {
        Self {
            animating: false,
            shared: SharedPhase::new(speed),
            slot: PatternSlot::default(),
            rng: Rand8::new(seed),
        }
    }

    pub const fn is_animating(&self) -> bool {
        self.animating
    }

    pub const fn pattern(&self) -> PatternId {
        self.slot.id()
    }

    pub const fn base_hue(&self) -> u8 {
        self.shared.base_hue
    }

    /// Replace the effect PRNG.
    pub fn reseed(&mut self, seed: u32) {
        self.rng = Rand8::new(seed);
    }

    pub const fn set_speed(&mut self, speed: u8) {
        self.shared.speed = speed;
    }

    /// Select the generator that runs on subsequent animated ticks.
    ///
    /// Swaps in a fresh generator, discarding the previous one's progress;
    /// the shared phase accumulator is kept.
    pub fn set_pattern(&mut self, id: PatternId) {
        self.slot = id.to_slot();

        #[cfg(feature = "esp32-log")]
        println!("badge-light: pattern -> {}", id.as_str());
    }

    /// Enter animation mode.
    ///
    /// Forces every channel on at full brightness, clears color cycling,
    /// and spaces the channels evenly around the color wheel. No-op while
    /// already animating. The shared phase accumulator is not reset.
    pub fn enter(&mut self, channels: &mut [Channel; N]) {
        if self.animating {
            return;
        }
        self.animating = true;

        for (i, ch) in channels.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            ch.prepare_for_animation(((i * 256) / N) as u8);
        }
        self.slot.reset();

        #[cfg(feature = "esp32-log")]
        println!("badge-light: enter animation mode");
    }

    /// Leave animation mode, restoring every channel to its default state.
    /// No-op while in manual mode.
    pub fn exit(&mut self, channels: &mut [Channel; N]) {
        if !self.animating {
            return;
        }
        self.animating = false;

        for ch in channels.iter_mut() {
            ch.reset();
        }

        #[cfg(feature = "esp32-log")]
        println!("badge-light: exit animation mode");
    }

    /// Run the selected generator for one tick.
    pub fn advance(&mut self, channels: &mut [Channel; N]) {
        self.slot.advance(&mut self.shared, &mut self.rng, channels);
    }
}
