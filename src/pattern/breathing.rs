//! Breathing pattern

use super::{Pattern, SharedPhase};
use crate::channel::Channel;
use crate::math8::{hue_step_toward, scale8, sin8};
use crate::rand8::Rand8;

/// Phase advance per tick is the shared speed scaled by this factor.
const PHASE_STEP_PER_SPEED: u16 = 8;
/// Per-channel phase offset so channels breathe slightly out of sync.
const CHANNEL_PHASE_OFFSET: u8 = 7;
/// Hue drift toward the target per tick.
const HUE_STEP: u8 = 1;
/// Chance per tick (out of 256) of re-choosing a channel's target hue.
const RETARGET_CHANCE: u8 = 4;

/// Breathing pattern: a sine master brightness, squared for perceptual
/// gamma, with each channel slightly phase shifted. Hues wander the wheel
/// toward randomly re-chosen targets.
#[derive(Debug, Clone)]
pub struct BreathingPattern<const N: usize> {
    /// Sine phase accumulator; the high byte indexes the sine table.
    phase: u16,
    target_hues: [u8; N],
}

impl<const N: usize> BreathingPattern<N> {
    pub const fn new() -> Self {
        Self {
            phase: 0,
            target_hues: [0; N],
        }
    }
}

impl<const N: usize> Default for BreathingPattern<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Pattern<N> for BreathingPattern<N> {
    #[allow(clippy::cast_possible_truncation)]
    fn advance(
        &mut self,
        shared: &mut SharedPhase,
        rng: &mut Rand8,
        channels: &mut [Channel; N],
    ) {
        self.phase = self
            .phase
            .wrapping_add(u16::from(shared.speed) * PHASE_STEP_PER_SPEED);
        let phase_hi = (self.phase >> 8) as u8;

        for (i, ch) in channels.iter_mut().enumerate() {
            let offset = (i as u8).wrapping_mul(CHANNEL_PHASE_OFFSET);
            let master = sin8(phase_hi.wrapping_add(offset));

            ch.set_on(true);
            ch.set_brightness(scale8(master, master));

            if rng.next_byte() < RETARGET_CHANCE {
                self.target_hues[i] = rng.next_byte();
            }
            ch.set_hue(hue_step_toward(ch.hue(), self.target_hues[i], HUE_STEP));
        }
    }

    fn reset(&mut self) {
        self.phase = 0;
    }
}
