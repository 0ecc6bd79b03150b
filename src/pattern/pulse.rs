//! Pulse pattern

use super::{Pattern, SharedPhase};
use crate::channel::{Channel, MAX_BRIGHTNESS};
use crate::math8::hue_step_toward;
use crate::rand8::Rand8;

/// Peak travel per tick, 8.8 fixed point in channel units.
const PEAK_STEP: i32 = 48;
/// Quadratic brightness drop per whole channel of distance past the peak.
const FALLOFF_PER_CHANNEL_SQ: u16 = 40;
/// Floor for channels past the peak; keeps the tail visible.
const MIN_TAIL_BRIGHTNESS: u8 = 20;
/// Hue movement toward the target per tick.
const HUE_STEP: u8 = 3;
/// Applied to the target hue every `RETARGET_TICKS`.
const TARGET_HUE_ADVANCE: u8 = 43;
const RETARGET_TICKS: u8 = 64;

/// Pulse pattern: a peak sweeps back and forth across the channel row,
/// reversing at the ends. Channels at or before the peak render at full
/// brightness; channels past it fall off quadratically. All channels share
/// one hue that chases a periodically advanced target.
#[derive(Debug, Clone)]
pub struct PulsePattern {
    /// Peak position, 8.8 fixed point in channel units.
    peak: i32,
    /// Sweep direction, +1 or -1.
    direction: i32,
    hue: u8,
    target_hue: u8,
    retarget_in: u8,
}

impl PulsePattern {
    pub const fn new() -> Self {
        Self {
            peak: 0,
            direction: 1,
            hue: 0,
            target_hue: TARGET_HUE_ADVANCE,
            retarget_in: RETARGET_TICKS,
        }
    }

    fn advance_sweep<const N: usize>(&mut self) {
        let max = ((N as i32) - 1) << 8;
        if max <= 0 {
            return;
        }
        self.peak += self.direction * PEAK_STEP;
        if self.peak >= max {
            self.peak = max;
            self.direction = -1;
        } else if self.peak <= 0 {
            self.peak = 0;
            self.direction = 1;
        }
    }

    fn advance_hue(&mut self) {
        self.retarget_in -= 1;
        if self.retarget_in == 0 {
            self.retarget_in = RETARGET_TICKS;
            self.target_hue = self.target_hue.wrapping_add(TARGET_HUE_ADVANCE);
        }
        self.hue = hue_step_toward(self.hue, self.target_hue, HUE_STEP);
    }
}

impl Default for PulsePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Pattern<N> for PulsePattern {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn advance(
        &mut self,
        _shared: &mut SharedPhase,
        _rng: &mut Rand8,
        channels: &mut [Channel; N],
    ) {
        self.advance_sweep::<N>();
        self.advance_hue();

        let peak_channel = (self.peak >> 8) as usize;
        for (i, ch) in channels.iter_mut().enumerate() {
            let brightness = if i <= peak_channel {
                MAX_BRIGHTNESS
            } else {
                let distance = (i - peak_channel) as u16;
                let drop = FALLOFF_PER_CHANNEL_SQ.saturating_mul(distance * distance);
                let level = u16::from(MAX_BRIGHTNESS).saturating_sub(drop) as u8;
                level.max(MIN_TAIL_BRIGHTNESS)
            };
            ch.set_on(true);
            ch.set_hue(self.hue);
            ch.set_brightness(brightness);
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
