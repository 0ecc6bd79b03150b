//! Chase pattern

use super::{Pattern, SharedPhase};
use crate::channel::Channel;
use crate::math8::scale8;
use crate::rand8::Rand8;

/// Peak travel per tick is the shared speed scaled by this factor,
/// 8.8 fixed point in channel units.
const STEP_PER_SPEED: u32 = 16;
/// Falloff radius around the peak, 8.8 fixed point in channel units.
const FALLOFF_RADIUS: u32 = 2 << 8;
/// Shared hue advance per tick.
const HUE_DRIFT: u8 = 1;

/// Chase pattern: a peak runs around the channel ring in one direction,
/// wrapping past the last channel. Brightness falls off quadratically with
/// circular distance inside the falloff radius, and the leading edge is
/// halved so the sweep reads as directional.
#[derive(Debug, Clone, Copy)]
pub struct ChasePattern {
    /// Peak position, 8.8 fixed point, wraps at N channels.
    peak: u32,
    hue: u8,
}

impl ChasePattern {
    pub const fn new() -> Self {
        Self { peak: 0, hue: 0 }
    }
}

impl Default for ChasePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Pattern<N> for ChasePattern {
    #[allow(clippy::cast_possible_truncation)]
    fn advance(
        &mut self,
        shared: &mut SharedPhase,
        _rng: &mut Rand8,
        channels: &mut [Channel; N],
    ) {
        let ring = (N as u32) << 8;
        if ring == 0 {
            return;
        }

        self.peak = (self.peak + u32::from(shared.speed) * STEP_PER_SPEED) % ring;
        self.hue = self.hue.wrapping_add(HUE_DRIFT);

        for (i, ch) in channels.iter_mut().enumerate() {
            let pos = (i as u32) << 8;
            let raw = pos.abs_diff(self.peak);
            let distance = raw.min(ring - raw);
            // Distance from the peak measured in its travel direction;
            // small values mean the channel is just ahead of the peak.
            let ahead = (pos + ring - self.peak) % ring;

            let brightness = if distance >= FALLOFF_RADIUS {
                0
            } else {
                let norm = ((distance << 8) / FALLOFF_RADIUS) as u8;
                let mut level = 255 - scale8(255, scale8(norm, norm));
                if ahead > 0 && ahead <= FALLOFF_RADIUS {
                    level >>= 1;
                }
                level
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
