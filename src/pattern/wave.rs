//! Wave pattern

use super::{Pattern, SharedPhase};
use crate::channel::Channel;
use crate::math8::sin8;
use crate::rand8::Rand8;

/// Wave pattern: a brightness wave travels along the channel row while the
/// hues drift at a quarter of the wave speed.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavePattern;

impl WavePattern {
    pub const fn new() -> Self {
        Self
    }
}

impl<const N: usize> Pattern<N> for WavePattern {
    fn advance(
        &mut self,
        shared: &mut SharedPhase,
        _rng: &mut Rand8,
        channels: &mut [Channel; N],
    ) {
        shared.advance();

        for ch in channels.iter_mut() {
            let phase = shared.base_hue.wrapping_add(ch.animation_offset());
            ch.set_on(true);
            ch.set_brightness(sin8(phase));
            ch.set_hue(ch.animation_offset().wrapping_add(shared.base_hue >> 2));
        }
    }
}
