//! Rainbow cycling pattern

use super::{Pattern, SharedPhase};
use crate::channel::{Channel, MAX_BRIGHTNESS};
use crate::rand8::Rand8;

/// Rainbow pattern: every channel fully lit, hues evenly spaced around the
/// wheel by the per-channel offsets and rotating together with the shared
/// phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowPattern;

impl RainbowPattern {
    pub const fn new() -> Self {
        Self
    }
}

impl<const N: usize> Pattern<N> for RainbowPattern {
    fn advance(
        &mut self,
        shared: &mut SharedPhase,
        _rng: &mut Rand8,
        channels: &mut [Channel; N],
    ) {
        shared.advance();

        for ch in channels.iter_mut() {
            ch.set_on(true);
            ch.set_hue(shared.base_hue.wrapping_add(ch.animation_offset()));
            ch.set_brightness(MAX_BRIGHTNESS);
        }
    }
}
