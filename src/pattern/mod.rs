//! Animation pattern generators.
//!
//! All patterns are stored in an enum to avoid heap allocations.
//! Each pattern implements the `Pattern` trait and owns exactly its own
//! progress fields, so generators can be driven in isolation with an
//! explicit phase and a seeded generator.

mod breathing;
mod chase;
mod pulse;
mod rainbow;
mod sparkle;
mod wave;

pub use breathing::BreathingPattern;
pub use chase::ChasePattern;
pub use pulse::PulsePattern;
pub use rainbow::RainbowPattern;
pub use sparkle::SparklePattern;
pub use wave::WavePattern;

use crate::channel::Channel;
use crate::rand8::Rand8;

const PATTERN_NAME_RAINBOW: &str = "rainbow";
const PATTERN_NAME_WAVE: &str = "wave";
const PATTERN_NAME_PULSE: &str = "pulse";
const PATTERN_NAME_SPARKLE: &str = "sparkle";
const PATTERN_NAME_CHASE: &str = "chase";
const PATTERN_NAME_BREATHING: &str = "breathing";

const PATTERN_ID_RAINBOW: u8 = 0;
const PATTERN_ID_WAVE: u8 = 1;
const PATTERN_ID_PULSE: u8 = 2;
const PATTERN_ID_SPARKLE: u8 = 3;
const PATTERN_ID_CHASE: u8 = 4;
const PATTERN_ID_BREATHING: u8 = 5;

/// Number of known patterns.
pub const PATTERN_COUNT: u8 = 6;

/// Phase state shared by the pattern generators: the hue accumulator most
/// patterns rotate each tick and its per-tick increment.
#[derive(Debug, Clone, Copy)]
pub struct SharedPhase {
    pub base_hue: u8,
    pub speed: u8,
}

impl SharedPhase {
    pub const fn new(speed: u8) -> Self {
        Self { base_hue: 0, speed }
    }

    /// Advance the accumulator by one tick.
    pub const fn advance(&mut self) {
        self.base_hue = self.base_hue.wrapping_add(self.speed);
    }
}

pub trait Pattern<const N: usize> {
    /// Recompute the full channel vector for one tick.
    fn advance(
        &mut self,
        shared: &mut SharedPhase,
        rng: &mut Rand8,
        channels: &mut [Channel; N],
    );

    /// Reset pattern progress state.
    fn reset(&mut self) {}
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot<const N: usize> {
    /// Rotating evenly-spaced hues at full brightness
    Rainbow(RainbowPattern),
    /// Traveling brightness wave with slow hue drift
    Wave(WavePattern),
    /// Peak sweeping back and forth with quadratic falloff
    Pulse(PulsePattern),
    /// Random single-channel flashes decaying to black
    Sparkle(SparklePattern),
    /// Directional peak running around the channel ring
    Chase(ChasePattern),
    /// Out-of-sync sine breathing with drifting hues
    Breathing(BreathingPattern<N>),
}

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    Rainbow = PATTERN_ID_RAINBOW,
    Wave = PATTERN_ID_WAVE,
    Pulse = PATTERN_ID_PULSE,
    Sparkle = PATTERN_ID_SPARKLE,
    Chase = PATTERN_ID_CHASE,
    Breathing = PATTERN_ID_BREATHING,
}

impl<const N: usize> Default for PatternSlot<N> {
    fn default() -> Self {
        Self::Rainbow(RainbowPattern::new())
    }
}

impl PatternId {
    /// Decode a raw id; values outside the known set yield `None`.
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_RAINBOW => Self::Rainbow,
            PATTERN_ID_WAVE => Self::Wave,
            PATTERN_ID_PULSE => Self::Pulse,
            PATTERN_ID_SPARKLE => Self::Sparkle,
            PATTERN_ID_CHASE => Self::Chase,
            PATTERN_ID_BREATHING => Self::Breathing,
            _ => return None,
        })
    }

    /// Build a fresh generator for this pattern.
    pub fn to_slot<const N: usize>(self) -> PatternSlot<N> {
        match self {
            Self::Rainbow => PatternSlot::Rainbow(RainbowPattern::new()),
            Self::Wave => PatternSlot::Wave(WavePattern::new()),
            Self::Pulse => PatternSlot::Pulse(PulsePattern::new()),
            Self::Sparkle => PatternSlot::Sparkle(SparklePattern::new()),
            Self::Chase => PatternSlot::Chase(ChasePattern::new()),
            Self::Breathing => PatternSlot::Breathing(BreathingPattern::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::Wave => PATTERN_NAME_WAVE,
            Self::Pulse => PATTERN_NAME_PULSE,
            Self::Sparkle => PATTERN_NAME_SPARKLE,
            Self::Chase => PATTERN_NAME_CHASE,
            Self::Breathing => PATTERN_NAME_BREATHING,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_RAINBOW => Some(Self::Rainbow),
            PATTERN_NAME_WAVE => Some(Self::Wave),
            PATTERN_NAME_PULSE => Some(Self::Pulse),
            PATTERN_NAME_SPARKLE => Some(Self::Sparkle),
            PATTERN_NAME_CHASE => Some(Self::Chase),
            PATTERN_NAME_BREATHING => Some(Self::Breathing),
            _ => None,
        }
    }
}

impl<const N: usize> PatternSlot<N> {
    /// Run the current generator for one tick.
    pub fn advance(
        &mut self,
        shared: &mut SharedPhase,
        rng: &mut Rand8,
        channels: &mut [Channel; N],
    ) {
        match self {
            Self::Rainbow(pattern) => pattern.advance(shared, rng, channels),
            Self::Wave(pattern) => pattern.advance(shared, rng, channels),
            Self::Pulse(pattern) => pattern.advance(shared, rng, channels),
            Self::Sparkle(pattern) => pattern.advance(shared, rng, channels),
            Self::Chase(pattern) => pattern.advance(shared, rng, channels),
            Self::Breathing(pattern) => pattern.advance(shared, rng, channels),
        }
    }

    /// Reset the generator's progress state.
    pub fn reset(&mut self) {
        match self {
            Self::Rainbow(pattern) => Pattern::<N>::reset(pattern),
            Self::Wave(pattern) => Pattern::<N>::reset(pattern),
            Self::Pulse(pattern) => Pattern::<N>::reset(pattern),
            Self::Sparkle(pattern) => Pattern::<N>::reset(pattern),
            Self::Chase(pattern) => Pattern::<N>::reset(pattern),
            Self::Breathing(pattern) => Pattern::<N>::reset(pattern),
        }
    }

    /// Get the pattern ID for external observation
    pub const fn id(&self) -> PatternId {
        match self {
            Self::Rainbow(_) => PatternId::Rainbow,
            Self::Wave(_) => PatternId::Wave,
            Self::Pulse(_) => PatternId::Pulse,
            Self::Sparkle(_) => PatternId::Sparkle,
            Self::Chase(_) => PatternId::Chase,
            Self::Breathing(_) => PatternId::Breathing,
        }
    }
}
