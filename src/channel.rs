//! Per-channel state record and its mutation primitives.

use smart_leds::hsv::Hsv as HSV;

pub type Hsv = HSV;

/// Number of output channels on the reference badge.
pub const CHANNEL_COUNT: usize = 6;

/// Hue step applied per tick while a channel is color cycling.
pub const CYCLE_HUE_STEP: u8 = 2;

/// Maximum brightness.
pub const MAX_BRIGHTNESS: u8 = 255;

/// State of one output channel.
///
/// A channel keeps its hue and brightness while logically off, so toggling
/// it back on restores the previous look. Hue arithmetic wraps around the
/// 256-point color wheel; brightness arithmetic saturates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    is_on: bool,
    hue: u8,
    brightness: u8,
    is_color_cycling: bool,
    animation_offset: u8,
}

impl Channel {
    /// Default state: off, hue 0, full brightness, not cycling.
    pub const fn new() -> Self {
        Self {
            is_on: false,
            hue: 0,
            brightness: MAX_BRIGHTNESS,
            is_color_cycling: false,
            animation_offset: 0,
        }
    }

    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn is_color_cycling(&self) -> bool {
        self.is_color_cycling
    }

    /// Phase offset assigned when animation mode is entered.
    pub const fn animation_offset(&self) -> u8 {
        self.animation_offset
    }

    /// Flip the on/off state.
    pub const fn toggle(&mut self) {
        self.is_on = !self.is_on;
    }

    pub const fn set_on(&mut self, on: bool) {
        self.is_on = on;
    }

    pub const fn set_hue(&mut self, hue: u8) {
        self.hue = hue;
    }

    pub const fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub const fn set_color_cycling(&mut self, enabled: bool) {
        self.is_color_cycling = enabled;
    }

    /// Raise brightness, saturating at 255.
    pub const fn brighten(&mut self, amount: u8) {
        self.brightness = self.brightness.saturating_add(amount);
    }

    /// Lower brightness, saturating at 0.
    pub const fn fade(&mut self, amount: u8) {
        self.brightness = self.brightness.saturating_sub(amount);
    }

    /// Advance hue by one cycling step if this channel is cycling and on.
    pub const fn advance_cycle_hue(&mut self) {
        if self.is_color_cycling && self.is_on {
            self.hue = self.hue.wrapping_add(CYCLE_HUE_STEP);
        }
    }

    /// Force the channel into the state every pattern starts from: on,
    /// full brightness, cycling cleared, with its phase offset assigned.
    pub const fn prepare_for_animation(&mut self, offset: u8) {
        self.is_on = true;
        self.is_color_cycling = false;
        self.brightness = MAX_BRIGHTNESS;
        self.animation_offset = offset;
    }

    /// Restore the default state.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }

    /// Read-only view for rendering collaborators.
    pub const fn snapshot(&self) -> ChannelSnapshot {
        ChannelSnapshot {
            is_on: self.is_on,
            hue: self.hue,
            brightness: self.brightness,
        }
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::new()
    }
}

/// What the rendering collaborator sees of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSnapshot {
    pub is_on: bool,
    pub hue: u8,
    pub brightness: u8,
}

impl ChannelSnapshot {
    /// Map onto the full-saturation HSV the LED layer renders from.
    ///
    /// An off channel maps to zero value rather than losing its hue.
    pub const fn to_hsv(self) -> Hsv {
        Hsv {
            hue: self.hue,
            sat: 255,
            val: if self.is_on { self.brightness } else { 0 },
        }
    }
}

impl Default for ChannelSnapshot {
    fn default() -> Self {
        Channel::new().snapshot()
    }
}
