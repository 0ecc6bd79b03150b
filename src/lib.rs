#![no_std]

pub mod channel;
pub mod command;
pub mod engine;
pub mod math8;
pub mod pattern;
pub mod rand8;
pub mod scheduler;
pub mod store;

pub use channel::{CHANNEL_COUNT, Channel, ChannelSnapshot, Hsv};
pub use command::{
    Command, CommandProcessor, CommandQueue, CommandReceiver, CommandSender,
};
pub use engine::AnimationEngine;
pub use pattern::{PATTERN_COUNT, Pattern, PatternId, PatternSlot, SharedPhase};
pub use rand8::Rand8;
pub use scheduler::{DEFAULT_TICK_INTERVAL, TickScheduler};
pub use store::ChannelStore;

pub use math8::{hue_step_toward, scale8, sin8};
pub use embassy_time::{Duration, Instant};
pub use smart_leds::hsv::hsv2rgb;

/// Abstract output trait for rendering collaborators
///
/// Implement this trait to push channel state to LED and indicator
/// hardware. Hue-to-RGB conversion, gamma correction, and refresh-rate
/// throttling are the implementor's responsibility.
pub trait OutputDriver {
    /// Write the full channel vector to the hardware.
    fn write(&mut self, channels: &[ChannelSnapshot]);
}
