//! Channel store - the aggregate facade.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::channel::{Channel, ChannelSnapshot};
use crate::engine::{AnimationEngine, DEFAULT_SPEED};
use crate::pattern::PatternId;
use crate::scheduler::TickScheduler;

const DEFAULT_SEED: u32 = 0x6261_6467;

/// Owner of the channel array and the animation sub-state.
///
/// One instance per badge, held by the host tick loop. Every operation is
/// total: out-of-range channel indices and unknown raw pattern values are
/// ignored rather than reported, so a stray input event can never take the
/// device loop down.
pub struct ChannelStore<const N: usize> {
    channels: [Channel; N],
    engine: AnimationEngine<N>,
    scheduler: TickScheduler,
}

impl<const N: usize> ChannelStore<N> {
    /// Create a store with all channels at their default state, in manual
    /// mode, with the rainbow pattern preselected.
    pub fn new() -> Self {
        Self {
            channels: [Channel::new(); N],
            engine: AnimationEngine::new(DEFAULT_SPEED, DEFAULT_SEED),
            scheduler: TickScheduler::new(),
        }
    }

    /// Seed the effect PRNG (sparkle targets, breathing retargets).
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.engine.reseed(seed);
        self
    }

    /// Set the shared animation speed.
    #[must_use]
    pub fn with_speed(mut self, speed: u8) -> Self {
        self.engine.set_speed(speed);
        self
    }

    /// Set the scheduler interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.scheduler = TickScheduler::with_interval(interval);
        self
    }

    /// Flip one channel on or off. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        let Some(ch) = self.channels.get_mut(index) else {
            return;
        };
        ch.toggle();
    }

    /// Enable or disable hue cycling on one channel.
    ///
    /// Ignored while animating; the pattern owns every hue then.
    pub fn set_color_cycling(&mut self, index: usize, enabled: bool) {
        if self.engine.is_animating() {
            return;
        }
        let Some(ch) = self.channels.get_mut(index) else {
            return;
        };
        ch.set_color_cycling(enabled);
    }

    /// Restore one channel to its default state.
    pub fn reset_channel(&mut self, index: usize) {
        let Some(ch) = self.channels.get_mut(index) else {
            return;
        };
        ch.reset();
    }

    /// Apply one scheduler-gated update.
    ///
    /// Safe to call as often as the host likes; state advances at most
    /// once per tick interval. Calling slower than the interval degrades
    /// animation smoothness proportionally.
    pub fn tick(&mut self, now: Instant) {
        if !self.scheduler.try_advance(now) {
            return;
        }

        if self.engine.is_animating() {
            self.engine.advance(&mut self.channels);
        } else {
            for ch in &mut self.channels {
                ch.advance_cycle_hue();
            }
        }
    }

    /// Read-only snapshot of one channel.
    ///
    /// Out-of-range indices return the default (off) snapshot.
    pub fn channel(&self, index: usize) -> ChannelSnapshot {
        self.channels
            .get(index)
            .map(Channel::snapshot)
            .unwrap_or_default()
    }

    /// Whether one channel is currently on. `false` out of range.
    pub fn is_active(&self, index: usize) -> bool {
        self.channels.get(index).is_some_and(Channel::is_on)
    }

    /// Switch to pattern-driven control. No-op while already animating.
    pub fn enter_animation_mode(&mut self) {
        self.engine.enter(&mut self.channels);
    }

    /// Return to manual per-channel control, resetting every channel to
    /// its default state. No-op while already in manual mode.
    pub fn exit_animation_mode(&mut self) {
        self.engine.exit(&mut self.channels);
    }

    /// Select the animation pattern.
    pub fn set_pattern(&mut self, id: PatternId) {
        self.engine.set_pattern(id);
    }

    /// Select a pattern by raw id; values outside the known set are
    /// ignored.
    pub fn set_pattern_raw(&mut self, raw: u8) {
        if let Some(id) = PatternId::from_raw(raw) {
            self.engine.set_pattern(id);
        }
    }

    pub const fn pattern(&self) -> PatternId {
        self.engine.pattern()
    }

    pub const fn is_animating(&self) -> bool {
        self.engine.is_animating()
    }

    /// Snapshot the full channel vector for rendering.
    pub fn snapshots(&self) -> [ChannelSnapshot; N] {
        let mut out = [ChannelSnapshot::default(); N];
        for (slot, ch) in out.iter_mut().zip(&self.channels) {
            *slot = ch.snapshot();
        }
        out
    }

    /// Push the current channel vector to an output driver.
    pub fn render_to<O: OutputDriver>(&self, driver: &mut O) {
        driver.write(&self.snapshots());
    }
}

impl<const N: usize> Default for ChannelStore<N> {
    fn default() -> Self {
        Self::new()
    }
}
