//! Input command boundary.
//!
//! The button/gesture collaborator either calls the store mutators
//! directly or, when it runs on another execution context, enqueues
//! commands here for the tick loop to drain. The queue is a fixed-size
//! `heapless::Deque` behind a `critical-section` mutex, so pushing from an
//! interrupt handler is safe.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::pattern::PatternId;
use crate::store::ChannelStore;

/// A discrete state-change request from the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip one channel on or off.
    Toggle(usize),
    /// Enable or disable hue cycling on one channel.
    SetColorCycling(usize, bool),
    /// Switch from manual control to pattern-driven animation.
    EnterAnimation,
    /// Return to manual per-channel control.
    ExitAnimation,
    /// Select the animation pattern.
    SetPattern(PatternId),
}

/// Error returned when trying to send to a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub Command);

/// Error returned when trying to receive from an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, interrupt-safe command queue.
///
/// Multiple senders can coexist; typically one receiver (the tick loop)
/// drains the queue.
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Get a receiver handle for this queue.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    /// Try to enqueue a command.
    ///
    /// Returns `Err(TrySendError(command))` if the queue is full.
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    /// Try to dequeue a command.
    ///
    /// Returns `Err(TryReceiveError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`CommandQueue`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Try to enqueue a command.
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        self.queue.try_send(command)
    }
}

/// A receiver handle for a [`CommandQueue`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Try to dequeue a command.
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        self.queue.try_receive()
    }
}

/// Applies queued commands to a store.
pub struct CommandProcessor<'a, const SIZE: usize> {
    commands: CommandReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> CommandProcessor<'a, SIZE> {
    /// Create a new command processor.
    pub const fn new(commands: CommandReceiver<'a, SIZE>) -> Self {
        Self { commands }
    }

    /// Drain all pending commands into the store (non-blocking).
    ///
    /// Call once per tick-loop iteration, before `tick`.
    pub fn process_pending<const N: usize>(&mut self, store: &mut ChannelStore<N>) {
        while let Ok(command) = self.commands.try_receive() {
            match command {
                Command::Toggle(index) => store.toggle(index),
                Command::SetColorCycling(index, enabled) => {
                    store.set_color_cycling(index, enabled);
                }
                Command::EnterAnimation => store.enter_animation_mode(),
                Command::ExitAnimation => store.exit_animation_mode(),
                Command::SetPattern(id) => store.set_pattern(id),
            }
        }
    }
}
