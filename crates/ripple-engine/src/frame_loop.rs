//! Fixed-cadence frame loop over crossbeam channels.
//!
//! [`FrameLoop`] owns the world and a command receiver; the input side
//! of the channel is handed out as a [`CommandSender`] so the
//! keystroke source can live on another thread. Each tick the loop
//! drains every pending command, steps the world once, and presents
//! the resulting frame to the [`RenderSink`]. Commands arriving
//! between ticks are queued, never dropped.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use ripple_core::Command;
use ripple_grid::GridError;

use crate::input::{Binding, Key, KeyBindings};
use crate::world::{Frame, RippleWorld};

/// Consumes one frame per tick. Presentation is infallible; a sink
/// that can fail should record the failure and raise `Quit` through
/// its [`CommandSender`].
pub trait RenderSink {
    /// Present one frame. The borrowed field data is only valid for
    /// the duration of the call.
    fn present(&mut self, frame: &Frame<'_>);
}

/// The loop side of the command channel hung up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The frame loop has exited and no longer receives commands.
    Disconnected,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "frame loop is no longer running"),
        }
    }
}

impl Error for SubmitError {}

/// What became of a submitted key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key decoded to a command, now queued for the next tick.
    Dispatched,
    /// The key is bound to a deliberate no-op.
    Suppressed,
    /// The key has no binding and was ignored.
    Unbound,
}

/// Cloneable handle for feeding commands into a running [`FrameLoop`].
#[derive(Clone, Debug)]
pub struct CommandSender {
    tx: Sender<Command>,
}

impl CommandSender {
    /// Queue a command for the next tick.
    pub fn send(&self, command: Command) -> Result<(), SubmitError> {
        self.tx.send(command).map_err(|_| SubmitError::Disconnected)
    }

    /// Decode a key event through `bindings` and queue the resulting
    /// command, if any.
    pub fn submit_key(
        &self,
        bindings: &KeyBindings,
        key: Key,
    ) -> Result<KeyOutcome, SubmitError> {
        match bindings.decode(key) {
            Some(Binding::Dispatch(command)) => {
                self.send(command)?;
                Ok(KeyOutcome::Dispatched)
            }
            Some(Binding::Suppress) => Ok(KeyOutcome::Suppressed),
            None => Ok(KeyOutcome::Unbound),
        }
    }
}

/// Drives a [`RippleWorld`] at a fixed tick interval until a `Quit`
/// command is applied.
#[derive(Debug)]
pub struct FrameLoop {
    world: RippleWorld,
    commands: Receiver<Command>,
    interval: Duration,
}

impl FrameLoop {
    /// Wrap `world` in a loop ticking every `interval`, returning the
    /// loop and the command handle for the input side.
    pub fn new(world: RippleWorld, interval: Duration) -> (Self, CommandSender) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (
            Self {
                world,
                commands: rx,
                interval,
            },
            CommandSender { tx },
        )
    }

    /// Run until quit, presenting one frame per tick to `sink`.
    ///
    /// Returns the final world state so callers can inspect detection
    /// results after shutdown. If every [`CommandSender`] is dropped
    /// the loop keeps ticking; the simulation does not depend on
    /// input to make progress.
    pub fn run<S: RenderSink>(self, sink: &mut S) -> Result<RippleWorld, GridError> {
        let Self {
            mut world,
            mut commands,
            interval,
        } = self;
        let ticker = crossbeam_channel::tick(interval);
        let mut pending: Vec<Command> = Vec::new();

        loop {
            crossbeam_channel::select! {
                recv(commands) -> msg => match msg {
                    Ok(command) => pending.push(command),
                    // All senders gone: stop selecting on the channel
                    // so the loop does not busy-spin on Err.
                    Err(_) => commands = crossbeam_channel::never(),
                },
                recv(ticker) -> _ => {
                    while let Ok(command) = commands.try_recv() {
                        pending.push(command);
                    }
                    let frame = world.step(pending.drain(..))?;
                    sink.present(&frame);
                    if world.quit_requested() {
                        return Ok(world);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::Direction;

    #[test]
    fn submit_key_reports_outcomes() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let sender = CommandSender { tx };
        let bindings = KeyBindings::default();

        assert_eq!(
            sender.submit_key(&bindings, Key::Space),
            Ok(KeyOutcome::Dispatched)
        );
        assert_eq!(rx.try_recv(), Ok(Command::Inject));

        assert_eq!(
            sender.submit_key(&bindings, Key::Char('s')),
            Ok(KeyOutcome::Suppressed)
        );
        assert_eq!(
            sender.submit_key(&bindings, Key::Char('z')),
            Ok(KeyOutcome::Unbound)
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn submit_key_after_loop_exit_is_disconnected() {
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(rx);
        let sender = CommandSender { tx };
        let bindings = KeyBindings::default();
        assert_eq!(
            sender.submit_key(&bindings, Key::Char('q')),
            Err(SubmitError::Disconnected)
        );
        assert_eq!(
            sender.send(Command::MoveObserver(Direction::North)),
            Err(SubmitError::Disconnected)
        );
    }
}
