//! Playback state machine for stepping through a trace.
//!
//! A single [`PlaybackController`] owns the trace being shown and the
//! cursor into it. User actions arrive as [`PlaybackEvent`]s; each one
//! either moves the controller to a new [`PlaybackState`] or is rejected
//! with [`PlaybackError::InvalidTransition`], leaving everything as it was.
//!
//! | From | Event | To |
//! |------|-------|----|
//! | `Idle`, `Configuring` | `Edit` | `Configuring` if ready, else `Idle` |
//! | `Configuring` | `Start` | `Paused` (`Finished` for a one-snapshot trace) |
//! | `Paused` | `Play` | `Playing` |
//! | `Playing` | `Pause` | `Paused` |
//! | `Playing` | `Tick` | `Playing`, or `Finished` on the last snapshot |
//! | `Paused` | `Next` | `Paused`, or `Finished` on the last snapshot |
//! | any running | `End` | `Finished` |
//!
//! `Reset` rewinds any running state to the first snapshot and `Stop`
//! discards the trace, returning to `Configuring`.

use std::time::Duration;

use morimizu_types::Snapshot;
use serde::Serialize;
use tracing::debug;

use crate::config::PlaybackConfig;
use crate::trace::Trace;

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaybackState {
    /// No usable input yet.
    Idle,
    /// Input, algorithm, and order are all chosen; ready to start.
    Configuring,
    /// A trace is loaded and the cursor is waiting for the user.
    Paused,
    /// The cursor advances on every timer tick.
    Playing,
    /// The cursor is on the last snapshot.
    Finished,
}

/// A user action or timer tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The input panel changed; `ready` is true when a non-empty sequence,
    /// an algorithm, and an order are all selected.
    Edit {
        /// Whether the selection is complete.
        ready: bool,
    },
    /// A trace arrived for the current selection.
    Start(Trace),
    /// Begin auto-play.
    Play,
    /// Stop auto-play, keeping the cursor.
    Pause,
    /// Auto-play timer fired.
    Tick,
    /// Advance one snapshot by hand.
    Next,
    /// Rewind to the first snapshot.
    Reset,
    /// Jump to the last snapshot.
    End,
    /// Leave playback and unlock the input panel.
    Stop,
}

impl PlaybackEvent {
    const fn name(&self) -> &'static str {
        match self {
            Self::Edit { .. } => "edit",
            Self::Start(_) => "start",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Tick => "tick",
            Self::Next => "next",
            Self::Reset => "reset",
            Self::End => "end",
            Self::Stop => "stop",
        }
    }
}

/// Errors from [`PlaybackController::apply`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    /// The event is not allowed in the current state.
    #[error("cannot {event} while {state:?}")]
    InvalidTransition {
        /// State the controller was in.
        state: PlaybackState,
        /// Name of the rejected event.
        event: &'static str,
    },
    /// A trace with no snapshots cannot be played.
    #[error("trace has no snapshots")]
    EmptyTrace,
}

/// Which controls the user may press right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Controls {
    /// Request a trace for the current selection.
    pub start: bool,
    /// Leave playback.
    pub stop: bool,
    /// Begin auto-play.
    pub play: bool,
    /// Pause auto-play.
    pub pause: bool,
    /// Rewind to the first snapshot.
    pub reset: bool,
    /// Jump to the last snapshot.
    pub end: bool,
    /// Advance one snapshot.
    pub next: bool,
}

/// Owns a trace and a cursor, and enforces the playback lifecycle.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    state: PlaybackState,
    trace: Option<Trace>,
    cursor: usize,
    interval: Duration,
}

impl PlaybackController {
    /// A controller with no input, auto-playing at `interval` per step.
    pub const fn new(interval: Duration) -> Self {
        Self {
            state: PlaybackState::Idle,
            trace: None,
            cursor: 0,
            interval,
        }
    }

    /// A controller using the configured auto-play interval.
    pub const fn from_config(config: PlaybackConfig) -> Self {
        Self::new(config.interval())
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// Delay between auto-play ticks.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// The snapshot under the cursor, if a trace is loaded.
    pub fn current(&self) -> Option<&Snapshot> {
        self.trace.as_ref()?.snapshots().get(self.cursor)
    }

    /// `(cursor, total snapshots)`; `(0, 0)` when nothing is loaded.
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.trace.as_ref().map_or(0, Trace::len))
    }

    /// Controls enabled in the current state.
    pub const fn controls(&self) -> Controls {
        match self.state {
            PlaybackState::Idle => Controls {
                start: false,
                stop: false,
                play: false,
                pause: false,
                reset: false,
                end: false,
                next: false,
            },
            PlaybackState::Configuring => Controls {
                start: true,
                stop: false,
                play: false,
                pause: false,
                reset: false,
                end: false,
                next: false,
            },
            PlaybackState::Paused => Controls {
                start: false,
                stop: true,
                play: true,
                pause: false,
                reset: true,
                end: true,
                next: true,
            },
            PlaybackState::Playing => Controls {
                start: false,
                stop: true,
                play: false,
                pause: true,
                reset: true,
                end: true,
                next: false,
            },
            PlaybackState::Finished => Controls {
                start: false,
                stop: true,
                play: false,
                pause: false,
                reset: true,
                end: true,
                next: false,
            },
        }
    }

    /// Apply `event` and return the resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::InvalidTransition`] if `event` is not
    /// allowed in the current state, or [`PlaybackError::EmptyTrace`] if a
    /// `Start` carries no snapshots. The controller is unchanged on error.
    pub fn apply(&mut self, event: PlaybackEvent) -> Result<PlaybackState, PlaybackError> {
        use PlaybackState::{Configuring, Finished, Idle, Paused, Playing};

        let from = self.state;
        let name = event.name();
        let reject = || PlaybackError::InvalidTransition {
            state: from,
            event: name,
        };

        match (from, event) {
            (Idle | Configuring, PlaybackEvent::Edit { ready }) => {
                self.state = if ready { Configuring } else { Idle };
            }
            (Configuring, PlaybackEvent::Start(trace)) => {
                if trace.is_empty() {
                    return Err(PlaybackError::EmptyTrace);
                }
                self.trace = Some(trace);
                self.cursor = 0;
                self.state = self.resting_state();
            }
            (Paused, PlaybackEvent::Play) => self.state = Playing,
            (Playing, PlaybackEvent::Pause) => self.state = Paused,
            (Playing, PlaybackEvent::Tick) | (Paused, PlaybackEvent::Next) => {
                self.cursor = self.cursor.saturating_add(1).min(self.last_index());
                self.state = if self.cursor == self.last_index() {
                    Finished
                } else {
                    from
                };
            }
            (Paused | Playing | Finished, PlaybackEvent::Reset) => {
                self.cursor = 0;
                self.state = self.resting_state();
            }
            (Paused | Playing | Finished, PlaybackEvent::End) => {
                self.cursor = self.last_index();
                self.state = Finished;
            }
            (Paused | Playing | Finished, PlaybackEvent::Stop) => {
                self.trace = None;
                self.cursor = 0;
                self.state = Configuring;
            }
            _ => return Err(reject()),
        }

        debug!(from = ?from, to = ?self.state, event = name, cursor = self.cursor, "Playback transition");
        Ok(self.state)
    }

    fn last_index(&self) -> usize {
        self.trace
            .as_ref()
            .map_or(0, |t| t.len().saturating_sub(1))
    }

    /// `Paused` at the first snapshot, or `Finished` if there is only one.
    fn resting_state(&self) -> PlaybackState {
        if self.cursor >= self.last_index() {
            PlaybackState::Finished
        } else {
            PlaybackState::Paused
        }
    }
}
