//! Transition timeline state and control.
//!
//! A [`TimelineController`] owns the raw progress of one transition and
//! drives it toward `1.0` while the target is visible and toward `0.0`
//! while it is hidden.
//!
//! # Phases
//!
//! ```text
//!                 set_visible(true)
//!   IdleAtStart ────────────────────► RunningForward ──► IdleAtEnd
//!        ▲                              │      ▲              │
//!        │          set_visible(false)  ▼      │ (true)       │ (false)
//!        └──────────────────────── RunningReverse ◄──────────┘
//! ```
//!
//! - Construction snaps to the initial flag. No run plays on first mount.
//! - A reversal mid-run continues from the current progress. The run takes
//!   time proportional to the remaining distance, so there is no snap.
//! - On reaching a bound the controller settles and releases its ticker.
//! - [`TimelineController::dispose`] releases the ticker from any phase
//!   and is idempotent. Tick events issued before disposal are dropped.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use reveal_switcher_core::{ClockHandle, TimelineController, TimelinePhase};
//!
//! let clock = ClockHandle::new();
//! let mut timeline = TimelineController::new(false, Duration::from_millis(500), clock.clone());
//! timeline.set_visible(true);
//!
//! for event in clock.advance(Duration::from_millis(250)) {
//!     timeline.handle_tick(&event);
//! }
//! assert_eq!(timeline.progress().value(), 0.5);
//!
//! for event in clock.advance(Duration::from_millis(250)) {
//!     timeline.handle_tick(&event);
//! }
//! assert_eq!(timeline.phase(), TimelinePhase::IdleAtEnd);
//! assert!(!clock.has_active_tickers());
//! ```

use std::time::Duration;

use crate::clock::{ClockHandle, TickEvent, TickerId};
use crate::curve::Progress;
use crate::logging::{span_names, targets};
use crate::signal::Signal;

/// Direction the timeline is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Moving toward `1.0`.
    Forward,
    /// Moving toward `0.0`.
    Reverse,
    /// Not moving.
    #[default]
    Idle,
}

/// The observable phase of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelinePhase {
    /// Settled at `0.0`.
    IdleAtStart,
    /// Settled at `1.0`.
    IdleAtEnd,
    /// Running toward `1.0`.
    RunningForward,
    /// Running toward `0.0`.
    RunningReverse,
}

impl TimelinePhase {
    /// Check if a run is in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, TimelinePhase::RunningForward | TimelinePhase::RunningReverse)
    }
}

/// Mutable timeline state, owned by a single controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineState {
    progress: Progress,
    direction: Direction,
    elapsed: Duration,
}

impl TimelineState {
    fn settled(visible: bool) -> Self {
        Self {
            progress: if visible { Progress::ONE } else { Progress::ZERO },
            direction: Direction::Idle,
            elapsed: Duration::ZERO,
        }
    }

    /// Current raw (un-eased) progress.
    #[inline]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Current direction of travel.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Time since the current run started or last reversed.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Drives transition progress in response to a visibility flag.
#[derive(Debug)]
pub struct TimelineController {
    /// Time a full `0.0 -> 1.0` run takes.
    duration: Duration,
    state: TimelineState,
    /// Progress at the start of the current run.
    origin: f32,
    /// Last recorded visibility flag.
    visible: bool,
    clock: ClockHandle,
    ticker: Option<TickerId>,
    /// Bumped on every run start, settle, and disposal. Tick events carry the
    /// generation they were issued under and are dropped on mismatch.
    generation: u64,
    disposed: bool,
    phase_changed: Signal<TimelinePhase>,
}

impl TimelineController {
    /// Create a controller settled at the initial flag value.
    ///
    /// No run is started and no ticker is registered.
    pub fn new(visible: bool, duration: Duration, clock: ClockHandle) -> Self {
        tracing::debug!(target: targets::TIMELINE, visible, ?duration, "timeline created");
        Self {
            duration,
            state: TimelineState::settled(visible),
            origin: if visible { 1.0 } else { 0.0 },
            visible,
            clock,
            ticker: None,
            generation: 0,
            disposed: false,
            phase_changed: Signal::new(),
        }
    }

    /// The configured duration of a full run.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The current state.
    #[inline]
    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    /// Current raw (un-eased) progress.
    #[inline]
    pub fn progress(&self) -> Progress {
        self.state.progress
    }

    /// The last recorded visibility flag.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether a ticker is currently held.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.ticker.is_some()
    }

    /// The current phase.
    pub fn phase(&self) -> TimelinePhase {
        match self.state.direction {
            Direction::Forward => TimelinePhase::RunningForward,
            Direction::Reverse => TimelinePhase::RunningReverse,
            Direction::Idle if self.state.progress.is_complete() => TimelinePhase::IdleAtEnd,
            Direction::Idle => TimelinePhase::IdleAtStart,
        }
    }

    /// Signal emitted whenever the phase changes.
    pub fn on_phase_changed(&self) -> &Signal<TimelinePhase> {
        &self.phase_changed
    }

    /// Record a new visibility flag.
    ///
    /// Re-notifying the current value is a no-op. An actual flip starts a
    /// run toward the matching bound. Returns `true` if a run was started.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if self.disposed {
            tracing::warn!(target: targets::TIMELINE, visible, "visibility set on disposed timeline");
            return false;
        }
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        if visible { self.forward() } else { self.reverse() }
    }

    /// Run toward `1.0` from the current progress.
    ///
    /// Does nothing if already running forward or settled at the end. The
    /// recorded visibility flag is left unchanged.
    pub fn forward(&mut self) -> bool {
        match self.phase() {
            TimelinePhase::RunningForward | TimelinePhase::IdleAtEnd => false,
            _ => self.begin_run(Direction::Forward),
        }
    }

    /// Run toward `0.0` from the current progress.
    ///
    /// Does nothing if already running in reverse or settled at the start.
    /// The recorded visibility flag is left unchanged.
    pub fn reverse(&mut self) -> bool {
        match self.phase() {
            TimelinePhase::RunningReverse | TimelinePhase::IdleAtStart => false,
            _ => self.begin_run(Direction::Reverse),
        }
    }

    fn begin_run(&mut self, direction: Direction) -> bool {
        if self.disposed {
            return false;
        }
        let reversal = self.state.direction != Direction::Idle;

        self.release_ticker();
        self.generation += 1;
        self.origin = self.state.progress.value();
        self.state.direction = direction;
        self.state.elapsed = Duration::ZERO;
        self.ticker = Some(self.clock.register(self.generation));

        tracing::debug!(
            target: targets::TIMELINE,
            ?direction,
            from = self.origin,
            reversal,
            generation = self.generation,
            "timeline run started"
        );
        self.phase_changed.emit(self.phase());
        true
    }

    /// Apply one frame.
    ///
    /// Returns the new progress, or `None` if the event was not for this
    /// controller: a different ticker, a stale generation, or a disposed
    /// controller.
    pub fn handle_tick(&mut self, event: &TickEvent) -> Option<Progress> {
        if self.disposed || self.ticker != Some(event.id) || event.generation != self.generation {
            tracing::trace!(
                target: targets::TIMELINE,
                event_generation = event.generation,
                generation = self.generation,
                "dropping stale tick"
            );
            return None;
        }

        let _span = tracing::trace_span!(target: targets::TIMELINE, span_names::TIMELINE_TICK).entered();

        self.state.elapsed += event.delta;
        let distance = if self.duration.is_zero() {
            1.0
        } else {
            self.state.elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };

        let progress = match self.state.direction {
            Direction::Forward => Progress::clamped(self.origin + distance),
            Direction::Reverse => Progress::clamped(self.origin - distance),
            Direction::Idle => return None,
        };
        self.state.progress = progress;
        tracing::trace!(target: targets::TIMELINE, progress = progress.value(), "tick");

        match self.state.direction {
            Direction::Forward if progress.is_complete() => self.settle(),
            Direction::Reverse if progress.is_dismissed() => self.settle(),
            _ => {}
        }
        Some(progress)
    }

    fn settle(&mut self) {
        self.state.direction = Direction::Idle;
        self.origin = self.state.progress.value();
        self.release_ticker();
        self.generation += 1;
        tracing::debug!(target: targets::TIMELINE, progress = self.origin, "timeline settled");
        self.phase_changed.emit(self.phase());
    }

    fn release_ticker(&mut self) {
        if let Some(id) = self.ticker.take() {
            if let Err(err) = self.clock.unregister(id) {
                tracing::warn!(target: targets::TIMELINE, %err, "ticker was already released");
            }
        }
    }

    /// Release the ticker and stop accepting ticks.
    ///
    /// Safe to call from any phase, including mid-run, and idempotent.
    /// Progress and direction are frozen, so a controller disposed mid-run
    /// keeps reporting the phase it was interrupted in.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.release_ticker();
        self.generation += 1;
        self.phase_changed.disconnect_all();
        tracing::debug!(target: targets::TIMELINE, progress = self.state.progress.value(), "timeline disposed");
    }
}

impl Drop for TimelineController {
    fn drop(&mut self) {
        self.dispose();
    }
}
