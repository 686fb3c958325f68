//! Frame clock for driving transition timelines.
//!
//! The [`FrameClock`] is a registry of active tickers. A timeline registers
//! a ticker only while it is running and releases it as soon as it settles,
//! so an idle switcher costs the host nothing.
//!
//! The host advances the clock once per frame and delivers the returned
//! [`TickEvent`]s to its components. Each event carries the generation the
//! ticker was registered under; a timeline drops events whose ticker or
//! generation no longer matches, so events produced before a reversal or a
//! disposal can never be applied afterwards.
//!
//! ```
//! use std::time::Duration;
//! use reveal_switcher_core::ClockHandle;
//!
//! let clock = ClockHandle::new();
//! let id = clock.register(1);
//! let events = clock.advance(Duration::from_millis(16));
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].id, id);
//!
//! clock.unregister(id)?;
//! assert!(clock.advance(Duration::from_millis(16)).is_empty());
//! # Ok::<(), reveal_switcher_core::AnimationError>(())
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::{AnimationError, AnimationResult};
use crate::logging::{span_names, targets};

new_key_type! {
    /// A unique identifier for a registered ticker.
    pub struct TickerId;
}

/// A single frame delivered to one ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvent {
    /// The ticker this event belongs to.
    pub id: TickerId,
    /// The generation the ticker was registered under.
    pub generation: u64,
    /// Time elapsed since the previous frame.
    pub delta: Duration,
}

#[derive(Debug)]
struct TickerData {
    generation: u64,
}

/// Registry of active tickers, advanced once per frame by the host.
#[derive(Debug, Default)]
pub struct FrameClock {
    tickers: SlotMap<TickerId, TickerData>,
    last_frame: Option<Instant>,
    frame_count: u64,
}

impl FrameClock {
    /// Create an empty frame clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ticker under the given generation.
    pub fn register(&mut self, generation: u64) -> TickerId {
        if self.tickers.is_empty() {
            self.last_frame = None;
        }
        let id = self.tickers.insert(TickerData { generation });
        tracing::trace!(target: targets::CLOCK, ?id, generation, "ticker registered");
        id
    }

    /// Release a ticker.
    ///
    /// Returns an error if the ticker is unknown or was already released.
    pub fn unregister(&mut self, id: TickerId) -> AnimationResult<()> {
        match self.tickers.remove(id) {
            Some(_) => {
                tracing::trace!(target: targets::CLOCK, ?id, "ticker released");
                Ok(())
            }
            None => Err(AnimationError::InvalidTicker),
        }
    }

    /// Check if a ticker is currently registered.
    pub fn is_active(&self, id: TickerId) -> bool {
        self.tickers.contains_key(id)
    }

    /// Number of registered tickers.
    pub fn active_count(&self) -> usize {
        self.tickers.len()
    }

    /// Whether any ticker is registered. Hosts can stop requesting frames
    /// while this is `false`.
    pub fn has_active_tickers(&self) -> bool {
        !self.tickers.is_empty()
    }

    /// Number of frames that produced at least one event.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance by an explicit frame delta.
    ///
    /// Returns one event per registered ticker. Does nothing when idle.
    pub fn advance(&mut self, delta: Duration) -> Vec<TickEvent> {
        if self.tickers.is_empty() {
            return Vec::new();
        }
        let _span =
            tracing::trace_span!(target: targets::CLOCK, span_names::CLOCK_ADVANCE, ?delta).entered();
        self.frame_count += 1;
        self.tickers
            .iter()
            .map(|(id, data)| TickEvent {
                id,
                generation: data.generation,
                delta,
            })
            .collect()
    }

    /// Advance to a wall-clock instant.
    ///
    /// The delta is measured from the previous call. The first frame after
    /// the clock leaves idle has a zero delta, so a run never starts with a
    /// jump that covers the idle gap.
    pub fn advance_to(&mut self, now: Instant) -> Vec<TickEvent> {
        let delta = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);
        self.advance(delta)
    }
}

/// A cloneable, shared handle to a [`FrameClock`].
#[derive(Debug, Clone, Default)]
pub struct ClockHandle {
    inner: Arc<Mutex<FrameClock>>,
}

impl ClockHandle {
    /// Create a handle to a new, empty frame clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`FrameClock::register`].
    pub fn register(&self, generation: u64) -> TickerId {
        self.inner.lock().register(generation)
    }

    /// See [`FrameClock::unregister`].
    pub fn unregister(&self, id: TickerId) -> AnimationResult<()> {
        self.inner.lock().unregister(id)
    }

    /// See [`FrameClock::is_active`].
    pub fn is_active(&self, id: TickerId) -> bool {
        self.inner.lock().is_active(id)
    }

    /// See [`FrameClock::active_count`].
    pub fn active_count(&self) -> usize {
        self.inner.lock().active_count()
    }

    /// See [`FrameClock::has_active_tickers`].
    pub fn has_active_tickers(&self) -> bool {
        self.inner.lock().has_active_tickers()
    }

    /// See [`FrameClock::frame_count`].
    pub fn frame_count(&self) -> u64 {
        self.inner.lock().frame_count()
    }

    /// See [`FrameClock::advance`].
    pub fn advance(&self, delta: Duration) -> Vec<TickEvent> {
        self.inner.lock().advance(delta)
    }

    /// See [`FrameClock::advance_to`].
    pub fn advance_to(&self, now: Instant) -> Vec<TickEvent> {
        self.inner.lock().advance_to(now)
    }
}
