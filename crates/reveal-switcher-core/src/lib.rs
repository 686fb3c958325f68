//! Core systems for reveal-switcher.
//!
//! This crate provides the framework-independent pieces of an animated
//! two-state content switcher:
//!
//! - **Curves**: easing functions, curve combinators, and a named registry
//! - **Interpolation**: scalar, offset, point, and size interpolation
//! - **Geometry**: points, offsets, sizes, rectangles, and closed paths
//! - **Frame Clock**: a ticker registry advanced once per frame by the host
//! - **Timeline**: the controller that drives progress in response to a
//!   visibility flag
//! - **Signals**: observer primitive for timeline phase changes
//!
//! # Timeline Example
//!
//! ```
//! use std::time::Duration;
//! use reveal_switcher_core::{ClockHandle, Curve, Easing, TimelineController};
//!
//! let clock = ClockHandle::new();
//! let mut timeline = TimelineController::new(false, Duration::from_millis(200), clock.clone());
//! let curve = Curve::from(Easing::FastOutSlowIn);
//!
//! timeline.set_visible(true);
//! while clock.has_active_tickers() {
//!     for event in clock.advance(Duration::from_millis(16)) {
//!         if let Some(progress) = timeline.handle_tick(&event) {
//!             let eased = curve.transform(progress);
//!             assert!((0.0..=1.0).contains(&eased));
//!         }
//!     }
//! }
//! assert!(timeline.progress().is_complete());
//! ```

mod clock;
mod curve;
mod easing;
mod error;
pub mod geometry;
pub mod interpolate;
pub mod logging;
pub mod signal;
mod timeline;

pub use clock::{ClockHandle, FrameClock, TickEvent, TickerId};
pub use curve::{Curve, CurveRegistry, CustomCurve, Progress};
pub use easing::{ease, Easing};
pub use error::{AnimationError, AnimationResult};
pub use geometry::{Offset, Path, PathCommand, Point, Rect, Size};
pub use interpolate::{lerp_offset, lerp_scalar, Lerp, Tween};
pub use signal::{ConnectionId, Signal};
pub use timeline::{Direction, TimelineController, TimelinePhase, TimelineState};
