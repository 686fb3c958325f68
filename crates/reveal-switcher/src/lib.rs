//! Animated primary/secondary content switcher.
//!
//! `reveal-switcher` switches the displayed content between a primary and a
//! secondary state with a curve-driven transition. Two styles are
//! available:
//!
//! - [`TransitionStyle::ClipReveal`]: the primary layer scales in (and is
//!   clipped by an optional [`ClipGeometry`] boundary) while the secondary
//!   layer fades out beneath it.
//! - [`TransitionStyle::SlideFade`]: as above, with the primary layer also
//!   sliding in from the right or bottom edge.
//!
//! The crate does no rendering. The host advances a shared [`ClockHandle`]
//! once per frame, delivers the tick events to its switchers, and paints the
//! [`Frame`]s they report.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use reveal_switcher::{ClockHandle, RevealSwitcher, Size, TransitionConfig, TransitionStyle};
//!
//! let clock = ClockHandle::new();
//! let config = TransitionConfig::builder()
//!     .duration(Duration::from_millis(500))
//!     .style(TransitionStyle::SlideFade)
//!     .build_shared()?;
//!
//! let mut switcher = RevealSwitcher::builder("editor", "placeholder")
//!     .show_primary(false)
//!     .size(Size::new(800.0, 600.0))
//!     .config(config)
//!     .build(&clock)?;
//!
//! switcher.set_show_primary(true);
//! for event in clock.advance(Duration::from_millis(250)) {
//!     switcher.handle_tick(&event);
//! }
//! assert_eq!(switcher.progress().value(), 0.5);
//! # Ok::<(), reveal_switcher::SwitcherError>(())
//! ```

mod clip;
mod config;
mod error;
mod resolve;
mod settings;
mod switcher;

pub use reveal_switcher_core;

pub use clip::{ClipGeometry, NoReveal};
pub use config::{
    SlideAxis, TransitionConfig, TransitionConfigBuilder, TransitionStyle, DEFAULT_DURATION,
};
pub use error::{SwitcherError, SwitcherResult};
pub use resolve::{resolve, secondary_visible, FrameVisualParams};
pub use settings::TransitionSettings;
pub use switcher::{Frame, RevealSwitcher, RevealSwitcherBuilder};

// Re-export core types that users need
pub use reveal_switcher_core::{
    ClockHandle, Curve, CurveRegistry, Easing, Offset, Path, PathCommand, Point, Progress, Rect,
    Size, TickEvent, TimelinePhase,
};
