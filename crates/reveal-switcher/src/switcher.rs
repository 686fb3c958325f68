//! The reveal switcher component.
//!
//! A [`RevealSwitcher`] holds two opaque content handles and switches
//! between them with an animated transition whenever the host flips the
//! `show_primary` flag. It does not paint anything: each frame it hands a
//! [`Frame`] to a single render callback, and the host's composition layer
//! draws the layers with the parameters it contains.
//!
//! # Lifecycle
//!
//! - **Construction**: [`RevealSwitcher::builder`] validates every parameter
//!   and fails with an invalid-config error before anything is rendered.
//! - **Update**: [`RevealSwitcher::set_show_primary`] diffs against the
//!   previously recorded value; only an actual flip starts a run.
//! - **Render**: the host advances a shared [`ClockHandle`] each frame and
//!   delivers the events through [`RevealSwitcher::handle_tick`].
//! - **Disposal**: [`RevealSwitcher::dispose`] (or drop) releases the clock
//!   ticker. Events issued before disposal are ignored.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use reveal_switcher::{ClockHandle, RevealSwitcher, TransitionConfig};
//!
//! let clock = ClockHandle::new();
//! let config = TransitionConfig::builder()
//!     .duration(Duration::from_millis(300))
//!     .build_shared()?;
//!
//! let mut switcher = RevealSwitcher::builder("details", "summary")
//!     .show_primary(false)
//!     .config(config)
//!     .on_frame(|frame| {
//!         println!("scale={} secondary={:?}", frame.params.scale, frame.secondary);
//!     })
//!     .build(&clock)?;
//!
//! switcher.set_show_primary(true);
//! while clock.has_active_tickers() {
//!     for event in clock.advance(Duration::from_millis(16)) {
//!         switcher.handle_tick(&event);
//!     }
//! }
//! assert!(switcher.frame().secondary.is_none());
//! # Ok::<(), reveal_switcher::SwitcherError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use reveal_switcher_core::logging::targets;
use reveal_switcher_core::{
    ClockHandle, Path, Progress, Size, TickEvent, TimelineController, TimelinePhase,
};

use crate::config::TransitionConfig;
use crate::error::{SwitcherError, SwitcherResult};
use crate::resolve::{resolve, secondary_visible, FrameVisualParams};

type FrameCallback<P, S> = Box<dyn FnMut(&Frame<'_, P, S>)>;

/// Everything the host needs to composite one frame.
#[derive(Debug, Clone)]
pub struct Frame<'a, P, S> {
    /// Visual parameters for both layers.
    pub params: FrameVisualParams,
    /// The primary content, always drawn on top.
    pub primary: &'a P,
    /// The secondary content, or `None` when it must not be drawn.
    pub secondary: Option<&'a S>,
    /// The reveal boundary, if a clip geometry provider is configured.
    pub clip: Option<Path>,
    /// The layer size the parameters were computed for.
    pub size: Size,
    /// Raw timeline progress.
    pub progress: Progress,
}

/// Switches between a primary and a secondary content handle with an
/// animated transition.
pub struct RevealSwitcher<P, S> {
    primary: P,
    secondary: S,
    config: Arc<TransitionConfig>,
    timeline: TimelineController,
    size: Size,
    on_frame: Option<FrameCallback<P, S>>,
}

impl<P, S> RevealSwitcher<P, S> {
    /// Start building a switcher for the given content handles.
    pub fn builder(primary: P, secondary: S) -> RevealSwitcherBuilder<P, S> {
        RevealSwitcherBuilder {
            primary,
            secondary,
            show_primary: None,
            config: None,
            size: Size::ZERO,
            on_frame: None,
        }
    }

    /// The most recently recorded `show_primary` value.
    #[inline]
    pub fn show_primary(&self) -> bool {
        self.timeline.is_visible()
    }

    /// Record a new `show_primary` value.
    ///
    /// Re-notifying the current value is a no-op. Returns `true` if a run
    /// was started.
    pub fn set_show_primary(&mut self, show_primary: bool) -> bool {
        let started = self.timeline.set_visible(show_primary);
        if started {
            tracing::debug!(
                target: targets::SWITCHER,
                show_primary,
                progress = self.timeline.progress().value(),
                "switching content"
            );
        }
        started
    }

    /// Apply one clock event and, if it advanced this switcher, invoke the
    /// render callback.
    ///
    /// Returns `true` if a frame was produced.
    pub fn handle_tick(&mut self, event: &TickEvent) -> bool {
        if self.timeline.handle_tick(event).is_none() {
            return false;
        }
        let frame = compose(
            &self.primary,
            &self.secondary,
            &self.config,
            &self.timeline,
            self.size,
        );
        tracing::trace!(
            target: targets::SWITCHER,
            progress = frame.progress.value(),
            scale = frame.params.scale,
            secondary = frame.secondary.is_some(),
            "frame"
        );
        if let Some(on_frame) = self.on_frame.as_mut() {
            on_frame(&frame);
        }
        true
    }

    /// The frame for the current state, computed on demand.
    pub fn frame(&self) -> Frame<'_, P, S> {
        compose(
            &self.primary,
            &self.secondary,
            &self.config,
            &self.timeline,
            self.size,
        )
    }

    /// Set the size of the layers. Used for slide offsets and clip bounds.
    ///
    /// Fails with an invalid-config error, leaving the size unchanged, if
    /// either dimension is negative or not finite.
    pub fn set_size(&mut self, size: Size) -> SwitcherResult<()> {
        check_size(size)?;
        self.size = size;
        Ok(())
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Replace the render callback.
    pub fn set_frame_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&Frame<'_, P, S>) + 'static,
    {
        self.on_frame = Some(Box::new(callback));
    }

    /// Remove the render callback.
    pub fn clear_frame_callback(&mut self) {
        self.on_frame = None;
    }

    /// Raw timeline progress.
    #[inline]
    pub fn progress(&self) -> Progress {
        self.timeline.progress()
    }

    /// The timeline phase.
    #[inline]
    pub fn phase(&self) -> TimelinePhase {
        self.timeline.phase()
    }

    /// Whether a transition is running.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.timeline.is_animating()
    }

    /// The underlying timeline, for observing phase changes.
    #[inline]
    pub fn timeline(&self) -> &TimelineController {
        &self.timeline
    }

    /// The shared transition config.
    #[inline]
    pub fn config(&self) -> &Arc<TransitionConfig> {
        &self.config
    }

    #[inline]
    pub fn primary(&self) -> &P {
        &self.primary
    }

    #[inline]
    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.timeline.is_disposed()
    }

    /// Release the clock ticker and drop the render callback.
    ///
    /// Safe to call at any time, including mid-transition, and idempotent.
    pub fn dispose(&mut self) {
        if self.timeline.is_disposed() {
            return;
        }
        self.timeline.dispose();
        self.on_frame = None;
        tracing::debug!(target: targets::SWITCHER, "switcher disposed");
    }
}

fn check_size(size: Size) -> SwitcherResult<()> {
    if !(size.width.is_finite() && size.height.is_finite()) || size.width < 0.0 || size.height < 0.0 {
        return Err(SwitcherError::invalid_config(format!(
            "size must be finite and non-negative, got {}x{}",
            size.width, size.height
        )));
    }
    Ok(())
}

fn compose<'a, P, S>(
    primary: &'a P,
    secondary: &'a S,
    config: &TransitionConfig,
    timeline: &TimelineController,
    size: Size,
) -> Frame<'a, P, S> {
    let progress = timeline.progress();
    let params = resolve(config.style(), progress, config, size);
    let clip = config
        .clipper()
        .map(|clipper| clipper.boundary_for(size, params.clip_progress));
    let secondary = secondary_visible(timeline.is_visible(), progress).then_some(secondary);

    Frame {
        params,
        primary,
        secondary,
        clip,
        size,
        progress,
    }
}

impl<P, S> Drop for RevealSwitcher<P, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<P: fmt::Debug, S: fmt::Debug> fmt::Debug for RevealSwitcher<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealSwitcher")
            .field("primary", &self.primary)
            .field("secondary", &self.secondary)
            .field("config", &self.config)
            .field("timeline", &self.timeline)
            .field("size", &self.size)
            .field("on_frame", &self.on_frame.is_some())
            .finish()
    }
}

/// Builder for [`RevealSwitcher`].
pub struct RevealSwitcherBuilder<P, S> {
    primary: P,
    secondary: S,
    show_primary: Option<bool>,
    config: Option<Arc<TransitionConfig>>,
    size: Size,
    on_frame: Option<FrameCallback<P, S>>,
}

impl<P, S> RevealSwitcherBuilder<P, S> {
    /// Set the initial `show_primary` value. Required.
    pub fn show_primary(mut self, show_primary: bool) -> Self {
        self.show_primary = Some(show_primary);
        self
    }

    /// Use a shared transition config. Defaults to
    /// [`TransitionConfig::default`].
    pub fn config(mut self, config: Arc<TransitionConfig>) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the initial layer size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the render callback, invoked once per applied tick.
    pub fn on_frame<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Frame<'_, P, S>) + 'static,
    {
        self.on_frame = Some(Box::new(callback));
        self
    }

    /// Validate the parameters and build the switcher.
    ///
    /// The timeline snaps to the initial `show_primary` value; no
    /// transition plays on construction.
    pub fn build(self, clock: &ClockHandle) -> SwitcherResult<RevealSwitcher<P, S>> {
        let show_primary = self
            .show_primary
            .ok_or_else(|| SwitcherError::invalid_config("show_primary is required"))?;
        check_size(self.size)?;
        let config = self.config.unwrap_or_default();

        tracing::debug!(
            target: targets::SWITCHER,
            show_primary,
            style = ?config.style(),
            duration = ?config.duration(),
            "switcher created"
        );

        Ok(RevealSwitcher {
            timeline: TimelineController::new(show_primary, config.duration(), clock.clone()),
            primary: self.primary,
            secondary: self.secondary,
            config,
            size: self.size,
            on_frame: self.on_frame,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use crate::config::TransitionStyle;

    fn pump<P, S>(clock: &ClockHandle, switcher: &mut RevealSwitcher<P, S>, delta: Duration) {
        for event in clock.advance(delta) {
            switcher.handle_tick(&event);
        }
    }

    #[test]
    fn test_show_primary_required() {
        let clock = ClockHandle::new();
        let err = RevealSwitcher::builder(1, 2).build(&clock).unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_invalid_size_rejected() {
        let clock = ClockHandle::new();
        let err = RevealSwitcher::builder(1, 2)
            .show_primary(true)
            .size(Size::new(-1.0, 10.0))
            .build(&clock)
            .unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_set_size_rejects_invalid() {
        let clock = ClockHandle::new();
        let mut switcher = RevealSwitcher::builder((), ())
            .show_primary(false)
            .size(Size::new(100.0, 50.0))
            .config(
                TransitionConfig::builder()
                    .style(TransitionStyle::SlideFade)
                    .build_shared()
                    .unwrap(),
            )
            .build(&clock)
            .unwrap();

        let err = switcher.set_size(Size::new(f32::NAN, -5.0)).unwrap_err();
        assert!(err.is_invalid_config());
        assert!(switcher.set_size(Size::new(10.0, f32::INFINITY)).is_err());
        assert_eq!(switcher.size(), Size::new(100.0, 50.0));

        switcher.set_show_primary(true);
        pump(&clock, &mut switcher, Duration::from_millis(50));
        assert!(switcher.frame().params.slide_offset.x.is_finite());

        switcher.set_size(Size::new(200.0, 50.0)).unwrap();
        assert_eq!(switcher.size(), Size::new(200.0, 50.0));
    }

    #[test]
    fn test_initial_frame_without_animation() {
        let clock = ClockHandle::new();
        let switcher = RevealSwitcher::builder("a", "b")
            .show_primary(true)
            .build(&clock)
            .unwrap();
        assert!(!clock.has_active_tickers());

        let frame = switcher.frame();
        assert_eq!(frame.params.scale, 1.0);
        assert!(frame.secondary.is_none());
        assert!(frame.clip.is_none());
    }

    #[test]
    fn test_callback_once_per_tick() {
        let clock = ClockHandle::new();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();

        let mut switcher = RevealSwitcher::builder((), ())
            .show_primary(false)
            .config(
                TransitionConfig::builder()
                    .duration(Duration::from_millis(100))
                    .build_shared()
                    .unwrap(),
            )
            .on_frame(move |frame| sink.borrow_mut().push(frame.progress.value()))
            .build(&clock)
            .unwrap();

        switcher.set_show_primary(true);
        for _ in 0..4 {
            pump(&clock, &mut switcher, Duration::from_millis(25));
        }
        pump(&clock, &mut switcher, Duration::from_millis(25));

        assert_eq!(frames.borrow().len(), 4);
        assert_eq!(*frames.borrow().last().unwrap(), 1.0);
    }

    #[test]
    fn test_dispose_drops_callback() {
        let clock = ClockHandle::new();
        let calls = Rc::new(RefCell::new(0));
        let sink = calls.clone();
        let mut switcher = RevealSwitcher::builder((), ())
            .show_primary(false)
            .on_frame(move |_| *sink.borrow_mut() += 1)
            .build(&clock)
            .unwrap();

        switcher.set_show_primary(true);
        let pending = clock.advance(Duration::from_millis(10));
        switcher.dispose();
        switcher.dispose();

        for event in &pending {
            assert!(!switcher.handle_tick(event));
        }
        assert_eq!(*calls.borrow(), 0);
        assert!(switcher.is_disposed());
        assert!(!clock.has_active_tickers());
    }

    #[test]
    fn test_slide_fade_frame_uses_size() {
        let clock = ClockHandle::new();
        let switcher = RevealSwitcher::builder((), ())
            .show_primary(false)
            .size(Size::new(240.0, 80.0))
            .config(
                TransitionConfig::builder()
                    .style(TransitionStyle::SlideFade)
                    .build_shared()
                    .unwrap(),
            )
            .build(&clock)
            .unwrap();

        let frame = switcher.frame();
        assert_eq!(frame.params.slide_offset.x, 240.0);
        assert_eq!(frame.params.secondary_opacity, 1.0);
        assert!(frame.secondary.is_some());
    }
}
