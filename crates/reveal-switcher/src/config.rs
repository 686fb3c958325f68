//! Transition configuration.
//!
//! A [`TransitionConfig`] is immutable once built and can be shared between
//! any number of switchers through an `Arc`.
//!
//! ```
//! use std::time::Duration;
//! use reveal_switcher::{Curve, Easing, TransitionConfig, TransitionStyle};
//!
//! let config = TransitionConfig::builder()
//!     .duration(Duration::from_millis(400))
//!     .style(TransitionStyle::SlideFade)
//!     .main_curve(Easing::FastOutSlowIn)
//!     .fade_curve(Curve::interval(0.0, 0.5, Easing::Linear))
//!     .horizontal_slide(false)
//!     .build()?;
//!
//! assert_eq!(config.duration(), Duration::from_millis(400));
//! # Ok::<(), reveal_switcher::SwitcherError>(())
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reveal_switcher_core::logging::targets;
use reveal_switcher_core::{Curve, Easing};
use serde::{Deserialize, Serialize};

use crate::clip::ClipGeometry;
use crate::error::{SwitcherError, SwitcherResult};

/// Default duration of a full transition.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(250);

/// How the primary content is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionStyle {
    /// Scale (and clip, if a clipper is set) the primary layer in place.
    #[default]
    ClipReveal,
    /// Scale and clip as above while sliding the primary layer in from an
    /// edge.
    SlideFade,
}

/// The axis a [`TransitionStyle::SlideFade`] transition slides along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideAxis {
    /// Slide in from the right edge.
    #[default]
    Horizontal,
    /// Slide in from the bottom edge.
    Vertical,
}

impl SlideAxis {
    fn from_horizontal(horizontal: bool) -> Self {
        if horizontal { SlideAxis::Horizontal } else { SlideAxis::Vertical }
    }
}

/// Immutable transition parameters.
#[derive(Clone)]
pub struct TransitionConfig {
    duration: Duration,
    main_curve: Curve,
    slide_curve: Curve,
    fade_curve: Curve,
    style: TransitionStyle,
    slide_axis: SlideAxis,
    clipper: Option<Arc<dyn ClipGeometry>>,
}

impl TransitionConfig {
    /// Start building a config from the defaults.
    pub fn builder() -> TransitionConfigBuilder {
        TransitionConfigBuilder::default()
    }

    /// Time a full `0 -> 1` run takes.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Curve for scale and clip progress.
    #[inline]
    pub fn main_curve(&self) -> &Curve {
        &self.main_curve
    }

    /// Curve for the slide offset.
    #[inline]
    pub fn slide_curve(&self) -> &Curve {
        &self.slide_curve
    }

    /// Curve for the secondary layer's fade.
    #[inline]
    pub fn fade_curve(&self) -> &Curve {
        &self.fade_curve
    }

    #[inline]
    pub fn style(&self) -> TransitionStyle {
        self.style
    }

    #[inline]
    pub fn slide_axis(&self) -> SlideAxis {
        self.slide_axis
    }

    /// Whether slides run horizontally.
    #[inline]
    pub fn horizontal_slide(&self) -> bool {
        self.slide_axis == SlideAxis::Horizontal
    }

    /// The clip geometry provider, if any.
    #[inline]
    pub fn clipper(&self) -> Option<&dyn ClipGeometry> {
        self.clipper.as_deref()
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            main_curve: Curve::Easing(Easing::EaseInOut),
            slide_curve: Curve::Easing(Easing::EaseInOut),
            fade_curve: Curve::Easing(Easing::EaseInOut),
            style: TransitionStyle::ClipReveal,
            slide_axis: SlideAxis::Horizontal,
            clipper: None,
        }
    }
}

impl fmt::Debug for TransitionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionConfig")
            .field("duration", &self.duration)
            .field("main_curve", &self.main_curve)
            .field("slide_curve", &self.slide_curve)
            .field("fade_curve", &self.fade_curve)
            .field("style", &self.style)
            .field("slide_axis", &self.slide_axis)
            .field("clipper", &self.clipper.is_some())
            .finish()
    }
}

/// Builder for [`TransitionConfig`].
///
/// Nothing is validated until [`build`](Self::build); the first invalid
/// value is reported there.
#[derive(Debug, Default)]
pub struct TransitionConfigBuilder {
    config: TransitionConfig,
    duration_error: Option<String>,
}

impl TransitionConfigBuilder {
    /// Set the duration of a full run. Zero is allowed and makes every
    /// transition instantaneous.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.config.duration = duration;
        self.duration_error = None;
        self
    }

    /// Set the duration in seconds. Negative or non-finite values are
    /// rejected at [`build`](Self::build).
    pub fn duration_secs(mut self, secs: f64) -> Self {
        match Duration::try_from_secs_f64(secs) {
            Ok(duration) => {
                self.config.duration = duration;
                self.duration_error = None;
            }
            Err(_) => {
                self.duration_error = Some(format!(
                    "duration must be a finite, non-negative number of seconds, got {secs}"
                ));
            }
        }
        self
    }

    /// Set the curve for scale and clip progress.
    pub fn main_curve(mut self, curve: impl Into<Curve>) -> Self {
        self.config.main_curve = curve.into();
        self
    }

    /// Set the curve for the slide offset.
    pub fn slide_curve(mut self, curve: impl Into<Curve>) -> Self {
        self.config.slide_curve = curve.into();
        self
    }

    /// Set the curve for the secondary layer's fade.
    pub fn fade_curve(mut self, curve: impl Into<Curve>) -> Self {
        self.config.fade_curve = curve.into();
        self
    }

    /// Set the transition style.
    pub fn style(mut self, style: TransitionStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Slide horizontally (`true`, the default) or vertically.
    pub fn horizontal_slide(mut self, horizontal: bool) -> Self {
        self.config.slide_axis = SlideAxis::from_horizontal(horizontal);
        self
    }

    /// Set the slide axis.
    pub fn slide_axis(mut self, axis: SlideAxis) -> Self {
        self.config.slide_axis = axis;
        self
    }

    /// Set the clip geometry provider.
    pub fn clipper(mut self, clipper: impl ClipGeometry + 'static) -> Self {
        self.config.clipper = Some(Arc::new(clipper));
        self
    }

    /// Set a shared clip geometry provider.
    pub fn shared_clipper(mut self, clipper: Arc<dyn ClipGeometry>) -> Self {
        self.config.clipper = Some(clipper);
        self
    }

    /// Validate and build the config.
    pub fn build(self) -> SwitcherResult<TransitionConfig> {
        if let Some(reason) = self.duration_error {
            return Err(SwitcherError::invalid_config(reason));
        }

        let curves = [
            ("main", &self.config.main_curve),
            ("slide", &self.config.slide_curve),
            ("fade", &self.config.fade_curve),
        ];
        for (name, curve) in curves {
            curve.validate().map_err(|err| {
                SwitcherError::invalid_config(format!("{name} curve is malformed: {err}"))
            })?;
        }

        tracing::debug!(target: targets::SWITCHER, config = ?self.config, "transition config built");
        Ok(self.config)
    }

    /// Validate and build a shareable config.
    pub fn build_shared(self) -> SwitcherResult<Arc<TransitionConfig>> {
        self.build().map(Arc::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_switcher_core::{Path, Size};

    #[test]
    fn test_defaults() {
        let config = TransitionConfig::builder().build().unwrap();
        assert_eq!(config.duration(), DEFAULT_DURATION);
        assert_eq!(config.style(), TransitionStyle::ClipReveal);
        assert!(config.horizontal_slide());
        assert!(config.clipper().is_none());
        assert!(matches!(config.main_curve(), Curve::Easing(Easing::EaseInOut)));
        assert!(matches!(config.slide_curve(), Curve::Easing(Easing::EaseInOut)));
        assert!(matches!(config.fade_curve(), Curve::Easing(Easing::EaseInOut)));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = TransitionConfig::builder().duration_secs(-0.5).build().unwrap_err();
        assert!(err.is_invalid_config());

        let err = TransitionConfig::builder().duration_secs(f64::NAN).build().unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_zero_duration_allowed() {
        let config = TransitionConfig::builder().duration_secs(0.0).build().unwrap();
        assert!(config.duration().is_zero());
    }

    #[test]
    fn test_malformed_curve_rejected() {
        let err = TransitionConfig::builder()
            .fade_curve(Curve::custom(|_| f32::NAN))
            .build()
            .unwrap_err();
        assert!(err.is_invalid_config());
        assert!(err.to_string().contains("fade curve"));

        let err = TransitionConfig::builder()
            .main_curve(Easing::CubicBezier {
                x1: -1.0,
                y1: 0.0,
                x2: 0.5,
                y2: 1.0,
            })
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("main curve"));
    }

    #[test]
    fn test_out_of_range_custom_curve_rejected() {
        let err = TransitionConfig::builder()
            .main_curve(Curve::custom(|t| t * 3.0 - 1.0))
            .build()
            .unwrap_err();
        assert!(err.is_invalid_config());
        assert!(err.to_string().contains("main curve"));
    }

    #[test]
    fn test_clipper_and_axis() {
        let config = TransitionConfig::builder()
            .clipper(|_size: Size, _progress: f32| Path::new())
            .horizontal_slide(false)
            .build()
            .unwrap();
        assert!(config.clipper().is_some());
        assert_eq!(config.slide_axis(), SlideAxis::Vertical);
    }
}
