//! Curve evaluation.
//!
//! A [`Curve`] maps normalized progress in `[0, 1]` to an eased value in
//! `[0, 1]`. Curves are pure and stateless; the same input always yields
//! the same output.
//!
//! Two entry points exist:
//!
//! - [`Curve::evaluate`] takes a raw `f32` and rejects values outside
//!   `[0, 1]` with [`AnimationError::OutOfRangeInput`].
//! - [`Curve::transform`] takes a [`Progress`], which is range-checked when
//!   it is built, and therefore cannot fail.
//!
//! Every curve returns exactly `0.0` at `t = 0` and exactly `1.0` at
//! `t = 1`, regardless of the underlying function.
//!
//! # Example
//!
//! ```
//! use reveal_switcher_core::{Curve, CurveRegistry, Easing};
//!
//! let mut registry = CurveRegistry::with_builtins();
//! registry.register("snap-half", Curve::custom(|t| if t < 0.5 { 0.0 } else { 1.0 }))?;
//!
//! assert_eq!(registry.evaluate("linear", 0.25)?, 0.25);
//! assert_eq!(registry.evaluate("snap-half", 0.75)?, 1.0);
//! assert!(registry.evaluate("linear", 1.5).is_err());
//! # Ok::<(), reveal_switcher_core::AnimationError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::easing::{ease, Easing};
use crate::error::{AnimationError, AnimationResult};
use crate::logging::targets;

/// Number of evenly spaced samples used to validate custom curves.
const VALIDATION_SAMPLES: usize = 32;

/// How far a sampled custom curve value may stray outside `[0, 1]`.
const RANGE_TOLERANCE: f32 = 1e-4;

/// A normalized progress value, guaranteed to be within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f32);

impl Progress {
    /// The start of a run.
    pub const ZERO: Self = Self(0.0);
    /// The end of a run.
    pub const ONE: Self = Self(1.0);

    /// Create a progress value, rejecting anything outside `[0, 1]` or NaN.
    pub fn new(value: f32) -> AnimationResult<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AnimationError::OutOfRangeInput { value })
        }
    }

    /// Create a progress value by clamping into `[0, 1]`. NaN maps to zero.
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// The raw value.
    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether this is exactly the start of a run.
    #[inline]
    pub fn is_dismissed(self) -> bool {
        self.0 == 0.0
    }

    /// Whether this is exactly the end of a run.
    #[inline]
    pub fn is_complete(self) -> bool {
        self.0 == 1.0
    }
}

impl TryFrom<f32> for Progress {
    type Error = AnimationError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for f32 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

/// A caller-supplied progress-to-progress function.
#[derive(Clone)]
pub struct CustomCurve(Arc<dyn Fn(f32) -> f32 + Send + Sync>);

impl CustomCurve {
    /// Wrap a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    #[inline]
    fn call(&self, t: f32) -> f32 {
        (self.0)(t)
    }
}

impl fmt::Debug for CustomCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomCurve(..)")
    }
}

/// An easing curve.
#[derive(Debug, Clone)]
pub enum Curve {
    /// One of the built-in easing functions.
    Easing(Easing),
    /// A curve that is `0` until `begin`, runs `inner` across
    /// `[begin, end]`, and is `1` after `end`.
    Interval {
        /// Progress at which the inner curve starts.
        begin: f32,
        /// Progress at which the inner curve completes.
        end: f32,
        /// The curve run within the interval.
        inner: Box<Curve>,
    },
    /// The mirror image of a curve: `1 - f(1 - t)`.
    Flipped(Box<Curve>),
    /// A caller-supplied function.
    Custom(CustomCurve),
}

impl Default for Curve {
    fn default() -> Self {
        Curve::Easing(Easing::EaseInOut)
    }
}

impl From<Easing> for Curve {
    fn from(easing: Easing) -> Self {
        Curve::Easing(easing)
    }
}

impl Curve {
    /// Wrap a caller-supplied function as a curve.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        Curve::Custom(CustomCurve::new(f))
    }

    /// Run `inner` only across the sub-range `[begin, end]` of progress.
    pub fn interval(begin: f32, end: f32, inner: impl Into<Curve>) -> Self {
        Curve::Interval {
            begin,
            end,
            inner: Box::new(inner.into()),
        }
    }

    /// The mirror image of this curve.
    pub fn flipped(self) -> Self {
        Curve::Flipped(Box::new(self))
    }

    /// Evaluate a raw progress value.
    ///
    /// Returns [`AnimationError::OutOfRangeInput`] if `t` is outside `[0, 1]`.
    pub fn evaluate(&self, t: f32) -> AnimationResult<f32> {
        Progress::new(t).map(|progress| self.transform(progress))
    }

    /// Evaluate a progress value that is already known to be in range.
    pub fn transform(&self, t: Progress) -> f32 {
        let t = t.value();
        if t == 0.0 || t == 1.0 {
            return t;
        }

        let value = self.raw(t);
        if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            tracing::warn!(target: targets::CURVE, t, "curve produced a non-finite value, using linear progress");
            t
        }
    }

    fn raw(&self, t: f32) -> f32 {
        match self {
            Curve::Easing(easing) => ease(*easing, t),
            Curve::Interval { begin, end, inner } => {
                let local = ((t - begin) / (end - begin)).clamp(0.0, 1.0);
                inner.transform(Progress::clamped(local))
            }
            Curve::Flipped(inner) => 1.0 - inner.transform(Progress::clamped(1.0 - t)),
            Curve::Custom(custom) => custom.call(t),
        }
    }

    /// Check that this curve is well formed.
    ///
    /// Bézier control points must lie in the unit square, intervals must
    /// satisfy `0 <= begin < end <= 1`, and custom functions must produce
    /// finite values within `[0, 1]` across the unit range.
    pub fn validate(&self) -> AnimationResult<()> {
        match self {
            Curve::Easing(easing) => easing.validate(),
            Curve::Interval { begin, end, inner } => {
                if !(begin.is_finite() && end.is_finite()) || *begin < 0.0 || *end > 1.0 || begin >= end {
                    return Err(AnimationError::invalid_config(format!(
                        "interval must satisfy 0 <= begin < end <= 1, got [{begin}, {end}]"
                    )));
                }
                inner.validate()
            }
            Curve::Flipped(inner) => inner.validate(),
            Curve::Custom(custom) => {
                for i in 0..=VALIDATION_SAMPLES {
                    let t = i as f32 / VALIDATION_SAMPLES as f32;
                    let value = custom.call(t);
                    if !value.is_finite() {
                        return Err(AnimationError::invalid_config(format!(
                            "custom curve produced non-finite value {value} at t={t}"
                        )));
                    }
                    if !(-RANGE_TOLERANCE..=1.0 + RANGE_TOLERANCE).contains(&value) {
                        return Err(AnimationError::invalid_config(format!(
                            "custom curve produced {value} at t={t}, outside [0, 1]"
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}

/// A named collection of curves.
///
/// [`CurveRegistry::with_builtins`] pre-registers every named [`Easing`]
/// under its kebab-case name (`"linear"`, `"ease-in-out"`,
/// `"fast-out-slow-in"`, ...). Custom curves can be added with
/// [`CurveRegistry::register`].
#[derive(Debug, Clone, Default)]
pub struct CurveRegistry {
    curves: HashMap<String, Curve>,
}

impl CurveRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every named built-in easing.
    pub fn with_builtins() -> Self {
        let curves = Easing::NAMED
            .iter()
            .filter_map(|easing| easing.name().map(|name| (name.to_string(), Curve::Easing(*easing))))
            .collect();
        Self { curves }
    }

    /// Register a curve under a name, replacing any existing entry.
    ///
    /// The curve is validated first; malformed curves are rejected with
    /// [`AnimationError::InvalidConfig`].
    pub fn register(&mut self, name: impl Into<String>, curve: impl Into<Curve>) -> AnimationResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AnimationError::invalid_config("curve name must not be empty"));
        }
        let curve = curve.into();
        curve.validate()?;
        tracing::debug!(target: targets::CURVE, name = %name, "registered curve");
        self.curves.insert(name, curve);
        Ok(())
    }

    /// Look up a curve by name.
    pub fn get(&self, name: &str) -> Option<&Curve> {
        self.curves.get(name)
    }

    /// Look up a curve by name, returning [`AnimationError::UnknownCurve`]
    /// if it is missing.
    pub fn resolve(&self, name: &str) -> AnimationResult<Curve> {
        self.get(name)
            .cloned()
            .ok_or_else(|| AnimationError::UnknownCurve(name.to_string()))
    }

    /// Evaluate the named curve at `t`.
    pub fn evaluate(&self, name: &str, t: f32) -> AnimationResult<f32> {
        let curve = self
            .get(name)
            .ok_or_else(|| AnimationError::UnknownCurve(name.to_string()))?;
        curve.evaluate(t)
    }

    /// Whether a curve is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.curves.contains_key(name)
    }

    /// Registered curve names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.curves.keys().map(String::as_str)
    }

    /// Number of registered curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_range() {
        assert!(Progress::new(0.0).is_ok());
        assert!(Progress::new(1.0).is_ok());
        assert_eq!(
            Progress::new(-0.1),
            Err(AnimationError::OutOfRangeInput { value: -0.1 })
        );
        assert!(Progress::new(f32::NAN).is_err());
        assert_eq!(Progress::clamped(3.0), Progress::ONE);
        assert_eq!(Progress::clamped(f32::NAN), Progress::ZERO);
    }

    #[test]
    fn test_evaluate_rejects_out_of_range() {
        let curve = Curve::from(Easing::EaseInOut);
        assert!(matches!(
            curve.evaluate(1.01),
            Err(AnimationError::OutOfRangeInput { .. })
        ));
        assert_eq!(curve.evaluate(0.5).unwrap(), 0.5);
    }

    #[test]
    fn test_endpoints_are_exact() {
        // An offset function that would miss both endpoints on its own.
        let curve = Curve::custom(|t| t * 0.9 + 0.05);
        assert_eq!(curve.evaluate(0.0).unwrap(), 0.0);
        assert_eq!(curve.evaluate(1.0).unwrap(), 1.0);
    }

    #[test]
    fn test_out_of_range_custom_rejected() {
        let overshoot = Curve::custom(|t| t * 3.0 - 1.0);
        assert!(matches!(
            overshoot.validate(),
            Err(AnimationError::InvalidConfig { .. })
        ));

        let mut registry = CurveRegistry::new();
        assert!(registry.register("overshoot", overshoot).is_err());
        assert!(!registry.contains("overshoot"));

        // Rounding noise at the edges is tolerated.
        assert!(Curve::custom(|t| t * 1.000_01).validate().is_ok());
    }

    #[test]
    fn test_interval() {
        let curve = Curve::interval(0.0, 0.5, Easing::Linear);
        assert_eq!(curve.evaluate(0.25).unwrap(), 0.5);
        assert_eq!(curve.evaluate(0.5).unwrap(), 1.0);
        assert_eq!(curve.evaluate(0.8).unwrap(), 1.0);

        let late = Curve::interval(0.5, 1.0, Easing::Linear);
        assert_eq!(late.evaluate(0.25).unwrap(), 0.0);
        assert_eq!(late.evaluate(0.75).unwrap(), 0.5);
    }

    #[test]
    fn test_flipped() {
        let curve = Curve::from(Easing::EaseIn).flipped();
        // Flipped ease-in behaves like ease-out.
        let t = 0.3;
        let expected = ease(Easing::EaseOut, t);
        assert!((curve.evaluate(t).unwrap() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_validation() {
        assert!(Curve::interval(0.6, 0.4, Easing::Linear).validate().is_err());
        assert!(Curve::interval(0.0, 1.2, Easing::Linear).validate().is_err());
        assert!(Curve::custom(|t| 1.0 / (t - 0.5)).validate().is_err());
        assert!(Curve::custom(|t| t * t).validate().is_ok());
    }

    #[test]
    fn test_registry_builtins() {
        let registry = CurveRegistry::with_builtins();
        assert_eq!(registry.len(), Easing::NAMED.len());
        assert!(registry.contains("linear"));
        assert!(registry.contains("ease-in-out"));
        assert!(registry.contains("fast-out-slow-in"));
        assert_eq!(
            registry.evaluate("nope", 0.5),
            Err(AnimationError::UnknownCurve("nope".into()))
        );
    }

    #[test]
    fn test_registry_custom() {
        let mut registry = CurveRegistry::with_builtins();
        registry.register("square", Curve::custom(|t| t * t)).unwrap();
        assert_eq!(registry.evaluate("square", 0.5).unwrap(), 0.25);

        assert!(registry.register("", Easing::Linear).is_err());
        assert!(
            registry
                .register("broken", Curve::custom(|_| f32::INFINITY))
                .is_err()
        );
        assert!(!registry.contains("broken"));
    }
}
