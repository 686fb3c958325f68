//! Easing functions for smooth animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value that creates smoother, more natural-looking animations.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::AnimationError;

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
    /// Cubic ease-in (more pronounced than quadratic).
    EaseInCubic,
    /// Cubic ease-out (more pronounced than quadratic).
    EaseOutCubic,
    /// Cubic ease-in-out (more pronounced than quadratic).
    EaseInOutCubic,
    /// Sinusoidal ease-in.
    EaseInSine,
    /// Sinusoidal ease-out.
    EaseOutSine,
    /// Sinusoidal ease-in-out.
    EaseInOutSine,
    /// Quick acceleration with a long, gentle settle. Bézier (0.4, 0.0, 0.2, 1.0).
    FastOutSlowIn,
    /// Constant start speed with a gentle settle. Bézier (0.0, 0.0, 0.2, 1.0).
    LinearOutSlowIn,
    /// Quick acceleration ending at constant speed. Bézier (0.4, 0.0, 1.0, 1.0).
    FastOutLinearIn,
    /// A cubic Bézier from (0, 0) to (1, 1) with two control points.
    ///
    /// `x1` and `x2` must lie in `[0, 1]` so the curve is a function of time.
    CubicBezier {
        /// First control point, x.
        x1: f32,
        /// First control point, y.
        y1: f32,
        /// Second control point, x.
        x2: f32,
        /// Second control point, y.
        y2: f32,
    },
}

impl Easing {
    /// Every named easing, in registration order.
    pub const NAMED: [Easing; 13] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::FastOutSlowIn,
        Easing::LinearOutSlowIn,
        Easing::FastOutLinearIn,
    ];

    /// The kebab-case name of this easing, or `None` for [`Easing::CubicBezier`].
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseInCubic => "ease-in-cubic",
            Easing::EaseOutCubic => "ease-out-cubic",
            Easing::EaseInOutCubic => "ease-in-out-cubic",
            Easing::EaseInSine => "ease-in-sine",
            Easing::EaseOutSine => "ease-out-sine",
            Easing::EaseInOutSine => "ease-in-out-sine",
            Easing::FastOutSlowIn => "fast-out-slow-in",
            Easing::LinearOutSlowIn => "linear-out-slow-in",
            Easing::FastOutLinearIn => "fast-out-linear-in",
            Easing::CubicBezier { .. } => return None,
        };
        Some(name)
    }

    /// Check that the easing parameters describe a valid curve.
    pub fn validate(&self) -> Result<(), AnimationError> {
        if let Easing::CubicBezier { x1, y1, x2, y2 } = *self {
            if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                return Err(AnimationError::invalid_config(
                    "cubic bezier control points must be finite",
                ));
            }
            if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(AnimationError::invalid_config(format!(
                    "cubic bezier x control points must be within [0, 1], got x1={x1}, x2={x2}"
                )));
            }
            if !(0.0..=1.0).contains(&y1) || !(0.0..=1.0).contains(&y2) {
                return Err(AnimationError::invalid_config(format!(
                    "cubic bezier y control points must be within [0, 1], got y1={y1}, y2={y2}"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name(), self) {
            (Some(name), _) => f.write_str(name),
            (None, Easing::CubicBezier { x1, y1, x2, y2 }) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
            (None, _) => Ok(()),
        }
    }
}

impl FromStr for Easing {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::NAMED
            .iter()
            .copied()
            .find(|easing| easing.name() == Some(s))
            .ok_or_else(|| AnimationError::UnknownCurve(s.to_string()))
    }
}

/// Apply an easing function to a progress value.
///
/// # Arguments
///
/// * `easing` - The easing function to apply
/// * `t` - Progress value from 0.0 to 1.0
///
/// # Returns
///
/// The eased value, typically in the range 0.0 to 1.0.
///
/// # Example
///
/// ```
/// use reveal_switcher_core::{ease, Easing};
///
/// // Linear: output equals input
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
///
/// // Ease-in: slower at start
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
///
/// // Ease-out: slower at end
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    // Clamp input to valid range
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => ease_in_quad(t),
        Easing::EaseOut => ease_out_quad(t),
        Easing::EaseInOut => ease_in_out_quad(t),
        Easing::EaseInCubic => ease_in_cubic(t),
        Easing::EaseOutCubic => ease_out_cubic(t),
        Easing::EaseInOutCubic => ease_in_out_cubic(t),
        Easing::EaseInSine => ease_in_sine(t),
        Easing::EaseOutSine => ease_out_sine(t),
        Easing::EaseInOutSine => ease_in_out_sine(t),
        Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
        Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, t),
        Easing::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, t),
        Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
    }
}

// =============================================================================
// Quadratic Easing
// =============================================================================

#[inline]
fn ease_in_quad(t: f32) -> f32 {
    t * t
}

#[inline]
fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[inline]
fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

// =============================================================================
// Cubic Easing
// =============================================================================

#[inline]
fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

#[inline]
fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[inline]
fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

// =============================================================================
// Sinusoidal Easing
// =============================================================================

#[inline]
fn ease_in_sine(t: f32) -> f32 {
    1.0 - ((t * PI) / 2.0).cos()
}

#[inline]
fn ease_out_sine(t: f32) -> f32 {
    ((t * PI) / 2.0).sin()
}

#[inline]
fn ease_in_out_sine(t: f32) -> f32 {
    -((PI * t).cos() - 1.0) / 2.0
}

// =============================================================================
// Cubic Bézier Easing
// =============================================================================

const BEZIER_EPSILON: f32 = 1e-6;
const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;

/// One coordinate of a cubic Bézier with endpoints fixed at 0 and 1.
#[inline]
fn bezier_sample(a: f32, b: f32, s: f32) -> f32 {
    ((1.0 - 3.0 * b + 3.0 * a) * s + (3.0 * b - 6.0 * a)) * s * s + 3.0 * a * s
}

#[inline]
fn bezier_slope(a: f32, b: f32, s: f32) -> f32 {
    3.0 * (1.0 - 3.0 * b + 3.0 * a) * s * s + 2.0 * (3.0 * b - 6.0 * a) * s + 3.0 * a
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    // Solve x(s) = t for the curve parameter s, Newton first.
    let mut s = t;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier_sample(x1, x2, s) - t;
        if error.abs() < BEZIER_EPSILON {
            return bezier_sample(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < BEZIER_EPSILON {
            break;
        }
        s -= error / slope;
    }

    // Newton stalled on a flat region; x(s) is monotonic so bisect.
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = t;
    for _ in 0..BISECTION_ITERATIONS {
        let x = bezier_sample(x1, x2, s);
        if (x - t).abs() < BEZIER_EPSILON {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = lo + (hi - lo) / 2.0;
    }
    bezier_sample(y1, y2, s)
}
