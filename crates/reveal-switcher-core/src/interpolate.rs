//! Interpolation of typed values.
//!
//! Interpolators are pure: they combine a start value, an end value, and an
//! already-eased progress. Any real `t` is accepted, so overshooting curves
//! extrapolate rather than fail.

use crate::curve::{Curve, Progress};
use crate::geometry::{Offset, Point, Size};

/// Trait for values that can be linearly interpolated.
pub trait Lerp: Copy {
    /// Interpolate between `self` and `end` by factor `t`.
    fn lerp(self, end: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, end: Self, t: f32) -> Self {
        self + (end - self) * t
    }
}

impl Lerp for Offset {
    #[inline]
    fn lerp(self, end: Self, t: f32) -> Self {
        Offset::from(self.to_vec2().lerp(end.to_vec2(), t))
    }
}

impl Lerp for Point {
    #[inline]
    fn lerp(self, end: Self, t: f32) -> Self {
        Point::from_vec2(self.to_vec2().lerp(end.to_vec2(), t))
    }
}

impl Lerp for Size {
    #[inline]
    fn lerp(self, end: Self, t: f32) -> Self {
        Size::new(self.width.lerp(end.width, t), self.height.lerp(end.height, t))
    }
}

/// Interpolate a scalar.
#[inline]
pub fn lerp_scalar(start: f32, end: f32, eased_t: f32) -> f32 {
    start.lerp(end, eased_t)
}

/// Interpolate a 2D offset.
#[inline]
pub fn lerp_offset(start: Offset, end: Offset, eased_t: f32) -> Offset {
    start.lerp(end, eased_t)
}

/// A start/end pair that can be sampled through a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub begin: T,
    pub end: T,
}

impl<T: Lerp> Tween<T> {
    /// Create a tween.
    pub const fn new(begin: T, end: T) -> Self {
        Self { begin, end }
    }

    /// The value at an already-eased progress.
    #[inline]
    pub fn at(&self, eased_t: f32) -> T {
        self.begin.lerp(self.end, eased_t)
    }

    /// The value at raw progress `t`, eased through `curve`.
    #[inline]
    pub fn sample(&self, curve: &Curve, t: Progress) -> T {
        self.at(curve.transform(t))
    }
}
