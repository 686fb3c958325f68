//! Clip geometry capability.
//!
//! The switcher never builds reveal shapes itself. A host that wants a
//! shaped reveal supplies a [`ClipGeometry`] implementation; the switcher
//! asks it for a boundary each frame, passing the eased clip progress.
//! Without one, the reveal is a pure scale animation.
//!
//! ```
//! use reveal_switcher::{ClipGeometry, Path, Point, Size};
//!
//! /// Grows a circle from the center until it covers the corners.
//! struct CircleReveal;
//!
//! impl ClipGeometry for CircleReveal {
//!     fn boundary_for(&self, size: Size, progress: f32) -> Path {
//!         let center = Point::new(size.width / 2.0, size.height / 2.0);
//!         let max_radius = (center.x * center.x + center.y * center.y).sqrt();
//!         Path::circle(center, max_radius * progress)
//!     }
//! }
//!
//! let path = CircleReveal.boundary_for(Size::new(100.0, 100.0), 0.5);
//! assert!(path.is_closed());
//! ```

use reveal_switcher_core::{Path, Rect, Size};

/// Supplies the closed boundary of the reveal region.
///
/// Implementations must be deterministic: the same size and progress
/// always produce the same path. The switcher holds no cache, so returning
/// a static shape or recomputing per call are equally valid.
pub trait ClipGeometry: Send + Sync {
    /// The closed boundary for a layer of `size` at eased clip `progress`.
    fn boundary_for(&self, size: Size, progress: f32) -> Path;
}

impl<F> ClipGeometry for F
where
    F: Fn(Size, f32) -> Path + Send + Sync,
{
    fn boundary_for(&self, size: Size, progress: f32) -> Path {
        self(size, progress)
    }
}

/// A clip that never hides anything: the boundary is the full layer bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoReveal;

impl ClipGeometry for NoReveal {
    fn boundary_for(&self, size: Size, _progress: f32) -> Path {
        Path::rect(Rect::from_size(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_switcher_core::{PathCommand, Point};

    #[test]
    fn test_no_reveal_covers_bounds() {
        let path = NoReveal.boundary_for(Size::new(30.0, 20.0), 0.1);
        assert!(path.is_closed());
        assert_eq!(path.commands()[2], PathCommand::LineTo(Point::new(30.0, 20.0)));
        assert_eq!(path, NoReveal.boundary_for(Size::new(30.0, 20.0), 0.9));
    }

    #[test]
    fn test_closure_clipper() {
        let clipper = |size: Size, progress: f32| {
            Path::rect(Rect::new(0.0, 0.0, size.width * progress, size.height))
        };
        let path = clipper.boundary_for(Size::new(100.0, 10.0), 0.5);
        assert_eq!(path.commands()[1], PathCommand::LineTo(Point::new(50.0, 0.0)));
    }
}
