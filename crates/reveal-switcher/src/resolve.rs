//! Style resolution.
//!
//! [`resolve`] turns raw timeline progress into the per-frame visual
//! parameters of both layers. Raw progress is eased independently through
//! the main, slide, and fade curves, so the scale can run fast while the
//! fade runs slow.

use reveal_switcher_core::{lerp_offset, Offset, Progress, Size};

use crate::config::{SlideAxis, TransitionConfig, TransitionStyle};

/// Visual parameters for one frame.
///
/// The primary layer is drawn on top, scaled by `scale`, clipped at
/// `clip_progress`, and translated by `slide_offset`. The secondary layer
/// is drawn beneath it at `secondary_opacity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameVisualParams {
    /// Scale factor of the primary layer.
    pub scale: f32,
    /// Progress handed to the clip geometry provider.
    pub clip_progress: f32,
    /// Translation of the primary layer.
    pub slide_offset: Offset,
    /// Opacity of the secondary layer.
    pub secondary_opacity: f32,
}

/// The off-screen offset a slide starts from.
fn slide_origin(axis: SlideAxis, size: Size) -> Offset {
    match axis {
        SlideAxis::Horizontal => Offset::new(size.width, 0.0),
        SlideAxis::Vertical => Offset::new(0.0, size.height),
    }
}

/// Compute the visual parameters for `progress` under `style`.
pub fn resolve(
    style: TransitionStyle,
    progress: Progress,
    config: &TransitionConfig,
    size: Size,
) -> FrameVisualParams {
    let eased_main = config.main_curve().transform(progress);
    let eased_fade = config.fade_curve().transform(progress);

    let slide_offset = match style {
        TransitionStyle::ClipReveal => Offset::ZERO,
        TransitionStyle::SlideFade => {
            let eased_slide = config.slide_curve().transform(progress);
            lerp_offset(slide_origin(config.slide_axis(), size), Offset::ZERO, eased_slide)
        }
    };

    FrameVisualParams {
        scale: eased_main,
        clip_progress: eased_main,
        slide_offset,
        secondary_opacity: 1.0 - eased_fade,
    }
}

/// Whether the secondary layer should be composited at all.
///
/// The secondary layer is skipped only once the flag is set and the run
/// has fully completed, not as soon as its opacity reaches zero.
#[inline]
pub fn secondary_visible(show_primary: bool, progress: Progress) -> bool {
    !(show_primary && progress.is_complete())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_switcher_core::{Curve, Easing};

    fn progress(v: f32) -> Progress {
        Progress::new(v).unwrap()
    }

    fn steps() -> impl Iterator<Item = Progress> {
        (0..=20).map(|i| progress(i as f32 / 20.0))
    }

    #[test]
    fn test_clip_reveal_opacity_decreases() {
        let config = TransitionConfig::default();
        let size = Size::new(200.0, 100.0);
        let mut previous = f32::INFINITY;
        for p in steps() {
            let params = resolve(TransitionStyle::ClipReveal, p, &config, size);
            assert!(params.secondary_opacity < previous);
            assert_eq!(params.slide_offset, Offset::ZERO);
            assert_eq!(params.scale, params.clip_progress);
            previous = params.secondary_opacity;
        }
        assert_eq!(previous, 0.0);
    }

    #[test]
    fn test_slide_fade_horizontal() {
        let config = TransitionConfig::builder()
            .style(TransitionStyle::SlideFade)
            .build()
            .unwrap();
        let size = Size::new(320.0, 100.0);

        let start = resolve(TransitionStyle::SlideFade, Progress::ZERO, &config, size);
        assert_eq!(start.slide_offset, Offset::new(320.0, 0.0));

        let mut previous = f32::INFINITY;
        for p in steps() {
            let params = resolve(TransitionStyle::SlideFade, p, &config, size);
            assert!(params.slide_offset.x < previous);
            assert_eq!(params.slide_offset.y, 0.0);
            previous = params.slide_offset.x;
        }
        assert_eq!(previous, 0.0);
    }

    #[test]
    fn test_slide_fade_vertical() {
        let config = TransitionConfig::builder()
            .horizontal_slide(false)
            .slide_curve(Easing::Linear)
            .build()
            .unwrap();
        let size = Size::new(320.0, 100.0);

        let params = resolve(TransitionStyle::SlideFade, progress(0.25), &config, size);
        assert_eq!(params.slide_offset, Offset::new(0.0, 75.0));
    }

    #[test]
    fn test_curves_are_independent() {
        let config = TransitionConfig::builder()
            .main_curve(Easing::Linear)
            .slide_curve(Easing::EaseInCubic)
            .fade_curve(Curve::interval(0.0, 0.5, Easing::Linear))
            .build()
            .unwrap();
        let size = Size::new(100.0, 100.0);

        let params = resolve(TransitionStyle::SlideFade, progress(0.5), &config, size);
        assert_eq!(params.scale, 0.5);
        assert_eq!(params.secondary_opacity, 0.0);
        // Cubic ease-in has covered 1/8 of the slide.
        assert!((params.slide_offset.x - 87.5).abs() < 1e-4);
    }

    #[test]
    fn test_secondary_elision_threshold() {
        assert!(secondary_visible(false, Progress::ONE));
        assert!(secondary_visible(true, progress(0.999)));
        assert!(!secondary_visible(true, Progress::ONE));
        assert!(secondary_visible(false, Progress::ZERO));
    }
}
