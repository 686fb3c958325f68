//! File-facing transition settings.
//!
//! [`TransitionSettings`] is the serializable form of a transition config.
//! Curves are referenced by name and resolved through a [`CurveRegistry`],
//! so custom curves registered in code can be selected from a file.
//!
//! ```
//! use reveal_switcher::{CurveRegistry, TransitionSettings, TransitionStyle};
//!
//! let settings = TransitionSettings::from_toml_str(r#"
//! duration-ms = 400
//! main-curve = "fast-out-slow-in"
//! style = "slide-fade"
//! horizontal-slide = false
//! "#)?;
//! assert_eq!(settings.style, TransitionStyle::SlideFade);
//!
//! let config = settings.to_builder(&CurveRegistry::with_builtins())?.build()?;
//! assert!(!config.horizontal_slide());
//! # Ok::<(), reveal_switcher::SwitcherError>(())
//! ```

use reveal_switcher_core::{CurveRegistry, Easing};
use serde::{Deserialize, Serialize};

use crate::config::{TransitionConfig, TransitionConfigBuilder, TransitionStyle, DEFAULT_DURATION};
use crate::error::SwitcherResult;

/// Serializable transition settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TransitionSettings {
    /// Duration of a full run in milliseconds.
    pub duration_ms: f64,
    /// Name of the curve for scale and clip progress.
    pub main_curve: String,
    /// Name of the curve for the slide offset.
    pub slide_curve: String,
    /// Name of the curve for the secondary layer's fade.
    pub fade_curve: String,
    /// Transition style.
    pub style: TransitionStyle,
    /// Slide horizontally (`true`) or vertically.
    pub horizontal_slide: bool,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        let default_curve = Easing::EaseInOut.name().unwrap_or("ease-in-out").to_string();
        Self {
            duration_ms: DEFAULT_DURATION.as_secs_f64() * 1000.0,
            main_curve: default_curve.clone(),
            slide_curve: default_curve.clone(),
            fade_curve: default_curve,
            style: TransitionStyle::default(),
            horizontal_slide: true,
        }
    }
}

impl TransitionSettings {
    /// Parse settings from a TOML document. Missing fields take defaults.
    pub fn from_toml_str(source: &str) -> SwitcherResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Serialize settings to a TOML document.
    pub fn to_toml_string(&self) -> SwitcherResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Resolve curve names and produce a config builder.
    ///
    /// The builder is returned rather than a finished config so a clip
    /// geometry provider can still be attached in code. Unknown curve names
    /// and invalid durations are reported here or at `build()`.
    pub fn to_builder(&self, registry: &CurveRegistry) -> SwitcherResult<TransitionConfigBuilder> {
        Ok(TransitionConfig::builder()
            .duration_secs(self.duration_ms / 1000.0)
            .main_curve(registry.resolve(&self.main_curve)?)
            .slide_curve(registry.resolve(&self.slide_curve)?)
            .fade_curve(registry.resolve(&self.fade_curve)?)
            .style(self.style)
            .horizontal_slide(self.horizontal_slide))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_switcher_core::{AnimationError, Curve};
    use std::time::Duration;

    use crate::error::SwitcherError;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = TransitionSettings::from_toml_str("").unwrap();
        assert_eq!(settings, TransitionSettings::default());

        let config = settings
            .to_builder(&CurveRegistry::with_builtins())
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.duration(), DEFAULT_DURATION);
    }

    #[test]
    fn test_full_document() {
        let settings = TransitionSettings::from_toml_str(
            r#"
            duration-ms = 500
            main-curve = "linear"
            slide-curve = "ease-out-cubic"
            fade-curve = "fast-out-slow-in"
            style = "clip-reveal"
            horizontal-slide = true
            "#,
        )
        .unwrap();

        let config = settings
            .to_builder(&CurveRegistry::with_builtins())
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.duration(), Duration::from_millis(500));
        assert!(matches!(config.main_curve(), Curve::Easing(Easing::Linear)));
        assert!(matches!(config.fade_curve(), Curve::Easing(Easing::FastOutSlowIn)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = TransitionSettings::from_toml_str("speed = 3").unwrap_err();
        assert!(matches!(err, SwitcherError::Settings(_)));
    }

    #[test]
    fn test_unknown_curve_rejected() {
        let settings = TransitionSettings {
            main_curve: "wobble".into(),
            ..Default::default()
        };
        let err = settings.to_builder(&CurveRegistry::with_builtins()).unwrap_err();
        assert!(matches!(
            err,
            SwitcherError::Animation(AnimationError::UnknownCurve(ref name)) if name == "wobble"
        ));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let settings = TransitionSettings::from_toml_str("duration-ms = -10").unwrap();
        let err = settings
            .to_builder(&CurveRegistry::with_builtins())
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_custom_curve_by_name() {
        let mut registry = CurveRegistry::with_builtins();
        registry.register("quick-fade", Curve::interval(0.0, 0.3, Easing::Linear)).unwrap();

        let settings = TransitionSettings {
            fade_curve: "quick-fade".into(),
            ..Default::default()
        };
        let config = settings.to_builder(&registry).unwrap().build().unwrap();
        assert!(matches!(config.fade_curve(), Curve::Interval { .. }));
    }

    #[test]
    fn test_to_toml_uses_kebab_case() {
        let text = TransitionSettings::default().to_toml_string().unwrap();
        assert!(text.contains("duration-ms = 250.0"));
        assert!(text.contains("style = \"clip-reveal\""));
    }
}
