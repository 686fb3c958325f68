//! Tracing integration for reveal-switcher.
//!
//! The crates use [`tracing`] for instrumentation and never install a
//! subscriber themselves. To see logs, install one in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("reveal_switcher_core::timeline=debug")
//!     .init();
//! ```
//!
//! Per-tick output is emitted at `trace` level; run starts, reversals,
//! settling, and disposal are emitted at `debug` level.

/// Span names used for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Frame clock advance span.
    pub const CLOCK_ADVANCE: &str = "reveal_switcher::clock_advance";
    /// Timeline tick span.
    pub const TIMELINE_TICK: &str = "reveal_switcher::timeline_tick";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "reveal_switcher_core";
    /// Frame clock target.
    pub const CLOCK: &str = "reveal_switcher_core::clock";
    /// Transition timeline target.
    pub const TIMELINE: &str = "reveal_switcher_core::timeline";
    /// Curve evaluation target.
    pub const CURVE: &str = "reveal_switcher_core::curve";
    /// Signal emission target.
    pub const SIGNAL: &str = "reveal_switcher_core::signal";
    /// Switcher component target.
    pub const SWITCHER: &str = "reveal_switcher::switcher";
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_targets_share_crate_prefix() {
        for target in [targets::CLOCK, targets::TIMELINE, targets::CURVE, targets::SIGNAL] {
            assert!(target.starts_with(targets::CORE));
        }
    }
}
