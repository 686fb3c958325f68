//! Headless reveal example.
//!
//! Drives a switcher with a circular reveal through a full forward run and
//! a mid-run reversal, printing the parameters of every frame. No window
//! or renderer is involved; the host loop is simulated at 60 fps.
//!
//! Run with: cargo run -p reveal-switcher --example headless_reveal
//! Set `RUST_LOG=reveal_switcher=trace` to see per-tick logging.

use std::time::Duration;

use reveal_switcher::{
    ClockHandle, Easing, Path, Rect, RevealSwitcher, Size, TransitionConfig, TransitionStyle,
};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_micros(16_667);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Headless reveal example");
    println!("=======================");
    println!();

    // Grow a circle from the center until it covers the corners.
    let config = TransitionConfig::builder()
        .duration(Duration::from_millis(300))
        .style(TransitionStyle::ClipReveal)
        .main_curve(Easing::FastOutSlowIn)
        .fade_curve(Easing::EaseOut)
        .clipper(|size: Size, progress: f32| {
            let radius = (size.width.hypot(size.height) / 2.0) * progress;
            Path::circle(Rect::from_size(size).center(), radius)
        })
        .build_shared()?;

    let clock = ClockHandle::new();
    let mut switcher = RevealSwitcher::builder("details view", "summary view")
        .show_primary(false)
        .size(Size::new(640.0, 480.0))
        .config(config)
        .on_frame(|frame| {
            println!(
                "  t={:.3} scale={:.3} secondary_opacity={:.3} clip_cmds={} secondary={:?}",
                frame.progress.value(),
                frame.params.scale,
                frame.params.secondary_opacity,
                frame.clip.as_ref().map_or(0, |clip| clip.commands().len()),
                frame.secondary,
            );
        })
        .build(&clock)?;

    println!("Revealing primary:");
    switcher.set_show_primary(true);
    run_until_idle(&clock, &mut switcher);
    println!("Settled in phase {:?}", switcher.phase());
    println!();

    println!("Hiding primary, reversing after 5 frames:");
    switcher.set_show_primary(false);
    for _ in 0..5 {
        step(&clock, &mut switcher);
    }
    switcher.set_show_primary(true);
    run_until_idle(&clock, &mut switcher);
    println!("Settled in phase {:?}", switcher.phase());

    switcher.dispose();
    Ok(())
}

fn step<P, S>(clock: &ClockHandle, switcher: &mut RevealSwitcher<P, S>) {
    for event in clock.advance(FRAME) {
        switcher.handle_tick(&event);
    }
}

fn run_until_idle<P, S>(clock: &ClockHandle, switcher: &mut RevealSwitcher<P, S>) {
    while clock.has_active_tickers() {
        step(clock, switcher);
    }
}
