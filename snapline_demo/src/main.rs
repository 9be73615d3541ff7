// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted drag session for `snapline_editor`.
//!
//! Set `SNAPLINE_THRESHOLD=fine` for the 10 point preset (default `coarse`), and
//! `RUST_LOG=snapline_core=trace,snapline_editor=debug` to see the engine log.

use std::time::Duration;

use kurbo::{Point, Size, Vec2};
use peniko::color::palette::css;
use snapline_core::{FontWeight, Guide, GuideConfig, OverlayId, TextAlignment};
use snapline_editor::{EditSession, EditSurface, InteractionMode};
use snapline_text::{CachedTextMeasurer, TextMeasurer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = config_from_env();
    info!(threshold = config.threshold, "guide configuration");

    let measurer = CachedTextMeasurer::new(demo_measurer());
    let mut session = EditSession::new(Size::new(400.0, 600.0), config);

    let title = session.add_overlay(|o| {
        o.with_text("Summer 2025")
            .with_position((200.0, 120.0))
            .with_font_size(36.0)
    });
    let caption = session.add_text();
    session
        .commit_text(caption, "Lake day")
        .and_then(|()| session.set_color(caption, css::YELLOW))
        .and_then(|()| session.set_font_weight(caption, FontWeight::Heavy))
        .and_then(|()| session.set_alignment(caption, TextAlignment::Leading))
        .and_then(|()| session.set_font_size(caption, 30.0, EditSurface::Inline))
        .unwrap_or_else(|err| warn!(%err, "styling failed"));

    let mut now = Duration::ZERO;
    // Pull the caption up under the title, wobbling across its center line.
    let path = [
        Vec2::new(-20.0, -40.0),
        Vec2::new(-35.0, -90.0),
        Vec2::new(-8.0, -150.0),
        Vec2::new(6.0, -172.0),
    ];
    drag(&mut session, caption, &path, &measurer, &mut now);

    // Resize the title to 1.5x.
    if let Err(err) = session.begin_drag(title, InteractionMode::Resize, now) {
        warn!(%err, "resize did not start");
    } else {
        let resized = session
            .update_drag(Vec2::new(100.0, 0.0), &measurer)
            .map(|_| ())
            .and_then(|()| session.end_drag(Vec2::new(100.0, 0.0), &measurer, now));
        if let Err(err) = resized {
            warn!(%err, "resize failed");
        }
    }

    while !session.poll(now) && !session.guides().is_empty() {
        now += FRAME;
    }

    for overlay in session.overlays() {
        println!(
            "{:?} {:?}: at ({}, {}) scale {} size {}",
            overlay.id(),
            overlay.text,
            overlay.position.x,
            overlay.position.y,
            overlay.scale(),
            overlay.font_size(),
        );
    }
    println!(
        "measure cache: {} entries, {} hits",
        measurer.len(),
        measurer.hits()
    );
}

fn demo_measurer() -> Box<dyn TextMeasurer> {
    #[cfg(feature = "parley")]
    {
        Box::new(snapline_text_parley::ParleyTextMeasurer::new())
    }

    #[cfg(not(feature = "parley"))]
    {
        Box::new(snapline_text::HeuristicTextMeasurer)
    }
}

fn config_from_env() -> GuideConfig {
    match std::env::var("SNAPLINE_THRESHOLD").as_deref() {
        Ok("fine") => GuideConfig::fine(),
        Ok("coarse") | Err(_) => GuideConfig::coarse(),
        Ok(other) => match other.parse::<f64>() {
            Ok(threshold) if threshold > 0.0 => GuideConfig::coarse().with_threshold(threshold),
            _ => {
                warn!(value = other, "unrecognized SNAPLINE_THRESHOLD, using coarse");
                GuideConfig::coarse()
            }
        },
    }
}

fn drag(
    session: &mut EditSession,
    id: OverlayId,
    path: &[Vec2],
    measurer: &dyn TextMeasurer,
    now: &mut Duration,
) {
    if let Err(err) = session.begin_drag(id, InteractionMode::Move, *now) {
        warn!(%err, "drag did not start");
        return;
    }
    for &translation in path {
        *now += FRAME;
        match session.update_drag(translation, measurer) {
            Ok(guides) => println!("drag {translation:?}: {}", describe(guides)),
            Err(err) => warn!(%err, "drag update failed"),
        }
    }
    let last = path.last().copied().unwrap_or(Vec2::ZERO);
    *now += FRAME;
    match session.end_drag(last, measurer, *now) {
        Ok(Point { x, y }) => println!("dropped at ({x}, {y})"),
        Err(err) => warn!(%err, "drag end failed"),
    }
}

fn describe(guides: &[Guide]) -> String {
    if guides.is_empty() {
        return "no guides".to_owned();
    }
    guides
        .iter()
        .map(|g| format!("{:?} {:?} at {}", g.kind, g.orientation, g.position))
        .collect::<Vec<_>>()
        .join(", ")
}
