//! Scripted, headless slider session.
//!
//! Plays the host's role: renders the scene as text, reports the tooltip's
//! measured size back to the slider after each frame and feeds it a short
//! drag gesture. Run with `RUST_LOG=slidekit_components=debug` to see the
//! state transitions.

use std::sync::Arc;

use parking_lot::Mutex;
use slidekit_components::slider::{DragEvent, SliderArgs, SliderController, SliderScene};
use slidekit_ui::{Binding, Size, logging::init_tracing};
use tracing::{error, info};

const TRACK: Size = Size::new(260.0, 20.0);
const CELL: f32 = 10.0;

/// A renderable unit for a terminal: one line of text.
type Line = String;

struct AppState {
    value: Binding<f64>,
    changes: Mutex<Vec<f64>>,
}

impl AppState {
    fn new() -> Self {
        Self {
            value: Binding::new(20.0),
            changes: Mutex::new(Vec::new()),
        }
    }
}

fn build_slider(state: &Arc<AppState>) -> Option<SliderController<Line>> {
    let on_changed = {
        let state = state.clone();
        move || {
            let value = state.value.get();
            state.changes.lock().push(value);
        }
    };
    let tooltip = {
        let state = state.clone();
        move || format!("[{:.0}]", state.value.get())
    };

    let args = SliderArgs::new(|| "-".repeat(cells(TRACK.width)), || "O".to_string())
        .range(0.0..=100.0)
        .step(5.0)
        .magnetized(true)
        .track_fill(|| "=".to_string())
        .tooltip(tooltip)
        .on_changed(on_changed)
        .on_ended(|| info!("drag finished"));

    match SliderController::new(state.value.clone(), args) {
        Ok(slider) => Some(slider),
        Err(err) => {
            error!(%err, "invalid slider configuration");
            None
        }
    }
}

fn cells(width: f32) -> usize {
    (width / CELL).round().max(0.0) as usize
}

/// Draws a scene and returns the size the tooltip took up, if any.
fn draw(scene: &SliderScene<Line>) -> Option<Size> {
    let width = cells(scene.size.width);
    let mut track: Vec<char> = scene.background.chars().take(width).collect();
    if let Some(fill) = &scene.fill {
        let glyph = fill.unit.chars().next().unwrap_or('=');
        for cell in track.iter_mut().take(cells(fill.width)) {
            *cell = glyph;
        }
    }
    let thumb = cells(scene.thumb.center.x).min(width.saturating_sub(1));
    if let Some(cell) = track.get_mut(thumb) {
        *cell = scene.thumb.unit.chars().next().unwrap_or('O');
    }

    let tooltip_size = scene.tooltip.as_ref().map(|tooltip| {
        let column = cells(tooltip.offset.x);
        println!("{}{}", " ".repeat(column), tooltip.unit);
        Size::new(tooltip.unit.chars().count() as f32 * CELL, CELL)
    });
    if tooltip_size.is_none() {
        println!();
    }
    println!(
        "{}  position={:.2}",
        track.into_iter().collect::<String>(),
        scene.position
    );
    tooltip_size
}

fn frame(slider: &SliderController<Line>) {
    let measured = slider.tooltip_size();
    let on_measured = measured.as_callback();
    let before = measured.generation();
    if let Some(size) = draw(&slider.render()) {
        on_measured.call(size);
    }
    if measured.generation() != before {
        // The tooltip was placed with a stale size; draw the corrected frame.
        draw(&slider.render());
    }
}

fn main() {
    init_tracing();

    let state = Arc::new(AppState::new());
    let Some(mut slider) = build_slider(&state) else {
        return;
    };
    slider.report_track_size(TRACK);
    frame(&slider);

    let gesture = [
        DragEvent::Started { x: 40.0 },
        DragEvent::Moved { x: 96.0 },
        DragEvent::Moved { x: 143.0 },
        DragEvent::Moved { x: 187.0 },
        DragEvent::Ended,
    ];
    for event in gesture {
        slider.handle_drag(event);
        frame(&slider);
    }

    info!(
        value = state.value.get(),
        changes = ?*state.changes.lock(),
        "session complete"
    );
}
