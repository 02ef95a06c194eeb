// Copyright 2025 the Touchscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feeds a synthetic touch-gesture stream through the Touchscene engine and
//! prints the resulting scene transforms.

use kurbo::{Point, Size};
use touchscene_gesture::{GestureEngine, GestureEvent};

fn report(stage: &str, engine: &GestureEngine) {
    let offset = engine.translation_offset();
    println!(
        "{stage:<28} scale {:>6.3}  rotation {:>6.1}°  offset ({:>7.2}, {:>7.2})",
        engine.scale(),
        engine.rotation(),
        offset.x,
        offset.y,
    );
}

fn main() {
    let mut engine = GestureEngine::new();
    engine.config_mut().translate = true;
    engine.config_mut().rotate = true;

    // A 1600x900 photo shown in an 800x600 window.
    engine.set_viewport(Size::new(800.0, 600.0));
    engine.set_image_size(Size::new(1600.0, 900.0));
    engine.reset();
    report("fitted", &engine);

    // Single-contact drag to the lower right.
    engine.process(GestureEvent::Down {
        pos: Point::new(100.0, 100.0),
    });
    engine.process(GestureEvent::Move {
        pointers: &[Point::new(180.0, 140.0)],
    });
    engine.process(GestureEvent::Up);
    report("dragged (+80, +40)", &engine);

    // Pinch outwards around the window center: zoom in 2x.
    let saved = engine.snapshot();
    engine.process(GestureEvent::Down {
        pos: Point::new(350.0, 300.0),
    });
    engine.process(GestureEvent::PointerDown {
        pointers: &[Point::new(350.0, 300.0), Point::new(450.0, 300.0)],
    });
    engine.process(GestureEvent::Move {
        pointers: &[Point::new(300.0, 300.0), Point::new(500.0, 300.0)],
    });
    engine.process(GestureEvent::Up);
    report("pinched out 2x", &engine);

    // Two contacts turning a quarter turn at constant spacing.
    engine.process(GestureEvent::Down {
        pos: Point::new(400.0, 300.0),
    });
    engine.process(GestureEvent::PointerDown {
        pointers: &[Point::new(500.0, 300.0), Point::new(300.0, 300.0)],
    });
    engine.process(GestureEvent::Move {
        pointers: &[Point::new(400.0, 400.0), Point::new(400.0, 200.0)],
    });
    engine.process(GestureEvent::Up);
    report("rotated 90°", &engine);

    // Ask the bounds policy how far off-center the image ended up.
    let delta = engine.centering_delta();
    println!("centering delta              ({:>7.2}, {:>7.2})", delta.x, delta.y);

    // Roll the whole session back to the post-drag scene.
    engine.restore(saved);
    report("restored snapshot", &engine);
}
