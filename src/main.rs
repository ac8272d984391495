//! Icon Drift entry point
//!
//! The engine ships as a library (the browser host lives in `icon_drift::dom`).
//! This binary is a headless demonstration: it drives the field with a
//! scripted pointer sweep and logs the resulting placements.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use icon_drift::engine::{Engine, Viewport};
    use icon_drift::field::{CatalogItem, ContainerRect, ExclusionZone, Modality};
    use icon_drift::tuning::Tuning;

    env_logger::init();
    log::info!("Icon Drift (headless demo) starting...");

    let catalog: Vec<CatalogItem> = [
        ("algebra", "Algebra", "∑"),
        ("geometry", "Geometry", "△"),
        ("physics", "Physics", "⚛"),
        ("chemistry", "Chemistry", "⚗"),
        ("astronomy", "Astronomy", "★"),
        ("biology", "Biology", "❀"),
        ("music", "Music", "♪"),
        ("literature", "Literature", "✎"),
    ]
    .into_iter()
    .map(|(id, title, glyph)| CatalogItem {
        id: id.into(),
        title: title.into(),
        image_ref: Some(format!("/assets/topics/{id}.webp")),
        fallback_glyph: glyph.into(),
    })
    .collect();

    // Headline across the upper middle, call-to-action below it
    let zones = vec![
        ExclusionZone::new(0.2, 0.25, 0.6, 0.2),
        ExclusionZone::new(0.35, 0.55, 0.3, 0.12),
    ];

    let viewport = Viewport::new(1280.0, 800.0);
    let rect = ContainerRect::from_viewport(viewport.width, viewport.height);

    let mut engine = Engine::new(catalog, zones, Tuning::default(), 7);
    engine.start(viewport, None, true);
    assert_eq!(engine.modality(), Modality::Desktop);

    // Sweep the pointer left to right through the vertical center
    let dt = 1.0 / 60.0;
    for frame in 0..300 {
        let x = frame as f32 * (viewport.width / 300.0);
        engine.pointer_moved(x, 400.0, rect);
        engine.frame(dt);
    }
    log::info!("after sweep:");
    for p in engine.placements() {
        log::info!(
            "  icon {} at ({:.1}, {:.1}) scale {:.2} rot {:.0}",
            p.id,
            p.x,
            p.y,
            p.scale,
            p.rotation
        );
    }

    // Let everything settle back home
    engine.pointer_left();
    for _ in 0..300 {
        engine.frame(dt);
    }
    let max_drift = engine
        .icons()
        .iter()
        .map(|icon| icon.pos.distance(icon.home))
        .fold(0.0f32, f32::max);
    log::info!("max distance from home after release: {max_drift:.2}");

    // Breakpoint crossing rebuilds a smaller, pointer-free pool
    engine.environment_changed(Viewport::new(390.0, 844.0), None, false);
    assert_eq!(engine.modality(), Modality::Touch);
    for _ in 0..120 {
        engine.frame(dt);
    }
    log::info!("touch pool: {} icons", engine.icons().len());

    engine.stop();
    println!("✓ Icon Drift demo completed");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts mount via `icon_drift::dom::IconField`
}
