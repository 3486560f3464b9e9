//! Headless sketch session
//!
//! Replays a short scripted interaction (select the XY plane, start a sketch,
//! draw a closed square) and logs the resulting sketch.

use bc_frontend::{
    AppAction, EditorConfig, FrameInput, SketchAction, create_shared_state,
    create_shared_viewport, process_frame,
};
use bc_renderer::ViewPreset;
use glam::Vec2;

const CONFIG_FILE: &str = "bc-sketch.ron";

fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bc_frontend=debug,bc_cad=debug,bc_renderer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BadCAD sketch session");

    let config = EditorConfig::load_or_default(CONFIG_FILE);
    let viewport_state = create_shared_viewport(&config.renderer);
    let app_state = create_shared_state(config);

    {
        let mut vp = viewport_state.lock();
        vp.camera.set_preset(ViewPreset::Front);
        vp.camera.set_distance(1.0);
    }

    let frame_time = 1.0 / 60.0;
    let center = Vec2::new(400.0, 300.0);

    // Pick the XY plane and start a sketch on it
    process_frame(&app_state, &viewport_state, &FrameInput::hover(center));
    process_frame(&app_state, &viewport_state, &FrameInput::click(center));
    app_state
        .lock()
        .queue_action(AppAction::Sketch(SketchAction::NewSketch));

    // Let the view animation run out
    for _ in 0..60 {
        let input = FrameInput {
            dt: frame_time,
            ..FrameInput::hover(center)
        };
        process_frame(&app_state, &viewport_state, &input);
    }

    let corners = [
        Vec2::new(300.0, 400.0),
        Vec2::new(500.0, 400.0),
        Vec2::new(500.0, 200.0),
        Vec2::new(300.0, 200.0),
        Vec2::new(301.0, 399.0),
    ];
    for corner in corners {
        let input = FrameInput {
            dt: frame_time,
            ..FrameInput::click(corner)
        };
        process_frame(&app_state, &viewport_state, &input);
    }

    let state = app_state.lock();
    for sketch in state.document.sketches() {
        tracing::info!(
            "{} on {}: {} points, {} active lines",
            sketch.name,
            sketch.plane.display_name(),
            sketch.point_count(),
            sketch.active_line_count()
        );
        for (id, a, b) in sketch.active_lines() {
            if let (Some(pa), Some(pb)) = (sketch.point_position(a), sketch.point_position(b)) {
                tracing::info!("  {}: {} {} -> {} {}", id, a, pa, b, pb);
            }
        }
    }
}
