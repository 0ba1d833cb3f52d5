//! Scene lifecycle, motion, and drawing tests against a display list.

use icosa_common::{Color, PixelSize};
use icosa_config::schema::IcosaConfig;

use super::*;
use crate::geometry::{EDGE_COUNT, VERTEX_COUNT};
use crate::schedule::FrameQueue;
use crate::surface::{DisplayList, DrawCommand, RasterSurface};

type TestScene = GeometryScene<DisplayList, FrameQueue>;

fn scene(width: u32, height: u32) -> TestScene {
    GeometryScene::new(
        DisplayList::new(width, height),
        FrameQueue::new(),
        SceneConfig::default(),
    )
    .unwrap()
}

#[test]
fn construction_starts_running_with_one_frame_requested() {
    let s = scene(800, 600);
    assert_eq!(s.run_state(), RunState::Running);
    assert!(s.pending_frame().is_some());
    assert_eq!(s.scheduler().pending(), s.pending_frame());
    assert_eq!(s.scheduler().scheduled_count(), 1);
    assert_eq!(s.mesh().vertices().len(), VERTEX_COUNT);
    assert_eq!(s.mesh().edges().len(), EDGE_COUNT);
    assert_eq!(s.viewport().center_x, 400.0);
    assert_eq!(s.viewport().center_y, 300.0);
}

#[test]
fn construction_rejects_zero_area_surface() {
    let result = GeometryScene::new(
        DisplayList::new(0, 600),
        FrameQueue::new(),
        SceneConfig::default(),
    );
    assert!(matches!(
        result,
        Err(RendererError::EmptySurface {
            width: 0,
            height: 600
        })
    ));
}

#[test]
fn centered_pointer_then_one_tick_is_drift_only() {
    let mut s = scene(800, 600);
    s.on_pointer_move(400.0, 300.0);
    assert_eq!(s.target(), TargetRotation { x: 0.0, y: 0.0 });

    assert_eq!(s.tick(), FrameOutcome::Drawn);
    assert!((s.rotation().y - 0.003).abs() < 1e-12);
    assert!((s.rotation().x - 0.001).abs() < 1e-12);
}

#[test]
fn pointer_at_right_edge_pulls_yaw() {
    let mut s = scene(800, 600);
    s.on_pointer_move(800.0, 300.0);
    assert!((s.target().y - 0.5).abs() < 1e-12);
    s.tick();
    // 0.05 of the way to 0.5, plus drift
    assert!((s.rotation().y - (0.025 + 0.003)).abs() < 1e-12);
}

#[test]
fn tick_draws_clear_then_one_stroke_then_twelve_dots() {
    let mut s = scene(800, 600);
    s.tick();

    let commands = s.surface().commands();
    assert_eq!(commands.len(), 1 + 1 + VERTEX_COUNT);
    assert_eq!(commands[0], DrawCommand::Clear);
    match &commands[1] {
        DrawCommand::Stroke { segments, style } => {
            assert_eq!(segments.len(), EDGE_COUNT);
            assert_eq!(style.width, 1.0);
            assert_eq!(style.color, [1.0, 1.0, 1.0, 0.12]);
        }
        other => panic!("expected stroke, got {other:?}"),
    }
    assert!(commands[2..]
        .iter()
        .all(|c| matches!(c, DrawCommand::Circle { .. })));
}

#[test]
fn dots_scale_with_projection() {
    let mut s = scene(800, 600);
    s.tick();

    let projected = project_mesh(
        s.mesh(),
        s.rotation(),
        s.viewport(),
        s.config().camera_distance,
    );
    for ((center, radius, color), p) in s.surface().circles().zip(&projected) {
        assert!((center[0] - p.x as f32).abs() < 1e-3);
        assert!((center[1] - p.y as f32).abs() < 1e-3);
        assert!((radius - 2.5 * p.scale as f32).abs() < 1e-5);
        assert!((color[3] - p.scale.clamp(0.0, 1.0) as f32).abs() < 1e-6);
    }

    // Nearer vertices (smaller z, larger scale) draw larger
    let radii: Vec<f32> = s.surface().circles().map(|(_, r, _)| r).collect();
    let max = radii.iter().cloned().fold(f32::MIN, f32::max);
    let min = radii.iter().cloned().fold(f32::MAX, f32::min);
    assert!(max > 2.5 && min < 2.5);
}

#[test]
fn resize_updates_center_without_touching_geometry() {
    let mut s = scene(800, 600);
    let vertices = s.mesh().vertices().to_vec();
    let edges = s.mesh().edges().to_vec();

    s.surface_mut().set_size(1600, 1200);
    s.on_resize();

    assert_eq!(s.viewport().center_x, 800.0);
    assert_eq!(s.viewport().center_y, 600.0);
    assert_eq!(s.mesh().vertices(), vertices.as_slice());
    assert_eq!(s.mesh().edges(), edges.as_slice());
}

#[test]
fn resize_applies_on_next_tick() {
    let mut s = scene(800, 600);
    s.surface_mut().set_size(1600, 1200);
    s.on_resize();
    s.tick();

    let projected = project_mesh(s.mesh(), s.rotation(), s.viewport(), 1000.0);
    let mean_x = projected.iter().map(|p| p.x).sum::<f64>() / projected.len() as f64;
    // The icosahedron is centered, so its projection straddles the center
    assert!((mean_x - 800.0).abs() < 50.0);
}

#[test]
fn tick_requests_next_frame() {
    let mut s = scene(800, 600);
    let first = s.scheduler_mut().take_due().unwrap();
    s.tick();
    let second = s.pending_frame().unwrap();
    assert_ne!(first, second);
    assert_eq!(s.scheduler().pending(), Some(second));
    assert_eq!(s.scheduler().scheduled_count(), 2);
}

#[test]
fn host_loop_runs_one_tick_per_due_frame() {
    let mut s = scene(320, 240);
    let mut ticks = 0;
    while ticks < 10 && s.scheduler_mut().take_due().is_some() {
        assert_eq!(s.tick(), FrameOutcome::Drawn);
        ticks += 1;
    }
    assert_eq!(ticks, 10);
    assert_eq!(s.frames_drawn(), 10);
    assert_eq!(s.surface().clear_count(), 10);
}

#[test]
fn teardown_twice_is_safe_and_stops_scheduling() {
    let mut s = scene(800, 600);
    s.tick();
    let scheduled = s.scheduler().scheduled_count();

    s.teardown();
    assert_eq!(s.run_state(), RunState::Stopped);
    assert!(s.pending_frame().is_none());
    assert!(s.scheduler().pending().is_none());

    s.teardown();
    assert_eq!(s.run_state(), RunState::Stopped);
    assert_eq!(s.scheduler().cancelled_count(), 1);

    assert_eq!(s.tick(), FrameOutcome::Stopped);
    assert_eq!(s.scheduler().scheduled_count(), scheduled);
    assert_eq!(s.surface().clear_count(), 1);
}

#[test]
fn teardown_right_after_construction() {
    let mut s = scene(800, 600);
    s.teardown();
    assert!(!s.is_running());
    assert!(s.scheduler().pending().is_none());
    assert_eq!(s.frames_drawn(), 0);
}

#[test]
fn teardown_after_host_took_the_frame() {
    let mut s = scene(800, 600);
    let _ = s.scheduler_mut().take_due();
    s.teardown();
    s.teardown();
    assert!(s.scheduler().pending().is_none());
    assert_eq!(s.scheduler().cancelled_count(), 0);
}

#[test]
fn events_after_teardown_are_ignored() {
    let mut s = scene(800, 600);
    s.teardown();
    s.on_pointer_move(0.0, 0.0);
    s.surface_mut().set_size(10, 10);
    s.on_resize();
    assert_eq!(s.target(), TargetRotation::default());
    assert_eq!(s.viewport().width, 800.0);
}

#[test]
fn zero_area_resize_skips_drawing_but_keeps_moving() {
    let mut s = scene(800, 600);
    s.surface_mut().set_size(0, 0);
    s.on_resize();

    s.on_pointer_move(10.0, 10.0);
    assert_eq!(s.target(), TargetRotation::default());

    assert_eq!(s.tick(), FrameOutcome::Skipped);
    assert!((s.rotation().y - 0.003).abs() < 1e-12);
    assert!(s.pending_frame().is_some());
    assert_eq!(s.surface().clear_count(), 0);
}

#[test]
fn scene_config_from_default_config_matches_defaults() {
    let resolved = SceneConfig::from_config(&IcosaConfig::default()).unwrap();
    let defaults = SceneConfig::default();
    assert_eq!(resolved.size, defaults.size);
    assert_eq!(resolved.edge_threshold, defaults.edge_threshold);
    assert_eq!(resolved.camera_distance, defaults.camera_distance);
    assert_eq!(resolved.motion, defaults.motion);
    assert_eq!(resolved.style.vertex_color, defaults.style.vertex_color);
    // 0.12 quantizes to 31/255 through the u8 color
    assert!((resolved.style.edge_color[3] - 0.12).abs() < 0.003);
}

#[test]
fn scene_config_rejects_bad_color() {
    let mut config = IcosaConfig::default();
    config.style.vertex_color = "not-a-color".into();
    assert!(SceneConfig::from_config(&config).is_err());
}

#[test]
fn raster_scene_paints_pixels() {
    let surface = RasterSurface::new(200, 200, Color::BLACK);
    let config = SceneConfig {
        size: 40.0,
        ..SceneConfig::default()
    };
    let mut s = GeometryScene::new(surface, FrameQueue::new(), config).unwrap();
    assert_eq!(s.surface().size(), PixelSize::new(200, 200));

    s.tick();
    let lit = s
        .surface()
        .image()
        .pixels()
        .filter(|p| p.0 != [0, 0, 0, 255])
        .count();
    assert!(lit > 0);
}
