//! Offscreen host loop.
//!
//! Owns the event sources the scene reacts to: a synthetic pointer that
//! orbits the viewport center, an optional one-shot resize, and the frame
//! queue the scene requests frames from.

use std::f64::consts::TAU;
use std::path::{Path, PathBuf};

use icosa_common::Result;
use icosa_config::{parse_color, IcosaConfig};
use icosa_renderer::{
    FrameOutcome, FrameQueue, FrameTimer, GeometryScene, RasterSurface, SceneConfig, Viewport,
};
use tracing::{debug, info};

use crate::cli::Args;

/// Frames per full pointer orbit.
const ORBIT_PERIOD_FRAMES: f64 = 240.0;

/// Orbit radius as a fraction of the shorter viewport side.
const ORBIT_RADIUS_FRACTION: f64 = 0.35;

/// A mid-run surface resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeStep {
    pub at_frame: u64,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub width: u32,
    pub height: u32,
    pub frames: u64,
    pub snapshot_every: u64,
    pub out: Option<PathBuf>,
    pub resize: Option<ResizeStep>,
}

impl RunOptions {
    pub fn from_args(args: &Args) -> Self {
        Self {
            width: args.width,
            height: args.height,
            frames: args.frames,
            snapshot_every: args.snapshot_every,
            out: args.out.clone(),
            resize: args.resize_at.map(|at_frame| ResizeStep {
                at_frame,
                width: args.resize_width,
                height: args.resize_height,
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub frames_drawn: u64,
    pub frames_skipped: u64,
    pub snapshots: Vec<PathBuf>,
    pub fps: f64,
}

/// Pointer position for `frame` on a circle around the viewport center.
pub fn orbit_pointer(frame: u64, viewport: &Viewport) -> (f64, f64) {
    let angle = TAU * frame as f64 / ORBIT_PERIOD_FRAMES;
    let radius = viewport.width.min(viewport.height) * ORBIT_RADIUS_FRACTION;
    (
        viewport.center_x + radius * angle.cos(),
        viewport.center_y + radius * angle.sin(),
    )
}

/// `<dir>/frame-00060.png` for the 60th drawn frame.
pub fn snapshot_path(dir: &Path, frame: u64) -> PathBuf {
    dir.join(format!("frame-{frame:05}.png"))
}

fn snapshot_due(every: u64, frames_drawn: u64) -> bool {
    every > 0 && frames_drawn > 0 && frames_drawn % every == 0
}

/// Run the scene for up to `opts.frames` frames and tear it down.
pub fn run(opts: &RunOptions, config: &IcosaConfig) -> Result<RunSummary> {
    let scene_config = SceneConfig::from_config(config)?;
    let background = parse_color(&config.style.background)?;

    if let Some(dir) = &opts.out {
        std::fs::create_dir_all(dir)?;
    }

    let surface = RasterSurface::new(opts.width, opts.height, background);
    let mut scene = GeometryScene::new(surface, FrameQueue::new(), scene_config)?;
    let mut timer = FrameTimer::new();
    let mut summary = RunSummary::default();

    let mut frame = 0u64;
    while frame < opts.frames {
        if scene.scheduler_mut().take_due().is_none() {
            break;
        }

        if let Some(step) = opts.resize.filter(|s| s.at_frame == frame) {
            info!(
                frame,
                width = step.width,
                height = step.height,
                "resizing surface"
            );
            scene.surface_mut().resize(step.width, step.height);
            scene.on_resize();
        }

        let (px, py) = orbit_pointer(frame, scene.viewport());
        scene.on_pointer_move(px, py);

        timer.begin_frame();
        match scene.tick() {
            FrameOutcome::Drawn => {
                summary.frames_drawn += 1;
                let drawn = scene.frames_drawn();
                if let Some(dir) = opts.out.as_deref() {
                    if snapshot_due(opts.snapshot_every, drawn) {
                        let path = snapshot_path(dir, drawn);
                        scene.surface().save_png(&path)?;
                        debug!(path = %path.display(), "snapshot written");
                        summary.snapshots.push(path);
                    }
                }
            }
            FrameOutcome::Skipped => summary.frames_skipped += 1,
            FrameOutcome::Stopped => break,
        }
        frame += 1;
    }

    summary.fps = timer.fps();
    info!(
        frames = summary.frames_drawn,
        skipped = summary.frames_skipped,
        fps = summary.fps,
        frame_ms = timer.frame_time_ms(),
        "render loop finished"
    );

    scene.teardown();
    // A second teardown must be a no-op.
    scene.teardown();
    debug!(state = ?scene.run_state(), "scene torn down");

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use icosa_common::IcosaError;

    fn opts(frames: u64) -> RunOptions {
        RunOptions {
            width: 160,
            height: 120,
            frames,
            snapshot_every: 0,
            out: None,
            resize: None,
        }
    }

    #[test]
    fn orbit_stays_inside_viewport() {
        let vp = Viewport::new(800.0, 600.0);
        for frame in 0..240 {
            let (x, y) = orbit_pointer(frame, &vp);
            assert!((0.0..=800.0).contains(&x));
            assert!((0.0..=600.0).contains(&y));
        }
    }

    #[test]
    fn orbit_starts_right_of_center() {
        let vp = Viewport::new(800.0, 600.0);
        let (x, y) = orbit_pointer(0, &vp);
        assert!((x - (400.0 + 210.0)).abs() < 1e-9);
        assert!((y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn snapshot_names_are_zero_padded() {
        let path = snapshot_path(Path::new("out"), 60);
        assert_eq!(path, PathBuf::from("out").join("frame-00060.png"));
    }

    #[test]
    fn snapshot_cadence() {
        assert!(!snapshot_due(0, 60));
        assert!(!snapshot_due(60, 0));
        assert!(!snapshot_due(60, 59));
        assert!(snapshot_due(60, 60));
        assert!(snapshot_due(60, 120));
    }

    #[test]
    fn runs_requested_frames() {
        let summary = run(&opts(10), &IcosaConfig::default()).unwrap();
        assert_eq!(summary.frames_drawn, 10);
        assert_eq!(summary.frames_skipped, 0);
        assert!(summary.snapshots.is_empty());
    }

    #[test]
    fn zero_area_surface_is_rejected() {
        let mut o = opts(5);
        o.width = 0;
        let err = run(&o, &IcosaConfig::default()).unwrap_err();
        assert!(matches!(err, IcosaError::Renderer(_)));
    }

    #[test]
    fn writes_snapshots_to_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut o = opts(6);
        o.snapshot_every = 3;
        o.out = Some(dir.path().join("shots"));

        let summary = run(&o, &IcosaConfig::default()).unwrap();
        assert_eq!(summary.snapshots.len(), 2);
        assert!(dir.path().join("shots").join("frame-00003.png").exists());
        assert!(dir.path().join("shots").join("frame-00006.png").exists());
    }

    #[test]
    fn resize_to_zero_skips_remaining_frames() {
        let mut o = opts(8);
        o.resize = Some(ResizeStep {
            at_frame: 5,
            width: 0,
            height: 120,
        });
        let summary = run(&o, &IcosaConfig::default()).unwrap();
        assert_eq!(summary.frames_drawn, 5);
        assert_eq!(summary.frames_skipped, 3);
    }

    #[test]
    fn invalid_background_is_a_config_error() {
        let mut config = IcosaConfig::default();
        config.style.background = "not-a-color".into();
        let err = run(&opts(1), &config).unwrap_err();
        assert!(matches!(err, IcosaError::Config(_)));
    }

    #[test]
    fn from_args_builds_resize_step() {
        use clap::Parser;
        let args = Args::parse_from(["icosa", "--resize-at", "12", "--resize-width", "400"]);
        let o = RunOptions::from_args(&args);
        assert_eq!(
            o.resize,
            Some(ResizeStep {
                at_frame: 12,
                width: 400,
                height: 768,
            })
        );
    }
}
