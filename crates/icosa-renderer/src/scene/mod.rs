//! The render loop: a rotating wireframe icosahedron bound to a surface.
//!
//! A [`GeometryScene`] is `Running` from construction until
//! [`teardown`](GeometryScene::teardown), after which it is `Stopped` for
//! good. While running, each [`tick`](GeometryScene::tick) advances the
//! rotation one frame, redraws, and requests the next frame from the
//! scheduler. The host owns the loop and the event sources; it forwards
//! pointer moves and resizes between ticks.

mod config;
mod draw;

#[cfg(test)]
mod tests;

pub use config::{SceneConfig, SceneStyle};
pub use draw::{project_mesh, vertex_dot};

use tracing::{debug, info};

use crate::error::RendererError;
use crate::geometry::Icosahedron;
use crate::motion::{advance_rotation, target_from_pointer, RotationState, TargetRotation};
use crate::projection::Viewport;
use crate::schedule::{FrameHandle, FrameScheduler};
use crate::surface::Surface;

/// Lifecycle of a scene. There is no way back from `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// What a call to [`GeometryScene::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Motion advanced and the frame was drawn.
    Drawn,
    /// Motion advanced but the viewport has zero area, so nothing was drawn.
    Skipped,
    /// The scene is stopped; nothing happened.
    Stopped,
}

pub struct GeometryScene<S: Surface, F: FrameScheduler> {
    surface: S,
    scheduler: F,
    mesh: Icosahedron,
    config: SceneConfig,
    rotation: RotationState,
    target: TargetRotation,
    viewport: Viewport,
    state: RunState,
    pending: Option<FrameHandle>,
    frames_drawn: u64,
}

impl<S: Surface, F: FrameScheduler> GeometryScene<S, F> {
    /// Build the geometry, size the viewport from `surface`, and request
    /// the first frame.
    ///
    /// Fails with [`RendererError::EmptySurface`] if the surface has no area.
    pub fn new(surface: S, mut scheduler: F, config: SceneConfig) -> Result<Self, RendererError> {
        let size = surface.size();
        if size.is_empty() {
            return Err(RendererError::EmptySurface {
                width: size.width,
                height: size.height,
            });
        }

        let mesh = Icosahedron::build_with_threshold(config.size, config.edge_threshold);
        info!(
            vertices = mesh.vertices().len(),
            edges = mesh.edges().len(),
            width = size.width,
            height = size.height,
            "icosahedron scene started"
        );

        let pending = Some(scheduler.schedule());

        Ok(Self {
            surface,
            scheduler,
            mesh,
            config,
            rotation: RotationState::default(),
            target: TargetRotation::default(),
            viewport: Viewport::from_size(size),
            state: RunState::Running,
            pending,
            frames_drawn: 0,
        })
    }

    /// Run one frame. Call once per due frame from the host loop.
    pub fn tick(&mut self) -> FrameOutcome {
        if self.state == RunState::Stopped {
            return FrameOutcome::Stopped;
        }
        // The request that brought us here has fired.
        self.pending = None;

        self.rotation = advance_rotation(self.rotation, self.target, &self.config.motion);

        let outcome = if self.viewport.is_empty() {
            debug!("viewport has zero area, skipping draw");
            FrameOutcome::Skipped
        } else {
            draw::draw_frame(
                &mut self.surface,
                &self.mesh,
                self.rotation,
                &self.viewport,
                &self.config,
            );
            self.frames_drawn += 1;
            FrameOutcome::Drawn
        };

        self.pending = Some(self.scheduler.schedule());
        outcome
    }

    /// Retarget the rotation from a pointer position in surface pixels.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.state == RunState::Stopped {
            return;
        }
        match target_from_pointer(x, y, &self.viewport, self.config.motion.pointer_gain) {
            Some(target) => self.target = target,
            None => debug!("ignoring pointer move on zero-area viewport"),
        }
    }

    /// Re-read the surface size. Geometry is untouched; the new viewport
    /// applies from the next tick.
    pub fn on_resize(&mut self) {
        if self.state == RunState::Stopped {
            return;
        }
        let size = self.surface.size();
        self.viewport = Viewport::from_size(size);
        debug!(width = size.width, height = size.height, "viewport resized");
    }

    /// Cancel the pending frame and stop. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        if self.state == RunState::Running {
            info!(frames = self.frames_drawn, "icosahedron scene stopped");
        }
        self.state = RunState::Stopped;
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn target(&self) -> TargetRotation {
        self.target
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn mesh(&self) -> &Icosahedron {
        &self.mesh
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The frame request currently outstanding, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// For host-side resizes; follow with [`on_resize`](Self::on_resize).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}
