pub mod error;
pub mod geometry;
pub mod motion;
pub mod perf;
pub mod projection;
pub mod scene;
pub mod schedule;
pub mod surface;

pub use error::RendererError;
pub use geometry::{Edge, Icosahedron, Point3};
pub use motion::{MotionParams, RotationState, TargetRotation};
pub use perf::FrameTimer;
pub use projection::{project, Projected, Viewport};
pub use scene::{FrameOutcome, GeometryScene, RunState, SceneConfig, SceneStyle};
pub use schedule::{FrameHandle, FrameQueue, FrameScheduler};
pub use surface::{DisplayList, DrawCommand, RasterSurface, Segment, StrokeStyle, Surface};
