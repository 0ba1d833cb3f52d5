use icosa_common::IcosaError;

/// Errors raised by the renderer.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface has zero area ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },

    #[error("snapshot error: {0}")]
    SnapshotError(String),
}

impl From<image::ImageError> for RendererError {
    fn from(e: image::ImageError) -> Self {
        RendererError::SnapshotError(e.to_string())
    }
}

impl From<RendererError> for IcosaError {
    fn from(e: RendererError) -> Self {
        IcosaError::Renderer(e.to_string())
    }
}
