use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render cancelled")]
    Cancelled,

    #[error(transparent)]
    Core(#[from] mandelgrid_core::CoreError),
}

impl RenderError {
    /// `true` when the request itself was malformed.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_invalid_request())
    }
}
