use thiserror::Error;

/// Errors originating from request validation and grid allocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("invalid dimensions: {width}×{height} (both must be >= 1)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid max iterations: {0} (must be >= 1)")]
    InvalidMaxIterations(u32),

    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },

    #[error("grid of {width}×{height} exceeds the allocation limit of {limit} cells")]
    AllocationError { width: u32, height: u32, limit: usize },
}

impl CoreError {
    /// `true` for malformed dimensions, bounds, or iteration caps.
    ///
    /// These are rejected before any computation and are fixed by the caller
    /// re-supplying valid parameters.
    pub fn is_invalid_request(&self) -> bool {
        !matches!(self, Self::AllocationError { .. })
    }

    pub(crate) fn viewport(reason: impl Into<String>) -> Self {
        Self::InvalidViewport {
            reason: reason.into(),
        }
    }
}
