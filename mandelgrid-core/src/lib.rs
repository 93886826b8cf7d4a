pub mod complex;
pub mod error;
pub mod limits;
pub mod mandelbrot;
pub mod request;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use limits::RenderLimits;
pub use mandelbrot::{escape_time, iterations_at, ESCAPE_RADIUS_SQ};
pub use request::RenderRequest;
pub use viewport::Viewport;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
