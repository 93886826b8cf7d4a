pub mod error;
pub mod grid;
pub mod image;
pub mod palette;
pub mod renderer;

pub use error::RenderError;
pub use grid::IterationGrid;
pub use image::ColorGrid;
pub use palette::{hue_color, Color, Palette};
pub use renderer::{render, render_with_cancel, RenderCancel, RenderResult};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
