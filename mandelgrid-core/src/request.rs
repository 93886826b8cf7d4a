use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;
use crate::limits::RenderLimits;
use crate::viewport::Viewport;

/// Immutable snapshot of everything one render needs.
///
/// Renders take a request by reference instead of a live viewport, so the
/// caller may keep navigating while a render runs elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub width: u32,
    pub height: u32,
    pub max_iter: u32,
    pub viewport: Viewport,
}

impl RenderRequest {
    pub fn new(width: u32, height: u32, max_iter: u32, viewport: Viewport) -> crate::Result<Self> {
        let request = Self {
            width,
            height,
            max_iter,
            viewport,
        };
        request.validate(&RenderLimits::default())?;
        Ok(request)
    }

    /// Build a request from the raw collaborator scalars.
    pub fn from_bounds(
        width: u32,
        height: u32,
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
        max_iter: u32,
    ) -> crate::Result<Self> {
        Self::new(width, height, max_iter, Viewport::new(xmin, ymin, xmax, ymax)?)
    }

    /// Number of cells in the grid this request produces.
    ///
    /// `None` if `width × height` overflows `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Reject malformed requests and oversized grids before any work starts.
    pub fn validate(&self, limits: &RenderLimits) -> crate::Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_iter == 0 {
            return Err(CoreError::InvalidMaxIterations(self.max_iter));
        }
        self.viewport.validate()?;
        match self.cell_count() {
            Some(cells) if cells <= limits.max_cells => Ok(()),
            _ => {
                debug!(
                    width = self.width,
                    height = self.height,
                    limit = limits.max_cells,
                    "Rejecting oversized grid"
                );
                Err(CoreError::AllocationError {
                    width: self.width,
                    height: self.height,
                    limit: limits.max_cells,
                })
            }
        }
    }
}
