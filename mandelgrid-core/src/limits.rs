use serde::{Deserialize, Serialize};

/// Resource limits applied before a grid is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderLimits {
    /// Maximum `width × height` a single render may allocate.
    #[serde(default = "default_max_cells")]
    pub max_cells: usize,
}

fn default_max_cells() -> usize {
    RenderLimits::DEFAULT_MAX_CELLS
}

impl RenderLimits {
    /// 2²⁷ cells: 512 MiB of `u32` iteration counts.
    pub const DEFAULT_MAX_CELLS: usize = 1 << 27;

    pub fn new(max_cells: usize) -> Self {
        Self { max_cells }
    }
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            max_cells: Self::DEFAULT_MAX_CELLS,
        }
    }
}
