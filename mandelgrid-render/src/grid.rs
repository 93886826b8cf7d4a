use mandelgrid_core::{CoreError, RenderRequest};

/// Per-pixel escape counts for one frame, row-major (`y * width + x`).
///
/// Every entry lies in `[0, max_iter]`; `max_iter` marks presumed members of
/// the set. Kept separate from colors so the palette can change without
/// re-rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    pub width: u32,
    pub height: u32,
    pub max_iter: u32,
    pub data: Vec<u32>,
}

impl IterationGrid {
    /// Allocate a zeroed grid sized for `request`.
    ///
    /// Allocation failure surfaces as [`CoreError::AllocationError`] instead
    /// of aborting the process.
    pub fn try_for_request(request: &RenderRequest, limit: usize) -> crate::Result<Self> {
        let alloc_err = || CoreError::AllocationError {
            width: request.width,
            height: request.height,
            limit,
        };
        let len = request.cell_count().ok_or_else(alloc_err)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| alloc_err())?;
        data.resize(len, 0);
        Ok(Self {
            width: request.width,
            height: request.height,
            max_iter: request.max_iter,
            data,
        })
    }

    /// Flat index of pixel `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Escape count at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(self.index(x, y)).copied()
    }

    /// One row of the grid, left to right.
    pub fn row(&self, y: u32) -> Option<&[u32]> {
        if y >= self.height {
            return None;
        }
        let start = self.index(0, y);
        self.data.get(start..start + self.width as usize)
    }

    /// Rows top to bottom. Empty when `width` is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        let rows = if self.width == 0 { 0 } else { self.height as usize };
        self.data.chunks_exact(self.width.max(1) as usize).take(rows)
    }

    /// Number of cells that hit the iteration cap.
    pub fn interior_count(&self) -> usize {
        self.data.iter().filter(|&&n| n == self.max_iter).count()
    }
}
