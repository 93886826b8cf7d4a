use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use mandelgrid_core::{iterations_at, RenderLimits, RenderRequest};

use crate::error::RenderError;
use crate::grid::IterationGrid;

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

/// Cooperative cancellation and row progress for in-flight renders.
///
/// A render remembers the generation it started under and stops at the next
/// row boundary once the generation moves on. Cancelling therefore only
/// affects renders already running, never ones started afterwards.
#[derive(Debug)]
pub struct RenderCancel {
    generation: AtomicU64,
    rows_done: AtomicUsize,
    rows_total: AtomicUsize,
}

impl RenderCancel {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            rows_done: AtomicUsize::new(0),
            rows_total: AtomicUsize::new(0),
        }
    }

    /// Cancel every render currently running against this handle.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Read the current generation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn reset_progress(&self, total: usize) {
        self.rows_total.store(total, Ordering::Relaxed);
        self.rows_done.store(0, Ordering::Relaxed);
    }

    fn inc_progress(&self) {
        self.rows_done.fetch_add(1, Ordering::Relaxed);
    }

    /// Rows finished so far as `(done, total)`.
    pub fn progress(&self) -> (usize, usize) {
        (
            self.rows_done.load(Ordering::Relaxed),
            self.rows_total.load(Ordering::Relaxed),
        )
    }
}

impl Default for RenderCancel {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// A completed render: raw escape counts, no coloring.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub grid: IterationGrid,
    pub elapsed: Duration,
}

// ---------------------------------------------------------------------------
// Full-frame render
// ---------------------------------------------------------------------------

/// Render `request` with default limits and no external cancellation.
pub fn render(request: &RenderRequest) -> crate::Result<RenderResult> {
    render_with_cancel(request, &RenderLimits::default(), &RenderCancel::new())
}

/// Render `request`, splitting rows across the Rayon pool.
///
/// The request is validated against `limits` before the grid is allocated.
/// `cancel` is polled between rows; a cancelled render returns
/// [`RenderError::Cancelled`] and its partial grid is dropped.
pub fn render_with_cancel(
    request: &RenderRequest,
    limits: &RenderLimits,
    cancel: &RenderCancel,
) -> crate::Result<RenderResult> {
    request.validate(limits)?;

    let start = Instant::now();
    let gen = cancel.generation();
    let (xmin, ymin, xmax, ymax) = request.viewport.bounds();
    debug!(
        width = request.width,
        height = request.height,
        max_iter = request.max_iter,
        xmin,
        ymin,
        xmax,
        ymax,
        "Starting render"
    );

    let mut grid = IterationGrid::try_for_request(request, limits.max_cells)?;
    cancel.reset_progress(request.height as usize);

    let outcome = grid
        .data
        .par_chunks_mut(request.width as usize)
        .enumerate()
        .try_for_each(|(py, row)| {
            if cancel.generation() != gen {
                return Err(RenderError::Cancelled);
            }
            for (px, cell) in row.iter_mut().enumerate() {
                *cell = iterations_at(px as u32, py as u32, request);
            }
            cancel.inc_progress();
            Ok(())
        });

    let elapsed = start.elapsed();
    if let Err(e) = outcome {
        let (rows_done, rows_total) = cancel.progress();
        warn!(rows_done, rows_total, elapsed_ms = elapsed.as_millis(), "Render cancelled");
        return Err(e);
    }

    let interior = grid.interior_count();
    info!(
        elapsed_ms = elapsed.as_millis(),
        interior,
        escaped = grid.data.len() - interior,
        "Render complete"
    );

    Ok(RenderResult { grid, elapsed })
}
