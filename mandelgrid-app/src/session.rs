use std::time::Duration;

use tracing::debug;

use mandelgrid_core::{CoreError, RenderRequest, Viewport};
use mandelgrid_render::{render_with_cancel, ColorGrid, IterationGrid, Palette, RenderCancel};

use crate::command::Command;
use crate::settings::{clamp_max_iter, Settings};

/// A finished frame: escape counts plus their colors.
pub struct Frame {
    pub request: RenderRequest,
    pub grid: IterationGrid,
    pub image: ColorGrid,
    pub elapsed: Duration,
}

/// Owns the live viewport and produces frames from immutable snapshots.
///
/// Each navigation step replaces the viewport wholesale, and every render
/// starts from scratch. The palette is cached and only rebuilt when the
/// iteration cap changes.
pub struct RenderSession {
    settings: Settings,
    viewport: Viewport,
    palette: Option<Palette>,
    cancel: RenderCancel,
}

impl RenderSession {
    pub fn new(settings: Settings) -> Self {
        let settings = settings.sanitized();
        Self {
            viewport: settings.viewport,
            settings,
            palette: None,
            cancel: RenderCancel::new(),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn zoom(&mut self, factor: f64) -> Result<(), CoreError> {
        self.viewport.zoom(factor)
    }

    pub fn pan(&mut self, fx: f64, fy: f64) -> Result<(), CoreError> {
        self.viewport.pan(fx, fy)
    }

    pub fn recenter(&mut self, x: f64, y: f64) -> Result<(), CoreError> {
        self.viewport.recenter(x, y)
    }

    /// Centre on the clicked pixel and halve both spans.
    pub fn click_zoom(&mut self, px: u32, py: u32) -> Result<(), CoreError> {
        self.viewport =
            self.viewport
                .zoomed_at_pixel(px, py, self.settings.width, self.settings.height)?;
        Ok(())
    }

    pub fn set_max_iter(&mut self, max_iter: u32) {
        self.settings.max_iter = clamp_max_iter(max_iter);
    }

    pub fn apply(&mut self, command: Command) -> Result<(), CoreError> {
        debug!(?command, "Applying navigation command");
        match command {
            Command::Zoom(f) => self.zoom(f),
            Command::Pan(fx, fy) => self.pan(fx, fy),
            Command::Recenter(x, y) => self.recenter(x, y),
            Command::Click(px, py) => self.click_zoom(px, py),
            Command::MaxIter(n) => {
                self.set_max_iter(n);
                Ok(())
            }
        }
    }

    /// Snapshot of the current state for one render.
    pub fn request(&self) -> Result<RenderRequest, CoreError> {
        let request = RenderRequest {
            width: self.settings.width,
            height: self.settings.height,
            max_iter: self.settings.max_iter,
            viewport: self.viewport,
        };
        request.validate(&self.settings.limits)?;
        Ok(request)
    }

    /// Palette for the current iteration cap, rebuilt only when it changed.
    pub fn palette(&mut self) -> &Palette {
        let max_iter = self.settings.max_iter;
        if self.palette.as_ref().map(Palette::max_iter) != Some(max_iter) {
            self.palette = None;
        }
        self.palette
            .get_or_insert_with(|| Palette::build(max_iter))
    }

    pub fn render(&mut self) -> mandelgrid_render::Result<Frame> {
        let request = self.request()?;
        let result = render_with_cancel(&request, &self.settings.limits, &self.cancel)?;
        let image = self.palette().colorize(&result.grid);
        Ok(Frame {
            request,
            grid: result.grid,
            image,
            elapsed: result.elapsed,
        })
    }
}
