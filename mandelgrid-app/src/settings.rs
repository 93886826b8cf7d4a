use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use mandelgrid_core::{RenderLimits, Viewport};

/// Smallest grid side the session will render.
pub const MIN_DIMENSION: u32 = 50;
/// Smallest iteration cap the session will render with.
pub const MIN_MAX_ITER: u32 = 10;
/// Largest iteration cap; bounds the palette at about 30 MB of colors.
pub const MAX_MAX_ITER: u32 = 10_000_000;

/// Clamp an iteration cap into `[MIN_MAX_ITER, MAX_MAX_ITER]`.
pub fn clamp_max_iter(max_iter: u32) -> u32 {
    if max_iter > MAX_MAX_ITER {
        warn!(max_iter, "Iteration cap above {MAX_MAX_ITER}, clamping");
    }
    max_iter.clamp(MIN_MAX_ITER, MAX_MAX_ITER)
}

/// Session settings, read from a JSON file.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_max_iter")]
    pub max_iter: u32,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub limits: RenderLimits,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_max_iter() -> u32 {
    500
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            max_iter: default_max_iter(),
            viewport: Viewport::default(),
            limits: RenderLimits::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!("No settings file at {}", path.display());
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => error!("Failed to parse settings: {e}"),
            },
            Err(e) => error!("Failed to read settings file: {e}"),
        }
        Self::default()
    }

    /// Apply the floor on grid size and the bounds on the iteration cap.
    pub fn sanitized(mut self) -> Self {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            warn!(
                width = self.width,
                height = self.height,
                "Grid smaller than {MIN_DIMENSION}px, clamping"
            );
        }
        self.width = self.width.max(MIN_DIMENSION);
        self.height = self.height.max(MIN_DIMENSION);
        self.max_iter = clamp_max_iter(self.max_iter);
        self
    }
}
