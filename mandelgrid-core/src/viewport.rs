use crate::complex::Complex;
use crate::error::CoreError;

/// The rectangle of the complex plane mapped onto the pixel grid.
///
/// Bounds are always finite with `xmin < xmax` and `ymin < ymax`; every
/// constructor and transform checks this before committing. Transforms that
/// receive bad arguments return an error and leave the viewport untouched.
///
/// Pixel row 0 maps to `ymin`, so increasing pixel-y moves towards `ymax`.
/// Callers wanting a mathematical (upward) y-axis swap the bounds themselves.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Viewport {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

/// Re-validates bounds on load so a settings file cannot produce a
/// degenerate viewport.
impl<'de> serde::Deserialize<'de> for Viewport {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            xmin: f64,
            ymin: f64,
            xmax: f64,
            ymax: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Viewport::new(raw.xmin, raw.ymin, raw.xmax, raw.ymax).map_err(serde::de::Error::custom)
    }
}

impl Viewport {
    /// Absolute floor on the span a zoom-in may produce.
    ///
    /// Around `|c| ≈ 2` this is still a few hundred ULPs wide. Far from the
    /// origin [`min_span_at`](Self::min_span_at) raises the floor so that
    /// both bounds stay distinct `f64` values.
    pub const MIN_SPAN: f64 = 1e-13;

    /// Smallest span a zoom-in may produce on an axis centred at `coord`.
    ///
    /// The larger of [`MIN_SPAN`](Self::MIN_SPAN) and 64 ULPs of `coord`.
    pub fn min_span_at(coord: f64) -> f64 {
        Self::MIN_SPAN.max(coord.abs() * f64::EPSILON * 64.0)
    }

    /// Reject a shrunken span below the floor for its centre coordinate.
    fn check_shrunk_span(axis: char, span: f64, coord: f64) -> crate::Result<()> {
        let floor = Self::min_span_at(coord);
        if span < floor {
            return Err(CoreError::viewport(format!(
                "{axis} span {span:e} would fall below the minimum {floor:e}"
            )));
        }
        Ok(())
    }

    /// Create a viewport from explicit bounds.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> crate::Result<Self> {
        let vp = Self {
            xmin,
            ymin,
            xmax,
            ymax,
        };
        vp.validate()?;
        Ok(vp)
    }

    /// Build a viewport from a centre point and full spans.
    pub fn from_center(center: Complex, x_span: f64, y_span: f64) -> crate::Result<Self> {
        let (hw, hh) = (x_span / 2.0, y_span / 2.0);
        Self::new(center.re - hw, center.im - hh, center.re + hw, center.im + hh)
    }

    /// Check the bounds invariant.
    pub fn validate(&self) -> crate::Result<()> {
        let bounds = [self.xmin, self.ymin, self.xmax, self.ymax];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(CoreError::viewport(format!(
                "bounds must be finite, got x [{}, {}] y [{}, {}]",
                self.xmin, self.xmax, self.ymin, self.ymax
            )));
        }
        if self.xmin >= self.xmax {
            return Err(CoreError::viewport(format!(
                "xmin ({}) must be < xmax ({})",
                self.xmin, self.xmax
            )));
        }
        if self.ymin >= self.ymax {
            return Err(CoreError::viewport(format!(
                "ymin ({}) must be < ymax ({})",
                self.ymin, self.ymax
            )));
        }
        if !self.x_span().is_finite() || !self.y_span().is_finite() {
            return Err(CoreError::viewport("span overflows f64"));
        }
        Ok(())
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// `(xmin, ymin, xmax, ymax)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.xmin, self.ymin, self.xmax, self.ymax)
    }

    #[inline]
    pub fn x_span(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[inline]
    pub fn y_span(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn center(&self) -> Complex {
        Complex::new(
            (self.xmin + self.xmax) / 2.0,
            (self.ymin + self.ymax) / 2.0,
        )
    }

    /// Map a pixel to its plane coordinate for a `width × height` grid.
    ///
    /// Linear in both axes: `x = xmin + x_span · px / width`, and likewise
    /// for `y`. Pixel `(0, 0)` lands exactly on `(xmin, ymin)`.
    #[inline]
    pub fn pixel_to_plane(&self, px: u32, py: u32, width: u32, height: u32) -> Complex {
        Complex::new(
            self.xmin + self.x_span() * (px as f64 / width as f64),
            self.ymin + self.y_span() * (py as f64 / height as f64),
        )
    }

    /// Move the centre to `(x, y)`, keeping both spans.
    pub fn recenter(&mut self, x: f64, y: f64) -> crate::Result<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(CoreError::viewport(format!(
                "recenter target must be finite, got ({x}, {y})"
            )));
        }
        let next = Self::from_center(Complex::new(x, y), self.x_span(), self.y_span())?;
        *self = next;
        Ok(())
    }

    /// Scale both spans by `factor` around the current centre.
    ///
    /// `factor < 1` zooms in, `factor > 1` zooms out. A zoom-in that would
    /// take either span below [`min_span_at`](Self::min_span_at) is refused
    /// rather than clamped, so every zoom that succeeds scales exactly and
    /// `zoom(f)` followed by `zoom(1 / f)` restores the bounds.
    pub fn zoom(&mut self, factor: f64) -> crate::Result<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(CoreError::viewport(format!(
                "zoom factor must be positive and finite, got {factor}"
            )));
        }
        let center = self.center();
        let x_span = self.x_span() * factor;
        let y_span = self.y_span() * factor;
        if factor < 1.0 {
            Self::check_shrunk_span('x', x_span, center.re)?;
            Self::check_shrunk_span('y', y_span, center.im)?;
        }
        let next = Self::from_center(center, x_span, y_span)?;
        *self = next;
        Ok(())
    }

    /// Shift the rectangle by `fx` of its width and `fy` of its height.
    pub fn pan(&mut self, fx: f64, fy: f64) -> crate::Result<()> {
        if !fx.is_finite() || !fy.is_finite() {
            return Err(CoreError::viewport(format!(
                "pan fractions must be finite, got ({fx}, {fy})"
            )));
        }
        let dx = self.x_span() * fx;
        let dy = self.y_span() * fy;
        let next = Self::new(self.xmin + dx, self.ymin + dy, self.xmax + dx, self.ymax + dy)?;
        *self = next;
        Ok(())
    }

    /// Click-to-zoom: a new viewport centred on the clicked pixel with both
    /// spans halved.
    ///
    /// Computed from `self` in one step, so the result never depends on a
    /// half-applied recenter. Refused like [`zoom`](Self::zoom) when the
    /// halved spans would fall below the floor at the target.
    pub fn zoomed_at_pixel(&self, px: u32, py: u32, width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let target = self.pixel_to_plane(px, py, width, height);
        let (x_span, y_span) = (self.x_span() / 2.0, self.y_span() / 2.0);
        Self::check_shrunk_span('x', x_span, target.re)?;
        Self::check_shrunk_span('y', y_span, target.im)?;
        Self::from_center(target, x_span, y_span)
    }
}

impl Default for Viewport {
    /// The whole set with some margin: `[-2.5, 1.0] × [-1.25, 1.25]`.
    fn default() -> Self {
        Self {
            xmin: -2.5,
            ymin: -1.25,
            xmax: 1.0,
            ymax: 1.25,
        }
    }
}
