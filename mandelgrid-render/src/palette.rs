use rayon::prelude::*;
use tracing::debug;

use crate::grid::IterationGrid;
use crate::image::ColorGrid;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Reserved color for cells that never escaped.
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA bytes.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// `#rrggbb` in lowercase hex.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fully saturated, full-value hue for `t ∈ [0, 1]`.
///
/// `t` sweeps the six hue sectors red → yellow → green → cyan → blue →
/// magenta → red. Channels are truncated to 8 bits, not rounded, so a
/// channel only reaches 255 at exactly 1.0.
pub fn hue_color(t: f64) -> Color {
    let h = 6.0 * t;
    let x = 1.0 - ((h % 2.0) - 1.0).abs();
    let (r, g, b) = match h {
        h if (0.0..1.0).contains(&h) => (1.0, x, 0.0),
        h if (1.0..2.0).contains(&h) => (x, 1.0, 0.0),
        h if (2.0..3.0).contains(&h) => (0.0, 1.0, x),
        h if (3.0..4.0).contains(&h) => (0.0, x, 1.0),
        h if (4.0..5.0).contains(&h) => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    Color::new(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Color table indexed by escape count, `max_iter + 1` entries long.
///
/// Entry `i` is the hue at `i / max_iter`; the last entry is always
/// [`Color::BLACK`] for cells that hit the iteration cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    max_iter: u32,
    colors: Vec<Color>,
}

impl Palette {
    pub fn build(max_iter: u32) -> Self {
        let mut colors: Vec<Color> = (0..=max_iter)
            .map(|i| {
                let t = if max_iter > 0 {
                    i as f64 / max_iter as f64
                } else {
                    0.0
                };
                hue_color(t)
            })
            .collect();
        colors[max_iter as usize] = Color::BLACK;
        debug!(max_iter, "Built palette");
        Self { max_iter, colors }
    }

    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color for an escape count, clamped into `[0, max_iter]`.
    ///
    /// Out-of-range counts take the inside color rather than failing.
    #[inline]
    pub fn color_for(&self, iteration: u32) -> Color {
        self.colors[iteration.min(self.max_iter) as usize]
    }

    /// Map every cell of `grid` to its color, keeping the grid's layout.
    pub fn colorize(&self, grid: &IterationGrid) -> ColorGrid {
        let pixels = grid.data.par_iter().map(|&n| self.color_for(n)).collect();
        ColorGrid {
            width: grid.width,
            height: grid.height,
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_entry_is_black() {
        for max_iter in [0, 1, 2, 10, 255, 500] {
            let p = Palette::build(max_iter);
            assert_eq!(p.len(), max_iter as usize + 1);
            assert_eq!(p.color_for(max_iter), Color::BLACK);
        }
    }

    #[test]
    fn first_entry_is_red() {
        assert_eq!(Palette::build(50).color_for(0), Color::new(255, 0, 0));
    }

    #[test]
    fn hue_sectors() {
        assert_eq!(hue_color(0.0), Color::new(255, 0, 0));
        assert_eq!(hue_color(0.25), Color::new(127, 255, 0));
        assert_eq!(hue_color(0.5), Color::new(0, 255, 255));
        assert_eq!(hue_color(0.75), Color::new(127, 0, 255));
        assert_eq!(hue_color(1.0), Color::new(255, 0, 0));
    }

    #[test]
    fn channels_truncate() {
        // 0.3 · 255 = 76.5 and 0.12 · 255 = 30.6, both rounded down.
        assert_eq!(hue_color(0.05).g, 76);
        assert_eq!(hue_color(0.02).g, 30);
    }

    #[test]
    fn out_of_range_iteration_is_clamped() {
        let p = Palette::build(10);
        assert_eq!(p.color_for(11), Color::BLACK);
        assert_eq!(p.color_for(u32::MAX), Color::BLACK);
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(Palette::build(300), Palette::build(300));
    }

    #[test]
    fn zero_max_iter_is_all_black() {
        let p = Palette::build(0);
        assert_eq!(p.colors(), &[Color::BLACK]);
    }

    #[test]
    fn hex_format() {
        assert_eq!(Color::new(255, 8, 171).hex(), "#ff08ab");
    }

    #[test]
    fn colorize_preserves_layout() {
        let grid = IterationGrid {
            width: 3,
            height: 2,
            max_iter: 6,
            data: vec![0, 1, 6, 3, 9, 2],
        };
        let p = Palette::build(6);
        let img = p.colorize(&grid);
        assert_eq!(img.width, 3);
        assert_eq!(img.height, 2);
        let expected: Vec<Color> = grid.data.iter().map(|&n| p.color_for(n)).collect();
        assert_eq!(img.pixels, expected);
        assert_eq!(img.get(1, 1), Some(Color::BLACK));
    }
}
