use crate::palette::Color;

/// A colored frame, row-major and laid out exactly like the
/// [`IterationGrid`](crate::IterationGrid) it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ColorGrid {
    /// Color at `(x, y)`, or `None` outside the frame.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Rows top to bottom. Empty when `width` is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        let rows = if self.width == 0 { 0 } else { self.height as usize };
        self.pixels.chunks_exact(self.width.max(1) as usize).take(rows)
    }

    /// Flat RGBA bytes, 4 per pixel, for an image sink.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> ColorGrid {
        ColorGrid {
            width: 2,
            height: 2,
            pixels: vec![
                Color::new(255, 0, 0),
                Color::new(0, 255, 0),
                Color::new(0, 0, 255),
                Color::BLACK,
            ],
        }
    }

    #[test]
    fn rgba_bytes_follow_pixel_order() {
        assert_eq!(
            frame().to_rgba8(),
            vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 0, 0, 0, 255]
        );
    }

    #[test]
    fn zero_width_frame_has_no_rows() {
        let f = ColorGrid {
            width: 0,
            height: 2,
            pixels: vec![Color::BLACK; 2],
        };
        assert_eq!(f.rows().count(), 0);
        assert_eq!(f.get(0, 0), None);
    }

    #[test]
    fn get_and_rows_agree() {
        let f = frame();
        assert_eq!(f.get(0, 1), Some(Color::new(0, 0, 255)));
        assert_eq!(f.get(2, 0), None);
        let second: Vec<_> = f.rows().nth(1).unwrap().to_vec();
        assert_eq!(second, vec![Color::new(0, 0, 255), Color::BLACK]);
    }
}
