//! Character-grid rendering (rows top to bottom, y = 0 at the bottom).

use std::fmt;

use super::omino::Shape;
use super::types::Point;
use crate::transform;

/// Which box the rendering covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Frame {
    /// The `size × size` box of the linear encoding.
    #[default]
    Square,
    /// Only the tight bounding box.
    Tight,
}

/// Rendering configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderCfg {
    pub filled: char,
    pub empty: char,
    pub frame: Frame,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            filled: '#',
            empty: '.',
            frame: Frame::Square,
        }
    }
}

impl Shape {
    /// Render the corner-anchored cells; every row ends with `\n`.
    pub fn render(&self, cfg: RenderCfg) -> String {
        let points = transform::anchored(self.points());
        let (width, height) = match cfg.frame {
            Frame::Square => (self.size(), self.size()),
            Frame::Tight => self.bounding_box(),
        };
        let mut out = String::with_capacity((width + 1) * height);
        for y in (0..height as i32).rev() {
            for x in 0..width as i32 {
                if points.contains(&Point::new(x, y)) {
                    out.push(cfg.filled);
                } else {
                    out.push(cfg.empty);
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderCfg::default()))
    }
}
