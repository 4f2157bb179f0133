// File: ./src/tui/starfield.rs
// Decorative background: stars drifting upwards, one step per frame.
use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Position as a fraction of the drawing area, both in [0, 1).
    pub x: f64,
    pub y: f64,
    /// Fraction of the area height travelled per frame.
    pub speed: f64,
    /// 0.3 - 1.0, picks the glyph and shade.
    pub brightness: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                speed: rng.gen_range(0.0003..0.0015),
                brightness: rng.gen_range(0.3..1.0),
            })
            .collect();
        Self { stars }
    }

    /// Moves every star up; stars leaving the top re-enter at the bottom
    /// at a random column.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for star in &mut self.stars {
            star.y -= star.speed;
            if star.y < 0.0 {
                star.y = (star.y + 1.0).min(1.0 - f64::EPSILON);
                star.x = rng.gen_range(0.0..1.0);
            }
        }
    }
}

impl Widget for &Starfield {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for star in &self.stars {
            let col = area.x + ((star.x * area.width as f64) as u16).min(area.width - 1);
            let row = area.y + ((star.y * area.height as f64) as u16).min(area.height - 1);
            let (glyph, shade) = if star.brightness > 0.8 {
                ('*', Color::White)
            } else if star.brightness > 0.55 {
                ('·', Color::Gray)
            } else {
                ('.', Color::DarkGray)
            };
            if let Some(cell) = buf.cell_mut((col, row)) {
                cell.set_char(glyph).set_fg(shade);
            }
        }
    }
}
