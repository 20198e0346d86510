// ============================================================================
// RASTERIZATION
// ============================================================================

use rusttype::{point, Font, PositionedGlyph, Scale};
use std::path::{Path, PathBuf};

use crate::config::Color;
use crate::error::{KnobError, KnobResult};
use crate::geometry::Point;
use crate::scene::{DrawCommand, Scene};

/// Fonts tried when no font path is configured.
pub const FALLBACK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub fn load_font(path: &Path) -> KnobResult<Font<'static>> {
    let data = std::fs::read(path).map_err(|source| KnobError::FontRead {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(data).ok_or_else(|| KnobError::FontParse {
        path: path.to_path_buf(),
    })
}

/// Loads the configured font, or the first fallback font that parses.
pub fn find_font(configured: Option<&Path>) -> KnobResult<Font<'static>> {
    if let Some(path) = configured {
        return load_font(path);
    }
    FALLBACK_FONT_PATHS
        .iter()
        .map(PathBuf::from)
        .filter(|path| path.exists())
        .find_map(|path| match load_font(&path) {
            Ok(font) => {
                log::debug!("Using font {:?}", path);
                Some(font)
            }
            Err(e) => {
                log::debug!("Skipping font: {}", e);
                None
            }
        })
        .ok_or(KnobError::NoFont)
}

/// RGBA frame borrowed from the pixel buffer.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        let height = height.min(frame.len() / (width.max(1) * 4));
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            let mut out = [0; 4];
            out.copy_from_slice(&self.frame[idx..idx + 4]);
            Some(out)
        } else {
            None
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let a = alpha.clamp(0.0, 1.0);
        let src = [color.r as f32, color.g as f32, color.b as f32];
        let dst = [
            self.frame[idx] as f32,
            self.frame[idx + 1] as f32,
            self.frame[idx + 2] as f32,
        ];
        let out = [
            (src[0] * a + dst[0] * (1.0 - a)).round() as u8,
            (src[1] * a + dst[1] * (1.0 - a)).round() as u8,
            (src[2] * a + dst[2] * (1.0 - a)).round() as u8,
            0xff,
        ];
        self.frame[idx..idx + 4].copy_from_slice(&out);
    }

    /// Filled, anti-aliased disc.
    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let (min_x, max_x, min_y, max_y) = bounds(center, radius + 1.0);
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dist = distance(center, x, y);
                let aa = (radius + 0.5 - dist).clamp(0.0, 1.0);
                if aa > 0.0 {
                    self.set_pixel(x, y, color, aa);
                }
            }
        }
    }

    /// Anti-aliased circle outline with the stroke centered on `radius`.
    pub fn stroke_circle(&mut self, center: Point, radius: f32, stroke_width: f32, color: Color) {
        let half = stroke_width / 2.0;
        if radius <= 0.0 || half <= 0.0 {
            return;
        }
        let (min_x, max_x, min_y, max_y) = bounds(center, radius + half + 1.0);
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dist = distance(center, x, y);
                let aa = (half + 0.5 - (dist - radius).abs()).clamp(0.0, 1.0);
                if aa > 0.0 {
                    self.set_pixel(x, y, color, aa);
                }
            }
        }
    }

    /// Draws `text` horizontally centered on `x` with its baseline at `y`.
    pub fn draw_text(&mut self, font: &Font, x: f32, y: f32, text: &str, size: f32, color: Color) {
        let scale = Scale::uniform(size);
        let glyphs: Vec<PositionedGlyph> = font.layout(text, scale, point(0.0, 0.0)).collect();
        let (min_x, max_x) = glyphs
            .iter()
            .filter_map(|g| g.pixel_bounding_box())
            .fold((i32::MAX, i32::MIN), |(min_x, max_x), bb| {
                (min_x.min(bb.min.x), max_x.max(bb.max.x))
            });
        if min_x >= max_x {
            return;
        }
        let offset_x = x.round() as i32 - (max_x - min_x) / 2 - min_x;
        let baseline = y.round() as i32;
        for glyph in &glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    self.set_pixel(
                        offset_x + bb.min.x + gx as i32,
                        baseline + bb.min.y + gy as i32,
                        color,
                        v,
                    );
                });
            }
        }
    }
}

fn bounds(center: Point, reach: f32) -> (i32, i32, i32, i32) {
    (
        (center.x - reach).floor() as i32,
        (center.x + reach).ceil() as i32,
        (center.y - reach).floor() as i32,
        (center.y + reach).ceil() as i32,
    )
}

// Distance from the center of pixel (x, y).
fn distance(center: Point, x: i32, y: i32) -> f32 {
    let dx = x as f32 + 0.5 - center.x;
    let dy = y as f32 + 0.5 - center.y;
    (dx * dx + dy * dy).sqrt()
}

impl Scene {
    /// Rasterizes the scene. Text is skipped when no font is available.
    pub fn render(&self, canvas: &mut Canvas, font: Option<&Font>) {
        for command in self.commands() {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::Ring {
                    center,
                    radius,
                    stroke_width,
                    color,
                } => canvas.stroke_circle(*center, *radius, *stroke_width, *color),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => canvas.fill_circle(*center, *radius, *color),
                DrawCommand::Text {
                    x,
                    y,
                    text,
                    font_size,
                    color,
                } => {
                    if let Some(font) = font {
                        canvas.draw_text(font, *x, *y, text, *font_size, *color);
                    }
                }
            }
        }
    }
}
