use bon::Builder;
use std::path::PathBuf;

use crate::geometry;

/// Color representation for knob elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const GREEN: Color = Color::new(0x00, 0xff, 0x00);
    pub const RED: Color = Color::new(0xff, 0x00, 0x00);
    pub const GRAY: Color = Color::new(0x88, 0x88, 0x88);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Knob handle color. Independent of the configured dot colors.
pub const KNOB_COLOR: Color = Color::GREEN;

/// Appearance and window settings for a [`crate::Knob`].
///
/// Every field has a default, so `KnobConfig::builder().build()` gives the
/// stock 30-dot knob.
#[derive(Debug, Clone, Builder)]
pub struct KnobConfig {
    // Dots
    /// Requested number of dots. Clamped to `[2, 40]` when used.
    #[builder(default = 30)]
    pub dot_count_size: i32,
    #[builder(default = Color::GREEN)]
    pub selected_dot_color: Color,
    #[builder(default = Color::RED)]
    pub unselected_dot_color: Color,
    #[builder(default = 20.0)]
    pub selected_dot_radius: f32,
    #[builder(default = 10.0)]
    pub unselected_dot_radius: f32,

    // Ring
    #[builder(default = Color::GRAY)]
    pub ring_color: Color,
    /// Ring radius in pixels; `0.0` means 35% of the surface width.
    #[builder(default = 0.0)]
    pub ring_radius: f32,

    // Knob handle
    #[builder(default = 50.0)]
    pub knob_radius: f32,

    // Label
    #[builder(default = Color::WHITE)]
    pub label_color: Color,
    /// Label size in points, multiplied by the window scale factor.
    #[builder(default = 30.0)]
    pub label_size: f32,
    pub font_path: Option<PathBuf>,

    // Window configuration
    #[builder(into, default = "Volume".to_string())]
    pub title: String,
    #[builder(default = 400)]
    pub window_width: usize,
    #[builder(default = 400)]
    pub window_height: usize,
    #[builder(default = Color::new(0x12, 0x12, 0x12))]
    pub background_color: Color,

    // Input
    /// Logical pixels a pointer must travel before movement counts as a drag.
    #[builder(default = 8.0)]
    pub touch_slop: f32,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl KnobConfig {
    pub fn dot_count(&self) -> usize {
        geometry::clamp_dot_count(self.dot_count_size)
    }

    pub fn degree_between_dots(&self) -> f32 {
        geometry::degree_between_dots(self.dot_count())
    }

    pub fn resolve_radius(&self, surface_width: f32) -> f32 {
        geometry::resolve_radius(self.ring_radius, surface_width)
    }
}
