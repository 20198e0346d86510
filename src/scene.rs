// ============================================================================
// RETAINED MODE SCENE
// ============================================================================

use crate::config::{Color, KnobConfig, KNOB_COLOR};
use crate::geometry::{self, KnobState, Point, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    /// Stroked circle; the stroke is centered on `radius`.
    Ring {
        center: Point,
        radius: f32,
        stroke_width: f32,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Color,
    },
    /// Horizontally centered text with its baseline at `y`.
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        color: Color,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

/// Builds the frame for `state` on a surface of the given size.
///
/// `scale_factor` converts the label size from points to pixels.
pub fn build_scene(
    state: &KnobState,
    config: &KnobConfig,
    surface: Surface,
    scale_factor: f64,
) -> Scene {
    let mut scene = Scene::new();
    scene.add_command(DrawCommand::Clear(config.background_color));

    let center = surface.center();
    let radius = config.resolve_radius(surface.width);

    scene.add_command(DrawCommand::Ring {
        center,
        radius,
        stroke_width: radius * geometry::RING_STROKE_FACTOR,
        color: config.ring_color,
    });

    let degree_between_dots = config.degree_between_dots();
    let dot_distance = radius * geometry::DOT_ORBIT_FACTOR;
    for (index, degree) in geometry::dot_degrees(config.dot_count())
        .into_iter()
        .enumerate()
    {
        let selected = state.is_dot_selected(index, degree_between_dots);
        let (color, dot_radius) = if selected {
            (config.selected_dot_color, config.selected_dot_radius)
        } else {
            (config.unselected_dot_color, config.unselected_dot_radius)
        };
        scene.add_command(DrawCommand::Circle {
            center: geometry::orbit(center, dot_distance, degree as f64),
            radius: dot_radius,
            color,
        });
    }

    scene.add_command(DrawCommand::Circle {
        center: state.knob_position(center, radius),
        radius: config.knob_radius,
        color: KNOB_COLOR,
    });

    scene.add_command(DrawCommand::Text {
        x: center.x,
        y: center.y,
        text: state.volume_text(),
        font_size: config.label_size * scale_factor as f32,
        color: config.label_color,
    });

    scene
}
