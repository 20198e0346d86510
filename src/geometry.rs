//! Angle math for the knob: pointer position to knob angle, the normalized
//! progress angle, and where dots and the handle sit on the ring.

pub const MIN_DOT_COUNT: usize = 2;
pub const MAX_DOT_COUNT: usize = 40;

/// Angular position of the first dot (top of the circle, screen coordinates).
pub const FIRST_DOT_DEGREE: f32 = 270.0;

pub const RING_STROKE_FACTOR: f32 = 0.08;
pub const AUTO_RADIUS_FACTOR: f32 = 0.35;
pub const DOT_ORBIT_FACTOR: f32 = 0.85;
pub const KNOB_ORBIT_FACTOR: f32 = 0.55;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

pub fn clamp_dot_count(requested: i32) -> usize {
    if requested < MIN_DOT_COUNT as i32 {
        MIN_DOT_COUNT
    } else if requested > MAX_DOT_COUNT as i32 {
        MAX_DOT_COUNT
    } else {
        requested as usize
    }
}

pub fn degree_between_dots(dot_count: usize) -> f32 {
    360.0 / dot_count as f32
}

/// A zero ring radius means "35% of the surface width".
pub fn resolve_radius(configured: f32, surface_width: f32) -> f32 {
    if configured == 0.0 {
        surface_width * AUTO_RADIUS_FACTOR
    } else {
        configured
    }
}

/// Angle of `position` around `center` in degrees.
///
/// The frame is rotated relative to the usual `atan2(dy, dx)`: 0 points
/// straight up and positive angles run clockwise on screen, so the result
/// lines up with the handle, which is drawn at `angle - 90`.
pub fn touch_angle(center: Point, position: Point) -> f64 {
    let angle = (center.x - position.x).atan2(center.y - position.y)
        * (180.0 / std::f32::consts::PI)
        * -1.0;
    angle as f64
}

/// Point at `distance` from `center` along `degree` (screen coordinates).
pub fn orbit(center: Point, distance: f32, degree: f64) -> Point {
    let radians = degree.to_radians();
    Point::new(
        ((distance as f64) * radians.cos() + center.x as f64) as f32,
        ((distance as f64) * radians.sin() + center.y as f64) as f32,
    )
}

/// Knob angle plus the progress angle derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KnobState {
    /// Raw drag angle in degrees, `(-180, 180]`.
    pub knob_degree: f64,
    /// Progress on a `[0, 360)` scale, used for dot selection and the label.
    pub selected_dot_angle: f64,
}

impl KnobState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a drag-change at `position` and returns the new volume.
    pub fn drag_to(&mut self, center: Point, position: Point) -> f64 {
        self.set_knob_degree(touch_angle(center, position));
        self.volume_percent()
    }

    /// Stores the knob angle and updates the progress angle.
    ///
    /// Positive angles leave `selected_dot_angle` untouched: the right half
    /// of the dial moves the handle but keeps the previous progress.
    pub fn set_knob_degree(&mut self, degree: f64) {
        self.knob_degree = degree;
        if self.knob_degree == 0.0 {
            self.selected_dot_angle = 0.0;
        } else if self.knob_degree < 0.0 {
            self.selected_dot_angle = 180.0;
            self.selected_dot_angle += 180.0 + self.knob_degree;
        }
    }

    pub fn volume_percent(&self) -> f64 {
        volume_percent(self.selected_dot_angle)
    }

    pub fn volume_text(&self) -> String {
        format_volume(self.volume_percent())
    }

    pub fn is_dot_selected(&self, index: usize, degree_between_dots: f32) -> bool {
        ((index as f32 * degree_between_dots) as f64) < self.selected_dot_angle
    }

    pub fn knob_position(&self, center: Point, radius: f32) -> Point {
        orbit(center, radius * KNOB_ORBIT_FACTOR, self.knob_degree - 90.0)
    }
}

pub fn volume_percent(selected_dot_angle: f64) -> f64 {
    (selected_dot_angle * 100.0) / 360.0
}

pub fn format_volume(percent: f64) -> String {
    format!("%{:.1}", percent)
}

/// Angular positions of each dot, starting at the top and wrapping at 360.
pub fn dot_degrees(dot_count: usize) -> Vec<f32> {
    let step = degree_between_dots(dot_count);
    let mut degree = FIRST_DOT_DEGREE;
    let mut degrees = Vec::with_capacity(dot_count);
    for _ in 0..dot_count {
        if degree >= 360.0 {
            degree -= 360.0;
        }
        degrees.push(degree);
        degree += step;
    }
    degrees
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const CENTER: Point = Point::new(150.0, 150.0);

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn test_clamp_dot_count() {
        assert_eq!(clamp_dot_count(i32::MIN), 2);
        assert_eq!(clamp_dot_count(0), 2);
        assert_eq!(clamp_dot_count(1), 2);
        assert_eq!(clamp_dot_count(2), 2);
        assert_eq!(clamp_dot_count(17), 17);
        assert_eq!(clamp_dot_count(40), 40);
        assert_eq!(clamp_dot_count(41), 40);
        assert_eq!(clamp_dot_count(i32::MAX), 40);
    }

    #[test]
    fn test_clamp_dot_count_random() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let requested: i32 = rng.random_range(-1000..1000);
            let count = clamp_dot_count(requested);
            assert!((MIN_DOT_COUNT..=MAX_DOT_COUNT).contains(&count));
            if (2..=40).contains(&requested) {
                assert_eq!(count, requested as usize);
            }
        }
    }

    #[test]
    fn test_degree_between_dots() {
        for count in MIN_DOT_COUNT..=MAX_DOT_COUNT {
            assert_eq!(degree_between_dots(count), 360.0 / count as f32);
        }
        assert_eq!(degree_between_dots(4), 90.0);
    }

    #[test]
    fn test_resolve_radius() {
        assert!((resolve_radius(0.0, 300.0) - 105.0).abs() < 1e-4);
        assert!((resolve_radius(60.0, 300.0) - 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_touch_angle_orientation() {
        assert_close(touch_angle(CENTER, Point::new(150.0, 50.0)), 0.0);
        assert_close(touch_angle(CENTER, Point::new(250.0, 150.0)), 90.0);
        assert_close(touch_angle(CENTER, Point::new(50.0, 150.0)), -90.0);
        assert_close(touch_angle(CENTER, Point::new(250.0, 250.0)), 135.0);
        assert_close(touch_angle(CENTER, Point::new(50.0, 50.0)), -45.0);
        assert_close(touch_angle(CENTER, Point::new(150.0, 250.0)).abs(), 180.0);
    }

    #[test]
    fn test_normalize_zero() {
        let mut state = KnobState {
            knob_degree: -30.0,
            selected_dot_angle: 330.0,
        };
        state.set_knob_degree(0.0);
        assert_eq!(state.selected_dot_angle, 0.0);
    }

    #[test]
    fn test_normalize_negative() {
        let mut state = KnobState::new();
        state.set_knob_degree(-90.0);
        assert_close(state.selected_dot_angle, 270.0);
        state.set_knob_degree(-180.0);
        assert_close(state.selected_dot_angle, 180.0);
        state.set_knob_degree(-0.5);
        assert_close(state.selected_dot_angle, 359.5);
    }

    // Positive knob angles keep the previous progress value.
    #[test]
    fn test_normalize_positive_keeps_previous_value() {
        let mut state = KnobState::new();
        state.set_knob_degree(90.0);
        assert_eq!(state.knob_degree, 90.0);
        assert_eq!(state.selected_dot_angle, 0.0);

        state.set_knob_degree(-60.0);
        assert_close(state.selected_dot_angle, 300.0);
        state.set_knob_degree(45.0);
        assert_eq!(state.knob_degree, 45.0);
        assert_close(state.selected_dot_angle, 300.0);
    }

    #[test]
    fn test_volume_text() {
        assert_eq!(format_volume(volume_percent(180.0)), "%50.0");
        assert_eq!(format_volume(volume_percent(360.0)), "%100.0");
        assert_eq!(format_volume(volume_percent(0.0)), "%0.0");
        assert_eq!(format_volume(volume_percent(270.0)), "%75.0");
    }

    #[test]
    fn test_dot_selection() {
        let state = KnobState {
            knob_degree: -180.0,
            selected_dot_angle: 180.0,
        };
        let step = degree_between_dots(4);
        let selected: Vec<bool> = (0..4).map(|i| state.is_dot_selected(i, step)).collect();
        assert_eq!(selected, vec![true, true, false, false]);
    }

    #[test]
    fn test_no_dot_selected_at_zero() {
        let state = KnobState::new();
        let step = degree_between_dots(30);
        assert!((0..30).all(|i| !state.is_dot_selected(i, step)));
    }

    #[test]
    fn test_dot_degrees_wrap() {
        assert_eq!(dot_degrees(4), vec![270.0, 0.0, 90.0, 180.0]);
        let degrees = dot_degrees(30);
        assert_eq!(degrees.len(), 30);
        assert!(degrees.iter().all(|d| (0.0..360.0).contains(d)));
        assert_eq!(degrees[0], 270.0);
    }

    #[test]
    fn test_knob_position() {
        let mut state = KnobState::new();
        let top = state.knob_position(CENTER, 100.0);
        assert!((top.x - 150.0).abs() < 1e-3);
        assert!((top.y - 95.0).abs() < 1e-3);

        state.set_knob_degree(90.0);
        let right = state.knob_position(CENTER, 100.0);
        assert!((right.x - 205.0).abs() < 1e-3);
        assert!((right.y - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_knob_follows_pointer() {
        let mut state = KnobState::new();
        state.drag_to(CENTER, Point::new(60.0, 150.0));
        let knob = state.knob_position(CENTER, 100.0);
        assert!((knob.x - 95.0).abs() < 1e-3);
        assert!((knob.y - 150.0).abs() < 1e-3);
        assert_close(state.volume_percent(), 75.0);
    }

    #[test]
    fn test_drag_is_idempotent() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let position = Point::new(
                rng.random_range(0.0..300.0),
                rng.random_range(0.0..300.0),
            );
            let mut state = KnobState::new();
            let first_value = state.drag_to(CENTER, position);
            let first = state;
            let second_value = state.drag_to(CENTER, position);
            assert_eq!(first, state);
            assert_eq!(first_value, second_value);
        }
    }
}
