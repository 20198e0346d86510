//! Drag recognition for mouse and touch input.
//!
//! A press only arms the recognizer. Movement turns into drag-change events
//! once the pointer has left the touch-slop circle around the press point,
//! and every later movement is reported until the pointer is released.

use crate::geometry::Point;

/// Which pointer is driving the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerId {
    Mouse,
    Touch(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Pressed { pointer: PointerId, origin: Point },
    Dragging { pointer: PointerId },
}

#[derive(Debug, Clone)]
pub struct DragGesture {
    slop: f32,
    phase: Phase,
}

impl DragGesture {
    /// `slop` is in physical pixels.
    pub fn new(slop: f32) -> Self {
        Self {
            slop: slop.max(0.0),
            phase: Phase::Idle,
        }
    }

    pub fn set_slop(&mut self, slop: f32) {
        self.slop = slop.max(0.0);
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Arms the recognizer. Ignored while another pointer is being tracked.
    pub fn press(&mut self, pointer: PointerId, position: Point) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Pressed {
                pointer,
                origin: position,
            };
        }
    }

    /// Returns the position to apply when this movement is a drag-change.
    pub fn moved(&mut self, pointer: PointerId, position: Point) -> Option<Point> {
        match self.phase {
            Phase::Pressed { pointer: p, origin } if p == pointer => {
                let dx = position.x - origin.x;
                let dy = position.y - origin.y;
                if (dx * dx + dy * dy).sqrt() > self.slop {
                    self.phase = Phase::Dragging { pointer };
                    Some(position)
                } else {
                    None
                }
            }
            Phase::Dragging { pointer: p } if p == pointer => Some(position),
            _ => None,
        }
    }

    /// Ends the gesture if `pointer` is the one being tracked.
    pub fn release(&mut self, pointer: PointerId) {
        match self.phase {
            Phase::Pressed { pointer: p, .. } | Phase::Dragging { pointer: p } if p == pointer => {
                self.phase = Phase::Idle;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_inside_slop_is_ignored() {
        let mut gesture = DragGesture::new(8.0);
        gesture.press(PointerId::Mouse, Point::new(100.0, 100.0));
        assert_eq!(gesture.moved(PointerId::Mouse, Point::new(103.0, 104.0)), None);
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn test_drag_starts_after_slop() {
        let mut gesture = DragGesture::new(8.0);
        gesture.press(PointerId::Mouse, Point::new(100.0, 100.0));
        assert_eq!(
            gesture.moved(PointerId::Mouse, Point::new(110.0, 100.0)),
            Some(Point::new(110.0, 100.0))
        );
        assert!(gesture.is_dragging());
        // Once dragging, small movements are reported too.
        assert_eq!(
            gesture.moved(PointerId::Mouse, Point::new(111.0, 100.0)),
            Some(Point::new(111.0, 100.0))
        );
    }

    #[test]
    fn test_hover_without_press_is_ignored() {
        let mut gesture = DragGesture::new(8.0);
        assert_eq!(gesture.moved(PointerId::Mouse, Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_release_ends_drag() {
        let mut gesture = DragGesture::new(0.0);
        gesture.press(PointerId::Mouse, Point::new(0.0, 0.0));
        assert!(gesture.moved(PointerId::Mouse, Point::new(1.0, 0.0)).is_some());
        gesture.release(PointerId::Mouse);
        assert!(!gesture.is_dragging());
        assert_eq!(gesture.moved(PointerId::Mouse, Point::new(2.0, 0.0)), None);
    }

    #[test]
    fn test_second_finger_is_ignored() {
        let mut gesture = DragGesture::new(8.0);
        gesture.press(PointerId::Touch(1), Point::new(100.0, 100.0));
        gesture.press(PointerId::Touch(2), Point::new(0.0, 0.0));
        assert_eq!(gesture.moved(PointerId::Touch(2), Point::new(50.0, 50.0)), None);
        assert!(gesture.moved(PointerId::Touch(1), Point::new(120.0, 100.0)).is_some());

        gesture.release(PointerId::Touch(2));
        assert!(gesture.is_dragging());
        gesture.release(PointerId::Touch(1));
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn test_negative_slop_is_zero() {
        let mut gesture = DragGesture::new(-5.0);
        gesture.press(PointerId::Mouse, Point::new(10.0, 10.0));
        assert_eq!(gesture.moved(PointerId::Mouse, Point::new(10.0, 10.0)), None);
        assert!(gesture.moved(PointerId::Mouse, Point::new(10.5, 10.0)).is_some());
    }
}
