//! Launcher drag geometry.
//!
//! The launcher is anchored to the bottom-right corner, so positions are offsets from the
//! right and bottom edges of the viewport.

/// Launcher width and height in CSS pixels.
pub const LAUNCHER_SIZE: f64 = 60.0;

/// Closest the launcher may get to any viewport edge.
pub const EDGE_MARGIN: f64 = 20.0;

/// How long after a drag the launcher ignores clicks.
pub const CLICK_SUPPRESS_MS: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Offset of the launcher from the bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub right: f64,
    pub bottom: f64,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            right: EDGE_MARGIN,
            bottom: EDGE_MARGIN,
        }
    }
}

fn clamp_axis(offset: f64, extent: f64) -> f64 {
    EDGE_MARGIN.max(offset.min(extent - LAUNCHER_SIZE - EDGE_MARGIN))
}

/// Keep the launcher fully on screen with a margin on every side.
///
/// A viewport too small to honour both margins pins the launcher to the minimum offset.
pub fn clamp_position(position: Position, viewport: Viewport) -> Position {
    Position {
        right: clamp_axis(position.right, viewport.width),
        bottom: clamp_axis(position.bottom, viewport.height),
    }
}

/// Where the launcher lands when the pointer is at `pointer`, having been grabbed `grab`
/// pixels from its top-left corner.
pub fn position_from_pointer(pointer: Point, grab: Point, viewport: Viewport) -> Position {
    clamp_position(
        Position {
            right: viewport.width - pointer.x + grab.x - LAUNCHER_SIZE,
            bottom: viewport.height - pointer.y + grab.y - LAUNCHER_SIZE,
        },
        viewport,
    )
}

/// State of a single press-move-release gesture on the launcher.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    grab: Option<Point>,
    moved: bool,
}

impl DragTracker {
    pub fn press(&mut self, grab: Point) {
        self.grab = Some(grab);
        self.moved = false;
    }

    pub fn is_pressed(&self) -> bool {
        self.grab.is_some()
    }

    /// New launcher position for a pointer move, or `None` when nothing is pressed.
    pub fn drag_to(&mut self, pointer: Point, viewport: Viewport) -> Option<Position> {
        let grab = self.grab?;

        self.moved = true;

        Some(position_from_pointer(pointer, grab, viewport))
    }

    /// End the gesture. Returns `true` when the launcher was actually dragged, in which case
    /// the click that follows the release must not toggle the chat window.
    pub fn release(&mut self) -> bool {
        let dragged = self.is_pressed() && self.moved;

        *self = Self::default();

        dragged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn positions_inside_bounds_are_kept() {
        let position = Position {
            right: 300.0,
            bottom: 200.0,
        };

        assert_eq!(clamp_position(position, DESKTOP), position);
    }

    #[test]
    fn positions_are_clamped_to_margins() {
        let too_far = Position {
            right: 5000.0,
            bottom: -40.0,
        };

        assert_eq!(
            clamp_position(too_far, DESKTOP),
            Position {
                right: 1280.0 - 60.0 - 20.0,
                bottom: 20.0,
            }
        );
    }

    #[test]
    fn tiny_viewports_pin_to_minimum_margin() {
        let tiny = Viewport {
            width: 70.0,
            height: 50.0,
        };

        assert_eq!(
            clamp_position(Position::default(), tiny),
            Position::default()
        );
    }

    #[test]
    fn pointer_maps_to_offset_from_bottom_right() {
        // Grabbed at the launcher's centre, dropped at (1000, 600).
        let position = position_from_pointer(
            Point {
                x: 1000.0,
                y: 600.0,
            },
            Point { x: 30.0, y: 30.0 },
            DESKTOP,
        );

        assert_eq!(
            position,
            Position {
                right: 250.0,
                bottom: 170.0,
            }
        );
    }

    #[test]
    fn plain_click_is_not_a_drag() {
        let mut tracker = DragTracker::default();

        tracker.press(Point { x: 10.0, y: 10.0 });

        assert!(!tracker.release(), "press and release without moving is a click");
        assert!(!tracker.is_pressed(), "release should end the gesture");
    }

    #[test]
    fn moving_while_pressed_is_a_drag() {
        let mut tracker = DragTracker::default();

        assert_eq!(
            tracker.drag_to(Point { x: 500.0, y: 500.0 }, DESKTOP),
            None
        );

        tracker.press(Point { x: 10.0, y: 10.0 });

        assert!(
            tracker
                .drag_to(Point { x: 500.0, y: 500.0 }, DESKTOP)
                .is_some(),
            "pressed tracker should produce a position"
        );
        assert!(tracker.release(), "moving before release is a drag");
        assert!(!tracker.release(), "a second release has nothing to end");
    }
}
