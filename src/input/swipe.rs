use crate::game::Direction;

/// A point in canvas units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert a terminal cell to canvas units
    ///
    /// Each grid cell is drawn two columns wide and one row tall.
    pub fn from_terminal(column: u16, row: u16, cell_size: u32) -> Self {
        let cell = cell_size as f32;
        Self {
            x: column as f32 * cell / 2.0,
            y: row as f32 * cell,
        }
    }
}

/// Turns a drag gesture into direction changes
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<Point>,
    min_distance: f32,
}

impl SwipeTracker {
    pub fn new(min_distance: f32) -> Self {
        Self {
            start: None,
            min_distance,
        }
    }

    /// Start a gesture at `point`
    pub fn begin(&mut self, point: Point) {
        self.start = Some(point);
    }

    /// End the current gesture
    pub fn end(&mut self) {
        self.start = None;
    }

    /// Feed the current pointer position
    ///
    /// Returns a direction when one axis strictly dominates and its
    /// displacement exceeds the minimum distance. The gesture restarts from
    /// `point` either way, so a long drag can yield several turns.
    pub fn track(&mut self, point: Point) -> Option<Direction> {
        let start = self.start?;
        self.start = Some(point);
        let dx = point.x - start.x;
        let dy = point.y - start.y;

        if dx.abs() > dy.abs() && dx.abs() > self.min_distance {
            Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
        } else if dy.abs() > dx.abs() && dy.abs() > self.min_distance {
            Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_at(x: f32, y: f32) -> SwipeTracker {
        let mut tracker = SwipeTracker::new(15.0);
        tracker.begin(Point::new(x, y));
        tracker
    }

    #[test]
    fn test_dominant_axis() {
        assert_eq!(tracker_at(0.0, 0.0).track(Point::new(20.0, 5.0)), Some(Direction::Right));
        assert_eq!(tracker_at(0.0, 0.0).track(Point::new(-20.0, 5.0)), Some(Direction::Left));
        assert_eq!(tracker_at(0.0, 0.0).track(Point::new(3.0, 16.0)), Some(Direction::Down));
        assert_eq!(tracker_at(0.0, 0.0).track(Point::new(3.0, -16.0)), Some(Direction::Up));
    }

    #[test]
    fn test_short_moves_and_ties_ignored() {
        assert_eq!(tracker_at(0.0, 0.0).track(Point::new(15.0, 0.0)), None);
        assert_eq!(tracker_at(0.0, 0.0).track(Point::new(30.0, 30.0)), None);
    }

    #[test]
    fn test_start_follows_pointer() {
        let mut tracker = tracker_at(0.0, 0.0);

        assert_eq!(tracker.track(Point::new(10.0, 0.0)), None);
        // Only 10 units from the previous point
        assert_eq!(tracker.track(Point::new(20.0, 0.0)), None);
        assert_eq!(tracker.track(Point::new(40.0, 0.0)), Some(Direction::Right));
        assert_eq!(tracker.track(Point::new(40.0, 20.0)), Some(Direction::Down));
    }

    #[test]
    fn test_no_gesture_without_begin() {
        let mut tracker = SwipeTracker::new(15.0);
        assert_eq!(tracker.track(Point::new(100.0, 0.0)), None);

        tracker.begin(Point::new(0.0, 0.0));
        tracker.end();
        assert_eq!(tracker.track(Point::new(100.0, 0.0)), None);
    }

    #[test]
    fn test_terminal_cells_to_canvas() {
        assert_eq!(Point::from_terminal(4, 3, 20), Point::new(40.0, 60.0));

        // One row of drag covers a whole cell
        let mut tracker = SwipeTracker::new(15.0);
        tracker.begin(Point::from_terminal(10, 10, 20));
        assert_eq!(tracker.track(Point::from_terminal(10, 11, 20)), Some(Direction::Down));
    }
}
