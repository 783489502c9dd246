use std::collections::VecDeque;

use super::action::Direction;

/// Maximum number of direction changes waiting for a tick
pub const MAX_QUEUED_DIRECTIONS: usize = 2;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position in a direction on a `width` x `height` torus
    pub fn wrapped_step(&self, direction: Direction, width: usize, height: usize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx).rem_euclid(width as i32),
            y: (self.y + dy).rem_euclid(height as i32),
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: VecDeque<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a snake of length 1
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([head]),
            direction,
        }
    }

    /// Create a snake from explicit segments, head first
    pub fn from_segments(segments: impl IntoIterator<Item = Position>, direction: Direction) -> Self {
        let body: VecDeque<Position> = segments.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body.iter().skip(1).any(|&segment| segment == pos)
    }

    /// Check if position is any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Pre-generated next food
    pub pending_food: Option<Position>,
    pub direction_queue: VecDeque<Direction>,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub game_over: bool,
    pub paused: bool,
    /// Display toggle for `pending_food`
    pub show_next_food: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            pending_food: None,
            direction_queue: VecDeque::with_capacity(MAX_QUEUED_DIRECTIONS),
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            game_over: false,
            paused: false,
            show_next_food: false,
        }
    }

    /// Whether ticks currently advance the simulation
    pub fn is_running(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Whether a direction change would be queued right now
    pub fn accepts_direction(&self) -> bool {
        self.is_running() && self.direction_queue.len() < MAX_QUEUED_DIRECTIONS
    }

    /// Queue a direction change; returns false if it was dropped
    ///
    /// Directions equal to the current heading or its reverse are still
    /// queued. They are filtered when the tick applies them.
    pub fn enqueue_direction(&mut self, direction: Direction) -> bool {
        if !self.accepts_direction() {
            return false;
        }
        self.direction_queue.push_back(direction);
        true
    }

    /// Pending food, if the display toggle allows showing it
    pub fn visible_pending_food(&self) -> Option<Position> {
        if self.show_next_food && !self.game_over {
            self.pending_food
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right),
            Position::new(1, 1),
            10,
            10,
        )
    }

    #[test]
    fn test_wrapped_step_all_edges() {
        let (w, h) = (10, 8);
        assert_eq!(
            Position::new(9, 3).wrapped_step(Direction::Right, w, h),
            Position::new(0, 3)
        );
        assert_eq!(
            Position::new(0, 3).wrapped_step(Direction::Left, w, h),
            Position::new(9, 3)
        );
        assert_eq!(
            Position::new(4, 7).wrapped_step(Direction::Down, w, h),
            Position::new(4, 0)
        );
        assert_eq!(
            Position::new(4, 0).wrapped_step(Direction::Up, w, h),
            Position::new(4, 7)
        );
        assert_eq!(
            Position::new(4, 4).wrapped_step(Direction::Up, w, h),
            Position::new(4, 3)
        );
    }

    #[test]
    fn test_snake_from_segments() {
        let snake = Snake::from_segments(
            [Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Right,
        );
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::from_segments(
            [Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Right,
        );
        assert!(!snake.collides_with_body(Position::new(5, 5))); // head
        assert!(snake.collides_with_body(Position::new(4, 5))); // body
        assert!(!snake.collides_with_body(Position::new(9, 9))); // empty
        assert!(snake.occupies(Position::new(5, 5)));
    }

    #[test]
    fn test_queue_bound() {
        let mut state = state();
        assert!(state.enqueue_direction(Direction::Up));
        assert!(state.enqueue_direction(Direction::Left));
        assert!(!state.enqueue_direction(Direction::Down));
        assert_eq!(
            state.direction_queue,
            VecDeque::from([Direction::Up, Direction::Left])
        );
    }

    #[test]
    fn test_enqueue_is_permissive() {
        let mut state = state();
        // Same heading and its reverse are both kept until the tick
        assert!(state.enqueue_direction(Direction::Right));
        assert!(state.enqueue_direction(Direction::Left));
        assert_eq!(state.direction_queue.len(), 2);
    }

    #[test]
    fn test_enqueue_rejected_when_paused_or_over() {
        let mut state = state();
        state.paused = true;
        assert!(!state.enqueue_direction(Direction::Up));

        state.paused = false;
        state.game_over = true;
        assert!(!state.enqueue_direction(Direction::Up));
        assert!(state.direction_queue.is_empty());
    }

    #[test]
    fn test_visible_pending_food() {
        let mut state = state();
        state.pending_food = Some(Position::new(2, 2));
        assert_eq!(state.visible_pending_food(), None);

        state.show_next_food = true;
        assert_eq!(state.visible_pending_food(), Some(Position::new(2, 2)));

        state.game_over = true;
        assert_eq!(state.visible_pending_food(), None);
    }
}
