use super::{
    action::Direction,
    config::GameConfig,
    state::{GameState, Position, Snake},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Result of a game tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    /// Whether the snake moved this tick
    pub advanced: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Whether this tick ended the game
    pub game_over: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine, seeded from the config when it carries a seed
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a game engine with a fixed seed
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the start-of-game state
    pub fn reset(&mut self) -> GameState {
        let width = self.config.grid_width();
        let height = self.config.grid_height();
        let center = Position::new((width / 2) as i32, (height / 2) as i32);

        let food = self.random_cell();
        let mut state = GameState::new(Snake::new(center, Direction::Right), food, width, height);
        state.pending_food = Some(self.random_cell());
        state.show_next_food = self.config.show_next_food;

        info!(width, height, "new game");
        state
    }

    /// Reset `state` in place, keeping the player's next-food display choice
    pub fn restart(&mut self, state: &mut GameState) {
        let show_next_food = state.show_next_food;
        *state = self.reset();
        state.show_next_food = show_next_food;
    }

    /// Advance the game if it is neither paused nor over
    pub fn update(&mut self, state: &mut GameState) -> TickResult {
        if !state.is_running() {
            return TickResult::default();
        }
        self.tick(state)
    }

    /// Execute one step of the game
    pub fn tick(&mut self, state: &mut GameState) -> TickResult {
        if !state.is_running() {
            return TickResult::default();
        }

        // Reversals are dropped, not deferred
        if let Some(next) = state.direction_queue.pop_front() {
            if !state.snake.direction.is_opposite(next) {
                state.snake.direction = next;
            }
        }

        let new_head = state.snake.head().wrapped_step(
            state.snake.direction,
            state.grid_width,
            state.grid_height,
        );
        state.snake.body.push_front(new_head);

        let ate_food = new_head == state.food;
        if ate_food {
            state.score += 1;
            state.food = match state.pending_food.take() {
                Some(pending) => pending,
                None => self.random_cell(),
            };
            state.pending_food = Some(self.random_cell());
            debug!(score = state.score, x = new_head.x, y = new_head.y, "food eaten");
        } else {
            state.snake.body.pop_back();
        }

        state.steps += 1;

        if state.snake.collides_with_body(new_head) {
            state.game_over = true;
            info!(score = state.score, steps = state.steps, "game over");
        }

        TickResult {
            advanced: true,
            ate_food,
            game_over: state.game_over,
        }
    }

    /// Queue a direction change; ignored while paused, over, or with a full queue
    pub fn enqueue_direction(&self, state: &mut GameState, direction: Direction) -> bool {
        let accepted = state.enqueue_direction(direction);
        if !accepted {
            debug!(?direction, "direction dropped");
        }
        accepted
    }

    /// Flip the pause flag; a finished game cannot be paused
    pub fn toggle_pause(&self, state: &mut GameState) -> bool {
        if !state.game_over {
            state.paused = !state.paused;
            debug!(paused = state.paused, "pause toggled");
        }
        state.paused
    }

    pub fn set_show_next_food(&self, state: &mut GameState, show: bool) {
        state.show_next_food = show;
        debug!(show, "next food display");
    }

    /// Uniformly random cell anywhere on the grid
    fn random_cell(&mut self) -> Position {
        let x = self.rng.gen_range(0..self.config.grid_width()) as i32;
        let y = self.rng.gen_range(0..self.config.grid_height()) as i32;
        Position::new(x, y)
    }
}
