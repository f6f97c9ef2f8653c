use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{
    config::{FoodSpawn, GameConfig},
    heading::Heading,
    state::{Cell, CollisionType, GameState, Snake, Status},
};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred this step
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game is over after this step
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle() -> Self {
        Self {
            terminated: true,
            info: StepInfo {
                ate_food: false,
                collision_type: None,
            },
        }
    }
}

/// The simulation engine. Sole owner of the game state.
///
/// Steering only records a pending heading; it is committed by the next
/// [`advance`](GameEngine::advance). The self-collision check runs against the
/// whole pre-step body, head included, so reversing into the neck is fatal.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    state: GameState,
    pending_heading: Heading,
}

impl GameEngine {
    /// Create a new engine in the initial configuration
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = initial_state(&config, &mut rng);

        Self {
            pending_heading: state.heading,
            config,
            rng,
            state,
        }
    }

    /// Create an engine that continues from an explicit state.
    ///
    /// The grid size always comes from `config`, overriding `state.grid_size`.
    pub fn from_state(config: GameConfig, mut state: GameState) -> Self {
        state.grid_size = config.grid_size;
        let mut engine = Self::new(config);
        engine.pending_heading = state.heading;
        engine.state = state;
        engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn is_terminated(&self) -> bool {
        self.state.terminated
    }

    pub fn pending_heading(&self) -> Heading {
        self.pending_heading
    }

    /// Record the heading used by the next step, replacing any earlier request
    pub fn set_heading(&mut self, heading: Heading) {
        self.pending_heading = heading;
    }

    /// Reinitialize the whole state
    pub fn reset(&mut self) {
        self.state = initial_state(&self.config, &mut self.rng);
        self.pending_heading = self.state.heading;
        info!(food = ?self.state.food, "game reset");
    }

    /// Execute one step of the game
    pub fn advance(&mut self) -> StepResult {
        if self.state.terminated {
            return StepResult::idle();
        }

        self.state.heading = self.pending_heading;
        let new_head = self.state.snake.head().stepped(self.state.heading);

        if let Some(collision_type) = self.check_collision(new_head) {
            self.state.terminated = true;
            debug!(?collision_type, ?new_head, length = self.state.snake.len(), "collision");

            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision_type: Some(collision_type),
                },
            };
        }

        let ate_food = new_head == self.state.food;
        self.state.snake.advance_to(new_head, ate_food);

        if ate_food {
            self.state.food = spawn_food(
                &mut self.rng,
                self.config.food_spawn,
                &self.state.snake,
                self.config.grid_size,
            );
            debug!(food = ?self.state.food, length = self.state.snake.len(), "food eaten");
        }

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_food,
                collision_type: None,
            },
        }
    }

    fn check_collision(&self, cell: Cell) -> Option<CollisionType> {
        if !self.state.is_in_bounds(cell) {
            return Some(CollisionType::Wall);
        }

        if self.state.snake.contains(cell) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}

fn initial_state(config: &GameConfig, rng: &mut StdRng) -> GameState {
    let snake = Snake::new(config.center(), Heading::Right, 1);
    let food = spawn_food(rng, config.food_spawn, &snake, config.grid_size);

    GameState::new(snake, food, Heading::Right, config.grid_size)
}

/// Pick a food cell according to `policy`.
///
/// `AvoidSnake` falls back to the whole grid when the snake covers every cell.
fn spawn_food(rng: &mut StdRng, policy: FoodSpawn, snake: &Snake, grid_size: usize) -> Cell {
    let size = grid_size as i32;

    if policy == FoodSpawn::AvoidSnake {
        let free: Vec<Cell> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Cell::new(x, y)))
            .filter(|cell| !snake.contains(*cell))
            .collect();

        if !free.is_empty() {
            return free[rng.gen_range(0..free.len())];
        }
    }

    Cell::new(rng.gen_range(0..size), rng.gen_range(0..size))
}
